// UI module for rendering the TUI.
// Lays out the chrome around the active screen and draws each shop view.

mod account;
mod breadcrumb;
mod list;
mod modal;
mod tabs;

use std::collections::HashSet;

use ratatui::{prelude::*, widgets::*};
use rust_decimal::Decimal;

use crate::app::App;
use crate::catalog::{Product, format_price};
use crate::state::product::MAX_QUANTITY;
use crate::state::{
    CartLine, CatalogViewState, Coordinator, HomeState, ProductDetailState, ReviewField, Screen,
    SelectableList, Shortcut, ViewState, breadcrumbs, home,
};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let view = app.store.view();
    let navbar_height = if view.shows_navbar() { 3 } else { 0 };
    let footer_height = if view.shows_footer() { 1 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(navbar_height), // Navigation bar
            Constraint::Length(2),             // Breadcrumb
            Constraint::Min(1),                // Main content
            Constraint::Length(footer_height), // Footer
            Constraint::Length(1),             // Status bar
        ])
        .split(frame.area());

    if view.shows_navbar() {
        tabs::draw_navbar(frame, &app.store, chunks[0]);
    }

    let category = app.catalog.category.clone();
    let trail = breadcrumbs(view, app.store.selected_product(), &category);
    breadcrumb::draw_breadcrumb(frame, &trail, app.store.session().user(), chunks[1]);

    draw_content(frame, app, chunks[2]);

    if view.shows_footer() {
        draw_footer(frame, chunks[3]);
    }

    draw_status_bar(frame, app, chunks[4]);

    if let Some(message) = app.store.toast().visible_message() {
        modal::draw_toast(frame, message);
    }

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the main content area for the active screen.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    let store = &app.store;
    let pending = &app.pending_adds;

    match store.screen() {
        Screen::Home { trending } => draw_home(frame, &trending, &mut app.home, pending, area),
        Screen::Catalog { products, .. } => {
            draw_catalog(frame, products, &mut app.catalog, store, pending, area)
        }
        Screen::Product { product, stashed } => match app.product.as_ref() {
            Some(state) if state.is_for(product) => draw_product(
                frame,
                product,
                stashed,
                state,
                app.review_error.map(|e| e.to_string()),
                area,
            ),
            _ => list::render_empty(frame, area, "Loading product"),
        },
        Screen::Cart { lines, total } => draw_cart(frame, lines, total, &mut app.cart, area),
        Screen::Checkout {
            lines, subtotal, ..
        } => {
            let summary = app.checkout.summary(subtotal, &app.settings);
            account::draw_checkout(frame, lines, &app.checkout, &summary, area);
        }
        Screen::Login => account::draw_login(frame, &app.login, area),
        Screen::Register => account::draw_register(frame, &app.register, area),
        Screen::Profile { user } => match app.profile.as_mut() {
            Some(profile) => account::draw_profile(frame, user, profile, area),
            None => list::render_empty(frame, area, "Loading profile"),
        },
        Screen::Wishlist { products } => {
            draw_wishlist(frame, &products, &mut app.wishlist, pending, area)
        }
        Screen::Success => draw_success(frame, area),
        Screen::NotFound => draw_not_found(frame, area),
    }
}

/// Draw the landing page: hero, shortcut chips, and trending drops.
fn draw_home(
    frame: &mut Frame,
    trending: &[&Product],
    home: &mut HomeState,
    pending: &HashSet<String>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Hero
            Constraint::Length(3), // Shortcuts
            Constraint::Min(1),    // Trending
        ])
        .split(area);

    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            "FUTURE IS NOW",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Streetwear for the digital age. New drops every week.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(vec![
            Span::styled("v", Style::default().fg(Color::Yellow)),
            Span::styled(" shop the full inventory", Style::default().fg(Color::DarkGray)),
        ]),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(hero, chunks[0]);

    let chips = home::shortcuts();
    let mut spans = Vec::new();
    for (i, chip) in chips.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if i == home.shortcut {
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            match chip {
                Shortcut::Category(_) => Style::default().fg(Color::White),
                Shortcut::Brand(_) => Style::default().fg(Color::Cyan),
            }
        };
        spans.push(Span::styled(format!("[{}]", chip.label()), style));
    }
    let shortcuts = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" ←→ pick  g go "),
        );
    frame.render_widget(shortcuts, chunks[1]);

    let items: Vec<ListItem> = trending
        .iter()
        .map(|p| list::product_item(p, false, pending.contains(&p.id)))
        .collect();
    list::render_product_list(
        frame,
        items,
        " Trending Now ",
        &mut home.trending,
        chunks[2],
    );
}

/// Draw the catalog: filter summary on top, product list below.
fn draw_catalog(
    frame: &mut Frame,
    products: &[Product],
    state: &mut CatalogViewState,
    store: &Coordinator,
    pending: &HashSet<String>,
    area: Rect,
) {
    let (filter_area, list_area, search_area) = if state.search_active {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);
        (chunks[0], chunks[1], Some(chunks[2]))
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(area);
        (chunks[0], chunks[1], None)
    };

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);
    let filters = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                state.title().to_uppercase(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", state.sort.label()), label),
        ]),
        Line::from(vec![
            Span::styled("Category ", label),
            Span::styled(state.category.clone(), value),
            Span::styled("  Brand ", label),
            Span::styled(state.brand.clone(), value),
            Span::styled("  Max ", label),
            Span::styled(format!("${}", state.max_price), value),
            Span::styled(format!("/{}", state.ceiling()), label),
            Span::styled("  Search ", label),
            Span::styled(
                if state.search.is_empty() {
                    "-".to_string()
                } else {
                    state.search.clone()
                },
                value,
            ),
        ]),
    ]);
    frame.render_widget(filters, filter_area);

    let visible = state.visible(products);
    if visible.is_empty() {
        let block = Block::default().borders(Borders::ALL).title(" Results ");
        let text = Paragraph::new(vec![
            Line::from(Span::styled(
                "Nothing Found",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Press x to clear filters",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(text, list_area);
    } else {
        let items: Vec<ListItem> = visible
            .iter()
            .map(|p| {
                list::product_item(p, store.is_stashed(&p.id), pending.contains(&p.id))
            })
            .collect();
        let title = format!(" Results ({}) ", visible.len());
        list::render_product_list(frame, items, &title, &mut state.list, list_area);
    }

    if let Some(search_area) = search_area {
        let search_line = Line::from(vec![
            Span::styled("/", Style::default().fg(Color::Yellow)),
            Span::raw(state.search.as_str()),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ]);
        let search_widget = Paragraph::new(search_line).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(search_widget, search_area);
    }
}

/// Draw the product detail page.
fn draw_product(
    frame: &mut Frame,
    product: &Product,
    stashed: bool,
    state: &ProductDetailState,
    review_error: Option<String>,
    area: Rect,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left column: product info and purchase controls
    let dim = Style::default().fg(Color::DarkGray);
    let gallery = ProductDetailState::gallery(product);
    let image = gallery
        .get(state.gallery_index)
        .map(String::as_str)
        .unwrap_or("");

    let mut info = vec![
        Line::from(vec![
            Span::styled(
                product.name.to_uppercase(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                product.badge().unwrap_or(""),
                Style::default().fg(Color::Magenta),
            ),
        ]),
        Line::from(vec![
            Span::styled(format_price(product.price), Style::default().fg(Color::Green)),
            Span::styled(format!("  {} / {}", product.brand, product.category), dim),
        ]),
        Line::from(""),
        Line::from(product.description.clone()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Image ", dim),
            Span::raw(format!("{}/{} ", state.gallery_index + 1, gallery.len())),
            Span::styled(image.to_string(), dim),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Quantity ", dim),
            Span::styled(
                format!("- {} +", state.quantity),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(format!("  (max {})", MAX_QUANTITY), dim),
        ]),
    ];

    let add_line = if state.adding {
        Span::styled("⏳ ADDING...", Style::default().fg(Color::Yellow))
    } else {
        let line_total = product.price * Decimal::from(state.quantity);
        Span::styled(
            format!("ADD TO CART  {}", format_price(line_total)),
            Style::default().fg(Color::Green),
        )
    };
    info.push(Line::from(vec![Span::styled("a ", dim), add_line]));
    info.push(Line::from(vec![
        Span::styled("s ", dim),
        if stashed {
            Span::styled("♥ IN YOUR STASH", Style::default().fg(Color::Magenta))
        } else {
            Span::raw("♡ SAVE TO STASH")
        },
    ]));

    let info_widget = Paragraph::new(info)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Product "));
    frame.render_widget(info_widget, columns[0]);

    // Right column: review board and the optional review form
    let (reviews_area, form_area) = if state.writing_review {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(6)])
            .split(columns[1]);
        (chunks[0], Some(chunks[1]))
    } else {
        (columns[1], None)
    };

    let items: Vec<ListItem> = state
        .reviews
        .iter()
        .map(|review| {
            let stars = "★".repeat(review.rating as usize) + &"☆".repeat(5 - review.rating as usize);
            let mut header = vec![
                Span::styled(stars, Style::default().fg(Color::Yellow)),
                Span::raw(" "),
                Span::styled(
                    review.author.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {}", list::format_relative_time(&review.posted_at)),
                    dim,
                ),
            ];
            if review.verified {
                header.push(Span::styled(" ✓ verified", Style::default().fg(Color::Green)));
            }
            ListItem::new(vec![
                Line::from(header),
                Line::from(format!("  {}", review.text)),
            ])
        })
        .collect();

    let title = format!(
        " Reviews ({}) ★ {}  r write ",
        state.reviews.len(),
        state.average_rating()
    );
    let reviews = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(reviews, reviews_area);

    if let Some(form_area) = form_area {
        let field_style = |field: ReviewField| {
            if state.form.field == field {
                Style::default().fg(Color::Yellow)
            } else {
                dim
            }
        };
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Alias  ", field_style(ReviewField::Author)),
                Span::raw(state.form.author.as_str()),
            ]),
            Line::from(vec![
                Span::styled("Review ", field_style(ReviewField::Text)),
                Span::raw(state.form.text.as_str()),
            ]),
            Line::from(vec![
                Span::styled("Rating ", dim),
                Span::styled(
                    "★".repeat(state.form.rating as usize),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
        ];
        if let Some(error) = review_error {
            lines.push(Line::from(Span::styled(
                error,
                Style::default().fg(Color::Red),
            )));
        }
        let form = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Write a Review "),
        );
        frame.render_widget(form, form_area);
    }
}

/// Draw the cart lines and subtotal.
fn draw_cart(
    frame: &mut Frame,
    lines: &[CartLine],
    total: Decimal,
    list_state: &mut SelectableList,
    area: Rect,
) {
    if lines.is_empty() {
        let block = Block::default().borders(Borders::ALL).title(" Cart ");
        let text = Paragraph::new(vec![
            Line::from(Span::styled(
                "Your cart is empty.",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Press c to start shopping",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(text, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(area);

    let items: Vec<ListItem> = lines.iter().map(list::cart_item).collect();
    let title = format!(" Cart ({}) ", lines.len());
    list::render_product_list(frame, items, &title, list_state, chunks[0]);

    let subtotal = Paragraph::new(Line::from(vec![
        Span::styled("Subtotal ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format_price(total),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   ↵ checkout", Style::default().fg(Color::Yellow)),
    ]))
    .alignment(Alignment::Right)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(subtotal, chunks[1]);
}

/// Draw the stash.
fn draw_wishlist(
    frame: &mut Frame,
    products: &[&Product],
    list_state: &mut SelectableList,
    pending: &HashSet<String>,
    area: Rect,
) {
    if products.is_empty() {
        let block = Block::default().borders(Borders::ALL).title(" Stash ");
        let text = Paragraph::new(vec![
            Line::from(Span::styled(
                "Your Stash Is Empty.",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Press c to browse the full inventory",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = products
        .iter()
        .map(|p| list::product_item(p, true, pending.contains(&p.id)))
        .collect();
    let title = format!(" Stash ({}) ", products.len());
    list::render_product_list(frame, items, &title, list_state, area);
}

fn draw_success(frame: &mut Frame, area: Rect) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "✓ ORDER CONFIRMED",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Your gear is on the way. Track it from your profile."),
        Line::from(""),
        Line::from(vec![
            Span::styled("↵", Style::default().fg(Color::Yellow)),
            Span::styled(" view orders  ", Style::default().fg(Color::DarkGray)),
            Span::styled("c", Style::default().fg(Color::Yellow)),
            Span::styled(" keep shopping", Style::default().fg(Color::DarkGray)),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(text, area);
}

fn draw_not_found(frame: &mut Frame, area: Rect) {
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            "404",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("This page drifted off the grid."),
        Line::from(Span::styled(
            "Press Enter to return home",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(text, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Span::styled(
        "AICE_SHOP // streetwear terminal // all systems nominal",
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Key hints for the active view.
fn view_hints(app: &App, view: ViewState) -> Vec<(&'static str, &'static str)> {
    if app.is_typing(view) {
        return match view {
            ViewState::Login | ViewState::Register => vec![
                ("Tab", "Field"),
                ("↵", "Submit"),
                (
                    if view == ViewState::Login { "^R" } else { "^L" },
                    "Switch",
                ),
                ("Esc", "Home"),
            ],
            ViewState::Product => vec![
                ("Tab", "Field"),
                ("↑↓", "Rating"),
                ("↵", "Post"),
                ("Esc", "Cancel"),
            ],
            _ => vec![("↵/Esc", "Done")],
        };
    }

    let mut hints = match view {
        ViewState::Home => vec![
            ("↑↓", "Navigate"),
            ("↵", "View"),
            ("a", "Add"),
            ("s", "Stash"),
            ("g", "Shortcut"),
        ],
        ViewState::Catalog => vec![
            ("↑↓", "Navigate"),
            ("↵", "View"),
            ("a", "Add"),
            ("s", "Stash"),
            ("/", "Search"),
            ("c/b", "Filter"),
            ("[ ]", "Price"),
            ("o", "Sort"),
            ("x", "Reset"),
        ],
        ViewState::Product => vec![
            ("+/-", "Qty"),
            ("a", "Add"),
            ("s", "Stash"),
            ("←→", "Gallery"),
            ("r", "Review"),
        ],
        ViewState::Cart => vec![("↑↓", "Navigate"), ("d", "Remove"), ("↵", "Checkout")],
        ViewState::Checkout => vec![("s", "Shipping"), ("↵", "Pay")],
        ViewState::Profile => vec![
            ("↑↓", "Navigate"),
            ("↵", "Track"),
            ("e", "Edit"),
            ("l", "Log out"),
        ],
        ViewState::Wishlist => vec![
            ("↑↓", "Navigate"),
            ("↵", "View"),
            ("a", "Add"),
            ("s", "Unstash"),
        ],
        ViewState::Success => vec![("↵", "Orders"), ("c", "Shop")],
        ViewState::NotFound => vec![("↵", "Home")],
        ViewState::Login | ViewState::Register => vec![],
    };
    hints.extend([("Esc", "Back"), ("?", "Help"), ("q", "Quit")]);
    hints
}

/// Draw the status bar with keybinding hints and the cart total.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let view = app.store.screen().view();

    let mut spans = Vec::new();
    for (key, action) in view_hints(app, view) {
        spans.push(Span::raw(format!(" {} ", key)));
        spans.push(Span::styled(action, Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(" "));
    }

    let pending = app.pending_tasks();
    if pending > 0 {
        spans.push(Span::styled(
            format!(" ⏳ {} pending ", pending),
            Style::default().fg(Color::Yellow),
        ));
    }

    if !app.store.cart().is_empty() {
        spans.push(Span::styled(
            format!(" Cart: {}", format_price(app.store.cart_total())),
            Style::default().fg(Color::Green),
        ));
    }

    let status = Paragraph::new(Line::from(spans));
    frame.render_widget(status, area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create a centered popup
    let popup_width = 55;
    let popup_height = 21;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(
        popup_x,
        popup_y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<14}", k), Style::default().fg(Color::Cyan)),
            Span::raw(desc),
        ])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        key("↑/↓ or j/k", "Move through lists"),
        key("Enter", "Open / confirm"),
        key("Esc", "Dismiss toast / go back"),
        key("Tab 1-5", "Switch section"),
        key("a", "Add to cart"),
        key("s", "Toggle stash"),
        key("/", "Search the catalog"),
        key("c b", "Cycle category / brand"),
        key("[ ]", "Lower / raise max price"),
        key("o x", "Sort / reset filters"),
        key("+ -", "Change quantity"),
        key("r", "Write a review"),
        key("d", "Remove from cart"),
        key("?", "Show/hide this help"),
        key("q", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}
