// Account and checkout screens.
// Login and register forms, the profile page with order tracking, and payment.

use ratatui::{prelude::*, widgets::*};

use crate::catalog::{User, format_price};
use crate::state::account::OrderStatus;
use crate::state::{
    CartLine, CheckoutState, FormField, OrderSummary, PasswordStrength, ProfileState,
    ShippingMethod, TextForm,
};

fn field_label(field: FormField) -> &'static str {
    match field {
        FormField::Name => "Name",
        FormField::Email => "Email",
        FormField::Password => "Password",
        FormField::Address => "Address",
    }
}

/// Form rows, with the focused field highlighted and the password masked.
fn form_lines(form: &TextForm, focused: bool) -> Vec<Line<'static>> {
    form.fields()
        .iter()
        .map(|&field| {
            let active = focused && form.field == field;
            let value = match field {
                FormField::Password => "•".repeat(form.password.chars().count()),
                other => form.value(other).to_string(),
            };
            let label_style = if active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let mut spans = vec![
                Span::styled(format!("{:<10}", field_label(field)), label_style),
                Span::raw(value),
            ];
            if active {
                spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
            }
            Line::from(spans)
        })
        .collect()
}

/// A centered box of fixed size inside `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

pub fn draw_login(frame: &mut Frame, form: &TextForm, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "WELCOME BACK",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Any credentials work in this demo.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];
    lines.extend(form_lines(form, true));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("↵", Style::default().fg(Color::Yellow)),
        Span::styled(" log in   ", Style::default().fg(Color::DarkGray)),
        Span::styled("^R", Style::default().fg(Color::Yellow)),
        Span::styled(" create account", Style::default().fg(Color::DarkGray)),
    ]));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Log In "),
    );
    frame.render_widget(Clear, centered(area, 50, 10));
    frame.render_widget(widget, centered(area, 50, 10));
}

pub fn draw_register(frame: &mut Frame, form: &TextForm, area: Rect) {
    let strength = PasswordStrength::of(&form.password);
    let color = match strength {
        PasswordStrength::Empty => Color::DarkGray,
        PasswordStrength::Weak => Color::Red,
        PasswordStrength::Fair => Color::Yellow,
        PasswordStrength::Strong => Color::Green,
    };
    let meter: String = (1..=3)
        .map(|segment| if segment <= strength.level() { '■' } else { '□' })
        .collect();

    let mut lines = vec![
        Line::from(Span::styled(
            "JOIN THE CREW",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(form_lines(form, true));
    lines.push(Line::from(vec![
        Span::styled(format!("{:<10}", ""), Style::default()),
        Span::styled(meter, Style::default().fg(color)),
        Span::styled(format!(" {}", strength.label()), Style::default().fg(color)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("↵", Style::default().fg(Color::Yellow)),
        Span::styled(" create account   ", Style::default().fg(Color::DarkGray)),
        Span::styled("^L", Style::default().fg(Color::Yellow)),
        Span::styled(" log in", Style::default().fg(Color::DarkGray)),
    ]));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Create Account "),
    );
    frame.render_widget(Clear, centered(area, 50, 11));
    frame.render_widget(widget, centered(area, 50, 11));
}

/// Draw the profile page: details form on the left, order history on the right.
pub fn draw_profile(frame: &mut Frame, user: &User, profile: &mut ProfileState, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let dim = Style::default().fg(Color::DarkGray);
    let mut details = vec![
        Line::from(Span::styled(
            user.name.to_uppercase(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Member #", dim),
            Span::raw(user.id.clone()),
        ]),
        Line::from(vec![
            Span::styled("Balance ", dim),
            Span::styled(format_price(user.balance), Style::default().fg(Color::Green)),
        ]),
        Line::from(""),
    ];
    details.extend(form_lines(&profile.form, profile.editing));

    let title = if profile.editing {
        " Details (editing) "
    } else {
        " Details  e edit "
    };
    let details_widget = Paragraph::new(details)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(details_widget, columns[0]);

    let items: Vec<ListItem> = profile
        .orders
        .iter()
        .map(|order| {
            let status_color = match order.status {
                OrderStatus::Delivered => Color::Green,
                OrderStatus::Shipped => Color::Yellow,
            };
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    format!("{:<11}", order.id),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{}  ", order.date), dim),
                Span::styled(
                    format!("{:>9}  ", format_price(order.total)),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(order.status.label(), Style::default().fg(status_color)),
            ])];

            if profile.expanded == Some(order.id) {
                let steps = [
                    ("Order placed", true),
                    ("Shipped", true),
                    ("Out for delivery", !order.is_active()),
                    ("Delivered", !order.is_active()),
                ];
                for (step, done) in steps {
                    let (mark, style) = if done {
                        ("●", Style::default().fg(Color::Green))
                    } else {
                        ("○", dim)
                    };
                    lines.push(Line::from(vec![
                        Span::raw("    "),
                        Span::styled(mark, style),
                        Span::styled(format!(" {}", step), style),
                    ]));
                }
            }
            ListItem::new(lines)
        })
        .collect();

    let orders = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Order History  ↵ track "),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");
    frame.render_stateful_widget(orders, columns[1], &mut profile.list.list_state);
}

/// Draw shipping choice, order lines, and the price summary.
pub fn draw_checkout(
    frame: &mut Frame,
    lines: &[CartLine],
    state: &CheckoutState,
    summary: &OrderSummary,
    area: Rect,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let dim = Style::default().fg(Color::DarkGray);
    let mut shipping = vec![Line::from(Span::styled(
        "SHIPPING METHOD",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for method in [ShippingMethod::Standard, ShippingMethod::Express] {
        let chosen = state.shipping == method;
        let marker = if chosen { "(•) " } else { "( ) " };
        let style = if chosen {
            Style::default().fg(Color::Yellow)
        } else {
            dim
        };
        shipping.push(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(method.label(), style),
        ]));
    }
    shipping.push(Line::from(""));
    shipping.push(Line::from(Span::styled(
        "ITEMS",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for line in lines {
        shipping.push(Line::from(vec![
            Span::raw(format!("{} ", line.product.name)),
            Span::styled(format!("x{} ", line.quantity), dim),
            Span::styled(format_price(line.line_total()), Style::default().fg(Color::Green)),
        ]));
    }

    let left = Paragraph::new(shipping)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Checkout  s shipping "));
    frame.render_widget(left, columns[0]);

    let row = |label: &'static str, amount: String| {
        Line::from(vec![
            Span::styled(format!("{:<12}", label), dim),
            Span::raw(amount),
        ])
    };
    let shipping_cost = if summary.shipping.is_zero() {
        "FREE".to_string()
    } else {
        format_price(summary.shipping)
    };

    let pay = if state.processing {
        Span::styled("⏳ PROCESSING...", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(
            format!("↵ PAY {}", format_price(summary.total)),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    };

    let totals = Paragraph::new(vec![
        row("Subtotal", format_price(summary.subtotal)),
        row("Shipping", shipping_cost),
        row("Tax", format_price(summary.tax)),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{:<12}", "Total"), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format_price(summary.total),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(pay),
    ])
    .block(Block::default().borders(Borders::ALL).title(" Summary "));
    frame.render_widget(totals, columns[1]);
}
