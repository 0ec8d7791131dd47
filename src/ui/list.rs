// List rendering for products and cart lines.
// Provides styled rows, selectable list views, and empty states.

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::catalog::{Product, format_price};
use crate::state::{CartLine, SelectableList};

/// Format a timestamp as relative time (e.g., "2d ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(*dt);

    if duration.num_weeks() > 0 {
        format!("{}w ago", duration.num_weeks())
    } else if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// Color for a product badge.
fn badge_color(badge: &str) -> Color {
    match badge {
        "NEW" => Color::Magenta,
        "SALE" => Color::Red,
        _ => Color::White,
    }
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

/// One product row: name, badge, brand, price, and stash/busy markers.
pub fn product_item(product: &Product, stashed: bool, adding: bool) -> ListItem<'static> {
    let mut spans = vec![
        Span::styled(
            if stashed { "♥ " } else { "  " },
            Style::default().fg(Color::Magenta),
        ),
        Span::styled(
            format!("{:<28}", product.name),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("{:<13}", product.brand),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{:>9}", format_price(product.price)),
            Style::default().fg(Color::Green),
        ),
    ];

    if let Some(badge) = product.badge() {
        spans.push(Span::styled(
            format!(" {}", badge),
            Style::default()
                .fg(badge_color(badge))
                .add_modifier(Modifier::BOLD),
        ));
    }
    if adding {
        spans.push(Span::styled(" ⏳ adding", Style::default().fg(Color::Yellow)));
    }

    ListItem::new(Line::from(spans))
}

/// One cart row with quantity and line total.
pub fn cart_item(line: &CartLine) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{:<28}", line.product.name),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("{:>9}", format_price(line.product.price)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("  x{:<3}", line.quantity),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!("{:>10}", format_price(line.line_total())),
            Style::default().fg(Color::Green),
        ),
    ]))
}

/// Render prepared rows as a selectable list.
pub fn render_product_list(
    frame: &mut Frame,
    items: Vec<ListItem>,
    title: &str,
    list: &mut SelectableList,
    area: Rect,
) {
    let list_widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string()),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, &mut list.list_state);
}
