// Breadcrumb rendering for navigation trail.
// Shows the path to the current view with the session badge on the right.

use ratatui::{prelude::*, widgets::*};

use crate::catalog::{User, format_price};
use crate::state::BreadcrumbNode;

/// Render the breadcrumb trail.
pub fn draw_breadcrumb(
    frame: &mut Frame,
    breadcrumbs: &[BreadcrumbNode],
    user: Option<&User>,
    area: Rect,
) {
    let mut spans = Vec::new();

    for (i, node) in breadcrumbs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" > ", Style::default().fg(Color::DarkGray)));
        }

        let style = if i == breadcrumbs.len() - 1 {
            // Current level is highlighted
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        spans.push(Span::styled(node.label.clone(), style));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);

    // Session badge on the right of the first row
    let badge = match user {
        Some(user) => Line::from(vec![
            Span::styled(user.name.clone(), Style::default().fg(Color::Magenta)),
            Span::styled(
                format!(" #{} ", user.id),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(format_price(user.balance), Style::default().fg(Color::Green)),
        ]),
        None => Line::from(Span::styled("GUEST", Style::default().fg(Color::DarkGray))),
    };
    let badge_para = Paragraph::new(badge).alignment(Alignment::Right);
    frame.render_widget(
        badge_para,
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1.min(area.height),
        },
    );
}
