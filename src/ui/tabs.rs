// Navigation bar rendering with a cart badge.
// Highlights the active section and greets the signed-in shopper.

use ratatui::{prelude::*, widgets::*};

use crate::state::{Coordinator, NAV_LINKS, ViewState};

/// Draw the navigation bar at the top of the screen.
pub fn draw_navbar(frame: &mut Frame, store: &Coordinator, area: Rect) {
    let active = store.view();
    let cart_count = store.cart_count();

    let titles: Vec<Line> = NAV_LINKS
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let title = match view {
                ViewState::Cart if cart_count > 0 => format!("Cart ({})", cart_count),
                ViewState::Profile => match store.session().user() {
                    Some(user) => user.first_name().to_string(),
                    None => "Log In".to_string(),
                },
                other => other.title().to_string(),
            };

            let style = if *view == active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if *view == ViewState::Cart && cart_count > 0 {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };

            Line::from(Span::styled(format!("{} {}", i + 1, title), style))
        })
        .collect();

    let selected = NAV_LINKS.iter().position(|v| *v == active);

    let navbar = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" AICE_SHOP ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .select(selected.unwrap_or(0))
        .highlight_style(if selected.is_some() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        })
        .divider(Span::raw(" │ "));

    frame.render_widget(navbar, area);
}
