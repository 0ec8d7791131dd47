// Toast popup.
// A small bordered notice pinned to the top-right corner above the current view.

use ratatui::{prelude::*, widgets::*};

/// Draw the live toast on top of the current view.
pub fn draw_toast(frame: &mut Frame, message: &str) {
    let area = frame.area();

    let toast_width = (message.chars().count() as u16 + 8).min(area.width);
    let toast_height = 3.min(area.height);
    let toast_x = area.width.saturating_sub(toast_width + 1);
    let toast_y = 1.min(area.height.saturating_sub(toast_height));

    let toast_area = Rect::new(toast_x, toast_y, toast_width, toast_height);

    // Clear the area behind the toast
    frame.render_widget(Clear, toast_area);

    let line = Line::from(vec![
        Span::styled("✓ ", Style::default().fg(Color::Green)),
        Span::styled(message, Style::default().add_modifier(Modifier::BOLD)),
    ]);

    let toast = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title_bottom(Line::from(" Esc ").right_aligned()),
    );
    frame.render_widget(toast, toast_area);
}
