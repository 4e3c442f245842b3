use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tea::Alert;
use crate::theme::Theme;
use crate::ui::centered_rect;

/// Render a blocking alert in the middle of `area`
pub fn render(frame: &mut Frame, area: Rect, alert: &Alert, theme: &Theme) {
    let width = (alert.message.chars().count() as u16 + 6).max(24);
    let area = centered_rect(width, 7, area);
    frame.render_widget(Clear, area);

    let text = vec![
        Line::default(),
        Line::from(alert.message.as_str()),
        Line::default(),
        Line::from(Span::styled("[ OK ]", theme.button(true))),
    ];
    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(alert.title.as_str(), theme.error()))
                .border_style(theme.error())
                .style(theme.input()),
        );
    frame.render_widget(popup, area);
}
