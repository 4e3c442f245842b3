/// Short-lived notifications shown at the top-right of the screen

use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// Maximum number of toasts to display simultaneously
const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
}

/// Toast notification item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        let duration = match level {
            ToastLevel::Info => Duration::from_secs(3),
            ToastLevel::Success => Duration::from_secs(2),
        };

        Self {
            message: message.into(),
            level,
            created_at: Instant::now(),
            duration,
        }
    }

    /// Check if toast has expired at `now`
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    pub fn icon(&self) -> &'static str {
        match self.level {
            ToastLevel::Info => "ℹ",
            ToastLevel::Success => "✓",
        }
    }
}

/// Push a toast, dropping the oldest when at capacity
pub fn push_toast(toasts: &mut Vec<Toast>, toast: Toast) {
    if toasts.len() >= MAX_VISIBLE_TOASTS {
        toasts.remove(0);
    }
    toasts.push(toast);
}

/// Render toasts stacked from the top-right corner of `area`
pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &[Toast], theme: &Theme) {
    let width = 32.min(area.width);
    for (i, toast) in toasts.iter().enumerate() {
        let y = area.y + 1 + (i as u16) * 3;
        if y + 3 > area.bottom() {
            break;
        }
        let rect = Rect::new(area.right().saturating_sub(width + 1), y, width, 3);

        let style = match toast.level {
            ToastLevel::Info => theme.label(),
            ToastLevel::Success => theme.success(),
        };
        let text = Line::from(vec![
            Span::styled(format!("{} ", toast.icon()), style),
            Span::styled(toast.message.clone(), theme.input()),
        ]);

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(style)
                    .style(theme.input()),
            ),
            rect,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expiry() {
        let toast = Toast::new("Encomenda adicionada", ToastLevel::Success);
        assert!(!toast.is_expired(toast.created_at));
        assert!(toast.is_expired(toast.created_at + Duration::from_secs(2)));
    }

    #[test]
    fn test_toast_capacity() {
        let mut toasts = Vec::new();
        for i in 0..5 {
            push_toast(&mut toasts, Toast::new(format!("toast {}", i), ToastLevel::Info));
        }
        assert_eq!(toasts.len(), MAX_VISIBLE_TOASTS);
        assert_eq!(toasts[0].message, "toast 2");
    }
}
