use chrono::{NaiveTime, Timelike};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tea::message::TimeStep;
use crate::theme::Theme;

/// Time picker component for choosing a delivery time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimePicker {
    hour: u32,
    minute: u32,
    /// Seconds of the seed time, kept so an unchanged pick is a no-op
    second: u32,
    editing_field: TimeField,
}

/// Which field is currently being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Hour,
    Minute,
}

impl TimePicker {
    /// Create a new time picker with the given initial time
    pub fn new(initial_time: NaiveTime) -> Self {
        Self {
            hour: initial_time.hour(),
            minute: initial_time.minute(),
            second: initial_time.second(),
            editing_field: TimeField::Hour,
        }
    }

    pub fn editing_field(&self) -> TimeField {
        self.editing_field
    }

    /// Get the currently selected time
    pub fn selected_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, self.second).unwrap_or(NaiveTime::MIN)
    }

    /// Apply an adjustment; `now` is used by `TimeStep::Now`
    pub fn step(&mut self, step: TimeStep, now: NaiveTime) {
        match step {
            TimeStep::Up => match self.editing_field {
                TimeField::Hour => self.hour = (self.hour + 1) % 24,
                TimeField::Minute => self.minute = (self.minute + 5) % 60,
            },
            TimeStep::Down => match self.editing_field {
                TimeField::Hour => self.hour = (self.hour + 23) % 24,
                TimeField::Minute => self.minute = (self.minute + 55) % 60,
            },
            TimeStep::FineUp => match self.editing_field {
                TimeField::Hour => self.hour = (self.hour + 1) % 24,
                TimeField::Minute => self.minute = (self.minute + 1) % 60,
            },
            TimeStep::FineDown => match self.editing_field {
                TimeField::Hour => self.hour = (self.hour + 23) % 24,
                TimeField::Minute => self.minute = (self.minute + 59) % 60,
            },
            TimeStep::SwitchField => {
                self.editing_field = match self.editing_field {
                    TimeField::Hour => TimeField::Minute,
                    TimeField::Minute => TimeField::Hour,
                };
            }
            TimeStep::HourField => self.editing_field = TimeField::Hour,
            TimeStep::MinuteField => self.editing_field = TimeField::Minute,
            TimeStep::Now => {
                self.hour = now.hour();
                self.minute = now.minute();
                self.second = now.second();
            }
        }
    }

    /// Render the time picker
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title("Selecione o Horário")
            .border_style(theme.border(true))
            .style(theme.input());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Time display
                Constraint::Length(1), // Key hints
            ])
            .split(inner);

        let field_style = |field: TimeField| {
            if self.editing_field == field {
                theme.selected()
            } else {
                theme.input()
            }
        };

        let display = Line::from(vec![
            Span::styled(format!(" {:02} ", self.hour), field_style(TimeField::Hour)),
            Span::styled(" : ", theme.input()),
            Span::styled(format!(" {:02} ", self.minute), field_style(TimeField::Minute)),
        ]);
        let display = Paragraph::new(display).alignment(Alignment::Center);
        frame.render_widget(display, chunks[0]);

        let hints = Paragraph::new("↑/↓ ajustar  ←/→ campo  +/- minuto  n agora  Enter ok  Esc cancelar")
            .style(theme.placeholder())
            .alignment(Alignment::Center);
        frame.render_widget(hints, chunks[1]);
    }
}
