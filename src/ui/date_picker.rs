use chrono::{Datelike, Days, Months, NaiveDate};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

use crate::tea::message::DateStep;
use crate::theme::Theme;

const MONTH_NAMES: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho",
    "Julho", "Agosto", "Setembro", "Outubro", "Novembro", "Dezembro",
];

const DAY_NAMES: [&str; 7] = ["Do", "Se", "Te", "Qu", "Qu", "Se", "Sá"];

/// Calendar for choosing a delivery date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePicker {
    selected_date: NaiveDate,
    today: NaiveDate,
}

impl DatePicker {
    /// Create a date picker seeded with `initial_date`
    pub fn new(initial_date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            selected_date: initial_date,
            today,
        }
    }

    /// Get the currently highlighted date
    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    /// Apply a navigation step; out-of-range moves are ignored
    pub fn step(&mut self, step: DateStep) {
        let date = self.selected_date;
        let moved = match step {
            DateStep::PreviousDay => date.pred_opt(),
            DateStep::NextDay => date.succ_opt(),
            DateStep::PreviousWeek => date.checked_sub_days(Days::new(7)),
            DateStep::NextWeek => date.checked_add_days(Days::new(7)),
            // Day is clamped to the end of shorter months
            DateStep::PreviousMonth => date.checked_sub_months(Months::new(1)),
            DateStep::NextMonth => date.checked_add_months(Months::new(1)),
            DateStep::Today => Some(self.today),
        };
        if let Some(moved) = moved {
            self.selected_date = moved;
        }
    }

    /// First day of the month being shown
    fn viewing_month(&self) -> NaiveDate {
        self.selected_date
            .with_day(1)
            .unwrap_or(self.selected_date)
    }

    /// Number of days in the month being shown
    pub fn days_in_viewing_month(&self) -> u32 {
        let first = self.viewing_month();
        first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .map(|last| last.day())
            .unwrap_or(31)
    }

    /// Column of the first day of the month (0 = Sunday)
    pub fn first_day_column(&self) -> u32 {
        self.viewing_month().weekday().num_days_from_sunday()
    }

    /// Month and year shown in the header
    pub fn header(&self) -> String {
        let month = MONTH_NAMES[self.selected_date.month0() as usize];
        format!("{} {}", month, self.selected_date.year())
    }

    /// Render the calendar
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title("Selecione a Data")
            .border_style(theme.border(true))
            .style(theme.input());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Month and year
                Constraint::Length(1), // Day names
                Constraint::Min(6),    // Calendar grid
                Constraint::Length(1), // Key hints
            ])
            .split(inner);

        let header = Paragraph::new(self.header())
            .style(theme.title())
            .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        let names = Row::new(DAY_NAMES.iter().map(|name| Cell::from(*name)))
            .style(theme.label());
        frame.render_widget(Table::new(vec![names], [Constraint::Ratio(1, 7); 7]), chunks[1]);

        frame.render_widget(
            Table::new(self.grid_rows(theme), [Constraint::Ratio(1, 7); 7]),
            chunks[2],
        );

        let hints = Paragraph::new("←/→ dia  ↑/↓ semana  n/p mês  t hoje  Enter ok  Esc cancelar")
            .style(theme.placeholder())
            .alignment(Alignment::Center);
        frame.render_widget(hints, chunks[3]);
    }

    fn grid_rows(&self, theme: &Theme) -> Vec<Row<'static>> {
        let first = self.viewing_month();
        let mut rows = Vec::new();
        let mut week: Vec<Cell> = (0..self.first_day_column()).map(|_| Cell::from("")).collect();

        for day in 1..=self.days_in_viewing_month() {
            let date = first.with_day(day);
            let style = if date == Some(self.selected_date) {
                theme.selected()
            } else if date == Some(self.today) {
                theme.label().add_modifier(Modifier::UNDERLINED)
            } else {
                theme.input()
            };
            week.push(Cell::from(format!("{:2}", day)).style(style));

            if week.len() == 7 {
                rows.push(Row::new(std::mem::take(&mut week)));
            }
        }

        if !week.is_empty() {
            while week.len() < 7 {
                week.push(Cell::from(""));
            }
            rows.push(Row::new(week));
        }

        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_and_week_steps_cross_months() {
        let mut picker = DatePicker::new(date(2026, 10, 31), date(2026, 10, 18));
        picker.step(DateStep::NextDay);
        assert_eq!(picker.selected_date(), date(2026, 11, 1));

        picker.step(DateStep::PreviousWeek);
        assert_eq!(picker.selected_date(), date(2026, 10, 25));
    }

    #[test]
    fn test_month_step_clamps_day() {
        let mut picker = DatePicker::new(date(2026, 1, 31), date(2026, 1, 1));
        picker.step(DateStep::NextMonth);
        assert_eq!(picker.selected_date(), date(2026, 2, 28));
    }

    #[test]
    fn test_today_step() {
        let mut picker = DatePicker::new(date(2027, 5, 5), date(2026, 10, 18));
        picker.step(DateStep::Today);
        assert_eq!(picker.selected_date(), date(2026, 10, 18));
    }

    #[test]
    fn test_month_layout() {
        // October 2026 starts on a Thursday
        let picker = DatePicker::new(date(2026, 10, 18), date(2026, 10, 18));
        assert_eq!(picker.days_in_viewing_month(), 31);
        assert_eq!(picker.first_day_column(), 4);
        assert_eq!(picker.header(), "Outubro 2026");

        let february = DatePicker::new(date(2028, 2, 10), date(2028, 2, 10));
        assert_eq!(february.days_in_viewing_month(), 29);
    }
}
