use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::catalog::Catalog;
use crate::theme::Theme;
use crate::ui::centered_rect;

/// Render the modal listing every catalog item
pub fn render(frame: &mut Frame, area: Rect, catalog: &Catalog, highlighted: usize, theme: &Theme) {
    let height = catalog.len() as u16 + 4;
    let area = centered_rect(36, height, area);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Selecione um Item")
        .title_alignment(Alignment::Center)
        .border_style(theme.border(true))
        .style(theme.input());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let items: Vec<ListItem> = catalog
        .items()
        .iter()
        .map(|item| ListItem::new(Line::from(*item).alignment(Alignment::Center)))
        .collect();
    let list = List::new(items).highlight_style(theme.selected());
    let mut state = ListState::default().with_selected(Some(highlighted));
    frame.render_stateful_widget(list, chunks[0], &mut state);

    let close = Paragraph::new("[ Fechar ]")
        .style(theme.button(false))
        .alignment(Alignment::Center);
    frame.render_widget(close, chunks[1]);
}
