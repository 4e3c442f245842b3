pub mod alert;
pub mod date_picker;
pub mod form_view;
pub mod item_picker;
pub mod order_list;
pub mod time_picker;
pub mod toast;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::tea::message::FormField;
use crate::tea::{Model, Overlay};
use crate::theme::Theme;

/// Screen title
pub const TITLE: &str = "Controle de Encomendas";

/// Draw the whole screen for `model`
pub fn render(frame: &mut Frame, model: &Model, theme: &Theme) {
    let area = frame.size();
    frame.render_widget(Block::default().style(theme.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Title
            Constraint::Length(15), // Five inputs
            Constraint::Length(3),  // Submit button
            Constraint::Length(1),  // Orders label
            Constraint::Min(3),     // Orders
            Constraint::Length(1),  // Key hints
        ])
        .split(area);

    let title = Paragraph::new(TITLE)
        .style(theme.title())
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    form_view::render_form(frame, chunks[1], model, theme);
    form_view::render_submit_button(frame, chunks[2], model.focus == FormField::Submit, theme);
    order_list::render_orders(frame, chunks[3], chunks[4], model, theme);

    let hints = Paragraph::new(key_hints(model)).style(theme.placeholder());
    frame.render_widget(hints, chunks[5]);

    match &model.overlay {
        Overlay::Closed => {}
        Overlay::PickingItem { highlighted } => {
            item_picker::render(frame, area, &model.catalog, *highlighted, theme);
        }
        Overlay::PickingDate(picker) => {
            picker.render(frame, centered_rect(66, 13, area), theme);
        }
        Overlay::PickingTime(picker) => {
            picker.render(frame, centered_rect(72, 6, area), theme);
        }
        Overlay::Alert(alert) => alert::render(frame, area, alert, theme),
    }

    toast::render_toasts(frame, area, &model.toasts, theme);
}

/// Key hints for the footer, depending on what has focus
pub fn key_hints(model: &Model) -> &'static str {
    match &model.overlay {
        Overlay::PickingItem { .. } => "↑/↓ mover  Enter escolher  Esc fechar",
        Overlay::PickingDate(_) | Overlay::PickingTime(_) => "Enter confirmar  Esc cancelar",
        Overlay::Alert(_) => "Enter OK",
        Overlay::Closed => match model.focus {
            FormField::ClientName | FormField::Quantity => {
                "Tab próximo  Ctrl+S adicionar  Ctrl+R limpar  Ctrl+C sair"
            }
            FormField::Item | FormField::DeliveryDate | FormField::DeliveryTime => {
                "Enter abrir  Tab próximo  Ctrl+S adicionar  Esc sair"
            }
            FormField::Submit => "Enter adicionar  Tab próximo  Esc sair",
            FormField::Orders => "↑/↓ rolar  Tab próximo  Esc sair",
        },
    }
}

/// Rectangle of at most `width` x `height` centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
