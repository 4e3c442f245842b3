use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tea::message::FormField;
use crate::tea::Model;
use crate::theme::Theme;

/// One labelled control of the form
struct Input<'a> {
    label: &'static str,
    value: &'a str,
    placeholder: &'static str,
    field: FormField,
}

/// Render the five inputs stacked vertically in `area`
pub fn render_form(frame: &mut Frame, area: Rect, model: &Model, theme: &Theme) {
    let date = model.delivery_date_label();
    let time = model.delivery_time_label();
    let inputs = [
        Input {
            label: "Nome do Cliente:",
            value: &model.form.client_name,
            placeholder: "Digite o nome do cliente",
            field: FormField::ClientName,
        },
        Input {
            label: "Item:",
            value: &model.form.selected_item,
            placeholder: "Selecione um item",
            field: FormField::Item,
        },
        Input {
            label: "Quantidade:",
            value: &model.form.quantity,
            placeholder: "Digite a quantidade",
            field: FormField::Quantity,
        },
        Input {
            label: "Data de Entrega:",
            value: &date,
            placeholder: "",
            field: FormField::DeliveryDate,
        },
        Input {
            label: "Horário de Entrega:",
            value: &time,
            placeholder: "",
            field: FormField::DeliveryTime,
        },
    ];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 5])
        .split(area);

    for (input, row) in inputs.iter().zip(rows.iter()) {
        let focused = model.focus == input.field && !model.is_overlay_open();
        render_input(frame, *row, input, focused, theme);
    }
}

fn render_input(frame: &mut Frame, area: Rect, input: &Input<'_>, focused: bool, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(input.label, theme.label()))
        .border_style(theme.border(focused))
        .style(theme.input());

    let content = if input.value.is_empty() {
        Span::styled(input.placeholder, theme.placeholder())
    } else {
        Span::styled(input.value, theme.input())
    };
    frame.render_widget(Paragraph::new(content).block(block), area);

    if focused && input.field.is_text_input() {
        // Long values pin the cursor to the last column inside the border
        let offset = u16::try_from(input.value.chars().count()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(offset)
            .min(area.right().saturating_sub(2));
        frame.set_cursor(x, area.y.saturating_add(1));
    }
}

/// Render the "Adicionar Encomenda" button
pub fn render_submit_button(frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
    let button = Paragraph::new(Span::styled("[ Adicionar Encomenda ]", theme.button(focused)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border(focused)),
        );
    frame.render_widget(button, area);
}
