use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::order::Order;
use crate::tea::message::FormField;
use crate::tea::Model;
use crate::theme::Theme;

/// Lines used by one order, including the blank separator
const LINES_PER_ORDER: u16 = 6;

/// Display lines for one order, showing the stored strings verbatim
pub fn order_lines<'a>(order: &'a Order, theme: &Theme) -> Vec<Line<'a>> {
    let row = |label: &'static str, value: &'a str| {
        Line::from(vec![
            Span::styled(label, theme.label()),
            Span::styled(value, theme.input()),
        ])
    };
    vec![
        row("Cliente: ", order.client_name.as_str()),
        row("Item: ", order.item.as_str()),
        row("Quantidade: ", order.quantity.as_str()),
        row("Data de Entrega: ", order.delivery_date.as_str()),
        row("Horário de Entrega: ", order.delivery_time.as_str()),
    ]
}

/// Render the "Encomendas:" label and the scrolling list below it
pub fn render_orders(frame: &mut Frame, label_area: Rect, area: Rect, model: &Model, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(Span::styled("Encomendas:", theme.label())),
        label_area,
    );

    let mut lines = Vec::new();
    for (i, order) in model.orders.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.extend(order_lines(order, theme));
    }

    let focused = model.focus == FormField::Orders && !model.is_overlay_open();
    let scroll = (model.order_scroll as u16).saturating_mul(LINES_PER_ORDER);
    let list = Paragraph::new(lines)
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border(focused))
                .style(theme.input()),
        );
    frame.render_widget(list, area);
}
