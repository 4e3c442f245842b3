use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::tea::message::{
    DateStep, FormField, FormMessage, Message, OverlayMessage, SystemMessage, TimeStep, UIMessage,
};
use crate::tea::{Model, Overlay};

/// Translates terminal key events into messages for the current state
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Map a key event to a message; `None` means the key is ignored
    pub fn handle_key_event(&self, key: KeyEvent, model: &Model) -> Option<Message> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            return Some(Message::System(SystemMessage::Quit));
        }

        match &model.overlay {
            Overlay::Closed => self.handle_form_keys(key, ctrl, model),
            Overlay::PickingItem { .. } => self.handle_item_picker_keys(key, model),
            Overlay::PickingDate(picker) => Self::handle_date_picker_keys(key, picker.selected_date()),
            Overlay::PickingTime(picker) => Self::handle_time_picker_keys(key, picker.selected_time()),
            Overlay::Alert(_) => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                    Some(Message::Overlay(OverlayMessage::DismissAlert))
                }
                _ => None,
            },
        }
    }

    fn handle_form_keys(&self, key: KeyEvent, ctrl: bool, model: &Model) -> Option<Message> {
        if ctrl {
            return match key.code {
                KeyCode::Char('s') => Some(Message::Form(FormMessage::Submit)),
                KeyCode::Char('r') => Some(Message::Form(FormMessage::Reset)),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Tab => return Some(Message::UI(UIMessage::FocusNext)),
            KeyCode::BackTab => return Some(Message::UI(UIMessage::FocusPrevious)),
            KeyCode::Esc => return Some(Message::System(SystemMessage::Quit)),
            _ => {}
        }

        match model.focus {
            FormField::ClientName => match key.code {
                KeyCode::Char(c) => Some(Message::Form(FormMessage::SetClientName(
                    appended(&model.form.client_name, c),
                ))),
                KeyCode::Backspace => Some(Message::Form(FormMessage::SetClientName(
                    backspaced(&model.form.client_name),
                ))),
                KeyCode::Enter | KeyCode::Down => Some(Message::UI(UIMessage::FocusNext)),
                KeyCode::Up => Some(Message::UI(UIMessage::FocusPrevious)),
                _ => None,
            },
            FormField::Quantity => match key.code {
                // Numeric keypad: digits and separators only
                KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, '.' | ',' | '-') => {
                    Some(Message::Form(FormMessage::SetQuantity(appended(
                        &model.form.quantity,
                        c,
                    ))))
                }
                KeyCode::Backspace => Some(Message::Form(FormMessage::SetQuantity(backspaced(
                    &model.form.quantity,
                )))),
                KeyCode::Enter | KeyCode::Down => Some(Message::UI(UIMessage::FocusNext)),
                KeyCode::Up => Some(Message::UI(UIMessage::FocusPrevious)),
                _ => None,
            },
            FormField::Item | FormField::DeliveryDate | FormField::DeliveryTime => {
                match key.code {
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        let open = match model.focus {
                            FormField::Item => OverlayMessage::OpenItemPicker,
                            FormField::DeliveryDate => OverlayMessage::OpenDatePicker,
                            _ => OverlayMessage::OpenTimePicker,
                        };
                        Some(Message::Overlay(open))
                    }
                    KeyCode::Down => Some(Message::UI(UIMessage::FocusNext)),
                    KeyCode::Up => Some(Message::UI(UIMessage::FocusPrevious)),
                    _ => None,
                }
            }
            FormField::Submit => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Form(FormMessage::Submit)),
                KeyCode::Down => Some(Message::UI(UIMessage::FocusNext)),
                KeyCode::Up => Some(Message::UI(UIMessage::FocusPrevious)),
                _ => None,
            },
            FormField::Orders => match key.code {
                KeyCode::Up | KeyCode::Char('k') => Some(Message::UI(UIMessage::ScrollOrdersUp)),
                KeyCode::Down | KeyCode::Char('j') => {
                    Some(Message::UI(UIMessage::ScrollOrdersDown))
                }
                _ => None,
            },
        }
    }

    fn handle_item_picker_keys(&self, key: KeyEvent, model: &Model) -> Option<Message> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Message::Overlay(OverlayMessage::ItemUp)),
            KeyCode::Down | KeyCode::Char('j') => Some(Message::Overlay(OverlayMessage::ItemDown)),
            KeyCode::Enter | KeyCode::Char(' ') => model
                .highlighted_item()
                .map(|item| Message::Form(FormMessage::ChooseItem(item.to_string()))),
            KeyCode::Esc | KeyCode::Char('q') => {
                Some(Message::Overlay(OverlayMessage::CloseItemPicker))
            }
            _ => None,
        }
    }

    fn handle_date_picker_keys(key: KeyEvent, selected: chrono::NaiveDate) -> Option<Message> {
        let step = match key.code {
            KeyCode::Enter => return Some(Message::Form(FormMessage::DateChosen(Some(selected)))),
            KeyCode::Esc => return Some(Message::Form(FormMessage::DateChosen(None))),
            KeyCode::Left | KeyCode::Char('h') => DateStep::PreviousDay,
            KeyCode::Right | KeyCode::Char('l') => DateStep::NextDay,
            KeyCode::Up | KeyCode::Char('k') => DateStep::PreviousWeek,
            KeyCode::Down | KeyCode::Char('j') => DateStep::NextWeek,
            KeyCode::Char('p') | KeyCode::PageUp => DateStep::PreviousMonth,
            KeyCode::Char('n') | KeyCode::PageDown => DateStep::NextMonth,
            KeyCode::Char('t') => DateStep::Today,
            _ => return None,
        };
        Some(Message::Overlay(OverlayMessage::Date(step)))
    }

    fn handle_time_picker_keys(key: KeyEvent, selected: chrono::NaiveTime) -> Option<Message> {
        let step = match key.code {
            KeyCode::Enter => return Some(Message::Form(FormMessage::TimeChosen(Some(selected)))),
            KeyCode::Esc => return Some(Message::Form(FormMessage::TimeChosen(None))),
            KeyCode::Up | KeyCode::Char('k') => TimeStep::Up,
            KeyCode::Down | KeyCode::Char('j') => TimeStep::Down,
            KeyCode::Char('+') | KeyCode::Char('=') => TimeStep::FineUp,
            KeyCode::Char('-') | KeyCode::Char('_') => TimeStep::FineDown,
            KeyCode::Tab => TimeStep::SwitchField,
            KeyCode::Left | KeyCode::Char('h') => TimeStep::HourField,
            KeyCode::Right | KeyCode::Char('l') => TimeStep::MinuteField,
            KeyCode::Char('n') => TimeStep::Now,
            _ => return None,
        };
        Some(Message::Overlay(OverlayMessage::Time(step)))
    }
}

fn appended(text: &str, c: char) -> String {
    let mut text = text.to_string();
    text.push(c);
    text
}

fn backspaced(text: &str) -> String {
    let mut text = text.to_string();
    text.pop();
    text
}
