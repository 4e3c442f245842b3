/// Central message type for the order form following TEA pattern
///
/// Every user interaction is turned into a message and applied by
/// `update`; nothing else mutates the model.

use chrono::{NaiveDate, NaiveTime};

/// Main application message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Form field and submission messages
    Form(FormMessage),

    /// Overlay (pickers and alert) messages
    Overlay(OverlayMessage),

    /// Focus and scrolling
    UI(UIMessage),

    /// Application lifecycle
    System(SystemMessage),
}

/// Changes to the order being composed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// Replace the client name verbatim
    SetClientName(String),

    /// Replace the quantity verbatim
    SetQuantity(String),

    /// Pick a catalog item and close the item picker
    ChooseItem(String),

    /// Close the date picker, replacing the date unless cancelled
    DateChosen(Option<NaiveDate>),

    /// Close the time picker, replacing the time unless cancelled
    TimeChosen(Option<NaiveTime>),

    /// Validate and append a new order
    Submit,

    /// Restore every field to its default
    Reset,
}

/// Opening, closing and navigating overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayMessage {
    OpenItemPicker,

    /// Close the item picker without choosing ("Fechar")
    CloseItemPicker,

    OpenDatePicker,

    OpenTimePicker,

    /// Move the item picker highlight
    ItemUp,
    ItemDown,

    /// Move inside the calendar
    Date(DateStep),

    /// Adjust the time picker
    Time(TimeStep),

    /// Acknowledge the alert
    DismissAlert,
}

/// Calendar navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStep {
    PreviousDay,
    NextDay,
    PreviousWeek,
    NextWeek,
    PreviousMonth,
    NextMonth,
    Today,
}

/// Time picker adjustments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeStep {
    /// Increase the edited field (minutes in steps of five)
    Up,
    Down,
    /// Minutes in steps of one
    FineUp,
    FineDown,
    SwitchField,
    HourField,
    MinuteField,
    Now,
}

/// Focus and scroll messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UIMessage {
    FocusNext,
    FocusPrevious,
    Focus(FormField),
    ScrollOrdersUp,
    ScrollOrdersDown,
}

/// Lifecycle messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemMessage {
    /// Periodic tick, expires toasts
    Tick,

    /// Application should quit
    Quit,
}

/// Focusable controls, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    ClientName,
    Item,
    Quantity,
    DeliveryDate,
    DeliveryTime,
    Submit,
    Orders,
}

impl FormField {
    const ORDER: [FormField; 7] = [
        FormField::ClientName,
        FormField::Item,
        FormField::Quantity,
        FormField::DeliveryDate,
        FormField::DeliveryTime,
        FormField::Submit,
        FormField::Orders,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }

    /// Whether the control takes typed text
    pub fn is_text_input(self) -> bool {
        matches!(self, FormField::ClientName | FormField::Quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle_wraps() {
        assert_eq!(FormField::ClientName.next(), FormField::Item);
        assert_eq!(FormField::Orders.next(), FormField::ClientName);
        assert_eq!(FormField::ClientName.previous(), FormField::Orders);
        assert_eq!(FormField::Submit.previous(), FormField::DeliveryTime);
    }
}
