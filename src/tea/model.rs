/// Application model following TEA pattern
///
/// Holds the whole state of the order form. It is replaced by `update` on
/// every message and read by the view.

use crate::catalog::Catalog;
use crate::error::{ValidationError, ERROR_TITLE};
use crate::form::FormState;
use crate::format::DeliveryFormat;
use crate::order::OrderList;
use crate::tea::message::FormField;
use crate::ui::date_picker::DatePicker;
use crate::ui::time_picker::TimePicker;
use crate::ui::toast::Toast;
use chrono::NaiveDateTime;

/// Main application model containing all state
#[derive(Debug, Clone)]
pub struct Model {
    /// Order being composed
    pub form: FormState,

    /// Orders submitted this session, oldest first
    pub orders: OrderList,

    /// The single overlay shown above the form
    pub overlay: Overlay,

    /// Control receiving keyboard input when no overlay is open
    pub focus: FormField,

    /// Index of the first order shown in the list
    pub order_scroll: usize,

    /// Transient notifications
    pub toasts: Vec<Toast>,

    /// Whether the application should quit
    pub should_quit: bool,

    pub catalog: Catalog,

    /// Formatting applied to delivery date and time at submission
    pub format: DeliveryFormat,
}

/// Modal surface above the form; at most one exists at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    Closed,
    PickingItem { highlighted: usize },
    PickingDate(DatePicker),
    PickingTime(TimePicker),
    Alert(Alert),
}

/// Blocking message that must be acknowledged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

impl From<&ValidationError> for Alert {
    fn from(error: &ValidationError) -> Self {
        Alert::new(ERROR_TITLE, error.to_string())
    }
}

impl Model {
    /// Fresh model with an empty form whose delivery defaults to `now`
    pub fn new(now: NaiveDateTime, format: DeliveryFormat) -> Self {
        Self {
            form: FormState::new(now),
            orders: OrderList::new(),
            overlay: Overlay::Closed,
            focus: FormField::ClientName,
            order_scroll: 0,
            toasts: Vec::new(),
            should_quit: false,
            catalog: Catalog,
            format,
        }
    }

    pub fn is_overlay_open(&self) -> bool {
        self.overlay != Overlay::Closed
    }

    /// Current alert, if one is shown
    pub fn alert(&self) -> Option<&Alert> {
        match &self.overlay {
            Overlay::Alert(alert) => Some(alert),
            _ => None,
        }
    }

    /// Catalog entry highlighted in the item picker
    pub fn highlighted_item(&self) -> Option<&'static str> {
        match self.overlay {
            Overlay::PickingItem { highlighted } => self.catalog.get(highlighted),
            _ => None,
        }
    }

    /// Formatted delivery date as it would be stored right now
    pub fn delivery_date_label(&self) -> String {
        self.format.date(self.form.delivery_date)
    }

    /// Formatted delivery time as it would be stored right now
    pub fn delivery_time_label(&self) -> String {
        self.format.time(self.form.delivery_time)
    }
}

impl Default for Model {
    /// Empty model dated at the epoch with the default delivery format
    fn default() -> Self {
        Self::new(NaiveDateTime::default(), DeliveryFormat::default())
    }
}
