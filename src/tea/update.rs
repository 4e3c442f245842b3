/// Update function for TEA pattern
///
/// Every state change of the order form happens here. Messages that do not
/// apply to the overlay currently shown are ignored, which keeps overlays
/// mutually exclusive and makes the alert blocking.

use crate::clock::Clock;
use crate::order::Order;
use crate::tea::message::{
    FormField, FormMessage, Message, OverlayMessage, SystemMessage, UIMessage,
};
use crate::tea::model::{Alert, Model, Overlay};
use crate::ui::date_picker::DatePicker;
use crate::ui::time_picker::TimePicker;
use crate::ui::toast::{push_toast, Toast, ToastLevel};
use std::time::Instant;

/// Main update function that processes a message and returns the new model
pub fn update(model: Model, message: Message, clock: &dyn Clock) -> Model {
    match message {
        Message::System(msg) => update_system(model, msg),
        // An alert swallows everything except its own dismissal
        _ if model.alert().is_some() => match message {
            Message::Overlay(OverlayMessage::DismissAlert) => close_overlay(model),
            _ => model,
        },
        Message::Form(msg) => update_form(model, msg, clock),
        Message::Overlay(msg) => update_overlay(model, msg, clock),
        Message::UI(msg) => update_ui(model, msg),
    }
}

/// Handle system messages
fn update_system(mut model: Model, message: SystemMessage) -> Model {
    match message {
        SystemMessage::Tick => {
            let now = Instant::now();
            model.toasts.retain(|toast| !toast.is_expired(now));
        }
        SystemMessage::Quit => {
            tracing::info!("Quit requested with {} order(s) recorded", model.orders.len());
            model.should_quit = true;
        }
    }
    model
}

/// Handle form messages
fn update_form(mut model: Model, message: FormMessage, clock: &dyn Clock) -> Model {
    match message {
        FormMessage::SetClientName(text) if !model.is_overlay_open() => {
            model.form.client_name = text;
        }
        FormMessage::SetQuantity(text) if !model.is_overlay_open() => {
            model.form.quantity = text;
        }
        FormMessage::ChooseItem(item) => {
            if !matches!(model.overlay, Overlay::PickingItem { .. }) {
                return model;
            }
            if !model.catalog.contains(&item) {
                tracing::debug!("Ignoring item outside the catalog: {:?}", item);
                return model;
            }
            tracing::debug!("Item chosen: {}", item);
            model.form.selected_item = item;
            model.overlay = Overlay::Closed;
        }
        FormMessage::DateChosen(date) => {
            if !matches!(model.overlay, Overlay::PickingDate(_)) {
                return model;
            }
            match date {
                Some(date) => model.form.delivery_date = date,
                None => tracing::debug!("Date picker cancelled"),
            }
            model.overlay = Overlay::Closed;
        }
        FormMessage::TimeChosen(time) => {
            if !matches!(model.overlay, Overlay::PickingTime(_)) {
                return model;
            }
            match time {
                Some(time) => model.form.delivery_time = time,
                None => tracing::debug!("Time picker cancelled"),
            }
            model.overlay = Overlay::Closed;
        }
        FormMessage::Submit if !model.is_overlay_open() => {
            return submit(model, clock);
        }
        FormMessage::Reset if !model.is_overlay_open() => {
            model.form.reset(clock.now());
            push_toast(&mut model.toasts, Toast::new("Formulário limpo", ToastLevel::Info));
        }
        _ => {}
    }
    model
}

/// Validate the form and append a new order
///
/// On failure the form is left untouched and an alert is shown.
fn submit(mut model: Model, clock: &dyn Clock) -> Model {
    if let Err(error) = model.form.validate() {
        tracing::debug!("Submission rejected, missing: {:?}", error.missing());
        model.overlay = Overlay::Alert(Alert::from(&error));
        return model;
    }

    let order = Order::from_form(&model.form, &model.format);
    tracing::info!(
        "Order {} recorded: {} x {} for {} on {} at {}",
        order.id,
        order.quantity,
        order.item,
        order.client_name,
        order.delivery_date,
        order.delivery_time
    );
    model.orders.push(order);

    model.form.reset(clock.now());
    model.focus = FormField::ClientName;
    push_toast(&mut model.toasts, Toast::new("Encomenda adicionada", ToastLevel::Success));
    model
}

/// Handle overlay messages
fn update_overlay(mut model: Model, message: OverlayMessage, clock: &dyn Clock) -> Model {
    match message {
        OverlayMessage::OpenItemPicker if !model.is_overlay_open() => {
            let highlighted = model
                .catalog
                .position(&model.form.selected_item)
                .unwrap_or(0);
            model.overlay = Overlay::PickingItem { highlighted };
            tracing::debug!("Item picker opened");
        }
        OverlayMessage::CloseItemPicker
            if matches!(model.overlay, Overlay::PickingItem { .. }) =>
        {
            return close_overlay(model);
        }
        OverlayMessage::ItemUp | OverlayMessage::ItemDown => {
            let last = model.catalog.len().saturating_sub(1);
            if let Overlay::PickingItem { highlighted } = &mut model.overlay {
                *highlighted = match message {
                    OverlayMessage::ItemUp => highlighted.saturating_sub(1),
                    _ => (*highlighted + 1).min(last),
                };
            }
        }
        OverlayMessage::OpenDatePicker if !model.is_overlay_open() => {
            let picker = DatePicker::new(model.form.delivery_date, clock.now().date());
            model.overlay = Overlay::PickingDate(picker);
            tracing::debug!("Date picker opened");
        }
        OverlayMessage::Date(step) => {
            if let Overlay::PickingDate(picker) = &mut model.overlay {
                picker.step(step);
            }
        }
        OverlayMessage::OpenTimePicker if !model.is_overlay_open() => {
            model.overlay = Overlay::PickingTime(TimePicker::new(model.form.delivery_time));
            tracing::debug!("Time picker opened");
        }
        OverlayMessage::Time(step) => {
            if let Overlay::PickingTime(picker) = &mut model.overlay {
                picker.step(step, clock.now().time());
            }
        }
        OverlayMessage::DismissAlert if model.alert().is_some() => {
            return close_overlay(model);
        }
        _ => {}
    }
    model
}

fn close_overlay(mut model: Model) -> Model {
    tracing::debug!("Overlay closed");
    model.overlay = Overlay::Closed;
    model
}

/// Handle focus and scrolling
fn update_ui(mut model: Model, message: UIMessage) -> Model {
    if model.is_overlay_open() {
        return model;
    }
    match message {
        UIMessage::FocusNext => model.focus = model.focus.next(),
        UIMessage::FocusPrevious => model.focus = model.focus.previous(),
        UIMessage::Focus(field) => model.focus = field,
        UIMessage::ScrollOrdersUp => {
            model.order_scroll = model.order_scroll.saturating_sub(1);
        }
        UIMessage::ScrollOrdersDown => {
            if model.order_scroll + 1 < model.orders.len() {
                model.order_scroll += 1;
            }
        }
    }
    model
}
