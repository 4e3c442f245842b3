use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use encomendas::clock::{Clock, FixedClock};
use encomendas::format::DeliveryFormat;
use encomendas::tea::message::{FormMessage, Message, OverlayMessage, TimeStep};
use encomendas::tea::{update, Model, Overlay};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 18)
        .unwrap()
        .and_hms_opt(14, 20, 5)
        .unwrap()
}

fn apply(model: Model, messages: &[Message], clock: &dyn Clock) -> Model {
    messages
        .iter()
        .cloned()
        .fold(model, |model, message| update(model, message, clock))
}

fn order_messages(name: &str, item: &str, quantity: &str) -> Vec<Message> {
    vec![
        Message::Form(FormMessage::SetClientName(name.to_string())),
        Message::Overlay(OverlayMessage::OpenItemPicker),
        Message::Form(FormMessage::ChooseItem(item.to_string())),
        Message::Form(FormMessage::SetQuantity(quantity.to_string())),
        Message::Form(FormMessage::Submit),
    ]
}

#[test]
fn test_maria_orders_a_cake() {
    let clock = FixedClock(now());
    let model = apply(
        Model::new(clock.now(), DeliveryFormat::default()),
        &order_messages("Maria", "Bolo", "2"),
        &clock,
    );

    assert_eq!(model.orders.len(), 1);
    let order = model.orders.get(0).unwrap();
    assert_eq!(order.client_name, "Maria");
    assert_eq!(order.item, "Bolo");
    assert_eq!(order.quantity, "2");
    assert_eq!(order.delivery_date, "18/10/2026");
    assert_eq!(order.delivery_time, "14:20");

    assert_eq!(model.form.client_name, "");
    assert_eq!(model.form.selected_item, "");
    assert_eq!(model.form.quantity, "");
}

#[test]
fn test_missing_client_name_is_rejected() {
    let clock = FixedClock(now());
    let model = apply(
        Model::new(clock.now(), DeliveryFormat::default()),
        &order_messages("", "Bolo", "2"),
        &clock,
    );

    assert!(model.orders.is_empty());
    let alert = model.alert().expect("validation alert");
    assert_eq!(alert.title, "Erro");
    assert_eq!(alert.message, "Por favor, preencha todos os campos!");
    assert_eq!(model.form.selected_item, "Bolo");
}

#[test]
fn test_each_submit_adds_exactly_one_order() {
    let clock = FixedClock(now());
    let mut model = Model::new(clock.now(), DeliveryFormat::default());
    let clients = ["Ana", "Bruno", "Carla"];

    for (i, client) in clients.iter().enumerate() {
        model = apply(model, &order_messages(client, "Salgados", "100"), &clock);
        assert_eq!(model.orders.len(), i + 1);
    }

    let recorded: Vec<&str> = model.orders.iter().map(|o| o.client_name.as_str()).collect();
    assert_eq!(recorded, clients);
}

#[test]
fn test_chosen_delivery_is_formatted_at_submission() {
    let clock = FixedClock(now());
    let date = NaiveDate::from_ymd_opt(2026, 12, 24).unwrap();
    let mut messages = vec![
        Message::Overlay(OverlayMessage::OpenDatePicker),
        Message::Form(FormMessage::DateChosen(Some(date))),
        Message::Overlay(OverlayMessage::OpenTimePicker),
        Message::Overlay(OverlayMessage::Time(TimeStep::Down)),
        Message::Form(FormMessage::TimeChosen(Some(NaiveTime::from_hms_opt(7, 0, 0).unwrap()))),
    ];
    messages.extend(order_messages("Dona Rosa", "Pães", "30"));

    let format = DeliveryFormat::new("%d/%m/%Y", "%Hh%M").unwrap();
    let model = apply(Model::new(clock.now(), format), &messages, &clock);

    let order = model.orders.get(0).unwrap();
    assert_eq!(order.delivery_date, "24/12/2026");
    assert_eq!(order.delivery_time, "07h00");

    // The form goes back to "now"
    assert_eq!(model.form.delivery_date, now().date());
    assert_eq!(model.form.delivery_time, now().time());
}

#[test]
fn test_cancelling_pickers_after_navigation_keeps_values() {
    let clock = FixedClock(now());
    let start = Model::new(clock.now(), DeliveryFormat::default());
    let messages = [
        Message::Overlay(OverlayMessage::OpenTimePicker),
        Message::Overlay(OverlayMessage::Time(TimeStep::Up)),
        Message::Overlay(OverlayMessage::Time(TimeStep::Now)),
        Message::Form(FormMessage::TimeChosen(None)),
    ];
    let model = apply(start.clone(), &messages, &clock);

    assert_eq!(model.form, start.form);
    assert_eq!(model.overlay, Overlay::Closed);
}
