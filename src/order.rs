//! Submitted orders and the session's append-only order list

use crate::form::FormState;
use crate::format::DeliveryFormat;
use std::fmt;
use uuid::Uuid;

/// Unique order identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderId(Uuid);

impl OrderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A submitted order
///
/// Delivery date and time are kept as the strings shown to the user at
/// submission time and are never re-formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub client_name: String,
    pub item: String,
    pub quantity: String,
    pub delivery_date: String,
    pub delivery_time: String,
}

impl Order {
    /// Snapshot the form into a new order with a fresh id
    pub fn from_form(form: &FormState, format: &DeliveryFormat) -> Self {
        Self {
            id: OrderId::new(),
            client_name: form.client_name.clone(),
            item: form.selected_item.clone(),
            quantity: form.quantity.clone(),
            delivery_date: format.date(form.delivery_date),
            delivery_time: format.time(form.delivery_time),
        }
    }
}

/// Orders submitted during this session, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderList {
    orders: Vec<Order>,
}

impl OrderList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an order at the end of the list
    pub fn push(&mut self, order: Order) {
        self.orders.push(order);
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Order> {
        self.orders.get(index)
    }

    pub fn last(&self) -> Option<&Order> {
        self.orders.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.orders.iter()
    }
}

impl<'a> IntoIterator for &'a OrderList {
    type Item = &'a Order;
    type IntoIter = std::slice::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.iter()
    }
}
