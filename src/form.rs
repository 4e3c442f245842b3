//! In-progress order being composed on the form

use crate::error::{RequiredField, ValidationError};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Fields bound to the form controls
///
/// Nothing here is validated for correctness. Only the presence of the
/// client name, item and quantity is checked, and only at submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub client_name: String,
    /// One of the catalog names, or empty when nothing is selected
    pub selected_item: String,
    /// Free text; never parsed as a number
    pub quantity: String,
    pub delivery_date: NaiveDate,
    pub delivery_time: NaiveTime,
}

impl FormState {
    /// Empty form with delivery defaulting to `now`
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            client_name: String::new(),
            selected_item: String::new(),
            quantity: String::new(),
            delivery_date: now.date(),
            delivery_time: now.time(),
        }
    }

    /// Restore every field to its default, taking `now` as the new
    /// delivery date and time
    pub fn reset(&mut self, now: NaiveDateTime) {
        *self = Self::new(now);
    }

    /// Check that the required fields are non-empty
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<RequiredField> = [
            (RequiredField::ClientName, &self.client_name),
            (RequiredField::Item, &self.selected_item),
            (RequiredField::Quantity, &self.quantity),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap()
    }

    fn filled() -> FormState {
        let mut form = FormState::new(now());
        form.client_name = "Maria".to_string();
        form.selected_item = "Bolo".to_string();
        form.quantity = "2".to_string();
        form
    }

    #[test]
    fn test_new_form_defaults() {
        let form = FormState::new(now());
        assert!(form.client_name.is_empty());
        assert!(form.selected_item.is_empty());
        assert!(form.quantity.is_empty());
        assert_eq!(form.delivery_date, now().date());
        assert_eq!(form.delivery_time, now().time());
    }

    #[test]
    fn test_validate_complete_form() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_validate_reports_each_missing_field() {
        let mut form = filled();
        form.client_name.clear();
        form.quantity.clear();

        let error = form.validate().unwrap_err();
        assert_eq!(
            error.missing(),
            &[RequiredField::ClientName, RequiredField::Quantity]
        );
    }

    #[test]
    fn test_validate_accepts_unparsed_values() {
        let mut form = filled();
        form.quantity = "dois e meio".to_string();
        form.client_name = " ".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_reset_uses_new_now() {
        let mut form = filled();
        let later = now() + chrono::Duration::hours(3);
        form.reset(later);
        assert_eq!(form, FormState::new(later));
    }
}
