//! pt-BR display strings for record dates and payment amounts.
//!
//! Stored dates stay in ISO form; these helpers only shape what the operator
//! reads. Text that does not parse as a date is shown unchanged.

use chrono::{NaiveDate, NaiveDateTime};
use shared::{DisplayLabels, RecordLabels};

use super::clock::{DATE_FORMAT, DATE_TIME_FORMAT};
use super::currency_format::CurrencyFormat;
use super::entity_store::EntityStore;

pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";
pub const DISPLAY_DATE_TIME_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// `2024-08-15` -> `15/08/2024`
pub fn date_label(date: &str) -> String {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map(|d| d.format(DISPLAY_DATE_FORMAT).to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// `2024-08-23T09:00` -> `23/08/2024, 09:00:00`
pub fn date_time_label(value: &str) -> String {
    NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)
        .map(|d| d.format(DISPLAY_DATE_TIME_FORMAT).to_string())
        .unwrap_or_else(|_| value.to_string())
}

/// Labels for every record in the store, in collection order
pub fn build_display_labels(store: &EntityStore, currency: &CurrencyFormat) -> DisplayLabels {
    DisplayLabels {
        media: store
            .media()
            .iter()
            .map(|item| RecordLabels {
                id: item.id,
                date: date_label(&item.date),
                amount: None,
            })
            .collect(),
        payments: store
            .payments()
            .iter()
            .map(|payment| RecordLabels {
                id: payment.id,
                date: date_label(&payment.date),
                amount: Some(currency.format_amount(payment.amount)),
            })
            .collect(),
        clients: store
            .clients()
            .iter()
            .map(|client| RecordLabels {
                id: client.id,
                date: date_label(&client.next_session_date),
                amount: None,
            })
            .collect(),
        notifications: store
            .notifications()
            .iter()
            .map(|notification| RecordLabels {
                id: notification.id,
                date: date_time_label(&notification.scheduled_for),
                amount: None,
            })
            .collect(),
    }
}
