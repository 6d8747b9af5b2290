// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Flight reservations.
//!
//! Unlike claims, a reservation's status is free text. Any string is
//! accepted on update; only `Pending` has meaning to the service, as the
//! initial value and as the dashboard's pending count.

use crate::identifiers::{current_timestamp, new_record_id};
use crate::types::FlightClass;
use crate::iso_date;
use crate::validation::non_empty;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// Status given to every new reservation.
pub const DEFAULT_FLIGHT_STATUS: &str = "Pending";

/// The caller-supplied fields of a flight reservation.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightReservationDetails {
    pub employee_id: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub departure_date: Date,
    pub return_date: Option<Date>,
    pub flight_class: FlightClass,
    pub purpose: String,
    pub estimated_cost: f64,
}

/// A stored flight reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightReservation {
    pub id: String,
    pub employee_id: String,
    pub departure_city: String,
    pub arrival_city: String,
    #[serde(with = "iso_date")]
    pub departure_date: Date,
    #[serde(default, with = "iso_date::option")]
    pub return_date: Option<Date>,
    pub flight_class: FlightClass,
    pub purpose: String,
    pub status: String,
    pub estimated_cost: f64,
    #[serde(default)]
    pub booking_reference: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl FlightReservation {
    /// Books a new reservation in the default `Pending` status.
    #[must_use]
    pub fn book(details: FlightReservationDetails) -> Self {
        Self {
            id: new_record_id(),
            employee_id: details.employee_id,
            departure_city: details.departure_city,
            arrival_city: details.arrival_city,
            departure_date: details.departure_date,
            return_date: details.return_date,
            flight_class: details.flight_class,
            purpose: details.purpose,
            status: DEFAULT_FLIGHT_STATUS.to_string(),
            estimated_cost: details.estimated_cost,
            booking_reference: None,
            created_at: current_timestamp(),
        }
    }
}

/// A status change applied to a single reservation.
///
/// `booking_reference` is only written when non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightStatusUpdate {
    pub status: String,
    pub booking_reference: Option<String>,
}

impl FlightStatusUpdate {
    #[must_use]
    pub fn new(status: String, booking_reference: Option<String>) -> Self {
        Self {
            status,
            booking_reference: non_empty(booking_reference),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_new_reservation_is_pending() {
        let reservation: FlightReservation = FlightReservation::book(FlightReservationDetails {
            employee_id: String::from("emp-1"),
            departure_city: String::from("Dubai"),
            arrival_city: String::from("London"),
            departure_date: date!(2025 - 06 - 01),
            return_date: None,
            flight_class: FlightClass::Business,
            purpose: String::from("Client visit"),
            estimated_cost: 3_400.0,
        });

        assert_eq!(reservation.status, DEFAULT_FLIGHT_STATUS);
        assert!(reservation.booking_reference.is_none());
    }

    #[test]
    fn test_status_update_accepts_any_status() {
        let update: FlightStatusUpdate =
            FlightStatusUpdate::new(String::from("Waitlisted"), Some(String::new()));

        assert_eq!(update.status, "Waitlisted");
        assert_eq!(update.booking_reference, None);
    }

    #[test]
    fn test_reservation_json_uses_wire_class_name() {
        let reservation: FlightReservation = FlightReservation::book(FlightReservationDetails {
            employee_id: String::from("emp-2"),
            departure_city: String::from("Cairo"),
            arrival_city: String::from("Riyadh"),
            departure_date: date!(2025 - 07 - 10),
            return_date: Some(date!(2025 - 07 - 14)),
            flight_class: FlightClass::First,
            purpose: String::from("Board meeting"),
            estimated_cost: 5_000.0,
        });
        let json: serde_json::Value = serde_json::to_value(&reservation).unwrap();

        assert_eq!(json["flight_class"], "First Class");
        assert_eq!(json["return_date"], "2025-07-14");
        assert_eq!(json["status"], "Pending");
    }
}
