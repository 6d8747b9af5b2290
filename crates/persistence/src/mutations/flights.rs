// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Flight reservation mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use hr_admin_domain::{FlightReservation, FlightStatusUpdate};

use crate::data_models::{FlightStatusChangeset, NewFlightReservationRow};
use crate::diesel_schema::flight_reservations;
use crate::error::PersistenceError;

/// Inserts a complete flight reservation.
///
/// # Errors
///
/// Returns an error if the record cannot be encoded or inserted.
pub fn insert_flight_reservation(
    conn: &mut SqliteConnection,
    reservation: &FlightReservation,
) -> Result<(), PersistenceError> {
    diesel::insert_into(flight_reservations::table)
        .values(NewFlightReservationRow::from_domain(reservation)?)
        .execute(conn)?;

    info!(id = %reservation.id, employee_id = %reservation.employee_id, "Flight reservation created");
    Ok(())
}

/// Applies a status update to a flight reservation.
///
/// # Returns
///
/// The number of matched records (0 or 1).
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_flight_status(
    conn: &mut SqliteConnection,
    id: &str,
    update: &FlightStatusUpdate,
) -> Result<usize, PersistenceError> {
    let changes: FlightStatusChangeset<'_> = FlightStatusChangeset {
        status: &update.status,
        booking_reference: update.booking_reference.as_deref(),
    };

    let matched: usize =
        diesel::update(flight_reservations::table.filter(flight_reservations::id.eq(id)))
            .set(changes)
            .execute(conn)?;

    if matched > 0 {
        info!(id, status = %update.status, "Flight status updated");
    }
    Ok(matched)
}
