// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Flight reservation queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use hr_admin_domain::{FlightReservation, FlightReservationFilter, MAX_LIST_RESULTS};

use crate::data_models::FlightReservationRow;
use crate::diesel_schema::flight_reservations;
use crate::error::PersistenceError;

/// Retrieves a flight reservation by record id.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored row no longer
/// parses. Returns `Ok(None)` if no reservation has this id.
pub fn get_flight_reservation(
    conn: &mut SqliteConnection,
    id: &str,
) -> Result<Option<FlightReservation>, PersistenceError> {
    debug!("Looking up flight reservation by id: {}", id);

    flight_reservations::table
        .filter(flight_reservations::id.eq(id))
        .select(FlightReservationRow::as_select())
        .first(conn)
        .optional()?
        .map(FlightReservationRow::into_domain)
        .transpose()
}

/// Lists flight reservations, most recently created first.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored row no longer
/// parses.
pub fn list_flight_reservations(
    conn: &mut SqliteConnection,
    filter: &FlightReservationFilter,
) -> Result<Vec<FlightReservation>, PersistenceError> {
    debug!(?filter, "Listing flight reservations");

    let mut query = flight_reservations::table
        .select(FlightReservationRow::as_select())
        .into_boxed();

    if let Some(employee_id) = &filter.employee_id {
        query = query.filter(flight_reservations::employee_id.eq(employee_id.clone()));
    }
    if let Some(status) = &filter.status {
        query = query.filter(flight_reservations::status.eq(status.clone()));
    }

    let rows: Vec<FlightReservationRow> = query
        .order((
            flight_reservations::created_at.desc(),
            flight_reservations::doc_key.desc(),
        ))
        .limit(MAX_LIST_RESULTS)
        .load(conn)?;

    rows.into_iter()
        .map(FlightReservationRow::into_domain)
        .collect()
}
