// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vehicle collection queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use hr_admin_domain::{AssignmentFilter, MAX_LIST_RESULTS, Vehicle, VehicleFilter};

use crate::data_models::VehicleRow;
use crate::diesel_schema::vehicles;
use crate::error::PersistenceError;

/// Retrieves a vehicle by record id.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored row no longer
/// parses. Returns `Ok(None)` if no vehicle has this id.
pub fn get_vehicle(
    conn: &mut SqliteConnection,
    id: &str,
) -> Result<Option<Vehicle>, PersistenceError> {
    debug!("Looking up vehicle by id: {}", id);

    vehicles::table
        .filter(vehicles::id.eq(id))
        .select(VehicleRow::as_select())
        .first(conn)
        .optional()?
        .map(VehicleRow::into_domain)
        .transpose()
}

/// Lists vehicles in insertion order.
///
/// `AssignmentFilter::Assigned` keeps vehicles with a non-null assignment;
/// `AssignmentFilter::Unassigned` keeps those without one.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored row no longer
/// parses.
pub fn list_vehicles(
    conn: &mut SqliteConnection,
    filter: &VehicleFilter,
) -> Result<Vec<Vehicle>, PersistenceError> {
    debug!(?filter, "Listing vehicles");

    let mut query = vehicles::table.select(VehicleRow::as_select()).into_boxed();

    match filter.assignment {
        AssignmentFilter::Any => {}
        AssignmentFilter::Assigned => {
            query = query.filter(vehicles::assigned_employee_id.is_not_null());
        }
        AssignmentFilter::Unassigned => {
            query = query.filter(vehicles::assigned_employee_id.is_null());
        }
    }

    let rows: Vec<VehicleRow> = query
        .order(vehicles::doc_key.asc())
        .limit(MAX_LIST_RESULTS)
        .load(conn)?;

    rows.into_iter().map(VehicleRow::into_domain).collect()
}
