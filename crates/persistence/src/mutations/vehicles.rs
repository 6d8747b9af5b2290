// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vehicle collection mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use hr_admin_domain::Vehicle;

use crate::data_models::NewVehicleRow;
use crate::diesel_schema::vehicles;
use crate::error::PersistenceError;

/// Inserts a complete vehicle record.
///
/// # Errors
///
/// Returns an error if the record cannot be encoded or inserted.
pub fn insert_vehicle(
    conn: &mut SqliteConnection,
    vehicle: &Vehicle,
) -> Result<(), PersistenceError> {
    diesel::insert_into(vehicles::table)
        .values(NewVehicleRow::from_domain(vehicle)?)
        .execute(conn)?;

    info!(id = %vehicle.id, license_plate = %vehicle.license_plate, "Vehicle created");
    Ok(())
}

/// Sets the assigned employee of a vehicle.
///
/// The employee id is stored as given; nothing checks that it exists.
///
/// # Returns
///
/// The number of matched records (0 or 1).
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn assign_vehicle(
    conn: &mut SqliteConnection,
    id: &str,
    employee_id: &str,
) -> Result<usize, PersistenceError> {
    let matched: usize = diesel::update(vehicles::table.filter(vehicles::id.eq(id)))
        .set(vehicles::assigned_employee_id.eq(employee_id))
        .execute(conn)?;

    if matched > 0 {
        info!(id, employee_id, "Vehicle assigned");
    }
    Ok(matched)
}
