// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee collection mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use time::OffsetDateTime;
use tracing::{debug, info};

use hr_admin_domain::{Employee, EmployeeDetails};

use crate::data_models::{EmployeeChangeset, NewEmployeeRow};
use crate::diesel_schema::employees;
use crate::error::PersistenceError;

/// Inserts a complete employee record.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `employee` - The record to store, server-owned fields included
///
/// # Errors
///
/// Returns an error if the record cannot be encoded or inserted.
pub fn insert_employee(
    conn: &mut SqliteConnection,
    employee: &Employee,
) -> Result<(), PersistenceError> {
    diesel::insert_into(employees::table)
        .values(NewEmployeeRow::from_domain(employee)?)
        .execute(conn)?;

    info!(id = %employee.id, employee_id = %employee.employee_id, "Employee created");
    Ok(())
}

/// Replaces every caller-owned field of an employee and refreshes
/// `updated_at`. `id` and `created_at` are left untouched.
///
/// # Returns
///
/// The number of matched records (0 or 1).
///
/// # Errors
///
/// Returns an error if the update cannot be encoded or executed.
pub fn replace_employee_details(
    conn: &mut SqliteConnection,
    id: &str,
    details: &EmployeeDetails,
    updated_at: OffsetDateTime,
) -> Result<usize, PersistenceError> {
    debug!("Replacing employee details for id: {}", id);

    let changes: EmployeeChangeset<'_> = EmployeeChangeset::from_details(details, updated_at)?;
    let matched: usize = diesel::update(employees::table.filter(employees::id.eq(id)))
        .set(changes)
        .execute(conn)?;

    if matched > 0 {
        info!(id, "Employee updated");
    }
    Ok(matched)
}
