// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee collection queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use hr_admin_domain::{Employee, EmployeeFilter, MAX_LIST_RESULTS};

use crate::data_models::EmployeeRow;
use crate::diesel_schema::employees;
use crate::error::PersistenceError;

/// Retrieves an employee by record id.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `id` - The server-generated record id
///
/// # Errors
///
/// Returns an error if the database query fails or the stored row no longer
/// parses. Returns `Ok(None)` if no employee has this id.
pub fn get_employee(
    conn: &mut SqliteConnection,
    id: &str,
) -> Result<Option<Employee>, PersistenceError> {
    debug!("Looking up employee by id: {}", id);

    let result: Result<EmployeeRow, diesel::result::Error> = employees::table
        .filter(employees::id.eq(id))
        .select(EmployeeRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_domain()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists employees in insertion order, optionally by department.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored row no longer
/// parses.
pub fn list_employees(
    conn: &mut SqliteConnection,
    filter: &EmployeeFilter,
) -> Result<Vec<Employee>, PersistenceError> {
    debug!(?filter, "Listing employees");

    let mut query = employees::table
        .select(EmployeeRow::as_select())
        .into_boxed();

    if let Some(department) = filter.department {
        query = query.filter(employees::department.eq(department.as_str()));
    }

    let rows: Vec<EmployeeRow> = query
        .order(employees::doc_key.asc())
        .limit(MAX_LIST_RESULTS)
        .load(conn)?;

    rows.into_iter().map(EmployeeRow::into_domain).collect()
}
