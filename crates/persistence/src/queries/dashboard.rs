// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Count and group-by queries backing the dashboard.
//!
//! Each function issues a single read. Group-by results only contain keys
//! that are present in the data; nothing is zero-filled.

use diesel::SqliteConnection;
use diesel::dsl::count_star;
use diesel::prelude::*;
use num_traits::ToPrimitive;
use std::collections::BTreeMap;
use std::str::FromStr;

use hr_admin_domain::{ClaimStatus, DEFAULT_FLIGHT_STATUS, Department};

use crate::diesel_schema::{
    employees, flight_reservations, medical_claims, vehicle_claims, vehicles,
};
use crate::error::PersistenceError;

fn to_count(count: i64) -> Result<usize, PersistenceError> {
    count
        .to_usize()
        .ok_or_else(|| PersistenceError::DatabaseError("Count conversion failed".to_string()))
}

/// Counts every employee.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_employees(conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
    let count: i64 = employees::table.select(count_star()).first(conn)?;
    to_count(count)
}

/// Counts every vehicle.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_vehicles(conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
    let count: i64 = vehicles::table.select(count_star()).first(conn)?;
    to_count(count)
}

/// Counts medical claims in the given status.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_medical_claims_with_status(
    conn: &mut SqliteConnection,
    status: ClaimStatus,
) -> Result<usize, PersistenceError> {
    let count: i64 = medical_claims::table
        .filter(medical_claims::status.eq(status.as_str()))
        .select(count_star())
        .first(conn)?;
    to_count(count)
}

/// Counts vehicle claims in the given status.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_vehicle_claims_with_status(
    conn: &mut SqliteConnection,
    status: ClaimStatus,
) -> Result<usize, PersistenceError> {
    let count: i64 = vehicle_claims::table
        .filter(vehicle_claims::status.eq(status.as_str()))
        .select(count_star())
        .first(conn)?;
    to_count(count)
}

/// Counts flight reservations whose status is exactly `Pending`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_pending_flights(conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
    let count: i64 = flight_reservations::table
        .filter(flight_reservations::status.eq(DEFAULT_FLIGHT_STATUS))
        .select(count_star())
        .first(conn)?;
    to_count(count)
}

/// Groups employees by department.
///
/// # Errors
///
/// Returns an error if the database query fails, a count cannot be
/// converted, or a stored department is no longer recognized.
pub fn count_employees_by_department(
    conn: &mut SqliteConnection,
) -> Result<BTreeMap<Department, usize>, PersistenceError> {
    let rows: Vec<(String, i64)> = employees::table
        .group_by(employees::department)
        .select((employees::department, count_star()))
        .load(conn)?;

    collect_grouped(rows)
}

/// Groups medical claims by status.
///
/// # Errors
///
/// Returns an error if the database query fails, a count cannot be
/// converted, or a stored status is no longer recognized.
pub fn count_medical_claims_by_status(
    conn: &mut SqliteConnection,
) -> Result<BTreeMap<ClaimStatus, usize>, PersistenceError> {
    let rows: Vec<(String, i64)> = medical_claims::table
        .group_by(medical_claims::status)
        .select((medical_claims::status, count_star()))
        .load(conn)?;

    collect_grouped(rows)
}

/// Groups vehicle claims by status.
///
/// # Errors
///
/// Returns an error if the database query fails, a count cannot be
/// converted, or a stored status is no longer recognized.
pub fn count_vehicle_claims_by_status(
    conn: &mut SqliteConnection,
) -> Result<BTreeMap<ClaimStatus, usize>, PersistenceError> {
    let rows: Vec<(String, i64)> = vehicle_claims::table
        .group_by(vehicle_claims::status)
        .select((vehicle_claims::status, count_star()))
        .load(conn)?;

    collect_grouped(rows)
}

fn collect_grouped<K>(rows: Vec<(String, i64)>) -> Result<BTreeMap<K, usize>, PersistenceError>
where
    K: Ord + FromStr<Err = hr_admin_domain::DomainError>,
{
    let mut result: BTreeMap<K, usize> = BTreeMap::new();
    for (key, count_i64) in rows {
        let key: K = K::from_str(&key)?;
        result.insert(key, to_count(count_i64)?);
    }
    Ok(result)
}
