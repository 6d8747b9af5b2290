// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Medical and vehicle claim queries.
//!
//! Claim listings are ordered by submission time, most recent first.
//! Claims submitted within the same microsecond fall back to insertion
//! order, newest first.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use hr_admin_domain::{
    MAX_LIST_RESULTS, MedicalClaim, MedicalClaimFilter, VehicleClaim, VehicleClaimFilter,
};

use crate::data_models::{MedicalClaimRow, VehicleClaimRow};
use crate::diesel_schema::{medical_claims, vehicle_claims};
use crate::error::PersistenceError;

/// Retrieves a medical claim by record id.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored row no longer
/// parses. Returns `Ok(None)` if no claim has this id.
pub fn get_medical_claim(
    conn: &mut SqliteConnection,
    id: &str,
) -> Result<Option<MedicalClaim>, PersistenceError> {
    debug!("Looking up medical claim by id: {}", id);

    medical_claims::table
        .filter(medical_claims::id.eq(id))
        .select(MedicalClaimRow::as_select())
        .first(conn)
        .optional()?
        .map(MedicalClaimRow::into_domain)
        .transpose()
}

/// Lists medical claims, newest submission first.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored row no longer
/// parses.
pub fn list_medical_claims(
    conn: &mut SqliteConnection,
    filter: &MedicalClaimFilter,
) -> Result<Vec<MedicalClaim>, PersistenceError> {
    debug!(?filter, "Listing medical claims");

    let mut query = medical_claims::table
        .select(MedicalClaimRow::as_select())
        .into_boxed();

    if let Some(employee_id) = &filter.employee_id {
        query = query.filter(medical_claims::employee_id.eq(employee_id.clone()));
    }
    if let Some(status) = filter.status {
        query = query.filter(medical_claims::status.eq(status.as_str()));
    }

    let rows: Vec<MedicalClaimRow> = query
        .order((
            medical_claims::submitted_date.desc(),
            medical_claims::doc_key.desc(),
        ))
        .limit(MAX_LIST_RESULTS)
        .load(conn)?;

    rows.into_iter().map(MedicalClaimRow::into_domain).collect()
}

/// Retrieves a vehicle claim by record id.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored row no longer
/// parses. Returns `Ok(None)` if no claim has this id.
pub fn get_vehicle_claim(
    conn: &mut SqliteConnection,
    id: &str,
) -> Result<Option<VehicleClaim>, PersistenceError> {
    debug!("Looking up vehicle claim by id: {}", id);

    vehicle_claims::table
        .filter(vehicle_claims::id.eq(id))
        .select(VehicleClaimRow::as_select())
        .first(conn)
        .optional()?
        .map(VehicleClaimRow::into_domain)
        .transpose()
}

/// Lists vehicle claims, newest submission first.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored row no longer
/// parses.
pub fn list_vehicle_claims(
    conn: &mut SqliteConnection,
    filter: &VehicleClaimFilter,
) -> Result<Vec<VehicleClaim>, PersistenceError> {
    debug!(?filter, "Listing vehicle claims");

    let mut query = vehicle_claims::table
        .select(VehicleClaimRow::as_select())
        .into_boxed();

    if let Some(vehicle_id) = &filter.vehicle_id {
        query = query.filter(vehicle_claims::vehicle_id.eq(vehicle_id.clone()));
    }
    if let Some(status) = filter.status {
        query = query.filter(vehicle_claims::status.eq(status.as_str()));
    }

    let rows: Vec<VehicleClaimRow> = query
        .order((
            vehicle_claims::submitted_date.desc(),
            vehicle_claims::doc_key.desc(),
        ))
        .limit(MAX_LIST_RESULTS)
        .load(conn)?;

    rows.into_iter().map(VehicleClaimRow::into_domain).collect()
}
