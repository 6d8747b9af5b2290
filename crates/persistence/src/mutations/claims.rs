// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Medical and vehicle claim mutations.
//!
//! A status update is a single match-and-set statement. The caller learns
//! whether the claim existed from the matched row count.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use hr_admin_domain::{ClaimStatusUpdate, MedicalClaim, VehicleClaim};

use crate::data_models::{
    MedicalClaimStatusChangeset, NewMedicalClaimRow, NewVehicleClaimRow,
    VehicleClaimStatusChangeset, format_timestamp,
};
use crate::diesel_schema::{medical_claims, vehicle_claims};
use crate::error::PersistenceError;

/// Inserts a complete medical claim.
///
/// # Errors
///
/// Returns an error if the record cannot be encoded or inserted.
pub fn insert_medical_claim(
    conn: &mut SqliteConnection,
    claim: &MedicalClaim,
) -> Result<(), PersistenceError> {
    diesel::insert_into(medical_claims::table)
        .values(NewMedicalClaimRow::from_domain(claim)?)
        .execute(conn)?;

    info!(id = %claim.id, claim_number = %claim.claim_number, "Medical claim submitted");
    Ok(())
}

/// Applies a status update to a medical claim.
///
/// # Returns
///
/// The number of matched records (0 or 1).
///
/// # Errors
///
/// Returns an error if the update cannot be encoded or executed.
pub fn update_medical_claim_status(
    conn: &mut SqliteConnection,
    id: &str,
    update: &ClaimStatusUpdate,
) -> Result<usize, PersistenceError> {
    let changes: MedicalClaimStatusChangeset<'_> = MedicalClaimStatusChangeset {
        status: update.status.as_str(),
        processed_date: format_timestamp(update.processed_date)?,
        notes: update.notes.as_deref(),
    };

    let matched: usize = diesel::update(medical_claims::table.filter(medical_claims::id.eq(id)))
        .set(changes)
        .execute(conn)?;

    if matched > 0 {
        info!(id, status = %update.status, "Medical claim status updated");
    }
    Ok(matched)
}

/// Inserts a complete vehicle claim.
///
/// # Errors
///
/// Returns an error if the record cannot be encoded or inserted.
pub fn insert_vehicle_claim(
    conn: &mut SqliteConnection,
    claim: &VehicleClaim,
) -> Result<(), PersistenceError> {
    diesel::insert_into(vehicle_claims::table)
        .values(NewVehicleClaimRow::from_domain(claim)?)
        .execute(conn)?;

    info!(id = %claim.id, claim_number = %claim.claim_number, "Vehicle claim submitted");
    Ok(())
}

/// Applies a status update to a vehicle claim.
///
/// # Returns
///
/// The number of matched records (0 or 1).
///
/// # Errors
///
/// Returns an error if the update cannot be encoded or executed.
pub fn update_vehicle_claim_status(
    conn: &mut SqliteConnection,
    id: &str,
    update: &ClaimStatusUpdate,
) -> Result<usize, PersistenceError> {
    let changes: VehicleClaimStatusChangeset<'_> = VehicleClaimStatusChangeset {
        status: update.status.as_str(),
        processed_date: format_timestamp(update.processed_date)?,
        notes: update.notes.as_deref(),
    };

    let matched: usize = diesel::update(vehicle_claims::table.filter(vehicle_claims::id.eq(id)))
        .set(changes)
        .execute(conn)?;

    if matched > 0 {
        info!(id, status = %update.status, "Vehicle claim status updated");
    }
    Ok(matched)
}
