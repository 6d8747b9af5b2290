// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Medical and vehicle insurance claims.
//!
//! Both claim kinds share a status lifecycle: every claim is submitted as
//! `Pending` with a generated claim number, and is later moved between
//! statuses by an operator. Each status change stamps `processed_date`.

use crate::identifiers::{ClaimKind, current_timestamp, new_record_id};
use crate::types::ClaimStatus;
use crate::iso_date;
use crate::validation::non_empty;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// The caller-supplied fields of a medical claim.
#[derive(Debug, Clone, PartialEq)]
pub struct MedicalClaimDetails {
    pub employee_id: String,
    pub provider_name: String,
    pub service_date: Date,
    pub amount: f64,
    pub description: String,
}

/// A stored medical claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalClaim {
    pub id: String,
    pub employee_id: String,
    /// `MED-XXXXXXXX`, generated at submission.
    pub claim_number: String,
    pub provider_name: String,
    #[serde(with = "iso_date")]
    pub service_date: Date,
    pub amount: f64,
    pub description: String,
    pub status: ClaimStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_date: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub processed_date: Option<OffsetDateTime>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl MedicalClaim {
    /// Submits a new medical claim in the `Pending` state.
    #[must_use]
    pub fn submit(details: MedicalClaimDetails) -> Self {
        Self {
            id: new_record_id(),
            employee_id: details.employee_id,
            claim_number: ClaimKind::Medical.generate_claim_number(),
            provider_name: details.provider_name,
            service_date: details.service_date,
            amount: details.amount,
            description: details.description,
            status: ClaimStatus::Pending,
            submitted_date: current_timestamp(),
            processed_date: None,
            notes: None,
        }
    }
}

/// The caller-supplied fields of a vehicle claim.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleClaimDetails {
    pub vehicle_id: String,
    pub incident_date: Date,
    pub description: String,
    pub amount: f64,
}

/// A stored vehicle claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleClaim {
    pub id: String,
    pub vehicle_id: String,
    /// `VEH-XXXXXXXX`, generated at submission.
    pub claim_number: String,
    #[serde(with = "iso_date")]
    pub incident_date: Date,
    pub description: String,
    pub amount: f64,
    pub status: ClaimStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_date: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub processed_date: Option<OffsetDateTime>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl VehicleClaim {
    /// Submits a new vehicle claim in the `Pending` state.
    #[must_use]
    pub fn submit(details: VehicleClaimDetails) -> Self {
        Self {
            id: new_record_id(),
            vehicle_id: details.vehicle_id,
            claim_number: ClaimKind::Vehicle.generate_claim_number(),
            incident_date: details.incident_date,
            description: details.description,
            amount: details.amount,
            status: ClaimStatus::Pending,
            submitted_date: current_timestamp(),
            processed_date: None,
            notes: None,
        }
    }
}

/// A status change applied to a single claim.
///
/// `processed_date` is always stamped, even when the status does not
/// change. `notes` is only written when a non-empty value is supplied;
/// otherwise any existing notes are left in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimStatusUpdate {
    pub status: ClaimStatus,
    pub processed_date: OffsetDateTime,
    pub notes: Option<String>,
}

impl ClaimStatusUpdate {
    /// Builds an update stamped with the current time.
    #[must_use]
    pub fn new(status: ClaimStatus, notes: Option<String>) -> Self {
        Self {
            status,
            processed_date: current_timestamp(),
            notes: non_empty(notes),
        }
    }
}
