// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::identifiers::{current_timestamp, new_record_id};
use crate::types::VehicleInsuranceType;
use crate::iso_date;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// The caller-supplied fields of a vehicle record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleDetails {
    pub license_plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
    pub assigned_employee_id: Option<String>,
    pub insurance_type: VehicleInsuranceType,
    pub insurance_policy_number: String,
    pub insurance_expiry: Date,
    pub is_fleet: bool,
}

/// A stored vehicle record.
///
/// `assigned_employee_id` is a soft reference. Nothing checks that the
/// employee it names exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub license_plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
    #[serde(default)]
    pub assigned_employee_id: Option<String>,
    pub insurance_type: VehicleInsuranceType,
    pub insurance_policy_number: String,
    #[serde(with = "iso_date")]
    pub insurance_expiry: Date,
    pub is_fleet: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Vehicle {
    /// Creates a new vehicle record with a fresh id.
    #[must_use]
    pub fn new(details: VehicleDetails) -> Self {
        Self {
            id: new_record_id(),
            license_plate: details.license_plate,
            make: details.make,
            model: details.model,
            year: details.year,
            vin: details.vin,
            assigned_employee_id: details.assigned_employee_id,
            insurance_type: details.insurance_type,
            insurance_policy_number: details.insurance_policy_number,
            insurance_expiry: details.insurance_expiry,
            is_fleet: details.is_fleet,
            created_at: current_timestamp(),
        }
    }

    /// Returns `true` if the vehicle is currently assigned to someone.
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.assigned_employee_id.is_some()
    }
}
