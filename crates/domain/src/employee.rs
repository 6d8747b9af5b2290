// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::identifiers::{current_timestamp, new_record_id};
use crate::types::{Department, InsuranceTier};
use crate::iso_date;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// The caller-supplied fields of an employee record.
///
/// Used unchanged for both creation and full-replace updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDetails {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: Department,
    pub position: String,
    pub hire_date: Date,
    pub medical_insurance_tier: InsuranceTier,
    pub passport_number: Option<String>,
    pub passport_expiry: Option<Date>,
}

/// A stored employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Server-generated identifier. Never reassigned.
    pub id: String,
    /// Company staff number, as supplied by the caller.
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: Department,
    pub position: String,
    #[serde(with = "iso_date")]
    pub hire_date: Date,
    pub medical_insurance_tier: InsuranceTier,
    #[serde(default)]
    pub passport_number: Option<String>,
    #[serde(default, with = "iso_date::option")]
    pub passport_expiry: Option<Date>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Employee {
    /// Creates a new employee record with a fresh id and timestamps.
    #[must_use]
    pub fn new(details: EmployeeDetails) -> Self {
        let now: OffsetDateTime = current_timestamp();
        Self {
            id: new_record_id(),
            employee_id: details.employee_id,
            first_name: details.first_name,
            last_name: details.last_name,
            email: details.email,
            phone: details.phone,
            department: details.department,
            position: details.position,
            hire_date: details.hire_date,
            medical_insurance_tier: details.medical_insurance_tier,
            passport_number: details.passport_number,
            passport_expiry: details.passport_expiry,
            created_at: now,
            updated_at: now,
        }
    }
}
