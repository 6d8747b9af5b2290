// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! List filters.
//!
//! Each list operation accepts a small fixed set of optional parameters.
//! A parameter that is present becomes an exact-match clause; an absent
//! one imposes no constraint. Clauses are combined with AND. Empty strings
//! are treated as absent.

use crate::types::{ClaimStatus, Department, InsuranceTier};
use crate::validation::non_empty;

/// Upper bound on the number of records any list operation returns.
pub const MAX_LIST_RESULTS: i64 = 1000;

/// Filter for listing employees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    pub department: Option<Department>,
}

/// How a vehicle listing treats assignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssignmentFilter {
    /// No constraint on assignment.
    #[default]
    Any,
    /// Only vehicles with an assigned employee.
    Assigned,
    /// Only vehicles with no assigned employee.
    Unassigned,
}

impl From<Option<bool>> for AssignmentFilter {
    fn from(assigned_only: Option<bool>) -> Self {
        match assigned_only {
            None => Self::Any,
            Some(true) => Self::Assigned,
            Some(false) => Self::Unassigned,
        }
    }
}

/// Filter for listing vehicles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VehicleFilter {
    pub assignment: AssignmentFilter,
}

/// Filter for listing medical claims.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedicalClaimFilter {
    pub employee_id: Option<String>,
    pub status: Option<ClaimStatus>,
}

impl MedicalClaimFilter {
    #[must_use]
    pub fn new(employee_id: Option<String>, status: Option<ClaimStatus>) -> Self {
        Self {
            employee_id: non_empty(employee_id),
            status,
        }
    }
}

/// Filter for listing vehicle claims.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleClaimFilter {
    pub vehicle_id: Option<String>,
    pub status: Option<ClaimStatus>,
}

impl VehicleClaimFilter {
    #[must_use]
    pub fn new(vehicle_id: Option<String>, status: Option<ClaimStatus>) -> Self {
        Self {
            vehicle_id: non_empty(vehicle_id),
            status,
        }
    }
}

/// Filter for listing service providers.
///
/// Inactive providers are hidden unless `active_only` is explicitly
/// turned off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceProviderFilter {
    pub network_tier: Option<InsuranceTier>,
    pub active_only: bool,
}

impl Default for ServiceProviderFilter {
    fn default() -> Self {
        Self {
            network_tier: None,
            active_only: true,
        }
    }
}

/// Filter for listing flight reservations.
///
/// `status` is matched verbatim since reservation status is free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightReservationFilter {
    pub employee_id: Option<String>,
    pub status: Option<String>,
}

impl FlightReservationFilter {
    #[must_use]
    pub fn new(employee_id: Option<String>, status: Option<String>) -> Self {
        Self {
            employee_id: non_empty(employee_id),
            status: non_empty(status),
        }
    }
}
