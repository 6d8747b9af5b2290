// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain model for the HR & fleet administration service.
//!
//! This crate owns the closed value sets, the entity records and the
//! rules that produce server-owned fields (identifiers, claim numbers,
//! timestamps). It has no knowledge of storage or transport.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod claim;
mod dashboard;
mod employee;
mod error;
mod filters;
mod flight;
mod identifiers;
mod service_provider;
mod types;
mod validation;
mod vehicle;

#[cfg(test)]
mod tests;

// Serde adapter for `YYYY-MM-DD` dates: `#[serde(with = "crate::iso_date")]`,
// or `crate::iso_date::option` for optional fields.
time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

pub use claim::{
    ClaimStatusUpdate, MedicalClaim, MedicalClaimDetails, VehicleClaim, VehicleClaimDetails,
};
pub use dashboard::{DashboardStats, merge_status_counts};
pub use employee::{Employee, EmployeeDetails};
pub use error::DomainError;
pub use filters::{
    AssignmentFilter, EmployeeFilter, FlightReservationFilter, MAX_LIST_RESULTS,
    MedicalClaimFilter, ServiceProviderFilter, VehicleClaimFilter, VehicleFilter,
};
pub use flight::{
    DEFAULT_FLIGHT_STATUS, FlightReservation, FlightReservationDetails, FlightStatusUpdate,
};
pub use identifiers::{ClaimKind, current_timestamp, new_record_id};
pub use service_provider::{ServiceProvider, ServiceProviderDetails};
pub use types::{ClaimStatus, Department, FlightClass, InsuranceTier, VehicleInsuranceType};
pub use vehicle::{Vehicle, VehicleDetails};
pub use validation::{DATE_FORMAT, non_empty, parse_date, parse_optional_date};
