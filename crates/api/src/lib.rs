// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the HR & fleet administration service.
//!
//! Handlers here are transport-agnostic: they take raw request DTOs,
//! convert them into domain values, and drive a [`Persistence`] handle.
//! Conversion always completes before the store is touched, so a rejected
//! request never leaves a partial record behind.
//!
//! [`Persistence`]: hr_admin_persistence::Persistence

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
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, invalid_field, translate_domain_error, translate_persistence_error};
pub use handlers::{
    assign_vehicle, book_flight_reservation, create_employee, create_service_provider,
    create_vehicle, get_dashboard, get_employee, list_employees, list_flight_reservations,
    list_medical_claims, list_service_providers, list_vehicle_claims, list_vehicles,
    submit_medical_claim, submit_vehicle_claim, update_employee, update_flight_status,
    update_medical_claim_status, update_vehicle_claim_status,
};
pub use request_response::{
    AssignVehicleQuery, CreateEmployeeRequest, CreateFlightReservationRequest,
    CreateMedicalClaimRequest, CreateServiceProviderRequest, CreateVehicleClaimRequest,
    CreateVehicleRequest, ListEmployeesQuery, ListFlightReservationsQuery,
    ListMedicalClaimsQuery, ListServiceProvidersQuery, ListVehicleClaimsQuery, ListVehiclesQuery,
    MessageResponse, UpdateClaimStatusQuery, UpdateFlightStatusQuery,
};
