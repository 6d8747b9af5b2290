// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Enumerated and date fields arrive as raw strings and are parsed by the
//! handlers, so a bad value is reported against the field that carried it.

use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

/// Body of `POST /employees` and `PUT /employees/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    /// Human-assigned employee code.
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// One of the department wire names.
    pub department: String,
    pub position: String,
    /// `YYYY-MM-DD`.
    pub hire_date: String,
    /// One of the insurance tier wire names.
    pub medical_insurance_tier: String,
    #[serde(default)]
    pub passport_number: Option<String>,
    /// `YYYY-MM-DD`, optional.
    #[serde(default)]
    pub passport_expiry: Option<String>,
}

/// Body of `POST /vehicles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateVehicleRequest {
    pub license_plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
    #[serde(default)]
    pub assigned_employee_id: Option<String>,
    /// One of the vehicle insurance type wire names.
    pub insurance_type: String,
    pub insurance_policy_number: String,
    /// `YYYY-MM-DD`.
    pub insurance_expiry: String,
    #[serde(default = "default_true")]
    pub is_fleet: bool,
}

/// Body of `POST /medical-claims`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMedicalClaimRequest {
    pub employee_id: String,
    pub provider_name: String,
    /// `YYYY-MM-DD`.
    pub service_date: String,
    pub amount: f64,
    pub description: String,
}

/// Body of `POST /vehicle-claims`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateVehicleClaimRequest {
    pub vehicle_id: String,
    /// `YYYY-MM-DD`.
    pub incident_date: String,
    pub description: String,
    pub amount: f64,
}

/// Body of `POST /service-providers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateServiceProviderRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub provider_type: String,
    pub address: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    /// One of the insurance tier wire names.
    pub network_tier: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Body of `POST /flight-reservations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateFlightReservationRequest {
    pub employee_id: String,
    pub departure_city: String,
    pub arrival_city: String,
    /// `YYYY-MM-DD`.
    pub departure_date: String,
    #[serde(default)]
    pub return_date: Option<String>,
    /// One of the flight class wire names.
    pub flight_class: String,
    pub purpose: String,
    pub estimated_cost: f64,
}

/// Query of `GET /employees`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEmployeesQuery {
    pub department: Option<String>,
}

/// Query of `GET /vehicles`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListVehiclesQuery {
    pub assigned_only: Option<bool>,
}

/// Query of `PUT /vehicles/{id}/assign`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignVehicleQuery {
    pub employee_id: String,
}

/// Query of `GET /medical-claims`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMedicalClaimsQuery {
    pub employee_id: Option<String>,
    pub status: Option<String>,
}

/// Query of `GET /vehicle-claims`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListVehicleClaimsQuery {
    pub vehicle_id: Option<String>,
    pub status: Option<String>,
}

/// Query of the claim status endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateClaimStatusQuery {
    /// One of the claim status wire names.
    pub status: String,
    pub notes: Option<String>,
}

/// Query of `GET /service-providers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListServiceProvidersQuery {
    pub network_tier: Option<String>,
    /// Defaults to `true` when absent.
    pub active_only: Option<bool>,
}

/// Query of `GET /flight-reservations`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFlightReservationsQuery {
    pub employee_id: Option<String>,
    pub status: Option<String>,
}

/// Query of `PUT /flight-reservations/{id}/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFlightStatusQuery {
    /// Free text.
    pub status: String,
    pub booking_reference: Option<String>,
}

/// A plain confirmation returned by the status endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
