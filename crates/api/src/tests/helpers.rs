// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use hr_admin_persistence::Persistence;

use crate::{
    CreateEmployeeRequest, CreateFlightReservationRequest, CreateMedicalClaimRequest,
    CreateServiceProviderRequest, CreateVehicleClaimRequest, CreateVehicleRequest,
};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn create_valid_employee_request() -> CreateEmployeeRequest {
    CreateEmployeeRequest {
        employee_id: String::from("EMP-1001"),
        first_name: String::from("Layla"),
        last_name: String::from("Haddad"),
        email: String::from("layla.haddad@example.com"),
        phone: String::from("+971 55 000 1111"),
        department: String::from("Human Resources"),
        position: String::from("HR Officer"),
        hire_date: String::from("2021-09-01"),
        medical_insurance_tier: String::from("Premium 2.1"),
        passport_number: Some(String::from("P1234567")),
        passport_expiry: Some(String::from("2030-12-31")),
    }
}

pub fn create_valid_vehicle_request() -> CreateVehicleRequest {
    CreateVehicleRequest {
        license_plate: String::from("DXB-A-12345"),
        make: String::from("Toyota"),
        model: String::from("Hilux"),
        year: 2022,
        vin: String::from("MR0FB8CD3N0000001"),
        assigned_employee_id: None,
        insurance_type: String::from("Comprehensive insurance"),
        insurance_policy_number: String::from("AXA-88-1002"),
        insurance_expiry: String::from("2026-03-31"),
        is_fleet: true,
    }
}

pub fn create_valid_medical_claim_request(employee_id: &str) -> CreateMedicalClaimRequest {
    CreateMedicalClaimRequest {
        employee_id: String::from(employee_id),
        provider_name: String::from("NMC Royal"),
        service_date: String::from("2025-04-02"),
        amount: 1_250.75,
        description: String::from("MRI scan"),
    }
}

pub fn create_valid_vehicle_claim_request(vehicle_id: &str) -> CreateVehicleClaimRequest {
    CreateVehicleClaimRequest {
        vehicle_id: String::from(vehicle_id),
        incident_date: String::from("2025-03-18"),
        description: String::from("Rear bumper damage"),
        amount: 3_400.0,
    }
}

pub fn create_valid_provider_request(name: &str) -> CreateServiceProviderRequest {
    CreateServiceProviderRequest {
        name: String::from(name),
        provider_type: String::from("hospital"),
        address: String::from("Al Wasl Rd"),
        phone: String::from("04 111 2222"),
        email: None,
        network_tier: String::from("Basic"),
        is_active: true,
    }
}

pub fn create_valid_flight_request(employee_id: &str) -> CreateFlightReservationRequest {
    CreateFlightReservationRequest {
        employee_id: String::from(employee_id),
        departure_city: String::from("Dubai"),
        arrival_city: String::from("London"),
        departure_date: String::from("2025-10-05"),
        return_date: None,
        flight_class: String::from("First Class"),
        purpose: String::from("Client meeting"),
        estimated_cost: 9_800.0,
    }
}
