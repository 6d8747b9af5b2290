// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod employee_tests;
mod initialization_tests;
mod vehicle_tests;

use time::macros::date;

use hr_admin_domain::{
    Department, EmployeeDetails, FlightClass, FlightReservationDetails, InsuranceTier,
    MedicalClaimDetails, ServiceProviderDetails, VehicleClaimDetails, VehicleDetails,
    VehicleInsuranceType,
};

pub fn create_test_employee_details(employee_id: &str, department: Department) -> EmployeeDetails {
    EmployeeDetails {
        employee_id: String::from(employee_id),
        first_name: String::from("Omar"),
        last_name: String::from("Saleh"),
        email: format!("{}@example.com", employee_id.to_lowercase()),
        phone: String::from("+971 50 123 4567"),
        department,
        position: String::from("Site Engineer"),
        hire_date: date!(2020 - 02 - 17),
        medical_insurance_tier: InsuranceTier::Premium40,
        passport_number: None,
        passport_expiry: None,
    }
}

pub fn create_test_vehicle_details(license_plate: &str) -> VehicleDetails {
    VehicleDetails {
        license_plate: String::from(license_plate),
        make: String::from("Nissan"),
        model: String::from("Patrol"),
        year: 2023,
        vin: String::from("JN1TANY62U0000001"),
        assigned_employee_id: None,
        insurance_type: VehicleInsuranceType::ThirdParty,
        insurance_policy_number: String::from("POL-2023-77"),
        insurance_expiry: date!(2026 - 08 - 31),
        is_fleet: true,
    }
}

pub fn create_test_medical_claim_details(employee_id: &str) -> MedicalClaimDetails {
    MedicalClaimDetails {
        employee_id: String::from(employee_id),
        provider_name: String::from("Mediclinic"),
        service_date: date!(2025 - 04 - 10),
        amount: 480.5,
        description: String::from("Physiotherapy"),
    }
}

pub fn create_test_vehicle_claim_details(vehicle_id: &str) -> VehicleClaimDetails {
    VehicleClaimDetails {
        vehicle_id: String::from(vehicle_id),
        incident_date: date!(2025 - 02 - 03),
        description: String::from("Windscreen crack"),
        amount: 900.0,
    }
}

pub fn create_test_provider_details(name: &str, is_active: bool) -> ServiceProviderDetails {
    ServiceProviderDetails {
        name: String::from(name),
        provider_type: String::from("clinic"),
        address: String::from("Sheikh Zayed Rd"),
        phone: String::from("04 000 0000"),
        email: Some(String::from("front-desk@example.com")),
        network_tier: InsuranceTier::Classic,
        is_active,
    }
}

pub fn create_test_flight_details(employee_id: &str) -> FlightReservationDetails {
    FlightReservationDetails {
        employee_id: String::from(employee_id),
        departure_city: String::from("Abu Dhabi"),
        arrival_city: String::from("Frankfurt"),
        departure_date: date!(2025 - 09 - 20),
        return_date: Some(date!(2025 - 09 - 27)),
        flight_class: FlightClass::Economy,
        purpose: String::from("Supplier audit"),
        estimated_cost: 2_150.0,
    }
}
