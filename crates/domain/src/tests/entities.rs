// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Department, Employee, EmployeeDetails, InsuranceTier, ServiceProvider,
    ServiceProviderDetails, Vehicle, VehicleDetails, VehicleInsuranceType,
};
use time::macros::date;

fn create_test_employee_details() -> EmployeeDetails {
    EmployeeDetails {
        employee_id: String::from("E-1001"),
        first_name: String::from("Amira"),
        last_name: String::from("Haddad"),
        email: String::from("amira.haddad@example.com"),
        phone: String::from("+971 50 000 0000"),
        department: Department::HumanResources,
        position: String::from("HR Officer"),
        hire_date: date!(2021 - 09 - 01),
        medical_insurance_tier: InsuranceTier::Premium21,
        passport_number: None,
        passport_expiry: None,
    }
}

#[test]
fn test_new_employee_gets_server_fields() {
    let employee: Employee = Employee::new(create_test_employee_details());

    assert!(!employee.id.is_empty());
    assert_eq!(employee.created_at, employee.updated_at);
    assert_eq!(employee.employee_id, "E-1001");
}

#[test]
fn test_employee_json_round_trip() {
    let mut details: EmployeeDetails = create_test_employee_details();
    details.passport_number = Some(String::from("P1234567"));
    details.passport_expiry = Some(date!(2030 - 01 - 31));
    let employee: Employee = Employee::new(details);

    let json: serde_json::Value = serde_json::to_value(&employee).unwrap();
    assert_eq!(json["department"], "Human Resources");
    assert_eq!(json["medical_insurance_tier"], "Premium 2.1");
    assert_eq!(json["hire_date"], "2021-09-01");
    assert_eq!(json["passport_expiry"], "2030-01-31");

    let decoded: Employee = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, employee);
}

#[test]
fn test_absent_optional_date_is_null_and_may_be_omitted() {
    let employee: Employee = Employee::new(create_test_employee_details());

    let mut json: serde_json::Value = serde_json::to_value(&employee).unwrap();
    assert_eq!(json["passport_expiry"], serde_json::Value::Null);

    json.as_object_mut().unwrap().remove("passport_expiry");
    let decoded: Employee = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.passport_expiry, None);
}

#[test]
fn test_malformed_date_is_not_decoded() {
    let employee: Employee = Employee::new(create_test_employee_details());
    let mut json: serde_json::Value = serde_json::to_value(&employee).unwrap();
    json["hire_date"] = serde_json::Value::from("01/09/2021");

    assert!(serde_json::from_value::<Employee>(json).is_err());
}

#[test]
fn test_vehicle_defaults_unassigned() {
    let vehicle: Vehicle = Vehicle::new(VehicleDetails {
        license_plate: String::from("DXB-12345"),
        make: String::from("Toyota"),
        model: String::from("Land Cruiser"),
        year: 2022,
        vin: String::from("JTMHV05J604123456"),
        assigned_employee_id: None,
        insurance_type: VehicleInsuranceType::Comprehensive,
        insurance_policy_number: String::from("POL-889"),
        insurance_expiry: date!(2026 - 05 - 31),
        is_fleet: true,
    });

    assert!(!vehicle.is_assigned());
    let json: serde_json::Value = serde_json::to_value(&vehicle).unwrap();
    assert_eq!(json["assigned_employee_id"], serde_json::Value::Null);
    assert_eq!(json["insurance_type"], "Comprehensive insurance");
}

#[test]
fn test_service_provider_type_field_name() {
    let provider: ServiceProvider = ServiceProvider::new(ServiceProviderDetails {
        name: String::from("Al Noor Hospital"),
        provider_type: String::from("hospital"),
        address: String::from("Khalifa St"),
        phone: String::from("02 000 0000"),
        email: None,
        network_tier: InsuranceTier::Basic,
        is_active: true,
    });

    let json: serde_json::Value = serde_json::to_value(&provider).unwrap();
    assert_eq!(json["type"], "hospital");
    assert!(json.get("provider_type").is_none());
    assert_eq!(json["network_tier"], "Basic");
}
