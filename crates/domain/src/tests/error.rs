// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidDepartment(String::from("Marketing"));
    assert_eq!(format!("{err}"), "Invalid department: 'Marketing'");

    let err: DomainError = DomainError::InvalidInsuranceTier(String::from("Gold"));
    assert_eq!(format!("{err}"), "Invalid insurance tier: 'Gold'");

    let err: DomainError = DomainError::InvalidVehicleInsuranceType(String::from("Full"));
    assert_eq!(format!("{err}"), "Invalid vehicle insurance type: 'Full'");

    let err: DomainError = DomainError::InvalidClaimStatus(String::from("Closed"));
    assert_eq!(format!("{err}"), "Invalid claim status: 'Closed'");

    let err: DomainError = DomainError::InvalidFlightClass(String::from("Premium"));
    assert_eq!(format!("{err}"), "Invalid flight class: 'Premium'");

    let err: DomainError = DomainError::DateParseError {
        date_string: String::from("2024-13-01"),
        error: String::from("out of range"),
    };
    assert_eq!(
        format!("{err}"),
        "Failed to parse date '2024-13-01': out of range"
    );
}

#[test]
fn test_domain_error_is_std_error() {
    let err: Box<dyn std::error::Error> =
        Box::new(DomainError::InvalidClaimStatus(String::from("x")));
    assert_eq!(err.to_string(), "Invalid claim status: 'x'");
}
