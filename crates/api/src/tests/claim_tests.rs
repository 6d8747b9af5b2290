// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hr_admin_domain::{ClaimKind, ClaimStatus, MedicalClaim, VehicleClaim};
use hr_admin_persistence::Persistence;

use crate::{
    ApiError, CreateMedicalClaimRequest, ListMedicalClaimsQuery, ListVehicleClaimsQuery,
    MessageResponse, UpdateClaimStatusQuery, list_medical_claims, list_vehicle_claims,
    submit_medical_claim, submit_vehicle_claim, update_medical_claim_status,
    update_vehicle_claim_status,
};

use super::helpers::{
    create_test_persistence, create_valid_medical_claim_request,
    create_valid_vehicle_claim_request,
};

fn status_query(status: &str, notes: Option<&str>) -> UpdateClaimStatusQuery {
    UpdateClaimStatusQuery {
        status: String::from(status),
        notes: notes.map(String::from),
    }
}

#[test]
fn test_submitted_claims_are_pending_with_claim_numbers() {
    let mut persistence: Persistence = create_test_persistence();
    let medical: MedicalClaim = submit_medical_claim(
        &mut persistence,
        &create_valid_medical_claim_request("emp-1"),
    )
    .unwrap();
    let vehicle: VehicleClaim = submit_vehicle_claim(
        &mut persistence,
        &create_valid_vehicle_claim_request("veh-1"),
    )
    .unwrap();

    assert_eq!(medical.status, ClaimStatus::Pending);
    assert_eq!(vehicle.status, ClaimStatus::Pending);
    assert!(ClaimKind::Medical.is_claim_number(&medical.claim_number));
    assert!(ClaimKind::Vehicle.is_claim_number(&vehicle.claim_number));
    assert_eq!(medical.processed_date, None);
}

#[test]
fn test_bad_service_date_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    let mut request: CreateMedicalClaimRequest = create_valid_medical_claim_request("emp-1");
    request.service_date = String::from("2025-02-30");

    let err: ApiError = submit_medical_claim(&mut persistence, &request).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "service_date"));
}

#[test]
fn test_status_update_returns_message_and_applies() {
    let mut persistence: Persistence = create_test_persistence();
    let claim: MedicalClaim = submit_medical_claim(
        &mut persistence,
        &create_valid_medical_claim_request("emp-1"),
    )
    .unwrap();

    let response: MessageResponse = update_medical_claim_status(
        &mut persistence,
        &claim.id,
        &status_query("Approved", Some("Covered in full")),
    )
    .unwrap();
    assert_eq!(response.message, "Claim status updated successfully");

    let approved: Vec<MedicalClaim> = list_medical_claims(
        &mut persistence,
        &ListMedicalClaimsQuery {
            employee_id: None,
            status: Some(String::from("Approved")),
        },
    )
    .unwrap();
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].notes.as_deref(), Some("Covered in full"));
    assert!(approved[0].processed_date.is_some());
}

#[test]
fn test_repeated_status_update_keeps_status_and_advances_processed_date() {
    let mut persistence: Persistence = create_test_persistence();
    let claim: MedicalClaim = submit_medical_claim(
        &mut persistence,
        &create_valid_medical_claim_request("emp-1"),
    )
    .unwrap();

    update_medical_claim_status(&mut persistence, &claim.id, &status_query("Approved", None))
        .unwrap();
    let first: MedicalClaim = persistence.get_medical_claim(&claim.id).unwrap().unwrap();

    std::thread::sleep(std::time::Duration::from_millis(5));

    update_medical_claim_status(&mut persistence, &claim.id, &status_query("Approved", None))
        .unwrap();
    let second: MedicalClaim = persistence.get_medical_claim(&claim.id).unwrap().unwrap();

    assert_eq!(first.status, ClaimStatus::Approved);
    assert_eq!(second.status, ClaimStatus::Approved);
    let first_processed: time::OffsetDateTime = first.processed_date.unwrap();
    let second_processed: time::OffsetDateTime = second.processed_date.unwrap();
    assert!(
        second_processed > first_processed,
        "processed_date should advance: {first_processed} then {second_processed}"
    );
    assert_eq!(second.submitted_date, claim.submitted_date);
}

#[test]
fn test_unknown_status_rejected_without_mutation() {
    let mut persistence: Persistence = create_test_persistence();
    let claim: VehicleClaim = submit_vehicle_claim(
        &mut persistence,
        &create_valid_vehicle_claim_request("veh-1"),
    )
    .unwrap();

    let err: ApiError = update_vehicle_claim_status(
        &mut persistence,
        &claim.id,
        &status_query("Closed", None),
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "status"));

    let stored: VehicleClaim = persistence.get_vehicle_claim(&claim.id).unwrap().unwrap();
    assert_eq!(stored, claim);
}

#[test]
fn test_status_update_on_missing_claim_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    let medical: ApiError =
        update_medical_claim_status(&mut persistence, "nope", &status_query("Rejected", None))
            .unwrap_err();
    let vehicle: ApiError =
        update_vehicle_claim_status(&mut persistence, "nope", &status_query("Rejected", None))
            .unwrap_err();

    assert_eq!(medical.to_string(), "Claim not found");
    assert_eq!(vehicle.to_string(), "Claim not found");
}

#[test]
fn test_list_claims_by_parent_and_status() {
    let mut persistence: Persistence = create_test_persistence();
    submit_vehicle_claim(
        &mut persistence,
        &create_valid_vehicle_claim_request("veh-1"),
    )
    .unwrap();
    let other: VehicleClaim = submit_vehicle_claim(
        &mut persistence,
        &create_valid_vehicle_claim_request("veh-2"),
    )
    .unwrap();

    let listed: Vec<VehicleClaim> = list_vehicle_claims(
        &mut persistence,
        &ListVehicleClaimsQuery {
            vehicle_id: Some(String::from("veh-2")),
            status: Some(String::from("Pending")),
        },
    )
    .unwrap();
    assert_eq!(listed, vec![other]);

    let result: Result<Vec<VehicleClaim>, ApiError> = list_vehicle_claims(
        &mut persistence,
        &ListVehicleClaimsQuery {
            vehicle_id: None,
            status: Some(String::from("pending")),
        },
    );
    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}
