// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hr_admin_domain::DomainError;
use hr_admin_persistence::PersistenceError;

use crate::{ApiError, invalid_field, translate_domain_error, translate_persistence_error};

#[test]
fn test_domain_error_field_follows_value_kind() {
    let err: ApiError =
        translate_domain_error(DomainError::InvalidClaimStatus(String::from("Closed")));
    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("status"),
            message: String::from("Invalid claim status: 'Closed'"),
        }
    );
}

#[test]
fn test_invalid_field_overrides_inferred_field() {
    let err: ApiError = invalid_field(
        "network_tier",
        DomainError::InvalidInsuranceTier(String::from("Gold")),
    );
    assert_eq!(
        err.to_string(),
        "Invalid input for field 'network_tier': Invalid insurance tier: 'Gold'"
    );
}

#[test]
fn test_persistence_failures_are_internal() {
    let err: ApiError = translate_persistence_error(PersistenceError::DatabaseError(
        String::from("disk I/O error"),
    ));
    assert_eq!(
        err,
        ApiError::Internal {
            message: String::from("Database error: disk I/O error"),
        }
    );

    let stale: ApiError = translate_persistence_error(PersistenceError::ReconstructionError(
        String::from("Invalid department: 'Legal'"),
    ));
    assert!(matches!(stale, ApiError::Internal { .. }));
}
