// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use hr_admin_domain::DomainError;
use hr_admin_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// API contract. The transport layer decides how each variant is surfaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// The identifier that was looked up.
        id: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Builds a `ResourceNotFound` for the given resource and id.
    #[must_use]
    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::ResourceNotFound {
            resource_type: resource_type.to_string(),
            id: id.to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound { resource_type, .. } => {
                write!(f, "{resource_type} not found")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// The field is inferred from the kind of value that failed to parse. Callers
/// that know the exact request field use [`invalid_field`] instead.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let field: &str = match &err {
        DomainError::InvalidDepartment(_) => "department",
        DomainError::InvalidInsuranceTier(_) => "insurance_tier",
        DomainError::InvalidVehicleInsuranceType(_) => "insurance_type",
        DomainError::InvalidClaimStatus(_) => "status",
        DomainError::InvalidFlightClass(_) => "flight_class",
        DomainError::DateParseError { .. } => "date",
    };
    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}

/// Translates a domain error raised while reading a specific request field.
#[must_use]
pub fn invalid_field(field: &str, err: DomainError) -> ApiError {
    match translate_domain_error(err) {
        ApiError::InvalidInput { message, .. } => ApiError::InvalidInput {
            field: field.to_string(),
            message,
        },
        other => other,
    }
}

/// Translates a persistence error into an API error.
///
/// Missing records are reported by the handlers with their own resource
/// name, so every store failure that reaches here is internal.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    ApiError::Internal {
        message: err.to_string(),
    }
}
