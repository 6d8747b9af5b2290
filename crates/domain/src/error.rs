// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Department is not one of the recognized departments.
    InvalidDepartment(String),
    /// Insurance tier is not one of the recognized tiers.
    InvalidInsuranceTier(String),
    /// Vehicle insurance type is not one of the recognized types.
    InvalidVehicleInsuranceType(String),
    /// Claim status is not one of the recognized statuses.
    InvalidClaimStatus(String),
    /// Flight class is not one of the recognized classes.
    InvalidFlightClass(String),
    /// Failed to parse a calendar date.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDepartment(value) => write!(f, "Invalid department: '{value}'"),
            Self::InvalidInsuranceTier(value) => write!(f, "Invalid insurance tier: '{value}'"),
            Self::InvalidVehicleInsuranceType(value) => {
                write!(f, "Invalid vehicle insurance type: '{value}'")
            }
            Self::InvalidClaimStatus(value) => write!(f, "Invalid claim status: '{value}'"),
            Self::InvalidFlightClass(value) => write!(f, "Invalid flight class: '{value}'"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
