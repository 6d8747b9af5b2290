// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Closed value sets shared across entities.
//!
//! Every enum here is a closed set: the string forms are the exact values
//! accepted on the wire and written to the store. Anything else is rejected
//! at the API boundary before the store is touched.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The department an employee belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "Administration's/Domestic workers")]
    Administration,
    #[serde(rename = "Business Development Department")]
    BusinessDevelopment,
    #[serde(rename = "Projects Management")]
    ProjectManagement,
    #[serde(rename = "Projects workers")]
    ProjectWorkers,
    #[serde(rename = "Financial Management & Accounts")]
    Financial,
    #[serde(rename = "Board of Directors")]
    Board,
    #[serde(rename = "Human Resources")]
    HumanResources,
}

impl Department {
    /// Every department, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Administration,
        Self::BusinessDevelopment,
        Self::ProjectManagement,
        Self::ProjectWorkers,
        Self::Financial,
        Self::Board,
        Self::HumanResources,
    ];

    /// Returns the wire and storage form of this department.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Administration => "Administration's/Domestic workers",
            Self::BusinessDevelopment => "Business Development Department",
            Self::ProjectManagement => "Projects Management",
            Self::ProjectWorkers => "Projects workers",
            Self::Financial => "Financial Management & Accounts",
            Self::Board => "Board of Directors",
            Self::HumanResources => "Human Resources",
        }
    }
}

impl FromStr for Department {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|department| department.as_str() == s)
            .ok_or_else(|| DomainError::InvalidDepartment(s.to_string()))
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Medical insurance tier.
///
/// Used both for an employee's coverage and for the network tier a
/// service provider belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InsuranceTier {
    #[serde(rename = "Senior Premium 4.0")]
    SeniorPremium40,
    #[serde(rename = "Premium 4.0")]
    Premium40,
    #[serde(rename = "Premium 4.1")]
    Premium41,
    #[serde(rename = "Senior Premium 2.1")]
    SeniorPremium21,
    #[serde(rename = "Premium 2.1")]
    Premium21,
    #[serde(rename = "Premium 1.1")]
    Premium11,
    #[serde(rename = "Basic")]
    Basic,
    #[serde(rename = "Classic")]
    Classic,
}

impl InsuranceTier {
    /// Every tier, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::SeniorPremium40,
        Self::Premium40,
        Self::Premium41,
        Self::SeniorPremium21,
        Self::Premium21,
        Self::Premium11,
        Self::Basic,
        Self::Classic,
    ];

    /// Returns the wire and storage form of this tier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SeniorPremium40 => "Senior Premium 4.0",
            Self::Premium40 => "Premium 4.0",
            Self::Premium41 => "Premium 4.1",
            Self::SeniorPremium21 => "Senior Premium 2.1",
            Self::Premium21 => "Premium 2.1",
            Self::Premium11 => "Premium 1.1",
            Self::Basic => "Basic",
            Self::Classic => "Classic",
        }
    }
}

impl FromStr for InsuranceTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| DomainError::InvalidInsuranceTier(s.to_string()))
    }
}

impl std::fmt::Display for InsuranceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Insurance cover held on a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleInsuranceType {
    #[serde(rename = "Comprehensive insurance")]
    Comprehensive,
    #[serde(rename = "Third party \"against third parties\"")]
    ThirdParty,
}

impl VehicleInsuranceType {
    /// Every insurance type, in declaration order.
    pub const ALL: [Self; 2] = [Self::Comprehensive, Self::ThirdParty];

    /// Returns the wire and storage form of this insurance type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Comprehensive => "Comprehensive insurance",
            Self::ThirdParty => "Third party \"against third parties\"",
        }
    }
}

impl FromStr for VehicleInsuranceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Comprehensive insurance" => Ok(Self::Comprehensive),
            "Third party \"against third parties\"" => Ok(Self::ThirdParty),
            _ => Err(DomainError::InvalidVehicleInsuranceType(s.to_string())),
        }
    }
}

impl std::fmt::Display for VehicleInsuranceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Processing status of a medical or vehicle claim.
///
/// New claims always start as `Pending`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum ClaimStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Processing,
}

impl ClaimStatus {
    /// Every status, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Approved,
        Self::Rejected,
        Self::Processing,
    ];

    /// Returns the wire and storage form of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Processing => "Processing",
        }
    }
}

impl FromStr for ClaimStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Approved" => Ok(Self::Approved),
            "Rejected" => Ok(Self::Rejected),
            "Processing" => Ok(Self::Processing),
            _ => Err(DomainError::InvalidClaimStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cabin class of a flight reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightClass {
    Economy,
    Business,
    #[serde(rename = "First Class")]
    First,
}

impl FlightClass {
    /// Every cabin class, in declaration order.
    pub const ALL: [Self; 3] = [Self::Economy, Self::Business, Self::First];

    /// Returns the wire and storage form of this class.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Economy => "Economy",
            Self::Business => "Business",
            Self::First => "First Class",
        }
    }
}

impl FromStr for FlightClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Economy" => Ok(Self::Economy),
            "Business" => Ok(Self::Business),
            "First Class" => Ok(Self::First),
            _ => Err(DomainError::InvalidFlightClass(s.to_string())),
        }
    }
}

impl std::fmt::Display for FlightClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
