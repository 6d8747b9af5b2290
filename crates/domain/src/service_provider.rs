// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::identifiers::{current_timestamp, new_record_id};
use crate::types::InsuranceTier;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The caller-supplied fields of a service provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceProviderDetails {
    pub name: String,
    /// Free text: hospital, clinic, lab and so on.
    pub provider_type: String,
    pub address: String,
    pub phone: String,
    pub email: Option<String>,
    pub network_tier: InsuranceTier,
    pub is_active: bool,
}

/// A healthcare provider in the company's insurance network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceProvider {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub provider_type: String,
    pub address: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    pub network_tier: InsuranceTier,
    pub is_active: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl ServiceProvider {
    /// Registers a new provider with a fresh id.
    #[must_use]
    pub fn new(details: ServiceProviderDetails) -> Self {
        Self {
            id: new_record_id(),
            name: details.name,
            provider_type: details.provider_type,
            address: details.address,
            phone: details.phone,
            email: details.email,
            network_tier: details.network_tier,
            is_active: details.is_active,
            created_at: current_timestamp(),
        }
    }
}
