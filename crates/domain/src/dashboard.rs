// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dashboard snapshot.
//!
//! The snapshot combines five independent counts with two grouped
//! breakdowns. Claim statuses are grouped per claim kind and then merged
//! with [`merge_status_counts`].

use crate::types::{ClaimStatus, Department};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A point-in-time summary across every collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_employees: usize,
    pub total_vehicles: usize,
    pub pending_medical_claims: usize,
    pub pending_vehicle_claims: usize,
    pub pending_flights: usize,
    /// Only departments with at least one employee appear.
    pub employees_by_department: BTreeMap<Department, usize>,
    /// Medical and vehicle claims combined.
    pub claims_by_status: BTreeMap<ClaimStatus, usize>,
}

/// Merges two count histograms by summing per key.
///
/// A key present on one side only keeps its count; a key present on both
/// sides gets the sum.
///
/// # Arguments
///
/// * `left` - The first histogram
/// * `right` - The second histogram
#[must_use]
pub fn merge_status_counts<K: Ord>(
    left: BTreeMap<K, usize>,
    right: BTreeMap<K, usize>,
) -> BTreeMap<K, usize> {
    let mut merged: BTreeMap<K, usize> = left;
    for (key, count) in right {
        *merged.entry(key).or_insert(0) += count;
    }
    merged
}
