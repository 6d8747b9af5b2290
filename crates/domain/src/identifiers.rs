// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Server-owned field generation.
//!
//! Record identifiers, claim numbers and timestamps are never accepted
//! from callers. They are produced here, once, when a record is created.

use time::{Duration, OffsetDateTime};
use uuid::Uuid;

/// Number of UUID characters kept in a claim number.
pub const CLAIM_NUMBER_SUFFIX_LEN: usize = 8;

/// Generates a fresh record identifier (a random UUID in hyphenated form).
#[must_use]
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// Returns the current UTC time truncated to microsecond precision.
///
/// Stored timestamps carry six fractional digits, so anything finer would
/// be lost on the way back out of the store.
#[must_use]
pub fn current_timestamp() -> OffsetDateTime {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    now - Duration::nanoseconds(i64::from(now.nanosecond() % 1_000))
}

/// The two kinds of insurance claim the service tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimKind {
    /// A medical claim raised by an employee.
    Medical,
    /// A damage claim raised against a fleet vehicle.
    Vehicle,
}

impl ClaimKind {
    /// Returns the claim number prefix for this kind.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Medical => "MED",
            Self::Vehicle => "VEH",
        }
    }

    /// Generates a new claim number, e.g. `MED-3F2A9C01`.
    ///
    /// The suffix is the first eight characters of a fresh UUID, uppercased.
    #[must_use]
    pub fn generate_claim_number(&self) -> String {
        let suffix: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(CLAIM_NUMBER_SUFFIX_LEN)
            .collect();
        format!("{}-{}", self.prefix(), suffix.to_uppercase())
    }

    /// Returns `true` if `value` has the shape of a claim number of this kind.
    #[must_use]
    pub fn is_claim_number(&self, value: &str) -> bool {
        value
            .strip_prefix(self.prefix())
            .and_then(|rest| rest.strip_prefix('-'))
            .is_some_and(|suffix| {
                suffix.len() == CLAIM_NUMBER_SUFFIX_LEN
                    && suffix
                        .chars()
                        .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_ids_are_distinct() {
        let first: String = new_record_id();
        let second: String = new_record_id();

        assert!(!first.is_empty());
        assert_ne!(first, second);
        assert!(Uuid::parse_str(&first).is_ok());
    }

    #[test]
    fn test_current_timestamp_has_microsecond_precision() {
        let now: OffsetDateTime = current_timestamp();
        assert_eq!(now.nanosecond() % 1_000, 0);
        assert_eq!(now.offset(), time::UtcOffset::UTC);
    }

    #[test]
    fn test_medical_claim_number_shape() {
        let number: String = ClaimKind::Medical.generate_claim_number();
        assert!(number.starts_with("MED-"));
        assert_eq!(number.len(), 12);
        assert!(ClaimKind::Medical.is_claim_number(&number));
        assert!(!ClaimKind::Vehicle.is_claim_number(&number));
    }

    #[test]
    fn test_vehicle_claim_number_shape() {
        let number: String = ClaimKind::Vehicle.generate_claim_number();
        assert!(number.starts_with("VEH-"));
        assert!(ClaimKind::Vehicle.is_claim_number(&number));
    }

    #[test]
    fn test_claim_number_rejects_lowercase_and_bad_length() {
        assert!(!ClaimKind::Medical.is_claim_number("MED-3f2a9c01"));
        assert!(!ClaimKind::Medical.is_claim_number("MED-3F2A9C0"));
        assert!(!ClaimKind::Medical.is_claim_number("MED3F2A9C01"));
        assert!(ClaimKind::Medical.is_claim_number("MED-3F2A9C01"));
    }
}
