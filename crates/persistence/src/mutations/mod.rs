// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation modules.
//!
//! This module contains all state-changing operations for the persistence layer.
//! Records are never deleted; the only operations are inserts of complete
//! records and id-keyed updates.
//!
//! ## Module Organization
//!
//! - `employees`: Employee inserts and full-replace updates
//! - `vehicles`: Vehicle inserts and assignment
//! - `claims`: Claim inserts and status updates
//! - `service_providers`: Provider inserts
//! - `flights`: Reservation inserts and status updates

pub mod claims;
pub mod employees;
pub mod flights;
pub mod service_providers;
pub mod vehicles;
