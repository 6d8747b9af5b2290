// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `employees`: Employee lookups and listings
//! - `vehicles`: Vehicle lookups and listings
//! - `claims`: Medical and vehicle claim lookups and listings
//! - `service_providers`: Provider listings
//! - `flights`: Flight reservation lookups and listings
//! - `dashboard`: Count and group-by aggregations

pub mod claims;
pub mod dashboard;
pub mod employees;
pub mod flights;
pub mod service_providers;
pub mod vehicles;
