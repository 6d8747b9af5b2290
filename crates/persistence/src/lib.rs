// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the HR & fleet administration service.
//!
//! This crate stores the service's records as document collections on top
//! of `SQLite` via Diesel. Each entity type has its own table holding the
//! entity's full field set, addressed by the server-generated `id` string.
//!
//! ## Collections
//!
//! - `employees`
//! - `vehicles`
//! - `medical_claims`
//! - `vehicle_claims`
//! - `service_providers`
//! - `flight_reservations`
//!
//! References between collections (`employee_id`, `vehicle_id`,
//! `assigned_employee_id`) are plain strings. Nothing enforces that the
//! referenced record exists and nothing cascades.
//!
//! ## Lifecycle
//!
//! A `Persistence` handle is opened once, at process start, and closed
//! explicitly with [`Persistence::close`] at shutdown. Every method takes
//! `&mut self`; callers sharing a handle serialize access themselves.
//!
//! ## Testing Philosophy
//!
//! - Every test opens its own isolated in-memory database
//! - Migrations are embedded and applied on open
//! - `cargo xtask verify-migrations` checks migrations apply and revert cleanly

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::Connection;
use diesel::SqliteConnection;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

use hr_admin_domain::{
    ClaimStatus, ClaimStatusUpdate, Department, Employee, EmployeeDetails, EmployeeFilter,
    FlightReservation, FlightReservationFilter, FlightStatusUpdate, MedicalClaim,
    MedicalClaimFilter, ServiceProvider, ServiceProviderFilter, Vehicle, VehicleClaim,
    VehicleClaimFilter, VehicleFilter, current_timestamp,
};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use backend::sqlite::MIGRATIONS;
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the document collections.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared in-memory database, so handles
    /// never observe each other's data.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_hr_admin_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::open_collections(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::open_collections(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    /// Reports the journal mode of the open connection (`wal` for files).
    ///
    /// # Errors
    ///
    /// Returns an error if the pragma cannot be read.
    pub fn journal_mode(&mut self) -> Result<String, PersistenceError> {
        backend::sqlite::journal_mode(&mut self.conn)
    }

    /// Closes the underlying connection.
    ///
    /// Consumes the handle, so no operation can run after close.
    pub fn close(self) {
        info!("Closing persistence connection");
        drop(self.conn);
    }

    // ========================================================================
    // Employees
    // ========================================================================

    /// Stores a new employee record.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_employee(&mut self, employee: &Employee) -> Result<(), PersistenceError> {
        mutations::employees::insert_employee(&mut self.conn, employee)
    }

    /// Retrieves an employee by record id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` if absent.
    pub fn get_employee(&mut self, id: &str) -> Result<Option<Employee>, PersistenceError> {
        queries::employees::get_employee(&mut self.conn, id)
    }

    /// Lists employees matching the filter (at most 1000).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_employees(
        &mut self,
        filter: &EmployeeFilter,
    ) -> Result<Vec<Employee>, PersistenceError> {
        queries::employees::list_employees(&mut self.conn, filter)
    }

    /// Replaces every caller-owned field of an employee, refreshes
    /// `updated_at` and returns the stored result.
    ///
    /// The update and the read-back run in one transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the update or read-back fails. Returns `Ok(None)`
    /// if no employee has this id.
    pub fn update_employee(
        &mut self,
        id: &str,
        details: &EmployeeDetails,
    ) -> Result<Option<Employee>, PersistenceError> {
        self.conn.transaction(|conn| {
            let matched: usize = mutations::employees::replace_employee_details(
                conn,
                id,
                details,
                current_timestamp(),
            )?;
            if matched == 0 {
                return Ok(None);
            }
            queries::employees::get_employee(conn, id)
        })
    }

    // ========================================================================
    // Vehicles
    // ========================================================================

    /// Stores a new vehicle record.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_vehicle(&mut self, vehicle: &Vehicle) -> Result<(), PersistenceError> {
        mutations::vehicles::insert_vehicle(&mut self.conn, vehicle)
    }

    /// Retrieves a vehicle by record id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` if absent.
    pub fn get_vehicle(&mut self, id: &str) -> Result<Option<Vehicle>, PersistenceError> {
        queries::vehicles::get_vehicle(&mut self.conn, id)
    }

    /// Lists vehicles matching the filter (at most 1000).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_vehicles(
        &mut self,
        filter: &VehicleFilter,
    ) -> Result<Vec<Vehicle>, PersistenceError> {
        queries::vehicles::list_vehicles(&mut self.conn, filter)
    }

    /// Assigns a vehicle to an employee id and returns the stored result.
    ///
    /// The employee id is not checked against the employee collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the update or read-back fails. Returns `Ok(None)`
    /// if no vehicle has this id.
    pub fn assign_vehicle(
        &mut self,
        id: &str,
        employee_id: &str,
    ) -> Result<Option<Vehicle>, PersistenceError> {
        self.conn.transaction(|conn| {
            let matched: usize = mutations::vehicles::assign_vehicle(conn, id, employee_id)?;
            if matched == 0 {
                return Ok(None);
            }
            queries::vehicles::get_vehicle(conn, id)
        })
    }

    // ========================================================================
    // Claims
    // ========================================================================

    /// Stores a new medical claim.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_medical_claim(&mut self, claim: &MedicalClaim) -> Result<(), PersistenceError> {
        mutations::claims::insert_medical_claim(&mut self.conn, claim)
    }

    /// Retrieves a medical claim by record id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` if absent.
    pub fn get_medical_claim(
        &mut self,
        id: &str,
    ) -> Result<Option<MedicalClaim>, PersistenceError> {
        queries::claims::get_medical_claim(&mut self.conn, id)
    }

    /// Lists medical claims matching the filter, newest first (at most 1000).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_medical_claims(
        &mut self,
        filter: &MedicalClaimFilter,
    ) -> Result<Vec<MedicalClaim>, PersistenceError> {
        queries::claims::list_medical_claims(&mut self.conn, filter)
    }

    /// Applies a status update to a medical claim.
    ///
    /// # Returns
    ///
    /// `true` if a claim with this id existed and was updated.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_medical_claim_status(
        &mut self,
        id: &str,
        update: &ClaimStatusUpdate,
    ) -> Result<bool, PersistenceError> {
        let matched: usize =
            mutations::claims::update_medical_claim_status(&mut self.conn, id, update)?;
        Ok(matched > 0)
    }

    /// Stores a new vehicle claim.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_vehicle_claim(&mut self, claim: &VehicleClaim) -> Result<(), PersistenceError> {
        mutations::claims::insert_vehicle_claim(&mut self.conn, claim)
    }

    /// Retrieves a vehicle claim by record id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` if absent.
    pub fn get_vehicle_claim(
        &mut self,
        id: &str,
    ) -> Result<Option<VehicleClaim>, PersistenceError> {
        queries::claims::get_vehicle_claim(&mut self.conn, id)
    }

    /// Lists vehicle claims matching the filter, newest first (at most 1000).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_vehicle_claims(
        &mut self,
        filter: &VehicleClaimFilter,
    ) -> Result<Vec<VehicleClaim>, PersistenceError> {
        queries::claims::list_vehicle_claims(&mut self.conn, filter)
    }

    /// Applies a status update to a vehicle claim.
    ///
    /// # Returns
    ///
    /// `true` if a claim with this id existed and was updated.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_vehicle_claim_status(
        &mut self,
        id: &str,
        update: &ClaimStatusUpdate,
    ) -> Result<bool, PersistenceError> {
        let matched: usize =
            mutations::claims::update_vehicle_claim_status(&mut self.conn, id, update)?;
        Ok(matched > 0)
    }

    // ========================================================================
    // Service Providers
    // ========================================================================

    /// Stores a new service provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_service_provider(
        &mut self,
        provider: &ServiceProvider,
    ) -> Result<(), PersistenceError> {
        mutations::service_providers::insert_service_provider(&mut self.conn, provider)
    }

    /// Lists service providers matching the filter (at most 1000).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_service_providers(
        &mut self,
        filter: &ServiceProviderFilter,
    ) -> Result<Vec<ServiceProvider>, PersistenceError> {
        queries::service_providers::list_service_providers(&mut self.conn, filter)
    }

    // ========================================================================
    // Flight Reservations
    // ========================================================================

    /// Stores a new flight reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_flight_reservation(
        &mut self,
        reservation: &FlightReservation,
    ) -> Result<(), PersistenceError> {
        mutations::flights::insert_flight_reservation(&mut self.conn, reservation)
    }

    /// Retrieves a flight reservation by record id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` if absent.
    pub fn get_flight_reservation(
        &mut self,
        id: &str,
    ) -> Result<Option<FlightReservation>, PersistenceError> {
        queries::flights::get_flight_reservation(&mut self.conn, id)
    }

    /// Lists flight reservations matching the filter, newest first
    /// (at most 1000).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_flight_reservations(
        &mut self,
        filter: &FlightReservationFilter,
    ) -> Result<Vec<FlightReservation>, PersistenceError> {
        queries::flights::list_flight_reservations(&mut self.conn, filter)
    }

    /// Applies a status update to a flight reservation.
    ///
    /// # Returns
    ///
    /// `true` if a reservation with this id existed and was updated.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_flight_status(
        &mut self,
        id: &str,
        update: &FlightStatusUpdate,
    ) -> Result<bool, PersistenceError> {
        let matched: usize = mutations::flights::update_flight_status(&mut self.conn, id, update)?;
        Ok(matched > 0)
    }

    // ========================================================================
    // Dashboard Aggregations
    // ========================================================================

    /// Counts every employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_employees(&mut self) -> Result<usize, PersistenceError> {
        queries::dashboard::count_employees(&mut self.conn)
    }

    /// Counts every vehicle.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_vehicles(&mut self) -> Result<usize, PersistenceError> {
        queries::dashboard::count_vehicles(&mut self.conn)
    }

    /// Counts medical claims in the given status.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_medical_claims_with_status(
        &mut self,
        status: ClaimStatus,
    ) -> Result<usize, PersistenceError> {
        queries::dashboard::count_medical_claims_with_status(&mut self.conn, status)
    }

    /// Counts vehicle claims in the given status.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_vehicle_claims_with_status(
        &mut self,
        status: ClaimStatus,
    ) -> Result<usize, PersistenceError> {
        queries::dashboard::count_vehicle_claims_with_status(&mut self.conn, status)
    }

    /// Counts flight reservations whose status is exactly `Pending`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_pending_flights(&mut self) -> Result<usize, PersistenceError> {
        queries::dashboard::count_pending_flights(&mut self.conn)
    }

    /// Groups employees by department. Empty departments are omitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_employees_by_department(
        &mut self,
    ) -> Result<BTreeMap<Department, usize>, PersistenceError> {
        queries::dashboard::count_employees_by_department(&mut self.conn)
    }

    /// Groups medical claims by status.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_medical_claims_by_status(
        &mut self,
    ) -> Result<BTreeMap<ClaimStatus, usize>, PersistenceError> {
        queries::dashboard::count_medical_claims_by_status(&mut self.conn)
    }

    /// Groups vehicle claims by status.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_vehicle_claims_by_status(
        &mut self,
    ) -> Result<BTreeMap<ClaimStatus, usize>, PersistenceError> {
        queries::dashboard::count_vehicle_claims_by_status(&mut self.conn)
    }
}
