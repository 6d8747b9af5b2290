// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row representations of the stored collections.
//!
//! Each collection has a `*Row` struct for reads and a `New*Row` struct for
//! inserts. Enumerated fields are stored as their wire strings, dates as
//! `YYYY-MM-DD`, flags as `0`/`1` and timestamps in a fixed-width UTC form
//! that sorts chronologically.

use diesel::prelude::*;
use std::str::FromStr;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use hr_admin_domain::{
    ClaimStatus, Department, Employee, EmployeeDetails, FlightClass, FlightReservation,
    InsuranceTier, MedicalClaim, ServiceProvider, Vehicle, VehicleClaim, VehicleInsuranceType,
    DATE_FORMAT, parse_date, parse_optional_date,
};

use crate::diesel_schema::{
    employees, flight_reservations, medical_claims, service_providers, vehicle_claims, vehicles,
};
use crate::error::PersistenceError;

/// Storage format for timestamps, e.g. `2026-03-01T09:15:02.004100Z`.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]Z"
);

/// Encodes a timestamp for storage.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted.
pub fn format_timestamp(timestamp: OffsetDateTime) -> Result<String, PersistenceError> {
    timestamp
        .to_offset(UtcOffset::UTC)
        .format(TIMESTAMP_FORMAT)
        .map_err(|e| PersistenceError::SerializationError(format!("timestamp: {e}")))
}

/// Decodes a stored timestamp.
///
/// # Errors
///
/// Returns an error if the stored text is not in the storage format.
pub fn parse_timestamp(value: &str) -> Result<OffsetDateTime, PersistenceError> {
    PrimitiveDateTime::parse(value, TIMESTAMP_FORMAT)
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|e| {
            PersistenceError::ReconstructionError(format!("Invalid timestamp '{value}': {e}"))
        })
}

/// Encodes a calendar date for storage as `YYYY-MM-DD`.
fn encode_date(date: Date) -> Result<String, PersistenceError> {
    date.format(DATE_FORMAT)
        .map_err(|e| PersistenceError::SerializationError(format!("date: {e}")))
}

fn encode_optional_date(date: Option<Date>) -> Result<Option<String>, PersistenceError> {
    date.map(encode_date).transpose()
}

fn parse_optional_timestamp(
    value: Option<&str>,
) -> Result<Option<OffsetDateTime>, PersistenceError> {
    value.map(parse_timestamp).transpose()
}

fn parse_enum<T: FromStr<Err = hr_admin_domain::DomainError>>(
    value: &str,
) -> Result<T, PersistenceError> {
    T::from_str(value).map_err(PersistenceError::from)
}

// ============================================================================
// Employees
// ============================================================================

/// Diesel Queryable struct for employee rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = employees)]
pub struct EmployeeRow {
    pub id: String,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub hire_date: String,
    pub medical_insurance_tier: String,
    pub passport_number: Option<String>,
    pub passport_expiry: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl EmployeeRow {
    /// Rebuilds the domain record from a stored row.
    ///
    /// # Errors
    ///
    /// Returns an error if any stored value no longer parses.
    pub fn into_domain(self) -> Result<Employee, PersistenceError> {
        Ok(Employee {
            department: parse_enum::<Department>(&self.department)?,
            medical_insurance_tier: parse_enum::<InsuranceTier>(&self.medical_insurance_tier)?,
            hire_date: parse_date(&self.hire_date)?,
            passport_expiry: parse_optional_date(self.passport_expiry.as_deref())?,
            created_at: parse_timestamp(&self.created_at)?,
            updated_at: parse_timestamp(&self.updated_at)?,
            id: self.id,
            employee_id: self.employee_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            position: self.position,
            passport_number: self.passport_number,
        })
    }
}

/// Insertable employee row.
#[derive(Insertable)]
#[diesel(table_name = employees)]
pub struct NewEmployeeRow<'a> {
    pub id: &'a str,
    pub employee_id: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub department: &'static str,
    pub position: &'a str,
    pub hire_date: String,
    pub medical_insurance_tier: &'static str,
    pub passport_number: Option<&'a str>,
    pub passport_expiry: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl<'a> NewEmployeeRow<'a> {
    /// Encodes an employee for insertion.
    ///
    /// # Errors
    ///
    /// Returns an error if a timestamp cannot be encoded.
    pub fn from_domain(employee: &'a Employee) -> Result<Self, PersistenceError> {
        Ok(Self {
            id: &employee.id,
            employee_id: &employee.employee_id,
            first_name: &employee.first_name,
            last_name: &employee.last_name,
            email: &employee.email,
            phone: &employee.phone,
            department: employee.department.as_str(),
            position: &employee.position,
            hire_date: encode_date(employee.hire_date)?,
            medical_insurance_tier: employee.medical_insurance_tier.as_str(),
            passport_number: employee.passport_number.as_deref(),
            passport_expiry: encode_optional_date(employee.passport_expiry)?,
            created_at: format_timestamp(employee.created_at)?,
            updated_at: format_timestamp(employee.updated_at)?,
        })
    }
}

/// Full-replace changeset for an employee.
///
/// Absent optional fields are written as `NULL`. `id` and `created_at`
/// are not part of the changeset.
#[derive(AsChangeset)]
#[diesel(table_name = employees, treat_none_as_null = true)]
pub struct EmployeeChangeset<'a> {
    pub employee_id: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub department: &'static str,
    pub position: &'a str,
    pub hire_date: String,
    pub medical_insurance_tier: &'static str,
    pub passport_number: Option<&'a str>,
    pub passport_expiry: Option<String>,
    pub updated_at: String,
}

impl<'a> EmployeeChangeset<'a> {
    /// Encodes the caller-owned fields of an employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp cannot be encoded.
    pub fn from_details(
        details: &'a EmployeeDetails,
        updated_at: OffsetDateTime,
    ) -> Result<Self, PersistenceError> {
        Ok(Self {
            employee_id: &details.employee_id,
            first_name: &details.first_name,
            last_name: &details.last_name,
            email: &details.email,
            phone: &details.phone,
            department: details.department.as_str(),
            position: &details.position,
            hire_date: encode_date(details.hire_date)?,
            medical_insurance_tier: details.medical_insurance_tier.as_str(),
            passport_number: details.passport_number.as_deref(),
            passport_expiry: encode_optional_date(details.passport_expiry)?,
            updated_at: format_timestamp(updated_at)?,
        })
    }
}

// ============================================================================
// Vehicles
// ============================================================================

/// Diesel Queryable struct for vehicle rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = vehicles)]
pub struct VehicleRow {
    pub id: String,
    pub license_plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
    pub assigned_employee_id: Option<String>,
    pub insurance_type: String,
    pub insurance_policy_number: String,
    pub insurance_expiry: String,
    pub is_fleet: i32,
    pub created_at: String,
}

impl VehicleRow {
    /// Rebuilds the domain record from a stored row.
    ///
    /// # Errors
    ///
    /// Returns an error if any stored value no longer parses.
    pub fn into_domain(self) -> Result<Vehicle, PersistenceError> {
        Ok(Vehicle {
            insurance_type: parse_enum::<VehicleInsuranceType>(&self.insurance_type)?,
            insurance_expiry: parse_date(&self.insurance_expiry)?,
            created_at: parse_timestamp(&self.created_at)?,
            is_fleet: self.is_fleet != 0,
            id: self.id,
            license_plate: self.license_plate,
            make: self.make,
            model: self.model,
            year: self.year,
            vin: self.vin,
            assigned_employee_id: self.assigned_employee_id,
            insurance_policy_number: self.insurance_policy_number,
        })
    }
}

/// Insertable vehicle row.
#[derive(Insertable)]
#[diesel(table_name = vehicles)]
pub struct NewVehicleRow<'a> {
    pub id: &'a str,
    pub license_plate: &'a str,
    pub make: &'a str,
    pub model: &'a str,
    pub year: i32,
    pub vin: &'a str,
    pub assigned_employee_id: Option<&'a str>,
    pub insurance_type: &'static str,
    pub insurance_policy_number: &'a str,
    pub insurance_expiry: String,
    pub is_fleet: i32,
    pub created_at: String,
}

impl<'a> NewVehicleRow<'a> {
    /// Encodes a vehicle for insertion.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp cannot be encoded.
    pub fn from_domain(vehicle: &'a Vehicle) -> Result<Self, PersistenceError> {
        Ok(Self {
            id: &vehicle.id,
            license_plate: &vehicle.license_plate,
            make: &vehicle.make,
            model: &vehicle.model,
            year: vehicle.year,
            vin: &vehicle.vin,
            assigned_employee_id: vehicle.assigned_employee_id.as_deref(),
            insurance_type: vehicle.insurance_type.as_str(),
            insurance_policy_number: &vehicle.insurance_policy_number,
            insurance_expiry: encode_date(vehicle.insurance_expiry)?,
            is_fleet: i32::from(vehicle.is_fleet),
            created_at: format_timestamp(vehicle.created_at)?,
        })
    }
}

// ============================================================================
// Claims
// ============================================================================

/// Diesel Queryable struct for medical claim rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = medical_claims)]
pub struct MedicalClaimRow {
    pub id: String,
    pub employee_id: String,
    pub claim_number: String,
    pub provider_name: String,
    pub service_date: String,
    pub amount: f64,
    pub description: String,
    pub status: String,
    pub submitted_date: String,
    pub processed_date: Option<String>,
    pub notes: Option<String>,
}

impl MedicalClaimRow {
    /// Rebuilds the domain record from a stored row.
    ///
    /// # Errors
    ///
    /// Returns an error if any stored value no longer parses.
    pub fn into_domain(self) -> Result<MedicalClaim, PersistenceError> {
        Ok(MedicalClaim {
            service_date: parse_date(&self.service_date)?,
            status: parse_enum::<ClaimStatus>(&self.status)?,
            submitted_date: parse_timestamp(&self.submitted_date)?,
            processed_date: parse_optional_timestamp(self.processed_date.as_deref())?,
            id: self.id,
            employee_id: self.employee_id,
            claim_number: self.claim_number,
            provider_name: self.provider_name,
            amount: self.amount,
            description: self.description,
            notes: self.notes,
        })
    }
}

/// Insertable medical claim row.
#[derive(Insertable)]
#[diesel(table_name = medical_claims)]
pub struct NewMedicalClaimRow<'a> {
    pub id: &'a str,
    pub employee_id: &'a str,
    pub claim_number: &'a str,
    pub provider_name: &'a str,
    pub service_date: String,
    pub amount: f64,
    pub description: &'a str,
    pub status: &'static str,
    pub submitted_date: String,
    pub processed_date: Option<String>,
    pub notes: Option<&'a str>,
}

impl<'a> NewMedicalClaimRow<'a> {
    /// Encodes a medical claim for insertion.
    ///
    /// # Errors
    ///
    /// Returns an error if a timestamp cannot be encoded.
    pub fn from_domain(claim: &'a MedicalClaim) -> Result<Self, PersistenceError> {
        Ok(Self {
            id: &claim.id,
            employee_id: &claim.employee_id,
            claim_number: &claim.claim_number,
            provider_name: &claim.provider_name,
            service_date: encode_date(claim.service_date)?,
            amount: claim.amount,
            description: &claim.description,
            status: claim.status.as_str(),
            submitted_date: format_timestamp(claim.submitted_date)?,
            processed_date: claim.processed_date.map(format_timestamp).transpose()?,
            notes: claim.notes.as_deref(),
        })
    }
}

/// Diesel Queryable struct for vehicle claim rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = vehicle_claims)]
pub struct VehicleClaimRow {
    pub id: String,
    pub vehicle_id: String,
    pub claim_number: String,
    pub incident_date: String,
    pub description: String,
    pub amount: f64,
    pub status: String,
    pub submitted_date: String,
    pub processed_date: Option<String>,
    pub notes: Option<String>,
}

impl VehicleClaimRow {
    /// Rebuilds the domain record from a stored row.
    ///
    /// # Errors
    ///
    /// Returns an error if any stored value no longer parses.
    pub fn into_domain(self) -> Result<VehicleClaim, PersistenceError> {
        Ok(VehicleClaim {
            incident_date: parse_date(&self.incident_date)?,
            status: parse_enum::<ClaimStatus>(&self.status)?,
            submitted_date: parse_timestamp(&self.submitted_date)?,
            processed_date: parse_optional_timestamp(self.processed_date.as_deref())?,
            id: self.id,
            vehicle_id: self.vehicle_id,
            claim_number: self.claim_number,
            description: self.description,
            amount: self.amount,
            notes: self.notes,
        })
    }
}

/// Insertable vehicle claim row.
#[derive(Insertable)]
#[diesel(table_name = vehicle_claims)]
pub struct NewVehicleClaimRow<'a> {
    pub id: &'a str,
    pub vehicle_id: &'a str,
    pub claim_number: &'a str,
    pub incident_date: String,
    pub description: &'a str,
    pub amount: f64,
    pub status: &'static str,
    pub submitted_date: String,
    pub processed_date: Option<String>,
    pub notes: Option<&'a str>,
}

impl<'a> NewVehicleClaimRow<'a> {
    /// Encodes a vehicle claim for insertion.
    ///
    /// # Errors
    ///
    /// Returns an error if a timestamp cannot be encoded.
    pub fn from_domain(claim: &'a VehicleClaim) -> Result<Self, PersistenceError> {
        Ok(Self {
            id: &claim.id,
            vehicle_id: &claim.vehicle_id,
            claim_number: &claim.claim_number,
            incident_date: encode_date(claim.incident_date)?,
            description: &claim.description,
            amount: claim.amount,
            status: claim.status.as_str(),
            submitted_date: format_timestamp(claim.submitted_date)?,
            processed_date: claim.processed_date.map(format_timestamp).transpose()?,
            notes: claim.notes.as_deref(),
        })
    }
}

/// Status change for a medical claim. `None` notes leave the column alone.
#[derive(AsChangeset)]
#[diesel(table_name = medical_claims)]
pub struct MedicalClaimStatusChangeset<'a> {
    pub status: &'static str,
    pub processed_date: String,
    pub notes: Option<&'a str>,
}

/// Status change for a vehicle claim. `None` notes leave the column alone.
#[derive(AsChangeset)]
#[diesel(table_name = vehicle_claims)]
pub struct VehicleClaimStatusChangeset<'a> {
    pub status: &'static str,
    pub processed_date: String,
    pub notes: Option<&'a str>,
}

// ============================================================================
// Service providers
// ============================================================================

/// Diesel Queryable struct for service provider rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = service_providers)]
pub struct ServiceProviderRow {
    pub id: String,
    pub name: String,
    pub provider_type: String,
    pub address: String,
    pub phone: String,
    pub email: Option<String>,
    pub network_tier: String,
    pub is_active: i32,
    pub created_at: String,
}

impl ServiceProviderRow {
    /// Rebuilds the domain record from a stored row.
    ///
    /// # Errors
    ///
    /// Returns an error if any stored value no longer parses.
    pub fn into_domain(self) -> Result<ServiceProvider, PersistenceError> {
        Ok(ServiceProvider {
            network_tier: parse_enum::<InsuranceTier>(&self.network_tier)?,
            created_at: parse_timestamp(&self.created_at)?,
            is_active: self.is_active != 0,
            id: self.id,
            name: self.name,
            provider_type: self.provider_type,
            address: self.address,
            phone: self.phone,
            email: self.email,
        })
    }
}

/// Insertable service provider row.
#[derive(Insertable)]
#[diesel(table_name = service_providers)]
pub struct NewServiceProviderRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub provider_type: &'a str,
    pub address: &'a str,
    pub phone: &'a str,
    pub email: Option<&'a str>,
    pub network_tier: &'static str,
    pub is_active: i32,
    pub created_at: String,
}

impl<'a> NewServiceProviderRow<'a> {
    /// Encodes a service provider for insertion.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp cannot be encoded.
    pub fn from_domain(provider: &'a ServiceProvider) -> Result<Self, PersistenceError> {
        Ok(Self {
            id: &provider.id,
            name: &provider.name,
            provider_type: &provider.provider_type,
            address: &provider.address,
            phone: &provider.phone,
            email: provider.email.as_deref(),
            network_tier: provider.network_tier.as_str(),
            is_active: i32::from(provider.is_active),
            created_at: format_timestamp(provider.created_at)?,
        })
    }
}

// ============================================================================
// Flight reservations
// ============================================================================

/// Diesel Queryable struct for flight reservation rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = flight_reservations)]
pub struct FlightReservationRow {
    pub id: String,
    pub employee_id: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub departure_date: String,
    pub return_date: Option<String>,
    pub flight_class: String,
    pub purpose: String,
    pub status: String,
    pub estimated_cost: f64,
    pub booking_reference: Option<String>,
    pub created_at: String,
}

impl FlightReservationRow {
    /// Rebuilds the domain record from a stored row.
    ///
    /// # Errors
    ///
    /// Returns an error if any stored value no longer parses.
    pub fn into_domain(self) -> Result<FlightReservation, PersistenceError> {
        Ok(FlightReservation {
            departure_date: parse_date(&self.departure_date)?,
            return_date: parse_optional_date(self.return_date.as_deref())?,
            flight_class: parse_enum::<FlightClass>(&self.flight_class)?,
            created_at: parse_timestamp(&self.created_at)?,
            id: self.id,
            employee_id: self.employee_id,
            departure_city: self.departure_city,
            arrival_city: self.arrival_city,
            purpose: self.purpose,
            status: self.status,
            estimated_cost: self.estimated_cost,
            booking_reference: self.booking_reference,
        })
    }
}

/// Insertable flight reservation row.
#[derive(Insertable)]
#[diesel(table_name = flight_reservations)]
pub struct NewFlightReservationRow<'a> {
    pub id: &'a str,
    pub employee_id: &'a str,
    pub departure_city: &'a str,
    pub arrival_city: &'a str,
    pub departure_date: String,
    pub return_date: Option<String>,
    pub flight_class: &'static str,
    pub purpose: &'a str,
    pub status: &'a str,
    pub estimated_cost: f64,
    pub booking_reference: Option<&'a str>,
    pub created_at: String,
}

impl<'a> NewFlightReservationRow<'a> {
    /// Encodes a flight reservation for insertion.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp cannot be encoded.
    pub fn from_domain(reservation: &'a FlightReservation) -> Result<Self, PersistenceError> {
        Ok(Self {
            id: &reservation.id,
            employee_id: &reservation.employee_id,
            departure_city: &reservation.departure_city,
            arrival_city: &reservation.arrival_city,
            departure_date: encode_date(reservation.departure_date)?,
            return_date: encode_optional_date(reservation.return_date)?,
            flight_class: reservation.flight_class.as_str(),
            purpose: &reservation.purpose,
            status: &reservation.status,
            estimated_cost: reservation.estimated_cost,
            booking_reference: reservation.booking_reference.as_deref(),
            created_at: format_timestamp(reservation.created_at)?,
        })
    }
}

/// Status change for a flight reservation.
///
/// A `None` booking reference leaves the column alone.
#[derive(AsChangeset)]
#[diesel(table_name = flight_reservations)]
pub struct FlightStatusChangeset<'a> {
    pub status: &'a str,
    pub booking_reference: Option<&'a str>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_timestamp_storage_is_fixed_width() {
        let early: String = format_timestamp(datetime!(2026-01-02 03:04:05 UTC)).unwrap();
        let late: String =
            format_timestamp(datetime!(2026-01-02 03:04:05.000001 UTC)).unwrap();

        assert_eq!(early, "2026-01-02T03:04:05.000000Z");
        assert_eq!(late, "2026-01-02T03:04:05.000001Z");
        assert!(early < late);
    }

    #[test]
    fn test_timestamp_round_trip() {
        let original: OffsetDateTime = datetime!(2025-12-31 23:59:59.123456 UTC);
        let stored: String = format_timestamp(original).unwrap();
        assert_eq!(parse_timestamp(&stored).unwrap(), original);
    }

    #[test]
    fn test_timestamp_normalized_to_utc() {
        let offset: OffsetDateTime = datetime!(2026-01-02 07:00:00 +04:00);
        assert_eq!(
            format_timestamp(offset).unwrap(),
            "2026-01-02T03:00:00.000000Z"
        );
    }

    #[test]
    fn test_parse_timestamp_rejects_other_formats() {
        assert!(matches!(
            parse_timestamp("2026-01-02 03:04:05"),
            Err(PersistenceError::ReconstructionError(_))
        ));
    }
}
