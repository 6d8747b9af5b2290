// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every handler converts its raw request into domain values first. Any
//! conversion failure is returned before the store is touched.

use std::collections::BTreeMap;
use std::str::FromStr;

use hr_admin_domain::{
    ClaimStatus, ClaimStatusUpdate, DashboardStats, Department, DomainError, Employee,
    EmployeeDetails, EmployeeFilter, FlightReservation, FlightReservationDetails,
    FlightReservationFilter, FlightStatusUpdate, MedicalClaim, MedicalClaimDetails,
    MedicalClaimFilter, ServiceProvider, ServiceProviderDetails, ServiceProviderFilter, Vehicle,
    VehicleClaim, VehicleClaimDetails, VehicleClaimFilter, VehicleDetails, VehicleFilter,
    merge_status_counts, parse_date, parse_optional_date,
};
use hr_admin_persistence::Persistence;
use time::Date;
use tracing::{debug, info};

use crate::error::{ApiError, invalid_field, translate_persistence_error};
use crate::request_response::{
    AssignVehicleQuery, CreateEmployeeRequest, CreateFlightReservationRequest,
    CreateMedicalClaimRequest, CreateServiceProviderRequest, CreateVehicleClaimRequest,
    CreateVehicleRequest, ListEmployeesQuery, ListFlightReservationsQuery,
    ListMedicalClaimsQuery, ListServiceProvidersQuery, ListVehicleClaimsQuery, ListVehiclesQuery,
    MessageResponse, UpdateClaimStatusQuery, UpdateFlightStatusQuery,
};

const CLAIM_STATUS_UPDATED: &str = "Claim status updated successfully";
const FLIGHT_STATUS_UPDATED: &str = "Flight status updated successfully";

// ============================================================================
// Field conversion
// ============================================================================

fn parse_field<T>(field: &str, value: &str) -> Result<T, ApiError>
where
    T: FromStr<Err = DomainError>,
{
    T::from_str(value).map_err(|e| invalid_field(field, e))
}

/// Absent and empty values impose no constraint.
fn parse_optional_field<T>(field: &str, value: Option<&str>) -> Result<Option<T>, ApiError>
where
    T: FromStr<Err = DomainError>,
{
    match value {
        None | Some("") => Ok(None),
        Some(value) => parse_field(field, value).map(Some),
    }
}

fn date_field(field: &str, value: &str) -> Result<Date, ApiError> {
    parse_date(value).map_err(|e| invalid_field(field, e))
}

fn optional_date_field(field: &str, value: Option<&str>) -> Result<Option<Date>, ApiError> {
    parse_optional_date(value).map_err(|e| invalid_field(field, e))
}

fn employee_details(request: &CreateEmployeeRequest) -> Result<EmployeeDetails, ApiError> {
    Ok(EmployeeDetails {
        employee_id: request.employee_id.clone(),
        first_name: request.first_name.clone(),
        last_name: request.last_name.clone(),
        email: request.email.clone(),
        phone: request.phone.clone(),
        department: parse_field("department", &request.department)?,
        position: request.position.clone(),
        hire_date: date_field("hire_date", &request.hire_date)?,
        medical_insurance_tier: parse_field(
            "medical_insurance_tier",
            &request.medical_insurance_tier,
        )?,
        passport_number: request.passport_number.clone(),
        passport_expiry: optional_date_field(
            "passport_expiry",
            request.passport_expiry.as_deref(),
        )?,
    })
}

// ============================================================================
// Employees
// ============================================================================

/// Creates an employee record.
///
/// # Errors
///
/// Returns `InvalidInput` if an enumerated or date field does not parse,
/// or `Internal` if the store fails.
pub fn create_employee(
    persistence: &mut Persistence,
    request: &CreateEmployeeRequest,
) -> Result<Employee, ApiError> {
    let employee: Employee = Employee::new(employee_details(request)?);
    persistence
        .insert_employee(&employee)
        .map_err(translate_persistence_error)?;

    info!(id = %employee.id, employee_id = %employee.employee_id, "Created employee");
    Ok(employee)
}

/// Lists employees, optionally restricted to one department.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown department, or `Internal` if the
/// store fails.
pub fn list_employees(
    persistence: &mut Persistence,
    query: &ListEmployeesQuery,
) -> Result<Vec<Employee>, ApiError> {
    let filter: EmployeeFilter = EmployeeFilter {
        department: parse_optional_field::<Department>(
            "department",
            query.department.as_deref(),
        )?,
    };
    debug!(?filter, "Listing employees");
    persistence
        .list_employees(&filter)
        .map_err(translate_persistence_error)
}

/// Fetches one employee by record id.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no employee has this id.
pub fn get_employee(persistence: &mut Persistence, id: &str) -> Result<Employee, ApiError> {
    persistence
        .get_employee(id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::not_found("Employee", id))
}

/// Replaces every caller-supplied field of an employee.
///
/// `id` and `created_at` are preserved and `updated_at` is refreshed.
///
/// # Errors
///
/// Returns `InvalidInput` if the body does not convert, or
/// `ResourceNotFound` if no employee has this id.
pub fn update_employee(
    persistence: &mut Persistence,
    id: &str,
    request: &CreateEmployeeRequest,
) -> Result<Employee, ApiError> {
    let details: EmployeeDetails = employee_details(request)?;
    let updated: Employee = persistence
        .update_employee(id, &details)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::not_found("Employee", id))?;

    info!(id = %updated.id, "Updated employee");
    Ok(updated)
}

// ============================================================================
// Vehicles
// ============================================================================

/// Creates a vehicle record.
///
/// # Errors
///
/// Returns `InvalidInput` if the insurance type or expiry does not parse,
/// or `Internal` if the store fails.
pub fn create_vehicle(
    persistence: &mut Persistence,
    request: &CreateVehicleRequest,
) -> Result<Vehicle, ApiError> {
    let details: VehicleDetails = VehicleDetails {
        license_plate: request.license_plate.clone(),
        make: request.make.clone(),
        model: request.model.clone(),
        year: request.year,
        vin: request.vin.clone(),
        assigned_employee_id: request.assigned_employee_id.clone(),
        insurance_type: parse_field("insurance_type", &request.insurance_type)?,
        insurance_policy_number: request.insurance_policy_number.clone(),
        insurance_expiry: date_field("insurance_expiry", &request.insurance_expiry)?,
        is_fleet: request.is_fleet,
    };
    let vehicle: Vehicle = Vehicle::new(details);
    persistence
        .insert_vehicle(&vehicle)
        .map_err(translate_persistence_error)?;

    info!(id = %vehicle.id, license_plate = %vehicle.license_plate, "Created vehicle");
    Ok(vehicle)
}

/// Lists vehicles, optionally by assignment state.
///
/// # Errors
///
/// Returns `Internal` if the store fails.
pub fn list_vehicles(
    persistence: &mut Persistence,
    query: &ListVehiclesQuery,
) -> Result<Vec<Vehicle>, ApiError> {
    let filter: VehicleFilter = VehicleFilter {
        assignment: query.assigned_only.into(),
    };
    debug!(?filter, "Listing vehicles");
    persistence
        .list_vehicles(&filter)
        .map_err(translate_persistence_error)
}

/// Points a vehicle at an employee id.
///
/// The employee id is stored as given; it is not looked up.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no vehicle has this id.
pub fn assign_vehicle(
    persistence: &mut Persistence,
    id: &str,
    query: &AssignVehicleQuery,
) -> Result<Vehicle, ApiError> {
    let vehicle: Vehicle = persistence
        .assign_vehicle(id, &query.employee_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::not_found("Vehicle", id))?;

    info!(id = %vehicle.id, employee_id = %query.employee_id, "Assigned vehicle");
    Ok(vehicle)
}

// ============================================================================
// Claims
// ============================================================================

/// Submits a medical claim in the `Pending` state.
///
/// # Errors
///
/// Returns `InvalidInput` if the service date does not parse, or `Internal`
/// if the store fails.
pub fn submit_medical_claim(
    persistence: &mut Persistence,
    request: &CreateMedicalClaimRequest,
) -> Result<MedicalClaim, ApiError> {
    let details: MedicalClaimDetails = MedicalClaimDetails {
        employee_id: request.employee_id.clone(),
        provider_name: request.provider_name.clone(),
        service_date: date_field("service_date", &request.service_date)?,
        amount: request.amount,
        description: request.description.clone(),
    };
    let claim: MedicalClaim = MedicalClaim::submit(details);
    persistence
        .insert_medical_claim(&claim)
        .map_err(translate_persistence_error)?;

    info!(id = %claim.id, claim_number = %claim.claim_number, "Submitted medical claim");
    Ok(claim)
}

/// Lists medical claims, newest submission first.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown status, or `Internal` if the store
/// fails.
pub fn list_medical_claims(
    persistence: &mut Persistence,
    query: &ListMedicalClaimsQuery,
) -> Result<Vec<MedicalClaim>, ApiError> {
    let status: Option<ClaimStatus> = parse_optional_field("status", query.status.as_deref())?;
    let filter: MedicalClaimFilter = MedicalClaimFilter::new(query.employee_id.clone(), status);
    debug!(?filter, "Listing medical claims");
    persistence
        .list_medical_claims(&filter)
        .map_err(translate_persistence_error)
}

/// Moves a medical claim to a new status and stamps `processed_date`.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown status, or `ResourceNotFound` if
/// no claim has this id.
pub fn update_medical_claim_status(
    persistence: &mut Persistence,
    id: &str,
    query: &UpdateClaimStatusQuery,
) -> Result<MessageResponse, ApiError> {
    let status: ClaimStatus = parse_field("status", &query.status)?;
    let update: ClaimStatusUpdate = ClaimStatusUpdate::new(status, query.notes.clone());
    let matched: bool = persistence
        .update_medical_claim_status(id, &update)
        .map_err(translate_persistence_error)?;
    if !matched {
        return Err(ApiError::not_found("Claim", id));
    }

    info!(id = %id, status = %status, "Updated medical claim status");
    Ok(MessageResponse::new(CLAIM_STATUS_UPDATED))
}

/// Submits a vehicle claim in the `Pending` state.
///
/// # Errors
///
/// Returns `InvalidInput` if the incident date does not parse, or
/// `Internal` if the store fails.
pub fn submit_vehicle_claim(
    persistence: &mut Persistence,
    request: &CreateVehicleClaimRequest,
) -> Result<VehicleClaim, ApiError> {
    let details: VehicleClaimDetails = VehicleClaimDetails {
        vehicle_id: request.vehicle_id.clone(),
        incident_date: date_field("incident_date", &request.incident_date)?,
        description: request.description.clone(),
        amount: request.amount,
    };
    let claim: VehicleClaim = VehicleClaim::submit(details);
    persistence
        .insert_vehicle_claim(&claim)
        .map_err(translate_persistence_error)?;

    info!(id = %claim.id, claim_number = %claim.claim_number, "Submitted vehicle claim");
    Ok(claim)
}

/// Lists vehicle claims, newest submission first.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown status, or `Internal` if the store
/// fails.
pub fn list_vehicle_claims(
    persistence: &mut Persistence,
    query: &ListVehicleClaimsQuery,
) -> Result<Vec<VehicleClaim>, ApiError> {
    let status: Option<ClaimStatus> = parse_optional_field("status", query.status.as_deref())?;
    let filter: VehicleClaimFilter = VehicleClaimFilter::new(query.vehicle_id.clone(), status);
    debug!(?filter, "Listing vehicle claims");
    persistence
        .list_vehicle_claims(&filter)
        .map_err(translate_persistence_error)
}

/// Moves a vehicle claim to a new status and stamps `processed_date`.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown status, or `ResourceNotFound` if
/// no claim has this id.
pub fn update_vehicle_claim_status(
    persistence: &mut Persistence,
    id: &str,
    query: &UpdateClaimStatusQuery,
) -> Result<MessageResponse, ApiError> {
    let status: ClaimStatus = parse_field("status", &query.status)?;
    let update: ClaimStatusUpdate = ClaimStatusUpdate::new(status, query.notes.clone());
    let matched: bool = persistence
        .update_vehicle_claim_status(id, &update)
        .map_err(translate_persistence_error)?;
    if !matched {
        return Err(ApiError::not_found("Claim", id));
    }

    info!(id = %id, status = %status, "Updated vehicle claim status");
    Ok(MessageResponse::new(CLAIM_STATUS_UPDATED))
}

// ============================================================================
// Service providers
// ============================================================================

/// Registers a healthcare service provider.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown network tier, or `Internal` if the
/// store fails.
pub fn create_service_provider(
    persistence: &mut Persistence,
    request: &CreateServiceProviderRequest,
) -> Result<ServiceProvider, ApiError> {
    let details: ServiceProviderDetails = ServiceProviderDetails {
        name: request.name.clone(),
        provider_type: request.provider_type.clone(),
        address: request.address.clone(),
        phone: request.phone.clone(),
        email: request.email.clone(),
        network_tier: parse_field("network_tier", &request.network_tier)?,
        is_active: request.is_active,
    };
    let provider: ServiceProvider = ServiceProvider::new(details);
    persistence
        .insert_service_provider(&provider)
        .map_err(translate_persistence_error)?;

    info!(id = %provider.id, name = %provider.name, "Created service provider");
    Ok(provider)
}

/// Lists service providers. Only active providers unless
/// `active_only=false` is given.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown network tier, or `Internal` if the
/// store fails.
pub fn list_service_providers(
    persistence: &mut Persistence,
    query: &ListServiceProvidersQuery,
) -> Result<Vec<ServiceProvider>, ApiError> {
    let filter: ServiceProviderFilter = ServiceProviderFilter {
        network_tier: parse_optional_field("network_tier", query.network_tier.as_deref())?,
        active_only: query.active_only.unwrap_or(true),
    };
    debug!(?filter, "Listing service providers");
    persistence
        .list_service_providers(&filter)
        .map_err(translate_persistence_error)
}

// ============================================================================
// Flight reservations
// ============================================================================

/// Books a flight reservation in the `Pending` state.
///
/// # Errors
///
/// Returns `InvalidInput` if the class or a date does not parse, or
/// `Internal` if the store fails.
pub fn book_flight_reservation(
    persistence: &mut Persistence,
    request: &CreateFlightReservationRequest,
) -> Result<FlightReservation, ApiError> {
    let details: FlightReservationDetails = FlightReservationDetails {
        employee_id: request.employee_id.clone(),
        departure_city: request.departure_city.clone(),
        arrival_city: request.arrival_city.clone(),
        departure_date: date_field("departure_date", &request.departure_date)?,
        return_date: optional_date_field("return_date", request.return_date.as_deref())?,
        flight_class: parse_field("flight_class", &request.flight_class)?,
        purpose: request.purpose.clone(),
        estimated_cost: request.estimated_cost,
    };
    let reservation: FlightReservation = FlightReservation::book(details);
    persistence
        .insert_flight_reservation(&reservation)
        .map_err(translate_persistence_error)?;

    info!(id = %reservation.id, employee_id = %reservation.employee_id, "Booked flight");
    Ok(reservation)
}

/// Lists flight reservations, newest first.
///
/// # Errors
///
/// Returns `Internal` if the store fails.
pub fn list_flight_reservations(
    persistence: &mut Persistence,
    query: &ListFlightReservationsQuery,
) -> Result<Vec<FlightReservation>, ApiError> {
    let filter: FlightReservationFilter =
        FlightReservationFilter::new(query.employee_id.clone(), query.status.clone());
    debug!(?filter, "Listing flight reservations");
    persistence
        .list_flight_reservations(&filter)
        .map_err(translate_persistence_error)
}

/// Sets a reservation's free-text status and, when given, its booking
/// reference.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no reservation has this id.
pub fn update_flight_status(
    persistence: &mut Persistence,
    id: &str,
    query: &UpdateFlightStatusQuery,
) -> Result<MessageResponse, ApiError> {
    let update: FlightStatusUpdate =
        FlightStatusUpdate::new(query.status.clone(), query.booking_reference.clone());
    let matched: bool = persistence
        .update_flight_status(id, &update)
        .map_err(translate_persistence_error)?;
    if !matched {
        return Err(ApiError::not_found("Reservation", id));
    }

    info!(id = %id, status = %update.status, "Updated flight status");
    Ok(MessageResponse::new(FLIGHT_STATUS_UPDATED))
}

// ============================================================================
// Dashboard
// ============================================================================

/// Computes the dashboard summary.
///
/// Any store failure fails the whole request; no partial result is
/// returned.
///
/// # Errors
///
/// Returns `Internal` if any count fails.
pub fn get_dashboard(persistence: &mut Persistence) -> Result<DashboardStats, ApiError> {
    let total_employees: usize = persistence
        .count_employees()
        .map_err(translate_persistence_error)?;
    let total_vehicles: usize = persistence
        .count_vehicles()
        .map_err(translate_persistence_error)?;
    let pending_medical_claims: usize = persistence
        .count_medical_claims_with_status(ClaimStatus::Pending)
        .map_err(translate_persistence_error)?;
    let pending_vehicle_claims: usize = persistence
        .count_vehicle_claims_with_status(ClaimStatus::Pending)
        .map_err(translate_persistence_error)?;
    let pending_flights: usize = persistence
        .count_pending_flights()
        .map_err(translate_persistence_error)?;

    let employees_by_department: BTreeMap<Department, usize> = persistence
        .count_employees_by_department()
        .map_err(translate_persistence_error)?;
    let medical_by_status: BTreeMap<ClaimStatus, usize> = persistence
        .count_medical_claims_by_status()
        .map_err(translate_persistence_error)?;
    let vehicle_by_status: BTreeMap<ClaimStatus, usize> = persistence
        .count_vehicle_claims_by_status()
        .map_err(translate_persistence_error)?;

    Ok(DashboardStats {
        total_employees,
        total_vehicles,
        pending_medical_claims,
        pending_vehicle_claims,
        pending_flights,
        employees_by_department,
        claims_by_status: merge_status_counts(medical_by_status, vehicle_by_status),
    })
}
