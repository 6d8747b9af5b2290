// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP handlers and the application router.
//!
//! Handlers only extract, lock and delegate. Conversion, validation and
//! store access live in `hr_admin_api`.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State as AxumState,
        rejection::{JsonRejection, QueryRejection},
    },
    routing::{get, put},
};
use hr_admin_api::{
    AssignVehicleQuery, CreateEmployeeRequest, CreateFlightReservationRequest,
    CreateMedicalClaimRequest, CreateServiceProviderRequest, CreateVehicleClaimRequest,
    CreateVehicleRequest, ListEmployeesQuery, ListFlightReservationsQuery,
    ListMedicalClaimsQuery, ListServiceProvidersQuery, ListVehicleClaimsQuery, ListVehiclesQuery,
    MessageResponse, UpdateClaimStatusQuery, UpdateFlightStatusQuery, assign_vehicle,
    book_flight_reservation, create_employee, create_service_provider, create_vehicle,
    get_dashboard, get_employee, list_employees, list_flight_reservations, list_medical_claims,
    list_service_providers, list_vehicle_claims, list_vehicles, submit_medical_claim,
    submit_vehicle_claim, update_employee, update_flight_status, update_medical_claim_status,
    update_vehicle_claim_status,
};
use hr_admin_domain::{
    DashboardStats, Employee, FlightReservation, MedicalClaim, ServiceProvider, Vehicle,
    VehicleClaim,
};
use hr_admin_persistence::Persistence;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::error::HttpError;

/// Application state shared across handlers.
///
/// The single store connection is serialized behind an async mutex. Each
/// handler holds the lock for one logical store operation.
#[derive(Clone)]
pub struct AppState {
    pub persistence: Arc<Mutex<Persistence>>,
}

// ============================================================================
// Employees
// ============================================================================

async fn handle_create_employee(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Result<Json<Employee>, HttpError> {
    let Json(req) = payload?;
    info!(employee_id = %req.employee_id, "Handling create_employee request");

    let mut persistence = app_state.persistence.lock().await;
    let employee: Employee = create_employee(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(employee))
}

async fn handle_list_employees(
    AxumState(app_state): AxumState<AppState>,
    query: Result<Query<ListEmployeesQuery>, QueryRejection>,
) -> Result<Json<Vec<Employee>>, HttpError> {
    let Query(query) = query?;
    info!(department = ?query.department, "Handling list_employees request");

    let mut persistence = app_state.persistence.lock().await;
    let employees: Vec<Employee> = list_employees(&mut persistence, &query)?;
    drop(persistence);

    Ok(Json(employees))
}

async fn handle_get_employee(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, HttpError> {
    info!(id = %id, "Handling get_employee request");

    let mut persistence = app_state.persistence.lock().await;
    let employee: Employee = get_employee(&mut persistence, &id)?;
    drop(persistence);

    Ok(Json(employee))
}

async fn handle_update_employee(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Result<Json<Employee>, HttpError> {
    let Json(req) = payload?;
    info!(id = %id, "Handling update_employee request");

    let mut persistence = app_state.persistence.lock().await;
    let employee: Employee = update_employee(&mut persistence, &id, &req)?;
    drop(persistence);

    Ok(Json(employee))
}

// ============================================================================
// Vehicles
// ============================================================================

async fn handle_create_vehicle(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<CreateVehicleRequest>, JsonRejection>,
) -> Result<Json<Vehicle>, HttpError> {
    let Json(req) = payload?;
    info!(license_plate = %req.license_plate, "Handling create_vehicle request");

    let mut persistence = app_state.persistence.lock().await;
    let vehicle: Vehicle = create_vehicle(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(vehicle))
}

async fn handle_list_vehicles(
    AxumState(app_state): AxumState<AppState>,
    query: Result<Query<ListVehiclesQuery>, QueryRejection>,
) -> Result<Json<Vec<Vehicle>>, HttpError> {
    let Query(query) = query?;
    info!(assigned_only = ?query.assigned_only, "Handling list_vehicles request");

    let mut persistence = app_state.persistence.lock().await;
    let vehicles: Vec<Vehicle> = list_vehicles(&mut persistence, &query)?;
    drop(persistence);

    Ok(Json(vehicles))
}

async fn handle_assign_vehicle(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    query: Result<Query<AssignVehicleQuery>, QueryRejection>,
) -> Result<Json<Vehicle>, HttpError> {
    let Query(query) = query?;
    info!(id = %id, employee_id = %query.employee_id, "Handling assign_vehicle request");

    let mut persistence = app_state.persistence.lock().await;
    let vehicle: Vehicle = assign_vehicle(&mut persistence, &id, &query)?;
    drop(persistence);

    Ok(Json(vehicle))
}

// ============================================================================
// Claims
// ============================================================================

async fn handle_submit_medical_claim(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<CreateMedicalClaimRequest>, JsonRejection>,
) -> Result<Json<MedicalClaim>, HttpError> {
    let Json(req) = payload?;
    info!(employee_id = %req.employee_id, "Handling submit_medical_claim request");

    let mut persistence = app_state.persistence.lock().await;
    let claim: MedicalClaim = submit_medical_claim(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(claim))
}

async fn handle_list_medical_claims(
    AxumState(app_state): AxumState<AppState>,
    query: Result<Query<ListMedicalClaimsQuery>, QueryRejection>,
) -> Result<Json<Vec<MedicalClaim>>, HttpError> {
    let Query(query) = query?;
    info!(
        employee_id = ?query.employee_id,
        status = ?query.status,
        "Handling list_medical_claims request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let claims: Vec<MedicalClaim> = list_medical_claims(&mut persistence, &query)?;
    drop(persistence);

    Ok(Json(claims))
}

async fn handle_update_medical_claim_status(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    query: Result<Query<UpdateClaimStatusQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, HttpError> {
    let Query(query) = query?;
    info!(id = %id, status = %query.status, "Handling update_medical_claim_status request");

    let mut persistence = app_state.persistence.lock().await;
    let response: MessageResponse = update_medical_claim_status(&mut persistence, &id, &query)?;
    drop(persistence);

    Ok(Json(response))
}

async fn handle_submit_vehicle_claim(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<CreateVehicleClaimRequest>, JsonRejection>,
) -> Result<Json<VehicleClaim>, HttpError> {
    let Json(req) = payload?;
    info!(vehicle_id = %req.vehicle_id, "Handling submit_vehicle_claim request");

    let mut persistence = app_state.persistence.lock().await;
    let claim: VehicleClaim = submit_vehicle_claim(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(claim))
}

async fn handle_list_vehicle_claims(
    AxumState(app_state): AxumState<AppState>,
    query: Result<Query<ListVehicleClaimsQuery>, QueryRejection>,
) -> Result<Json<Vec<VehicleClaim>>, HttpError> {
    let Query(query) = query?;
    info!(
        vehicle_id = ?query.vehicle_id,
        status = ?query.status,
        "Handling list_vehicle_claims request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let claims: Vec<VehicleClaim> = list_vehicle_claims(&mut persistence, &query)?;
    drop(persistence);

    Ok(Json(claims))
}

async fn handle_update_vehicle_claim_status(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    query: Result<Query<UpdateClaimStatusQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, HttpError> {
    let Query(query) = query?;
    info!(id = %id, status = %query.status, "Handling update_vehicle_claim_status request");

    let mut persistence = app_state.persistence.lock().await;
    let response: MessageResponse = update_vehicle_claim_status(&mut persistence, &id, &query)?;
    drop(persistence);

    Ok(Json(response))
}

// ============================================================================
// Service providers
// ============================================================================

async fn handle_create_service_provider(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<CreateServiceProviderRequest>, JsonRejection>,
) -> Result<Json<ServiceProvider>, HttpError> {
    let Json(req) = payload?;
    info!(name = %req.name, "Handling create_service_provider request");

    let mut persistence = app_state.persistence.lock().await;
    let provider: ServiceProvider = create_service_provider(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(provider))
}

async fn handle_list_service_providers(
    AxumState(app_state): AxumState<AppState>,
    query: Result<Query<ListServiceProvidersQuery>, QueryRejection>,
) -> Result<Json<Vec<ServiceProvider>>, HttpError> {
    let Query(query) = query?;
    info!(
        network_tier = ?query.network_tier,
        active_only = ?query.active_only,
        "Handling list_service_providers request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let providers: Vec<ServiceProvider> = list_service_providers(&mut persistence, &query)?;
    drop(persistence);

    Ok(Json(providers))
}

// ============================================================================
// Flight reservations
// ============================================================================

async fn handle_book_flight_reservation(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<CreateFlightReservationRequest>, JsonRejection>,
) -> Result<Json<FlightReservation>, HttpError> {
    let Json(req) = payload?;
    info!(employee_id = %req.employee_id, "Handling book_flight_reservation request");

    let mut persistence = app_state.persistence.lock().await;
    let reservation: FlightReservation = book_flight_reservation(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(reservation))
}

async fn handle_list_flight_reservations(
    AxumState(app_state): AxumState<AppState>,
    query: Result<Query<ListFlightReservationsQuery>, QueryRejection>,
) -> Result<Json<Vec<FlightReservation>>, HttpError> {
    let Query(query) = query?;
    info!(
        employee_id = ?query.employee_id,
        status = ?query.status,
        "Handling list_flight_reservations request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let reservations: Vec<FlightReservation> = list_flight_reservations(&mut persistence, &query)?;
    drop(persistence);

    Ok(Json(reservations))
}

async fn handle_update_flight_status(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    query: Result<Query<UpdateFlightStatusQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, HttpError> {
    let Query(query) = query?;
    info!(id = %id, status = %query.status, "Handling update_flight_status request");

    let mut persistence = app_state.persistence.lock().await;
    let response: MessageResponse = update_flight_status(&mut persistence, &id, &query)?;
    drop(persistence);

    Ok(Json(response))
}

// ============================================================================
// Dashboard
// ============================================================================

async fn handle_get_dashboard(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<DashboardStats>, HttpError> {
    info!("Handling get_dashboard request");

    let mut persistence = app_state.persistence.lock().await;
    let stats: DashboardStats = get_dashboard(&mut persistence)?;
    drop(persistence);

    Ok(Json(stats))
}

/// Builds the application router with all endpoints under `/api`.
///
/// CORS is fully open: any origin is mirrored back with credentials
/// allowed.
pub fn build_router(app_state: AppState) -> Router {
    let api: Router<AppState> = Router::new()
        .route(
            "/employees",
            get(handle_list_employees).post(handle_create_employee),
        )
        .route(
            "/employees/{id}",
            get(handle_get_employee).put(handle_update_employee),
        )
        .route(
            "/vehicles",
            get(handle_list_vehicles).post(handle_create_vehicle),
        )
        .route("/vehicles/{id}/assign", put(handle_assign_vehicle))
        .route(
            "/medical-claims",
            get(handle_list_medical_claims).post(handle_submit_medical_claim),
        )
        .route(
            "/medical-claims/{id}/status",
            put(handle_update_medical_claim_status),
        )
        .route(
            "/vehicle-claims",
            get(handle_list_vehicle_claims).post(handle_submit_vehicle_claim),
        )
        .route(
            "/vehicle-claims/{id}/status",
            put(handle_update_vehicle_claim_status),
        )
        .route(
            "/service-providers",
            get(handle_list_service_providers).post(handle_create_service_provider),
        )
        .route(
            "/flight-reservations",
            get(handle_list_flight_reservations).post(handle_book_flight_reservation),
        )
        .route(
            "/flight-reservations/{id}/status",
            put(handle_update_flight_status),
        )
        .route("/dashboard", get(handle_get_dashboard));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(app_state)
}
