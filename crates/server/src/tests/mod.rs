// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use hr_admin_persistence::Persistence;
use serde_json::Value;
use tokio::sync::Mutex;
use tower::ServiceExt;

use crate::routes::{AppState, build_router};

/// Helper to create a router over a fresh in-memory store.
pub fn create_test_app() -> Router {
    let persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    build_router(AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    })
}

/// Sends one request and returns the status with the decoded JSON body.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request: Request<Body> = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status: StatusCode = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };
    (status, value)
}

pub fn employee_body() -> Value {
    serde_json::json!({
        "employee_id": "EMP-0042",
        "first_name": "Noura",
        "last_name": "Al Mansoori",
        "email": "noura@example.com",
        "phone": "+971 50 999 0000",
        "department": "Projects Management",
        "position": "Project Manager",
        "hire_date": "2019-05-12",
        "medical_insurance_tier": "Senior Premium 4.0"
    })
}

pub fn vehicle_body() -> Value {
    serde_json::json!({
        "license_plate": "AUH-1-777",
        "make": "Mitsubishi",
        "model": "Pajero",
        "year": 2021,
        "vin": "JMYLYV98W2J000001",
        "insurance_type": "Third party \"against third parties\"",
        "insurance_policy_number": "OIC-5521",
        "insurance_expiry": "2026-01-15"
    })
}
