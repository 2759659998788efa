use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
};
use serde::Serialize;

use macgen_core::{Page, ServiceError};

use crate::model::{DeviceIdentifiers, OntIdentifiers, SwitchIdentifiers, WorkOrder};
use crate::service::{CreateWorkOrderInput, GenerateInput, SearchQuery, WorkOrderStatus};
use super::{AppState, ok_json};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/work-orders", post(create_work_order))
        .route("/work-orders/search", post(search_work_orders))
        .route("/work-orders/{id}", get(get_work_order))
        .route("/work-orders/{id}/generate", patch(generate_parameters))
        .route("/work-orders/{id}/results", get(results))
        .route("/work-orders/{id}/ont-results", get(ont_results))
        .route("/work-orders/{id}/switch-results", get(switch_results))
        .route("/work-orders/{id}/validate", get(validate))
}

/// Acknowledgement for create and generate.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Saved {
    message: &'static str,
    work_order_number: String,
    id: String,
}

impl Saved {
    fn new(message: &'static str, order: WorkOrder) -> Self {
        Self {
            message,
            work_order_number: order.work_order_number,
            id: order.id,
        }
    }
}

async fn create_work_order(
    State(svc): State<AppState>,
    Json(body): Json<CreateWorkOrderInput>,
) -> Result<(StatusCode, Json<Saved>), ServiceError> {
    let order = svc.create_work_order(body)?;
    Ok((StatusCode::CREATED, Json(Saved::new("Registration successful", order))))
}

async fn get_work_order(
    State(svc): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WorkOrder>, ServiceError> {
    ok_json(svc.get_work_order(&id))
}

async fn generate_parameters(
    State(svc): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<GenerateInput>,
) -> Result<Json<Saved>, ServiceError> {
    let order = svc.generate_parameters(&id, body)?;
    Ok(Json(Saved::new("Parameters saved", order)))
}

async fn results(
    State(svc): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<DeviceIdentifiers>>, ServiceError> {
    ok_json(svc.expand_identifiers(&id))
}

async fn ont_results(
    State(svc): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<OntIdentifiers>>, ServiceError> {
    ok_json(svc.expand_ont(&id))
}

async fn switch_results(
    State(svc): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<SwitchIdentifiers>>, ServiceError> {
    ok_json(svc.expand_switch(&id))
}

async fn validate(
    State(svc): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WorkOrderStatus>, ServiceError> {
    ok_json(svc.work_order_status(&id))
}

async fn search_work_orders(
    State(svc): State<AppState>,
    Json(query): Json<SearchQuery>,
) -> Result<Json<Page<WorkOrder>>, ServiceError> {
    ok_json(svc.search(&query))
}
