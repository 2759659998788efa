pub mod work_order;

use std::sync::Arc;

use axum::{Json, Router};
use serde::Serialize;

use macgen_core::ServiceError;

use crate::service::MacGenService;

/// Shared application state.
pub type AppState = Arc<MacGenService>;

/// Build the MAC generator API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/v1", api_routes())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new().merge(work_order::routes())
}

/// Wrap a Result<T, ServiceError> into an API response.
pub(crate) fn ok_json<T: Serialize>(result: Result<T, ServiceError>) -> Result<Json<T>, ServiceError> {
    result.map(Json)
}
