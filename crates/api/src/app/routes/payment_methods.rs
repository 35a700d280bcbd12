use std::sync::Arc;

use axum::{Json, Router, extract::Extension, http::StatusCode, response::IntoResponse, routing::get};

use crate::app::AppServices;
use crate::app::errors;

pub fn router() -> Router {
    Router::new().route("/", get(list_payment_methods))
}

pub async fn list_payment_methods(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.registrations.payment_methods() {
        Ok(methods) => (StatusCode::OK, Json(methods)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
