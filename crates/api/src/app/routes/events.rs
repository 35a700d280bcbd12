use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;

use guestreg_core::EventId;

use crate::app::AppServices;
use crate::app::dto::{self, EventView};
use crate::app::errors;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route("/:event_id", get(get_event).delete(delete_event))
        .nest("/:event_id/participants", super::participants::router())
}

pub async fn list_events(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListEventsQuery>,
) -> axum::response::Response {
    let future = query.view == EventView::Future;
    match services.catalog.list_events(future, Utc::now()) {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_event(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateEventRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::body_rejection_to_response(rejection),
    };
    match services.catalog.create_event(body.into_new_event(), Utc::now()) {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_event(
    Extension(services): Extension<Arc<AppServices>>,
    Path(event_id): Path<String>,
) -> axum::response::Response {
    let event_id = match event_id.parse::<EventId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match services.catalog.event_detail(event_id) {
        Ok(detail) => (StatusCode::OK, Json(detail)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_event(
    Extension(services): Extension<Arc<AppServices>>,
    Path(event_id): Path<String>,
) -> axum::response::Response {
    let event_id = match event_id.parse::<EventId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match services.catalog.delete_event(event_id, Utc::now()) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
