use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use guestreg_core::{EventId, ParticipantId};

use crate::app::AppServices;
use crate::app::dto;
use crate::app::errors;

pub fn router() -> Router {
    Router::new().route("/", post(register_participant)).route(
        "/:participant_id",
        get(get_registration)
            .put(update_registration)
            .delete(delete_registration),
    )
}

fn parse_ids(
    event_id: &str,
    participant_id: &str,
) -> Result<(EventId, ParticipantId), axum::response::Response> {
    let event_id = event_id
        .parse::<EventId>()
        .map_err(errors::domain_error_to_response)?;
    let participant_id = participant_id
        .parse::<ParticipantId>()
        .map_err(errors::domain_error_to_response)?;
    Ok((event_id, participant_id))
}

pub async fn register_participant(
    Extension(services): Extension<Arc<AppServices>>,
    Path(event_id): Path<String>,
    body: Result<Json<dto::CreateParticipantRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::body_rejection_to_response(rejection),
    };
    let event_id = match event_id.parse::<EventId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match services
        .registrations
        .register(event_id, body.into_registration_input(), Utc::now())
    {
        Ok(detail) => (StatusCode::CREATED, Json(detail)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_registration(
    Extension(services): Extension<Arc<AppServices>>,
    Path((event_id, participant_id)): Path<(String, String)>,
) -> axum::response::Response {
    let (event_id, participant_id) = match parse_ids(&event_id, &participant_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };
    match services.registrations.detail(event_id, participant_id) {
        Ok(detail) => (StatusCode::OK, Json(detail)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_registration(
    Extension(services): Extension<Arc<AppServices>>,
    Path((event_id, participant_id)): Path<(String, String)>,
    body: Result<Json<dto::UpdateParticipantRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::body_rejection_to_response(rejection),
    };
    let (event_id, participant_id) = match parse_ids(&event_id, &participant_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };
    match services
        .registrations
        .update(event_id, participant_id, body.into_registration_update())
    {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_registration(
    Extension(services): Extension<Arc<AppServices>>,
    Path((event_id, participant_id)): Path<(String, String)>,
) -> axum::response::Response {
    let (event_id, participant_id) = match parse_ids(&event_id, &participant_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };
    match services.registrations.remove(event_id, participant_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
