//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request DTOs and their mapping to domain inputs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use chrono::Utc;

use guestreg_infra::{InMemoryStore, seed};
use guestreg_services::{EventCatalogService, RegistrationService};

pub mod dto;
pub mod errors;
pub mod routes;

/// The services handlers pull out of request extensions.
pub struct AppServices {
    pub catalog: EventCatalogService<Arc<InMemoryStore>>,
    pub registrations: RegistrationService<Arc<InMemoryStore>>,
}

/// Build the full HTTP router with a freshly seeded in-memory store
/// (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    let store = Arc::new(InMemoryStore::new());
    if let Err(e) = seed::seed_demo_data(&store, Utc::now()) {
        tracing::warn!(error = %e, "failed to seed demo data");
    }
    build_app_with_store(store)
}

/// Build the router over an existing store. Lets tests supply their own data.
pub fn build_app_with_store(store: Arc<InMemoryStore>) -> Router {
    let services = Arc::new(AppServices {
        catalog: EventCatalogService::new(Arc::clone(&store)),
        registrations: RegistrationService::new(store),
    });

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::Duration;
    use tower::ServiceExt;

    use guestreg_core::{EventId, PaymentMethodId};
    use guestreg_events::Event;
    use guestreg_participants::PaymentMethod;
    use guestreg_services::Store;

    fn seeded_store() -> (Arc<InMemoryStore>, EventId, PaymentMethodId) {
        let store = Arc::new(InMemoryStore::new());
        let event_id = EventId::new();
        store
            .insert_event(Event {
                id: event_id,
                name: "Meetup".to_string(),
                start_time: Utc::now() + Duration::days(10),
                location: "Tallinn".to_string(),
                additional_information: None,
            })
            .unwrap();
        let payment_method = PaymentMethodId::new();
        store
            .add_payment_method(PaymentMethod {
                id: payment_method,
                name: "Bank transfer".to_string(),
            })
            .unwrap();
        (store, event_id, payment_method)
    }

    fn post_json(uri: String, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn unknown_participant_type_answers_bad_request() {
        let (store, event_id, _) = seeded_store();
        let app = build_app_with_store(store);

        let response = app
            .oneshot(post_json(
                format!("/api/events/{event_id}/participants"),
                r#"{"type":"Robot"}"#.to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_event_body_answers_bad_request() {
        let (store, _, _) = seeded_store();
        let app = build_app_with_store(store);

        let response = app
            .oneshot(post_json(
                "/api/events".to_string(),
                r#"{"name": 42}"#.to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn valid_registration_answers_created() {
        let (store, event_id, payment_method) = seeded_store();
        let app = build_app_with_store(store);

        let body = format!(
            r#"{{
                "type": "NaturalPerson",
                "firstName": "Mari",
                "lastName": "Maasikas",
                "idCode": "49001010230",
                "paymentMethodId": "{payment_method}"
            }}"#
        );
        let response = app
            .oneshot(post_json(format!("/api/events/{event_id}/participants"), body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
