use axum::Router;

pub mod events;
pub mod participants;
pub mod payment_methods;
pub mod system;

pub fn router() -> Router {
    Router::new()
        .nest("/api/events", events::router())
        .nest("/api/payment-methods", payment_methods::router())
}
