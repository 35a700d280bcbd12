//! `guestreg-api` — HTTP surface over the guest-registration services.

pub mod app;
