//! `guestreg-infra` — storage backends and seed data.

pub mod memory;
pub mod seed;


pub use memory::InMemoryStore;
