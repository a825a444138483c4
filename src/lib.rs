//! Hangar - A spacecraft maintenance HTTP service
//!
//! Serves CRUD operations over a SQLite-backed fleet of spacecraft, with a
//! read-through cache in front of lookups by id.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod observer;
pub mod service;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use service::SpacecraftService;
