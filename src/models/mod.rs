//! Request and Response models for the spacecraft API
//!
//! This module defines the domain entity and the DTOs (Data Transfer
//! Objects) used for serializing/deserializing HTTP bodies.

pub mod requests;
pub mod responses;
pub mod spacecraft;

// Re-export commonly used types
pub use requests::{CreateSpacecraftRequest, PageParams, SearchParams, UpdateSpacecraftRequest};
pub use responses::{ErrorResponse, HealthResponse, Page, StatsResponse};
pub use spacecraft::Spacecraft;
