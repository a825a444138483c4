//! API Module
//!
//! HTTP handlers and routing for the spacecraft REST API.
//!
//! # Endpoints
//! - `GET /api/spacecraft` - List spacecraft, paged
//! - `POST /api/spacecraft` - Register a new spacecraft
//! - `GET /api/spacecraft/find` - Search spacecraft by name fragment
//! - `GET /api/spacecraft/:id` - Fetch a spacecraft by id
//! - `PUT /api/spacecraft/:id` - Replace a spacecraft
//! - `DELETE /api/spacecraft/:id` - Delete a spacecraft
//! - `GET /api-docs/openapi.json` - OpenAPI document
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod openapi;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
