//! API Handlers
//!
//! HTTP request handlers for each spacecraft endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::{Result, ServiceError};
use crate::models::{
    CreateSpacecraftRequest, ErrorResponse, HealthResponse, Page, PageParams, SearchParams,
    Spacecraft, StatsResponse, UpdateSpacecraftRequest,
};
use crate::service::SpacecraftService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The spacecraft service, shared between workers
    pub service: Arc<SpacecraftService>,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(service: SpacecraftService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// GET /api/spacecraft - List spacecraft one page at a time
#[utoipa::path(
    get,
    path = "/api/spacecraft",
    tag = "Spacecraft",
    params(
        ("page" = Option<u32>, Query, description = "Zero-based page index, defaults to 0"),
        ("size" = Option<u32>, Query, description = "Items per page, defaults to 20"),
    ),
    responses(
        (status = 200, description = "One page of spacecraft", body = Page<Spacecraft>),
        (status = 400, description = "Invalid paging parameters", body = ErrorResponse),
    )
)]
pub async fn list_spacecraft(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<Spacecraft>>> {
    // Validate query parameters
    if let Some(error_msg) = params.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    let page = state.service.list(params.page, params.size).await?;
    Ok(Json(page))
}

/// GET /api/spacecraft/find - Search spacecraft by name fragment
#[utoipa::path(
    get,
    path = "/api/spacecraft/find",
    tag = "Spacecraft",
    params(
        ("name" = String, Query, description = "Name fragment to match"),
    ),
    responses(
        (status = 200, description = "Spacecraft whose name contains the fragment", body = Vec<Spacecraft>),
    )
)]
pub async fn search_spacecraft(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Spacecraft>>> {
    let found = state.service.search_by_name(&params.name).await?;
    Ok(Json(found))
}

/// GET /api/spacecraft/:id - Fetch a single spacecraft by id
#[utoipa::path(
    get,
    path = "/api/spacecraft/{id}",
    tag = "Spacecraft",
    params(
        ("id" = i64, Path, description = "Spacecraft id"),
    ),
    responses(
        (status = 200, description = "The spacecraft", body = Spacecraft),
        (status = 400, description = "Negative id", body = ErrorResponse),
        (status = 404, description = "No spacecraft with this id", body = ErrorResponse),
    )
)]
pub async fn get_spacecraft(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Spacecraft>> {
    match state.service.get_by_id(id).await? {
        Some(spacecraft) => Ok(Json(spacecraft)),
        None => Err(ServiceError::NotFound(id)),
    }
}

/// POST /api/spacecraft - Register a new spacecraft
#[utoipa::path(
    post,
    path = "/api/spacecraft",
    tag = "Spacecraft",
    request_body = CreateSpacecraftRequest,
    responses(
        (status = 201, description = "Spacecraft created", body = Spacecraft),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
    )
)]
pub async fn create_spacecraft(
    State(state): State<AppState>,
    Json(req): Json<CreateSpacecraftRequest>,
) -> Result<(StatusCode, Json<Spacecraft>)> {
    let created = state.service.create(req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/spacecraft/:id - Replace an existing spacecraft
#[utoipa::path(
    put,
    path = "/api/spacecraft/{id}",
    tag = "Spacecraft",
    params(
        ("id" = i64, Path, description = "Spacecraft id"),
    ),
    request_body = UpdateSpacecraftRequest,
    responses(
        (status = 200, description = "Spacecraft updated", body = Spacecraft),
        (status = 404, description = "No spacecraft with this id", body = ErrorResponse),
    )
)]
pub async fn update_spacecraft(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateSpacecraftRequest>,
) -> Result<Json<Spacecraft>> {
    let updated = state.service.update(id, req).await?;
    Ok(Json(updated))
}

/// DELETE /api/spacecraft/:id - Delete a spacecraft
#[utoipa::path(
    delete,
    path = "/api/spacecraft/{id}",
    tag = "Spacecraft",
    params(
        ("id" = i64, Path, description = "Spacecraft id"),
    ),
    responses(
        (status = 204, description = "Spacecraft deleted"),
        (status = 404, description = "No spacecraft with this id", body = ErrorResponse),
    )
)]
pub async fn delete_spacecraft(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.service.cache_stats()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
