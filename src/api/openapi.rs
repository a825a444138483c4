//! OpenAPI document for the spacecraft API
//!
//! Generated with utoipa from the handler annotations and the schema
//! derives on the DTOs, and served as plain JSON.

use axum::Json;
use utoipa::OpenApi;

use crate::models::{
    CreateSpacecraftRequest, ErrorResponse, Page, Spacecraft, UpdateSpacecraftRequest,
};

use super::handlers;

/// OpenAPI document covering the spacecraft endpoints.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Spaceship Maintenance API",
        version = "1.0",
        description = "REST API to manage spacecraft from series and films"
    ),
    tags(
        (name = "Spacecraft", description = "CRUD operations, paging and name search")
    ),
    paths(
        handlers::list_spacecraft,
        handlers::search_spacecraft,
        handlers::get_spacecraft,
        handlers::create_spacecraft,
        handlers::update_spacecraft,
        handlers::delete_spacecraft,
    ),
    components(schemas(
        Spacecraft,
        CreateSpacecraftRequest,
        UpdateSpacecraftRequest,
        Page<Spacecraft>,
        ErrorResponse,
    ))
)]
pub struct ApiDoc;

/// Handler for GET /api-docs/openapi.json
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_metadata() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Spaceship Maintenance API");
        assert_eq!(doc.info.version, "1.0");
    }

    #[test]
    fn test_openapi_document_covers_crud_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/api/spacecraft"));
        assert!(paths.contains_key("/api/spacecraft/{id}"));
        assert!(paths.contains_key("/api/spacecraft/find"));
    }

    #[test]
    fn test_openapi_document_serializes() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("Spaceship Maintenance API"));
    }
}
