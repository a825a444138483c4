//! Request DTOs for the spacecraft API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;
use utoipa::ToSchema;

/// Request body for registering a spacecraft (POST /api/spacecraft)
///
/// The identifier is assigned by the store, so the body carries only the
/// descriptive fields.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateSpacecraftRequest {
    /// Display name
    pub name: String,
    /// Craft classification, sent as "type"
    #[serde(rename = "type")]
    pub kind: String,
    /// Series or film the craft appears in
    pub origin: String,
}

/// Request body for updating a spacecraft (PUT /api/spacecraft/:id)
///
/// All descriptive fields are replaced wholesale; the id in the path wins
/// over anything the body might claim.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateSpacecraftRequest {
    /// Display name
    pub name: String,
    /// Craft classification, sent as "type"
    #[serde(rename = "type")]
    pub kind: String,
    /// Series or film the craft appears in
    pub origin: String,
}

/// Query parameters for the paged listing (GET /api/spacecraft)
#[derive(Debug, Clone, Deserialize)]
pub struct PageParams {
    /// Zero-based page index
    #[serde(default)]
    pub page: u32,
    /// Number of items per page
    #[serde(default = "default_page_size")]
    pub size: u32,
}

fn default_page_size() -> u32 {
    20
}

impl PageParams {
    /// Validates the paging parameters
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.size == 0 {
            return Some("Page size must be at least 1".to_string());
        }
        None
    }
}

/// Query parameters for the name search (GET /api/spacecraft/find)
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// Name fragment to match
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserialize() {
        let json = r#"{"name": "Nostromo", "type": "Freighter", "origin": "Alien"}"#;
        let req: CreateSpacecraftRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Nostromo");
        assert_eq!(req.kind, "Freighter");
        assert_eq!(req.origin, "Alien");
    }

    #[test]
    fn test_create_request_rejects_missing_field() {
        let json = r#"{"name": "Nostromo", "origin": "Alien"}"#;
        let result = serde_json::from_str::<CreateSpacecraftRequest>(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_request_deserialize() {
        let json = r#"{"name": "Sulaco", "type": "Troop transport", "origin": "Aliens"}"#;
        let req: UpdateSpacecraftRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.kind, "Troop transport");
    }

    #[test]
    fn test_page_params_defaults() {
        let params: PageParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.page, 0);
        assert_eq!(params.size, 20);
    }

    #[test]
    fn test_validate_zero_size() {
        let params = PageParams { page: 0, size: 0 };
        assert!(params.validate().is_some());
    }

    #[test]
    fn test_validate_valid_params() {
        let params = PageParams { page: 3, size: 50 };
        assert!(params.validate().is_none());
    }

    #[test]
    fn test_search_params_require_name() {
        let result = serde_json::from_str::<SearchParams>("{}");
        assert!(result.is_err());
    }
}
