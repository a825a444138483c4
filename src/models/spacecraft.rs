//! Spacecraft domain model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A spacecraft from a series or film.
///
/// `id` is assigned by the store on first save; a spacecraft built from a
/// create request starts out with `id: None`. Equality is structural over
/// all four fields, so two loads of the same row compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Spacecraft {
    /// Store-assigned identifier
    pub id: Option<i64>,
    /// Display name, e.g. "USS Enterprise"
    pub name: String,
    /// Craft classification, serialized as "type"
    #[serde(rename = "type")]
    pub kind: String,
    /// Series or film the craft appears in
    pub origin: String,
}
