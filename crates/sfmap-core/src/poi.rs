//! Output records handed to the persistence and serving layers.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::purity::Purity;

/// Position of a point of interest, copied verbatim from the source marker.
///
/// Coordinates are kept as JSON numbers so integers stay integers when the
/// record is written back out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: Number,
    pub y: Number,
    pub z: Number,
}

/// A validated, named, located map record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purity: Option<Purity>,
    pub location: Location,
}
