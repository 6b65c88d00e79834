//! Assembly of the four per-category record lists plus build metadata.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::document::Document;
use crate::error::CoreError;
use crate::poi::PointOfInterest;
use crate::router::extract_by_tab;

/// Schema version reported when the document carries none.
pub const UNKNOWN_SCHEMA_VERSION: i64 = -1;
/// Build identifier reported when the document carries none.
pub const UNKNOWN_BUILD: &str = "unknown";

/// The upstream `tabId` each category is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTabIds {
    pub resources: String,
    pub collectibles: String,
    pub artifacts: String,
    pub wells: String,
}

impl Default for CategoryTabIds {
    fn default() -> Self {
        Self {
            resources: "resource_nodes".to_owned(),
            collectibles: "collectibles".to_owned(),
            artifacts: "artifacts".to_owned(),
            wells: "resource_wells".to_owned(),
        }
    }
}

impl CategoryTabIds {
    #[must_use]
    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::Resources => &self.resources,
            Category::Collectibles => &self.collectibles,
            Category::Artifacts => &self.artifacts,
            Category::Wells => &self.wells,
        }
    }
}

/// Contents of `metadata.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub version: i64,
    #[serde(rename = "lastBuild")]
    pub last_build: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorizedOutput {
    pub schema_version: i64,
    pub build_identifier: String,
    pub resources: Vec<PointOfInterest>,
    pub collectibles: Vec<PointOfInterest>,
    pub artifacts: Vec<PointOfInterest>,
    pub wells: Vec<PointOfInterest>,
}

impl CategorizedOutput {
    #[must_use]
    pub fn category(&self, category: Category) -> &[PointOfInterest] {
        match category {
            Category::Resources => &self.resources,
            Category::Collectibles => &self.collectibles,
            Category::Artifacts => &self.artifacts,
            Category::Wells => &self.wells,
        }
    }

    #[must_use]
    pub fn metadata(&self) -> Metadata {
        Metadata {
            version: self.schema_version,
            last_build: self.build_identifier.clone(),
        }
    }

    #[must_use]
    pub fn total_records(&self) -> usize {
        Category::ALL.iter().map(|c| self.category(*c).len()).sum()
    }
}

/// Runs tab extraction for every category and attaches the document metadata.
///
/// # Errors
///
/// Returns [`CoreError::InvalidInput`] when `doc` is `None` (the upstream
/// JSON was `null`). Every other shape problem degrades to empty or fallback
/// values.
pub fn build_categorized_output(
    doc: Option<&Document>,
    tab_ids: &CategoryTabIds,
) -> Result<CategorizedOutput, CoreError> {
    let doc = doc.ok_or_else(|| CoreError::InvalidInput("document is missing".to_owned()))?;

    let output = CategorizedOutput {
        schema_version: doc.schema_version.unwrap_or(UNKNOWN_SCHEMA_VERSION),
        build_identifier: doc
            .build_identifier
            .clone()
            .unwrap_or_else(|| UNKNOWN_BUILD.to_owned()),
        resources: extract_by_tab(tab_ids.get(Category::Resources), doc),
        collectibles: extract_by_tab(tab_ids.get(Category::Collectibles), doc),
        artifacts: extract_by_tab(tab_ids.get(Category::Artifacts), doc),
        wells: extract_by_tab(tab_ids.get(Category::Wells), doc),
    };

    tracing::debug!(
        version = output.schema_version,
        last_build = %output.build_identifier,
        resources = output.resources.len(),
        collectibles = output.collectibles.len(),
        artifacts = output.artifacts.len(),
        wells = output.wells.len(),
        "built categorized output"
    );

    Ok(output)
}
