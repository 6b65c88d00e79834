//! Core model and extraction pipeline for the map-data normalizer.
//!
//! The upstream document is read into [`Document`], each category tab is
//! flattened into [`PointOfInterest`] records, and the result is assembled
//! into a [`CategorizedOutput`]. Everything here is synchronous and pure.

mod app_config;
mod category;
mod config;
mod document;
mod error;
mod extract;
mod pipeline;
mod poi;
mod purity;
mod router;

pub use app_config::AppConfig;
pub use category::Category;
pub use config::{
    load_app_config, load_app_config_from_env, DEFAULT_SOURCE_REFERER, DEFAULT_SOURCE_URL,
    DEFAULT_USER_AGENT,
};
pub use document::{Document, Group, Marker, OptionNode};
pub use error::{ConfigError, CoreError};
pub use extract::{extract, FALLBACK_NAME};
pub use pipeline::{
    build_categorized_output, CategorizedOutput, CategoryTabIds, Metadata, UNKNOWN_BUILD,
    UNKNOWN_SCHEMA_VERSION,
};
pub use poi::{Location, PointOfInterest};
pub use purity::{normalize_purity, Purity};
pub use router::{extract_by_tab, find_group_by_type};
