//! HTTP client for the upstream map-data JSON.

mod client;
mod error;
mod retry;

pub use client::{FetchSettings, MapDataClient, ACCEPT_HEADER};
pub use error::FetchError;
