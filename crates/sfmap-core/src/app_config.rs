use std::net::SocketAddr;
use std::path::PathBuf;

use crate::pipeline::CategoryTabIds;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Directory holding the per-category JSON files and `metadata.json`.
    pub data_dir: PathBuf,
    pub source_url: String,
    /// Sent as `Referer`; the upstream host rejects requests without it.
    pub source_referer: String,
    pub fetch_user_agent: String,
    pub fetch_timeout_secs: u64,
    pub fetch_max_retries: u32,
    pub fetch_retry_backoff_base_ms: u64,
    pub tab_ids: CategoryTabIds,
}
