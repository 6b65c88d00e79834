//! Handlers serving the files written by `sfmap-cli`.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::Value;
use sfmap_core::{Category, Metadata};
use sfmap_store::StoreError;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

/// `GET /data/{category}`: the stored record array, unwrapped.
pub(super) async fn get_category(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let Ok(category) = slug.parse::<Category>() else {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("unknown category: {slug}"),
        ));
    };

    let dir = state.data_dir.as_ref().clone();
    read_blocking(req_id, move || sfmap_store::read_category(&dir, category))
        .await
        .map(Json)
}

/// `GET /data/metadata`.
pub(super) async fn get_metadata(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<Metadata>, ApiError> {
    let dir = state.data_dir.as_ref().clone();
    read_blocking(req_id, move || sfmap_store::read_metadata(&dir))
        .await
        .map(Json)
}

async fn read_blocking<T, F>(req_id: RequestId, read: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, StoreError> + Send + 'static,
{
    match tokio::task::spawn_blocking(read).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(map_store_error(req_id.0, &e)),
        Err(e) => {
            tracing::error!(error = %e, "data read task failed");
            Err(ApiError::new(req_id.0, "internal_error", "data read failed"))
        }
    }
}

pub(super) fn map_store_error(request_id: String, error: &StoreError) -> ApiError {
    match error {
        StoreError::NotFound { path } => {
            tracing::warn!(path = %path.display(), "data file missing");
            ApiError::new(request_id, "not_found", "data has not been generated yet")
        }
        StoreError::Io { .. } | StoreError::Json { .. } => {
            tracing::error!(error = %error, "data file unreadable");
            ApiError::new(request_id, "internal_error", "data file is unreadable")
        }
    }
}

