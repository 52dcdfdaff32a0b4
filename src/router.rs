use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::post,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::db::CompanyStorage;
use crate::error::TrackerError;
use crate::handlers::company::{create_company, list_companies};

/// Shared handler state. `storage` is `None` when the database could not be
/// opened at startup; every request then answers `NO_DB`.
#[derive(Clone)]
pub struct TrackerState {
    storage: Option<CompanyStorage>,
}

impl TrackerState {
    pub fn new(storage: Option<CompanyStorage>) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> Result<&CompanyStorage, TrackerError> {
        self.storage.as_ref().ok_or_else(|| {
            warn!("request rejected: no database handle");
            TrackerError::NoDatabase
        })
    }
}

pub fn tracker_router(state: TrackerState, body_limit: usize) -> Router {
    Router::new()
        .route("/Company", post(create_company).get(list_companies))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
