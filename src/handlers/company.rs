use axum::{Json, extract::State, http::StatusCode};
use tracing::{error, info, warn};

use crate::middleware::company_request::CompanyPayload;
use crate::types::company::Company;
use crate::{TrackerError, router::TrackerState};

/// POST /Company -> inserts one company.
pub async fn create_company(
    State(state): State<TrackerState>,
    CompanyPayload(payload): CompanyPayload,
) -> Result<StatusCode, TrackerError> {
    let storage = state.storage()?;
    let company = Company::from(payload);

    storage.insert(&company).await.inspect_err(|e| match e {
        TrackerError::DuplicateCompany(id) => warn!(company_id = id, "duplicate company id"),
        other => error!(company_id = company.company_id, error = %other, "insert failed"),
    })?;

    info!(company_id = company.company_id, name = %company.name, "company created");
    Ok(StatusCode::OK)
}

/// GET /Company -> every stored company as a JSON array.
pub async fn list_companies(
    State(state): State<TrackerState>,
) -> Result<Json<Vec<Company>>, TrackerError> {
    let storage = state.storage()?;
    let companies = storage
        .list_all()
        .await
        .inspect_err(|e| error!(error = %e, "listing companies failed"))?;
    Ok(Json(companies))
}
