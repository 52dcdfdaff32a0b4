use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::TrackerError;
use crate::types::company::NewCompany;

/// Typed body of `POST /Company`.
///
/// The body is read regardless of `Content-Type`. Invalid JSON and JSON that
/// does not describe a company are rejected with distinct errors; an oversized
/// body keeps axum's 413 rejection.
pub struct CompanyPayload(pub NewCompany);

impl<S> FromRequest<S> for CompanyPayload
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(b) => b,
            Err(rejection) => return Err(rejection.into_response()),
        };

        decode_company(&bytes)
            .map(CompanyPayload)
            .map_err(|e| {
                warn!(error = %e, "rejected company payload");
                e.into_response()
            })
    }
}

pub fn decode_company(body: &[u8]) -> Result<NewCompany, TrackerError> {
    let value: Value = serde_json::from_slice(body).map_err(TrackerError::MalformedJson)?;
    let company: NewCompany =
        serde_json::from_value(value).map_err(|e| TrackerError::InvalidBody(e.to_string()))?;
    debug!(
        company_id = company.company_id,
        name = %company.name,
        "received company payload"
    );
    Ok(company)
}
