//! Catalog summary endpoint

use axum::{extract::State, Json};
use chrono::Utc;

use crate::{error::AppResult, services::catalog::CatalogSummary};

/// Headline counts for the catalog landing page
#[utoipa::path(
    get,
    path = "/summary",
    tag = "summary",
    responses(
        (status = 200, description = "Catalog summary counts", body = CatalogSummary)
    )
)]
pub async fn get_summary(
    State(state): State<crate::AppState>,
) -> AppResult<Json<CatalogSummary>> {
    let today = Utc::now().date_naive();
    let summary = state.services.catalog.summary(today).await?;
    Ok(Json(summary))
}
