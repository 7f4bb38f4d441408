//! Loan renewal workflow endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::copy::{BookCopy, BorrowedCopy},
    services::lending::proposed_renewal_date,
};

/// Renewal request with the proposed new due date
#[derive(Deserialize, ToSchema)]
pub struct RenewRequest {
    /// Proposed due date (not in the past, at most 4 weeks ahead)
    pub due_back: NaiveDate,
}

/// Default renewal proposal shown to librarians
#[derive(Serialize, ToSchema)]
pub struct RenewalProposal {
    /// Suggested due date (3 weeks from today)
    pub due_back: NaiveDate,
}

/// Renewal response with the updated copy
#[derive(Serialize, ToSchema)]
pub struct RenewResponse {
    /// Status message
    pub message: String,
    /// The renewed copy
    pub copy: BookCopy,
}

/// Get the default renewal proposal for a copy
#[utoipa::path(
    get,
    path = "/copies/{id}/renewal",
    tag = "loans",
    params(
        ("id" = Uuid, Path, description = "Copy ID")
    ),
    responses(
        (status = 200, description = "Suggested renewal date", body = RenewalProposal),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn get_renewal_proposal(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RenewalProposal>> {
    // Verify the copy exists before proposing anything
    state.services.lending.get_copy(id).await?;

    let today = Utc::now().date_naive();
    Ok(Json(RenewalProposal {
        due_back: proposed_renewal_date(today),
    }))
}

/// Renew a loan: set a validated new due date on the copy
#[utoipa::path(
    post,
    path = "/copies/{id}/renew",
    tag = "loans",
    params(
        ("id" = Uuid, Path, description = "Copy ID")
    ),
    request_body = RenewRequest,
    responses(
        (status = 200, description = "Loan renewed", body = RenewResponse),
        (status = 400, description = "Date in the past or more than 4 weeks ahead"),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn renew_copy(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RenewRequest>,
) -> AppResult<Json<RenewResponse>> {
    let today = Utc::now().date_naive();
    let copy = state
        .services
        .lending
        .renew_copy(id, request.due_back, today)
        .await?;

    Ok(Json(RenewResponse {
        message: format!("Loan renewed until {}", request.due_back),
        copy,
    }))
}

/// Get copies currently on loan to a borrower
#[utoipa::path(
    get,
    path = "/borrowers/{id}/loans",
    tag = "loans",
    params(
        ("id" = i32, Path, description = "Borrower ID")
    ),
    responses(
        (status = 200, description = "Borrower's active loans", body = Vec<BorrowedCopy>),
        (status = 404, description = "Borrower not found")
    )
)]
pub async fn get_borrower_loans(
    State(state): State<crate::AppState>,
    Path(borrower_id): Path<i32>,
) -> AppResult<Json<Vec<BorrowedCopy>>> {
    let today = Utc::now().date_naive();
    let loans = state
        .services
        .lending
        .get_borrower_loans(borrower_id, today)
        .await?;
    Ok(Json(loans))
}
