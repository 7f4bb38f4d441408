//! Borrower endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::borrower::{Borrower, CreateBorrower},
};

/// List all borrowers
#[utoipa::path(
    get,
    path = "/borrowers",
    tag = "borrowers",
    responses(
        (status = 200, description = "List of borrowers", body = Vec<Borrower>)
    )
)]
pub async fn list_borrowers(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Borrower>>> {
    let borrowers = state.services.catalog.list_borrowers().await?;
    Ok(Json(borrowers))
}

/// Get borrower by ID
#[utoipa::path(
    get,
    path = "/borrowers/{id}",
    tag = "borrowers",
    params(
        ("id" = i32, Path, description = "Borrower ID")
    ),
    responses(
        (status = 200, description = "Borrower details", body = Borrower),
        (status = 404, description = "Borrower not found")
    )
)]
pub async fn get_borrower(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Borrower>> {
    let borrower = state.services.catalog.get_borrower(id).await?;
    Ok(Json(borrower))
}

/// Create a new borrower
#[utoipa::path(
    post,
    path = "/borrowers",
    tag = "borrowers",
    request_body = CreateBorrower,
    responses(
        (status = 201, description = "Borrower created", body = Borrower),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Username already taken")
    )
)]
pub async fn create_borrower(
    State(state): State<crate::AppState>,
    Json(borrower): Json<CreateBorrower>,
) -> AppResult<(StatusCode, Json<Borrower>)> {
    borrower.validate()?;
    let created = state.services.catalog.create_borrower(borrower).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Delete a borrower (copies lent to them keep a null borrower reference)
#[utoipa::path(
    delete,
    path = "/borrowers/{id}",
    tag = "borrowers",
    params(
        ("id" = i32, Path, description = "Borrower ID")
    ),
    responses(
        (status = 204, description = "Borrower deleted"),
        (status = 404, description = "Borrower not found")
    )
)]
pub async fn delete_borrower(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete_borrower(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
