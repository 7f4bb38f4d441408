//! Book copy endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::copy::{BookCopy, CreateCopy, UpdateCopy},
};

/// List all copies
#[utoipa::path(
    get,
    path = "/copies",
    tag = "copies",
    responses(
        (status = 200, description = "List of copies", body = Vec<BookCopy>)
    )
)]
pub async fn list_copies(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<BookCopy>>> {
    let copies = state.services.lending.list_copies().await?;
    Ok(Json(copies))
}

/// Get copy by ID
#[utoipa::path(
    get,
    path = "/copies/{id}",
    tag = "copies",
    params(
        ("id" = Uuid, Path, description = "Copy ID")
    ),
    responses(
        (status = 200, description = "Copy details", body = BookCopy),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn get_copy(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<BookCopy>> {
    let copy = state.services.lending.get_copy(id).await?;
    Ok(Json(copy))
}

/// Create a new copy (status defaults to maintenance)
#[utoipa::path(
    post,
    path = "/copies",
    tag = "copies",
    request_body = CreateCopy,
    responses(
        (status = 201, description = "Copy created", body = BookCopy),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Referenced book or borrower not found")
    )
)]
pub async fn create_copy(
    State(state): State<crate::AppState>,
    Json(copy): Json<CreateCopy>,
) -> AppResult<(StatusCode, Json<BookCopy>)> {
    copy.validate()?;
    let created = state.services.lending.create_copy(copy).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a copy, including direct status assignment
#[utoipa::path(
    put,
    path = "/copies/{id}",
    tag = "copies",
    params(
        ("id" = Uuid, Path, description = "Copy ID")
    ),
    request_body = UpdateCopy,
    responses(
        (status = 200, description = "Copy updated", body = BookCopy),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Copy, book or borrower not found")
    )
)]
pub async fn update_copy(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(copy): Json<UpdateCopy>,
) -> AppResult<Json<BookCopy>> {
    copy.validate()?;
    let updated = state.services.lending.update_copy(id, copy).await?;
    Ok(Json(updated))
}

/// Delete a copy
#[utoipa::path(
    delete,
    path = "/copies/{id}",
    tag = "copies",
    params(
        ("id" = Uuid, Path, description = "Copy ID")
    ),
    responses(
        (status = 204, description = "Copy deleted"),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn delete_copy(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.lending.delete_copy(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
