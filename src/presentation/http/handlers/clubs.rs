//! Club Handlers

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use crate::application::dto::request::ClubRequest;
use crate::application::dto::ApiResponse;
use crate::domain::Club;
use crate::presentation::http::extractors::{Id, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

pub async fn list_clubs(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Club>>>, AppError> {
    let clubs = state.clubs.list().await?;
    Ok(Json(ApiResponse::list(clubs)))
}

pub async fn get_club(
    State(state): State<AppState>,
    Id(club_id): Id,
) -> Result<Json<ApiResponse<Club>>, AppError> {
    let club = state
        .clubs
        .find_by_id(club_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Club not found".into()))?;

    Ok(Json(ApiResponse::item(club)))
}

pub async fn create_club(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<ClubRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Value>>), AppError> {
    let club_id = state.clubs.create(&body.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(
            "Club created successfully",
            "club_id",
            club_id,
        )),
    ))
}

pub async fn update_club(
    State(state): State<AppState>,
    Id(club_id): Id,
    ValidatedJson(body): ValidatedJson<ClubRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.clubs.update(club_id, &body.into()).await?;
    Ok(Json(ApiResponse::message("Club updated successfully")))
}

pub async fn delete_club(
    State(state): State<AppState>,
    Id(club_id): Id,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.clubs.delete(club_id).await?;
    Ok(Json(ApiResponse::message("Club deleted successfully")))
}
