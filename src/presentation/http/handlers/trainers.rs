//! Trainer Handlers

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use crate::application::dto::request::TrainerRequest;
use crate::application::dto::ApiResponse;
use crate::domain::{ScheduleDetail, Trainer};
use crate::presentation::http::extractors::{Id, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List all trainers with their club names
pub async fn list_trainers(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Trainer>>>, AppError> {
    let trainers = state.trainers.list().await?;
    Ok(Json(ApiResponse::list(trainers)))
}

pub async fn get_trainer(
    State(state): State<AppState>,
    Id(trainer_id): Id,
) -> Result<Json<ApiResponse<Trainer>>, AppError> {
    let trainer = state
        .trainers
        .find_by_id(trainer_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Trainer not found".into()))?;

    Ok(Json(ApiResponse::item(trainer)))
}

/// Sessions led by a trainer
pub async fn get_trainer_schedule(
    State(state): State<AppState>,
    Id(trainer_id): Id,
) -> Result<Json<ApiResponse<Vec<ScheduleDetail>>>, AppError> {
    let schedule = state.trainers.schedule_for_trainer(trainer_id).await?;
    Ok(Json(ApiResponse::list(schedule)))
}

pub async fn create_trainer(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<TrainerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Value>>), AppError> {
    let hire_date = body.hire_date();
    let trainer_id = state.trainers.create(&body.into_fields(), hire_date).await?;

    tracing::info!(trainer_id, "Trainer created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(
            "Trainer created successfully",
            "trainer_id",
            trainer_id,
        )),
    ))
}

pub async fn update_trainer(
    State(state): State<AppState>,
    Id(trainer_id): Id,
    ValidatedJson(body): ValidatedJson<TrainerRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.trainers.update(trainer_id, &body.into_fields()).await?;
    Ok(Json(ApiResponse::message("Trainer updated successfully")))
}

pub async fn delete_trainer(
    State(state): State<AppState>,
    Id(trainer_id): Id,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.trainers.delete(trainer_id).await?;
    Ok(Json(ApiResponse::message("Trainer deleted successfully")))
}
