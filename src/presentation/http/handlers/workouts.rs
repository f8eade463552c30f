//! Workout Handlers
//!
//! Workout types (class templates) and scheduled sessions.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use crate::application::dto::request::{
    CreateScheduleRequest, UpdateScheduleRequest, WorkoutTypeRequest,
};
use crate::application::dto::ApiResponse;
use crate::domain::{ScheduleDetail, WorkoutType};
use crate::presentation::http::extractors::{Id, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List workout types ordered by name
pub async fn list_workout_types(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<WorkoutType>>>, AppError> {
    let types = state.workout_types.list().await?;
    Ok(Json(ApiResponse::list(types)))
}

pub async fn get_workout_type(
    State(state): State<AppState>,
    Id(workout_type_id): Id,
) -> Result<Json<ApiResponse<WorkoutType>>, AppError> {
    let workout_type = state
        .workout_types
        .find_by_id(workout_type_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Workout type not found".into()))?;

    Ok(Json(ApiResponse::item(workout_type)))
}

pub async fn create_workout_type(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<WorkoutTypeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Value>>), AppError> {
    let workout_type_id = state.workout_types.create(&body.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(
            "Workout type created successfully",
            "workout_type_id",
            workout_type_id,
        )),
    ))
}

pub async fn update_workout_type(
    State(state): State<AppState>,
    Id(workout_type_id): Id,
    ValidatedJson(body): ValidatedJson<WorkoutTypeRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state
        .workout_types
        .update(workout_type_id, &body.into())
        .await?;
    Ok(Json(ApiResponse::message("Workout type updated successfully")))
}

pub async fn delete_workout_type(
    State(state): State<AppState>,
    Id(workout_type_id): Id,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.workout_types.delete(workout_type_id).await?;
    Ok(Json(ApiResponse::message("Workout type deleted successfully")))
}

/// List all sessions, latest first
pub async fn list_schedules(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ScheduleDetail>>>, AppError> {
    let schedules = state.schedules.list().await?;
    Ok(Json(ApiResponse::list(schedules)))
}

/// Sessions from today onward, earliest first
pub async fn list_upcoming_schedules(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ScheduleDetail>>>, AppError> {
    let schedules = state.schedules.list_upcoming().await?;
    Ok(Json(ApiResponse::list(schedules)))
}

pub async fn get_schedule(
    State(state): State<AppState>,
    Id(schedule_id): Id,
) -> Result<Json<ApiResponse<ScheduleDetail>>, AppError> {
    let schedule = state
        .schedules
        .find_detail(schedule_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Workout schedule not found".into()))?;

    Ok(Json(ApiResponse::item(schedule)))
}

/// Provision a session; its initial spots become its capacity
pub async fn create_schedule(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateScheduleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Value>>), AppError> {
    let schedule_id = state.schedules.create(&body.into()).await?;

    tracing::info!(schedule_id, "Workout schedule created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(
            "Workout schedule created successfully",
            "schedule_id",
            schedule_id,
        )),
    ))
}

/// Administrative edit, including the seat counter
pub async fn update_schedule(
    State(state): State<AppState>,
    Id(schedule_id): Id,
    ValidatedJson(body): ValidatedJson<UpdateScheduleRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let available_spots = body.available_spots;
    state.schedules.update(schedule_id, &body.into()).await?;

    tracing::info!(schedule_id, available_spots, "Workout schedule updated");

    Ok(Json(ApiResponse::message(
        "Workout schedule updated successfully",
    )))
}

pub async fn delete_schedule(
    State(state): State<AppState>,
    Id(schedule_id): Id,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.schedules.delete(schedule_id).await?;
    Ok(Json(ApiResponse::message(
        "Workout schedule deleted successfully",
    )))
}
