//! Attendance Handlers
//!
//! Thin adapters over [`AttendanceService`](crate::application::services::AttendanceService);
//! its errors map to 400 (duplicate, no seat) and 404 (missing records).

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use crate::application::dto::request::{CheckInRequest, UpdateAttendanceRequest};
use crate::application::dto::ApiResponse;
use crate::domain::{Attendance, AttendanceDetail};
use crate::presentation::http::extractors::{Id, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List all attendance records
pub async fn list_attendance(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<AttendanceDetail>>>, AppError> {
    let records = state.attendance.list().await?;
    Ok(Json(ApiResponse::list(records)))
}

/// Attendance for one session
pub async fn list_schedule_attendance(
    State(state): State<AppState>,
    Id(schedule_id): Id,
) -> Result<Json<ApiResponse<Vec<AttendanceDetail>>>, AppError> {
    let records = state.attendance.list_for_schedule(schedule_id).await?;
    Ok(Json(ApiResponse::list(records)))
}

pub async fn get_attendance(
    State(state): State<AppState>,
    Id(attendance_id): Id,
) -> Result<Json<ApiResponse<Attendance>>, AppError> {
    let record = state.attendance.get(attendance_id).await?;
    Ok(Json(ApiResponse::item(record)))
}

/// Check a member in to a session
pub async fn check_in(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CheckInRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Value>>), AppError> {
    let status = body.status()?;
    let attendance_id = state
        .attendance
        .check_in(body.schedule_id, body.member_id, status)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(
            "Attendance recorded successfully",
            "attendance_id",
            attendance_id,
        )),
    ))
}

pub async fn update_attendance_status(
    State(state): State<AppState>,
    Id(attendance_id): Id,
    ValidatedJson(body): ValidatedJson<UpdateAttendanceRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let status = body.status()?;
    state.attendance.update_status(attendance_id, status).await?;
    Ok(Json(ApiResponse::message(
        "Attendance status updated successfully",
    )))
}

/// Cancel a check-in and give the seat back
pub async fn cancel_check_in(
    State(state): State<AppState>,
    Id(attendance_id): Id,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.attendance.cancel_check_in(attendance_id).await?;
    Ok(Json(ApiResponse::message(
        "Attendance record deleted successfully",
    )))
}
