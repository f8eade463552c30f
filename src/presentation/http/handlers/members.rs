//! Member Handlers

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use crate::application::dto::request::MemberRequest;
use crate::application::dto::ApiResponse;
use crate::domain::{AttendanceDetail, Member, MembershipDetail};
use crate::presentation::http::extractors::{Id, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List all members
pub async fn list_members(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Member>>>, AppError> {
    let members = state.members.list().await?;
    Ok(Json(ApiResponse::list(members)))
}

/// Get member by ID
pub async fn get_member(
    State(state): State<AppState>,
    Id(member_id): Id,
) -> Result<Json<ApiResponse<Member>>, AppError> {
    let member = state
        .members
        .find_by_id(member_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Member not found".into()))?;

    Ok(Json(ApiResponse::item(member)))
}

/// Memberships held by a member
pub async fn get_member_memberships(
    State(state): State<AppState>,
    Id(member_id): Id,
) -> Result<Json<ApiResponse<Vec<MembershipDetail>>>, AppError> {
    let memberships = state.memberships.list_for_member(member_id).await?;
    Ok(Json(ApiResponse::list(memberships)))
}

/// Attendance history of a member
pub async fn get_member_attendance(
    State(state): State<AppState>,
    Id(member_id): Id,
) -> Result<Json<ApiResponse<Vec<AttendanceDetail>>>, AppError> {
    let attendance = state.attendance.list_for_member(member_id).await?;
    Ok(Json(ApiResponse::list(attendance)))
}

/// Register a new member
pub async fn create_member(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<MemberRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Value>>), AppError> {
    let registration_date = body.registration_date();
    let member_id = state
        .members
        .create(&body.into_fields(), registration_date)
        .await?;

    tracing::info!(member_id, "Member created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(
            "Member created successfully",
            "member_id",
            member_id,
        )),
    ))
}

/// Update member
pub async fn update_member(
    State(state): State<AppState>,
    Id(member_id): Id,
    ValidatedJson(body): ValidatedJson<MemberRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.members.update(member_id, &body.into_fields()).await?;
    Ok(Json(ApiResponse::message("Member updated successfully")))
}

/// Delete member, their memberships and attendance
pub async fn delete_member(
    State(state): State<AppState>,
    Id(member_id): Id,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.members.delete(member_id).await?;

    tracing::info!(member_id, "Member deleted");

    Ok(Json(ApiResponse::message("Member deleted successfully")))
}
