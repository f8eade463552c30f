//! Membership Handlers

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use crate::application::dto::request::{CreateMembershipRequest, UpdateMembershipRequest};
use crate::application::dto::ApiResponse;
use crate::domain::MembershipDetail;
use crate::presentation::http::extractors::{Id, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List all memberships with member and club labels
pub async fn list_memberships(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<MembershipDetail>>>, AppError> {
    let memberships = state.memberships.list().await?;
    Ok(Json(ApiResponse::list(memberships)))
}

/// Active memberships, soonest to expire first
pub async fn list_active_memberships(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<MembershipDetail>>>, AppError> {
    let memberships = state.memberships.list_active().await?;
    Ok(Json(ApiResponse::list(memberships)))
}

pub async fn get_membership(
    State(state): State<AppState>,
    Id(membership_id): Id,
) -> Result<Json<ApiResponse<MembershipDetail>>, AppError> {
    let membership = state
        .memberships
        .find_by_id(membership_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Membership not found".into()))?;

    Ok(Json(ApiResponse::item(membership)))
}

pub async fn create_membership(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateMembershipRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Value>>), AppError> {
    let membership = body.into_new_membership()?;
    let membership_id = state.memberships.create(&membership).await?;

    tracing::info!(
        membership_id,
        member_id = membership.member_id,
        club_id = membership.club_id,
        "Membership created"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(
            "Membership created successfully",
            "membership_id",
            membership_id,
        )),
    ))
}

pub async fn update_membership(
    State(state): State<AppState>,
    Id(membership_id): Id,
    ValidatedJson(body): ValidatedJson<UpdateMembershipRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let changes = body.into_changes()?;
    state.memberships.update(membership_id, &changes).await?;
    Ok(Json(ApiResponse::message("Membership updated successfully")))
}

pub async fn delete_membership(
    State(state): State<AppState>,
    Id(membership_id): Id,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.memberships.delete(membership_id).await?;
    Ok(Json(ApiResponse::message("Membership deleted successfully")))
}
