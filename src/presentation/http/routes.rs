//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::get,
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_metrics;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    let prefix = state.settings.server.api_prefix.clone();

    Router::new()
        .nest(&prefix, api_routes())
        .route("/", get(handlers::health::index))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        // Known path, unsupported method: same JSON 404 as an unknown path
        .method_not_allowed_fallback(handlers::health::not_found)
        .route_layer(middleware::from_fn(track_metrics))
        .fallback(handlers::health::not_found)
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// Resource routes mounted under the configured prefix
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/members", member_routes())
        .nest("/trainers", trainer_routes())
        .nest("/clubs", club_routes())
        .nest("/memberships", membership_routes())
        .nest("/workouts", workout_routes())
        .nest("/attendance", attendance_routes())
}

fn member_routes() -> Router<AppState> {
    use handlers::members::*;

    Router::new()
        .route("/", get(list_members).post(create_member))
        .route(
            "/{id}",
            get(get_member).put(update_member).delete(delete_member),
        )
        .route("/{id}/memberships", get(get_member_memberships))
        .route("/{id}/attendance", get(get_member_attendance))
}

fn trainer_routes() -> Router<AppState> {
    use handlers::trainers::*;

    Router::new()
        .route("/", get(list_trainers).post(create_trainer))
        .route(
            "/{id}",
            get(get_trainer).put(update_trainer).delete(delete_trainer),
        )
        .route("/{id}/schedule", get(get_trainer_schedule))
}

fn club_routes() -> Router<AppState> {
    use handlers::clubs::*;

    Router::new()
        .route("/", get(list_clubs).post(create_club))
        .route("/{id}", get(get_club).put(update_club).delete(delete_club))
}

fn membership_routes() -> Router<AppState> {
    use handlers::memberships::*;

    Router::new()
        .route("/", get(list_memberships).post(create_membership))
        .route("/active", get(list_active_memberships))
        .route(
            "/{id}",
            get(get_membership)
                .put(update_membership)
                .delete(delete_membership),
        )
}

fn workout_routes() -> Router<AppState> {
    use handlers::workouts::*;

    Router::new()
        .route("/types", get(list_workout_types).post(create_workout_type))
        .route(
            "/types/{id}",
            get(get_workout_type)
                .put(update_workout_type)
                .delete(delete_workout_type),
        )
        .route("/schedule", get(list_schedules).post(create_schedule))
        .route("/schedule/upcoming", get(list_upcoming_schedules))
        .route(
            "/schedule/{id}",
            get(get_schedule).put(update_schedule).delete(delete_schedule),
        )
}

fn attendance_routes() -> Router<AppState> {
    use handlers::attendance::*;

    Router::new()
        .route("/", get(list_attendance).post(check_in))
        .route("/schedule/{id}", get(list_schedule_attendance))
        .route(
            "/{id}",
            get(get_attendance)
                .put(update_attendance_status)
                .delete(cancel_check_in),
        )
}
