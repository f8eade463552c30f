//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod attendance;
pub mod clubs;
pub mod health;
pub mod members;
pub mod memberships;
pub mod trainers;
pub mod workouts;
