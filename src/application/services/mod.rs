//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **AttendanceService**: check-in, cancellation and status changes against
//!   session capacity
//!
//! Plain CRUD for members, trainers, clubs, memberships and workouts has no
//! rules of its own and goes straight to the repositories.

pub mod attendance_service;

pub use attendance_service::{AttendanceError, AttendanceService, AttendanceServiceImpl};
