//! # Domain Layer
//!
//! The domain layer contains the core business types of the fitness club.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Core domain entities (Member, WorkoutSchedule, Attendance, etc.)
//!   together with their repository traits
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Capacity-changing writes are expressed as single repository operations
//!   so storage can perform them atomically

pub mod entities;

pub use entities::*;
