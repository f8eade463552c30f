//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgMemberRepository** - Member registration and profile data
//! - **PgClubRepository** - Club locations
//! - **PgTrainerRepository** - Trainers and their session schedules
//! - **PgWorkoutTypeRepository** - Class templates
//! - **PgWorkoutScheduleRepository** - Bookable sessions and administrative capacity edits
//! - **PgMembershipRepository** - Member/club contracts
//! - **PgAttendanceRepository** - Check-in records and the atomic seat-counter writes
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgAttendanceRepository, PgWorkoutScheduleRepository};
//!
//! fn setup_repositories(pool: PgPool) {
//!     let attendance_repo = PgAttendanceRepository::new(pool.clone());
//!     let schedule_repo = PgWorkoutScheduleRepository::new(pool);
//! }
//! ```

pub mod attendance_repository;
pub mod club_repository;
pub mod member_repository;
pub mod membership_repository;
pub mod schedule_repository;
pub mod trainer_repository;
pub mod workout_type_repository;

pub use attendance_repository::PgAttendanceRepository;
pub use club_repository::PgClubRepository;
pub use member_repository::PgMemberRepository;
pub use membership_repository::PgMembershipRepository;
pub use schedule_repository::PgWorkoutScheduleRepository;
pub use trainer_repository::PgTrainerRepository;
pub use workout_type_repository::PgWorkoutTypeRepository;
