//! Workout types and scheduled sessions.
//!
//! A `WorkoutType` is a class template; a `WorkoutSchedule` is one bookable
//! session of that class carrying the live seat counter.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A class template (name, duration, difficulty, nominal group size).
///
/// Maps to the `workout_types` table. Does not track live seats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutType {
    pub workout_type_id: i64,
    pub workout_name: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub difficulty_level: String,
    pub max_participants: i32,
}

/// Editable workout type fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutTypeFields {
    pub workout_name: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub difficulty_level: String,
    pub max_participants: i32,
}

/// One concrete bookable session.
///
/// Maps to the `workout_schedule` table:
/// - available_spots: INTEGER NOT NULL, live remaining capacity
/// - capacity: INTEGER NOT NULL, provisioned ceiling
/// - CHECK (available_spots >= 0 AND available_spots <= capacity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSchedule {
    pub schedule_id: i64,
    pub workout_type_id: i64,
    pub trainer_id: i64,
    pub club_id: i64,
    pub schedule_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub available_spots: i32,
    pub capacity: i32,
}

impl WorkoutSchedule {
    /// Whether at least one seat is still free.
    pub fn has_free_spot(&self) -> bool {
        self.available_spots > 0
    }

    /// Number of seats currently taken.
    pub fn occupied_spots(&self) -> i32 {
        self.capacity - self.available_spots
    }
}

/// A schedule joined with its workout, trainer and club labels.
///
/// Which labels are present depends on the query that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDetail {
    #[serde(flatten)]
    pub schedule: WorkoutSchedule,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainer_first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainer_last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl ScheduleDetail {
    /// Wrap a bare schedule with no labels.
    pub fn bare(schedule: WorkoutSchedule) -> Self {
        Self {
            schedule,
            workout_name: None,
            description: None,
            difficulty_level: None,
            duration_minutes: None,
            trainer_first_name: None,
            trainer_last_name: None,
            club_name: None,
            address: None,
        }
    }
}

/// Fields for provisioning a new session. `available_spots` also becomes
/// the session's capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSchedule {
    pub workout_type_id: i64,
    pub trainer_id: i64,
    pub club_id: i64,
    pub schedule_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub available_spots: i32,
}

/// Administrative edit of a session.
///
/// Setting `available_spots` above the current capacity raises the capacity
/// to match.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleChanges {
    pub schedule_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub available_spots: i32,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkoutTypeRepository: Send + Sync {
    /// List all workout types ordered by name.
    async fn list(&self) -> Result<Vec<WorkoutType>, AppError>;

    async fn find_by_id(&self, workout_type_id: i64) -> Result<Option<WorkoutType>, AppError>;

    async fn create(&self, fields: &WorkoutTypeFields) -> Result<i64, AppError>;

    async fn update(&self, workout_type_id: i64, fields: &WorkoutTypeFields) -> Result<(), AppError>;

    async fn delete(&self, workout_type_id: i64) -> Result<(), AppError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkoutScheduleRepository: Send + Sync {
    /// All sessions with labels, latest date and time first.
    async fn list(&self) -> Result<Vec<ScheduleDetail>, AppError>;

    /// Sessions dated today or later, earliest first.
    async fn list_upcoming(&self) -> Result<Vec<ScheduleDetail>, AppError>;

    /// Bare session row, used for capacity checks.
    async fn find_by_id(&self, schedule_id: i64) -> Result<Option<WorkoutSchedule>, AppError>;

    /// Session with full labels including workout description and club address.
    async fn find_detail(&self, schedule_id: i64) -> Result<Option<ScheduleDetail>, AppError>;

    async fn create(&self, schedule: &NewSchedule) -> Result<i64, AppError>;

    async fn update(&self, schedule_id: i64, changes: &ScheduleChanges) -> Result<(), AppError>;

    async fn delete(&self, schedule_id: i64) -> Result<(), AppError>;
}
