//! Attendance entity and repository trait.
//!
//! An attendance row is one member's occupancy of one schedule slot. The
//! repository owns the two write paths that touch seat capacity, and each
//! of them runs as a single transaction.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Recorded presence of a member at a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
    Late,
    Excused,
}

impl AttendanceStatus {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Late => "Late",
            Self::Excused => "Excused",
        }
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            "late" => Ok(Self::Late),
            "excused" => Ok(Self::Excused),
            other => Err(format!("Unknown attendance status: {}", other)),
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Maps to the `attendance` table:
/// - attendance_id: BIGSERIAL PRIMARY KEY
/// - schedule_id: BIGINT NOT NULL REFERENCES workout_schedule ON DELETE CASCADE
/// - member_id: BIGINT NOT NULL REFERENCES members ON DELETE CASCADE
/// - status: VARCHAR(20) NOT NULL DEFAULT 'Present'
/// - attendance_date: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - UNIQUE (schedule_id, member_id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub attendance_id: i64,
    pub schedule_id: i64,
    pub member_id: i64,
    pub status: AttendanceStatus,
    pub attendance_date: DateTime<Utc>,
}

/// An attendance row joined with member, session, workout and club labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceDetail {
    #[serde(flatten)]
    pub attendance: Attendance,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club_name: Option<String>,
}

/// A check-in request as handed to storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAttendance {
    pub schedule_id: i64,
    pub member_id: i64,
    pub status: AttendanceStatus,
}

/// Result of the atomic "take a seat and record attendance" write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckInOutcome {
    /// Seat taken and attendance row inserted.
    Recorded { attendance_id: i64 },

    /// The session exists but has no seat left. Nothing was written.
    NoSpotsLeft,

    /// The session was removed before the seat could be taken. Nothing was
    /// written.
    UnknownSchedule,

    /// A row for the (schedule, member) pair already exists. Nothing was
    /// written.
    AlreadyCheckedIn,

    /// The member does not exist. Nothing was written.
    UnknownMember,
}

/// Result of the atomic "remove attendance and give the seat back" write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelledCheckIn {
    pub attendance_id: i64,
    pub schedule_id: i64,

    /// False when the session was already at capacity, so the counter was
    /// left unchanged.
    pub spot_restored: bool,
}

/// Repository trait for Attendance data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Every attendance row with member, session, workout and club labels,
    /// newest first.
    async fn list(&self) -> Result<Vec<AttendanceDetail>, AppError>;

    /// Attendance for one session with member labels, latest check-in first.
    async fn list_by_schedule(&self, schedule_id: i64) -> Result<Vec<AttendanceDetail>, AppError>;

    /// Attendance for one member with session and workout labels, latest
    /// session first.
    async fn list_by_member(&self, member_id: i64) -> Result<Vec<AttendanceDetail>, AppError>;

    async fn find_by_id(&self, attendance_id: i64) -> Result<Option<Attendance>, AppError>;

    async fn find_by_schedule_and_member(
        &self,
        schedule_id: i64,
        member_id: i64,
    ) -> Result<Option<Attendance>, AppError>;

    /// Decrement the session's `available_spots` only if it is positive and
    /// insert the attendance row, as one transaction.
    async fn record_check_in(&self, attendance: &NewAttendance) -> Result<CheckInOutcome, AppError>;

    /// Overwrite the status. Returns false when no row matched.
    async fn update_status(
        &self,
        attendance_id: i64,
        status: AttendanceStatus,
    ) -> Result<bool, AppError>;

    /// Delete the row and increment the session's `available_spots` (never
    /// beyond capacity), as one transaction. Returns `None` when no row
    /// matched.
    async fn cancel_check_in(&self, attendance_id: i64) -> Result<Option<CancelledCheckIn>, AppError>;
}
