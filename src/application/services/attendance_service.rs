//! Attendance Service
//!
//! Check-in, cancellation and status changes against session capacity.
//!
//! Preconditions are checked in a fixed order before anything is written.
//! The seat counter itself is only changed by the repository's transactional
//! writes, so a precondition that passes here can still be refused by storage
//! when another request takes the last seat first.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    Attendance, AttendanceDetail, AttendanceRepository, AttendanceStatus, CheckInOutcome,
    NewAttendance, WorkoutScheduleRepository,
};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Attendance service trait
#[async_trait]
pub trait AttendanceService: Send + Sync {
    /// Take a seat on a session for a member. Returns the new attendance ID.
    async fn check_in(
        &self,
        schedule_id: i64,
        member_id: i64,
        status: Option<AttendanceStatus>,
    ) -> Result<i64, AttendanceError>;

    /// Overwrite the status of an existing attendance record.
    async fn update_status(
        &self,
        attendance_id: i64,
        status: AttendanceStatus,
    ) -> Result<(), AttendanceError>;

    /// Remove an attendance record and give its seat back.
    async fn cancel_check_in(&self, attendance_id: i64) -> Result<(), AttendanceError>;

    async fn list(&self) -> Result<Vec<AttendanceDetail>, AttendanceError>;

    async fn list_for_schedule(
        &self,
        schedule_id: i64,
    ) -> Result<Vec<AttendanceDetail>, AttendanceError>;

    async fn list_for_member(&self, member_id: i64)
        -> Result<Vec<AttendanceDetail>, AttendanceError>;

    async fn get(&self, attendance_id: i64) -> Result<Attendance, AttendanceError>;
}

/// Attendance service errors
#[derive(Debug, thiserror::Error)]
pub enum AttendanceError {
    #[error("Member already checked in for this workout")]
    DuplicateCheckIn,

    #[error("Workout schedule not found")]
    ScheduleNotFound,

    #[error("Member not found")]
    MemberNotFound,

    #[error("No available spots for this workout")]
    CapacityExceeded,

    #[error("Attendance record not found")]
    AttendanceNotFound,

    #[error(transparent)]
    Storage(#[from] AppError),
}

impl AttendanceError {
    /// Label used for the `outcome` metric dimension.
    fn outcome(&self) -> &'static str {
        match self {
            Self::DuplicateCheckIn => "duplicate",
            Self::ScheduleNotFound => "schedule_not_found",
            Self::MemberNotFound => "member_not_found",
            Self::CapacityExceeded => "capacity_exceeded",
            Self::AttendanceNotFound => "not_found",
            Self::Storage(_) => "error",
        }
    }
}

impl From<AttendanceError> for AppError {
    fn from(err: AttendanceError) -> Self {
        match err {
            AttendanceError::DuplicateCheckIn | AttendanceError::CapacityExceeded => {
                AppError::BadRequest(err.to_string())
            }
            AttendanceError::ScheduleNotFound
            | AttendanceError::MemberNotFound
            | AttendanceError::AttendanceNotFound => AppError::NotFound(err.to_string()),
            AttendanceError::Storage(inner) => inner,
        }
    }
}

/// AttendanceService implementation
pub struct AttendanceServiceImpl<A, S>
where
    A: AttendanceRepository,
    S: WorkoutScheduleRepository,
{
    attendance_repo: Arc<A>,
    schedule_repo: Arc<S>,
}

impl<A, S> AttendanceServiceImpl<A, S>
where
    A: AttendanceRepository,
    S: WorkoutScheduleRepository,
{
    pub fn new(attendance_repo: Arc<A>, schedule_repo: Arc<S>) -> Self {
        Self {
            attendance_repo,
            schedule_repo,
        }
    }

    async fn try_check_in(
        &self,
        schedule_id: i64,
        member_id: i64,
        status: AttendanceStatus,
    ) -> Result<i64, AttendanceError> {
        if self
            .attendance_repo
            .find_by_schedule_and_member(schedule_id, member_id)
            .await?
            .is_some()
        {
            return Err(AttendanceError::DuplicateCheckIn);
        }

        let schedule = self
            .schedule_repo
            .find_by_id(schedule_id)
            .await?
            .ok_or(AttendanceError::ScheduleNotFound)?;

        if !schedule.has_free_spot() {
            return Err(AttendanceError::CapacityExceeded);
        }

        let attendance = NewAttendance {
            schedule_id,
            member_id,
            status,
        };

        match self.attendance_repo.record_check_in(&attendance).await? {
            CheckInOutcome::Recorded { attendance_id } => Ok(attendance_id),
            CheckInOutcome::NoSpotsLeft => Err(AttendanceError::CapacityExceeded),
            CheckInOutcome::UnknownSchedule => Err(AttendanceError::ScheduleNotFound),
            CheckInOutcome::AlreadyCheckedIn => Err(AttendanceError::DuplicateCheckIn),
            CheckInOutcome::UnknownMember => Err(AttendanceError::MemberNotFound),
        }
    }
}

#[async_trait]
impl<A, S> AttendanceService for AttendanceServiceImpl<A, S>
where
    A: AttendanceRepository + 'static,
    S: WorkoutScheduleRepository + 'static,
{
    async fn check_in(
        &self,
        schedule_id: i64,
        member_id: i64,
        status: Option<AttendanceStatus>,
    ) -> Result<i64, AttendanceError> {
        let status = status.unwrap_or_default();

        match self.try_check_in(schedule_id, member_id, status).await {
            Ok(attendance_id) => {
                metrics::record_attendance_operation("check_in", "recorded");
                tracing::info!(
                    attendance_id,
                    schedule_id,
                    member_id,
                    status = %status,
                    "Member checked in"
                );
                Ok(attendance_id)
            }
            Err(err) => {
                metrics::record_attendance_operation("check_in", err.outcome());
                match &err {
                    AttendanceError::Storage(e) => {
                        tracing::error!(schedule_id, member_id, error = %e, "Check-in failed")
                    }
                    _ => tracing::warn!(schedule_id, member_id, reason = %err, "Check-in rejected"),
                }
                Err(err)
            }
        }
    }

    async fn update_status(
        &self,
        attendance_id: i64,
        status: AttendanceStatus,
    ) -> Result<(), AttendanceError> {
        if self.attendance_repo.find_by_id(attendance_id).await?.is_none() {
            metrics::record_attendance_operation("update_status", "not_found");
            return Err(AttendanceError::AttendanceNotFound);
        }

        // The row can disappear between the lookup and the write.
        if !self.attendance_repo.update_status(attendance_id, status).await? {
            metrics::record_attendance_operation("update_status", "not_found");
            return Err(AttendanceError::AttendanceNotFound);
        }

        metrics::record_attendance_operation("update_status", "updated");
        tracing::debug!(attendance_id, status = %status, "Attendance status updated");

        Ok(())
    }

    async fn cancel_check_in(&self, attendance_id: i64) -> Result<(), AttendanceError> {
        let Some(cancelled) = self.attendance_repo.cancel_check_in(attendance_id).await? else {
            metrics::record_attendance_operation("cancel", "not_found");
            return Err(AttendanceError::AttendanceNotFound);
        };

        if cancelled.spot_restored {
            metrics::record_attendance_operation("cancel", "restored");
        } else {
            metrics::record_attendance_operation("cancel", "at_capacity");
            tracing::warn!(
                attendance_id,
                schedule_id = cancelled.schedule_id,
                "Session already at capacity, seat counter left unchanged"
            );
        }

        tracing::info!(
            attendance_id,
            schedule_id = cancelled.schedule_id,
            "Check-in cancelled"
        );

        Ok(())
    }

    async fn list(&self) -> Result<Vec<AttendanceDetail>, AttendanceError> {
        Ok(self.attendance_repo.list().await?)
    }

    async fn list_for_schedule(
        &self,
        schedule_id: i64,
    ) -> Result<Vec<AttendanceDetail>, AttendanceError> {
        Ok(self.attendance_repo.list_by_schedule(schedule_id).await?)
    }

    async fn list_for_member(
        &self,
        member_id: i64,
    ) -> Result<Vec<AttendanceDetail>, AttendanceError> {
        Ok(self.attendance_repo.list_by_member(member_id).await?)
    }

    async fn get(&self, attendance_id: i64) -> Result<Attendance, AttendanceError> {
        self.attendance_repo
            .find_by_id(attendance_id)
            .await?
            .ok_or(AttendanceError::AttendanceNotFound)
    }
}
