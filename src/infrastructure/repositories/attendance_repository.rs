//! Attendance Repository Implementation
//!
//! PostgreSQL implementation of the AttendanceRepository trait.
//!
//! Check-in and cancellation each touch two tables. Both run inside one
//! transaction, and the seat counter is only ever changed by a conditional
//! UPDATE evaluated by PostgreSQL against the latest committed row version.
//! Two concurrent check-ins on the last seat therefore serialize on the
//! schedule row and the second one matches zero rows.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::PgPool;

use crate::domain::{
    Attendance, AttendanceDetail, AttendanceRepository, AttendanceStatus, CancelledCheckIn,
    CheckInOutcome, NewAttendance,
};
use crate::infrastructure::database::TransactionContext;
use crate::shared::error::AppError;

/// Database row representation matching the attendance table schema.
#[derive(Debug, sqlx::FromRow)]
struct AttendanceRow {
    attendance_id: i64,
    schedule_id: i64,
    member_id: i64,
    status: String,
    attendance_date: DateTime<Utc>,
}

impl TryFrom<AttendanceRow> for Attendance {
    type Error = AppError;

    fn try_from(row: AttendanceRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<AttendanceStatus>()
            .map_err(AppError::Internal)?;

        Ok(Self {
            attendance_id: row.attendance_id,
            schedule_id: row.schedule_id,
            member_id: row.member_id,
            status,
            attendance_date: row.attendance_date,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AttendanceDetailRow {
    #[sqlx(flatten)]
    attendance: AttendanceRow,
    #[sqlx(default)]
    first_name: Option<String>,
    #[sqlx(default)]
    last_name: Option<String>,
    #[sqlx(default)]
    email: Option<String>,
    #[sqlx(default)]
    schedule_date: Option<NaiveDate>,
    #[sqlx(default)]
    start_time: Option<NaiveTime>,
    #[sqlx(default)]
    workout_name: Option<String>,
    #[sqlx(default)]
    club_name: Option<String>,
}

impl TryFrom<AttendanceDetailRow> for AttendanceDetail {
    type Error = AppError;

    fn try_from(row: AttendanceDetailRow) -> Result<Self, Self::Error> {
        Ok(Self {
            attendance: row.attendance.try_into()?,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            schedule_date: row.schedule_date,
            start_time: row.start_time,
            workout_name: row.workout_name,
            club_name: row.club_name,
        })
    }
}

fn into_details(rows: Vec<AttendanceDetailRow>) -> Result<Vec<AttendanceDetail>, AppError> {
    rows.into_iter().map(AttendanceDetail::try_from).collect()
}

const ATTENDANCE_COLUMNS: &str =
    "a.attendance_id, a.schedule_id, a.member_id, a.status, a.attendance_date";

/// PostgreSQL attendance repository implementation.
#[derive(Clone)]
pub struct PgAttendanceRepository {
    pool: PgPool,
}

impl PgAttendanceRepository {
    /// Create a new PgAttendanceRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceRepository for PgAttendanceRepository {
    async fn list(&self) -> Result<Vec<AttendanceDetail>, AppError> {
        let rows = sqlx::query_as::<_, AttendanceDetailRow>(&format!(
            r#"
            SELECT {}, m.first_name, m.last_name, m.email,
                   ws.schedule_date, ws.start_time, wt.workout_name, c.club_name
            FROM attendance a
            JOIN members m ON a.member_id = m.member_id
            JOIN workout_schedule ws ON a.schedule_id = ws.schedule_id
            JOIN workout_types wt ON ws.workout_type_id = wt.workout_type_id
            JOIN clubs c ON ws.club_id = c.club_id
            ORDER BY a.attendance_id DESC
            "#,
            ATTENDANCE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        into_details(rows)
    }

    async fn list_by_schedule(&self, schedule_id: i64) -> Result<Vec<AttendanceDetail>, AppError> {
        let rows = sqlx::query_as::<_, AttendanceDetailRow>(&format!(
            r#"
            SELECT {}, m.first_name, m.last_name, m.email
            FROM attendance a
            JOIN members m ON a.member_id = m.member_id
            WHERE a.schedule_id = $1
            ORDER BY a.attendance_date DESC
            "#,
            ATTENDANCE_COLUMNS
        ))
        .bind(schedule_id)
        .fetch_all(&self.pool)
        .await?;

        into_details(rows)
    }

    async fn list_by_member(&self, member_id: i64) -> Result<Vec<AttendanceDetail>, AppError> {
        let rows = sqlx::query_as::<_, AttendanceDetailRow>(&format!(
            r#"
            SELECT {}, ws.schedule_date, ws.start_time, wt.workout_name
            FROM attendance a
            JOIN workout_schedule ws ON a.schedule_id = ws.schedule_id
            JOIN workout_types wt ON ws.workout_type_id = wt.workout_type_id
            WHERE a.member_id = $1
            ORDER BY ws.schedule_date DESC, ws.start_time DESC
            "#,
            ATTENDANCE_COLUMNS
        ))
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;

        into_details(rows)
    }

    async fn find_by_id(&self, attendance_id: i64) -> Result<Option<Attendance>, AppError> {
        let row = sqlx::query_as::<_, AttendanceRow>(&format!(
            "SELECT {} FROM attendance a WHERE a.attendance_id = $1",
            ATTENDANCE_COLUMNS
        ))
        .bind(attendance_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Attendance::try_from).transpose()
    }

    async fn find_by_schedule_and_member(
        &self,
        schedule_id: i64,
        member_id: i64,
    ) -> Result<Option<Attendance>, AppError> {
        let row = sqlx::query_as::<_, AttendanceRow>(&format!(
            "SELECT {} FROM attendance a WHERE a.schedule_id = $1 AND a.member_id = $2",
            ATTENDANCE_COLUMNS
        ))
        .bind(schedule_id)
        .bind(member_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Attendance::try_from).transpose()
    }

    async fn record_check_in(&self, attendance: &NewAttendance) -> Result<CheckInOutcome, AppError> {
        let mut tx = TransactionContext::begin(&self.pool, "check_in").await?;

        let reserved = sqlx::query(
            r#"
            UPDATE workout_schedule
            SET available_spots = available_spots - 1
            WHERE schedule_id = $1 AND available_spots > 0
            "#,
        )
        .bind(attendance.schedule_id)
        .execute(tx.executor())
        .await?;

        if reserved.rows_affected() == 0 {
            let exists = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM workout_schedule WHERE schedule_id = $1)",
            )
            .bind(attendance.schedule_id)
            .fetch_one(tx.executor())
            .await?;
            tx.rollback().await?;

            return Ok(if exists {
                CheckInOutcome::NoSpotsLeft
            } else {
                CheckInOutcome::UnknownSchedule
            });
        }

        let inserted = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO attendance (schedule_id, member_id, status)
            VALUES ($1, $2, $3)
            RETURNING attendance_id
            "#,
        )
        .bind(attendance.schedule_id)
        .bind(attendance.member_id)
        .bind(attendance.status.as_str())
        .fetch_one(tx.executor())
        .await;

        let attendance_id = match inserted {
            Ok(id) => id,
            Err(err) => {
                let outcome = match &err {
                    sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                        CheckInOutcome::AlreadyCheckedIn
                    }
                    sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                        CheckInOutcome::UnknownMember
                    }
                    _ => return Err(AppError::Database(err)),
                };
                tx.rollback().await?;
                return Ok(outcome);
            }
        };

        tx.commit().await?;

        Ok(CheckInOutcome::Recorded { attendance_id })
    }

    async fn update_status(
        &self,
        attendance_id: i64,
        status: AttendanceStatus,
    ) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE attendance SET status = $2 WHERE attendance_id = $1")
            .bind(attendance_id)
            .bind(status.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn cancel_check_in(&self, attendance_id: i64) -> Result<Option<CancelledCheckIn>, AppError> {
        let mut tx = TransactionContext::begin(&self.pool, "cancel_check_in").await?;

        let schedule_id = sqlx::query_scalar::<_, i64>(
            "DELETE FROM attendance WHERE attendance_id = $1 RETURNING schedule_id",
        )
        .bind(attendance_id)
        .fetch_optional(tx.executor())
        .await?;

        let Some(schedule_id) = schedule_id else {
            tx.rollback().await?;
            return Ok(None);
        };

        let restored = sqlx::query(
            r#"
            UPDATE workout_schedule
            SET available_spots = available_spots + 1
            WHERE schedule_id = $1 AND available_spots < capacity
            "#,
        )
        .bind(schedule_id)
        .execute(tx.executor())
        .await?;

        tx.commit().await?;

        Ok(Some(CancelledCheckIn {
            attendance_id,
            schedule_id,
            spot_restored: restored.rows_affected() > 0,
        }))
    }
}
