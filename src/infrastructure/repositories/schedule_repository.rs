//! Workout Schedule Repository Implementation
//!
//! PostgreSQL implementation of the WorkoutScheduleRepository trait.
//!
//! `available_spots` is also written by the attendance repository. Every
//! statement here that changes it does so in a single conditional UPDATE so
//! it never races with check-ins into a negative or over-capacity value.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;

use crate::domain::{
    NewSchedule, ScheduleChanges, ScheduleDetail, WorkoutSchedule, WorkoutScheduleRepository,
};
use crate::infrastructure::database::map_foreign_key;
use crate::shared::error::AppError;

/// Database row representation matching the workout_schedule table schema.
#[derive(Debug, sqlx::FromRow)]
pub(super) struct ScheduleRow {
    schedule_id: i64,
    workout_type_id: i64,
    trainer_id: i64,
    club_id: i64,
    schedule_date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    available_spots: i32,
    capacity: i32,
}

impl From<ScheduleRow> for WorkoutSchedule {
    fn from(row: ScheduleRow) -> Self {
        Self {
            schedule_id: row.schedule_id,
            workout_type_id: row.workout_type_id,
            trainer_id: row.trainer_id,
            club_id: row.club_id,
            schedule_date: row.schedule_date,
            start_time: row.start_time,
            end_time: row.end_time,
            available_spots: row.available_spots,
            capacity: row.capacity,
        }
    }
}

/// A schedule row plus whichever label columns the query selected.
#[derive(Debug, sqlx::FromRow)]
pub(super) struct ScheduleDetailRow {
    #[sqlx(flatten)]
    schedule: ScheduleRow,
    #[sqlx(default)]
    workout_name: Option<String>,
    #[sqlx(default)]
    description: Option<String>,
    #[sqlx(default)]
    difficulty_level: Option<String>,
    #[sqlx(default)]
    duration_minutes: Option<i32>,
    #[sqlx(default)]
    trainer_first_name: Option<String>,
    #[sqlx(default)]
    trainer_last_name: Option<String>,
    #[sqlx(default)]
    club_name: Option<String>,
    #[sqlx(default)]
    address: Option<String>,
}

impl From<ScheduleDetailRow> for ScheduleDetail {
    fn from(row: ScheduleDetailRow) -> Self {
        Self {
            schedule: row.schedule.into(),
            workout_name: row.workout_name,
            description: row.description,
            difficulty_level: row.difficulty_level,
            duration_minutes: row.duration_minutes,
            trainer_first_name: row.trainer_first_name,
            trainer_last_name: row.trainer_last_name,
            club_name: row.club_name,
            address: row.address,
        }
    }
}

/// Columns of `workout_schedule` aliased as `ws`.
pub(super) const SCHEDULE_COLUMNS: &str = "ws.schedule_id, ws.workout_type_id, ws.trainer_id, \
     ws.club_id, ws.schedule_date, ws.start_time, ws.end_time, ws.available_spots, ws.capacity";

/// PostgreSQL workout schedule repository implementation.
#[derive(Clone)]
pub struct PgWorkoutScheduleRepository {
    pool: PgPool,
}

impl PgWorkoutScheduleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkoutScheduleRepository for PgWorkoutScheduleRepository {
    async fn list(&self) -> Result<Vec<ScheduleDetail>, AppError> {
        let rows = sqlx::query_as::<_, ScheduleDetailRow>(&format!(
            r#"
            SELECT {}, wt.workout_name, wt.difficulty_level,
                   t.first_name AS trainer_first_name, t.last_name AS trainer_last_name,
                   c.club_name
            FROM workout_schedule ws
            JOIN workout_types wt ON ws.workout_type_id = wt.workout_type_id
            JOIN trainers t ON ws.trainer_id = t.trainer_id
            JOIN clubs c ON ws.club_id = c.club_id
            ORDER BY ws.schedule_date DESC, ws.start_time DESC
            "#,
            SCHEDULE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ScheduleDetail::from).collect())
    }

    async fn list_upcoming(&self) -> Result<Vec<ScheduleDetail>, AppError> {
        let rows = sqlx::query_as::<_, ScheduleDetailRow>(&format!(
            r#"
            SELECT {}, wt.workout_name, wt.difficulty_level, wt.duration_minutes,
                   t.first_name AS trainer_first_name, t.last_name AS trainer_last_name,
                   c.club_name
            FROM workout_schedule ws
            JOIN workout_types wt ON ws.workout_type_id = wt.workout_type_id
            JOIN trainers t ON ws.trainer_id = t.trainer_id
            JOIN clubs c ON ws.club_id = c.club_id
            WHERE ws.schedule_date >= CURRENT_DATE
            ORDER BY ws.schedule_date ASC, ws.start_time ASC
            "#,
            SCHEDULE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ScheduleDetail::from).collect())
    }

    async fn find_by_id(&self, schedule_id: i64) -> Result<Option<WorkoutSchedule>, AppError> {
        let row = sqlx::query_as::<_, ScheduleRow>(&format!(
            "SELECT {} FROM workout_schedule ws WHERE ws.schedule_id = $1",
            SCHEDULE_COLUMNS
        ))
        .bind(schedule_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(WorkoutSchedule::from))
    }

    async fn find_detail(&self, schedule_id: i64) -> Result<Option<ScheduleDetail>, AppError> {
        let row = sqlx::query_as::<_, ScheduleDetailRow>(&format!(
            r#"
            SELECT {}, wt.workout_name, wt.description, wt.difficulty_level, wt.duration_minutes,
                   t.first_name AS trainer_first_name, t.last_name AS trainer_last_name,
                   c.club_name, c.address
            FROM workout_schedule ws
            JOIN workout_types wt ON ws.workout_type_id = wt.workout_type_id
            JOIN trainers t ON ws.trainer_id = t.trainer_id
            JOIN clubs c ON ws.club_id = c.club_id
            WHERE ws.schedule_id = $1
            "#,
            SCHEDULE_COLUMNS
        ))
        .bind(schedule_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ScheduleDetail::from))
    }

    async fn create(&self, schedule: &NewSchedule) -> Result<i64, AppError> {
        let schedule_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO workout_schedule (workout_type_id, trainer_id, club_id, schedule_date,
                                          start_time, end_time, available_spots, capacity)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING schedule_id
            "#,
        )
        .bind(schedule.workout_type_id)
        .bind(schedule.trainer_id)
        .bind(schedule.club_id)
        .bind(schedule.schedule_date)
        .bind(schedule.start_time)
        .bind(schedule.end_time)
        .bind(schedule.available_spots)
        .fetch_one(&self.pool)
        .await
        .map_err(map_foreign_key)?;

        Ok(schedule_id)
    }

    async fn update(&self, schedule_id: i64, changes: &ScheduleChanges) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE workout_schedule
            SET schedule_date = $2, start_time = $3, end_time = $4,
                available_spots = $5, capacity = GREATEST(capacity, $5)
            WHERE schedule_id = $1
            "#,
        )
        .bind(schedule_id)
        .bind(changes.schedule_date)
        .bind(changes.start_time)
        .bind(changes.end_time)
        .bind(changes.available_spots)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Workout schedule not found".into()));
        }

        tracing::info!(
            schedule_id,
            available_spots = changes.available_spots,
            "Workout schedule capacity edited"
        );

        Ok(())
    }

    async fn delete(&self, schedule_id: i64) -> Result<(), AppError> {
        // attendance rows are deleted via CASCADE
        let result = sqlx::query("DELETE FROM workout_schedule WHERE schedule_id = $1")
            .bind(schedule_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Workout schedule not found".into()));
        }

        Ok(())
    }
}
