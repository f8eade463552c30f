//! Trainer Repository Implementation

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use super::schedule_repository::{ScheduleDetailRow, SCHEDULE_COLUMNS};
use crate::domain::{ScheduleDetail, Trainer, TrainerFields, TrainerRepository};
use crate::infrastructure::database::map_foreign_key;
use crate::shared::error::AppError;

/// Trainer row joined with the club name.
#[derive(Debug, sqlx::FromRow)]
struct TrainerRow {
    trainer_id: i64,
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
    specialization: Option<String>,
    certification: Option<String>,
    hire_date: NaiveDate,
    club_id: Option<i64>,
    club_name: Option<String>,
}

impl From<TrainerRow> for Trainer {
    fn from(row: TrainerRow) -> Self {
        Self {
            trainer_id: row.trainer_id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
            specialization: row.specialization,
            certification: row.certification,
            hire_date: row.hire_date,
            club_id: row.club_id,
            club_name: row.club_name,
        }
    }
}

/// PostgreSQL trainer repository implementation.
#[derive(Clone)]
pub struct PgTrainerRepository {
    pool: PgPool,
}

impl PgTrainerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrainerRepository for PgTrainerRepository {
    async fn list(&self) -> Result<Vec<Trainer>, AppError> {
        let rows = sqlx::query_as::<_, TrainerRow>(
            r#"
            SELECT t.trainer_id, t.first_name, t.last_name, t.email, t.phone, t.specialization,
                   t.certification, t.hire_date, t.club_id, c.club_name
            FROM trainers t
            LEFT JOIN clubs c ON t.club_id = c.club_id
            ORDER BY t.trainer_id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Trainer::from).collect())
    }

    async fn find_by_id(&self, trainer_id: i64) -> Result<Option<Trainer>, AppError> {
        let row = sqlx::query_as::<_, TrainerRow>(
            r#"
            SELECT t.trainer_id, t.first_name, t.last_name, t.email, t.phone, t.specialization,
                   t.certification, t.hire_date, t.club_id, c.club_name
            FROM trainers t
            LEFT JOIN clubs c ON t.club_id = c.club_id
            WHERE t.trainer_id = $1
            "#,
        )
        .bind(trainer_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Trainer::from))
    }

    async fn schedule_for_trainer(&self, trainer_id: i64) -> Result<Vec<ScheduleDetail>, AppError> {
        let rows = sqlx::query_as::<_, ScheduleDetailRow>(&format!(
            r#"
            SELECT {}, wt.workout_name, c.club_name
            FROM workout_schedule ws
            JOIN workout_types wt ON ws.workout_type_id = wt.workout_type_id
            JOIN clubs c ON ws.club_id = c.club_id
            WHERE ws.trainer_id = $1
            ORDER BY ws.schedule_date DESC, ws.start_time DESC
            "#,
            SCHEDULE_COLUMNS
        ))
        .bind(trainer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ScheduleDetail::from).collect())
    }

    async fn create(&self, fields: &TrainerFields, hire_date: NaiveDate) -> Result<i64, AppError> {
        let trainer_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO trainers (first_name, last_name, email, phone, specialization,
                                  certification, hire_date, club_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING trainer_id
            "#,
        )
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.email)
        .bind(&fields.phone)
        .bind(&fields.specialization)
        .bind(&fields.certification)
        .bind(hire_date)
        .bind(fields.club_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_foreign_key)?;

        Ok(trainer_id)
    }

    async fn update(&self, trainer_id: i64, fields: &TrainerFields) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE trainers
            SET first_name = $2, last_name = $3, email = $4, phone = $5, specialization = $6,
                certification = $7, club_id = $8
            WHERE trainer_id = $1
            "#,
        )
        .bind(trainer_id)
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.email)
        .bind(&fields.phone)
        .bind(&fields.specialization)
        .bind(&fields.certification)
        .bind(fields.club_id)
        .execute(&self.pool)
        .await
        .map_err(map_foreign_key)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Trainer not found".into()));
        }

        Ok(())
    }

    async fn delete(&self, trainer_id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM trainers WHERE trainer_id = $1")
            .bind(trainer_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Trainer not found".into()));
        }

        Ok(())
    }
}
