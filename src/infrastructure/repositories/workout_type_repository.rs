//! Workout Type Repository Implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{WorkoutType, WorkoutTypeFields, WorkoutTypeRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct WorkoutTypeRow {
    workout_type_id: i64,
    workout_name: String,
    description: Option<String>,
    duration_minutes: i32,
    difficulty_level: String,
    max_participants: i32,
}

impl From<WorkoutTypeRow> for WorkoutType {
    fn from(row: WorkoutTypeRow) -> Self {
        Self {
            workout_type_id: row.workout_type_id,
            workout_name: row.workout_name,
            description: row.description,
            duration_minutes: row.duration_minutes,
            difficulty_level: row.difficulty_level,
            max_participants: row.max_participants,
        }
    }
}

/// PostgreSQL workout type repository implementation.
#[derive(Clone)]
pub struct PgWorkoutTypeRepository {
    pool: PgPool,
}

impl PgWorkoutTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkoutTypeRepository for PgWorkoutTypeRepository {
    async fn list(&self) -> Result<Vec<WorkoutType>, AppError> {
        let rows = sqlx::query_as::<_, WorkoutTypeRow>(
            r#"
            SELECT workout_type_id, workout_name, description, duration_minutes,
                   difficulty_level, max_participants
            FROM workout_types
            ORDER BY workout_name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(WorkoutType::from).collect())
    }

    async fn find_by_id(&self, workout_type_id: i64) -> Result<Option<WorkoutType>, AppError> {
        let row = sqlx::query_as::<_, WorkoutTypeRow>(
            r#"
            SELECT workout_type_id, workout_name, description, duration_minutes,
                   difficulty_level, max_participants
            FROM workout_types
            WHERE workout_type_id = $1
            "#,
        )
        .bind(workout_type_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(WorkoutType::from))
    }

    async fn create(&self, fields: &WorkoutTypeFields) -> Result<i64, AppError> {
        let workout_type_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO workout_types (workout_name, description, duration_minutes,
                                       difficulty_level, max_participants)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING workout_type_id
            "#,
        )
        .bind(&fields.workout_name)
        .bind(&fields.description)
        .bind(fields.duration_minutes)
        .bind(&fields.difficulty_level)
        .bind(fields.max_participants)
        .fetch_one(&self.pool)
        .await?;

        Ok(workout_type_id)
    }

    async fn update(&self, workout_type_id: i64, fields: &WorkoutTypeFields) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE workout_types
            SET workout_name = $2, description = $3, duration_minutes = $4,
                difficulty_level = $5, max_participants = $6
            WHERE workout_type_id = $1
            "#,
        )
        .bind(workout_type_id)
        .bind(&fields.workout_name)
        .bind(&fields.description)
        .bind(fields.duration_minutes)
        .bind(&fields.difficulty_level)
        .bind(fields.max_participants)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Workout type not found".into()));
        }

        Ok(())
    }

    async fn delete(&self, workout_type_id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM workout_types WHERE workout_type_id = $1")
            .bind(workout_type_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Workout type not found".into()));
        }

        Ok(())
    }
}
