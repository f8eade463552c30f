//! Club Repository Implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Club, ClubFields, ClubRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct ClubRow {
    club_id: i64,
    club_name: String,
    address: String,
    phone: Option<String>,
    email: Option<String>,
    opening_hours: Option<String>,
}

impl From<ClubRow> for Club {
    fn from(row: ClubRow) -> Self {
        Self {
            club_id: row.club_id,
            club_name: row.club_name,
            address: row.address,
            phone: row.phone,
            email: row.email,
            opening_hours: row.opening_hours,
        }
    }
}

/// PostgreSQL club repository implementation.
#[derive(Clone)]
pub struct PgClubRepository {
    pool: PgPool,
}

impl PgClubRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClubRepository for PgClubRepository {
    async fn list(&self) -> Result<Vec<Club>, AppError> {
        let rows = sqlx::query_as::<_, ClubRow>(
            r#"
            SELECT club_id, club_name, address, phone, email, opening_hours
            FROM clubs
            ORDER BY club_id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Club::from).collect())
    }

    async fn find_by_id(&self, club_id: i64) -> Result<Option<Club>, AppError> {
        let row = sqlx::query_as::<_, ClubRow>(
            r#"
            SELECT club_id, club_name, address, phone, email, opening_hours
            FROM clubs
            WHERE club_id = $1
            "#,
        )
        .bind(club_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Club::from))
    }

    async fn create(&self, fields: &ClubFields) -> Result<i64, AppError> {
        let club_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO clubs (club_name, address, phone, email, opening_hours)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING club_id
            "#,
        )
        .bind(&fields.club_name)
        .bind(&fields.address)
        .bind(&fields.phone)
        .bind(&fields.email)
        .bind(&fields.opening_hours)
        .fetch_one(&self.pool)
        .await?;

        Ok(club_id)
    }

    async fn update(&self, club_id: i64, fields: &ClubFields) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE clubs
            SET club_name = $2, address = $3, phone = $4, email = $5, opening_hours = $6
            WHERE club_id = $1
            "#,
        )
        .bind(club_id)
        .bind(&fields.club_name)
        .bind(&fields.address)
        .bind(&fields.phone)
        .bind(&fields.email)
        .bind(&fields.opening_hours)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Club not found".into()));
        }

        Ok(())
    }

    async fn delete(&self, club_id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM clubs WHERE club_id = $1")
            .bind(club_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Club not found".into()));
        }

        Ok(())
    }
}
