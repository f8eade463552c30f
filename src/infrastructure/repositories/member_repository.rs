//! Member Repository Implementation
//!
//! PostgreSQL implementation of the MemberRepository trait.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::{Member, MemberFields, MemberRepository};
use crate::infrastructure::database::TransactionContext;
use crate::shared::error::AppError;

/// Database row representation matching the members table schema.
#[derive(Debug, sqlx::FromRow)]
struct MemberRow {
    member_id: i64,
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
    date_of_birth: Option<NaiveDate>,
    gender: Option<String>,
    address: Option<String>,
    emergency_contact: Option<String>,
    emergency_phone: Option<String>,
    registration_date: NaiveDate,
}

impl From<MemberRow> for Member {
    fn from(row: MemberRow) -> Self {
        Self {
            member_id: row.member_id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
            date_of_birth: row.date_of_birth,
            gender: row.gender,
            address: row.address,
            emergency_contact: row.emergency_contact,
            emergency_phone: row.emergency_phone,
            registration_date: row.registration_date,
        }
    }
}

const MEMBER_COLUMNS: &str = "member_id, first_name, last_name, email, phone, date_of_birth, \
     gender, address, emergency_contact, emergency_phone, registration_date";

/// PostgreSQL member repository implementation.
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    async fn list(&self) -> Result<Vec<Member>, AppError> {
        let rows = sqlx::query_as::<_, MemberRow>(&format!(
            "SELECT {} FROM members ORDER BY member_id DESC",
            MEMBER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    async fn find_by_id(&self, member_id: i64) -> Result<Option<Member>, AppError> {
        let row = sqlx::query_as::<_, MemberRow>(&format!(
            "SELECT {} FROM members WHERE member_id = $1",
            MEMBER_COLUMNS
        ))
        .bind(member_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Member::from))
    }

    async fn create(
        &self,
        fields: &MemberFields,
        registration_date: NaiveDate,
    ) -> Result<i64, AppError> {
        let member_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO members (first_name, last_name, email, phone, date_of_birth, gender,
                                 address, emergency_contact, emergency_phone, registration_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING member_id
            "#,
        )
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.email)
        .bind(&fields.phone)
        .bind(fields.date_of_birth)
        .bind(&fields.gender)
        .bind(&fields.address)
        .bind(&fields.emergency_contact)
        .bind(&fields.emergency_phone)
        .bind(registration_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(member_id)
    }

    async fn update(&self, member_id: i64, fields: &MemberFields) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE members
            SET first_name = $2, last_name = $3, email = $4, phone = $5, date_of_birth = $6,
                gender = $7, address = $8, emergency_contact = $9, emergency_phone = $10
            WHERE member_id = $1
            "#,
        )
        .bind(member_id)
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.email)
        .bind(&fields.phone)
        .bind(fields.date_of_birth)
        .bind(&fields.gender)
        .bind(&fields.address)
        .bind(&fields.emergency_contact)
        .bind(&fields.emergency_phone)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Member not found".into()));
        }

        Ok(())
    }

    async fn delete(&self, member_id: i64) -> Result<(), AppError> {
        let mut tx = TransactionContext::begin(&self.pool, "delete_member").await?;

        // Give back the seats this member holds before the cascade removes
        // their attendance rows.
        let restored = sqlx::query(
            r#"
            UPDATE workout_schedule ws
            SET available_spots = LEAST(ws.available_spots + 1, ws.capacity)
            FROM attendance a
            WHERE a.schedule_id = ws.schedule_id AND a.member_id = $1
            "#,
        )
        .bind(member_id)
        .execute(tx.executor())
        .await?;

        // attendance and memberships are deleted via CASCADE
        let result = sqlx::query("DELETE FROM members WHERE member_id = $1")
            .bind(member_id)
            .execute(tx.executor())
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(AppError::NotFound("Member not found".into()));
        }

        tx.commit().await?;

        tracing::debug!(
            member_id,
            schedules_restored = restored.rows_affected(),
            "Member deleted"
        );

        Ok(())
    }
}
