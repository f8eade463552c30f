//! Membership Repository Implementation

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::{
    Membership, MembershipChanges, MembershipDetail, MembershipRepository, MembershipStatus,
    NewMembership,
};
use crate::infrastructure::database::map_foreign_key;
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct MembershipRow {
    membership_id: i64,
    member_id: i64,
    club_id: i64,
    membership_type: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    price: f64,
    status: String,
}

impl TryFrom<MembershipRow> for Membership {
    type Error = AppError;

    fn try_from(row: MembershipRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<MembershipStatus>()
            .map_err(AppError::Internal)?;

        Ok(Self {
            membership_id: row.membership_id,
            member_id: row.member_id,
            club_id: row.club_id,
            membership_type: row.membership_type,
            start_date: row.start_date,
            end_date: row.end_date,
            price: row.price,
            status,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct MembershipDetailRow {
    #[sqlx(flatten)]
    membership: MembershipRow,
    #[sqlx(default)]
    first_name: Option<String>,
    #[sqlx(default)]
    last_name: Option<String>,
    #[sqlx(default)]
    email: Option<String>,
    #[sqlx(default)]
    club_name: Option<String>,
}

impl TryFrom<MembershipDetailRow> for MembershipDetail {
    type Error = AppError;

    fn try_from(row: MembershipDetailRow) -> Result<Self, Self::Error> {
        Ok(Self {
            membership: row.membership.try_into()?,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            club_name: row.club_name,
        })
    }
}

fn into_details(rows: Vec<MembershipDetailRow>) -> Result<Vec<MembershipDetail>, AppError> {
    rows.into_iter().map(MembershipDetail::try_from).collect()
}

const MEMBERSHIP_COLUMNS: &str = "ms.membership_id, ms.member_id, ms.club_id, ms.membership_type, \
     ms.start_date, ms.end_date, ms.price, ms.status";

/// PostgreSQL membership repository implementation.
#[derive(Clone)]
pub struct PgMembershipRepository {
    pool: PgPool,
}

impl PgMembershipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MembershipRepository for PgMembershipRepository {
    async fn list(&self) -> Result<Vec<MembershipDetail>, AppError> {
        let rows = sqlx::query_as::<_, MembershipDetailRow>(&format!(
            r#"
            SELECT {}, m.first_name, m.last_name, m.email, c.club_name
            FROM memberships ms
            JOIN members m ON ms.member_id = m.member_id
            JOIN clubs c ON ms.club_id = c.club_id
            ORDER BY ms.membership_id DESC
            "#,
            MEMBERSHIP_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        into_details(rows)
    }

    async fn list_active(&self) -> Result<Vec<MembershipDetail>, AppError> {
        let rows = sqlx::query_as::<_, MembershipDetailRow>(&format!(
            r#"
            SELECT {}, m.first_name, m.last_name, m.email, c.club_name
            FROM memberships ms
            JOIN members m ON ms.member_id = m.member_id
            JOIN clubs c ON ms.club_id = c.club_id
            WHERE ms.status = $1
            ORDER BY ms.end_date ASC
            "#,
            MEMBERSHIP_COLUMNS
        ))
        .bind(MembershipStatus::Active.as_str())
        .fetch_all(&self.pool)
        .await?;

        into_details(rows)
    }

    async fn list_for_member(&self, member_id: i64) -> Result<Vec<MembershipDetail>, AppError> {
        let rows = sqlx::query_as::<_, MembershipDetailRow>(&format!(
            r#"
            SELECT {}, c.club_name
            FROM memberships ms
            JOIN clubs c ON ms.club_id = c.club_id
            WHERE ms.member_id = $1
            ORDER BY ms.start_date DESC
            "#,
            MEMBERSHIP_COLUMNS
        ))
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;

        into_details(rows)
    }

    async fn find_by_id(&self, membership_id: i64) -> Result<Option<MembershipDetail>, AppError> {
        let row = sqlx::query_as::<_, MembershipDetailRow>(&format!(
            r#"
            SELECT {}, m.first_name, m.last_name, m.email, c.club_name
            FROM memberships ms
            JOIN members m ON ms.member_id = m.member_id
            JOIN clubs c ON ms.club_id = c.club_id
            WHERE ms.membership_id = $1
            "#,
            MEMBERSHIP_COLUMNS
        ))
        .bind(membership_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(MembershipDetail::try_from).transpose()
    }

    async fn create(&self, membership: &NewMembership) -> Result<i64, AppError> {
        let membership_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO memberships (member_id, club_id, membership_type, start_date, end_date,
                                     price, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING membership_id
            "#,
        )
        .bind(membership.member_id)
        .bind(membership.club_id)
        .bind(&membership.membership_type)
        .bind(membership.start_date)
        .bind(membership.end_date)
        .bind(membership.price)
        .bind(membership.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_foreign_key)?;

        Ok(membership_id)
    }

    async fn update(&self, membership_id: i64, changes: &MembershipChanges) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE memberships
            SET membership_type = $2, start_date = $3, end_date = $4, price = $5, status = $6
            WHERE membership_id = $1
            "#,
        )
        .bind(membership_id)
        .bind(&changes.membership_type)
        .bind(changes.start_date)
        .bind(changes.end_date)
        .bind(changes.price)
        .bind(changes.status.as_str())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Membership not found".into()));
        }

        Ok(())
    }

    async fn delete(&self, membership_id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM memberships WHERE membership_id = $1")
            .bind(membership_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Membership not found".into()));
        }

        Ok(())
    }
}
