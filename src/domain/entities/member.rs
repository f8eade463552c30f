//! Member entity and repository trait.
//!
//! Maps to the `members` table in the database schema.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A registered club member.
///
/// Maps to the `members` table:
/// - member_id: BIGSERIAL PRIMARY KEY
/// - first_name, last_name: VARCHAR(50) NOT NULL
/// - email: VARCHAR(100) NOT NULL
/// - phone, gender, address: NULL
/// - date_of_birth: DATE NULL
/// - emergency_contact, emergency_phone: NULL
/// - registration_date: DATE NOT NULL DEFAULT CURRENT_DATE
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub member_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub emergency_phone: Option<String>,
    pub registration_date: NaiveDate,
}

impl Member {
    /// Full name as "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Editable member fields. Registration date is fixed at creation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub emergency_phone: Option<String>,
}

/// Repository trait for Member data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// List all members, newest first.
    async fn list(&self) -> Result<Vec<Member>, AppError>;

    /// Find a member by ID.
    async fn find_by_id(&self, member_id: i64) -> Result<Option<Member>, AppError>;

    /// Register a new member, returning its ID.
    async fn create(
        &self,
        fields: &MemberFields,
        registration_date: NaiveDate,
    ) -> Result<i64, AppError>;

    /// Overwrite a member's editable fields.
    async fn update(&self, member_id: i64, fields: &MemberFields) -> Result<(), AppError>;

    /// Delete a member together with their attendance and memberships.
    ///
    /// Every spot the member held is given back to its schedule in the same
    /// transaction as the delete.
    async fn delete(&self, member_id: i64) -> Result<(), AppError>;
}
