//! Club entity and repository trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A physical club location.
///
/// Maps to the `clubs` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub club_id: i64,
    pub club_name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub opening_hours: Option<String>,
}

/// Editable club fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClubFields {
    pub club_name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub opening_hours: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClubRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Club>, AppError>;

    async fn find_by_id(&self, club_id: i64) -> Result<Option<Club>, AppError>;

    async fn create(&self, fields: &ClubFields) -> Result<i64, AppError>;

    async fn update(&self, club_id: i64, fields: &ClubFields) -> Result<(), AppError>;

    async fn delete(&self, club_id: i64) -> Result<(), AppError>;
}
