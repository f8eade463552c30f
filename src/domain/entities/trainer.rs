//! Trainer entity and repository trait.
//!
//! Maps to the `trainers` table. A trainer may be attached to one club.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::workout::ScheduleDetail;
use crate::shared::error::AppError;

/// A trainer, with the name of their club when they have one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trainer {
    pub trainer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub specialization: Option<String>,
    pub certification: Option<String>,
    pub hire_date: NaiveDate,
    pub club_id: Option<i64>,

    /// Joined from `clubs`
    pub club_name: Option<String>,
}

/// Editable trainer fields. Hire date is fixed at creation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainerFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub specialization: Option<String>,
    pub certification: Option<String>,
    pub club_id: Option<i64>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrainerRepository: Send + Sync {
    /// List all trainers, newest first.
    async fn list(&self) -> Result<Vec<Trainer>, AppError>;

    async fn find_by_id(&self, trainer_id: i64) -> Result<Option<Trainer>, AppError>;

    /// Sessions led by a trainer, latest date and time first.
    async fn schedule_for_trainer(&self, trainer_id: i64) -> Result<Vec<ScheduleDetail>, AppError>;

    async fn create(&self, fields: &TrainerFields, hire_date: NaiveDate) -> Result<i64, AppError>;

    async fn update(&self, trainer_id: i64, fields: &TrainerFields) -> Result<(), AppError>;

    async fn delete(&self, trainer_id: i64) -> Result<(), AppError>;
}
