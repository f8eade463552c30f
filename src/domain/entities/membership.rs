//! Membership entity and repository trait.
//!
//! A membership is a (member, club) contract. Maps to the `memberships` table.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Lifecycle state of a membership contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipStatus {
    #[default]
    Active,
    Expired,
    Cancelled,
    Suspended,
}

impl MembershipStatus {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Expired => "Expired",
            Self::Cancelled => "Cancelled",
            Self::Suspended => "Suspended",
        }
    }
}

impl std::str::FromStr for MembershipStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "expired" => Ok(Self::Expired),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            "suspended" => Ok(Self::Suspended),
            other => Err(format!("Unknown membership status: {}", other)),
        }
    }
}

impl std::fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    pub membership_id: i64,
    pub member_id: i64,
    pub club_id: i64,
    pub membership_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: f64,
    pub status: MembershipStatus,
}

/// A membership joined with member and club labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipDetail {
    #[serde(flatten)]
    pub membership: Membership,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club_name: Option<String>,
}

/// Fields for a new contract.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMembership {
    pub member_id: i64,
    pub club_id: i64,
    pub membership_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: f64,
    pub status: MembershipStatus,
}

/// Editable contract terms. Member and club cannot be changed.
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipChanges {
    pub membership_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: f64,
    pub status: MembershipStatus,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// All memberships with member and club labels, newest first.
    async fn list(&self) -> Result<Vec<MembershipDetail>, AppError>;

    /// Active memberships, soonest to expire first.
    async fn list_active(&self) -> Result<Vec<MembershipDetail>, AppError>;

    /// A member's memberships with club names, latest start first.
    async fn list_for_member(&self, member_id: i64) -> Result<Vec<MembershipDetail>, AppError>;

    async fn find_by_id(&self, membership_id: i64) -> Result<Option<MembershipDetail>, AppError>;

    async fn create(&self, membership: &NewMembership) -> Result<i64, AppError>;

    async fn update(&self, membership_id: i64, changes: &MembershipChanges) -> Result<(), AppError>;

    async fn delete(&self, membership_id: i64) -> Result<(), AppError>;
}
