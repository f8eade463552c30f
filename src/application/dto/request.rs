//! Request DTOs
//!
//! Data structures for API request bodies.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::domain::{
    AttendanceStatus, ClubFields, MemberFields, MembershipChanges, MembershipStatus,
    NewMembership, NewSchedule, ScheduleChanges, TrainerFields, WorkoutTypeFields,
};
use crate::shared::error::AppError;

/// Parse a status string from a request body into its closed vocabulary.
fn parse_status<T>(raw: &str) -> Result<T, AppError>
where
    T: FromStr<Err = String>,
{
    raw.parse::<T>().map_err(AppError::BadRequest)
}

/// Create or update member request
///
/// `registration_date` is only read on create and defaults to today.
#[derive(Debug, Deserialize, Validate)]
pub struct MemberRequest {
    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub emergency_phone: Option<String>,
    pub registration_date: Option<NaiveDate>,
}

impl MemberRequest {
    pub fn registration_date(&self) -> NaiveDate {
        self.registration_date
            .unwrap_or_else(|| Utc::now().date_naive())
    }

    pub fn into_fields(self) -> MemberFields {
        MemberFields {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            address: self.address,
            emergency_contact: self.emergency_contact,
            emergency_phone: self.emergency_phone,
        }
    }
}

/// Create or update club request
#[derive(Debug, Deserialize, Validate)]
pub struct ClubRequest {
    #[validate(length(min = 1, max = 100, message = "Club name must be 1-100 characters"))]
    pub club_name: String,

    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,

    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub opening_hours: Option<String>,
}

impl From<ClubRequest> for ClubFields {
    fn from(req: ClubRequest) -> Self {
        Self {
            club_name: req.club_name,
            address: req.address,
            phone: req.phone,
            email: req.email,
            opening_hours: req.opening_hours,
        }
    }
}

/// Create or update trainer request
///
/// `hire_date` is only read on create and defaults to today.
#[derive(Debug, Deserialize, Validate)]
pub struct TrainerRequest {
    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub phone: Option<String>,
    pub specialization: Option<String>,
    pub certification: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub club_id: Option<i64>,
}

impl TrainerRequest {
    pub fn hire_date(&self) -> NaiveDate {
        self.hire_date.unwrap_or_else(|| Utc::now().date_naive())
    }

    pub fn into_fields(self) -> TrainerFields {
        TrainerFields {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            specialization: self.specialization,
            certification: self.certification,
            club_id: self.club_id,
        }
    }
}

/// Create or update workout type request
#[derive(Debug, Deserialize, Validate)]
pub struct WorkoutTypeRequest {
    #[validate(length(min = 1, max = 100, message = "Workout name must be 1-100 characters"))]
    pub workout_name: String,

    pub description: Option<String>,

    #[validate(range(min = 0, message = "Duration must not be negative"))]
    pub duration_minutes: i32,

    #[validate(length(min = 1, message = "Difficulty level is required"))]
    pub difficulty_level: String,

    #[validate(range(min = 0, message = "Max participants must not be negative"))]
    pub max_participants: i32,
}

impl From<WorkoutTypeRequest> for WorkoutTypeFields {
    fn from(req: WorkoutTypeRequest) -> Self {
        Self {
            workout_name: req.workout_name,
            description: req.description,
            duration_minutes: req.duration_minutes,
            difficulty_level: req.difficulty_level,
            max_participants: req.max_participants,
        }
    }
}

/// Create schedule request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateScheduleRequest {
    pub workout_type_id: i64,
    pub trainer_id: i64,
    pub club_id: i64,
    pub schedule_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,

    #[validate(range(min = 0, message = "Available spots must not be negative"))]
    pub available_spots: i32,
}

impl From<CreateScheduleRequest> for NewSchedule {
    fn from(req: CreateScheduleRequest) -> Self {
        Self {
            workout_type_id: req.workout_type_id,
            trainer_id: req.trainer_id,
            club_id: req.club_id,
            schedule_date: req.schedule_date,
            start_time: req.start_time,
            end_time: req.end_time,
            available_spots: req.available_spots,
        }
    }
}

/// Update schedule request (administrative capacity edit)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateScheduleRequest {
    pub schedule_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,

    #[validate(range(min = 0, message = "Available spots must not be negative"))]
    pub available_spots: i32,
}

impl From<UpdateScheduleRequest> for ScheduleChanges {
    fn from(req: UpdateScheduleRequest) -> Self {
        Self {
            schedule_date: req.schedule_date,
            start_time: req.start_time,
            end_time: req.end_time,
            available_spots: req.available_spots,
        }
    }
}

/// Create membership request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMembershipRequest {
    pub member_id: i64,
    pub club_id: i64,

    #[validate(length(min = 1, max = 50, message = "Membership type must be 1-50 characters"))]
    pub membership_type: String,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    /// Defaults to Active
    pub status: Option<String>,
}

impl CreateMembershipRequest {
    pub fn into_new_membership(self) -> Result<NewMembership, AppError> {
        let status = match self.status.as_deref() {
            Some(raw) => parse_status::<MembershipStatus>(raw)?,
            None => MembershipStatus::default(),
        };

        Ok(NewMembership {
            member_id: self.member_id,
            club_id: self.club_id,
            membership_type: self.membership_type,
            start_date: self.start_date,
            end_date: self.end_date,
            price: self.price,
            status,
        })
    }
}

/// Update membership request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMembershipRequest {
    #[validate(length(min = 1, max = 50, message = "Membership type must be 1-50 characters"))]
    pub membership_type: String,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    pub status: String,
}

impl UpdateMembershipRequest {
    pub fn into_changes(self) -> Result<MembershipChanges, AppError> {
        Ok(MembershipChanges {
            status: parse_status(&self.status)?,
            membership_type: self.membership_type,
            start_date: self.start_date,
            end_date: self.end_date,
            price: self.price,
        })
    }
}

/// Check-in request
#[derive(Debug, Deserialize, Validate)]
pub struct CheckInRequest {
    pub schedule_id: i64,
    pub member_id: i64,

    /// Defaults to Present
    pub status: Option<String>,
}

impl CheckInRequest {
    pub fn status(&self) -> Result<Option<AttendanceStatus>, AppError> {
        self.status
            .as_deref()
            .map(parse_status::<AttendanceStatus>)
            .transpose()
    }
}

/// Update attendance status request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAttendanceRequest {
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

impl UpdateAttendanceRequest {
    pub fn status(&self) -> Result<AttendanceStatus, AppError> {
        parse_status(&self.status)
    }
}
