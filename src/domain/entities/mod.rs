//! # Domain Entities
//!
//! Core domain entities of the fitness club. All entities map directly to
//! their corresponding database tables.
//!
//! ## Core Entities
//!
//! - **Member**: a registered person with contact and emergency-contact data
//! - **Club**: a physical location
//! - **Trainer**: staff optionally attached to one club
//! - **WorkoutType**: a class template
//! - **WorkoutSchedule**: one bookable session with a live seat counter
//! - **Membership**: a (member, club) contract
//! - **Attendance**: one member's occupancy of one session
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod attendance;
mod club;
mod member;
mod membership;
mod trainer;
mod workout;

pub use attendance::{
    Attendance, AttendanceDetail, AttendanceRepository, AttendanceStatus, CancelledCheckIn,
    CheckInOutcome, NewAttendance,
};
pub use club::{Club, ClubFields, ClubRepository};
pub use member::{Member, MemberFields, MemberRepository};
pub use membership::{
    Membership, MembershipChanges, MembershipDetail, MembershipRepository, MembershipStatus,
    NewMembership,
};
pub use trainer::{Trainer, TrainerFields, TrainerRepository};
pub use workout::{
    NewSchedule, ScheduleChanges, ScheduleDetail, WorkoutSchedule, WorkoutScheduleRepository,
    WorkoutType, WorkoutTypeFields, WorkoutTypeRepository,
};

#[cfg(test)]
pub use attendance::MockAttendanceRepository;
#[cfg(test)]
pub use workout::MockWorkoutScheduleRepository;
