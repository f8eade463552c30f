//! Attendance Workflow Tests
//!
//! Drives the attendance service directly against the in-memory store,
//! including concurrent check-ins racing for the last seats of a session.

use std::sync::Arc;

use futures::future::join_all;
use pretty_assertions::assert_eq;
use test_case::test_case;

use fitness_club::application::services::{AttendanceError, AttendanceService};
use fitness_club::domain::{AttendanceStatus, ScheduleChanges, WorkoutScheduleRepository};

use crate::common::{attendance_service, InMemoryStore};

#[test_case(1, 5 ; "single seat")]
#[test_case(3, 10 ; "few seats")]
#[test_case(8, 8 ; "exact fit")]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_check_ins_never_overbook(spots: i32, members: usize) {
    let store = Arc::new(InMemoryStore::default());
    let service = Arc::new(attendance_service(&store));
    let schedule_id = store.seed_schedule(spots);
    let member_ids: Vec<i64> = (0..members).map(|_| store.seed_member()).collect();

    let handles = member_ids.into_iter().map(|member_id| {
        let service = service.clone();
        tokio::spawn(async move { service.check_in(schedule_id, member_id, None).await })
    });
    let results: Vec<_> = join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.unwrap())
        .collect();

    let succeeded = results.iter().filter(|r| r.is_ok()).count();
    let rejected = results
        .iter()
        .filter(|r| matches!(r, Err(AttendanceError::CapacityExceeded)))
        .count();

    assert_eq!(succeeded, spots as usize);
    assert_eq!(rejected, members - spots as usize);
    assert_eq!(store.schedule(schedule_id).available_spots, 0);
    assert_eq!(store.attendance_count(schedule_id), spots as usize);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicate_check_ins_take_one_seat() {
    let store = Arc::new(InMemoryStore::default());
    let service = Arc::new(attendance_service(&store));
    let schedule_id = store.seed_schedule(5);
    let member_id = store.seed_member();

    let handles = (0..6).map(|_| {
        let service = service.clone();
        tokio::spawn(async move { service.check_in(schedule_id, member_id, None).await })
    });
    let results: Vec<_> = join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.unwrap())
        .collect();

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter(|r| r.is_err())
        .all(|r| matches!(r, Err(AttendanceError::DuplicateCheckIn))));
    assert_eq!(store.schedule(schedule_id).available_spots, 4);
    assert_eq!(store.attendance_count(schedule_id), 1);
}

#[tokio::test]
async fn test_last_seat_goes_to_first_member() {
    let store = Arc::new(InMemoryStore::default());
    let service = attendance_service(&store);
    let schedule_id = store.seed_schedule(1);
    let (first, second) = (store.seed_member(), store.seed_member());

    service.check_in(schedule_id, first, None).await.unwrap();
    assert_eq!(store.schedule(schedule_id).available_spots, 0);

    let err = service.check_in(schedule_id, second, None).await.unwrap_err();
    assert!(matches!(err, AttendanceError::CapacityExceeded));
    assert!(store.attendance_for(schedule_id, second).is_none());
}

#[tokio::test]
async fn test_repeat_check_in_is_duplicate_and_keeps_capacity() {
    let store = Arc::new(InMemoryStore::default());
    let service = attendance_service(&store);
    let schedule_id = store.seed_schedule(4);
    let member_id = store.seed_member();

    service.check_in(schedule_id, member_id, None).await.unwrap();
    let err = service
        .check_in(schedule_id, member_id, Some(AttendanceStatus::Late))
        .await
        .unwrap_err();

    assert!(matches!(err, AttendanceError::DuplicateCheckIn));
    assert_eq!(store.schedule(schedule_id).available_spots, 3);
    assert_eq!(
        store.attendance_for(schedule_id, member_id).unwrap().status,
        AttendanceStatus::Present
    );
}

#[tokio::test]
async fn test_cancel_returns_seat_and_removes_row() {
    let store = Arc::new(InMemoryStore::default());
    let service = attendance_service(&store);
    let schedule_id = store.seed_schedule(5);
    let member_id = store.seed_member();

    let attendance_id = service.check_in(schedule_id, member_id, None).await.unwrap();
    assert_eq!(store.schedule(schedule_id).available_spots, 4);

    service.cancel_check_in(attendance_id).await.unwrap();

    assert_eq!(store.schedule(schedule_id).available_spots, 5);
    assert!(store.attendance_for(schedule_id, member_id).is_none());

    // The seat can be taken again afterwards
    service.check_in(schedule_id, member_id, None).await.unwrap();
    assert_eq!(store.schedule(schedule_id).available_spots, 4);
}

#[tokio::test]
async fn test_cancel_never_exceeds_capacity() {
    let store = Arc::new(InMemoryStore::default());
    let service = attendance_service(&store);
    let schedule_id = store.seed_schedule(3);
    let member_id = store.seed_member();

    let attendance_id = service.check_in(schedule_id, member_id, None).await.unwrap();

    // An administrative edit hands the taken seat back out
    let schedule = store.schedule(schedule_id);
    let changes = ScheduleChanges {
        schedule_date: schedule.schedule_date,
        start_time: schedule.start_time,
        end_time: schedule.end_time,
        available_spots: schedule.capacity,
    };
    WorkoutScheduleRepository::update(store.as_ref(), schedule_id, &changes)
        .await
        .unwrap();

    service.cancel_check_in(attendance_id).await.unwrap();

    let schedule = store.schedule(schedule_id);
    assert_eq!(schedule.available_spots, 3);
    assert_eq!(schedule.capacity, 3);
    assert_eq!(store.attendance_count(schedule_id), 0);
}

#[tokio::test]
async fn test_unknown_attendance_has_no_side_effects() {
    let store = Arc::new(InMemoryStore::default());
    let service = attendance_service(&store);
    let schedule_id = store.seed_schedule(2);
    let member_id = store.seed_member();
    service.check_in(schedule_id, member_id, None).await.unwrap();

    let update = service
        .update_status(424242, AttendanceStatus::Absent)
        .await
        .unwrap_err();
    let cancel = service.cancel_check_in(424242).await.unwrap_err();

    assert!(matches!(update, AttendanceError::AttendanceNotFound));
    assert!(matches!(cancel, AttendanceError::AttendanceNotFound));
    assert_eq!(store.schedule(schedule_id).available_spots, 1);
    assert_eq!(store.attendance_count(schedule_id), 1);
}

#[tokio::test]
async fn test_status_update_leaves_capacity_alone() {
    let store = Arc::new(InMemoryStore::default());
    let service = attendance_service(&store);
    let schedule_id = store.seed_schedule(2);
    let member_id = store.seed_member();
    let attendance_id = service.check_in(schedule_id, member_id, None).await.unwrap();

    service
        .update_status(attendance_id, AttendanceStatus::Absent)
        .await
        .unwrap();

    assert_eq!(
        service.get(attendance_id).await.unwrap().status,
        AttendanceStatus::Absent
    );
    assert_eq!(store.schedule(schedule_id).available_spots, 1);
}

#[tokio::test]
async fn test_unknown_member_does_not_consume_a_seat() {
    let store = Arc::new(InMemoryStore::default());
    let service = attendance_service(&store);
    let schedule_id = store.seed_schedule(2);

    let err = service.check_in(schedule_id, 999, None).await.unwrap_err();

    assert!(matches!(err, AttendanceError::MemberNotFound));
    assert_eq!(store.schedule(schedule_id).available_spots, 2);
    assert_eq!(store.attendance_count(schedule_id), 0);
}

#[tokio::test]
async fn test_member_history_is_newest_first() {
    let store = Arc::new(InMemoryStore::default());
    let service = attendance_service(&store);
    let today = chrono::Utc::now().date_naive();
    let earlier = store.seed_schedule_on(today - chrono::Duration::days(2), 5);
    let later = store.seed_schedule_on(today + chrono::Duration::days(2), 5);
    let member_id = store.seed_member();

    service.check_in(earlier, member_id, None).await.unwrap();
    service.check_in(later, member_id, None).await.unwrap();

    let history = service.list_for_member(member_id).await.unwrap();
    let schedules: Vec<i64> = history.iter().map(|a| a.attendance.schedule_id).collect();
    assert_eq!(schedules, vec![later, earlier]);
}
