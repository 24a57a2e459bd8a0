use super::*;

#[test]
fn schedule_hands_out_distinct_handles() {
    let mut timers = Timers::new();
    let a = timers.schedule(Task::HideLoadingScreen);
    let b = timers.schedule(Task::HideLoadingScreen);
    assert_ne!(a, b);
    assert!(a.raw() < b.raw());
    assert_eq!(timers.len(), 2);
}

#[test]
fn take_returns_task_once() {
    let mut timers = Timers::new();
    let handle = timers.schedule(Task::PrimeSkillItem(3));
    assert_eq!(timers.take(handle), Some(Task::PrimeSkillItem(3)));
    assert_eq!(timers.take(handle), None);
    assert!(timers.is_empty());
}

#[test]
fn cancelled_handle_resolves_to_nothing() {
    let mut timers = Timers::new();
    let handle = timers.schedule(Task::RemoveLoadingScreen);
    assert!(timers.cancel(handle));
    assert!(!timers.is_pending(handle));
    assert_eq!(timers.take(handle), None);
}

#[test]
fn cancel_unknown_handle_reports_false() {
    let mut timers = Timers::new();
    let handle = timers.schedule(Task::RemoveLoadingScreen);
    timers.take(handle);
    assert!(!timers.cancel(handle));
}
