use std::cell::Cell;

#[cfg(feature = "std")]
use railway_ops::Fault;
use railway_ops::{stage, Outcome};

#[derive(Debug, PartialEq)]
enum JobError {
    Rejected,
    #[cfg(feature = "std")]
    Panicked(Option<String>),
}

#[cfg(feature = "std")]
impl From<Fault> for JobError {
    fn from(fault: Fault) -> Self {
        JobError::Panicked(fault.message().map(str::to_string))
    }
}

#[test]
fn lift_stage_wraps_return() {
    let out = Outcome::<i32, JobError>::success(2) >> stage::lift(|x: i32| x * 3);
    assert_eq!(out, Outcome::Success(6));
}

#[cfg(feature = "std")]
#[test]
fn try_lift_stage_converts_fault_into_rail_error() {
    let out = Outcome::<i32, JobError>::success(0) >> stage::try_lift(|x: i32| 10 / x);
    assert!(matches!(out, Outcome::Failure(JobError::Panicked(Some(_)))));

    let out = Outcome::<i32, JobError>::success(5) >> stage::try_lift(|x: i32| 10 / x);
    assert_eq!(out, Outcome::Success(2));
}

#[test]
fn tee_stages_observe_three_times_without_change() {
    let hits = Cell::new(0);
    let out = Outcome::<i32, JobError>::success(1)
        >> stage::tee(|_: &i32| hits.set(hits.get() + 1))
        >> stage::tee(|_: &i32| hits.set(hits.get() + 1))
        >> stage::tee(|_: &i32| hits.set(hits.get() + 1));

    assert_eq!(out, Outcome::Success(1));
    assert_eq!(hits.get(), 3);
}

#[test]
fn tee_or_fail_stage_vetoes() {
    let after = Cell::new(false);
    let out = Outcome::<i32, JobError>::success(1)
        >> stage::tee_or_fail(|_: &i32| Outcome::<(), JobError>::failure(JobError::Rejected))
        >> stage::tee(|_: &i32| after.set(true));

    assert_eq!(out, Outcome::Failure(JobError::Rejected));
    assert!(!after.get());
}

#[test]
fn tee_or_fail_stage_discards_observer_success() {
    let out = Outcome::<i32, JobError>::success(1)
        >> stage::tee_or_fail(|_: &i32| Outcome::<i32, JobError>::success(99));
    assert_eq!(out, Outcome::Success(1));
}
