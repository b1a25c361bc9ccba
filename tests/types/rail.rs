use std::cell::Cell;

use railway_ops::traits::ResultExt;
#[cfg(feature = "std")]
use railway_ops::Fault;
use railway_ops::{Outcome, Rail};

#[derive(Debug, PartialEq)]
enum OrderError {
    Empty,
    OverBudget(u32),
    #[cfg(feature = "std")]
    Crashed(String),
}

#[cfg(feature = "std")]
impl From<Fault> for OrderError {
    fn from(fault: Fault) -> Self {
        OrderError::Crashed(fault.message().unwrap_or("unknown").to_string())
    }
}

impl std::fmt::Display for OrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderError::Empty => write!(f, "order is empty"),
            OrderError::OverBudget(total) => write!(f, "total {total} over budget"),
            #[cfg(feature = "std")]
            OrderError::Crashed(msg) => write!(f, "crashed: {msg}"),
        }
    }
}

impl std::error::Error for OrderError {}

fn non_empty(items: Vec<u32>) -> Outcome<Vec<u32>, OrderError> {
    if items.is_empty() {
        Outcome::failure(OrderError::Empty)
    } else {
        Outcome::success(items)
    }
}

fn checkout(items: Vec<u32>, budget: u32) -> Rail<u32, OrderError> {
    Rail::start(items)
        .then("validate", non_empty)
        .lift("total", |items| items.iter().sum::<u32>())
        .tee_or_fail("budget", move |total| {
            if *total > budget {
                Err(OrderError::OverBudget(*total))
            } else {
                Ok(())
            }
        })
}

#[test]
fn successful_rail_records_every_stage() {
    let rail = checkout(vec![1, 2, 3], 10);

    assert!(rail.is_success());
    assert_eq!(rail.stages(), ["validate", "total", "budget"]);
    assert_eq!(rail.failed_stage(), None);
    assert_eq!(rail.finish(), Outcome::Success(6));
}

#[test]
fn failing_stage_is_named_and_later_stages_skipped() {
    let ran = Cell::new(false);
    let err = checkout(vec![50], 10)
        .lift("ship", |total| {
            ran.set(true);
            total
        })
        .finish()
        .unwrap_failure();

    assert!(!ran.get());
    assert_eq!(err.stage(), Some("budget"));
    assert_eq!(err.completed(), ["validate", "total"]);
    assert_eq!(err.error(), &OrderError::OverBudget(50));
    assert_eq!(err.to_string(), "stage `budget` failed: total 50 over budget");
}

#[test]
fn first_stage_failure_has_no_completed_stages() {
    let rail = checkout(Vec::new(), 10);

    assert_eq!(rail.failed_stage(), Some("validate"));
    assert!(rail.stages().is_empty());
    assert_eq!(rail.into_outcome(), Outcome::Failure(OrderError::Empty));
}

#[test]
fn rail_started_on_failure_names_no_stage() {
    let calls = Cell::new(0);
    let err = Rail::<u32, OrderError>::new(Outcome::failure(OrderError::Empty))
        .tee("observe", |_| calls.set(calls.get() + 1))
        .finish()
        .unwrap_failure();

    assert_eq!(calls.get(), 0);
    assert_eq!(err.stage(), None);
    assert_eq!(err.to_string(), "rail started on the failure track: order is empty");
}

#[cfg(feature = "std")]
#[test]
fn try_lift_stage_converts_panics_through_from() {
    let err = Rail::<u32, OrderError>::start(0)
        .try_lift("divide", |n| 100 / n)
        .finish()
        .unwrap_failure();

    assert_eq!(err.stage(), Some("divide"));
    assert!(matches!(err.into_error(), OrderError::Crashed(_)));
}

#[test]
fn tee_stage_does_not_change_value() {
    let seen = Cell::new(0);
    let out = Rail::<u32, OrderError>::start(9)
        .tee("peek", |n| seen.set(*n))
        .into_outcome();

    assert_eq!(out, Outcome::Success(9));
    assert_eq!(seen.get(), 9);
}

#[test]
fn stage_error_exposes_source() {
    use std::error::Error;

    let err = checkout(Vec::new(), 1).finish().unwrap_failure();
    let source = err.source().expect("source");
    assert_eq!(source.to_string(), "order is empty");
}

#[test]
fn result_ext_starts_a_rail() {
    let rail = "12".parse::<u32>().rail().lift("double", |n| n * 2);
    assert_eq!(rail.stages(), ["double"]);
    assert_eq!(rail.into_outcome().success_value(), Some(24));

    let rail = "x".parse::<u32>().rail().lift("double", |n| n * 2);
    assert!(!rail.is_success());
    assert_eq!(rail.failed_stage(), None);
}

#[test]
fn many_stages_spill_past_inline_storage() {
    let rail = Rail::<u32, ()>::start(0)
        .lift("a", |n| n + 1)
        .lift("b", |n| n + 1)
        .lift("c", |n| n + 1)
        .lift("d", |n| n + 1)
        .lift("e", |n| n + 1)
        .lift("f", |n| n + 1);

    assert_eq!(rail.stages(), ["a", "b", "c", "d", "e", "f"]);
    assert_eq!(rail.into_outcome(), Outcome::Success(6));
}
