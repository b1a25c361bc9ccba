use std::cell::Cell;

use railway_ops::{failure, pipe, stage, success, Outcome};

fn inc(x: i32) -> Outcome<i32, &'static str> {
    success!(x + 1)
}

fn reject(_: i32) -> Outcome<i32, &'static str> {
    failure!("rejected")
}

#[test]
fn pipe_chains_in_order() {
    assert_eq!(pipe!(success!(1) => inc => inc), Outcome::Success(3));
}

#[test]
fn pipe_short_circuits() {
    let calls = Cell::new(0);
    let counted = |x: i32| {
        calls.set(calls.get() + 1);
        inc(x)
    };

    let out = pipe!(success!(1) => inc => reject => counted => counted);
    assert_eq!(out, Outcome::Failure("rejected"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn pipe_accepts_std_results_and_stage_adapters() {
    let seen = Cell::new(0);
    let out = pipe!(
        "41".parse::<i32>().map_err(|_| "parse") =>
        inc =>
        stage::tee(|x: &i32| seen.set(*x)) =>
        stage::lift(|x: i32| x.to_string()),
    );

    assert_eq!(out, Outcome::Success("42".to_string()));
    assert_eq!(seen.get(), 42);
}

#[test]
fn pipe_with_only_a_start_normalizes_it() {
    let out: Outcome<i32, &str> = pipe!(Err("early"));
    assert_eq!(out, Outcome::Failure("early"));
}

#[test]
fn success_and_failure_shorthands() {
    let ok: Outcome<i32, ()> = success!(1);
    let bad: Outcome<(), i32> = failure!(2);

    assert_eq!(ok, Outcome::Success(1));
    assert_eq!(bad, Outcome::Failure(2));
}
