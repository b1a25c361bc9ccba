use railway_ops::traits::{IntoOutcome, OptionExt, Verdict};
use railway_ops::Outcome;

#[test]
fn into_outcome_is_identity_on_outcomes() {
    let ok: Outcome<i32, &str> = Outcome::success(1);
    let bad: Outcome<i32, &str> = Outcome::failure("bad");

    assert_eq!(ok.into_outcome(), ok);
    assert_eq!(bad.into_outcome(), bad);
}

#[test]
fn into_outcome_maps_std_results() {
    assert_eq!(Ok::<i32, &str>(1).into_outcome(), Outcome::Success(1));
    assert_eq!(Err::<i32, &str>("bad").into_outcome(), Outcome::Failure("bad"));
}

#[test]
fn verdicts_only_veto_on_failure() {
    assert_eq!(Outcome::<i32, &str>::success(99).into_veto(), None);
    assert_eq!(Outcome::<i32, &str>::failure("bad").into_veto(), Some("bad"));
    assert_eq!(Ok::<(), &str>(()).into_veto(), None);
    assert_eq!(Err::<(), &str>("bad").into_veto(), Some("bad"));
    assert_eq!(Verdict::<&str>::into_veto(()), None);
}

#[test]
fn option_ext_builds_outcomes() {
    assert_eq!(Some(3).ok_or_failure("missing"), Outcome::Success(3));
    assert_eq!(None::<i32>.ok_or_failure("missing"), Outcome::Failure("missing"));

    let mut built = false;
    let out = Some(3).ok_or_else_failure(|| {
        built = true;
        "missing"
    });
    assert_eq!(out, Outcome::Success(3));
    assert!(!built);

    assert_eq!(None::<i32>.ok_or_else_failure(|| "lazy"), Outcome::Failure("lazy"));
}
