use railway_ops::convert::{flip, option_to_outcome, outcome_to_result, result_to_outcome};
use railway_ops::Outcome;

#[test]
fn result_and_outcome_convert_losslessly() {
    let ok: Result<i32, &str> = Ok(1);
    let err: Result<i32, &str> = Err("bad");

    assert_eq!(result_to_outcome(ok), Outcome::Success(1));
    assert_eq!(outcome_to_result(result_to_outcome(err)), err);

    let via_from: Outcome<i32, &str> = err.into();
    assert_eq!(via_from, Outcome::Failure("bad"));
    let back: Result<i32, &str> = via_from.into();
    assert_eq!(back, err);
}

#[test]
fn question_mark_works_through_into_result() {
    fn stage(x: i32) -> Outcome<i32, &'static str> {
        if x > 0 {
            Outcome::success(x)
        } else {
            Outcome::failure("not positive")
        }
    }

    fn run(x: i32) -> Result<i32, &'static str> {
        let checked = stage(x).into_result()?;
        Ok(checked * 2)
    }

    assert_eq!(run(2), Ok(4));
    assert_eq!(run(0), Err("not positive"));
}

#[test]
fn option_converts_with_error() {
    assert_eq!(option_to_outcome(Some("v"), 0), Outcome::Success("v"));
    assert_eq!(option_to_outcome(None::<&str>, 0), Outcome::Failure(0));
}

#[test]
fn flip_swaps_tracks() {
    assert_eq!(flip(Outcome::<i32, &str>::failure("x")), Outcome::Success("x"));
    assert_eq!(flip(flip(Outcome::<i32, &str>::success(1))), Outcome::Success(1));
}
