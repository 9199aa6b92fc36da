use switch_rail::{
    outcome_to_result, result_to_outcome, succeed, will_fail, with_default, Outcome,
};

use crate::common::min3char;

#[test]
fn succeed_constructs_the_success_variant() {
    let outcome: Outcome<i32, &str> = succeed(42);
    assert_eq!(outcome, Outcome::Success(42));
    assert!(outcome.is_success());
}

#[test]
fn will_fail_constructs_the_failure_variant() {
    let outcome: Outcome<i32, &str> = will_fail("boom");
    assert_eq!(outcome, Outcome::Failure("boom"));
    assert!(outcome.is_failure());
}

#[test]
fn success_and_failure_extract_the_carried_channel() {
    let good: Outcome<i32, &str> = succeed(42);
    assert_eq!(good.success(), Some(42));

    let good: Outcome<i32, &str> = succeed(42);
    assert_eq!(good.failure(), None);

    let bad: Outcome<i32, &str> = will_fail("boom");
    assert_eq!(bad.failure(), Some("boom"));
}

#[test]
fn with_default_returns_the_successful_value() {
    let text = "many chars".to_string();
    let actual = with_default("default".to_string())(min3char(text.clone()));
    assert_eq!(actual, text);
}

#[test]
fn with_default_falls_back_to_default_on_error() {
    let actual = with_default("default".to_string())(min3char("o".to_string()));
    assert_eq!(actual, "default");
}

#[test]
fn with_default_is_reusable_across_outcomes() {
    let unwrap = with_default::<_, String>(0);
    assert_eq!(unwrap(succeed(7)), 7);
    assert_eq!(unwrap(will_fail("nope".to_string())), 0);
    assert_eq!(unwrap(succeed(9)), 9);
}

#[test]
fn value_or_matches_with_default() {
    let good: Outcome<&str, &str> = succeed("value");
    assert_eq!(good.value_or("default"), "value");

    let bad: Outcome<&str, &str> = will_fail("boom");
    assert_eq!(bad.value_or("default"), "default");
}

#[test]
fn result_round_trips_through_outcome() {
    let ok: Result<i32, String> = Ok(42);
    let outcome = result_to_outcome(ok);
    assert_eq!(outcome, Outcome::Success(42));
    assert_eq!(outcome_to_result(outcome), Ok(42));

    let err: Result<i32, String> = Err("bad".to_string());
    let outcome = result_to_outcome(err);
    assert_eq!(outcome, Outcome::Failure("bad".to_string()));
    assert_eq!(outcome_to_result(outcome), Err("bad".to_string()));
}

#[test]
fn from_impls_mirror_the_free_helpers() {
    let outcome: Outcome<i32, &str> = Ok::<_, &str>(1).into();
    assert!(outcome.is_success());

    let result: Result<i32, &str> = Outcome::<i32, &str>::Failure("bad").into();
    assert_eq!(result, Err("bad"));
}

#[cfg(feature = "serde")]
#[test]
fn outcome_serializes_with_lowercase_tags() {
    let good: Outcome<i32, String> = succeed(42);
    let json = serde_json::to_string(&good).unwrap();
    assert_eq!(json, r#"{"success":42}"#);

    let bad: Outcome<i32, String> = will_fail("boom".to_string());
    let json = serde_json::to_string(&bad).unwrap();
    assert_eq!(json, r#"{"failure":"boom"}"#);
}

#[cfg(feature = "serde")]
#[test]
fn outcome_deserializes_both_variants() {
    let good: Outcome<i32, String> = serde_json::from_str(r#"{"success":42}"#).unwrap();
    assert_eq!(good, Outcome::Success(42));

    let bad: Outcome<i32, String> = serde_json::from_str(r#"{"failure":"boom"}"#).unwrap();
    assert_eq!(bad, Outcome::Failure("boom".to_string()));
}
