use core::cell::Cell;

use switch_rail::{bind_similar, bind_three, bind_two, chain, succeed, Outcome, SwitchFn};

use crate::common::{
    fallback_to_uppercase, max20char, min3char, not_dot, valueify_short, Valueified,
};

#[test]
fn bind_two_switch_functions() {
    let f = bind_two(min3char, valueify_short);
    let text = "short text".to_string();
    let actual = f(text.clone());
    assert_eq!(actual, Outcome::Success(Valueified { value: text }));
}

#[test]
fn bind_two_switch_functions_and_fail_at_first() {
    let f = bind_two(min3char, valueify_short);
    let actual = f("o".to_string());
    assert_eq!(actual, Outcome::Failure("At least 3 characters".to_string()));
}

#[test]
fn bind_three_switch_functions() {
    let f = bind_three(min3char, max20char, valueify_short);
    let text = "short text".to_string();
    let actual = f(text.clone());
    assert_eq!(actual, Outcome::Success(Valueified { value: text }));
}

#[test]
fn bind_three_switch_functions_and_fail_in_the_middle() {
    let f = bind_three(min3char, max20char, valueify_short);
    let actual = f("way to many characters in this sentence".to_string());
    assert_eq!(actual, Outcome::Failure("Not more than 20 characters".to_string()));
}

#[test]
fn bind_short_circuits_without_invoking_later_steps() {
    let second_calls = Cell::new(0u32);
    let third_calls = Cell::new(0u32);

    let counting_max20 = |text: String| {
        second_calls.set(second_calls.get() + 1);
        max20char(text)
    };
    let counting_not_dot = |text: String| {
        third_calls.set(third_calls.get() + 1);
        not_dot(text)
    };

    let f = bind_three(min3char, counting_max20, counting_not_dot);
    let actual = f("o".to_string());

    assert_eq!(actual, Outcome::Failure("At least 3 characters".to_string()));
    assert_eq!(second_calls.get(), 0);
    assert_eq!(third_calls.get(), 0);
}

#[test]
fn bind_invokes_each_step_exactly_once_on_success() {
    let first_calls = Cell::new(0u32);
    let second_calls = Cell::new(0u32);

    let counting_min3 = |text: String| {
        first_calls.set(first_calls.get() + 1);
        min3char(text)
    };
    let counting_max20 = |text: String| {
        second_calls.set(second_calls.get() + 1);
        max20char(text)
    };

    let f = bind_two(counting_min3, counting_max20);
    assert!(f("short text".to_string()).is_success());
    assert_eq!(first_calls.get(), 1);
    assert_eq!(second_calls.get(), 1);
}

#[test]
fn nested_bind_two_matches_bind_three() {
    let nested = bind_two(bind_two(min3char, max20char), not_dot);
    let flat = bind_three(min3char, max20char, not_dot);

    for input in ["short text", "o", "way to many characters in this sentence", "dot."] {
        assert_eq!(nested(input.to_string()), flat(input.to_string()));
    }
}

#[test]
fn bind_three_similar_switch_functions() {
    let f = bind_similar([min3char, max20char, not_dot]);
    let actual = f("short text".to_string());
    assert_eq!(actual, Outcome::Success("short text".to_string()));
}

#[test]
fn bind_two_similar_switch_functions_and_fail_with_too_many_chars() {
    let f = bind_similar([min3char, max20char]);
    let actual = f("way to many characters in this sentence".to_string());
    assert_eq!(actual, Outcome::Failure("Not more than 20 characters".to_string()));
}

#[test]
fn bind_three_similar_switch_functions_and_fail_at_dot() {
    let f = bind_similar([min3char, max20char, not_dot]);
    let actual = f("escape with dot .".to_string());
    assert_eq!(actual, Outcome::Failure("Should not have any dots".to_string()));
}

#[test]
fn bind_similar_stops_at_the_first_failure() {
    let later_calls = std::rc::Rc::new(Cell::new(0u32));
    let counter = std::rc::Rc::clone(&later_calls);
    let counting_not_dot = move |text: String| {
        counter.set(counter.get() + 1);
        not_dot(text)
    };

    let steps: Vec<switch_rail::BoxedSwitch<String, String, String>> =
        vec![Box::new(min3char), Box::new(max20char), Box::new(counting_not_dot)];
    let f = bind_similar(steps);
    let actual = f("way to many characters in this sentence".to_string());

    assert_eq!(actual, Outcome::Failure("Not more than 20 characters".to_string()));
    assert_eq!(later_calls.get(), 0);
}

#[test]
fn bind_similar_accepts_explicit_fn_pointers() {
    let steps: [SwitchFn<String, String, String>; 3] = [min3char, max20char, not_dot];
    let f = bind_similar(steps);
    assert!(f("short text".to_string()).is_success());
}

#[test]
fn bind_similar_over_no_steps_is_the_identity() {
    let f = bind_similar(Vec::<SwitchFn<String, String, String>>::new());
    assert_eq!(f("anything".to_string()), Outcome::Success("anything".to_string()));
}

#[test]
fn chain_macro_expands_to_nested_binds() {
    let chained = chain!(min3char, max20char, not_dot, fallback_to_uppercase);
    assert_eq!(
        chained("short text".to_string()),
        Outcome::Success("SHORT TEXT".to_string()),
    );
    assert_eq!(
        chained("o".to_string()),
        Outcome::Failure("At least 3 characters".to_string()),
    );
}

#[test]
fn lifted_total_functions_participate_in_chains() {
    let trim = switch_rail::transform_to_switch(|text: String| text.trim().to_string());
    let f = bind_two(trim, min3char);
    assert_eq!(
        f("  short text  ".to_string()),
        Outcome::Success("short text".to_string()),
    );
}

#[test]
fn transform_to_switch_always_succeeds() {
    let multiply_by_two = switch_rail::transform_to_switch(|value: i32| value * 2);
    let actual: Outcome<i32, String> = multiply_by_two(3);
    assert_eq!(actual, Outcome::Success(6));
}

#[test]
fn boxed_closures_share_an_element_type() {
    use switch_rail::{BoxedSwitch, SwitchExt};

    let min = "rail".to_string();
    let steps: Vec<BoxedSwitch<String, String, String>> = vec![
        (move |text: String| {
            if text.starts_with(&min) {
                succeed(text)
            } else {
                switch_rail::will_fail("missing prefix".to_string())
            }
        })
        .boxed(),
        fallback_to_uppercase.boxed(),
    ];
    let f = bind_similar(steps);
    assert_eq!(f("railway".to_string()), Outcome::Success("RAILWAY".to_string()));
}
