use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use switch_rail::async_ext::{
    bind_similar_async, bind_three_async, bind_two_async, AsyncSwitch, AsyncSwitchExt,
    BoxedAsyncSwitch,
};
use switch_rail::{chain_async, Outcome};

use crate::common::{
    async_max20char, async_min3char, async_not_dot, async_valueify_short, Valueified,
};

#[tokio::test]
async fn bind_two_switch_functions_asynchronously() {
    let f = bind_two_async(async_min3char, async_valueify_short);
    let text = "short text".to_string();
    let actual = f.invoke(text.clone()).await;
    assert_eq!(actual, Outcome::Success(Valueified { value: text }));
}

#[tokio::test]
async fn bind_two_switch_functions_and_fail_at_first_asynchronously() {
    let f = bind_two_async(async_min3char, async_valueify_short);
    let actual = f.invoke("o".to_string()).await;
    assert_eq!(actual, Outcome::Failure("At least 3 characters".to_string()));
}

#[tokio::test]
async fn bind_three_switch_functions_asynchronously() {
    let f = bind_three_async(async_min3char, async_max20char, async_valueify_short);
    let text = "short text".to_string();
    let actual = f.invoke(text.clone()).await;
    assert_eq!(actual, Outcome::Success(Valueified { value: text }));
}

#[tokio::test]
async fn bind_three_switch_functions_and_fail_in_the_middle_asynchronously() {
    let f = bind_three_async(async_min3char, async_max20char, async_valueify_short);
    let actual = f.invoke("way to many characters in this sentence".to_string()).await;
    assert_eq!(actual, Outcome::Failure("Not more than 20 characters".to_string()));
}

#[tokio::test]
async fn bind_similar_switch_functions_asynchronously() {
    let steps: Vec<BoxedAsyncSwitch<String, String, String>> = vec![
        async_min3char.boxed(),
        async_max20char.boxed(),
        async_not_dot.boxed(),
    ];
    let f = bind_similar_async(steps);
    let actual = f.invoke("short text".to_string()).await;
    assert_eq!(actual, Outcome::Success("short text".to_string()));
}

#[tokio::test]
async fn bind_similar_fails_at_dot_asynchronously() {
    let steps: Vec<BoxedAsyncSwitch<String, String, String>> = vec![
        async_min3char.boxed(),
        async_max20char.boxed(),
        async_not_dot.boxed(),
    ];
    let f = bind_similar_async(steps);
    let actual = f.invoke("escape with dot .".to_string()).await;
    assert_eq!(actual, Outcome::Failure("Should not have any dots".to_string()));
}

#[tokio::test]
async fn async_bind_short_circuits_without_invoking_later_steps() {
    let second_calls = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&second_calls);
    let counting_max20 = move |text: String| {
        counter.fetch_add(1, Ordering::SeqCst);
        async_max20char(text)
    };

    let f = bind_two_async(async_min3char, counting_max20);
    let actual = f.invoke("o".to_string()).await;

    assert_eq!(actual, Outcome::Failure("At least 3 characters".to_string()));
    assert_eq!(second_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn async_steps_run_strictly_in_sequence() {
    let log = Arc::new(Mutex::new(Vec::<&'static str>::new()));

    let first_log = Arc::clone(&log);
    let first = move |text: String| {
        let log = Arc::clone(&first_log);
        async move {
            log.lock().unwrap().push("first");
            async_min3char(text).await
        }
    };

    let second_log = Arc::clone(&log);
    let second = move |text: String| {
        let log = Arc::clone(&second_log);
        async move {
            log.lock().unwrap().push("second");
            async_max20char(text).await
        }
    };

    let f = bind_two_async(first, second);
    assert!(f.invoke("short text".to_string()).await.is_success());
    assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
}

#[tokio::test]
async fn chain_async_macro_expands_to_nested_binds() {
    let chained = chain_async!(async_min3char, async_max20char, async_not_dot);
    assert_eq!(
        chained.invoke("short text".to_string()).await,
        Outcome::Success("short text".to_string()),
    );
    assert_eq!(
        chained.invoke("escape with dot .".to_string()).await,
        Outcome::Failure("Should not have any dots".to_string()),
    );
}
