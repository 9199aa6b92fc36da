//! Deferred/synchronous parity: for pure switch functions, every async
//! combinator yields exactly the Result its sync counterpart does.

use switch_rail::async_ext::{
    bind_three_async, bind_two_async, bypass_async, or_fallback_async, recover_async,
    AsyncSwitch,
};
use switch_rail::{bind_three, bind_two, bypass, or_fallback, recover};

use crate::common::{
    add_context_to_error, async_add_context_to_error, async_fallback_to_uppercase,
    async_max20char, async_min3char, async_not_dot, async_recover_to_good,
    async_valueify_short, fallback_to_uppercase, max20char, min3char, not_dot,
    recover_to_good, valueify_short,
};

const INPUTS: [&str; 5] =
    ["short text", "o", "way to many characters in this sentence", "escape with dot .", "z"];

#[tokio::test]
async fn bind_two_parity() {
    let sync_f = bind_two(min3char, valueify_short);
    let async_f = bind_two_async(async_min3char, async_valueify_short);

    for input in INPUTS {
        assert_eq!(
            sync_f(input.to_string()),
            async_f.invoke(input.to_string()).await,
        );
    }
}

#[tokio::test]
async fn bind_three_parity() {
    let sync_f = bind_three(min3char, max20char, not_dot);
    let async_f = bind_three_async(async_min3char, async_max20char, async_not_dot);

    for input in INPUTS {
        assert_eq!(
            sync_f(input.to_string()),
            async_f.invoke(input.to_string()).await,
        );
    }
}

#[tokio::test]
async fn bypass_parity() {
    let sync_f = bypass(add_context_to_error);
    let async_f = bypass_async(async_add_context_to_error);

    for input in INPUTS {
        assert_eq!(
            sync_f(min3char(input.to_string())),
            async_f.invoke(async_min3char(input.to_string()).await).await,
        );
    }
}

#[tokio::test]
async fn recover_parity() {
    let sync_f = recover(recover_to_good);
    let async_f = recover_async(async_recover_to_good);

    for input in INPUTS {
        assert_eq!(
            sync_f(min3char(input.to_string())),
            async_f.invoke(async_min3char(input.to_string()).await).await,
        );
    }
}

#[tokio::test]
async fn or_fallback_parity() {
    let sync_f = or_fallback(min3char, fallback_to_uppercase);
    let async_f = or_fallback_async(async_min3char, async_fallback_to_uppercase);

    for input in INPUTS {
        assert_eq!(
            sync_f(input.to_string()),
            async_f.invoke(input.to_string()).await,
        );
    }
}
