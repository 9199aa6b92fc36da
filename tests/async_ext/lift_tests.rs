use switch_rail::async_ext::{bind_two_async, transform_to_async_switch, AsyncSwitch};
use switch_rail::Outcome;

use crate::common::async_min3char;

async fn multiply_by_two(value: i32) -> i32 {
    value * 2
}

#[tokio::test]
async fn transform_to_async_switch_always_succeeds() {
    let f = transform_to_async_switch::<_, String>(multiply_by_two);
    let actual = f.invoke(3).await;
    assert_eq!(actual, Outcome::Success(6));
}

#[tokio::test]
async fn lifted_async_functions_participate_in_chains() {
    async fn trim(text: String) -> String {
        text.trim().to_string()
    }

    let f = bind_two_async(transform_to_async_switch(trim), async_min3char);
    let actual = f.invoke("  short text  ".to_string()).await;
    assert_eq!(actual, Outcome::Success("short text".to_string()));
}
