use switch_rail::tracing_ext::SwitchTracingExt;
use switch_rail::{bind_two, Outcome, Switch};

use crate::common::{max20char, min3char};

#[test]
fn traced_switch_passes_outcomes_through_untouched() {
    let traced = min3char.traced("min3char");
    assert_eq!(
        traced.invoke("short text".to_string()),
        Outcome::Success("short text".to_string()),
    );
    assert_eq!(
        traced.invoke("o".to_string()),
        Outcome::Failure("At least 3 characters".to_string()),
    );
}

#[test]
fn traced_switches_compose_in_chains() {
    let f = bind_two(min3char.traced("min3char"), max20char.traced("max20char"));
    assert!(f("short text".to_string()).is_success());
    assert_eq!(
        f("way to many characters in this sentence".to_string()),
        Outcome::Failure("Not more than 20 characters".to_string()),
    );
}

#[cfg(feature = "async")]
mod async_tracing {
    use switch_rail::async_ext::{bind_two_async, AsyncSwitch};
    use switch_rail::tracing_ext::AsyncSwitchTracingExt;
    use switch_rail::Outcome;

    use crate::common::{async_max20char, async_min3char};

    #[tokio::test]
    async fn traced_async_switch_passes_outcomes_through_untouched() {
        let traced = async_min3char.traced_async("min3char");
        assert_eq!(
            traced.invoke("o".to_string()).await,
            Outcome::Failure("At least 3 characters".to_string()),
        );
    }

    #[tokio::test]
    async fn traced_async_switches_compose_in_chains() {
        let f = bind_two_async(
            async_min3char.traced_async("min3char"),
            async_max20char.traced_async("max20char"),
        );
        assert!(f.invoke("short text".to_string()).await.is_success());
    }
}
