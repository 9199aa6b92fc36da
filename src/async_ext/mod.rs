//! Deferred (async) twins of the switch-rail combinators.
//!
//! Every synchronous combinator has a structurally identical deferred twin
//! here, operating over [`AsyncSwitch`] instead of
//! [`Switch`](crate::traits::Switch). The decision rules are the same; the
//! only difference is that each step's future is awaited before the next
//! decision is made. Steps are strictly sequential (never concurrent, even
//! across independent chains), and a step that never resolves stalls its
//! chain forever; there is no built-in timeout.
//!
//! One asymmetry with the sync family is forced by the language: closures
//! cannot return unnamed futures, so the deferred combinators return named
//! values ([`BindTwoAsync`], [`OrFallbackAsync`], ...) that are invoked via
//! [`AsyncSwitch::invoke`] rather than called directly.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! switch-rail = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use switch_rail::async_ext::{bind_two_async, AsyncSwitch};
//! use switch_rail::{succeed, will_fail, Outcome};
//!
//! async fn min3char(text: String) -> Outcome<String, String> {
//!     if text.len() < 3 {
//!         return will_fail("At least 3 characters".to_string());
//!     }
//!     succeed(text)
//! }
//!
//! async fn shout(text: String) -> Outcome<String, String> {
//!     succeed(text.to_uppercase())
//! }
//!
//! # async fn example() {
//! let f = bind_two_async(min3char, shout);
//! assert!(f.invoke("short text".to_string()).await.is_success());
//! # }
//! ```

mod bind;
mod branch;
mod lift;
mod pipeline;
mod switch;

pub use bind::{
    bind_similar_async, bind_three_async, bind_two_async, BindSimilarAsync, BindThreeAsync,
    BindTwoAsync,
};
pub use branch::{
    bypass_async, or_fallback_async, recover_async, BypassAsync, OrFallbackAsync, RecoverAsync,
};
pub use lift::{transform_to_async_switch, AsyncTransform, SucceedFuture};
pub use pipeline::{AsyncPipeline, BranchedAsync};
pub use switch::{AsyncSwitch, AsyncSwitchExt, BoxedAsyncSwitch};
