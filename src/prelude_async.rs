//! Async prelude - the deferred combinator family in one import.
//!
//! Includes everything from [`prelude`](crate::prelude) plus the
//! [`async_ext`](crate::async_ext) surface.
//!
//! # Examples
//!
//! ```
//! use switch_rail::prelude_async::*;
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

pub use crate::prelude::*;

pub use crate::async_ext::{
    bind_similar_async, bind_three_async, bind_two_async, bypass_async, or_fallback_async,
    recover_async, transform_to_async_switch, AsyncPipeline, AsyncSwitch, AsyncSwitchExt,
    AsyncTransform, BindSimilarAsync, BindThreeAsync, BindTwoAsync, BoxedAsyncSwitch,
    BranchedAsync, BypassAsync, OrFallbackAsync, RecoverAsync, SucceedFuture,
};
