//! Contracts the combinator algebra operates over.
//!
//! - [`Switch`]: one synchronous pipeline step (`V -> Outcome<A, E>`),
//!   blanket-implemented for closures and fn items.
//! - [`SwitchExt`]: ergonomic extensions (boxing) on every switch.
//!
//! The deferred twin, [`AsyncSwitch`](crate::async_ext::AsyncSwitch), lives
//! in [`async_ext`](crate::async_ext) behind the `async` feature.

pub mod switch;

pub use switch::{Switch, SwitchExt};
