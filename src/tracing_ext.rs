//! Tracing integration for pipeline steps.
//!
//! Wraps a switch so that every invocation emits a `tracing` event recording
//! which track the step left on. Instrumentation only: the wrapped switch's
//! outcome is passed through untouched, so `.traced(..)` never changes what
//! a chain computes.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! switch-rail = { version = "0.3", features = ["tracing"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use switch_rail::tracing_ext::SwitchTracingExt;
//! use switch_rail::{bind_two, succeed, will_fail, Outcome};
//!
//! let min3: fn(&str) -> Outcome<&str, &str> = |t| if t.len() >= 3 { succeed(t) } else { will_fail("too short") };
//! let shout = |t: &str| succeed::<_, &str>(t.to_uppercase());
//!
//! let validate = bind_two(min3.traced("min3"), shout.traced("shout"));
//! assert_eq!(validate("abc"), Outcome::Success("ABC".to_string()));
//! ```

use crate::traits::Switch;
use crate::types::Outcome;

#[cfg(feature = "async")]
use crate::async_ext::AsyncSwitch;

/// A switch wrapped with per-invocation tracing events.
///
/// Created by [`SwitchTracingExt::traced`].
#[derive(Clone)]
pub struct Traced<F> {
    inner: F,
    step: &'static str,
}

impl<V, F> Switch<V> for Traced<F>
where
    F: Switch<V>,
{
    type Success = F::Success;
    type Error = F::Error;

    fn invoke(&self, input: V) -> Outcome<F::Success, F::Error> {
        match self.inner.invoke(input) {
            success @ Outcome::Success(_) => {
                tracing::trace!(step = self.step, "switch succeeded");
                success
            },
            failure @ Outcome::Failure(_) => {
                tracing::debug!(step = self.step, "switch failed");
                failure
            },
        }
    }
}

/// Extension trait attaching tracing instrumentation to any [`Switch`].
pub trait SwitchTracingExt<V>: Switch<V> {
    /// Labels this switch and emits an event on every invocation.
    ///
    /// Successes are emitted at `TRACE`, failures at `DEBUG`.
    fn traced(self, step: &'static str) -> Traced<Self>
    where
        Self: Sized,
    {
        Traced { inner: self, step }
    }
}

impl<V, F> SwitchTracingExt<V> for F where F: Switch<V> {}

/// A deferred switch wrapped with per-invocation tracing events.
///
/// Created by [`AsyncSwitchTracingExt::traced_async`].
#[cfg(feature = "async")]
#[derive(Clone)]
pub struct TracedAsync<F> {
    inner: F,
    step: &'static str,
}

#[cfg(feature = "async")]
impl<V, F> AsyncSwitch<V> for TracedAsync<F>
where
    F: AsyncSwitch<V>,
{
    type Success = F::Success;
    type Error = F::Error;

    async fn invoke(&self, input: V) -> Outcome<F::Success, F::Error> {
        match self.inner.invoke(input).await {
            success @ Outcome::Success(_) => {
                tracing::trace!(step = self.step, "switch succeeded");
                success
            },
            failure @ Outcome::Failure(_) => {
                tracing::debug!(step = self.step, "switch failed");
                failure
            },
        }
    }
}

/// Extension trait attaching tracing instrumentation to any
/// [`AsyncSwitch`].
#[cfg(feature = "async")]
pub trait AsyncSwitchTracingExt<V>: AsyncSwitch<V> {
    /// Labels this deferred switch and emits an event on every invocation.
    ///
    /// Successes are emitted at `TRACE`, failures at `DEBUG`.
    fn traced_async(self, step: &'static str) -> TracedAsync<Self>
    where
        Self: Sized,
    {
        TracedAsync { inner: self, step }
    }
}

#[cfg(feature = "async")]
impl<V, F> AsyncSwitchTracingExt<V> for F where F: AsyncSwitch<V> {}
