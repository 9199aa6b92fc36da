//! Fluent builder for deferred switch chains.
//!
//! The async counterpart to [`Pipeline`](crate::Pipeline), composing
//! concrete combinator values instead of closures.

use core::future::Future;
use core::marker::PhantomData;

use crate::types::Outcome;

use super::bind::{bind_two_async, BindTwoAsync};
use super::branch::{
    bypass_async, or_fallback_async, recover_async, BypassAsync, OrFallbackAsync, RecoverAsync,
};
use super::switch::{AsyncSwitch, AsyncSwitchExt, BoxedAsyncSwitch};

/// A deferred switch followed by a branch over its outcome.
///
/// Produced by [`AsyncPipeline::bypass`] and [`AsyncPipeline::recover`]:
/// the switch runs first, then the branch (itself an [`AsyncSwitch`] over
/// `Outcome`) reacts to the classified result.
#[derive(Clone)]
pub struct BranchedAsync<S, B> {
    switch: S,
    branch: B,
}

impl<V, S, B> AsyncSwitch<V> for BranchedAsync<S, B>
where
    S: AsyncSwitch<V>,
    B: AsyncSwitch<Outcome<S::Success, S::Error>>,
{
    type Success = B::Success;
    type Error = B::Error;

    async fn invoke(&self, input: V) -> Outcome<B::Success, B::Error> {
        let outcome = self.switch.invoke(input).await;
        self.branch.invoke(outcome).await
    }
}

/// Builder accumulating a deferred switch chain one step at a time.
///
/// Every combinator consumes the builder and returns a new one wrapping a
/// concrete composed value; nothing is polled until the composed switch is
/// invoked via [`run`](AsyncPipeline::run) or extracted with
/// [`finish`](AsyncPipeline::finish).
///
/// # Examples
///
/// ```
/// use switch_rail::async_ext::AsyncPipeline;
/// use switch_rail::{succeed, will_fail, Outcome};
///
/// async fn min3char(text: String) -> Outcome<String, String> {
///     if text.len() < 3 {
///         return will_fail("At least 3 characters".to_string());
///     }
///     succeed(text)
/// }
///
/// async fn shout(text: String) -> Outcome<String, String> {
///     succeed(text.to_uppercase())
/// }
///
/// # async fn example() {
/// let pipeline = AsyncPipeline::new(min3char).then(shout);
/// assert_eq!(
///     pipeline.run("short text".to_string()).await,
///     Outcome::Success("SHORT TEXT".to_string()),
/// );
/// # }
/// ```
pub struct AsyncPipeline<V, F> {
    switch: F,
    _input: PhantomData<fn(V)>,
}

impl<V, F> AsyncPipeline<V, F>
where
    F: AsyncSwitch<V>,
{
    /// Starts a deferred pipeline from its first step.
    #[inline]
    pub fn new(switch: F) -> Self {
        Self { switch, _input: PhantomData }
    }

    /// Appends `next`, threading this chain's success value into it.
    ///
    /// `next` is only invoked after the chain so far has resolved to a
    /// success; a failure short-circuits past it.
    #[inline]
    pub fn then<G>(self, next: G) -> AsyncPipeline<V, BindTwoAsync<F, G>>
    where
        G: AsyncSwitch<F::Success, Error = F::Error>,
    {
        AsyncPipeline::new(bind_two_async(self.switch, next))
    }

    /// Attaches a deferred bypass reacting to this chain's failures.
    ///
    /// See [`bypass_async`].
    #[inline]
    pub fn bypass<Alt>(self, alt: Alt) -> AsyncPipeline<V, BranchedAsync<F, BypassAsync<Alt>>>
    where
        Alt: AsyncSwitch<F::Error, Success = F::Success, Error = F::Error>,
    {
        AsyncPipeline::new(BranchedAsync { switch: self.switch, branch: bypass_async(alt) })
    }

    /// Attaches a deferred unconditional recovery for this chain's failures.
    ///
    /// See [`recover_async`].
    #[inline]
    pub fn recover<Alt, Fut>(
        self,
        alt: Alt,
    ) -> AsyncPipeline<V, BranchedAsync<F, RecoverAsync<Alt>>>
    where
        Alt: Fn(F::Error) -> Fut,
        Fut: Future<Output = F::Success>,
    {
        AsyncPipeline::new(BranchedAsync { switch: self.switch, branch: recover_async(alt) })
    }

    /// Retries the original input through `fallback` when this chain fails.
    ///
    /// See [`or_fallback_async`](super::or_fallback_async).
    #[inline]
    pub fn or_fallback<G>(self, fallback: G) -> AsyncPipeline<V, OrFallbackAsync<F, G>>
    where
        V: Clone,
        G: AsyncSwitch<V, Success = F::Success, Error = F::Error>,
    {
        AsyncPipeline::new(or_fallback_async(self.switch, fallback))
    }

    /// Runs the composed chain on `input` without consuming the builder.
    #[inline]
    pub async fn run(&self, input: V) -> Outcome<F::Success, F::Error> {
        self.switch.invoke(input).await
    }

    /// Completes the pipeline and returns the composed deferred switch.
    #[inline]
    pub fn finish(self) -> F {
        self.switch
    }

    /// Completes the pipeline behind a [`BoxedAsyncSwitch`] trait object.
    #[inline]
    pub fn finish_boxed(self) -> BoxedAsyncSwitch<V, F::Success, F::Error>
    where
        F: Clone + 'static,
        V: 'static,
        F::Success: 'static,
        F::Error: 'static,
    {
        self.switch.boxed()
    }
}
