//! Deferred branch combinators.
//!
//! Decision rules identical to [`branch`](crate::branch); each invoked
//! alternate is awaited before the combinator returns. `BypassAsync` and
//! `RecoverAsync` implement [`AsyncSwitch`] over an already-produced
//! `Outcome`, so they slot into deferred pipelines like any other step.

use core::future::Future;

use crate::types::Outcome;

use super::switch::AsyncSwitch;

/// Deferred bypass: reacts to a failure by running an async alternate on the
/// carried error.
///
/// Created by [`bypass_async`].
#[derive(Clone)]
pub struct BypassAsync<Alt> {
    alt: Alt,
}

impl<A, E, Alt> AsyncSwitch<Outcome<A, E>> for BypassAsync<Alt>
where
    Alt: AsyncSwitch<E, Success = A, Error = E>,
{
    type Success = A;
    type Error = E;

    async fn invoke(&self, outcome: Outcome<A, E>) -> Outcome<A, E> {
        match outcome {
            success @ Outcome::Success(_) => success,
            Outcome::Failure(error) => self.alt.invoke(error).await,
        }
    }
}

/// Reacts to a failure by awaiting `alt` on the carried error.
///
/// The deferred twin of [`bypass`](crate::bypass): a success passes through
/// unchanged; a failure hands its error to `alt`, whose outcome is returned
/// verbatim, so the alternate may re-fail or fully recover.
///
/// # Arguments
///
/// * `alt` - Deferred switch over the error channel (`E -> Outcome<A, E>`)
///
/// # Examples
///
/// ```
/// use switch_rail::async_ext::{bypass_async, AsyncSwitch};
/// use switch_rail::{will_fail, Outcome};
///
/// async fn add_context(message: String) -> Outcome<String, String> {
///     will_fail(format!("Account 123. {message}"))
/// }
///
/// # async fn example() {
/// let f = bypass_async(add_context);
/// assert_eq!(
///     f.invoke(will_fail("At least 3 characters".to_string())).await,
///     Outcome::Failure("Account 123. At least 3 characters".to_string()),
/// );
/// # }
/// ```
#[inline]
pub fn bypass_async<Alt>(alt: Alt) -> BypassAsync<Alt> {
    BypassAsync { alt }
}

/// Deferred recover: reacts to a failure by awaiting a total replacement.
///
/// Created by [`recover_async`].
#[derive(Clone)]
pub struct RecoverAsync<Alt> {
    alt: Alt,
}

impl<A, E, Alt, Fut> AsyncSwitch<Outcome<A, E>> for RecoverAsync<Alt>
where
    Alt: Fn(E) -> Fut,
    Fut: Future<Output = A>,
{
    type Success = A;
    type Error = E;

    async fn invoke(&self, outcome: Outcome<A, E>) -> Outcome<A, E> {
        match outcome {
            success @ Outcome::Success(_) => success,
            Outcome::Failure(error) => Outcome::Success((self.alt)(error).await),
        }
    }
}

/// Reacts to a failure by unconditionally replacing it with an awaited
/// success.
///
/// The deferred twin of [`recover`](crate::recover): `alt` resolves to a
/// plain value, so recovery can never itself fail.
///
/// # Arguments
///
/// * `alt` - Total async recovery function (`E -> A`)
#[inline]
pub fn recover_async<Alt>(alt: Alt) -> RecoverAsync<Alt> {
    RecoverAsync { alt }
}

/// Deferred fallback: tries one switch, retrying the original input through
/// another on failure.
///
/// Created by [`or_fallback_async`].
#[derive(Clone)]
pub struct OrFallbackAsync<F1, F2> {
    primary: F1,
    fallback: F2,
}

impl<V, F1, F2> AsyncSwitch<V> for OrFallbackAsync<F1, F2>
where
    V: Clone,
    F1: AsyncSwitch<V>,
    F2: AsyncSwitch<V, Success = F1::Success, Error = F1::Error>,
{
    type Success = F1::Success;
    type Error = F1::Error;

    async fn invoke(&self, input: V) -> Outcome<F1::Success, F1::Error> {
        match self.primary.invoke(input.clone()).await {
            success @ Outcome::Success(_) => success,
            Outcome::Failure(_) => self.fallback.invoke(input).await,
        }
    }
}

/// Awaits `first`; on failure, retries the *original input* through
/// `fallback`.
///
/// The deferred twin of [`or_fallback`](crate::or_fallback): the fallback
/// never sees `first`'s error, only a clone of the untouched input, and its
/// outcome is returned verbatim.
///
/// # Arguments
///
/// * `first` - The preferred deferred switch
/// * `fallback` - The deferred switch retried with the original input
///
/// # Examples
///
/// ```
/// use switch_rail::async_ext::{or_fallback_async, AsyncSwitch};
/// use switch_rail::{succeed, will_fail, Outcome};
///
/// async fn min3char(text: String) -> Outcome<String, String> {
///     if text.len() < 3 {
///         return will_fail("At least 3 characters".to_string());
///     }
///     succeed(text)
/// }
///
/// async fn to_uppercase(text: String) -> Outcome<String, String> {
///     succeed(text.to_uppercase())
/// }
///
/// # async fn example() {
/// let f = or_fallback_async(min3char, to_uppercase);
/// assert_eq!(
///     f.invoke("z".to_string()).await,
///     Outcome::Success("Z".to_string()),
/// );
/// # }
/// ```
#[inline]
pub fn or_fallback_async<F1, F2>(first: F1, fallback: F2) -> OrFallbackAsync<F1, F2> {
    OrFallbackAsync { primary: first, fallback }
}
