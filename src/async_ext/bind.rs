//! Deferred sequential binders.
//!
//! Step-by-step contract identical to [`bind`](crate::bind): strict
//! left-to-right evaluation, first failure returned verbatim, later steps
//! never invoked. Each step's future is awaited before the next decision is
//! made, so no two steps ever execute concurrently, and a step that never
//! resolves stalls its chain indefinitely (there is no built-in timeout;
//! callers wanting one must wrap individual switch functions before
//! composing them).

use crate::types::{Outcome, SwitchVec};

use super::switch::AsyncSwitch;

/// Two deferred switch functions composed into one fail-fast chain.
///
/// Created by [`bind_two_async`]; implements [`AsyncSwitch`] so chains nest.
#[derive(Clone)]
pub struct BindTwoAsync<F1, F2> {
    first: F1,
    second: F2,
}

impl<V, F1, F2> AsyncSwitch<V> for BindTwoAsync<F1, F2>
where
    F1: AsyncSwitch<V>,
    F2: AsyncSwitch<F1::Success, Error = F1::Error>,
{
    type Success = F2::Success;
    type Error = F2::Error;

    async fn invoke(&self, input: V) -> Outcome<F2::Success, F2::Error> {
        match self.first.invoke(input).await {
            Outcome::Success(value) => self.second.invoke(value).await,
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}

/// Composes two deferred switch functions, threading the success value from
/// the first into the second.
///
/// The deferred twin of [`bind_two`](crate::bind_two): if `first` resolves
/// to a failure, that failure is the chain's result and `second` is never
/// invoked.
///
/// # Arguments
///
/// * `first` - The step receiving the original input
/// * `second` - The step receiving `first`'s success value
///
/// # Examples
///
/// ```
/// use switch_rail::async_ext::{bind_two_async, AsyncSwitch};
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
/// let f = bind_two_async(min3char, shout);
/// assert_eq!(
///     f.invoke("short text".to_string()).await,
///     Outcome::Success("SHORT TEXT".to_string()),
/// );
/// assert_eq!(
///     f.invoke("o".to_string()).await,
///     Outcome::Failure("At least 3 characters".to_string()),
/// );
/// # }
/// ```
#[inline]
pub fn bind_two_async<F1, F2>(first: F1, second: F2) -> BindTwoAsync<F1, F2> {
    BindTwoAsync { first, second }
}

/// Three deferred switch functions composed into one fail-fast chain.
///
/// Created by [`bind_three_async`].
#[derive(Clone)]
pub struct BindThreeAsync<F1, F2, F3> {
    first: F1,
    second: F2,
    third: F3,
}

impl<V, F1, F2, F3> AsyncSwitch<V> for BindThreeAsync<F1, F2, F3>
where
    F1: AsyncSwitch<V>,
    F2: AsyncSwitch<F1::Success, Error = F1::Error>,
    F3: AsyncSwitch<F2::Success, Error = F2::Error>,
{
    type Success = F3::Success;
    type Error = F3::Error;

    async fn invoke(&self, input: V) -> Outcome<F3::Success, F3::Error> {
        match self.first.invoke(input).await {
            Outcome::Success(value) => match self.second.invoke(value).await {
                Outcome::Success(value) => self.third.invoke(value).await,
                Outcome::Failure(error) => Outcome::Failure(error),
            },
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}

/// Composes three deferred switch functions into one fail-fast chain.
///
/// Equivalent to `bind_two_async(bind_two_async(first, second), third)` for
/// all inputs; the deferred twin of [`bind_three`](crate::bind_three).
///
/// # Arguments
///
/// * `first` - The step receiving the original input
/// * `second` - The step receiving `first`'s success value
/// * `third` - The step receiving `second`'s success value
#[inline]
pub fn bind_three_async<F1, F2, F3>(
    first: F1,
    second: F2,
    third: F3,
) -> BindThreeAsync<F1, F2, F3> {
    BindThreeAsync { first, second, third }
}

/// An arbitrary-length chain of same-shaped deferred switch functions.
///
/// Created by [`bind_similar_async`].
#[derive(Clone)]
pub struct BindSimilarAsync<F> {
    switches: SwitchVec<F>,
}

impl<A, F> AsyncSwitch<A> for BindSimilarAsync<F>
where
    F: AsyncSwitch<A, Success = A>,
{
    type Success = A;
    type Error = F::Error;

    async fn invoke(&self, input: A) -> Outcome<A, F::Error> {
        let mut current = Outcome::Success(input);
        for switch in &self.switches {
            current = match current {
                Outcome::Success(value) => switch.invoke(value).await,
                failure @ Outcome::Failure(_) => return failure,
            };
        }
        current
    }
}

/// Folds a sequence of same-shaped deferred switch functions into one
/// fail-fast chain.
///
/// The deferred twin of [`bind_similar`](crate::bind_similar): a left-fold
/// with early exit, awaiting each step before the next is scheduled. Distinct
/// `async fn` items need [`AsyncSwitchExt::boxed`](super::AsyncSwitchExt::boxed)
/// erasure to share an element type.
///
/// # Arguments
///
/// * `switches` - The steps, applied in iteration order
#[inline]
pub fn bind_similar_async<F, I>(switches: I) -> BindSimilarAsync<F>
where
    I: IntoIterator<Item = F>,
{
    BindSimilarAsync { switches: switches.into_iter().collect() }
}
