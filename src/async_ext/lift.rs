//! Lifting total async functions into the deferred switch shape.

use core::future::Future;
use core::marker::PhantomData;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::types::Outcome;

use super::switch::AsyncSwitch;

pin_project! {
    /// Future that resolves a total computation and places it on the success
    /// track.
    ///
    /// Produced by [`AsyncTransform::invoke`]; polls the wrapped future to
    /// completion and wraps its output with `Outcome::Success`. The error
    /// type parameter only fixes which chains the lifted step unifies with;
    /// no failure is ever constructed.
    ///
    /// # Cancel Safety
    ///
    /// `SucceedFuture` is cancel-safe if the inner future is cancel-safe; it
    /// holds no state of its own.
    #[must_use = "futures do nothing unless polled"]
    pub struct SucceedFuture<Fut, E> {
        #[pin]
        future: Fut,
        _error: PhantomData<fn() -> E>,
    }
}

impl<Fut, E> SucceedFuture<Fut, E> {
    #[inline]
    pub(crate) fn new(future: Fut) -> Self {
        Self { future, _error: PhantomData }
    }
}

impl<Fut, A, E> Future for SucceedFuture<Fut, E>
where
    Fut: Future<Output = A>,
{
    type Output = Outcome<A, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().future.poll(cx).map(Outcome::Success)
    }
}

impl<Fut, A, E> FusedFuture for SucceedFuture<Fut, E>
where
    Fut: FusedFuture<Output = A>,
{
    fn is_terminated(&self) -> bool {
        self.future.is_terminated()
    }
}

/// A total async function lifted into the deferred switch shape.
///
/// Created by [`transform_to_async_switch`]; implements
/// [`AsyncSwitch`] by awaiting the wrapped function and wrapping its output
/// with `Success`.
pub struct AsyncTransform<F, E> {
    total: F,
    _error: PhantomData<fn() -> E>,
}

impl<V, F, Fut, A, E> AsyncSwitch<V> for AsyncTransform<F, E>
where
    F: Fn(V) -> Fut,
    Fut: Future<Output = A>,
{
    type Success = A;
    type Error = E;

    #[inline]
    fn invoke(&self, input: V) -> impl Future<Output = Outcome<A, E>> {
        SucceedFuture::new((self.total)(input))
    }
}

/// Wraps a total async function as a deferred switch that always succeeds.
///
/// The deferred twin of [`transform_to_switch`](crate::transform_to_switch):
/// the wrapped function's future is awaited, then its output is placed on
/// the success track.
///
/// # Arguments
///
/// * `total` - Async transformation with no failure mode
///
/// # Examples
///
/// ```
/// use switch_rail::async_ext::{transform_to_async_switch, AsyncSwitch};
/// use switch_rail::Outcome;
///
/// async fn multiply_by_two(value: i32) -> i32 {
///     value * 2
/// }
///
/// # async fn example() {
/// let f = transform_to_async_switch::<_, &str>(multiply_by_two);
/// assert_eq!(f.invoke(3).await, Outcome::Success(6));
/// # }
/// ```
#[inline]
pub fn transform_to_async_switch<F, E>(total: F) -> AsyncTransform<F, E> {
    AsyncTransform { total, _error: PhantomData }
}
