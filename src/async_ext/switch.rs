//! The deferred switch-function contract.

use core::future::Future;
use core::pin::Pin;

use crate::types::alloc_type::Box;
use crate::types::Outcome;

/// One deferred pipeline step: a unary operation from an input value to an
/// awaitable [`Outcome`].
///
/// The async twin of [`Switch`](crate::traits::Switch), blanket-implemented
/// for every `Fn(V) -> Fut` where `Fut: Future<Output = Outcome<A, E>>`,
/// which covers `async fn` items and closures returning async blocks.
///
/// Combinator values ([`BindTwoAsync`](super::BindTwoAsync),
/// [`OrFallbackAsync`](super::OrFallbackAsync), ...) implement this trait
/// themselves, so deferred chains nest exactly like synchronous ones.
///
/// # Type Parameters
///
/// * `V` - The input value type
///
/// # Examples
///
/// ```
/// use switch_rail::async_ext::AsyncSwitch;
/// use switch_rail::{succeed, will_fail, Outcome};
///
/// async fn min3char(text: String) -> Outcome<String, String> {
///     if text.len() < 3 {
///         return will_fail("At least 3 characters".to_string());
///     }
///     succeed(text)
/// }
///
/// # async fn example() {
/// assert!(min3char.invoke("short text".to_string()).await.is_success());
/// # }
/// ```
pub trait AsyncSwitch<V> {
    /// The value type carried on the success track.
    type Success;
    /// The error type carried on the failure track.
    type Error;

    /// Runs this step on `input`, resolving to success or failure.
    ///
    /// Callers must await the returned future before scheduling any further
    /// step; the binders in this module do exactly that, which is what makes
    /// deferred chains strictly sequential.
    fn invoke(&self, input: V) -> impl Future<Output = Outcome<Self::Success, Self::Error>>;
}

impl<F, Fut, V, A, E> AsyncSwitch<V> for F
where
    F: Fn(V) -> Fut,
    Fut: Future<Output = Outcome<A, E>>,
{
    type Success = A;
    type Error = E;

    #[inline]
    fn invoke(&self, input: V) -> impl Future<Output = Outcome<A, E>> {
        self(input)
    }
}

/// Boxed deferred switch for chains of distinct async callables.
///
/// `async fn` items never share a type (each returns its own opaque future),
/// so homogeneous deferred chains need this erasure where the sync side can
/// often get away with fn pointers.
///
/// # Type Parameters
///
/// * `V` - The input type
/// * `A` - The success value type
/// * `E` - The error type
pub type BoxedAsyncSwitch<V, A, E> =
    Box<dyn Fn(V) -> Pin<Box<dyn Future<Output = Outcome<A, E>>>>>;

/// Extension methods available on every [`AsyncSwitch`].
pub trait AsyncSwitchExt<V>: AsyncSwitch<V> {
    /// Erases this switch behind a [`BoxedAsyncSwitch`] trait object.
    ///
    /// The switch must be `Clone` because each call of the erased closure
    /// moves a copy into the boxed future it returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use switch_rail::async_ext::{bind_similar_async, AsyncSwitch, AsyncSwitchExt, BoxedAsyncSwitch};
    /// use switch_rail::{succeed, Outcome};
    ///
    /// async fn plus_one(n: i32) -> Outcome<i32, String> {
    ///     succeed(n + 1)
    /// }
    ///
    /// async fn double(n: i32) -> Outcome<i32, String> {
    ///     succeed(n * 2)
    /// }
    ///
    /// # async fn example() {
    /// let steps: Vec<BoxedAsyncSwitch<i32, i32, String>> =
    ///     vec![plus_one.boxed(), double.boxed()];
    /// let chain = bind_similar_async(steps);
    /// assert_eq!(chain.invoke(20).await, Outcome::Success(42));
    /// # }
    /// ```
    fn boxed(self) -> BoxedAsyncSwitch<V, Self::Success, Self::Error>
    where
        Self: Sized + Clone + 'static,
        V: 'static,
        Self::Success: 'static,
        Self::Error: 'static,
    {
        Box::new(move |input: V| {
            let switch = self.clone();
            let future: Pin<Box<dyn Future<Output = Outcome<Self::Success, Self::Error>>>> =
                Box::pin(async move { switch.invoke(input).await });
            future
        })
    }
}

impl<V, F> AsyncSwitchExt<V> for F where F: AsyncSwitch<V> {}
