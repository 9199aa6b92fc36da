//! The switch-function contract implemented by every synchronous pipeline step.

use crate::types::alloc_type::Box;
use crate::types::{BoxedSwitch, Outcome};

/// One synchronous pipeline step: a unary operation from an input value to an
/// [`Outcome`].
///
/// Blanket-implemented for every `Fn(V) -> Outcome<A, E>`, so plain closures
/// and fn items are switches without any ceremony. The combinators in
/// [`bind`](crate::bind) and [`branch`](crate::branch) both consume and
/// produce switches, which is what lets chains nest
/// (`bind_two(bind_two(f1, f2), f3)` is well-typed).
///
/// Implementations must be pure with respect to the contract: one invocation
/// per input, returning a fully classified `Outcome`. A switch that panics
/// instead of returning `Failure` propagates that panic to the caller
/// unchanged; the algebra performs no panic-to-outcome translation.
///
/// # Type Parameters
///
/// * `V` - The input value type
///
/// # Examples
///
/// ```
/// use switch_rail::{succeed, will_fail, Outcome, Switch};
///
/// fn min3char(text: &str) -> Outcome<&str, &'static str> {
///     if text.len() < 3 {
///         return will_fail("At least 3 characters");
///     }
///     succeed(text)
/// }
///
/// assert!(min3char.invoke("short text").is_success());
/// assert!(min3char.invoke("o").is_failure());
/// ```
pub trait Switch<V> {
    /// The value type carried on the success track.
    type Success;
    /// The error type carried on the failure track.
    type Error;

    /// Runs this step on `input`, classifying it as success or failure.
    fn invoke(&self, input: V) -> Outcome<Self::Success, Self::Error>;
}

impl<F, V, A, E> Switch<V> for F
where
    F: Fn(V) -> Outcome<A, E>,
{
    type Success = A;
    type Error = E;

    #[inline]
    fn invoke(&self, input: V) -> Outcome<A, E> {
        self(input)
    }
}

/// Extension methods available on every [`Switch`].
pub trait SwitchExt<V>: Switch<V> {
    /// Erases this switch behind a [`BoxedSwitch`] trait object.
    ///
    /// Useful when distinct closure types must share one element type, e.g.
    /// to feed [`bind_similar`](crate::bind_similar).
    ///
    /// # Examples
    ///
    /// ```
    /// use switch_rail::{succeed, BoxedSwitch, SwitchExt};
    ///
    /// let double = |n: i32| succeed::<_, &str>(n * 2);
    /// let boxed: BoxedSwitch<i32, i32, &str> = double.boxed();
    /// assert_eq!(boxed(21).success(), Some(42));
    /// ```
    fn boxed(self) -> BoxedSwitch<V, Self::Success, Self::Error>
    where
        Self: Sized + 'static,
        V: 'static,
        Self::Success: 'static,
        Self::Error: 'static,
    {
        Box::new(move |input| self.invoke(input))
    }
}

impl<V, F> SwitchExt<V> for F where F: Switch<V> {}
