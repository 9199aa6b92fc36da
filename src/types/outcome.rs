#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two-track outcome of one fallible pipeline step.
///
/// `Outcome<A, E>` is the value every switch function produces: either a
/// `Success` carrying a value of type `A` or a `Failure` carrying an error of
/// type `E`. The combinators in this crate never inspect `E`; failures ride
/// the error track untouched until a branch combinator explicitly reacts to
/// them.
///
/// Unlike `core::result::Result`, `Outcome` deliberately exposes no `map` /
/// `and_then` style adapters: composition happens through the switch-function
/// combinators ([`bind_two`](crate::bind_two), [`bypass`](crate::bypass), ...)
/// so that every pipeline reads as a railway of named steps.
///
/// # Serde Support
///
/// With the `serde` feature enabled, `Outcome` serializes with lowercase
/// variant tags (`success` / `failure`) when `A` and `E` do.
///
/// # Type Parameters
///
/// * `A` - The success value type
/// * `E` - The error type, opaque to the algebra
///
/// # Examples
///
/// ```
/// use switch_rail::{succeed, will_fail, Outcome};
///
/// let good: Outcome<i32, &str> = succeed(42);
/// assert!(good.is_success());
///
/// let bad: Outcome<i32, &str> = will_fail("out of range");
/// assert!(bad.is_failure());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<A, E> {
    Success(A),
    Failure(E),
}

impl<A, E> Outcome<A, E> {
    /// Returns `true` if the outcome is on the success track.
    ///
    /// # Examples
    ///
    /// ```
    /// use switch_rail::{succeed, Outcome};
    ///
    /// let o: Outcome<i32, &str> = succeed(42);
    /// assert!(o.is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome is on the failure track.
    ///
    /// # Examples
    ///
    /// ```
    /// use switch_rail::{will_fail, Outcome};
    ///
    /// let o: Outcome<i32, &str> = will_fail("nope");
    /// assert!(o.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Extracts the carried value, if any.
    ///
    /// Returns `Some(value)` for `Success`, `None` for `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use switch_rail::{succeed, Outcome};
    ///
    /// let o: Outcome<i32, &str> = succeed(42);
    /// assert_eq!(o.success(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn success(self) -> Option<A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the carried error, if any.
    ///
    /// Returns `Some(error)` for `Failure`, `None` for `Success`.
    ///
    /// # Examples
    ///
    /// ```
    /// use switch_rail::{will_fail, Outcome};
    ///
    /// let o: Outcome<i32, &str> = will_fail("nope");
    /// assert_eq!(o.failure(), Some("nope"));
    /// ```
    #[must_use]
    #[inline]
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Returns the carried value, or `default` if the outcome is a failure.
    ///
    /// Method form of [`with_default`]; total, never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use switch_rail::{succeed, will_fail, Outcome};
    ///
    /// let good: Outcome<&str, &str> = succeed("value");
    /// assert_eq!(good.value_or("default"), "value");
    ///
    /// let bad: Outcome<&str, &str> = will_fail("boom");
    /// assert_eq!(bad.value_or("default"), "default");
    /// ```
    #[must_use]
    #[inline]
    pub fn value_or(self, default: A) -> A {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }
}

/// Places `value` on the success track.
///
/// Always returns `Outcome::Success`; no side effects, no failure mode.
///
/// # Examples
///
/// ```
/// use switch_rail::{succeed, Outcome};
///
/// let o: Outcome<i32, &str> = succeed(42);
/// assert_eq!(o, Outcome::Success(42));
/// ```
#[inline]
pub fn succeed<A, E>(value: A) -> Outcome<A, E> {
    Outcome::Success(value)
}

/// Places `error` on the failure track.
///
/// Always returns `Outcome::Failure`; no side effects.
///
/// # Examples
///
/// ```
/// use switch_rail::{will_fail, Outcome};
///
/// let o: Outcome<i32, &str> = will_fail("out of range");
/// assert_eq!(o, Outcome::Failure("out of range"));
/// ```
#[inline]
pub fn will_fail<A, E>(error: E) -> Outcome<A, E> {
    Outcome::Failure(error)
}

/// Builds an unwrapping function that falls back to `default` on failure.
///
/// The returned closure is total: a `Success` yields its carried value, a
/// `Failure` yields a clone of `default` and discards the error. Typically
/// the last step of a pipeline, after all branching is done.
///
/// # Examples
///
/// ```
/// use switch_rail::{succeed, will_fail, with_default};
///
/// let unwrap = with_default::<_, &str>("default");
/// assert_eq!(unwrap(succeed("many chars")), "many chars");
/// assert_eq!(unwrap(will_fail("At least 3 characters")), "default");
/// ```
#[inline]
pub fn with_default<A, E>(default: A) -> impl Fn(Outcome<A, E>) -> A
where
    A: Clone,
{
    move |outcome| match outcome {
        Outcome::Success(value) => value,
        Outcome::Failure(_) => default.clone(),
    }
}
