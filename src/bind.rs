//! Sequential binders: compose switch functions into one fail-fast chain.
//!
//! All binders share one contract: steps run strictly left to right, each at
//! most once; the first `Failure` is returned verbatim and every later step
//! is skipped; if all steps succeed, the final step's `Success` is returned
//! as-is.
//!
//! [`bind_two`] and [`bind_three`] compose heterogeneous chains where each
//! step may change the value type. [`bind_similar`] folds an arbitrary-length
//! sequence of same-shaped steps. For heterogeneous chains longer than three
//! steps, nest the binders, use the [`chain!`](crate::chain) macro, or build
//! with [`Pipeline`](crate::Pipeline).
//!
//! # Examples
//!
//! ```
//! use switch_rail::{bind_two, succeed, will_fail, Outcome};
//!
//! fn min3char(text: &str) -> Outcome<&str, &'static str> {
//!     if text.len() < 3 {
//!         return will_fail("At least 3 characters");
//!     }
//!     succeed(text)
//! }
//!
//! fn shout(text: &str) -> Outcome<String, &'static str> {
//!     succeed(text.to_uppercase())
//! }
//!
//! let validate = bind_two(min3char, shout);
//! assert_eq!(validate("abc"), Outcome::Success("ABC".to_string()));
//! assert_eq!(validate("o"), Outcome::Failure("At least 3 characters"));
//! ```

use crate::traits::Switch;
use crate::types::{Outcome, SwitchVec};

/// Composes two switch functions into one, threading the success value from
/// the first into the second.
///
/// If `first` fails, its failure is the chain's result and `second` is never
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
/// use switch_rail::{bind_two, succeed, will_fail, Outcome};
///
/// let parse = |text: &str| text.parse::<i32>().map_or_else(
///     |_| will_fail("not a number"),
///     succeed,
/// );
/// let positive = |n: i32| if n > 0 { succeed(n) } else { will_fail("not positive") };
///
/// let step = bind_two(parse, positive);
/// assert_eq!(step("42"), Outcome::Success(42));
/// assert_eq!(step("-1"), Outcome::Failure("not positive"));
/// assert_eq!(step("x"), Outcome::Failure("not a number"));
/// ```
#[inline]
pub fn bind_two<V, F1, F2>(
    first: F1,
    second: F2,
) -> impl Fn(V) -> Outcome<F2::Success, F2::Error>
where
    F1: Switch<V>,
    F2: Switch<F1::Success, Error = F1::Error>,
{
    move |input: V| match first.invoke(input) {
        Outcome::Success(value) => second.invoke(value),
        Outcome::Failure(error) => Outcome::Failure(error),
    }
}

/// Composes three switch functions into one fail-fast chain.
///
/// Equivalent to `bind_two(bind_two(first, second), third)` for all inputs.
///
/// # Arguments
///
/// * `first` - The step receiving the original input
/// * `second` - The step receiving `first`'s success value
/// * `third` - The step receiving `second`'s success value
///
/// # Examples
///
/// ```
/// use switch_rail::{bind_three, succeed, will_fail, Outcome};
///
/// let min3: fn(&str) -> Outcome<&str, &str> = |t| if t.len() >= 3 { succeed(t) } else { will_fail("too short") };
/// let max20: fn(&str) -> Outcome<&str, &str> = |t| if t.len() <= 20 { succeed(t) } else { will_fail("too long") };
/// let shout = |t: &str| succeed::<_, &str>(t.to_uppercase());
///
/// let validate = bind_three(min3, max20, shout);
/// assert_eq!(validate("short text"), Outcome::Success("SHORT TEXT".to_string()));
/// assert_eq!(validate("o"), Outcome::Failure("too short"));
/// ```
#[inline]
pub fn bind_three<V, F1, F2, F3>(
    first: F1,
    second: F2,
    third: F3,
) -> impl Fn(V) -> Outcome<F3::Success, F3::Error>
where
    F1: Switch<V>,
    F2: Switch<F1::Success, Error = F1::Error>,
    F3: Switch<F2::Success, Error = F2::Error>,
{
    move |input: V| match first.invoke(input) {
        Outcome::Success(value) => match second.invoke(value) {
            Outcome::Success(value) => third.invoke(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        },
        Outcome::Failure(error) => Outcome::Failure(error),
    }
}

/// Folds a sequence of same-shaped switch functions into one fail-fast chain.
///
/// Every step maps `A` to `Outcome<A, E>`, so the chain length is a runtime
/// property rather than a type-level one. The fold carries the running value
/// left to right and exits at the first failure; an empty sequence
/// degenerates to the identity switch.
///
/// Named functions coerce to [`SwitchFn`](crate::SwitchFn) pointers, so an
/// array literal of them works directly. Mixed closures need
/// [`BoxedSwitch`](crate::BoxedSwitch) erasure first.
///
/// # Arguments
///
/// * `switches` - The steps, applied in iteration order
///
/// # Examples
///
/// ```
/// use switch_rail::{bind_similar, succeed, will_fail, Outcome};
///
/// fn min3char(text: String) -> Outcome<String, String> {
///     if text.len() < 3 {
///         return will_fail("At least 3 characters".to_string());
///     }
///     succeed(text)
/// }
///
/// fn not_dot(text: String) -> Outcome<String, String> {
///     if text.contains('.') {
///         return will_fail("Should not have any dots".to_string());
///     }
///     succeed(text)
/// }
///
/// let validate = bind_similar([min3char, not_dot]);
/// assert!(validate("short text".to_string()).is_success());
/// assert_eq!(
///     validate("escape with dot .".to_string()),
///     Outcome::Failure("Should not have any dots".to_string()),
/// );
/// ```
#[inline]
pub fn bind_similar<A, E, F, I>(switches: I) -> impl Fn(A) -> Outcome<A, E>
where
    F: Switch<A, Success = A, Error = E>,
    I: IntoIterator<Item = F>,
{
    let switches: SwitchVec<F> = switches.into_iter().collect();
    move |input: A| {
        let mut current = Outcome::Success(input);
        for switch in &switches {
            current = match current {
                Outcome::Success(value) => switch.invoke(value),
                failure @ Outcome::Failure(_) => return failure,
            };
        }
        current
    }
}
