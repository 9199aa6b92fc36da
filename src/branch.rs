//! Branch combinators: react to the failure track of an already-produced
//! outcome, or fall back to a second switch on the original input.
//!
//! All three pass `Success` through untouched; they differ only in what a
//! `Failure` triggers:
//!
//! - [`bypass`]: run an alternate switch on the carried *error*; the
//!   alternate may re-fail (add context, then stay on the failure track) or
//!   fully recover.
//! - [`recover`]: replace the error with a value that cannot itself fail.
//! - [`or_fallback`]: retry the original *input* through a second switch.
//!
//! A raw binder chain never recovers; these combinators are the only places
//! the algebra leaves the failure track.

use crate::traits::Switch;
use crate::types::Outcome;

/// Reacts to a failure by running `alt` on the carried error.
///
/// The returned closure applies to an already-produced outcome. A success
/// passes through unchanged; a failure hands its error to `alt`, whose
/// outcome is returned verbatim, so a bypass can re-fail with extra context
/// or fully recover.
///
/// # Arguments
///
/// * `alt` - Switch over the error channel (`E -> Outcome<A, E>`)
///
/// # Examples
///
/// ```
/// use switch_rail::{bypass, succeed, will_fail, Outcome};
///
/// let add_context = |message: String| {
///     will_fail::<String, _>(format!("Account 123. {message}"))
/// };
/// let f = bypass(add_context);
///
/// assert_eq!(
///     f(will_fail("At least 3 characters".to_string())),
///     Outcome::Failure("Account 123. At least 3 characters".to_string()),
/// );
/// assert_eq!(
///     f(succeed("a great story".to_string())),
///     Outcome::Success("a great story".to_string()),
/// );
/// ```
#[inline]
pub fn bypass<A, E, Alt>(alt: Alt) -> impl Fn(Outcome<A, E>) -> Outcome<A, E>
where
    Alt: Switch<E, Success = A, Error = E>,
{
    move |outcome| match outcome {
        success @ Outcome::Success(_) => success,
        Outcome::Failure(error) => alt.invoke(error),
    }
}

/// Reacts to a failure by unconditionally replacing it with a success.
///
/// `alt` maps the error to a plain value; its totality is the type-level
/// guarantee that recovery can never itself fail. A success passes through
/// unchanged.
///
/// # Arguments
///
/// * `alt` - Total recovery function (`E -> A`)
///
/// # Examples
///
/// ```
/// use switch_rail::{recover, succeed, will_fail, Outcome};
///
/// let f = recover(|_error: &str| "good");
///
/// assert_eq!(f(will_fail("At least 3 characters")), Outcome::Success("good"));
/// assert_eq!(f(succeed("a great story")), Outcome::Success("a great story"));
/// ```
#[inline]
pub fn recover<A, E, Alt>(alt: Alt) -> impl Fn(Outcome<A, E>) -> Outcome<A, E>
where
    Alt: Fn(E) -> A,
{
    move |outcome| match outcome {
        success @ Outcome::Success(_) => success,
        Outcome::Failure(error) => Outcome::Success(alt(error)),
    }
}

/// Tries `first`; on failure, retries the *original input* through
/// `fallback`.
///
/// Unlike [`bypass`], the fallback never sees `first`'s error: it receives
/// a clone of the untouched input, and its outcome (success or failure) is
/// returned verbatim.
///
/// # Arguments
///
/// * `first` - The preferred switch
/// * `fallback` - The switch retried with the original input on failure
///
/// # Examples
///
/// ```
/// use switch_rail::{or_fallback, succeed, will_fail, Outcome};
///
/// let min3char = |text: String| {
///     if text.len() < 3 {
///         return will_fail("At least 3 characters".to_string());
///     }
///     succeed(text)
/// };
/// let to_uppercase = |text: String| succeed::<_, String>(text.to_uppercase());
///
/// let f = or_fallback(min3char, to_uppercase);
/// assert_eq!(f("z".to_string()), Outcome::Success("Z".to_string()));
/// assert_eq!(f("zebra".to_string()), Outcome::Success("zebra".to_string()));
/// ```
#[inline]
pub fn or_fallback<V, F1, F2>(
    first: F1,
    fallback: F2,
) -> impl Fn(V) -> Outcome<F1::Success, F1::Error>
where
    V: Clone,
    F1: Switch<V>,
    F2: Switch<V, Success = F1::Success, Error = F1::Error>,
{
    move |input: V| match first.invoke(input.clone()) {
        success @ Outcome::Success(_) => success,
        Outcome::Failure(_) => fallback.invoke(input),
    }
}
