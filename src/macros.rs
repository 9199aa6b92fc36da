//! Variadic composition macros.
//!
//! Rust has no variadic generics, so heterogeneous chains longer than
//! [`bind_three`](crate::bind_three) are generated by macro expansion into
//! nested [`bind_two`](crate::bind_two) calls. [`chain!`](crate::chain)
//! covers the synchronous family, [`chain_async!`](crate::chain_async) the
//! deferred one.
//!
//! # Examples
//!
//! ```
//! use switch_rail::{chain, succeed, will_fail, Outcome};
//!
//! let min3: fn(&str) -> Outcome<&str, &str> = |t| if t.len() >= 3 { succeed(t) } else { will_fail("too short") };
//! let max20: fn(&str) -> Outcome<&str, &str> = |t| if t.len() <= 20 { succeed(t) } else { will_fail("too long") };
//! let trimmed: fn(&str) -> Outcome<&str, &str> = |t| succeed::<_, &str>(t.trim());
//! let shout = |t: &str| succeed::<_, &str>(t.to_uppercase());
//!
//! let validate = chain!(min3, max20, trimmed, shout);
//! assert_eq!(validate(" short text "), Outcome::Success("SHORT TEXT".to_string()));
//! ```

/// Composes two or more switch functions into one fail-fast chain.
///
/// Expands `chain!(f1, f2, ..., fN)` into nested
/// [`bind_two`](crate::bind_two) calls, left-associated, so the result is a
/// single switch with exactly the sequential-binder contract: strict
/// left-to-right evaluation, first failure returned verbatim, later steps
/// skipped.
///
/// # Examples
///
/// ```
/// use switch_rail::{chain, succeed, will_fail, Outcome};
///
/// let parse = |t: &str| t.parse::<i32>().map_or(will_fail("not a number"), succeed);
/// let positive = |n: i32| if n > 0 { succeed(n) } else { will_fail("not positive") };
/// let double = |n: i32| succeed::<_, &str>(n * 2);
///
/// let f = chain!(parse, positive, double);
/// assert_eq!(f("21"), Outcome::Success(42));
/// assert_eq!(f("-3"), Outcome::Failure("not positive"));
/// ```
#[macro_export]
macro_rules! chain {
    ($first:expr, $second:expr $(,)?) => {
        $crate::bind_two($first, $second)
    };
    ($first:expr, $second:expr, $($rest:expr),+ $(,)?) => {
        $crate::chain!($crate::bind_two($first, $second), $($rest),+)
    };
}

/// Composes two or more deferred switch functions into one fail-fast chain.
///
/// The async twin of [`chain!`](crate::chain); expands into nested
/// [`bind_two_async`](crate::async_ext::bind_two_async) calls. Each step is
/// awaited before the next is scheduled.
///
/// Requires the `async` feature.
///
/// # Examples
///
/// ```
/// use switch_rail::{chain_async, succeed, will_fail, Outcome};
/// use switch_rail::async_ext::AsyncSwitch;
///
/// async fn min3(text: String) -> Outcome<String, String> {
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
/// let f = chain_async!(min3, shout);
/// assert_eq!(
///     f.invoke("abc".to_string()).await,
///     Outcome::Success("ABC".to_string()),
/// );
/// # }
/// ```
#[cfg(feature = "async")]
#[macro_export]
macro_rules! chain_async {
    ($first:expr, $second:expr $(,)?) => {
        $crate::async_ext::bind_two_async($first, $second)
    };
    ($first:expr, $second:expr, $($rest:expr),+ $(,)?) => {
        $crate::chain_async!($crate::async_ext::bind_two_async($first, $second), $($rest),+)
    };
}
