//! Lifting total functions into the switch-function shape.

use crate::types::Outcome;

/// Wraps a total function as a switch that always succeeds.
///
/// `total` cannot fail, so the returned switch wraps its output with
/// `Success` unconditionally. The error type is left free and unifies with
/// whatever chain the lifted step participates in.
///
/// # Arguments
///
/// * `total` - Pure transformation (`V -> A`) with no failure mode
///
/// # Examples
///
/// ```
/// use switch_rail::{bind_two, succeed, transform_to_switch, will_fail, Outcome};
///
/// let multiply_by_two = transform_to_switch(|value: i32| value * 2);
/// assert_eq!(multiply_by_two(3), Outcome::<_, &str>::Success(6));
///
/// // Lifted steps slot into binder chains without bespoke wrapping.
/// let positive = |n: i32| if n > 0 { succeed(n) } else { will_fail("not positive") };
/// let chain = bind_two(positive, transform_to_switch(|n: i32| n * 2));
/// assert_eq!(chain(21), Outcome::Success(42));
/// ```
#[inline]
pub fn transform_to_switch<V, A, E, F>(total: F) -> impl Fn(V) -> Outcome<A, E>
where
    F: Fn(V) -> A,
{
    move |input| Outcome::Success(total(input))
}
