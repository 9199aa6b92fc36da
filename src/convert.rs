//! Conversion helpers between [`Outcome`] and `core::result::Result`.
//!
//! These adapters make it straightforward to adopt switch-rail around
//! existing `Result`-returning code: wrap at the edge, compose on the rails,
//! unwrap (or convert back) when leaving the pipeline.
//!
//! # Examples
//!
//! ```
//! use switch_rail::convert::{outcome_to_result, result_to_outcome};
//! use switch_rail::Outcome;
//!
//! let outcome = result_to_outcome("42".parse::<i32>());
//! assert_eq!(outcome.success(), Some(42));
//!
//! let result = outcome_to_result(Outcome::<i32, &str>::Failure("bad"));
//! assert_eq!(result, Err("bad"));
//! ```

use crate::types::Outcome;

impl<A, E> From<Result<A, E>> for Outcome<A, E> {
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<A, E> From<Outcome<A, E>> for Result<A, E> {
    #[inline]
    fn from(outcome: Outcome<A, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

/// Converts a `Result` into an `Outcome`, preserving both channels.
///
/// # Examples
///
/// ```
/// use switch_rail::convert::result_to_outcome;
///
/// let outcome = result_to_outcome::<i32, &str>(Ok(42));
/// assert!(outcome.is_success());
/// ```
#[inline]
pub fn result_to_outcome<A, E>(result: Result<A, E>) -> Outcome<A, E> {
    Outcome::from(result)
}

/// Converts an `Outcome` back into a `Result`, preserving both channels.
///
/// # Examples
///
/// ```
/// use switch_rail::convert::outcome_to_result;
/// use switch_rail::succeed;
///
/// let result = outcome_to_result(succeed::<_, &str>(42));
/// assert_eq!(result, Ok(42));
/// ```
#[inline]
pub fn outcome_to_result<A, E>(outcome: Outcome<A, E>) -> Result<A, E> {
    Result::from(outcome)
}
