//! Railway-oriented composition of fallible pipeline steps.
//!
//! switch-rail models each step of a validation or transformation pipeline
//! as a *switch function*: a unary operation from an input value to an
//! [`Outcome`], either `Success` carrying the next value or `Failure`
//! carrying an error. The combinators compose switches into chains that
//! short-circuit on the first failure, branch on the failure track, fall
//! back to alternate steps, and finally unwrap to a plain value.
//!
//! Every combinator has a deferred twin in [`async_ext`] (behind the `async`
//! feature) with identical decision rules, awaiting one step at a time.
//!
//! # Examples
//!
//! ## A validation chain
//!
//! ```
//! use switch_rail::{bind_three, succeed, will_fail, Outcome};
//!
//! fn min3char(text: &str) -> Outcome<&str, &'static str> {
//!     if text.len() < 3 {
//!         return will_fail("At least 3 characters");
//!     }
//!     succeed(text)
//! }
//!
//! fn max20char(text: &str) -> Outcome<&str, &'static str> {
//!     if text.len() > 20 {
//!         return will_fail("Not more than 20 characters");
//!     }
//!     succeed(text)
//! }
//!
//! fn not_dot(text: &str) -> Outcome<&str, &'static str> {
//!     if text.contains('.') {
//!         return will_fail("Should not have any dots");
//!     }
//!     succeed(text)
//! }
//!
//! let validate = bind_three(min3char, max20char, not_dot);
//! assert_eq!(validate("short text"), Outcome::Success("short text"));
//! assert_eq!(validate("o"), Outcome::Failure("At least 3 characters"));
//! ```
//!
//! ## Branching and unwrapping
//!
//! ```
//! use switch_rail::{or_fallback, succeed, will_fail, with_default};
//!
//! let min3char = |text: String| {
//!     if text.len() < 3 {
//!         return will_fail("At least 3 characters".to_string());
//!     }
//!     succeed(text)
//! };
//! let to_uppercase = |text: String| succeed::<_, String>(text.to_uppercase());
//!
//! let f = or_fallback(min3char, to_uppercase);
//! let unwrap = with_default::<_, String>("default".to_string());
//! assert_eq!(unwrap(f("z".to_string())), "Z");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Sequential binders composing fail-fast chains
pub mod bind;
/// Branch combinators reacting to the failure track
pub mod branch;
/// Conversions between `Outcome` and `core::result::Result`
pub mod convert;
/// Lifting total functions into the switch shape
pub mod lift;
/// Variadic composition macros
pub mod macros;
/// Fluent builder for heterogeneous chains
pub mod pipeline;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The switch-function contracts
pub mod traits;
/// Core data types of the algebra
pub mod types;

/// Deferred twins of every combinator (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - deferred combinators in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tracing instrumentation for pipeline steps (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use bind::{bind_similar, bind_three, bind_two};
pub use branch::{bypass, or_fallback, recover};
pub use convert::{outcome_to_result, result_to_outcome};
pub use lift::transform_to_switch;
pub use pipeline::Pipeline;
pub use traits::{Switch, SwitchExt};
pub use types::{succeed, will_fail, with_default, BoxedSwitch, Outcome, SwitchFn, SwitchVec};
