//! Core data types of the railway algebra.
//!
//! The central type is [`Outcome`], the two-track result every switch
//! function produces. The aliases here cover the two erasure levels a
//! homogeneous chain can need: plain fn pointers ([`SwitchFn`]) when every
//! step is a named function, and boxed trait objects ([`BoxedSwitch`]) when
//! closures with distinct types must share one element type.
//!
//! # Examples
//!
//! ```
//! use switch_rail::{bind_similar, succeed, BoxedSwitch, Outcome};
//!
//! let steps: Vec<BoxedSwitch<i32, i32, &str>> = vec![
//!     Box::new(|n| succeed(n + 1)),
//!     Box::new(|n| succeed(n * 2)),
//! ];
//! let chain = bind_similar(steps);
//! assert_eq!(chain(20), Outcome::Success(42));
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod outcome;

pub use outcome::{succeed, will_fail, with_default, Outcome};

use alloc_type::Box;

/// SmallVec-backed sequence of switch functions used by the homogeneous
/// binders.
///
/// Uses inline storage for up to 4 steps so short chains avoid a heap
/// allocation.
pub type SwitchVec<F> = SmallVec<[F; 4]>;

/// Fn-pointer switch function.
///
/// Named functions sharing a signature coerce to this type, which makes
/// arrays of them usable with [`bind_similar`](crate::bind_similar) without
/// boxing.
///
/// # Type Parameters
///
/// * `V` - The input type
/// * `A` - The success value type
/// * `E` - The error type
pub type SwitchFn<V, A, E> = fn(V) -> Outcome<A, E>;

/// Boxed switch function for chains of distinct closure types.
///
/// # Type Parameters
///
/// * `V` - The input type
/// * `A` - The success value type
/// * `E` - The error type
pub type BoxedSwitch<V, A, E> = Box<dyn Fn(V) -> Outcome<A, E>>;
