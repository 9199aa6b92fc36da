//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use switch_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Outcome`] and the [`SwitchFn`] / [`BoxedSwitch`] aliases
//! - **Constructors**: [`succeed`], [`will_fail`]
//! - **Combinators**: the binders, branch combinators, [`with_default`],
//!   [`transform_to_switch`], and [`Pipeline`]
//! - **Traits**: [`Switch`], [`SwitchExt`]
//!
//! The deferred family has its own prelude,
//! [`prelude_async`](crate::prelude_async).
//!
//! # Examples
//!
//! ```
//! use switch_rail::prelude::*;
//!
//! let min3: fn(&str) -> Outcome<&str, &str> = |t| if t.len() >= 3 { succeed(t) } else { will_fail("too short") };
//! let shout = |t: &str| succeed::<_, &str>(t.to_uppercase());
//!
//! let validate = bind_two(min3, shout);
//! assert_eq!(validate("abc"), Outcome::Success("ABC".to_string()));
//! ```

pub use crate::bind::{bind_similar, bind_three, bind_two};
pub use crate::branch::{bypass, or_fallback, recover};
pub use crate::lift::transform_to_switch;
pub use crate::pipeline::Pipeline;
pub use crate::traits::{Switch, SwitchExt};
pub use crate::types::{succeed, will_fail, with_default, BoxedSwitch, Outcome, SwitchFn};
