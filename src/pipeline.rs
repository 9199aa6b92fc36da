//! Fluent builder for heterogeneous switch chains of any length.
//!
//! [`bind_two`](crate::bind_two) and [`bind_three`](crate::bind_three) cover
//! fixed arities; `Pipeline` covers the rest. Each [`then`](Pipeline::then)
//! narrows the running output type, so arbitrarily long heterogeneous chains
//! type-check without variadic generics.
//!
//! # Examples
//!
//! ```
//! use switch_rail::{succeed, will_fail, Outcome, Pipeline};
//!
//! let min3: fn(&str) -> Outcome<&str, &str> = |t| if t.len() >= 3 { succeed(t) } else { will_fail("too short") };
//! let max20: fn(&str) -> Outcome<&str, &str> = |t| if t.len() <= 20 { succeed(t) } else { will_fail("too long") };
//! let shout = |t: &str| succeed::<_, &str>(t.to_uppercase());
//!
//! let validate = Pipeline::new(min3).then(max20).then(shout).finish();
//! assert_eq!(validate("short text"), Outcome::Success("SHORT TEXT".to_string()));
//! assert_eq!(validate("o"), Outcome::Failure("too short"));
//! ```

use core::marker::PhantomData;

use crate::bind::bind_two;
use crate::traits::Switch;
use crate::types::alloc_type::Box;
use crate::types::{with_default, BoxedSwitch, Outcome};

/// Builder accumulating a switch chain one step at a time.
///
/// Holds the composed switch so far; every combinator consumes the builder
/// and returns a new one wrapping the extended chain. Nothing runs until the
/// composed switch is invoked via [`run`](Pipeline::run) or extracted with
/// one of the `finish*` methods.
///
/// # Type Parameters
///
/// * `V` - The pipeline's input type
/// * `F` - The composed switch so far
pub struct Pipeline<V, F> {
    switch: F,
    _input: PhantomData<fn(V)>,
}

impl<V, F> Pipeline<V, F>
where
    F: Switch<V>,
{
    /// Starts a pipeline from its first step.
    ///
    /// # Examples
    ///
    /// ```
    /// use switch_rail::{succeed, Outcome, Pipeline};
    ///
    /// let pipeline = Pipeline::new(|n: i32| succeed::<_, &str>(n + 1));
    /// assert_eq!(pipeline.run(41), Outcome::Success(42));
    /// ```
    #[inline]
    pub fn new(switch: F) -> Self {
        Self { switch, _input: PhantomData }
    }

    /// Appends `next`, threading this chain's success value into it.
    ///
    /// Short-circuit semantics are exactly [`bind_two`]'s: if the chain so
    /// far fails, `next` is never invoked.
    #[inline]
    pub fn then<G>(self, next: G) -> Pipeline<V, impl Fn(V) -> Outcome<G::Success, G::Error>>
    where
        G: Switch<F::Success, Error = F::Error>,
    {
        Pipeline::new(bind_two(self.switch, next))
    }

    /// Attaches a bypass reacting to this chain's failures.
    ///
    /// See [`bypass`](crate::bypass): `alt` runs on the carried error and may
    /// itself fail.
    #[inline]
    pub fn bypass<Alt>(
        self,
        alt: Alt,
    ) -> Pipeline<V, impl Fn(V) -> Outcome<F::Success, F::Error>>
    where
        Alt: Switch<F::Error, Success = F::Success, Error = F::Error>,
    {
        let switch = self.switch;
        let branch = crate::branch::bypass(alt);
        Pipeline::new(move |input: V| branch(switch.invoke(input)))
    }

    /// Attaches an unconditional recovery for this chain's failures.
    ///
    /// See [`recover`](crate::recover): `alt` is total, so the resulting
    /// pipeline only fails if a later step does.
    #[inline]
    pub fn recover<Alt>(
        self,
        alt: Alt,
    ) -> Pipeline<V, impl Fn(V) -> Outcome<F::Success, F::Error>>
    where
        Alt: Fn(F::Error) -> F::Success,
    {
        let switch = self.switch;
        let branch = crate::branch::recover(alt);
        Pipeline::new(move |input: V| branch(switch.invoke(input)))
    }

    /// Retries the original input through `fallback` when this chain fails.
    ///
    /// See [`or_fallback`](crate::or_fallback): the fallback sees the
    /// untouched input, never the error.
    #[inline]
    pub fn or_fallback<G>(
        self,
        fallback: G,
    ) -> Pipeline<V, impl Fn(V) -> Outcome<F::Success, F::Error>>
    where
        V: Clone,
        G: Switch<V, Success = F::Success, Error = F::Error>,
    {
        Pipeline::new(crate::branch::or_fallback(self.switch, fallback))
    }

    /// Runs the composed chain on `input` without consuming the builder.
    #[inline]
    pub fn run(&self, input: V) -> Outcome<F::Success, F::Error> {
        self.switch.invoke(input)
    }

    /// Completes the pipeline and returns the composed switch.
    #[inline]
    pub fn finish(self) -> F {
        self.switch
    }

    /// Completes the pipeline behind a [`BoxedSwitch`] trait object.
    ///
    /// # Examples
    ///
    /// ```
    /// use switch_rail::{succeed, BoxedSwitch, Pipeline};
    ///
    /// let chain: BoxedSwitch<i32, i32, &str> = Pipeline::new(|n: i32| succeed(n + 1))
    ///     .then(|n: i32| succeed(n * 2))
    ///     .finish_boxed();
    /// assert_eq!(chain(20).success(), Some(42));
    /// ```
    #[inline]
    pub fn finish_boxed(self) -> BoxedSwitch<V, F::Success, F::Error>
    where
        F: 'static,
        V: 'static,
        F::Success: 'static,
        F::Error: 'static,
    {
        let switch = self.switch;
        Box::new(move |input| switch.invoke(input))
    }

    /// Completes the pipeline as a total function, unwrapping with `default`.
    ///
    /// Composes [`with_default`] onto the chain: the returned closure never
    /// fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use switch_rail::{succeed, will_fail, Outcome, Pipeline};
    ///
    /// let step: fn(&str) -> Outcome<&str, &str> =
    ///     |t| t.split_whitespace().next().map_or(will_fail("empty"), succeed);
    /// let first_word = Pipeline::new(step)
    ///     .finish_with_default("(none)");
    /// assert_eq!(first_word("short text"), "short");
    /// assert_eq!(first_word("   "), "(none)");
    /// ```
    #[inline]
    pub fn finish_with_default(self, default: F::Success) -> impl Fn(V) -> F::Success
    where
        F::Success: Clone,
    {
        let switch = self.switch;
        let unwrap = with_default(default);
        move |input| unwrap(switch.invoke(input))
    }
}
