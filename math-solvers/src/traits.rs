//! Core traits for scalar root finding
//!
//! This module defines the abstractions shared by every root finder:
//! - [`RealScalar`]: Trait for the real floating-point types the solvers work in
//! - [`ScalarFunction`]: Trait for functions f(x) whose roots are sought
//! - [`RootFinder`]: Trait for methods that locate a root from an initial guess

use crate::error::Result;
use crate::roots::RootSolution;
use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::Debug;

/// Trait for real scalar types usable by the root finders.
///
/// Provided for `f64` (the default for physical problems) and `f32`.
/// Constants come from [`FromPrimitive::from_f64`].
pub trait RealScalar:
    Float + NumAssign + FromPrimitive + ToPrimitive + Debug + Send + Sync + 'static
{
    /// Convert to `f64` for logging and error reporting
    fn to_f64_lossy(self) -> f64;
}

impl RealScalar for f64 {
    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }
}

impl RealScalar for f32 {
    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self as f64
    }
}

/// A scalar function f(x), optionally with an analytic derivative.
///
/// Every `Fn(T) -> T` closure is a `ScalarFunction` without a derivative;
/// wrap it in [`WithDerivative`] to supply f'(x).
pub trait ScalarFunction<T: RealScalar> {
    /// Evaluate f(x)
    fn value(&self, x: T) -> T;

    /// Evaluate f'(x), if known analytically
    fn derivative(&self, _x: T) -> Option<T> {
        None
    }
}

impl<T, F> ScalarFunction<T> for F
where
    T: RealScalar,
    F: Fn(T) -> T,
{
    #[inline]
    fn value(&self, x: T) -> T {
        self(x)
    }
}

/// A function paired with its analytic derivative.
#[derive(Debug, Clone, Copy)]
pub struct WithDerivative<F, D> {
    /// f(x)
    pub function: F,
    /// f'(x)
    pub derivative: D,
}

impl<F, D> WithDerivative<F, D> {
    /// Pair `function` with `derivative`
    pub fn new(function: F, derivative: D) -> Self {
        Self {
            function,
            derivative,
        }
    }
}

impl<T, F, D> ScalarFunction<T> for WithDerivative<F, D>
where
    T: RealScalar,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
{
    #[inline]
    fn value(&self, x: T) -> T {
        (self.function)(x)
    }

    #[inline]
    fn derivative(&self, x: T) -> Option<T> {
        Some((self.derivative)(x))
    }
}

/// Trait for methods that find a root of a scalar function.
///
/// The numerical method is an implementation detail behind this interface:
/// callers supply f and an initial guess and get back either a root or a
/// [`RootError`](crate::RootError) describing why the iteration diverged.
pub trait RootFinder<T: RealScalar> {
    /// Search for x with f(x) = 0 starting from `x0`
    fn find_root<F>(&self, f: &F, x0: T) -> Result<RootSolution<T>>
    where
        F: ScalarFunction<T> + ?Sized;
}
