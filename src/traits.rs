use core::fmt::Debug;
use num_traits::Float;

/// Trait for the floating-point element types accepted by every routine.
///
/// Blanket-implemented for all types satisfying the bounds, which in
/// practice means `f32` and `f64`.
pub trait FloatScalar: Copy + PartialEq + PartialOrd + Debug + Float {}

impl<T: Copy + PartialEq + PartialOrd + Debug + Float> FloatScalar for T {}

/// `2` built from `one()`, avoiding a fallible cast.
#[inline]
pub(crate) fn two<T: FloatScalar>() -> T {
    T::one() + T::one()
}

/// `3` built from `one()`.
#[inline]
pub(crate) fn three<T: FloatScalar>() -> T {
    two::<T>() + T::one()
}

/// `6` built from `one()`.
#[cfg(feature = "ode")]
#[inline]
pub(crate) fn six<T: FloatScalar>() -> T {
    three::<T>() + three::<T>()
}
