//! Animation Interpolator
//!
//! A time-ratio interpolation kernel for animation values. An interpolator
//! computes the intermediate value between two multi-component `f32` values
//! (positions, colors, rotation quaternions) at a normalized time ratio in
//! `[0, 1]`. Easing variants reshape the ratio before blending, and
//! composites blend several interpolators by weight.

pub mod error;
pub mod interpolation;

// Re-export common types for convenience
pub use error::InterpolationError;
pub use interpolation::{
    AccumulationPolicy, BackEasing, BounceEasing, CompositeEntry, CompositeInterpolator,
    EasingBackInterpolator, EasingBounceInterpolator, EasingElasticInterpolator,
    EasingExponentialInterpolator, EasingFunction, EasingInterpolator, EasingMode,
    EasingPowerInterpolator, EasingSineInterpolator, ElasticEasing, ExponentialEasing,
    Interpolator, LinearInterpolator, PowerEasing, SineEasing, SlerpInterpolator,
    StepInterpolator, WeightedSum,
};

/// Interpolation result type
pub type Result<T> = core::result::Result<T, InterpolationError>;
