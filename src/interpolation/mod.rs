//! Interpolation system for animation values
//!
//! Every interpolator implements the [`Interpolator`] trait and shares one
//! argument contract: buffers of `f32` components, a component count, and a
//! normalized time ratio. The primitives live in [`functions`], the easing
//! pipeline in [`easing`] and [`curves`], and weighted blending of several
//! interpolators in [`composite`].

pub mod composite;
pub mod contract;
pub mod curves;
pub mod easing;
pub mod functions;

pub use composite::*;
pub use contract::*;
pub use curves::*;
pub use easing::*;
pub use functions::*;
