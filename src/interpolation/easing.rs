//! The easing pipeline: a mode transform wrapped around a pluggable curve.

use serde::{Deserialize, Serialize};

use crate::interpolation::contract::{interpolate_checked, linear_blend, Interpolator};
use crate::Result;

/// Which side of the timespan an easing curve shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EasingMode {
    /// The curve shapes the start of the timespan
    In,
    /// The curve shapes the end of the timespan (the default)
    #[default]
    Out,
    /// The curve shapes both halves
    InOut,
}

impl EasingMode {
    /// Get the name of this easing mode
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "in_out",
        }
    }
}

/// A raw easing curve over the unit interval.
///
/// Implementations are expected to map 0 to 0 and 1 to 1, though this is not
/// enforced; the mode transform in [`EasingInterpolator`] takes care of
/// orienting the curve within the timespan.
pub trait EasingFunction: Send + Sync {
    /// Get the name of this easing curve
    fn name(&self) -> &str;

    /// Evaluate the curve at `time_ratio`
    fn ease(&self, time_ratio: f32) -> f32;
}

/// Interpolator that reshapes the time ratio with an easing curve and then
/// blends linearly.
///
/// The curve can be any [`EasingFunction`]; the six standard curves from
/// [`curves`](crate::interpolation::curves) come with ready-made aliases such
/// as [`EasingPowerInterpolator`](crate::interpolation::EasingPowerInterpolator).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EasingInterpolator<F> {
    easing_mode: EasingMode,
    function: F,
}

impl<F: EasingFunction> EasingInterpolator<F> {
    /// Wrap an easing curve with the default mode, [`EasingMode::Out`].
    pub fn with_function(function: F) -> Self {
        Self {
            easing_mode: EasingMode::default(),
            function,
        }
    }

    /// Wrap an easing curve with an explicit easing mode.
    pub fn with_function_and_mode(function: F, easing_mode: EasingMode) -> Self {
        Self {
            easing_mode,
            function,
        }
    }

    /// Get the easing mode. The default value is [`EasingMode::Out`].
    pub fn easing_mode(&self) -> EasingMode {
        self.easing_mode
    }

    /// Set the easing mode.
    pub fn set_easing_mode(&mut self, easing_mode: EasingMode) {
        self.easing_mode = easing_mode;
    }

    /// Get the easing curve.
    pub fn function(&self) -> &F {
        &self.function
    }

    /// Get the easing curve for mutation, e.g. to retune its parameters.
    pub fn function_mut(&mut self) -> &mut F {
        &mut self.function
    }
}

impl<F: EasingFunction> Interpolator for EasingInterpolator<F> {
    fn name(&self) -> &str {
        self.function.name()
    }

    fn interpolate(
        &self,
        from: Option<&[f32]>,
        to: Option<&[f32]>,
        component_count: usize,
        time_ratio: f32,
        output: &mut [f32],
    ) -> Result<()> {
        interpolate_checked(
            from,
            to,
            component_count,
            time_ratio,
            output,
            |from, to, t, output| {
                let eased = eased_ratio(self.easing_mode, &self.function, t);
                linear_blend(from, to, eased, output);
                Ok(())
            },
        )
    }
}

/// Apply the easing mode transform, yielding the ratio fed to the blend.
///
/// The second `InOut` arm computes `1 - ease(2(1 - t)) * 0.5 + 0.5`. For
/// curves that map 0 to 0 this jumps from 0.5 to 1.0 at the midpoint rather
/// than mirroring the first half.
fn eased_ratio<F: EasingFunction>(easing_mode: EasingMode, function: &F, time_ratio: f32) -> f32 {
    match easing_mode {
        EasingMode::In => function.ease(time_ratio),
        EasingMode::Out => 1.0 - function.ease(1.0 - time_ratio),
        EasingMode::InOut if time_ratio < 0.5 => function.ease(time_ratio * 2.0) * 0.5,
        EasingMode::InOut => 1.0 - function.ease((1.0 - time_ratio) * 2.0) * 0.5 + 0.5,
    }
}
