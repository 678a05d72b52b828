//! Primitive interpolators: linear, step, and quaternion SLERP.

use crate::error::InterpolationError;
use crate::interpolation::contract::{interpolate_checked, linear_blend, Interpolator};
use crate::Result;

/// Linear interpolator: `output[i] = from[i] * (1 - t) + to[i] * t`.
#[derive(Debug, Clone)]
pub struct LinearInterpolator;

impl Interpolator for LinearInterpolator {
    fn name(&self) -> &str {
        "linear"
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
                linear_blend(from, to, t, output);
                Ok(())
            },
        )
    }
}

/// Step interpolator: holds `from` until the ratio reaches 1.
#[derive(Debug, Clone)]
pub struct StepInterpolator;

impl Interpolator for StepInterpolator {
    fn name(&self) -> &str {
        "step"
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
            |from, _to, _t, output| {
                output.copy_from_slice(from);
                Ok(())
            },
        )
    }
}

/// Quaternion spherical linear interpolation over `(x, y, z, w)` components.
///
/// Requires a component count of at least 4. Only the first four components
/// take part; anything past them is left untouched by the computation.
#[derive(Debug, Clone)]
pub struct SlerpInterpolator;

impl Interpolator for SlerpInterpolator {
    fn name(&self) -> &str {
        "slerp"
    }

    fn interpolate(
        &self,
        from: Option<&[f32]>,
        to: Option<&[f32]>,
        component_count: usize,
        time_ratio: f32,
        output: &mut [f32],
    ) -> Result<()> {
        interpolate_checked(from, to, component_count, time_ratio, output, slerp_quat)
    }
}

/// Above this, the arc is too small for `sin(omega)` to divide by; the
/// endpoints blend linearly instead.
const SLERP_LINEAR_THRESHOLD: f32 = 0.9999;

fn slerp_quat(from: &[f32], to: &[f32], time_ratio: f32, output: &mut [f32]) -> Result<()> {
    if from.len() < 4 {
        return Err(InterpolationError::invalid_argument(
            "component_count",
            "must be at least 4 for quaternion interpolation",
        ));
    }

    let x0 = from[0];
    let y0 = from[1];
    let z0 = from[2];
    let w0 = from[3];
    let mut x1 = to[0];
    let mut y1 = to[1];
    let mut z1 = to[2];
    let mut w1 = to[3];

    let mut cos_omega = w0 * w1 + x0 * x1 + y0 * y1 + z0 * z1;

    // Negate one end so the blend takes the shorter arc.
    if cos_omega < 0.0 {
        x1 = -x1;
        y1 = -y1;
        z1 = -z1;
        w1 = -w1;
        cos_omega = -cos_omega;
    }

    let k0;
    let k1;

    if SLERP_LINEAR_THRESHOLD < cos_omega {
        k0 = 1.0 - time_ratio;
        k1 = time_ratio;
    } else {
        let sin_omega = f64::from(1.0 - cos_omega * cos_omega).sqrt();
        let omega = sin_omega.atan2(f64::from(cos_omega));
        let one_over_sin_omega = 1.0 / sin_omega;

        k0 = ((f64::from(1.0 - time_ratio) * omega).sin() * one_over_sin_omega) as f32;
        k1 = ((f64::from(time_ratio) * omega).sin() * one_over_sin_omega) as f32;
    }

    output[0] = x0 * k0 + x1 * k1;
    output[1] = y0 * k0 + y1 * k1;
    output[2] = z0 * k0 + z1 * k1;
    output[3] = w0 * k0 + w1 * k1;

    Ok(())
}
