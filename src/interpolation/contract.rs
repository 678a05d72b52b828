//! The interpolator trait and the argument contract shared by every variant.

use crate::error::InterpolationError;
use crate::Result;

/// Trait for interpolators over `f32` component buffers.
///
/// An interpolator computes the value between `from` and `to` at a normalized
/// time ratio and writes it to `output`, one `f32` per component. All
/// implementations validate their arguments and apply the same shortcut
/// policy before any variant-specific work; [`interpolate_checked`] provides
/// both, so custom implementations only supply the computation for ratios
/// strictly inside `(0, 1)`.
pub trait Interpolator: Send + Sync {
    /// Get the name of this interpolator
    fn name(&self) -> &str;

    /// Interpolate between `from` and `to` at `time_ratio`, writing the first
    /// `component_count` components of `output`.
    ///
    /// A ratio of 0 copies `from` and a ratio of 1 copies `to`; every other
    /// ratio invokes the variant's computation. Each buffer must hold at
    /// least `component_count` components, and a missing (`None`) buffer
    /// fails validation.
    fn interpolate(
        &self,
        from: Option<&[f32]>,
        to: Option<&[f32]>,
        component_count: usize,
        time_ratio: f32,
        output: &mut [f32],
    ) -> Result<()>;
}

/// Validate interpolation arguments, apply the shortcut policy, and delegate
/// to `compute` for the variant-specific work.
///
/// Checks run in a fixed order: `time_ratio` inside `[0, 1]` (NaN is
/// rejected), `component_count` at least 1, then `output`, then `from`
/// (unless the ratio is 0) and `to` (unless the ratio is 1). The shortcuts
/// bypass `compute` entirely: ratio 0 and identical `from`/`to` buffers copy
/// `from`, ratio 1 copies `to`, and each shortcut still requires the buffer
/// it copies. `compute` therefore only ever sees a ratio strictly inside
/// `(0, 1)` and buffers sliced to exactly `component_count` components.
pub fn interpolate_checked<F>(
    from: Option<&[f32]>,
    to: Option<&[f32]>,
    component_count: usize,
    time_ratio: f32,
    output: &mut [f32],
    compute: F,
) -> Result<()>
where
    F: FnOnce(&[f32], &[f32], f32, &mut [f32]) -> Result<()>,
{
    if !(0.0..=1.0).contains(&time_ratio) {
        return Err(InterpolationError::invalid_argument(
            "time_ratio",
            format!("{time_ratio} is not in [0, 1]"),
        ));
    }

    if component_count < 1 {
        return Err(InterpolationError::invalid_argument(
            "component_count",
            "must be at least 1",
        ));
    }

    if output.len() < component_count {
        return Err(InterpolationError::invalid_argument(
            "output",
            format!("{} components, {component_count} required", output.len()),
        ));
    }

    if time_ratio != 0.0 {
        require_buffer("from", from, component_count)?;
    }

    if time_ratio != 1.0 {
        require_buffer("to", to, component_count)?;
    }

    if time_ratio == 0.0 || same_buffer(from, to) {
        let from = require_buffer("from", from, component_count)?;
        output[..component_count].copy_from_slice(&from[..component_count]);
        return Ok(());
    }

    if time_ratio == 1.0 {
        let to = require_buffer("to", to, component_count)?;
        output[..component_count].copy_from_slice(&to[..component_count]);
        return Ok(());
    }

    let from = require_buffer("from", from, component_count)?;
    let to = require_buffer("to", to, component_count)?;

    compute(
        &from[..component_count],
        &to[..component_count],
        time_ratio,
        &mut output[..component_count],
    )
}

/// Component-wise linear blend: `output[i] = from[i] * (1 - t) + to[i] * t`.
#[inline]
pub fn linear_blend(from: &[f32], to: &[f32], time_ratio: f32, output: &mut [f32]) {
    for (out, (&a, &b)) in output.iter_mut().zip(from.iter().zip(to)) {
        *out = a * (1.0 - time_ratio) + b * time_ratio;
    }
}

fn require_buffer<'a>(
    name: &'static str,
    buffer: Option<&'a [f32]>,
    component_count: usize,
) -> Result<&'a [f32]> {
    match buffer {
        None => Err(InterpolationError::invalid_argument(name, "missing")),
        Some(buffer) if buffer.len() < component_count => {
            Err(InterpolationError::invalid_argument(
                name,
                format!("{} components, {component_count} required", buffer.len()),
            ))
        }
        Some(buffer) => Ok(buffer),
    }
}

#[inline]
fn same_buffer(a: Option<&[f32]>, b: Option<&[f32]>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.as_ptr() == b.as_ptr() && a.len() == b.len(),
        _ => false,
    }
}
