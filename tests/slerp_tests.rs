//! Integration tests for quaternion SLERP.

use std::f32::consts::{FRAC_1_SQRT_2, FRAC_PI_8};

use animation_interpolator::{Interpolator, SlerpInterpolator};
use approx::assert_abs_diff_eq;

const IDENTITY: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// 90 degrees about Z, as (x, y, z, w).
const QUARTER_Z: [f32; 4] = [0.0, 0.0, FRAC_1_SQRT_2, FRAC_1_SQRT_2];

#[test]
fn test_midpoint_of_quarter_rotation() {
    let mut output = [0.0f32; 4];
    SlerpInterpolator
        .interpolate(Some(&IDENTITY), Some(&QUARTER_Z), 4, 0.5, &mut output)
        .unwrap();

    // Halfway between identity and 90° about Z is 45° about Z.
    assert_abs_diff_eq!(output[0], 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(output[1], 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(output[2], FRAC_PI_8.sin(), epsilon = 1e-5);
    assert_abs_diff_eq!(output[3], FRAC_PI_8.cos(), epsilon = 1e-5);
}

#[test]
fn test_result_stays_unit_length() {
    for t in [0.1f32, 0.3, 0.5, 0.7, 0.9] {
        let mut output = [0.0f32; 4];
        SlerpInterpolator
            .interpolate(Some(&IDENTITY), Some(&QUARTER_Z), 4, t, &mut output)
            .unwrap();

        let norm = output.iter().map(|c| c * c).sum::<f32>();
        assert_abs_diff_eq!(norm, 1.0, epsilon = 1e-5);
    }
}

#[test]
fn test_opposite_sign_quaternions_do_not_produce_nan() {
    // [0,0,0,-1] is the same rotation as the identity with the opposite
    // sign; the dot product is -1 and the shorter-arc negation kicks in.
    let to = [0.0f32, 0.0, 0.0, -1.0];
    let mut output = [0.0f32; 4];

    SlerpInterpolator
        .interpolate(Some(&IDENTITY), Some(&to), 4, 0.5, &mut output)
        .unwrap();

    assert!(output.iter().all(|c| c.is_finite()));
    assert_abs_diff_eq!(output[3], 1.0, epsilon = 1e-6);
}

#[test]
fn test_hemisphere_flip_matches_unflipped_result() {
    let negated = QUARTER_Z.map(|c| -c);

    let mut straight = [0.0f32; 4];
    let mut flipped = [0.0f32; 4];
    SlerpInterpolator
        .interpolate(Some(&IDENTITY), Some(&QUARTER_Z), 4, 0.3, &mut straight)
        .unwrap();
    SlerpInterpolator
        .interpolate(Some(&IDENTITY), Some(&negated), 4, 0.3, &mut flipped)
        .unwrap();

    for i in 0..4 {
        assert_abs_diff_eq!(straight[i], flipped[i], epsilon = 1e-6);
    }
}

#[test]
fn test_near_parallel_quaternions_blend_linearly() {
    // The dot product exceeds 0.9999, so the coefficients fall back to
    // 1 - t and t instead of dividing by a vanishing sin(omega).
    let to = [0.001f32, 0.0, 0.0, 0.999_999_5];
    let mut output = [0.0f32; 4];

    SlerpInterpolator
        .interpolate(Some(&IDENTITY), Some(&to), 4, 0.25, &mut output)
        .unwrap();

    assert!(output.iter().all(|c| c.is_finite()));
    assert_abs_diff_eq!(output[0], 0.00025, epsilon = 1e-7);
    assert_abs_diff_eq!(output[3], 1.0, epsilon = 1e-4);
}

#[test]
fn test_component_count_below_four_rejected() {
    let from = [0.0f32, 0.0, 0.0];
    let to = [1.0f32, 0.0, 0.0];
    let mut output = [0.0f32; 3];

    let err = SlerpInterpolator
        .interpolate(Some(&from), Some(&to), 3, 0.5, &mut output)
        .unwrap_err();
    assert_eq!(err.argument_name(), Some("component_count"));
}

#[test]
fn test_components_past_the_quaternion_untouched() {
    let from = [0.0f32, 0.0, 0.0, 1.0, 42.0];
    let to = [0.0f32, 0.0, FRAC_1_SQRT_2, FRAC_1_SQRT_2, 17.0];
    let mut output = [9.0f32; 5];

    // The computation writes the four quaternion components only.
    SlerpInterpolator
        .interpolate(Some(&from), Some(&to), 5, 0.5, &mut output)
        .unwrap();
    assert_eq!(output[4], 9.0);

    // The ratio-0 shortcut copies the whole component count instead.
    SlerpInterpolator
        .interpolate(Some(&from), Some(&to), 5, 0.0, &mut output)
        .unwrap();
    assert_eq!(output[4], 42.0);
}
