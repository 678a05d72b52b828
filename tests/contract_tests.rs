//! Integration tests for the argument contract and shortcut policy shared by
//! every interpolator.

use animation_interpolator::interpolation::interpolate_checked;
use animation_interpolator::{
    CompositeInterpolator, EasingPowerInterpolator, Interpolator, LinearInterpolator,
    SlerpInterpolator, StepInterpolator,
};

/// One of each interpolator family, for contract checks that must hold
/// across all of them.
fn variants() -> Vec<Box<dyn Interpolator>> {
    let mut composite = CompositeInterpolator::new();
    composite.add(Box::new(LinearInterpolator), 0.5);
    composite.add(Box::new(StepInterpolator), 0.5);

    vec![
        Box::new(LinearInterpolator),
        Box::new(StepInterpolator),
        Box::new(SlerpInterpolator),
        Box::new(EasingPowerInterpolator::new()),
        Box::new(composite),
    ]
}

#[test]
fn test_zero_ratio_copies_from() {
    let from = [1.0f32, 2.0, 3.0, 4.0];
    let to = [5.0f32, 6.0, 7.0, 8.0];

    for interpolator in variants() {
        let mut output = [0.0f32; 4];
        interpolator
            .interpolate(Some(&from), Some(&to), 4, 0.0, &mut output)
            .unwrap();
        assert_eq!(output, from, "{}", interpolator.name());
    }
}

#[test]
fn test_one_ratio_copies_to() {
    let from = [1.0f32, 2.0, 3.0, 4.0];
    let to = [5.0f32, 6.0, 7.0, 8.0];

    for interpolator in variants() {
        let mut output = [0.0f32; 4];
        interpolator
            .interpolate(Some(&from), Some(&to), 4, 1.0, &mut output)
            .unwrap();
        assert_eq!(output, to, "{}", interpolator.name());
    }
}

#[test]
fn test_same_buffer_copies_from_at_any_ratio() {
    // The same-buffer shortcut runs before any computation, so even the
    // SLERP variant returns the buffer untouched.
    let buffer = [1.0f32, 2.0, 3.0, 4.0];

    for interpolator in variants() {
        let mut output = [0.0f32; 4];
        interpolator
            .interpolate(Some(&buffer), Some(&buffer), 4, 0.5, &mut output)
            .unwrap();
        assert_eq!(output, buffer, "{}", interpolator.name());
    }
}

#[test]
fn test_same_buffer_skips_compute() {
    let buffer = [3.0f32, 4.0];
    let mut output = [0.0f32; 2];

    interpolate_checked(Some(&buffer), Some(&buffer), 2, 0.5, &mut output, |_, _, _, _| {
        unreachable!("compute must not run for a shared buffer")
    })
    .unwrap();
    assert_eq!(output, buffer);
}

#[test]
fn test_equal_but_distinct_buffers_still_compute() {
    // The shortcut keys on buffer identity, not contents.
    let from = [0.0f32];
    let to = [0.0f32];
    let mut output = [9.0f32];

    interpolate_checked(Some(&from), Some(&to), 1, 0.5, &mut output, |_, _, _, output| {
        output[0] = 42.0;
        Ok(())
    })
    .unwrap();
    assert_eq!(output, [42.0]);
}

#[test]
fn test_ratio_out_of_range_rejected() {
    let from = [0.0f32];
    let to = [1.0f32];

    for bad in [-0.1f32, 1.1, f32::NAN] {
        let mut output = [0.0f32];
        let err = LinearInterpolator
            .interpolate(Some(&from), Some(&to), 1, bad, &mut output)
            .unwrap_err();
        assert_eq!(err.argument_name(), Some("time_ratio"), "ratio {bad}");
    }
}

#[test]
fn test_validation_order() {
    let mut output = [0.0f32; 2];

    // The ratio is checked first, whatever else is wrong.
    let err = LinearInterpolator
        .interpolate(None, None, 0, 2.0, &mut [])
        .unwrap_err();
    assert_eq!(err.argument_name(), Some("time_ratio"));

    // Then the component count.
    let err = LinearInterpolator
        .interpolate(None, None, 0, 0.5, &mut [])
        .unwrap_err();
    assert_eq!(err.argument_name(), Some("component_count"));

    // Then the output buffer.
    let err = LinearInterpolator
        .interpolate(None, None, 2, 0.5, &mut [0.0])
        .unwrap_err();
    assert_eq!(err.argument_name(), Some("output"));

    // Then `from`, then `to`.
    let err = LinearInterpolator
        .interpolate(None, None, 2, 0.5, &mut output)
        .unwrap_err();
    assert_eq!(err.argument_name(), Some("from"));

    let err = LinearInterpolator
        .interpolate(Some(&[1.0, 2.0]), None, 2, 0.5, &mut output)
        .unwrap_err();
    assert_eq!(err.argument_name(), Some("to"));
}

#[test]
fn test_undersized_buffers_rejected() {
    let mut output = [0.0f32; 4];

    let err = LinearInterpolator
        .interpolate(Some(&[1.0]), Some(&[5.0, 6.0]), 2, 0.5, &mut output)
        .unwrap_err();
    assert_eq!(err.argument_name(), Some("from"));

    let err = LinearInterpolator
        .interpolate(Some(&[1.0, 2.0]), Some(&[5.0]), 2, 0.5, &mut output)
        .unwrap_err();
    assert_eq!(err.argument_name(), Some("to"));
}

#[test]
fn test_missing_buffer_rejected_at_boundary_ratios() {
    // Ratio 0 skips the conditional `from` check but the copy shortcut still
    // requires the buffer; same for `to` at ratio 1.
    let mut output = [0.0f32];

    let err = LinearInterpolator
        .interpolate(None, Some(&[1.0]), 1, 0.0, &mut output)
        .unwrap_err();
    assert_eq!(err.argument_name(), Some("from"));

    let err = LinearInterpolator
        .interpolate(Some(&[1.0]), None, 1, 1.0, &mut output)
        .unwrap_err();
    assert_eq!(err.argument_name(), Some("to"));
}

#[test]
fn test_buffers_required_even_when_unread() {
    // At ratio 0 only `from` is ever read, but the contract still demands a
    // valid `to`, and vice versa at ratio 1.
    let mut output = [0.0f32];

    let err = LinearInterpolator
        .interpolate(Some(&[1.0]), None, 1, 0.0, &mut output)
        .unwrap_err();
    assert_eq!(err.argument_name(), Some("to"));

    let err = LinearInterpolator
        .interpolate(None, Some(&[1.0]), 1, 1.0, &mut output)
        .unwrap_err();
    assert_eq!(err.argument_name(), Some("from"));
}

#[test]
fn test_linear_quarter_ratio() {
    let mut output = [0.0f32];
    LinearInterpolator
        .interpolate(Some(&[2.0]), Some(&[6.0]), 1, 0.25, &mut output)
        .unwrap();
    assert_eq!(output, [3.0]);
}

#[test]
fn test_linear_multi_component() {
    let from = [0.0f32, 10.0, -4.0];
    let to = [1.0f32, 20.0, 4.0];
    let mut output = [0.0f32; 3];

    LinearInterpolator
        .interpolate(Some(&from), Some(&to), 3, 0.5, &mut output)
        .unwrap();
    assert_eq!(output, [0.5, 15.0, 0.0]);
}

#[test]
fn test_step_holds_from_until_the_end() {
    let from = [1.0f32, 2.0];
    let to = [9.0f32, 9.0];

    for t in [0.1f32, 0.5, 0.99] {
        let mut output = [0.0f32; 2];
        StepInterpolator
            .interpolate(Some(&from), Some(&to), 2, t, &mut output)
            .unwrap();
        assert_eq!(output, from, "ratio {t}");
    }

    let mut output = [0.0f32; 2];
    StepInterpolator
        .interpolate(Some(&from), Some(&to), 2, 1.0, &mut output)
        .unwrap();
    assert_eq!(output, to);
}

#[test]
fn test_output_past_component_count_untouched() {
    let from = [2.0f32, 2.0];
    let to = [6.0f32, 6.0];
    let mut output = [7.0f32; 4];

    LinearInterpolator
        .interpolate(Some(&from), Some(&to), 2, 0.5, &mut output)
        .unwrap();
    assert_eq!(output, [4.0, 4.0, 7.0, 7.0]);
}

#[test]
fn test_nothing_written_on_validation_failure() {
    let mut output = [7.0f32; 2];
    let result = LinearInterpolator.interpolate(Some(&[1.0, 2.0]), None, 2, 0.5, &mut output);

    assert!(result.is_err());
    assert_eq!(output, [7.0, 7.0]);
}

#[test]
fn test_interpolator_names() {
    let names: Vec<String> = variants()
        .iter()
        .map(|interpolator| interpolator.name().to_string())
        .collect();
    assert_eq!(names, ["linear", "step", "slerp", "power", "composite"]);
}
