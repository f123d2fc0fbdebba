use std::cell::RefCell;

use rtgrid::report::Reporter;
use rtgrid::rtgrid_data::Sample;
use rtgrid::{
    Axis, GridError, SUBSTITUTED_FINAL, SUBSTITUTED_INITIAL, generate_sample,
    generate_sample_from_ref,
};

struct CaptureReporter {
    messages: RefCell<Vec<(u32, String)>>,
}

impl CaptureReporter {
    fn new() -> Self {
        CaptureReporter {
            messages: RefCell::new(Vec::new()),
        }
    }

    fn warnings(&self) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(level, _)| *level == 0)
            .map(|(_, msg)| msg.clone())
            .collect()
    }
}

impl Reporter for CaptureReporter {
    fn report(&self, level: u32, message: &str) {
        self.messages
            .borrow_mut()
            .push((level, message.to_string()));
    }
}

fn hint(start: f64, end: f64, spacing: f64, oversample: u32) -> Sample {
    Sample::hinted(1.0, start, end, spacing, oversample)
}

#[test]
fn test_concrete_oversampled_scenario() {
    let rep = CaptureReporter::new();
    let (samp, flags) =
        generate_sample(Axis::Radius, &hint(1.0, 2.0, 0.5, 2), &Sample::default(), &rep).unwrap();
    // Pre-oversample count 3; (3-1)*2+1 = 5 points.
    assert_eq!(flags, 0);
    assert_eq!(samp.count(), 5);
    assert_eq!(samp.values, vec![1.0, 1.25, 1.5, 1.75, 2.0]);
    assert!(rep.warnings().is_empty());
}

#[test]
fn test_count_and_endpoint_properties() {
    for &(start, end, spacing, oversample) in &[
        (1.0, 2.0, 0.5, 2u32),
        (100.0, 200.0, 7.0, 3),
        (0.5, 9.75, 0.25, 1),
        (3.0, 4.0, 0.1, 10),
    ] {
        let (samp, _) = generate_sample(
            Axis::Wavenumber,
            &hint(start, end, spacing, oversample),
            &Sample::default(),
            &rtgrid::NullReporter,
        )
        .unwrap();
        let pre = ((end - start) / spacing).round() as usize + 1;
        assert_eq!(samp.count(), (pre - 1) * oversample as usize + 1);
        assert_eq!(samp.values[0], start);
        let step = spacing / f64::from(oversample);
        let last = *samp.values.last().unwrap();
        assert!(
            (last - end).abs() <= step,
            "last {last} vs end {end} for spacing {spacing}"
        );
    }
}

#[test]
fn test_inversion_round_trip() {
    // Negated spacing with swapped bounds reproduces the point set reversed,
    // the property the impact-parameter derivation relies on.
    let (up, _) = generate_sample(
        Axis::Radius,
        &hint(10.0, 20.0, 2.5, 2),
        &Sample::default(),
        &rtgrid::NullReporter,
    )
    .unwrap();
    let (down, _) = generate_sample(
        Axis::ImpactParameter,
        &hint(20.0, 10.0, -2.5, 2),
        &Sample::default(),
        &rtgrid::NullReporter,
    )
    .unwrap();
    let mut reversed = down.values.clone();
    reversed.reverse();
    assert_eq!(up.values, reversed);
}

#[test]
fn test_invalid_range_allocates_nothing() {
    let result = generate_sample(
        Axis::Radius,
        &hint(2.0, 1.0, 0.5, 1),
        &Sample::default(),
        &rtgrid::NullReporter,
    );
    match result {
        Err(GridError::InvalidRange {
            axis: Axis::Radius,
            start,
            end,
            ..
        }) => {
            assert_eq!(start, 2.0);
            assert_eq!(end, 1.0);
        }
        other => panic!("expected InvalidRange, got {other:?}"),
    }
}

#[test]
fn test_substitution_flags() {
    let reference = hint(5.0, 15.0, 0.0, 2);

    let (_, flags) = generate_sample(
        Axis::Radius,
        &hint(0.0, 12.0, 1.0, 1),
        &reference,
        &rtgrid::NullReporter,
    )
    .unwrap();
    assert_eq!(flags, SUBSTITUTED_INITIAL);

    let (_, flags) = generate_sample(
        Axis::Radius,
        &hint(6.0, 0.0, 1.0, 1),
        &reference,
        &rtgrid::NullReporter,
    )
    .unwrap();
    assert_eq!(flags, SUBSTITUTED_FINAL);

    let (samp, flags) = generate_sample(
        Axis::Radius,
        &hint(0.0, 0.0, 1.0, 1),
        &reference,
        &rtgrid::NullReporter,
    )
    .unwrap();
    assert_eq!(flags, SUBSTITUTED_INITIAL | SUBSTITUTED_FINAL);
    assert_eq!(samp.start, 5.0);
    assert_eq!(samp.end, 15.0);
}

#[test]
fn test_spacing_inherited_from_reference() {
    let reference = hint(5.0, 15.0, 2.5, 2);
    let (samp, _) = generate_sample(
        Axis::Radius,
        &hint(0.0, 0.0, 0.0, 0),
        &reference,
        &rtgrid::NullReporter,
    )
    .unwrap();
    assert_eq!(samp.spacing, 2.5);
    assert_eq!(samp.oversample, 2);
    assert_eq!(samp.count(), (4 + 1 - 1) * 2 + 1);
}

#[test]
fn test_fixed_reference_array_drops_oversampling_with_warning() {
    let mut reference = hint(1.0, 3.0, 0.0, 4);
    reference.values = vec![1.0, 1.4, 2.1, 3.0];
    let rep = CaptureReporter::new();
    let (samp, _) =
        generate_sample(Axis::Radius, &hint(1.0, 3.0, 0.0, 0), &reference, &rep).unwrap();
    assert_eq!(samp.values, reference.values);
    assert_eq!(samp.spacing, 0.0);
    assert_eq!(samp.oversample, 0);
    let warnings = rep.warnings();
    assert_eq!(warnings.len(), 1, "got {warnings:?}");
    assert!(warnings[0].contains("ignoring the oversampling"));
}

#[test]
fn test_missing_spacing_without_reference() {
    assert!(matches!(
        generate_sample(
            Axis::Temperature,
            &hint(1.0, 2.0, 0.0, 1),
            &Sample::default(),
            &rtgrid::NullReporter,
        ),
        Err(GridError::MissingSpacing {
            axis: Axis::Temperature
        })
    ));
}

#[test]
fn test_missing_oversample() {
    assert!(matches!(
        generate_sample(
            Axis::Wavenumber,
            &hint(1.0, 2.0, 0.5, 0),
            &Sample::default(),
            &rtgrid::NullReporter,
        ),
        Err(GridError::MissingOversample { .. })
    ));
}

#[test]
fn test_from_ref_variant() {
    let reference = hint(1000.0, 1010.0, 1.0, 3);
    let samp = generate_sample_from_ref(Axis::Wavenumber, &reference, &rtgrid::NullReporter)
        .unwrap();
    assert_eq!(samp.count(), (11 - 1) * 3 + 1);
    assert_eq!(samp.values[0], 1000.0);
    assert_eq!(samp.oversample, 3);

    let descending = hint(1010.0, 1000.0, 1.0, 3);
    assert!(matches!(
        generate_sample_from_ref(Axis::Wavenumber, &descending, &rtgrid::NullReporter),
        Err(GridError::InvalidRange { .. })
    ));

    let unspaced = hint(1000.0, 1010.0, 0.0, 3);
    assert!(matches!(
        generate_sample_from_ref(Axis::Wavenumber, &unspaced, &rtgrid::NullReporter),
        Err(GridError::MissingSpacing { .. })
    ));
}
