use rtgrid::persist::{Advisory, DumpOptions, MAX_RESTORE_COUNT, print_sample};
use rtgrid::rtgrid_data::{Sample, SampleRecord};
use rtgrid::{GridError, restore_sample, save_sample};

fn sample_with_values() -> Sample {
    Sample {
        cgs_factor: 1.0e-4,
        start: 1.0,
        end: 2.0,
        spacing: 0.5,
        oversample: 2,
        values: vec![1.0, 1.25, 1.5, 1.75, 2.0],
    }
}

#[test]
fn test_round_trip_preserves_everything() {
    let original = sample_with_values();
    let mut buf = Vec::new();
    save_sample(&mut buf, &original).unwrap();

    let restored = restore_sample(&buf).unwrap();
    assert_eq!(restored.sample, original);
    assert_eq!(restored.advisory, None);
    assert!(restored.rest.is_empty());
}

#[test]
fn test_round_trip_empty_sample() {
    let original = Sample::hinted(1.0, 3.0, 9.0, 1.5, 1);
    let mut buf = Vec::new();
    save_sample(&mut buf, &original).unwrap();

    let restored = restore_sample(&buf).unwrap();
    assert_eq!(restored.sample, original);
    assert!(restored.sample.values.is_empty());
}

#[test]
fn test_sequential_restore() {
    let first = sample_with_values();
    let mut second = sample_with_values();
    second.start = 10.0;
    second.values = vec![10.0, 11.0];

    let mut buf = Vec::new();
    save_sample(&mut buf, &first).unwrap();
    save_sample(&mut buf, &second).unwrap();

    let a = restore_sample(&buf).unwrap();
    assert_eq!(a.sample, first);
    let b = restore_sample(a.rest).unwrap();
    assert_eq!(b.sample, second);
    assert!(b.rest.is_empty());
}

#[test]
fn test_negative_count_is_corrupt() {
    let record = SampleRecord {
        cgs_factor: 1.0,
        start: 0.0,
        end: 1.0,
        spacing: 0.1,
        oversample: 1,
        count: -1,
        has_values: false,
    };
    let buf = postcard::to_allocvec(&record).unwrap();
    assert!(matches!(
        restore_sample(&buf),
        Err(GridError::CorruptData(_))
    ));
}

#[test]
fn test_oversized_count_is_suspicious_not_corrupt() {
    let record = SampleRecord {
        cgs_factor: 1.0,
        start: 0.0,
        end: 1.0,
        spacing: 0.1,
        oversample: 1,
        count: 2_000_000,
        has_values: true,
    };
    assert!(record.count > MAX_RESTORE_COUNT);
    let buf = postcard::to_allocvec(&record).unwrap();
    let restored = restore_sample(&buf).unwrap();
    assert_eq!(restored.advisory, Some(Advisory::SuspiciousCount(2_000_000)));
    assert!(restored.sample.values.is_empty());
    assert_eq!(restored.sample.spacing, 0.1);
}

#[test]
fn test_truncated_payload_is_corrupt() {
    let mut buf = Vec::new();
    save_sample(&mut buf, &sample_with_values()).unwrap();
    buf.truncate(buf.len() - 4);
    assert!(matches!(
        restore_sample(&buf),
        Err(GridError::CorruptData(_))
    ));
}

#[test]
fn test_presence_flag_mismatch_is_corrupt() {
    let record = SampleRecord {
        cgs_factor: 1.0,
        start: 0.0,
        end: 1.0,
        spacing: 0.1,
        oversample: 1,
        count: 3,
        has_values: false,
    };
    let buf = postcard::to_allocvec(&record).unwrap();
    assert!(matches!(
        restore_sample(&buf),
        Err(GridError::CorruptData(_))
    ));
}

#[test]
fn test_print_sample_blocks() {
    let mut out = Vec::new();
    print_sample(
        &mut out,
        &sample_with_values(),
        "Radius",
        DumpOptions {
            oversample: false,
            values: true,
        },
    )
    .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Radius"));
    assert!(text.contains("Factor to cgs units: 0.0001"));
    assert!(text.contains("Initial value: 1"));
    assert!(text.contains("Number of elements: 5"));
    assert!(!text.contains("Oversample"));
    assert!(text.contains("Values:"));
}
