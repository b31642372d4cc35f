use chart_trendline::core::{AxisKind, Sample, SampleMode, extract_samples, read_sample};
use serde_json::{Value, json};

#[test]
fn mode_follows_first_non_null_entry() {
    let bare = [json!(null), json!(3), json!({"x": 1, "y": 2})];
    let objects = [json!(null), json!({"x": 1, "y": 2}), json!(3)];

    let bare_mode = SampleMode::resolve(AxisKind::Linear, &bare);
    let object_mode = SampleMode::resolve(AxisKind::Linear, &objects);
    let empty_mode = SampleMode::resolve(AxisKind::Category, &[]);

    assert_eq!(bare_mode, SampleMode::Indexed);
    assert_eq!(object_mode, SampleMode::Paired);
    assert_eq!(empty_mode, SampleMode::Indexed);
}

#[test]
fn time_axis_always_selects_temporal() {
    let bare = [json!(1), json!(2)];
    let mode = SampleMode::resolve(AxisKind::Time, &bare);

    assert_eq!(mode, SampleMode::Temporal);
    assert!(!SampleMode::Temporal.uses_rendered_endpoints());
    assert!(SampleMode::Indexed.uses_rendered_endpoints());
}

#[test]
fn indexed_samples_keep_slot_of_skipped_nulls() {
    let data = [json!(5), Value::Null, json!("7.5"), json!(9)];
    let samples: Vec<Sample> = extract_samples(&data, SampleMode::Indexed).collect();

    assert_eq!(
        samples,
        vec![
            Sample::new(0.0, 5.0),
            Sample::new(2.0, 7.5),
            Sample::new(3.0, 9.0)
        ]
    );
}

#[test]
fn paired_samples_read_x_and_y_fields() {
    let data = [
        json!({"x": 1.5, "y": -2}),
        Value::Null,
        json!({"x": "3", "y": "4.25"}),
    ];
    let samples: Vec<Sample> = extract_samples(&data, SampleMode::Paired).collect();

    assert_eq!(
        samples,
        vec![Sample::new(1.5, -2.0), Sample::new(3.0, 4.25)]
    );
}

#[test]
fn paired_sample_missing_field_reads_nan() {
    let sample = read_sample(&json!({"y": 2}), 0, SampleMode::Paired);
    assert!(sample.x.is_nan());
    assert_eq!(sample.y, 2.0);
}

#[test]
fn temporal_samples_fall_back_to_t_field() {
    let data = [
        json!({"t": "1970-01-01", "y": 0}),
        json!({"x": "1970-01-02", "y": 10}),
        json!({"x": null, "t": "1970-01-03T00:00:00Z", "y": 20}),
        json!({"x": 259_200_000, "y": 30}),
    ];
    let samples: Vec<Sample> = extract_samples(&data, SampleMode::Temporal).collect();

    assert_eq!(
        samples,
        vec![
            Sample::new(0.0, 0.0),
            Sample::new(86_400_000.0, 10.0),
            Sample::new(172_800_000.0, 20.0),
            Sample::new(259_200_000.0, 30.0),
        ]
    );
}

#[test]
fn unparseable_time_reads_nan() {
    let sample = read_sample(&json!({"x": "yesterday", "y": 1}), 0, SampleMode::Temporal);
    assert!(sample.x.is_nan());
}
