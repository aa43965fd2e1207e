#![allow(clippy::unwrap_used, clippy::expect_used)]

use seqdiff_core::errors::DiffError;
use seqdiff_core::logging_facility::test_capture::init_test_capture;
use seqdiff_core::render::{unified_diff, DiffOptions};
use seqdiff_core::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_A_LEN, FIELD_DURATION_MS, FIELD_ERR_CODE,
    FIELD_ERR_KIND, FIELD_LINES,
};
use seqdiff_core::{get_close_matches, log_op_end, log_op_error, log_op_start, Differ};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let start_events: Vec<_> = capture
        .events_for(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .collect();

    assert!(
        !start_events.is_empty(),
        "Should have captured at least one start event"
    );
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events: Vec<_> = capture
        .events_for(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(
        end_events[0].fields.get(FIELD_DURATION_MS),
        Some(&"42".to_string())
    );
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    log_op_error!(op_name, DiffError::InvalidCount { n: 0 }, duration_ms = 10);

    let error_events: Vec<_> = capture
        .events_for(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    let error_event = &error_events[0];
    assert_eq!(
        error_event.fields.get(FIELD_ERR_CODE),
        Some(&"ERR_INVALID_INPUT".to_string())
    );
    assert_eq!(
        error_event.fields.get(FIELD_ERR_KIND),
        Some(&"InvalidInput".to_string())
    );
}

#[test]
fn test_log_macros_with_multiple_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_macros_fields_unique_4";

    log_op_start!(op_name, a_len = 3, fromfile = "a.txt");

    let events = capture.events_for(op_name);
    let start_event = events.first().expect("Should have start event");
    assert_eq!(start_event.fields.get(FIELD_A_LEN), Some(&"3".to_string()));
    assert_eq!(start_event.fields.get("fromfile"), Some(&"a.txt".to_string()));
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_test_capture_assert_event_exists_fails() {
    let capture = init_test_capture();

    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}

#[test]
fn test_renderer_owns_start_and_end() {
    let capture = init_test_capture();

    let a = ["x\n", "y\n"];
    let b = ["x\n", "z\n"];
    let diff = unified_diff(&a, &b, &DiffOptions::default());
    assert!(!diff.is_empty());

    capture.assert_event_exists("unified_diff", EVENT_START);
    capture.assert_event_exists("unified_diff", EVENT_END);
}

#[test]
fn test_differ_reports_output_size() {
    let capture = init_test_capture();

    let a = ["only in a with a unique marker 7f3\n"];
    let b = ["only in b\n"];
    let delta = Differ::default().compare(&a, &b);

    let expected = delta.len().to_string();
    let found = capture.count_events(|e| {
        e.op.as_deref() == Some("differ_compare")
            && e.event.as_deref() == Some(EVENT_END)
            && e.fields.get(FIELD_LINES) == Some(&expected)
    });
    assert!(found >= 1);
}

#[test]
fn test_rejected_arguments_log_end_error() {
    let capture = init_test_capture();

    let result = get_close_matches("word", &["words"], 0, 0.5);
    assert!(result.is_err());

    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("get_close_matches")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.fields.get(FIELD_ERR_CODE) == Some(&"ERR_INVALID_INPUT".to_string())
    });
    assert!(errors >= 1);
}
