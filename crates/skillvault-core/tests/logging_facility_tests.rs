#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use skillvault_core::errors::SkillVaultError;
use skillvault_core::logging_facility::test_capture::init_test_capture;
use skillvault_core::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ACTIVE_FILTERS, FIELD_CATALOG_LEN,
    FIELD_CERTIFICATE_ID, FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_FILTER_VALUE,
    FIELD_RESULT_LEN,
};
use skillvault_core::{
    apply, catalog, log_op_end, log_op_error, log_op_start, Command, FilterState, GalleryState,
    QueryEngine,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_carries_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events();
    let end_events: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1);
    assert_eq!(end_events[0].fields.get(FIELD_DURATION_MS), Some(&"42".to_string()));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = SkillVaultError::CertificateNotFound {
        id: "c1".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events();
    let error_event = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("error event");

    assert_eq!(
        error_event.fields.get(FIELD_ERR_CODE),
        Some(&"ERR_NOT_FOUND".to_string())
    );
    assert_eq!(
        error_event.fields.get(FIELD_ERR_KIND),
        Some(&"NotFound".to_string())
    );
}

#[test]
fn test_catalog_load_emits_start_and_end() {
    let capture = init_test_capture();

    let text = format!("[{}]", common::entry_json("log-a", "Logged"));
    catalog::parse_catalog_str(&text).unwrap();

    capture.assert_event_exists("load_catalog", EVENT_START);
    let ends = capture.count_events(|e| {
        e.op.as_deref() == Some("load_catalog")
            && e.event.as_deref() == Some(EVENT_END)
            && e.fields.get(FIELD_CATALOG_LEN).map(String::as_str) == Some("1")
    });
    assert!(ends >= 1);
}

#[test]
fn test_failed_catalog_load_emits_error_event() {
    let capture = init_test_capture();

    assert!(catalog::parse_catalog_str("{}").is_err());

    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("load_catalog")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.fields.get(FIELD_ERR_CODE).map(String::as_str) == Some("ERR_INVALID_INPUT")
    });
    assert!(errors >= 1);
}

#[test]
fn test_view_unknown_id_logs_error() {
    let capture = init_test_capture();
    let catalog = common::scenario_catalog();

    let result = apply(
        GalleryState::new(),
        Command::View {
            certificate_id: "ghost-cert".to_string(),
        },
        &catalog,
    );
    assert!(result.is_err());

    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("view")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.fields.get(FIELD_CERTIFICATE_ID).map(String::as_str) == Some("ghost-cert")
    });
    assert_eq!(errors, 1);
}

#[test]
fn test_toggle_filter_logs_value() {
    let capture = init_test_capture();
    let catalog = common::scenario_catalog();

    apply(
        GalleryState::new(),
        Command::ToggleFilter {
            value: "toggle-log-marker".to_string(),
        },
        &catalog,
    )
    .unwrap();

    let toggles = capture.count_events(|e| {
        e.op.as_deref() == Some("toggle_filter")
            && e.fields.get(FIELD_FILTER_VALUE).map(String::as_str) == Some("toggle-log-marker")
            && e.fields.get("now_active").map(String::as_str) == Some("true")
    });
    assert_eq!(toggles, 1);
}

#[test]
fn test_query_logs_result_len() {
    let capture = init_test_capture();
    let catalog = common::scenario_catalog();

    let mut filters = FilterState::new();
    filters.set_query("query-log-marker");
    let outcome = QueryEngine::default().run(&catalog, &filters);
    assert!(outcome.is_empty());

    let queries = capture.count_events(|e| {
        e.op.as_deref() == Some("query")
            && e.fields.get("query").map(String::as_str) == Some("query-log-marker")
            && e.fields.get(FIELD_RESULT_LEN).map(String::as_str) == Some("0")
            && e.fields.get(FIELD_ACTIVE_FILTERS).map(String::as_str) == Some("0")
    });
    assert_eq!(queries, 1);
}
