//! Integration tests for the record routing engine
//!
//! These tests verify:
//! - Batched vs. immediate dispatch to the deferred sink
//! - Per-level filtering on the immediate path (and its absence on the lazy path)
//! - Flush and close lifecycle
//! - Result pass-through logging
//! - Construction validation

use parking_lot::Mutex;
use sinklog::prelude::*;
use std::sync::Arc;

type Batches = Arc<Mutex<Vec<Vec<LogRecord>>>>;

/// A sink that records every batch it is handed.
fn capture_sink() -> (Arc<dyn DeferredSink>, Batches) {
    let batches: Batches = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&batches);
    let sink = sink_fn(move |batch: Vec<LogRecord>| {
        let seen = Arc::clone(&seen);
        async move {
            seen.lock().push(batch);
            Ok(())
        }
    });
    (sink, batches)
}

fn quiet() -> LogSettings {
    LogSettings::default().with_print_levels(false, false, false)
}

const SITE: CallSite = CallSite::new("integration", 10, "tests/integration_tests.rs");

#[test]
fn test_batched_mode_defers_until_flush() {
    let (sink, batches) = capture_sink();
    let logger = Logger::builder()
        .settings(quiet().with_deferred_sink("app_logs").with_lazy_batching(true))
        .sink(sink)
        .build()
        .expect("valid configuration");

    for i in 0..5 {
        logger
            .log_ok(format!("message {}", i), SITE)
            .expect("log call");
    }

    // Nothing reaches the sink before the flush.
    assert!(batches.lock().is_empty());
    assert_eq!(logger.pending(), 5);

    logger.flush().expect("flush");

    let calls = batches.lock();
    assert_eq!(calls.len(), 1, "flush makes exactly one sink call");
    let messages: Vec<&str> = calls[0].iter().map(|r| r.message.as_str()).collect();
    assert_eq!(
        messages,
        ["message 0", "message 1", "message 2", "message 3", "message 4"]
    );
    drop(calls);
    assert_eq!(logger.pending(), 0, "buffer is empty right after flush");
}

#[test]
fn test_flush_on_empty_buffer_still_calls_sink() {
    let (sink, batches) = capture_sink();
    let logger = Logger::builder()
        .settings(quiet().with_deferred_sink("app_logs").with_lazy_batching(true))
        .sink(sink)
        .build()
        .expect("valid configuration");

    logger.flush().expect("flush");

    let calls = batches.lock();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].is_empty());
}

#[test]
fn test_immediate_mode_single_element_batches_in_call_order() {
    let (sink, batches) = capture_sink();
    let logger = Logger::builder()
        .settings(
            quiet()
                .with_deferred_sink("app_logs")
                .with_sink_levels(true, false, true),
        )
        .sink(sink)
        .build()
        .expect("valid configuration");

    logger.log_ok("first", SITE).expect("log call");
    logger.log_debug("filtered out", SITE).expect("log call");
    logger
        .log_error("second", Some("trace".to_string()), SITE)
        .expect("log call");

    let calls = batches.lock();
    assert_eq!(calls.len(), 2, "the Debug record never reaches the sink");
    assert_eq!(calls[0].len(), 1);
    assert_eq!(calls[1].len(), 1);
    assert_eq!(calls[0][0].message, "first");
    assert_eq!(calls[1][0].message, "second");
}

#[test]
fn test_lazy_batching_bypasses_the_sink_level_filter() {
    // Buffered records are enqueued unconditionally; the per-level sink
    // filter applies only to immediate dispatch.
    let (sink, batches) = capture_sink();
    let logger = Logger::builder()
        .settings(
            quiet()
                .with_deferred_sink("app_logs")
                .with_lazy_batching(true)
                .with_sink_levels(false, false, true),
        )
        .sink(sink)
        .build()
        .expect("valid configuration");

    logger.log_ok("kept despite the filter", SITE).expect("log call");
    logger
        .log_error("kept", Some("trace".to_string()), SITE)
        .expect("log call");
    logger.flush().expect("flush");

    let calls = batches.lock();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].len(), 2);
    assert_eq!(calls[0][0].severity, Severity::Ok);
    assert_eq!(calls[0][1].severity, Severity::Error);
}

#[test]
fn test_close_performs_the_final_flush() {
    let (sink, batches) = capture_sink();
    let logger = Logger::builder()
        .settings(quiet().with_deferred_sink("app_logs").with_lazy_batching(true))
        .sink(sink)
        .build()
        .expect("valid configuration");

    logger.log_ok("queued before close", SITE).expect("log call");
    logger.log_debug("also queued", SITE).expect("log call");
    logger.close().expect("close");

    let calls = batches.lock();
    assert_eq!(calls.len(), 1, "close flushes exactly once");
    let messages: Vec<&str> = calls[0].iter().map(|r| r.message.as_str()).collect();
    assert_eq!(messages, ["queued before close", "also queued"]);
}

#[test]
fn test_drop_without_close_flushes() {
    let (sink, batches) = capture_sink();
    {
        let logger = Logger::builder()
            .settings(quiet().with_deferred_sink("app_logs").with_lazy_batching(true))
            .sink(sink)
            .build()
            .expect("valid configuration");
        logger.log_ok("pending at drop", SITE).expect("log call");
    }

    let calls = batches.lock();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0][0].message, "pending at drop");
}

#[test]
fn test_construction_rejects_missing_sink_table() {
    let (sink, _batches) = capture_sink();
    let mut settings = quiet();
    settings.use_deferred_sink = true;

    let err = Logger::new(settings, Some(sink)).err().expect("must fail");
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}

#[test]
fn test_construction_rejects_missing_sink_callback() {
    let settings = quiet().with_deferred_sink("app_logs");
    let err = Logger::new(settings, None).err().expect("must fail");
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}

#[test]
fn test_log_result_failure_logs_once_and_passes_through() {
    let (sink, batches) = capture_sink();
    let logger = Logger::builder()
        .settings(
            quiet()
                .with_deferred_sink("app_logs")
                .with_sink_levels(false, false, true),
        )
        .sink(sink)
        .build()
        .expect("valid configuration");

    let outcome: std::result::Result<i32, String> = Err("db write failed".to_string());
    let returned = logger.log_result(outcome, SITE).expect("dispatch");
    assert_eq!(returned, Err("db write failed".to_string()));

    let calls = batches.lock();
    assert_eq!(calls.len(), 1, "exactly one Error record is logged");
    assert_eq!(calls[0][0].severity, Severity::Error);
    assert_eq!(calls[0][0].message, "db write failed");
    assert!(calls[0][0].stack.is_some(), "failure logging captures a stack");
}

#[test]
fn test_log_result_success_logs_nothing() {
    let (sink, batches) = capture_sink();
    let logger = Logger::builder()
        .settings(
            quiet()
                .with_deferred_sink("app_logs")
                .with_sink_levels(true, true, true),
        )
        .sink(sink)
        .build()
        .expect("valid configuration");

    let outcome: std::result::Result<i32, String> = Ok(7);
    let returned = logger.log_result(outcome, SITE).expect("dispatch");
    assert_eq!(returned, Ok(7));
    assert!(batches.lock().is_empty());
}

#[test]
fn test_log_status_passes_the_marker_through() {
    let (sink, batches) = capture_sink();
    let logger = Logger::builder()
        .settings(
            quiet()
                .with_deferred_sink("app_logs")
                .with_sink_levels(false, false, true),
        )
        .sink(sink)
        .build()
        .expect("valid configuration");

    let ok = logger.log_status(Ok(()), SITE).expect("dispatch");
    assert_eq!(ok, Ok(()));
    assert!(batches.lock().is_empty());

    let err = logger
        .log_status(Err("migration failed".to_string()), SITE)
        .expect("dispatch");
    assert_eq!(err, Err("migration failed".to_string()));
    assert_eq!(batches.lock().len(), 1);
}

#[test]
fn test_sink_failure_propagates_through_the_blocking_form() {
    let sink = sink_fn(|_batch: Vec<LogRecord>| async {
        Err(LoggerError::sink("database unavailable"))
    });
    let logger = Logger::builder()
        .settings(
            quiet()
                .with_deferred_sink("app_logs")
                .with_sink_levels(true, true, true),
        )
        .sink(sink)
        .build()
        .expect("valid configuration");

    let err = logger
        .log_error("boom", Some("trace".to_string()), SITE)
        .unwrap_err();
    assert!(matches!(err, LoggerError::Sink { .. }));
}

#[tokio::test]
async fn test_sink_failure_propagates_through_the_async_form() {
    let sink = sink_fn(|_batch: Vec<LogRecord>| async {
        Err(LoggerError::sink("database unavailable"))
    });
    let logger = Logger::builder()
        .settings(quiet().with_deferred_sink("app_logs").with_lazy_batching(true))
        .sink(sink)
        .build()
        .expect("valid configuration");

    logger
        .log_error_async("boom", Some("trace".to_string()), SITE)
        .await
        .expect("buffered, sink untouched");

    let err = logger.flush_async().await.unwrap_err();
    assert!(matches!(err, LoggerError::Sink { .. }));

    // The snapshot was drained before the sink failed; the logger performs
    // no retry on its own.
    assert_eq!(logger.pending(), 0);
}

#[tokio::test]
async fn test_async_forms_share_the_dispatch_path() {
    let (sink, batches) = capture_sink();
    let logger = Logger::builder()
        .settings(quiet().with_deferred_sink("app_logs").with_lazy_batching(true))
        .sink(sink)
        .build()
        .expect("valid configuration");

    logger.log_ok_async("one", SITE).await.expect("log call");
    logger.log_debug_async("two", SITE).await.expect("log call");
    logger.log_ok_start_async(SITE).await.expect("log call");
    logger.flush_async().await.expect("flush");

    let calls = batches.lock();
    assert_eq!(calls.len(), 1);
    let messages: Vec<&str> = calls[0].iter().map(|r| r.message.as_str()).collect();
    assert_eq!(messages, ["one", "two", "Start"]);
}

#[test]
fn test_console_only_scenario_touches_no_sink() {
    // Print everything, deferred sink off: records route to the console
    // alone, with the explicit stack kept verbatim.
    let (sink, batches) = capture_sink();
    let settings = LogSettings::default();
    let logger = Logger::new(settings.clone(), Some(sink)).expect("valid configuration");

    logger.log_ok("all good", SITE).expect("log call");
    logger
        .log_error("broken", Some("trace123".to_string()), SITE)
        .expect("log call");

    assert!(batches.lock().is_empty(), "gate off means no sink calls");

    // Contract-level check of what those two calls emitted.
    let printer = ConsolePrinter::new(&settings);
    assert!(printer.enabled(Severity::Ok));
    assert!(printer.enabled(Severity::Error));
    let generator = RecordIdGenerator::new();
    let error_record = LogRecord::new(
        generator.next_id(),
        Severity::Error,
        SITE.full_descriptor(),
        "broken".to_string(),
        Some("trace123".to_string()),
    );
    assert!(printer.render(&error_record).contains("trace123"));
}

#[test]
fn test_records_are_equal_iff_ids_match() {
    let generator = RecordIdGenerator::new();
    let id = generator.next_id();

    let a = LogRecord::new(id, Severity::Ok, "(Name: a)".into(), "left".into(), None);
    let b = LogRecord::new(
        id,
        Severity::Error,
        "(Name: b)".into(),
        "right".into(),
        Some("stack".into()),
    );
    assert_eq!(a, b, "identical ids mean identical records");

    let c = LogRecord::new(
        generator.next_id(),
        Severity::Ok,
        "(Name: a)".into(),
        "left".into(),
        None,
    );
    assert_ne!(a, c, "distinct ids mean distinct records");
}
