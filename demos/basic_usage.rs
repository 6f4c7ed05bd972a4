//! Basic logger usage example
//!
//! Demonstrates console-only logging, immediate sink dispatch, and lazy
//! batching with an explicit flush.
//!
//! Run with: cargo run --example basic_usage

use sinklog::prelude::*;
use sinklog::{call_site, log_debug, log_error, log_ok};

fn main() -> Result<()> {
    println!("=== sinklog - Basic Usage Example ===\n");

    // 1. Console-only logger with the default policy: print everything,
    //    never touch the deferred sink.
    println!("1. Console-only logging:");
    let logger = Logger::with_defaults();
    log_ok!(logger, "service ready")?;
    log_debug!(logger, "warming cache, {} entries", 128)?;
    log_error!(logger, "sample failure with captured backtrace")?;
    logger.close()?;

    // 2. Lazy batching: records accumulate in memory and reach the sink in
    //    one batch on flush.
    println!("\n2. Lazy batching into a deferred sink:");
    let logger = Logger::builder()
        .settings(
            LogSettings::default()
                .with_deferred_sink("app_logs")
                .with_lazy_batching(true),
        )
        .sink(sink_fn(|batch| async move {
            println!("   sink received a batch of {} records", batch.len());
            Ok(())
        }))
        .build()?;

    for i in 0..3 {
        log_ok!(logger, "queued message {}", i)?;
    }
    println!("   pending before flush: {}", logger.pending());
    logger.flush()?;
    println!("   pending after flush: {}", logger.pending());
    logger.close()?;

    // 3. Immediate dispatch: each qualifying record becomes its own
    //    single-element batch, filtered per level.
    println!("\n3. Immediate dispatch, sink enabled for Error only:");
    let logger = Logger::builder()
        .settings(
            LogSettings::default()
                .with_deferred_sink("app_logs")
                .with_sink_levels(false, false, true),
        )
        .sink(sink_fn(|batch| async move {
            for record in &batch {
                println!("   sink received: {}", record.message);
            }
            Ok(())
        }))
        .build()?;

    log_ok!(logger, "not persisted, printed only")?;
    logger.log_error(
        "persisted and printed",
        Some("demo stack".to_string()),
        call_site!("main"),
    )?;

    // 4. Pass-through result logging.
    println!("\n4. Result pass-through:");
    let outcome: std::result::Result<u32, String> = Err("disk full".to_string());
    let returned = logger.log_result(outcome, call_site!("main"))?;
    println!("   caller still sees: {:?}", returned);

    logger.close()?;
    println!("\n=== Example completed successfully! ===");
    Ok(())
}
