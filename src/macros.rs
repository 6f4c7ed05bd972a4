//! Call-site capture and formatted logging macros.
//!
//! `call_site!` fills in the caller name, source line, and source file the
//! way the logging methods expect; the `log_*!` macros combine that with
//! `format!`-style message construction.
//!
//! # Examples
//!
//! ```
//! use sinklog::prelude::*;
//! use sinklog::{call_site, log_ok};
//!
//! let logger = Logger::with_defaults();
//!
//! // Explicit call site
//! logger.log_ok("server started", call_site!("main"))?;
//!
//! // Auto-captured call site with format arguments
//! let port = 8080;
//! log_ok!(logger, "listening on port {}", port)?;
//! # Ok::<(), LoggerError>(())
//! ```

/// Capture the current call site.
///
/// With no argument the caller name is the enclosing module path; pass a
/// string literal to name the calling function explicitly.
///
/// # Examples
///
/// ```
/// use sinklog::call_site;
///
/// let here = call_site!();
/// let named = call_site!("handle_request");
/// assert_eq!(named.caller, "handle_request");
/// ```
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(module_path!(), line!(), file!())
    };
    ($caller:expr) => {
        $crate::CallSite::new($caller, line!(), file!())
    };
}

/// Log an Ok-level message with automatic call-site capture.
///
/// # Examples
///
/// ```
/// # use sinklog::prelude::*;
/// # let logger = Logger::with_defaults();
/// use sinklog::log_ok;
/// log_ok!(logger, "cache warmed")?;
/// log_ok!(logger, "processed {} items", 100)?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! log_ok {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_ok(format!($($arg)+), $crate::call_site!())
    };
}

/// Log a Debug-level message with automatic call-site capture.
///
/// # Examples
///
/// ```
/// # use sinklog::prelude::*;
/// # let logger = Logger::with_defaults();
/// use sinklog::log_debug;
/// log_debug!(logger, "retry {} of {}", 1, 3)?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_debug(format!($($arg)+), $crate::call_site!())
    };
}

/// Log an Error-level message with automatic call-site capture and backtrace.
///
/// # Examples
///
/// ```
/// # use sinklog::prelude::*;
/// # let logger = Logger::with_defaults();
/// use sinklog::log_error;
/// log_error!(logger, "connect failed: {}", "timeout")?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_error(format!($($arg)+), None, $crate::call_site!())
    };
}
