// Chunk: docs/chunks/logging - tracing subscriber setup

//! Logging setup for EditX.
//!
//! Logs go to stderr through a `tracing-subscriber` fmt layer.
//!
//! ## Environment Variables
//!
//! 1. **`EDITX_LOG`** (highest priority) - a bare level such as `debug` applies
//!    to the editx crates; anything containing `=`, `:` or `,` is used as a
//!    full filter directive
//! 2. **`RUST_LOG`** - standard tracing environment variable
//! 3. **Default** - `warn` globally, `info` for editx crates

use std::env;

use tracing_subscriber::{fmt, EnvFilter};

type InitError = Box<dyn std::error::Error + Send + Sync>;

const DEFAULT_FILTER: &str = "warn,editx=info,editx_buffer=info";

/// Installs the global subscriber.
///
/// Fails if a global subscriber is already set; callers at startup may ignore
/// the error.
pub fn init() -> Result<(), InitError> {
    fmt()
        .with_env_filter(create_filter())
        .with_writer(std::io::stderr)
        .try_init()
}

/// Initialize logging for tests.
///
/// Safe to call from every test; repeated initialisation is ignored.
pub fn test() {
    let _ = fmt()
        .with_env_filter(create_filter())
        .with_test_writer()
        .try_init();
}

/// Builds the filter: `EDITX_LOG` > `RUST_LOG` > default.
fn create_filter() -> EnvFilter {
    if let Ok(editx_log) = env::var("EDITX_LOG") {
        return expand_editx_log(&editx_log);
    }

    if let Ok(rust_log) = env::var("RUST_LOG") {
        return EnvFilter::new(rust_log);
    }

    EnvFilter::new(DEFAULT_FILTER)
}

/// `EDITX_LOG=debug` becomes `warn,editx=debug,editx_buffer=debug`.
fn expand_editx_log(editx_log: &str) -> EnvFilter {
    EnvFilter::new(filter_directive(editx_log))
}

fn filter_directive(editx_log: &str) -> String {
    if editx_log.contains('=') || editx_log.contains(':') || editx_log.contains(',') {
        return editx_log.to_string();
    }
    format!("warn,editx={editx_log},editx_buffer={editx_log}")
}
