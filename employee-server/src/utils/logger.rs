//! Logging infrastructure
//!
//! Structured logging to stdout by default; when `{work_dir}/logs` exists,
//! output goes to a daily-rolling file there instead.

use std::path::Path;

use crate::core::Config;

/// Initialize the tracing subscriber
pub fn init(config: &Config) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(config.log_level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let log_dir = Path::new(&config.work_dir).join("logs");
    if log_dir.exists() {
        let file_appender = tracing_appender::rolling::daily(log_dir, "employee-server");
        subscriber.with_writer(file_appender).init();
        return;
    }

    subscriber.init();
}
