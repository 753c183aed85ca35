//! Server configuration

/// Server configuration, sourced from environment variables.
///
/// | variable | default | meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | working directory (database file, logs) |
/// | HTTP_PORT | 8080 | HTTP listen port |
/// | DATABASE_URL | unset | explicit SQLite URL, overrides the WORK_DIR file |
/// | LOG_LEVEL | info | maximum tracing level |
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the database file and log output
    pub work_dir: String,
    /// HTTP API listen port
    pub http_port: u16,
    /// Explicit database URL; when unset a file under `work_dir` is used
    pub database_url: Option<String>,
    /// Maximum tracing level (`error` | `warn` | `info` | `debug` | `trace`)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables, with defaults for
    /// anything unset
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database_url: std::env::var("DATABASE_URL").ok(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
