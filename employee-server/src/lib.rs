//! Employee API Server
//!
//! A CRUD HTTP service for the Employee resource, backed by a SQLite
//! table. Requests flow one direction: handler → service → repository →
//! database, and errors flow back up to the single mapping point in
//! [`utils::error`].
//!
//! # Module structure
//!
//! ```text
//! employee-server/src/
//! ├── core/          # Config, state, HTTP server
//! ├── api/           # HTTP routes and handlers
//! ├── services/      # Domain services
//! ├── db/            # Connection pool, models, repository
//! └── utils/         # Errors, logging, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger setup
pub use utils::logger;
