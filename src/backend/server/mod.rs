//! Server Module
//!
//! - **`config`** - Command-line and environment configuration
//! - **`state`** - `AppState` and `FromRef` implementations
//! - **`init`** - Composition and app creation

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::Cli;
pub use init::{compose, create_app};
pub use state::AppState;
