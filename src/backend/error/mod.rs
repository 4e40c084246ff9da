/// Error enum and status mapping
pub mod types;

/// HTTP response conversion
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
