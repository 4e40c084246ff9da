/// Request/response types
pub mod types;

/// `POST /register`
pub mod register;

/// `POST /login`
pub mod login;

// Re-export commonly used types
pub use types::{AuthRequest, TokenResponse};

// Re-export handlers
pub use login::login;
pub use register::register;
