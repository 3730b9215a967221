//! Error types for the registration workflow.
//!
//! The `Display` text of [`ValidationError`] and [`RegistrationError`] is the
//! notice shown to the person filling in the form.

use thiserror::Error;

/// Result type for registration operations.
pub type Result<T> = std::result::Result<T, RegistrationError>;

/// A draft field failed its input pattern.
///
/// Checks run in declaration order and only the first failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name should contain only letters and spaces (min 2 characters).")]
    Name,

    #[error("Please enter a valid email address.")]
    Email,

    #[error("Phone number should be 10 digits and start with 6, 7, 8, or 9.")]
    Phone,
}

/// Why a submission did not register.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// The draft failed validation; no request was made.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Another submission for this draft is still running.
    #[error("A registration is already in progress.")]
    InFlight,

    /// The service answered with a non-success status.
    #[error("Failed to register. Please try again later.")]
    ServerRejected { status: u16 },

    /// No response was obtained (network, DNS, CORS, timeout).
    #[error("Failed to register. Please check your network connection.")]
    Transport { message: String },
}

/// A page-shell value that names no occupation option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown occupation '{0}'")]
pub struct UnknownOccupation(pub String);

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The registration endpoint is blank
    #[error("Configuration error: registration endpoint must not be empty")]
    EmptyEndpoint,

    /// Timeout could not be parsed as whole seconds
    #[error("Configuration error: invalid timeout '{value}', expected whole seconds")]
    InvalidTimeout { value: String },

    /// The HTTP client could not be built
    #[error("Configuration error: failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
