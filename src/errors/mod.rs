//! Error handling utilities for the daybook application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Store operations never appear here: updating, deleting or bookmarking an entry
//! that no longer exists is a silent no-op rather than an error.

use crate::journal_core::session::SessionState;
use thiserror::Error;

/// Represents the ways an editor session can refuse an action.
///
/// None of these are fatal. A refused action leaves the session exactly as it
/// was, so the caller can keep driving it.
///
/// # Examples
///
/// ```
/// use daybook::errors::SessionError;
///
/// let error = SessionError::SaveDisabled;
/// assert!(format!("{}", error).contains("title or a body"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Both the trimmed title and the trimmed body are empty.
    #[error("Nothing to save: write a title or a body first.")]
    SaveDisabled,

    /// The session already reached a terminal state.
    #[error("Editor session is already {state}; open a new one to keep writing.")]
    Finished {
        /// The terminal state the session ended in
        state: SessionState,
    },

    /// A discard choice was made while no discard confirmation was pending.
    #[error("No discard confirmation is pending.")]
    NotConfirming,

    /// The draft cannot change until the pending discard confirmation is answered.
    #[error("Answer the discard confirmation first: discard or keep editing.")]
    AwaitingConfirmation,
}

/// Represents all possible errors that can occur in the daybook application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use daybook::errors::AppError;
///
/// let error = AppError::Config("Unknown log format".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Unknown log format");
/// ```
///
/// Converting from a session error:
/// ```
/// use daybook::errors::{AppError, SessionError};
///
/// let app_error: AppError = SessionError::SaveDisabled.into();
/// assert!(matches!(app_error, AppError::Session(SessionError::SaveDisabled)));
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors while reading commands or writing screens.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An editor session refused an action.
    #[error("Editor error: {0}")]
    Session(#[from] SessionError),

    /// A shell command could not be understood.
    #[error("Command error: {0}")]
    Command(String),

    /// A shell command referred to a card that is not on screen.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failed to render a snapshot as JSON.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use daybook::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Command("unknown command".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
