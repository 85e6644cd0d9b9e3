/**
 * Backend Error Types
 *
 * The HTTP-facing error taxonomy. Every handler and the identity
 * middleware return `BackendError`; the conversion module turns it into a
 * status code and a `{"error": ...}` body.
 *
 * # Status Mapping
 *
 * - `Validation`, `Conflict`, `InvalidCredentials` - 400 Bad Request
 * - `Unauthenticated` - 401 Unauthorized
 * - `NotFound` - 404 Not Found
 * - `Database`, `Hashing`, `Internal` - 500 Internal Server Error
 *
 * Several variants collapse distinct causes into one client
 * message. The cause is kept on the variant so it can be logged.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::sessions::TokenError;
use crate::shared::SharedError;

/// Message returned for every failed login
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
/// Message returned for every rejected protected request
pub const NOT_AUTHORIZED: &str = "Not authorized";
/// Message returned for unexpected failures
pub const SERVER_ERROR: &str = "Server error";

/// Why a protected request was rejected
///
/// Only ever logged. Clients always see [`NOT_AUTHORIZED`].
#[derive(Debug, Error)]
pub enum AuthFailure {
    /// No `Authorization` header, or one without the `Bearer ` prefix
    #[error("missing bearer token")]
    MissingToken,

    /// The token failed signature, expiry, or format checks
    #[error("invalid token: {0}")]
    InvalidToken(#[from] TokenError),

    /// The token is valid but its subject no longer exists
    #[error("token subject not found")]
    UnknownIdentity,

    /// A handler asked for the current user on an unprotected route
    #[error("no identity attached to request")]
    MissingIdentity,
}

/// Backend error taxonomy
#[derive(Debug, Error)]
pub enum BackendError {
    /// Malformed or missing request input
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// A uniqueness rule was violated (duplicate email)
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Login failed; unknown email and wrong password look identical
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing, invalid, or expired token, or vanished identity
    #[error("Unauthenticated: {0}")]
    Unauthenticated(#[from] AuthFailure),

    /// No owned resource matched; absent and foreign-owned look identical
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Store failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure
    #[error("Hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// Any other unexpected failure
    #[error("Internal error: {message}")]
    Internal {
        /// Internal description, never sent to clients
        message: String,
    },
}

impl BackendError {
    /// Create a new validation error for a field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(SharedError::validation(field, message))
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict { .. } | Self::InvalidCredentials => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Hashing(_) | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::Validation(err) => err.client_message().to_string(),
            Self::Conflict { message } | Self::NotFound { message } => message.clone(),
            Self::InvalidCredentials => INVALID_CREDENTIALS.to_string(),
            Self::Unauthenticated(_) => NOT_AUTHORIZED.to_string(),
            Self::Database(_) | Self::Hashing(_) | Self::Internal { .. } => {
                SERVER_ERROR.to_string()
            }
        }
    }

    /// Whether this error indicates a fault on our side
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}
