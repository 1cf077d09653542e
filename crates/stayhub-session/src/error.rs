//! # Session Error Types
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SessionError                                                           │
//! │  ├── Validation(ValidationError)  ← form rejected before any call      │
//! │  ├── Identity(IdentityError)      ← identity service said no           │
//! │  └── Store(StoreError)            ← caching the user failed            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `IdentityError` messages are the ones the sign-in and sign-up screens
//! show, keyed by the identity service's `auth/...` codes.

use thiserror::Error;

use stayhub_core::ValidationError;
use stayhub_store::StoreError;

/// Failures reported by an identity provider.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Invalid email address format.")]
    InvalidEmail,

    #[error("This account has been disabled.")]
    UserDisabled,

    #[error("No account found with this email.")]
    UserNotFound,

    #[error("Incorrect password. Please try again.")]
    WrongPassword,

    #[error("Too many failed attempts. Please try again later.")]
    TooManyRequests,

    #[error("An account with this email already exists.")]
    EmailAlreadyInUse,

    #[error("Email/password accounts are not enabled.")]
    OperationNotAllowed,

    #[error("Password is too weak. Please choose a stronger password.")]
    WeakPassword,

    /// The operation needs a signed-in user.
    #[error("No user is signed in.")]
    NotSignedIn,

    /// Any other provider failure, carrying the provider's own message.
    #[error("{message}")]
    Provider { code: String, message: String },

    /// Account storage failed (local provider).
    #[error("Account storage failed: {0}")]
    Storage(#[from] StoreError),

    /// Password hashing failed (local provider).
    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

impl IdentityError {
    /// Maps an identity-service error code to its error.
    ///
    /// Unknown codes keep the service's own message.
    pub fn from_code(code: &str, message: impl Into<String>) -> Self {
        match code {
            "auth/invalid-email" => IdentityError::InvalidEmail,
            "auth/user-disabled" => IdentityError::UserDisabled,
            "auth/user-not-found" => IdentityError::UserNotFound,
            "auth/wrong-password" => IdentityError::WrongPassword,
            "auth/too-many-requests" => IdentityError::TooManyRequests,
            "auth/email-already-in-use" => IdentityError::EmailAlreadyInUse,
            "auth/operation-not-allowed" => IdentityError::OperationNotAllowed,
            "auth/weak-password" => IdentityError::WeakPassword,
            other => IdentityError::Provider {
                code: other.to_string(),
                message: message.into(),
            },
        }
    }

    /// The identity-service error code.
    pub fn code(&self) -> &str {
        match self {
            IdentityError::InvalidEmail => "auth/invalid-email",
            IdentityError::UserDisabled => "auth/user-disabled",
            IdentityError::UserNotFound => "auth/user-not-found",
            IdentityError::WrongPassword => "auth/wrong-password",
            IdentityError::TooManyRequests => "auth/too-many-requests",
            IdentityError::EmailAlreadyInUse => "auth/email-already-in-use",
            IdentityError::OperationNotAllowed => "auth/operation-not-allowed",
            IdentityError::WeakPassword => "auth/weak-password",
            IdentityError::NotSignedIn => "auth/no-current-user",
            IdentityError::Provider { code, .. } => code,
            IdentityError::Storage(_) | IdentityError::Hashing(_) => "auth/internal-error",
        }
    }
}

/// Result type for identity provider calls.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Errors from `SessionService`.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Identity(#[from] IdentityError),

    #[error("{0}")]
    Store(#[from] StoreError),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_mapping_messages() {
        assert_eq!(
            IdentityError::from_code("auth/wrong-password", "").to_string(),
            "Incorrect password. Please try again."
        );
        assert_eq!(
            IdentityError::from_code("auth/email-already-in-use", "").to_string(),
            "An account with this email already exists."
        );
        assert_eq!(
            IdentityError::from_code("auth/too-many-requests", "").to_string(),
            "Too many failed attempts. Please try again later."
        );
    }

    #[test]
    fn test_unknown_code_keeps_provider_message() {
        let err = IdentityError::from_code("auth/network-request-failed", "Network error");
        assert_eq!(err.to_string(), "Network error");
        assert_eq!(err.code(), "auth/network-request-failed");
    }

    #[test]
    fn test_codes_round_trip() {
        for err in [
            IdentityError::InvalidEmail,
            IdentityError::UserDisabled,
            IdentityError::UserNotFound,
            IdentityError::WeakPassword,
        ] {
            let code = err.code().to_string();
            assert_eq!(IdentityError::from_code(&code, "").code(), code);
        }
    }

    #[test]
    fn test_session_error_shows_inner_message() {
        let err = SessionError::from(ValidationError::PasswordMismatch);
        assert_eq!(err.to_string(), "Passwords do not match");
    }
}
