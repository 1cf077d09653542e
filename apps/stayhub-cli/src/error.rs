//! # CLI Error Types
//!
//! Everything a command can fail with, printed as one line on stderr.

use thiserror::Error;

use stayhub_core::{CoreError, RejectionReason, ValidationError};
use stayhub_session::{IdentityError, SessionError};
use stayhub_store::StoreError;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Booking gate said no.
    #[error("{0}")]
    Rejected(RejectionReason),

    /// An action other than booking that needs a signed-in user.
    #[error("Login Required: {0}")]
    LoginRequired(&'static str),

    /// Identity or session failure, shown under the screen's alert title.
    #[error("{title}: {source}")]
    Session {
        title: &'static str,
        source: SessionError,
    },
}

impl AppError {
    /// Wraps a session error under the alert title the screen would use.
    pub fn session(title: &'static str) -> impl FnOnce(SessionError) -> AppError {
        move |source| AppError::Session { title, source }
    }
}

impl From<IdentityError> for AppError {
    fn from(err: IdentityError) -> Self {
        AppError::Session {
            title: "Error",
            source: SessionError::Identity(err),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
