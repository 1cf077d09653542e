//! # Validation Module
//!
//! Form validation for the authentication and profile screens.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: THIS MODULE (before any identity call)                       │
//! │  ├── Required fields                                                   │
//! │  ├── E-mail shape                                                      │
//! │  └── Password length / confirmation                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Identity service                                             │
//! │  ├── Account exists / e-mail already in use                            │
//! │  └── Wrong password, disabled account, rate limits                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stayhub_core::validation::{validate_sign_in, validate_sign_up};
//!
//! assert!(validate_sign_in("thabo@example.com", "secret1").is_ok());
//! assert!(validate_sign_up("thabo@example.com", "secret1", "secret2").is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Minimum password length accepted by the forms.
pub const MIN_PASSWORD_LENGTH: usize = 6;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates the shape `local@domain.tld` with no whitespace.
///
/// Only the shape is checked; whether the mailbox exists is the identity
/// service's business.
///
/// ## Example
/// ```rust
/// use stayhub_core::validation::validate_email;
///
/// assert!(validate_email("lerato@example.co.za").is_ok());
/// assert!(validate_email("lerato@example").is_err());
/// assert!(validate_email("le rato@example.com").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if email.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "Email".to_string(),
        });
    }

    if !is_email_shaped(email) {
        return Err(ValidationError::InvalidFormat {
            field: "Email".to_string(),
            reason: "please enter a valid email address".to_string(),
        });
    }

    Ok(())
}

fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // At least one dot with something on both sides of some dot.
    domain
        .char_indices()
        .filter(|(_, c)| *c == '.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

/// Validates password length.
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "Password".to_string(),
        });
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::TooShort {
            field: "Password".to_string(),
            min: MIN_PASSWORD_LENGTH,
        });
    }

    Ok(())
}

/// Validates a profile display name and returns it trimmed.
pub fn validate_display_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "Name".to_string(),
        });
    }

    Ok(name.to_string())
}

/// Validates the forgot-password form.
pub fn validate_reset_email(email: &str) -> ValidationResult<()> {
    validate_email(email)
}

// =============================================================================
// Form Validators
// =============================================================================

/// Validates the sign-in form.
pub fn validate_sign_in(email: &str, password: &str) -> ValidationResult<()> {
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(ValidationError::MissingFields);
    }

    validate_email(email)?;
    validate_password(password)
}

/// Validates the sign-up form.
pub fn validate_sign_up(email: &str, password: &str, confirm_password: &str) -> ValidationResult<()> {
    if [email, password, confirm_password]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err(ValidationError::MissingFields);
    }

    validate_email(email)?;
    validate_password(password)?;

    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
