//! # Local Identity Provider
//!
//! An `IdentityProvider` that keeps accounts on the device, for offline use
//! and tests. Passwords are argon2 hashes.
//!
//! ## Storage
//! ```text
//! account:<email>   {"uid", "email", "password_hash", "display_name", "disabled"}
//! session           <email of the signed-in account>
//! ```
//!
//! ## Sign-In Checks
//! ```text
//! locked out? ──yes──► TooManyRequests
//!     │ no
//! account? ────no────► UserNotFound
//!     │ yes
//! disabled? ──yes────► UserDisabled
//!     │ no
//! password? ──bad────► WrongPassword (attempt counted)
//!     │ ok
//! session saved, Authenticated published, attempts reset
//! ```

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use stayhub_core::validation::{validate_email, MIN_PASSWORD_LENGTH};
use stayhub_core::{AuthStatus, AuthUser};
use stayhub_store::{KeyValueStore, StoreError};

use crate::error::{IdentityError, IdentityResult};
use crate::identity::IdentityProvider;
use crate::status::AuthStatusChannel;

const ACCOUNT_KEY_PREFIX: &str = "account:";
const SESSION_KEY: &str = "session";

/// Failed sign-ins allowed before the account is locked.
pub const DEFAULT_MAX_FAILED_ATTEMPTS: u32 = 5;

/// How long a locked account stays locked.
pub const DEFAULT_LOCKOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredAccount {
    uid: String,
    email: String,
    password_hash: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    disabled: bool,
}

impl StoredAccount {
    fn to_user(&self) -> AuthUser {
        AuthUser {
            uid: self.uid.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct FailedAttempts {
    count: u32,
    last: Instant,
}

fn account_key(email: &str) -> String {
    format!("{ACCOUNT_KEY_PREFIX}{email}")
}

/// Accounts are keyed case-insensitively.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn hash_password(password: &str) -> IdentityResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| IdentityError::Hashing(e.to_string()))
}

fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

// =============================================================================
// Provider
// =============================================================================

/// Device-local accounts over any `KeyValueStore`.
pub struct LocalIdentityProvider<S> {
    store: S,
    status: AuthStatusChannel,
    failures: RwLock<HashMap<String, FailedAttempts>>,
    max_failed_attempts: u32,
    lockout: Duration,
}

impl<S: KeyValueStore> LocalIdentityProvider<S> {
    /// Opens the provider and restores a saved session, publishing it.
    pub async fn open(store: S) -> IdentityResult<Self> {
        let provider = LocalIdentityProvider {
            store,
            status: AuthStatusChannel::new(),
            failures: RwLock::new(HashMap::new()),
            max_failed_attempts: DEFAULT_MAX_FAILED_ATTEMPTS,
            lockout: DEFAULT_LOCKOUT,
        };

        let restored = provider.current_user().await?;
        if let Some(user) = &restored {
            info!(uid = %user.uid, "Restored signed-in session");
        }
        provider.status.publish(AuthStatus::from(restored));

        Ok(provider)
    }

    /// Sets the failed-attempt limit and lock duration.
    pub fn with_lockout(mut self, max_failed_attempts: u32, lockout: Duration) -> Self {
        self.max_failed_attempts = max_failed_attempts.max(1);
        self.lockout = lockout;
        self
    }

    /// Disables or re-enables an account. Disabled accounts can't sign in.
    pub async fn set_disabled(&self, email: &str, disabled: bool) -> IdentityResult<()> {
        let mut account = self
            .load_account(&normalize_email(email))
            .await?
            .ok_or(IdentityError::UserNotFound)?;

        account.disabled = disabled;
        self.save_account(&account).await?;
        info!(uid = %account.uid, disabled, "Account availability changed");
        Ok(())
    }

    async fn load_account(&self, email: &str) -> IdentityResult<Option<StoredAccount>> {
        let key = account_key(email);
        match self.store.get(&key).await? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| IdentityError::Storage(StoreError::corrupt(key, e))),
            None => Ok(None),
        }
    }

    async fn save_account(&self, account: &StoredAccount) -> IdentityResult<()> {
        let raw = serde_json::to_string(account).map_err(StoreError::from)?;
        self.store.set(&account_key(&account.email), &raw).await?;
        Ok(())
    }

    async fn start_session(&self, account: &StoredAccount) -> IdentityResult<AuthUser> {
        self.store.set(SESSION_KEY, &account.email).await?;
        let user = account.to_user();
        self.status.publish(AuthStatus::Authenticated(user.clone()));
        Ok(user)
    }

    /// Counts an attempt against `email` before the password is checked.
    /// The lock check and the increment happen under one write lock.
    async fn claim_attempt(&self, email: &str) -> IdentityResult<()> {
        let mut failures = self.failures.write().await;
        let now = Instant::now();
        let entry = failures.entry(email.to_string()).or_insert(FailedAttempts {
            count: 0,
            last: now,
        });

        if entry.count >= self.max_failed_attempts {
            if entry.last.elapsed() < self.lockout {
                return Err(IdentityError::TooManyRequests);
            }
            // The lock has run out; start a fresh count.
            entry.count = 0;
        }

        entry.count += 1;
        entry.last = now;
        Ok(())
    }

    /// Gives back a claimed attempt that never reached the password check.
    async fn release_attempt(&self, email: &str) {
        let mut failures = self.failures.write().await;
        if let Some(entry) = failures.get_mut(email) {
            entry.count = entry.count.saturating_sub(1);
            if entry.count == 0 {
                failures.remove(email);
            }
        }
    }

    /// Account for `email` if it may sign in with `password`.
    async fn check_credentials(&self, email: &str, password: &str) -> IdentityResult<StoredAccount> {
        let account = self
            .load_account(email)
            .await?
            .ok_or(IdentityError::UserNotFound)?;

        if account.disabled {
            return Err(IdentityError::UserDisabled);
        }

        if !verify_password(password, &account.password_hash) {
            return Err(IdentityError::WrongPassword);
        }

        Ok(account)
    }

    async fn clear_failures(&self, email: &str) {
        self.failures.write().await.remove(email);
    }
}

#[async_trait]
impl<S: KeyValueStore> IdentityProvider for LocalIdentityProvider<S> {
    async fn sign_in(&self, email: &str, password: &str) -> IdentityResult<AuthUser> {
        let email = normalize_email(email);
        validate_email(&email).map_err(|_| IdentityError::InvalidEmail)?;

        self.claim_attempt(&email).await?;

        let account = match self.check_credentials(&email, password).await {
            Ok(account) => account,
            Err(IdentityError::WrongPassword) => {
                warn!("Failed sign-in attempt");
                return Err(IdentityError::WrongPassword);
            }
            Err(err) => {
                self.release_attempt(&email).await;
                return Err(err);
            }
        };

        self.clear_failures(&email).await;
        let user = self.start_session(&account).await?;
        info!(uid = %user.uid, "Signed in");
        Ok(user)
    }

    async fn sign_up(&self, email: &str, password: &str) -> IdentityResult<AuthUser> {
        let email = normalize_email(email);
        validate_email(&email).map_err(|_| IdentityError::InvalidEmail)?;

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(IdentityError::WeakPassword);
        }

        if self.load_account(&email).await?.is_some() {
            return Err(IdentityError::EmailAlreadyInUse);
        }

        let account = StoredAccount {
            uid: Uuid::new_v4().simple().to_string(),
            email,
            password_hash: hash_password(password)?,
            display_name: None,
            disabled: false,
        };
        self.save_account(&account).await?;

        let user = self.start_session(&account).await?;
        info!(uid = %user.uid, "Account created");
        Ok(user)
    }

    async fn send_password_reset(&self, email: &str) -> IdentityResult<()> {
        let email = normalize_email(email);
        validate_email(&email).map_err(|_| IdentityError::InvalidEmail)?;

        let account = self
            .load_account(&email)
            .await?
            .ok_or(IdentityError::UserNotFound)?;

        // No mail transport on the device; the request is only logged.
        info!(uid = %account.uid, "Password reset requested");
        Ok(())
    }

    async fn update_display_name(&self, display_name: &str) -> IdentityResult<AuthUser> {
        let email = self
            .store
            .get(SESSION_KEY)
            .await?
            .ok_or(IdentityError::NotSignedIn)?;

        let mut account = self
            .load_account(&email)
            .await?
            .ok_or(IdentityError::NotSignedIn)?;

        account.display_name = Some(display_name.to_string());
        self.save_account(&account).await?;

        let user = account.to_user();
        self.status.publish(AuthStatus::Authenticated(user.clone()));
        info!(uid = %user.uid, "Display name updated");
        Ok(user)
    }

    async fn sign_out(&self) -> IdentityResult<()> {
        self.store.remove(SESSION_KEY).await?;
        self.status.publish(AuthStatus::Anonymous);
        info!("Signed out");
        Ok(())
    }

    async fn current_user(&self) -> IdentityResult<Option<AuthUser>> {
        let Some(email) = self.store.get(SESSION_KEY).await? else {
            return Ok(None);
        };

        let account = self.load_account(&email).await?;
        if account.is_none() {
            debug!("Session points at a missing account");
        }
        Ok(account.map(|a| a.to_user()))
    }

    fn status(&self) -> &AuthStatusChannel {
        &self.status
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
