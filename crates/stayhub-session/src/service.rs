//! # Session Service
//!
//! What the auth and profile screens call. Forms are checked before the
//! identity provider sees them, and the signed-in user is mirrored into
//! device preferences.
//!
//! ## Sign-In Flow
//! ```text
//! validate_sign_in(email, password)   ── Err ──► SessionError::Validation
//!          │ ok
//!          ▼
//! provider.sign_in(email, password)   ── Err ──► SessionError::Identity
//!          │ ok (provider publishes Authenticated)
//!          ▼
//! preferences.save_user({email, uid}) ── Err ──► logged, user still returned
//! ```

use tokio::sync::watch;
use tracing::{info, warn};

use stayhub_core::validation::{
    validate_display_name, validate_reset_email, validate_sign_in, validate_sign_up,
};
use stayhub_core::{AuthStatus, AuthUser};
use stayhub_store::{CachedUser, KeyValueStore, Preferences};

use crate::error::SessionResult;
use crate::identity::IdentityProvider;

/// Auth operations for the app screens.
pub struct SessionService<P, S> {
    provider: P,
    preferences: Preferences<S>,
}

impl<P: IdentityProvider, S: KeyValueStore> SessionService<P, S> {
    pub fn new(provider: P, preferences: Preferences<S>) -> Self {
        SessionService {
            provider,
            preferences,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn preferences(&self) -> &Preferences<S> {
        &self.preferences
    }

    /// Current status, for the booking gate and review form.
    pub fn auth_status(&self) -> AuthStatus {
        self.provider.status().current()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthStatus> {
        self.provider.status().subscribe()
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> SessionResult<AuthUser> {
        validate_sign_in(email, password)?;

        let user = self.provider.sign_in(email.trim(), password).await?;
        self.remember_user(&user).await;

        info!(uid = %user.uid, "Session started");
        Ok(user)
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> SessionResult<AuthUser> {
        validate_sign_up(email, password, confirm_password)?;

        let user = self.provider.sign_up(email.trim(), password).await?;
        self.remember_user(&user).await;

        info!(uid = %user.uid, "Session started for new account");
        Ok(user)
    }

    /// Mirrors `user` into preferences. The provider already holds the
    /// session, so a failed write only loses the offline fallback.
    async fn remember_user(&self, user: &AuthUser) {
        if let Err(err) = self.preferences.save_user(&CachedUser::from(user)).await {
            warn!(uid = %user.uid, error = %err, "Could not cache signed-in user");
        }
    }

    pub async fn request_password_reset(&self, email: &str) -> SessionResult<()> {
        validate_reset_email(email)?;
        self.provider.send_password_reset(email.trim()).await?;
        Ok(())
    }

    /// Saves a new display name for the signed-in user.
    pub async fn update_display_name(&self, name: &str) -> SessionResult<AuthUser> {
        let name = validate_display_name(name)?;
        Ok(self.provider.update_display_name(&name).await?)
    }

    /// Signs out and forgets the cached user.
    pub async fn sign_out(&self) -> SessionResult<()> {
        self.provider.sign_out().await?;
        self.preferences.clear_user().await?;
        info!("Session ended");
        Ok(())
    }

    /// The signed-in user, falling back to the cached one when the provider
    /// has no answer.
    pub async fn current_user(&self) -> SessionResult<Option<AuthUser>> {
        match self.provider.current_user().await {
            Ok(user) => Ok(user),
            Err(err) => {
                warn!(error = %err, "Identity provider unavailable, using cached user");
                Ok(self.preferences.cached_user().await?.map(AuthUser::from))
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{IdentityError, SessionError};
    use crate::local::LocalIdentityProvider;
    use async_trait::async_trait;
    use stayhub_core::ValidationError;
    use stayhub_store::{MemoryStore, StoreError, StoreResult};

    /// Preferences storage that refuses every write.
    struct ReadOnlyStore;

    #[async_trait]
    impl KeyValueStore for ReadOnlyStore {
        async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Internal("read-only".to_string()))
        }

        async fn remove(&self, _key: &str) -> StoreResult<()> {
            Err(StoreError::Internal("read-only".to_string()))
        }
    }

    type Service = SessionService<LocalIdentityProvider<MemoryStore>, MemoryStore>;

    async fn service() -> Service {
        let store = MemoryStore::new();
        let provider = LocalIdentityProvider::open(store.clone()).await.unwrap();
        SessionService::new(provider, Preferences::new(store))
    }

    #[tokio::test]
    async fn test_validation_runs_before_provider() {
        let service = service().await;

        assert!(matches!(
            service.sign_up("a@b.co", "secret1", "secret2").await,
            Err(SessionError::Validation(ValidationError::PasswordMismatch))
        ));
        assert!(matches!(
            service.sign_in("", "secret1").await,
            Err(SessionError::Validation(ValidationError::MissingFields))
        ));
        assert!(matches!(
            service.update_display_name("   ").await,
            Err(SessionError::Validation(_))
        ));
        assert!(!service.auth_status().is_authenticated());
    }

    #[tokio::test]
    async fn test_sign_up_caches_user() {
        let service = service().await;
        let user = service
            .sign_up("lerato@example.com", "secret1", "secret1")
            .await
            .unwrap();

        let cached = service.preferences().cached_user().await.unwrap().unwrap();
        assert_eq!(cached.email, user.email);
        assert_eq!(cached.uid, user.uid);
        assert!(service.auth_status().is_authenticated());
    }

    #[tokio::test]
    async fn test_sign_out_clears_cache_and_notifies() {
        let service = service().await;
        service
            .sign_up("thabo@example.com", "secret1", "secret1")
            .await
            .unwrap();
        let mut rx = service.subscribe();

        service.sign_out().await.unwrap();

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), AuthStatus::Anonymous);
        assert_eq!(service.preferences().cached_user().await.unwrap(), None);
        assert_eq!(service.current_user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_provider_errors_pass_through() {
        let service = service().await;
        service.sign_up("a@b.co", "secret1", "secret1").await.unwrap();
        service.sign_out().await.unwrap();

        let err = service.sign_in("a@b.co", "secret9").await.unwrap_err();
        assert!(matches!(err, SessionError::Identity(IdentityError::WrongPassword)));
        assert_eq!(err.to_string(), "Incorrect password. Please try again.");
        assert_eq!(service.preferences().cached_user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_profile_rename() {
        let service = service().await;
        service.sign_up("sarah@example.com", "secret1", "secret1").await.unwrap();

        let user = service.update_display_name("  Sarah K. ").await.unwrap();
        assert_eq!(user.display_name.as_deref(), Some("Sarah K."));
        assert_eq!(service.current_user().await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_password_reset_requires_email() {
        let service = service().await;
        assert!(matches!(
            service.request_password_reset("").await,
            Err(SessionError::Validation(ValidationError::Required { .. }))
        ));
        assert!(matches!(
            service.request_password_reset("ghost@example.com").await,
            Err(SessionError::Identity(IdentityError::UserNotFound))
        ));
    }

    #[tokio::test]
    async fn test_cache_write_failure_keeps_session() {
        let provider = LocalIdentityProvider::open(MemoryStore::new()).await.unwrap();
        let service = SessionService::new(provider, Preferences::new(ReadOnlyStore));

        let user = service
            .sign_up("naledi@example.com", "secret1", "secret1")
            .await
            .unwrap();
        assert_eq!(user.email, "naledi@example.com");
        assert!(service.auth_status().is_authenticated());

        service.provider().sign_out().await.unwrap();
        let user = service.sign_in("naledi@example.com", "secret1").await.unwrap();
        assert_eq!(service.current_user().await.unwrap(), Some(user));
    }
}
