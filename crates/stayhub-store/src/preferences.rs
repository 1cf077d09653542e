//! # Preferences
//!
//! Typed access to the handful of values the app keeps on the device.
//!
//! ## Keys
//! ```text
//! ┌──────────────────────┬────────────────────────────────────────────────┐
//! │ key                  │ value                                          │
//! ├──────────────────────┼────────────────────────────────────────────────┤
//! │ hasSeenOnboarding    │ "true" once the intro slides are done          │
//! │ user                 │ {"email": "...", "uid": "..."}                 │
//! │ bookings             │ JSON list of BookingRecord, newest first       │
//! └──────────────────────┴────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use stayhub_core::booking::sample_bookings;
use stayhub_core::{AuthUser, BookingRecord};

use crate::error::{StoreError, StoreResult};
use crate::kv::KeyValueStore;

pub const ONBOARDING_KEY: &str = "hasSeenOnboarding";
pub const USER_KEY: &str = "user";
pub const BOOKINGS_KEY: &str = "bookings";

/// The signed-in user as cached on the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedUser {
    pub email: String,
    pub uid: String,
}

impl From<&AuthUser> for CachedUser {
    fn from(user: &AuthUser) -> Self {
        CachedUser {
            email: user.email.clone(),
            uid: user.uid.clone(),
        }
    }
}

impl From<CachedUser> for AuthUser {
    fn from(cached: CachedUser) -> Self {
        AuthUser {
            uid: cached.uid,
            email: cached.email,
            display_name: None,
        }
    }
}

/// Typed preferences over any `KeyValueStore`.
#[derive(Debug, Clone)]
pub struct Preferences<S> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Preferences { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // =========================================================================
    // Onboarding
    // =========================================================================

    /// Whether the intro slides were completed. A failed read counts as
    /// "not seen" so the app can still start.
    pub async fn has_seen_onboarding(&self) -> bool {
        match self.store.get(ONBOARDING_KEY).await {
            Ok(value) => value.as_deref() == Some("true"),
            Err(err) => {
                warn!(error = %err, "Could not read onboarding flag, showing onboarding");
                false
            }
        }
    }

    pub async fn set_onboarding_seen(&self) -> StoreResult<()> {
        self.store.set(ONBOARDING_KEY, "true").await?;
        info!("Onboarding marked as seen");
        Ok(())
    }

    // =========================================================================
    // Cached User
    // =========================================================================

    pub async fn cached_user(&self) -> StoreResult<Option<CachedUser>> {
        let Some(raw) = self.store.get(USER_KEY).await? else {
            debug!("No cached user");
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::corrupt(USER_KEY, e))
    }

    pub async fn save_user(&self, user: &CachedUser) -> StoreResult<()> {
        let raw = serde_json::to_string(user)?;
        self.store.set(USER_KEY, &raw).await?;
        info!(uid = %user.uid, "Cached signed-in user");
        Ok(())
    }

    pub async fn clear_user(&self) -> StoreResult<()> {
        self.store.remove(USER_KEY).await?;
        info!("Cleared cached user");
        Ok(())
    }

    // =========================================================================
    // Booking History
    // =========================================================================

    /// Booking history, newest first. A device with no history yet gets the
    /// sample bookings.
    pub async fn bookings(&self) -> StoreResult<Vec<BookingRecord>> {
        match self.store.get(BOOKINGS_KEY).await? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| StoreError::corrupt(BOOKINGS_KEY, e)),
            None => {
                debug!("No stored bookings, using samples");
                Ok(sample_bookings())
            }
        }
    }

    /// Puts `record` at the top of the history and returns the new list.
    pub async fn add_booking(&self, record: BookingRecord) -> StoreResult<Vec<BookingRecord>> {
        let mut bookings = self.bookings().await?;

        info!(
            booking_id = %record.id,
            hotel = %record.hotel_name,
            nights = record.nights,
            total_cents = record.total_cents,
            "Recording booking"
        );

        bookings.insert(0, record);
        let raw = serde_json::to_string(&bookings)?;
        self.store.set(BOOKINGS_KEY, &raw).await?;

        Ok(bookings)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use crate::sqlite::SqliteStore;
    use async_trait::async_trait;
    use stayhub_core::BookingStatus;

    /// Store whose reads always fail.
    struct BrokenStore;

    #[async_trait]
    impl KeyValueStore for BrokenStore {
        async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::Internal("disk unavailable".to_string()))
        }

        async fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Internal("disk unavailable".to_string()))
        }

        async fn remove(&self, _key: &str) -> StoreResult<()> {
            Err(StoreError::Internal("disk unavailable".to_string()))
        }
    }

    fn user() -> CachedUser {
        CachedUser {
            email: "lerato@example.com".to_string(),
            uid: "uid-42".to_string(),
        }
    }

    #[tokio::test]
    async fn test_onboarding_flag() {
        let prefs = Preferences::new(MemoryStore::new());
        assert!(!prefs.has_seen_onboarding().await);

        prefs.set_onboarding_seen().await.unwrap();
        assert!(prefs.has_seen_onboarding().await);
    }

    #[tokio::test]
    async fn test_onboarding_read_failure_degrades_to_false() {
        let prefs = Preferences::new(BrokenStore);
        assert!(!prefs.has_seen_onboarding().await);
        assert!(prefs.set_onboarding_seen().await.is_err());
    }

    #[tokio::test]
    async fn test_user_json_shape() {
        let store = MemoryStore::new();
        let prefs = Preferences::new(store.clone());

        prefs.save_user(&user()).await.unwrap();
        let raw = store.get(USER_KEY).await.unwrap().unwrap();
        assert_eq!(raw, r#"{"email":"lerato@example.com","uid":"uid-42"}"#);

        assert_eq!(prefs.cached_user().await.unwrap(), Some(user()));
        prefs.clear_user().await.unwrap();
        assert_eq!(prefs.cached_user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_user_is_reported() {
        let store = MemoryStore::new();
        store.set(USER_KEY, "not json").await.unwrap();

        let err = Preferences::new(store).cached_user().await.unwrap_err();
        assert!(matches!(err, StoreError::CorruptValue { ref key, .. } if key == USER_KEY));
    }

    #[tokio::test]
    async fn test_bookings_seeded_then_prepended() {
        let prefs = Preferences::new(MemoryStore::new());
        let seeded = prefs.bookings().await.unwrap();
        assert_eq!(seeded.len(), 3);

        let mut record = seeded[1].clone();
        record.id = "new".to_string();
        record.status = BookingStatus::Confirmed;

        let updated = prefs.add_booking(record).await.unwrap();
        assert_eq!(updated.len(), 4);
        assert_eq!(updated[0].id, "new");
        assert_eq!(prefs.bookings().await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_preferences_over_sqlite() {
        let prefs = Preferences::new(SqliteStore::in_memory().await.unwrap());

        prefs.set_onboarding_seen().await.unwrap();
        prefs.save_user(&user()).await.unwrap();

        assert!(prefs.has_seen_onboarding().await);
        assert_eq!(prefs.cached_user().await.unwrap(), Some(user()));

        let auth: AuthUser = prefs.cached_user().await.unwrap().unwrap().into();
        assert_eq!(auth.greeting_name(), "lerato");
    }
}
