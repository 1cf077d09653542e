//! # stayhub-store: On-Device Persistence for StayHub
//!
//! The app keeps a few small values on the device: whether onboarding was
//! seen, the last signed-in user, booking history and (for the local
//! identity provider) accounts. All of it goes through one string
//! key/value seam.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stayhub-cli / stayhub-session                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  stayhub-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  Preferences  │───►│ KeyValueStore │◄───│  Migrations  │  │   │
//! │  │   │  onboarding   │    │  MemoryStore  │    │  (embedded)  │  │   │
//! │  │   │  user         │    │  SqliteStore  │    │ 001_kv.sql   │  │   │
//! │  │   │  bookings     │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file in the platform data directory                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stayhub_store::{Preferences, SqliteStore, StoreConfig};
//!
//! let store = SqliteStore::open(StoreConfig::new("stayhub.db")).await?;
//! let prefs = Preferences::new(store);
//! if !prefs.has_seen_onboarding().await {
//!     // show the intro slides
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod kv;
pub mod migrations;
pub mod preferences;
pub mod sqlite;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use kv::{KeyValueStore, MemoryStore};
pub use preferences::{CachedUser, Preferences};
pub use sqlite::{SqliteStore, StoreConfig};
