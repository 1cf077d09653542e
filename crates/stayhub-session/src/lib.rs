//! # stayhub-session: Identity Service Boundary for StayHub
//!
//! Sign-up, sign-in, password reset, profile name and sign-out, plus the
//! `AuthStatus` notifications the screens listen to.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stayhub-cli                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 stayhub-session (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   SessionService ──validate──► stayhub-core::validation         │   │
//! │  │        │                                                        │   │
//! │  │        ├──► P: IdentityProvider ──► AuthStatusChannel ──► subs  │   │
//! │  │        │       └── LocalIdentityProvider (argon2, KV store)     │   │
//! │  │        │                                                        │   │
//! │  │        └──► stayhub-store::Preferences (cached user)            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stayhub_session::{LocalIdentityProvider, SessionService};
//! use stayhub_store::{Preferences, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let provider = LocalIdentityProvider::open(store.clone()).await?;
//! let session = SessionService::new(provider, Preferences::new(store));
//!
//! session.sign_up("lerato@example.com", "secret1", "secret1").await?;
//! assert!(session.auth_status().is_authenticated());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod identity;
pub mod local;
pub mod service;
pub mod status;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{IdentityError, IdentityResult, SessionError, SessionResult};
pub use identity::IdentityProvider;
pub use local::LocalIdentityProvider;
pub use service::SessionService;
pub use status::AuthStatusChannel;
