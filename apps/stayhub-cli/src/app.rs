//! Wiring: config → store → identity provider → session.

use tracing::info;

use stayhub_core::catalog::sample_hotels;
use stayhub_core::{AuthStatus, Hotel};
use stayhub_session::{LocalIdentityProvider, SessionService};
use stayhub_store::{Preferences, SqliteStore, StoreConfig};

use crate::config::AppConfig;
use crate::error::AppResult;

pub type Session = SessionService<LocalIdentityProvider<SqliteStore>, SqliteStore>;

/// Everything a command needs.
pub struct App {
    pub config: AppConfig,
    pub session: Session,
    pub hotels: Vec<Hotel>,
}

impl App {
    pub async fn open(config: AppConfig) -> AppResult<Self> {
        config.ensure_data_dir()?;

        let store = SqliteStore::open(StoreConfig::new(config.store.database_path.clone())).await?;
        let provider = LocalIdentityProvider::open(store.clone()).await?;
        let session = SessionService::new(provider, Preferences::new(store));

        info!(
            authenticated = session.auth_status().is_authenticated(),
            "App ready"
        );

        Ok(App {
            config,
            session,
            hotels: sample_hotels(),
        })
    }

    pub fn preferences(&self) -> &Preferences<SqliteStore> {
        self.session.preferences()
    }

    pub fn auth_status(&self) -> AuthStatus {
        self.session.auth_status()
    }

    /// Amount in the configured currency.
    pub fn money(&self, amount: stayhub_core::Money) -> String {
        amount.format_with(&self.config.display.currency_symbol)
    }

    pub async fn close(&self) {
        self.preferences().store().close().await;
    }
}
