//! Session provider: one-shot per-role authentication and page-object
//! hand-out.
//!
//! Each cacheable role is authenticated exactly once per provider, whatever
//! the caller concurrency; the resulting session capsule is persisted with a
//! durable write before any dependent caller proceeds, so hand-off is a
//! completion barrier rather than a lock. A failed login during setup is
//! tolerated: the capsule is persisted as-is and the failure surfaces in the
//! tests that depend on that role.

use crate::browser::{Browser, Page};
use crate::config::HarnessConfig;
use crate::pages::{LoginPage, Pages};
use crate::result::{ComprarError, ComprarResult};
use crate::session::{Role, SessionStore, StorageState};
use crate::wait::{poll_until, WaitOptions};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};

/// Hands out authenticated page bundles, one cached session per role
#[derive(Debug)]
pub struct SessionProvider {
    config: HarnessConfig,
    browser: Browser,
    store: SessionStore,
    cells: Mutex<HashMap<Role, Arc<OnceCell<StorageState>>>>,
}

impl SessionProvider {
    /// Launch a browser and create the provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the browser cannot be launched.
    pub async fn launch(config: HarnessConfig) -> ComprarResult<Self> {
        let browser = Browser::launch(config.browser_config()).await?;
        let store = SessionStore::new(&config.state_dir);
        Ok(Self {
            config,
            browser,
            store,
            cells: Mutex::new(HashMap::new()),
        })
    }

    /// The harness configuration
    #[must_use]
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// The on-disk session store
    #[must_use]
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Authenticate every cacheable role up front, in setup order.
    ///
    /// # Errors
    ///
    /// Returns an error only for infrastructure failures (tab creation,
    /// persistence); a rejected login is tolerated per role.
    pub async fn authenticate_all(&self) -> ComprarResult<()> {
        for role in Role::cacheable() {
            self.session(role).await?;
        }
        Ok(())
    }

    /// The cached session capsule for a role, authenticating on first use.
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::ExcludedRole`] for a role that must log in
    /// fresh, or an infrastructure error from authentication.
    pub async fn session(&self, role: Role) -> ComprarResult<StorageState> {
        if !role.pre_authenticated() {
            return Err(ComprarError::ExcludedRole {
                role: role.username().to_string(),
            });
        }
        let cell = {
            let mut cells = self.cells.lock().await;
            Arc::clone(cells.entry(role).or_default())
        };
        let state = cell
            .get_or_try_init(|| self.authenticate(role))
            .await?;
        Ok(state.clone())
    }

    /// Log the role in on a fresh tab and persist its session capsule.
    async fn authenticate(&self, role: Role) -> ComprarResult<StorageState> {
        let page = self.browser.new_page().await?;
        let login = LoginPage::new(page.clone());
        login.open().await?;
        login.wait_until_loaded().await?;
        login.login(role.username(), &self.config.password).await?;

        let options = WaitOptions::new().with_timeout_ms(self.config.auth_timeout_ms);
        let landed = poll_until(options, || async {
            page.current_url().await.contains("inventory")
        })
        .await;
        if !landed {
            tracing::warn!(
                role = %role,
                "login did not reach the inventory page; persisting session state as-is"
            );
        }

        let state = page.storage_state().await?;
        let path = self.store.save(role, &state)?;
        tracing::info!(role = %role, path = %path.display(), "session capsule persisted");
        Ok(state)
    }

    /// A page bundle on a fresh tab carrying the role's cached session.
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::ExcludedRole`] for the locked-out role, or an
    /// error from tab creation or state import.
    pub async fn pages(&self, role: Role) -> ComprarResult<Pages> {
        let state = self.session(role).await?;
        let page = self.browser.new_page().await?;
        page.restore_storage_state(&state).await?;
        Ok(Pages::new(page))
    }

    /// A page bundle on a fresh tab with no session, for flows that must
    /// start logged out.
    ///
    /// # Errors
    ///
    /// Returns an error if the tab cannot be created.
    pub async fn fresh_pages(&self) -> ComprarResult<Pages> {
        let page: Page = self.browser.new_page().await?;
        Ok(Pages::new(page))
    }
}
