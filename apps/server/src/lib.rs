//! # Identity Server Startup
//!
//! Composes the configuration root exactly once, before anything serves requests, and hands
//! it to dependents explicitly through [`AppState`]. There is no global configuration lookup.
//!
//! ## Example
//! ```no_run
//! use sts_server::Bootstrap;
//!
//! fn main() -> anyhow::Result<()> {
//!     let bootstrap = Bootstrap::builder().config_path("identity.toml").build()?;
//!     let state = bootstrap.into_state();
//!     # let _ = state;
//!     Ok(())
//! }
//! ```

mod state;

pub use crate::state::AppState;

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use sts_kernel::config::load_root_configuration;
use sts_kernel::domain::config::RootConfig;
use tracing::{info, warn};

/// A fluent builder for the startup [`Bootstrap`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct BootstrapBuilder {
    config: Option<Arc<dyn RootConfig>>,
    config_path: Option<PathBuf>,
}

impl BootstrapBuilder {
    /// Uses an already composed configuration root (fixture, alternative source).
    pub fn config(mut self, config: impl RootConfig + 'static) -> Self {
        self.config = Some(Arc::new(config));
        self
    }

    /// Loads the configuration root from this file, with `STS__*` environment overrides.
    pub fn config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Consumes the builder and composes the application state.
    ///
    /// # Process
    /// 1. Takes the pre-composed root, or binds one from the file and environment
    ///    (defaults and environment only when no file is given)
    /// 2. Freezes it into a shared [`AppState`]
    /// 3. Logs the effective sections
    ///
    /// # Errors
    /// Returns an error if the configuration file is missing or its values do not bind onto
    /// the configuration sections.
    pub fn build(self) -> Result<Bootstrap> {
        let config = match self.config {
            Some(config) => {
                if let Some(path) = &self.config_path {
                    warn!(
                        path = %path.display(),
                        "Configuration root supplied directly, ignoring configuration file"
                    );
                }
                config
            },
            None => {
                let root = load_root_configuration(self.config_path.as_deref())
                    .context("Critical: Configuration is malformed")?;
                Arc::new(root)
            },
        };

        let state = AppState::from_shared(config);
        log_sections(state.config());

        Ok(Bootstrap { state })
    }
}

/// Startup result: the composed, read-only application state.
#[derive(Debug)]
pub struct Bootstrap {
    state: AppState,
}

impl Bootstrap {
    /// Returns a new [`BootstrapBuilder`].
    pub fn builder() -> BootstrapBuilder {
        BootstrapBuilder::default()
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> AppState {
        self.state
    }
}

fn log_sections(config: &dyn RootConfig) {
    let admin = config.admin_configuration();
    info!(
        page_title = ?admin.page_title,
        theme = ?admin.theme,
        admin_base_url = ?admin.identity_admin_base_url,
        administration_role = ?admin.administration_role,
        "Admin UI configuration bound"
    );

    info!(
        enabled = config.register_configuration().enabled,
        "Self-registration configuration bound"
    );
}
