use std::sync::Arc;
use sts_kernel::domain::config::{AdminConfiguration, RegisterConfiguration, RootConfig};

/// Shared, read-only application state handed to every dependent at construction time.
///
/// Cloning is inexpensive; all clones observe the same configuration root. Replacing the
/// configuration means building a new state, never mutating this one.
#[derive(Debug, Clone)]
pub struct AppState {
    config: Arc<dyn RootConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: impl RootConfig + 'static) -> Self {
        Self { config: Arc::new(config) }
    }

    #[must_use]
    pub fn from_shared(config: Arc<dyn RootConfig>) -> Self {
        Self { config }
    }

    /// The configuration capability, without committing to its concrete type.
    #[must_use]
    pub fn config(&self) -> &dyn RootConfig {
        self.config.as_ref()
    }
}

impl RootConfig for AppState {
    fn admin_configuration(&self) -> &AdminConfiguration {
        self.config.admin_configuration()
    }

    fn register_configuration(&self) -> &RegisterConfiguration {
        self.config.register_configuration()
    }
}
