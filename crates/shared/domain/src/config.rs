use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Debug;
use std::sync::Arc;

/// Read access to the configuration sections of the identity server.
///
/// Consumers declare this capability instead of depending on [`RootConfiguration`], so a
/// test fixture or any other composition strategy can be passed in its place. The contract
/// has no mutators.
pub trait RootConfig: Debug + Send + Sync {
    /// Administrative UI section.
    fn admin_configuration(&self) -> &AdminConfiguration;

    /// Self-registration section.
    fn register_configuration(&self) -> &RegisterConfiguration;
}

/// Composition root of the configuration tree.
///
/// Owns exactly one [`AdminConfiguration`] and one [`RegisterConfiguration`]. Sections are
/// frozen behind an `Arc` at construction: clones are inexpensive and share the same section
/// instances, and nothing can swap a section on an existing root.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct RootConfiguration {
    inner: Arc<RootConfigurationInner>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct RootConfigurationInner {
    admin_configuration: AdminConfiguration,
    register_configuration: RegisterConfiguration,
}

impl RootConfiguration {
    /// Creates a root with every section at its defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Composes a root from sections populated elsewhere (binding step, fixtures).
    #[must_use]
    pub fn from_sections(
        admin_configuration: AdminConfiguration,
        register_configuration: RegisterConfiguration,
    ) -> Self {
        Self {
            inner: Arc::new(RootConfigurationInner {
                admin_configuration,
                register_configuration,
            }),
        }
    }
}

impl RootConfig for RootConfiguration {
    fn admin_configuration(&self) -> &AdminConfiguration {
        &self.inner.admin_configuration
    }

    fn register_configuration(&self) -> &RegisterConfiguration {
        &self.inner.register_configuration
    }
}

impl<T: RootConfig + ?Sized> RootConfig for &T {
    fn admin_configuration(&self) -> &AdminConfiguration {
        (**self).admin_configuration()
    }

    fn register_configuration(&self) -> &RegisterConfiguration {
        (**self).register_configuration()
    }
}

impl<T: RootConfig + ?Sized> RootConfig for Box<T> {
    fn admin_configuration(&self) -> &AdminConfiguration {
        (**self).admin_configuration()
    }

    fn register_configuration(&self) -> &RegisterConfiguration {
        (**self).register_configuration()
    }
}

impl<T: RootConfig + ?Sized> RootConfig for Arc<T> {
    fn admin_configuration(&self) -> &AdminConfiguration {
        (**self).admin_configuration()
    }

    fn register_configuration(&self) -> &RegisterConfiguration {
        (**self).register_configuration()
    }
}

// Sections are deserialized directly (no `flatten`), so loosely typed sources such as
// environment strings still coerce into `bool` fields.
impl Serialize for RootConfiguration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.inner.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RootConfiguration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let inner = RootConfigurationInner::deserialize(deserializer)?;
        Ok(Self { inner: Arc::new(inner) })
    }
}

/// Administrative UI bootstrap settings (branding, theme, admin portal link).
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfiguration {
    pub page_title: Option<String>,
    pub home_page_logo_uri: Option<String>,
    pub favicon_uri: Option<String>,
    pub theme: Option<String>,
    pub custom_theme_css: Option<String>,
    /// Base URL of the separate administration portal.
    pub identity_admin_base_url: Option<String>,
    /// Role that grants access to the administration portal.
    pub administration_role: Option<String>,
}

/// Self-registration feature settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterConfiguration {
    pub enabled: bool,
}

// --- Default ---

impl Default for RegisterConfiguration {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_section_instances() {
        let root = RootConfiguration::new();
        let clone = root.clone();

        assert!(Arc::ptr_eq(&root.inner, &clone.inner));
        assert!(std::ptr::eq(root.admin_configuration(), clone.admin_configuration()));
    }

    #[test]
    fn from_sections_keeps_given_values() {
        let admin = AdminConfiguration {
            page_title: Some("Identity".to_owned()),
            ..AdminConfiguration::default()
        };
        let root =
            RootConfiguration::from_sections(admin.clone(), RegisterConfiguration { enabled: false });

        assert_eq!(root.admin_configuration(), &admin);
        assert!(!root.register_configuration().enabled);
    }
}
