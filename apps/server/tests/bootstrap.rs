use std::fs;
use std::sync::Arc;
use sts_kernel::domain::config::{
    AdminConfiguration, RegisterConfiguration, RootConfig, RootConfiguration,
};
use sts_server::{AppState, Bootstrap};
use tempfile::tempdir;

#[derive(Debug)]
struct FixtureConfig {
    admin: AdminConfiguration,
    register: RegisterConfiguration,
}

impl RootConfig for FixtureConfig {
    fn admin_configuration(&self) -> &AdminConfiguration {
        &self.admin
    }

    fn register_configuration(&self) -> &RegisterConfiguration {
        &self.register
    }
}

#[test]
fn fixture_config_is_used_as_is() -> anyhow::Result<()> {
    let fixture = FixtureConfig {
        admin: AdminConfiguration {
            page_title: Some("Fixture".to_owned()),
            ..AdminConfiguration::default()
        },
        register: RegisterConfiguration { enabled: false },
    };

    let bootstrap = Bootstrap::builder()
        .config(fixture)
        .config_path("does-not-exist.toml")
        .build()?;

    let config = bootstrap.state().config();
    assert_eq!(config.admin_configuration().page_title.as_deref(), Some("Fixture"));
    assert!(!config.register_configuration().enabled);
    Ok(())
}

#[test]
fn config_file_is_bound_into_state() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("identity.toml");
    fs::write(
        &path,
        "[admin_configuration]\ntheme = \"darkly\"\n\n[register_configuration]\nenabled = false\n",
    )?;

    let state = Bootstrap::builder().config_path(&path).build()?.into_state();

    assert_eq!(state.admin_configuration().theme.as_deref(), Some("darkly"));
    assert!(!state.register_configuration().enabled);
    assert!(state.admin_configuration().page_title.is_none());
    Ok(())
}

#[test]
fn missing_config_file_fails_startup() -> anyhow::Result<()> {
    let dir = tempdir()?;

    let err = Bootstrap::builder()
        .config_path(dir.path().join("absent.toml"))
        .build()
        .expect_err("startup must fail without the requested file");

    assert!(err.to_string().contains("Configuration is malformed"));
    assert!(format!("{err:#}").contains("Failed to build config"));
    Ok(())
}

#[test]
fn no_config_source_yields_default_sections() -> anyhow::Result<()> {
    let state = Bootstrap::builder().build()?.into_state();
    let defaults = RootConfiguration::new();

    assert_eq!(state.admin_configuration(), defaults.admin_configuration());
    assert_eq!(state.register_configuration(), defaults.register_configuration());
    assert!(state.register_configuration().enabled);
    Ok(())
}

#[test]
fn state_clones_share_one_root() {
    let state = AppState::new(RootConfiguration::new());
    let clone = state.clone();

    assert!(std::ptr::eq(state.admin_configuration(), clone.admin_configuration()));
    assert!(std::ptr::eq(state.register_configuration(), clone.register_configuration()));
}

#[test]
fn state_is_readable_from_many_threads() {
    let root = RootConfiguration::from_sections(
        AdminConfiguration {
            identity_admin_base_url: Some("https://admin.acme.test".to_owned()),
            ..AdminConfiguration::default()
        },
        RegisterConfiguration::default(),
    );
    let state = AppState::from_shared(Arc::new(root));

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let state = state.clone();
            scope.spawn(move || {
                assert_eq!(
                    state.config().admin_configuration().identity_admin_base_url.as_deref(),
                    Some("https://admin.acme.test")
                );
                assert!(state.config().register_configuration().enabled);
            });
        }
    });
}
