use std::borrow::Cow;

/// Errors raised while binding configuration sources.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Adds `.context(...)` to results that can end up as a [`ConfigError`].
pub trait ConfigErrorExt<T> {
    /// Attaches a human-readable context to the error.
    ///
    /// # Errors
    /// Returns the original error, converted into [`ConfigError`] with the context attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            let ConfigError::Config { context: c, .. } = &mut e;
            *c = Some(context.into());
            e
        })
    }
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_rendered_in_display() {
        let result: Result<(), config::ConfigError> =
            Err(config::ConfigError::Message("bad value".to_owned()));

        let err = result.context("Reading identity.toml").unwrap_err();
        assert_eq!(err.to_string(), "Config error (Reading identity.toml): bad value");
    }

    #[test]
    fn context_replaces_previous_context() {
        let result: Result<(), ConfigError> =
            Err(config::ConfigError::Message("bad value".to_owned()).into());
        assert_eq!(result.as_ref().unwrap_err().to_string(), "Config error: bad value");

        let err = result.context("Binding sections").unwrap_err();
        assert_eq!(err.to_string(), "Config error (Binding sections): bad value");
    }
}
