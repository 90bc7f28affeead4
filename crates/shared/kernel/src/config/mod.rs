use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;
use vhub_domain::constants::ENV_PREFIX;

const DEFAULT_CONFIG_FILE: &str = "server";

#[vhub_derive::vhub_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a config file overlaid with `VHUB__`-prefixed environment variables.
///
/// 1. **Base file**: `path`, or `server` in the working directory when `None`. The
///    extension may be omitted; any format the `config` crate understands is accepted.
/// 2. **Environment**: nested keys use a double underscore, so `VHUB__DATABASE__URL`
///    overrides `database.url`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, a value cannot be parsed,
/// or the merged tree does not match `T`.
///
/// # Example
/// ```rust
/// use vhub_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    build(path, environment())
}

/// Same as [`load_config`], but reads overrides from `vars` instead of the process
/// environment. Keys keep the `VHUB__` prefix.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T, I>(path: Option<impl AsRef<Path>>, vars: I) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (String, String)>,
{
    build(path, environment().source(Some(vars.into_iter().collect())))
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true)
}

fn build<T>(path: Option<impl AsRef<Path>>, environment: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    info!("Loading config from {}", effective_path.display());

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(environment)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
