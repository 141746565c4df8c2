pub mod aviationstack;
pub mod flights;

use crate::error::{ConfigError, InitializationError};
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt::{Debug, Formatter};
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub const ENV_VAR_PREFIX: &str = "FLIGHT_TRACKER__";
pub const SETTINGS_FILE: &str = "Settings.toml";
/// Older deployments only set this variable for the provider credential.
pub const LEGACY_ACCESS_KEY_VAR: &str = "AVIATIONSTACK_API_KEY";
const ACCESS_KEY_PATH: &str = "provider.access_key";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    pub provider: ProviderConfig,
    pub search: SearchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            provider: ProviderConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ProviderConfig {
    pub base_url: String,
    pub access_key: Option<AccessKey>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: aviationstack::DEFAULT_BASE_URL.to_string(),
            access_key: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    pub gateway_url: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            gateway_url: "http://127.0.0.1:8080".to_string(),
        }
    }
}

/// Provider credential. Never printed, so it can sit inside configs that get logged.
///
/// Deserializes from a string or an integer, since env providers turn an
/// all-digit key into a number.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessKey(String);

impl AccessKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for AccessKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AccessKeyVisitor)
    }
}

struct AccessKeyVisitor;

impl Visitor<'_> for AccessKeyVisitor {
    type Value = AccessKey;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("a string or integer access key")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(AccessKey::new(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(AccessKey(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(AccessKey(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(AccessKey(v.to_string()))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(AccessKey(v.to_string()))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        Ok(AccessKey(v.to_string()))
    }

    fn visit_char<E: de::Error>(self, v: char) -> Result<Self::Value, E> {
        Ok(AccessKey(v.to_string()))
    }

    // The default messages for the remaining kinds quote the value.
    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Err(E::custom("access key must be a string"))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Err(E::custom("access key must be a string"))
    }
}

impl Debug for AccessKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "AccessKey(<redacted>)")
    }
}

pub fn load_config() -> Result<Config, ConfigError> {
    let legacy = Env::raw()
        .only(&[LEGACY_ACCESS_KEY_VAR])
        .map(|_| ACCESS_KEY_PATH.into());
    let prefixed = Env::prefixed(ENV_VAR_PREFIX).split("__");

    let mut config = Figment::new()
        .merge(Toml::file(SETTINGS_FILE))
        .merge(legacy.clone())
        .merge(prefixed.clone())
        .extract::<Config>()?;

    // Env values are parsed, so `007123` would come back as `7123`. Keep the raw text.
    if let Some(raw) = raw_access_key(&prefixed).or_else(|| raw_access_key(&legacy)) {
        config.provider.access_key = Some(AccessKey(raw));
    }
    Ok(config)
}

fn raw_access_key(env: &Env) -> Option<String> {
    env.iter()
        .find(|(key, _)| key.as_str().eq_ignore_ascii_case(ACCESS_KEY_PATH))
        .map(|(_, value)| value)
}

pub mod error {
    use thiserror::Error;
    use tracing::dispatcher::SetGlobalDefaultError;

    #[derive(Debug, Error)]
    pub enum ConfigError {
        #[error("failed to load configuration: {0}")]
        Figment(#[from] figment::Error),
    }

    #[derive(Debug, Error)]
    pub enum InitializationError {
        #[error(transparent)]
        Tracing(#[from] SetGlobalDefaultError),
        #[error(transparent)]
        Config(#[from] ConfigError),
        #[error("failed to bind {addr}: {source}")]
        Bind {
            addr: String,
            source: std::io::Error,
        },
    }
}

/// Installs the compact console subscriber, filtered by `RUST_LOG`.
///
/// Output goes to stderr so the terminal client can keep stdout for rendered results.
pub fn init_tracing() -> Result<(), InitializationError> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

pub async fn shutdown_listener(token: Option<CancellationToken>) {
    let ctrl_c = signal::ctrl_c();
    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = ?e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!(name: "signal.ctrlc.received", "received Ctrl+C signal, shutting down"),
        _ = terminate => info!(name: "signal.sigterm.received", "received SIGTERM signal, shutting down"),
    }

    if let Some(token) = token {
        token.cancel();
    }
}
