use std::{env, fmt, path::PathBuf, str::FromStr};

use tracing::{info, warn};

use crate::error::{PortalError, Result};

pub const DEFAULT_STORE_PATH: &str = ".hr-portal/portal.json";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Whether the HR shortlist outlives the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShortlistPolicy {
    /// Kept in memory only, gone at exit
    #[default]
    Session,
    /// Saved after every change and restored at startup
    Persistent,
}

impl FromStr for ShortlistPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "session" => Ok(ShortlistPolicy::Session),
            "persistent" => Ok(ShortlistPolicy::Persistent),
            other => Err(format!("expected 'session' or 'persistent', got '{other}'")),
        }
    }
}

impl fmt::Display for ShortlistPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortlistPolicy::Session => f.write_str("session"),
            ShortlistPolicy::Persistent => f.write_str("persistent"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// JSON roster file; `None` uses the built-in demo roster
    pub roster_path: Option<PathBuf>,
    pub shortlist_policy: ShortlistPolicy,
    /// JSON document holding saved shortlists and profiles
    pub store_path: PathBuf,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            roster_path: None,
            shortlist_policy: ShortlistPolicy::Session,
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl PortalConfig {
    /// Read configuration from the process environment
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            lookup(key).filter(|v| !v.trim().is_empty()).or_else(|| {
                info!("{key} not set, using default");
                None
            })
        };

        Ok(Self {
            roster_path: var("PORTAL_ROSTER_PATH").map(PathBuf::from),
            shortlist_policy: try_parse(
                "PORTAL_SHORTLIST_POLICY",
                var("PORTAL_SHORTLIST_POLICY"),
                ShortlistPolicy::Session,
            )?,
            store_path: var("PORTAL_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH)),
        })
    }
}

/// Tracing filter directive from `PORTAL_LOG`.
///
/// Read on its own, without logging, because it is needed before the
/// subscriber exists.
pub fn log_filter() -> String {
    log_filter_from(|key| env::var(key).ok())
}

pub fn log_filter_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup("PORTAL_LOG")
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

fn try_parse<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|e| {
            warn!("Invalid {key} value: {e}");
            PortalError::Config {
                key: key.to_string(),
                value,
            }
        }),
    }
}
