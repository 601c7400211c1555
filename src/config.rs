use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_REPORTS_API_URL: &str = "https://people-eye-server.onrender.com/api/reports";

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub reports_api_url: String,
    pub reports_timeout: Duration,
    /// Raw `SESSION_KEY`; only keys of 64+ bytes are used.
    pub session_key: Option<String>,
    pub session_idle: Duration,
    pub sweep_interval: Duration,
    /// Live dashboard sessions kept before the least recently used is dropped.
    pub max_sessions: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            reports_api_url: DEFAULT_REPORTS_API_URL.to_string(),
            reports_timeout: Duration::from_secs(30),
            session_key: None,
            session_idle: Duration::from_secs(60 * 60),
            sweep_interval: Duration::from_secs(300),
            max_sessions: crate::session::store::DEFAULT_MAX_SESSIONS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => log::info!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => log::warn!("Ignoring unreadable .env file: {e}"),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Missing or unparseable
    /// values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        AppConfig {
            bind_addr: non_empty("BIND_ADDR").unwrap_or(defaults.bind_addr),
            reports_api_url: non_empty("REPORTS_API_URL").unwrap_or(defaults.reports_api_url),
            reports_timeout: Duration::from_secs(positive_or(&lookup, "REPORTS_TIMEOUT_SECS", 30)),
            session_key: non_empty("SESSION_KEY"),
            session_idle: minutes_or(&lookup, "SESSION_IDLE_MINUTES", 60),
            sweep_interval: Duration::from_secs(positive_or(&lookup, "SWEEP_INTERVAL_SECS", 300)),
            max_sessions: usize::try_from(positive_or(&lookup, "MAX_SESSIONS", defaults.max_sessions as u64))
                .unwrap_or(usize::MAX),
        }
    }
}

/// Parse a positive integer from `key`, warning and using `default` if it is malformed or zero.
fn positive_or<F>(lookup: &F, key: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<u64>() {
        Ok(v) if v > 0 => v,
        _ => {
            log::warn!("{key}={raw:?} is not a positive number, using {default}");
            default
        }
    }
}

/// Like `positive_or`, for a minute count that must still fit in seconds.
fn minutes_or<F>(lookup: &F, key: &str, default: u64) -> Duration
where
    F: Fn(&str) -> Option<String>,
{
    let minutes = positive_or(lookup, key, default);
    match minutes.checked_mul(60) {
        Some(secs) => Duration::from_secs(secs),
        None => {
            log::warn!("{key}={minutes} is too large, using {default}");
            Duration::from_secs(default * 60)
        }
    }
}
