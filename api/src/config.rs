use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Sustained requests per second allowed per client IP
    pub rate_limit_per_second: u64,
    /// Burst size allowed per client IP
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        Self {
            port: parse_var("PORT", defaults.port),
            rate_limit_per_second: parse_var(
                "RATE_LIMIT_PER_SECOND",
                defaults.rate_limit_per_second,
            ),
            rate_limit_burst: parse_var("RATE_LIMIT_BURST", defaults.rate_limit_burst),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rate_limit_per_second: 2,
            rate_limit_burst: 5,
        }
    }
}

/// Read an env var, falling back to `default` when unset or unparseable
fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid value for {}: {:?}", key, raw);
            default
        }),
        Err(_) => default,
    }
}
