use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    /// Interface the HTTP server binds to
    pub host: String,

    /// Port the HTTP server listens on
    pub port: u16,

    /// Directory for the daily rotating log files
    pub log_dir: String,

    /// Maximum payload size for all requests (in bytes)
    /// Default: 1MB
    pub max_payload_size: usize,

    /// Period between two simulator ticks
    pub tick_interval: Duration,

    /// Lower bound (inclusive) of a random progress increment
    pub increment_min: f64,

    /// Upper bound (exclusive) of a random progress increment
    pub increment_max: f64,

    /// Fake sign-in latency
    pub sign_in_delay: Duration,

    /// Simulated problem-discovery search latency
    pub search_delay: Duration,

    /// Research assistant reply latency
    pub chat_reply_delay: Duration,

    /// Email that passes the placeholder admin gate
    pub admin_email: String,

    /// Number of toasts kept before the oldest are dropped
    pub notification_feed_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_dir: "logs".to_string(),
            max_payload_size: 1024 * 1024,
            tick_interval: Duration::from_millis(800),
            increment_min: 5.0,
            increment_max: 20.0,
            sign_in_delay: Duration::from_millis(1000),
            search_delay: Duration::from_millis(2000),
            chat_reply_delay: Duration::from_millis(1000),
            admin_email: "admin@ventureforge.com".to_string(),
            notification_feed_capacity: 50,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Every variable is optional and falls back to `Config::default()`:
    /// - HOST, PORT: HTTP bind address (default: 127.0.0.1:8080)
    /// - LOG_DIR: log file directory (default: logs)
    /// - MAX_PAYLOAD_SIZE: maximum request payload in bytes (default: 1048576)
    /// - TICK_INTERVAL_MS: simulator tick period (default: 800)
    /// - INCREMENT_MIN, INCREMENT_MAX: random increment range (default: 5..20)
    /// - SIGN_IN_DELAY_MS, SEARCH_DELAY_MS, CHAT_REPLY_DELAY_MS: simulated latencies
    /// - ADMIN_EMAIL: admin gate email (default: admin@ventureforge.com)
    /// - NOTIFICATION_FEED_CAPACITY: toast feed size (default: 50)
    ///
    /// A variable that is set but cannot be parsed is an error.
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let defaults = Config::default();

        let config = Config {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", defaults.port)?,
            log_dir: env::var("LOG_DIR").unwrap_or(defaults.log_dir),
            max_payload_size: parse_var("MAX_PAYLOAD_SIZE", defaults.max_payload_size)?,
            tick_interval: millis_var("TICK_INTERVAL_MS", defaults.tick_interval)?,
            increment_min: parse_var("INCREMENT_MIN", defaults.increment_min)?,
            increment_max: parse_var("INCREMENT_MAX", defaults.increment_max)?,
            sign_in_delay: millis_var("SIGN_IN_DELAY_MS", defaults.sign_in_delay)?,
            search_delay: millis_var("SEARCH_DELAY_MS", defaults.search_delay)?,
            chat_reply_delay: millis_var("CHAT_REPLY_DELAY_MS", defaults.chat_reply_delay)?,
            admin_email: env::var("ADMIN_EMAIL").unwrap_or(defaults.admin_email),
            notification_feed_capacity: parse_var(
                "NOTIFICATION_FEED_CAPACITY",
                defaults.notification_feed_capacity,
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.tick_interval.is_zero() {
            return Err("TICK_INTERVAL_MS must be greater than zero".to_string());
        }
        if !(self.increment_min > 0.0 && self.increment_min < self.increment_max) {
            return Err(format!(
                "INCREMENT_MIN ({}) must be positive and below INCREMENT_MAX ({})",
                self.increment_min, self.increment_max
            ));
        }
        if self.notification_feed_capacity == 0 {
            return Err("NOTIFICATION_FEED_CAPACITY must be at least 1".to_string());
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, String> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| format!("{} has an invalid value: {:?}", name, raw)),
        Err(_) => Ok(default),
    }
}

fn millis_var(name: &str, default: Duration) -> Result<Duration, String> {
    let default_ms = u64::try_from(default.as_millis()).unwrap_or(u64::MAX);
    parse_var(name, default_ms).map(Duration::from_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_simulated_timings() {
        let config = Config::default();
        assert_eq!(config.tick_interval, Duration::from_millis(800));
        assert_eq!(config.sign_in_delay, Duration::from_secs(1));
        assert_eq!(config.admin_email, "admin@ventureforge.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn inverted_increment_range_is_rejected() {
        let config = Config {
            increment_min: 20.0,
            increment_max: 5.0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_tick_interval_is_rejected() {
        let config = Config {
            tick_interval: Duration::ZERO,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
