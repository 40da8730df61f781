use std::env;
use std::str::FromStr;

use super::SystemError;

#[derive(Debug, Clone)]
pub struct Config {
    /// Mailbox size of every resource actor
    pub actor_buffer: usize,
    /// Shortest password accepted at registration and on forced change
    pub min_password_length: usize,
    /// Filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            actor_buffer: 32,
            min_password_length: 8,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, SystemError> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        Ok(Self {
            actor_buffer: parse_var("SHOP_ACTOR_BUFFER", defaults.actor_buffer)?,
            min_password_length: parse_var(
                "SHOP_MIN_PASSWORD_LENGTH",
                defaults.min_password_length,
            )?,
            log_filter: env::var("SHOP_LOG").unwrap_or(defaults.log_filter),
        })
    }
}

fn parse_var<T: FromStr>(key: &'static str, default: T) -> Result<T, SystemError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| SystemError::Config { key, value }),
        Err(_) => Ok(default),
    }
}
