//! Application configuration loaded from environment variables.
//!
//! Everything is read once at startup. Malformed values fail fast with
//! `AppError::Config` instead of silently falling back to defaults.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use time::Duration;

use crate::domain::DEFAULT_HAND_SIZE;
use crate::error::AppError;
use crate::state::registry::{DEFAULT_IDLE_EXPIRY, DEFAULT_MAX_SESSIONS};

/// Upper bound on `MAX_SESSIONS`; the whole id space is preallocated.
pub const MAX_SESSIONS_LIMIT: u32 = 10_000;
/// Upper bound on `SESSION_IDLE_HOURS`: one year.
pub const MAX_IDLE_HOURS: i64 = 24 * 365;

/// Where card catalogs are loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardSourceConfig {
    /// Base URL serving `setups.csv` and `punchlines.csv`.
    Http(String),
    /// Local directory holding the same two files.
    Dir(PathBuf),
}

/// Knobs for game creation and the session registry.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSettings {
    pub max_sessions: u32,
    pub idle_expiry: Duration,
    pub hand_size: usize,
    pub max_rounds: usize,
    /// Fixed seed for every session RNG. Only useful for reproducible runs.
    pub rng_seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            max_sessions: DEFAULT_MAX_SESSIONS,
            idle_expiry: DEFAULT_IDLE_EXPIRY,
            hand_size: DEFAULT_HAND_SIZE,
            max_rounds: 20,
            rng_seed: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Server configuration
    pub host: String,
    pub port: u16,

    pub cards: CardSourceConfig,
    pub game: GameSettings,

    /// Origins allowed by CORS; empty means localhost only.
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Load and validate all configuration from the process environment
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = var("BACKEND_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&var, "BACKEND_PORT", 3001u16)?;

        let cards = match (var("CARDS_BASE_URL"), var("CARDS_DIR")) {
            (Some(url), None) => {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(AppError::config(format!(
                        "CARDS_BASE_URL must be an http(s) URL, got '{url}'"
                    )));
                }
                CardSourceConfig::Http(url)
            }
            (None, Some(dir)) => CardSourceConfig::Dir(PathBuf::from(dir)),
            (Some(_), Some(_)) => {
                return Err(AppError::config(
                    "set only one of CARDS_BASE_URL and CARDS_DIR",
                ))
            }
            (None, None) => {
                return Err(AppError::config(
                    "one of CARDS_BASE_URL or CARDS_DIR must be set",
                ))
            }
        };

        let defaults = GameSettings::default();
        let max_sessions = parse_or(&var, "MAX_SESSIONS", defaults.max_sessions)?;
        let idle_hours = parse_or(&var, "SESSION_IDLE_HOURS", 12i64)?;
        let hand_size = parse_or(&var, "HAND_SIZE", defaults.hand_size)?;
        let max_rounds = parse_or(&var, "MAX_ROUNDS", defaults.max_rounds)?;
        let rng_seed = var("GAME_RNG_SEED")
            .map(|raw| parse_value::<u64>("GAME_RNG_SEED", &raw))
            .transpose()?;

        if !(1..=MAX_SESSIONS_LIMIT).contains(&max_sessions) {
            return Err(AppError::config(format!(
                "MAX_SESSIONS must be between 1 and {MAX_SESSIONS_LIMIT}"
            )));
        }
        if !(1..=MAX_IDLE_HOURS).contains(&idle_hours) {
            return Err(AppError::config(format!(
                "SESSION_IDLE_HOURS must be between 1 and {MAX_IDLE_HOURS}"
            )));
        }
        if hand_size == 0 {
            return Err(AppError::config("HAND_SIZE must be at least 1"));
        }
        if max_rounds == 0 {
            return Err(AppError::config("MAX_ROUNDS must be at least 1"));
        }

        let cors_allowed_origins = var("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Config {
            host,
            port,
            cards,
            game: GameSettings {
                max_sessions,
                idle_expiry: Duration::hours(idle_hours),
                hand_size,
                max_rounds,
                rng_seed,
            },
            cors_allowed_origins,
        })
    }
}

fn parse_value<T: FromStr>(name: &str, raw: &str) -> Result<T, AppError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| AppError::config(format!("{name} has an invalid value: '{raw}'")))
}

fn parse_or<T, F>(var: &F, name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(name) {
        Some(raw) => parse_value(name, &raw),
        None => Ok(default),
    }
}
