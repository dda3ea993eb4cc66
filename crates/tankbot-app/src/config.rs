//! Runtime configuration, overridable from the environment.

use serde_json::Value;
use thiserror::Error;

use tankbot_agent::turn_loop::Signals;
use tankbot_core::constants::{BULLET_SPEED, END_GAME_SIGNAL, END_INIT_SIGNAL};
use tankbot_core::enums::AimMode;

pub const ENV_BULLET_SPEED: &str = "TANKBOT_BULLET_SPEED";
pub const ENV_AIM: &str = "TANKBOT_AIM";
pub const ENV_END_INIT_SIGNAL: &str = "TANKBOT_END_INIT_SIGNAL";
pub const ENV_END_SIGNAL: &str = "TANKBOT_END_SIGNAL";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("TANKBOT_BULLET_SPEED must be a positive number, got {0:?}")]
    InvalidBulletSpeed(String),
    #[error("TANKBOT_AIM must be `intercept` or `direct`, got {0:?}")]
    InvalidAimMode(String),
}

/// Configuration for one agent process.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentConfig {
    /// Bullet speed used by the interception search.
    pub bullet_speed: f64,
    pub aim_mode: AimMode,
    /// End-of-initialization sentinel, as sent on the wire.
    pub end_init_signal: String,
    /// End-of-game sentinel, as sent on the wire.
    pub end_game_signal: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            bullet_speed: BULLET_SPEED,
            aim_mode: AimMode::default(),
            end_init_signal: END_INIT_SIGNAL.to_owned(),
            end_game_signal: END_GAME_SIGNAL.to_owned(),
        }
    }
}

impl AgentConfig {
    /// Defaults overlaid with any `TANKBOT_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns per variable name.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_BULLET_SPEED) {
            config.bullet_speed = match raw.trim().parse::<f64>() {
                Ok(speed) if speed.is_finite() && speed > 0.0 => speed,
                _ => return Err(ConfigError::InvalidBulletSpeed(raw)),
            };
        }
        if let Some(raw) = lookup(ENV_AIM) {
            config.aim_mode = match raw.trim().to_ascii_lowercase().as_str() {
                "intercept" => AimMode::Intercept,
                "direct" => AimMode::Direct,
                _ => return Err(ConfigError::InvalidAimMode(raw)),
            };
        }
        if let Some(raw) = lookup(ENV_END_INIT_SIGNAL) {
            config.end_init_signal = raw;
        }
        if let Some(raw) = lookup(ENV_END_SIGNAL) {
            config.end_game_signal = raw;
        }

        Ok(config)
    }

    /// Sentinels as JSON values. A signal that is valid JSON is compared as
    /// that value; anything else as a bare string, matching how the
    /// transport reads unquoted tokens.
    pub fn signals(&self) -> Signals {
        Signals {
            end_init: signal_value(&self.end_init_signal),
            end_game: signal_value(&self.end_game_signal),
        }
    }
}

fn signal_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}
