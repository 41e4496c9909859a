//! Client configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use klondike::{DEFAULT_SHUFFLES, GameSettings};

/// Most shuffle passes accepted before a deal.
pub const MAX_SHUFFLES: i32 = 100;

/// Complete client configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Seed for the shuffle; `None` draws one from the OS
    pub seed: Option<u64>,
    /// Number of shuffle passes before the deal
    pub shuffles: i32,
    /// Print the board as JSON instead of text
    pub json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: None,
            shuffles: DEFAULT_SHUFFLES,
            json: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `seed_override` - Optional seed override (from CLI args)
    /// * `shuffles_override` - Optional shuffle count override (from CLI args)
    /// * `json_flag` - Whether `--json` was given; the environment can only turn JSON on
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but can't be parsed. Variables
    /// covered by an override aren't read.
    pub fn from_env(
        seed_override: Option<u64>,
        shuffles_override: Option<i32>,
        json_flag: bool,
    ) -> Result<Self, ConfigError> {
        let seed = match seed_override {
            Some(seed) => Some(seed),
            None => parse_env("KLONDIKE_SEED", "an unsigned integer")?,
        };

        let shuffles = match shuffles_override {
            Some(shuffles) => shuffles,
            None => parse_env("KLONDIKE_SHUFFLES", "an integer")?.unwrap_or(DEFAULT_SHUFFLES),
        };

        let json = json_flag || parse_env("KLONDIKE_JSON", "true or false")?.unwrap_or(false);

        Ok(CliConfig {
            seed,
            shuffles,
            json,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_SHUFFLES).contains(&self.shuffles) {
            return Err(ConfigError::Invalid {
                var: "KLONDIKE_SHUFFLES".to_string(),
                reason: format!("Must be between 1 and {MAX_SHUFFLES}"),
            });
        }

        Ok(())
    }

    /// Settings for dealing a game with this configuration.
    pub const fn game_settings(&self) -> GameSettings {
        GameSettings::new(self.seed, self.shuffles)
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse an optional environment variable
///
/// Unset yields `None`; a value that doesn't parse is an error naming the
/// variable and what was expected.
fn parse_env<T>(key: &str, expected: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
{
    let Ok(raw) = std::env::var(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::Invalid {
            var: key.to_string(),
            reason: format!("Expected {expected}, got '{raw}'"),
        })
}
