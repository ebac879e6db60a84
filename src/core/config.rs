//! Environment-driven configuration.
//!
//! There is no config file. Everything is read once at startup from
//! environment variables and passed down explicitly.

use std::path::PathBuf;

use tracing::warn;

pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";
pub const BASE_URL_VAR: &str = "ANTHROPIC_BASE_URL";
pub const ARCHIVE_DIR_VAR: &str = "RADIO_STATIC_ARCHIVE_DIR";
pub const RARE_PREFIX_CHANCE_VAR: &str = "RADIO_STATIC_RARE_PREFIX_CHANCE";

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Name of the archive directory created next to the executable.
pub const ARCHIVE_DIR_NAME: &str = "transmissions";

/// Settings for the generation service client.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiverConfig {
    /// Credential. A missing key is only reported when a request is made.
    pub api_key: Option<String>,
    /// Endpoint override; `None` means [`DEFAULT_BASE_URL`].
    pub base_url: Option<String>,
    pub model: String,
    pub max_tokens: u32,
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl ReceiverConfig {
    /// The base URL requests are sent to, without a trailing slash.
    pub fn endpoint(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }
}

/// Everything one run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioConfig {
    pub receiver: ReceiverConfig,
    pub archive_dir: PathBuf,
    /// Chance of decorating the broadcast heading with a rare prefix.
    pub rare_prefix_chance: f64,
}

impl RadioConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let receiver = ReceiverConfig {
            api_key: get(API_KEY_VAR),
            base_url: get(BASE_URL_VAR),
            ..ReceiverConfig::default()
        };

        let archive_dir = get(ARCHIVE_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_archive_dir);

        let rare_prefix_chance = match get(RARE_PREFIX_CHANCE_VAR) {
            None => 0.0,
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(chance) if (0.0..=1.0).contains(&chance) => chance,
                _ => {
                    warn!(
                        variable = RARE_PREFIX_CHANCE_VAR,
                        value = %raw,
                        "ignoring rare prefix chance outside 0.0..=1.0"
                    );
                    0.0
                }
            },
        };

        Self {
            receiver,
            archive_dir,
            rare_prefix_chance,
        }
    }
}

/// `transmissions/` beside the running executable, or in the working
/// directory if the executable path can't be resolved.
pub fn default_archive_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(ARCHIVE_DIR_NAME)))
        .unwrap_or_else(|| PathBuf::from(ARCHIVE_DIR_NAME))
}
