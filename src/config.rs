//! Environment-driven configuration
//!
//! | Variable                | Default | Meaning                                   |
//! |-------------------------|---------|-------------------------------------------|
//! | `TIMELINE_ENDPOINTS`    | (none)  | Comma-separated data endpoints, tried in order |
//! | `TIMELINE_TOKEN`        | (none)  | Bearer token sent to every endpoint       |
//! | `TIMELINE_WINDOW_DAYS`  | 90      | Window length when the payload has no start |
//! | `TIMELINE_MAX_RETRIES`  | 3       | Retries per endpoint                      |
//! | `TIMELINE_TIMEOUT_SECS` | 20      | Per-request timeout                       |
//! | `TIMELINE_VARIANT`      | default | Font variant of the SVG output            |

use crate::render::SizeVariant;
use crate::Result;

/// Default days shown before today when no window start is supplied.
pub const DEFAULT_WINDOW_DAYS: u32 = 90;

/// Runtime configuration for fetching and rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineConfig {
    /// Data endpoints in fallback order
    pub endpoints: Vec<String>,
    /// Optional bearer token
    pub token: Option<String>,
    /// Fallback window length in days
    pub window_days: u32,
    /// Retries per endpoint after the first attempt
    pub max_retries: u32,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// SVG font variant
    pub variant: SizeVariant,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            endpoints: Vec::new(),
            token: None,
            window_days: DEFAULT_WINDOW_DAYS,
            max_retries: 3,
            timeout_secs: 20,
            variant: SizeVariant::Default,
        }
    }
}

impl TimelineConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidVariant`] if `TIMELINE_VARIANT` is not a
    /// known variant. Unparseable numbers fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let endpoints = lookup("TIMELINE_ENDPOINTS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let variant = match lookup("TIMELINE_VARIANT") {
            Some(raw) => raw.parse()?,
            None => defaults.variant,
        };

        Ok(Self {
            endpoints,
            token: lookup("TIMELINE_TOKEN")
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
            window_days: lookup("TIMELINE_WINDOW_DAYS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.window_days),
            max_retries: lookup("TIMELINE_MAX_RETRIES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_retries),
            timeout_secs: lookup("TIMELINE_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            variant,
        })
    }
}
