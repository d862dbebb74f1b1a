//! Tone classifiers for editorial free-text fields
//!
//! Stage and platform values come straight from the document database, so
//! classification is a case-insensitive substring match against an ordered
//! rule table. The first rule with a matching needle wins; text matching no
//! rule falls back to the neutral tone. New vocabulary is added to the
//! tables, never to the layout or render code.

use serde::{Deserialize, Serialize};

/// Bumped whenever a rule table changes, so rendered output can be traced
/// back to the vocabulary that produced it.
pub const TONE_TABLE_VERSION: u32 = 1;

/// Visual tone of an experiment bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageTone {
    /// Experiment is live
    Running,
    /// Experiment produced a winner that is rolling out
    Winner,
    /// Experiment stopped without shipping
    Ended,
    /// Anything else
    Neutral,
}

/// Visual tone of a release marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformTone {
    /// iOS app release
    Ios,
    /// Android app release
    Android,
    /// Backend / server deploy
    Backend,
    /// Anything else
    Other,
}

/// Ordered stage rules; earlier rows take priority.
pub const STAGE_TONE_RULES: &[(StageTone, &[&str])] = &[
    (StageTone::Running, &["running", "active", "exploring"]),
    (StageTone::Winner, &["winner", "rollout", "shipped"]),
    (StageTone::Ended, &["ended", "stop", "backlog"]),
];

/// Ordered platform rules; earlier rows take priority.
pub const PLATFORM_TONE_RULES: &[(PlatformTone, &[&str])] = &[
    (PlatformTone::Ios, &["ios"]),
    (PlatformTone::Android, &["android"]),
    (PlatformTone::Backend, &["backend", "server"]),
];

fn classify<T: Copy>(text: &str, rules: &[(T, &[&str])], fallback: T) -> T {
    let haystack = text.to_lowercase();
    rules
        .iter()
        .find(|(_, needles)| needles.iter().any(|needle| haystack.contains(needle)))
        .map_or(fallback, |(tone, _)| *tone)
}

/// Classify an experiment stage.
#[must_use]
pub fn stage_tone(stage: &str) -> StageTone {
    classify(stage, STAGE_TONE_RULES, StageTone::Neutral)
}

/// Classify a release platform.
#[must_use]
pub fn platform_tone(platform: &str) -> PlatformTone {
    classify(platform, PLATFORM_TONE_RULES, PlatformTone::Other)
}

impl StageTone {
    /// Every stage tone, in rule priority order.
    pub const ALL: [Self; 4] = [Self::Running, Self::Winner, Self::Ended, Self::Neutral];

    /// Class-name suffix used by both adapters.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Winner => "winner",
            Self::Ended => "ended",
            Self::Neutral => "neutral",
        }
    }

    /// Bar fill color.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Running => "#2f80ed",
            Self::Winner => "#27ae60",
            Self::Ended => "#9aa5b1",
            Self::Neutral => "#c7b98f",
        }
    }
}

impl PlatformTone {
    /// Every platform tone, in rule priority order.
    pub const ALL: [Self; 4] = [Self::Ios, Self::Android, Self::Backend, Self::Other];

    /// Class-name suffix used by both adapters.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Backend => "backend",
            Self::Other => "other",
        }
    }

    /// Marker fill color.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Ios => "#5856d6",
            Self::Android => "#3ddc84",
            Self::Backend => "#f2994a",
            Self::Other => "#828282",
        }
    }
}
