use std::time::Duration;

/// Delay between a classification and the automatic step to the next item.
pub const DEFAULT_AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(150);

/// Session behaviour the operator can tune.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SessionConfig {
    /// `None` turns auto-advance off.
    pub auto_advance_delay: Option<Duration>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            auto_advance_delay: Some(DEFAULT_AUTO_ADVANCE_DELAY),
        }
    }
}

impl SessionConfig {
    pub fn without_auto_advance() -> Self {
        Self {
            auto_advance_delay: None,
        }
    }
}
