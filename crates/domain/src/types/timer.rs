//! Timer widget types: presets, settings, and lap records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::impl_domain_string_conversions;

/// Timer operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerMode {
    Countdown,
    Stopwatch,
}

impl_domain_string_conversions!(TimerMode {
    Countdown => "countdown",
    Stopwatch => "stopwatch",
});

/// Timer lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
    Finished,
}

impl_domain_string_conversions!(TimerPhase {
    Idle => "idle",
    Running => "running",
    Paused => "paused",
    Finished => "finished",
});

/// A named countdown duration saved by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerPreset {
    pub id: Uuid,
    pub name: String,
    pub duration_secs: u64,
}

impl TimerPreset {
    pub fn new(name: impl Into<String>, duration_secs: u64) -> Self {
        Self { id: Uuid::new_v4(), name: name.into(), duration_secs }
    }
}

/// User-configurable timer settings, persisted across sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSettings {
    #[serde(default = "default_sound_enabled")]
    pub sound_enabled: bool,
    #[serde(default)]
    pub auto_restart: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_preset: Option<Uuid>,
}

fn default_sound_enabled() -> bool {
    true
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self { sound_enabled: true, auto_restart: false, default_preset: None }
    }
}

/// One recorded stopwatch lap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Elapsed time since the stopwatch started, in milliseconds.
    pub elapsed_ms: u64,
    /// Time since the previous lap, in milliseconds.
    pub split_ms: u64,
}

impl LapRecord {
    pub fn new(elapsed_ms: u64, split_ms: u64) -> Self {
        Self { id: Uuid::new_v4(), timestamp: Utc::now(), elapsed_ms, split_ms }
    }
}
