//! Timer persistence - presets, settings, and lap history

use std::sync::Arc;

use daybook_domain::constants::{
    STORAGE_KEY_TIMER_LAPS, STORAGE_KEY_TIMER_PRESETS, STORAGE_KEY_TIMER_SETTINGS,
};
use daybook_domain::{DaybookError, LapRecord, Result, TimerPreset, TimerSettings};
use tracing::warn;
use uuid::Uuid;

use crate::history::HistoryStore;
use crate::ports::StoragePort;

/// Persistence layer for the timer widget.
///
/// Presets and settings are stored whole under their fixed keys; laps go
/// through the shared bounded history. Corrupt stored data falls back to
/// defaults.
pub struct TimerService {
    store: Arc<dyn StoragePort>,
    presets: Vec<TimerPreset>,
    settings: TimerSettings,
    laps: HistoryStore<LapRecord>,
}

impl TimerService {
    /// Load presets, settings, and lap history from the store.
    pub fn new(store: Arc<dyn StoragePort>) -> Result<Self> {
        let presets = load_or_default(&store, STORAGE_KEY_TIMER_PRESETS)?;
        let settings = load_or_default(&store, STORAGE_KEY_TIMER_SETTINGS)?;
        let laps = HistoryStore::open(Arc::clone(&store), STORAGE_KEY_TIMER_LAPS)?;
        Ok(Self { store, presets, settings, laps })
    }

    pub fn presets(&self) -> &[TimerPreset] {
        &self.presets
    }

    /// Save a new named preset, returning its id.
    pub fn add_preset(&mut self, name: impl Into<String>, duration_secs: u64) -> Result<Uuid> {
        let preset = TimerPreset::new(name, duration_secs);
        let id = preset.id;
        self.presets.push(preset);
        self.persist(STORAGE_KEY_TIMER_PRESETS, &self.presets)?;
        Ok(id)
    }

    /// Remove a preset by id.
    pub fn remove_preset(&mut self, id: Uuid) -> Result<()> {
        let before = self.presets.len();
        self.presets.retain(|preset| preset.id != id);
        if self.presets.len() == before {
            return Err(DaybookError::NotFound(format!("timer preset {id}")));
        }
        self.persist(STORAGE_KEY_TIMER_PRESETS, &self.presets)
    }

    pub fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    /// Replace and persist the settings.
    pub fn update_settings(&mut self, settings: TimerSettings) -> Result<()> {
        self.settings = settings;
        self.persist(STORAGE_KEY_TIMER_SETTINGS, &self.settings)
    }

    /// Record a lap at the given total elapsed time; the split is computed
    /// against the most recent lap.
    pub fn record_lap(&mut self, elapsed_ms: u64) -> Result<()> {
        let split = elapsed_ms.saturating_sub(
            self.laps.entries().first().map(|lap| lap.elapsed_ms).unwrap_or(0),
        );
        self.laps.record(LapRecord::new(elapsed_ms, split))
    }

    /// Recorded laps, newest first.
    pub fn laps(&self) -> &[LapRecord] {
        self.laps.entries()
    }

    /// Forget all recorded laps.
    pub fn clear_laps(&mut self) -> Result<()> {
        self.laps.clear()
    }

    fn persist<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)
            .map_err(|err| DaybookError::Storage(err.to_string()))?;
        self.store.set(key, &raw)
    }
}

fn load_or_default<T>(store: &Arc<dyn StoragePort>, key: &str) -> Result<T>
where
    T: serde::de::DeserializeOwned + Default,
{
    match store.get(key)? {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(key, error = %err, "Stored timer data is unreadable; using defaults");
                Ok(T::default())
            }
        },
        None => Ok(T::default()),
    }
}
