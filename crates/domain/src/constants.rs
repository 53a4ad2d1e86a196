//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! engines.

// History configuration
pub const HISTORY_CAP: usize = 20;

// Calculator configuration
pub const CALCULATOR_DISPLAY_MAX_LEN: usize = 12;
pub const CALCULATOR_ERROR_DISPLAY: &str = "Erreur";

// Calendar grid configuration
pub const GRID_CELL_COUNT: usize = 42;
pub const GRID_COLUMNS: usize = 7;
pub const GRID_ROWS: usize = 6;
pub const MAX_VISIBLE_ITEMS_PER_DAY: usize = 3;

// Converter configuration
pub const DEFAULT_PRECISION: u8 = 4;
pub const MAX_PRECISION: u8 = 15;

// Storage keys (fixed; stored history is keyed by these across sessions)
pub const STORAGE_KEY_CALCULATOR_HISTORY: &str = "daybook.calculator.history";
pub const STORAGE_KEY_CONVERTER_HISTORY: &str = "daybook.converter.history";
pub const STORAGE_KEY_TIMER_PRESETS: &str = "daybook.timer.presets";
pub const STORAGE_KEY_TIMER_SETTINGS: &str = "daybook.timer.settings";
pub const STORAGE_KEY_TIMER_LAPS: &str = "daybook.timer.laps";
