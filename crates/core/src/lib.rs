//! # Daybook Core
//!
//! Pure engine layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The calendar month-grid builder and item merge/filter logic
//! - The unit conversion engine and its static unit tables
//! - The calculator expression state machine
//! - The timer engine (countdown/stopwatch) and its presets
//! - The bounded-history mechanism shared by the widget engines
//!
//! ## Architecture Principles
//! - Only depends on `daybook-domain`
//! - No database, HTTP, or platform code
//! - Persistence via the `StoragePort` trait, implemented in `daybook-infra`
//! - Pure, synchronous, deterministic logic throughout

pub mod calculator;
pub mod calendar;
pub mod converter;
pub mod history;
pub mod ports;
pub mod timer;

// Re-export specific items to avoid ambiguity
pub use calculator::{display_expression, CalculatorEngine};
pub use calendar::{build_month_grid, filtered_items, grid_from_month_data, is_today, MonthIndex};
pub use converter::{
    base_unit, category_info, convert, default_pair, find_unit, format_result, units_for,
    ConverterService,
};
pub use history::{BoundedHistory, HistoryStore};
pub use ports::StoragePort;
pub use timer::{TimerEngine, TimerService};
