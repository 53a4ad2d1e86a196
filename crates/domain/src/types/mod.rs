//! Domain types and models

pub mod calculator;
pub mod calendar;
pub mod timer;
pub mod unit;

// Re-export the main types for convenience
pub use calculator::{BinaryOp, CalculationRecord, CalculatorState, UnaryOp};
pub use calendar::{
    CalendarDayCell, CalendarViewDay, DisplayItem, Event, ItemFilter, ItemProjection, TaskItem,
};
pub use timer::{LapRecord, TimerMode, TimerPhase, TimerPreset, TimerSettings};
pub use unit::{ConversionRecord, Unit, UnitCategory, UnitCategoryInfo};
