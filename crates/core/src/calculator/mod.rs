//! Calculator expression engine

mod display;
mod engine;
pub mod transitions;

pub use display::{display_expression, format_display};
pub use engine::CalculatorEngine;
pub use transitions::CompletedCalculation;
