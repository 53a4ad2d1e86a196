//! Unit conversion engine

mod convert;
mod format;
mod service;
pub mod units;

pub use convert::{convert, TemperatureScale};
pub use format::{format_result, SCI_LOWER_THRESHOLD, SCI_UPPER_THRESHOLD};
pub use service::ConverterService;
pub use units::{base_unit, category_info, default_pair, find_unit, units_for};
