//! Conversion service - ties the conversion laws to history persistence

use std::sync::Arc;

use daybook_domain::constants::{DEFAULT_PRECISION, STORAGE_KEY_CONVERTER_HISTORY};
use daybook_domain::{ConversionRecord, DaybookError, Result, UnitCategory};
use tracing::debug;

use super::convert::convert;
use super::format::format_result;
use super::units::find_unit;
use crate::history::HistoryStore;
use crate::ports::StoragePort;

/// Unit conversion service.
///
/// Performs conversions by `(category, unit id)` lookup, formats the result,
/// and records every performed conversion in the capped, persisted history.
pub struct ConverterService {
    history: HistoryStore<ConversionRecord>,
    precision: u8,
}

impl ConverterService {
    /// Create a service backed by the given store, loading any surviving
    /// history.
    pub fn new(store: Arc<dyn StoragePort>) -> Result<Self> {
        let history = HistoryStore::open(store, STORAGE_KEY_CONVERTER_HISTORY)?;
        Ok(Self { history, precision: DEFAULT_PRECISION })
    }

    /// Override the formatting precision.
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    /// Convert `value` between two units of `category` and record the result.
    ///
    /// A NaN value is a recoverable input error: the conversion is rejected
    /// and nothing is recorded.
    pub fn convert_value(
        &mut self,
        category: UnitCategory,
        from_id: &str,
        to_id: &str,
        value: f64,
    ) -> Result<ConversionRecord> {
        if value.is_nan() {
            return Err(DaybookError::InvalidInput("value is not a number".to_string()));
        }

        let from = find_unit(category, from_id)
            .ok_or_else(|| DaybookError::UnknownUnit(from_id.to_string()))?;
        let to = find_unit(category, to_id)
            .ok_or_else(|| DaybookError::UnknownUnit(to_id.to_string()))?;

        let converted = convert(value, from, to)?;
        let formatted = format_result(converted, self.precision);
        debug!(%category, from = from.id, to = to.id, value, converted, "Performed conversion");

        let record =
            ConversionRecord::new(category, value, from.id, converted, to.id, formatted);
        self.history.record(record.clone())?;
        Ok(record)
    }

    /// Past conversions, newest first.
    pub fn history(&self) -> &[ConversionRecord] {
        self.history.entries()
    }

    /// Forget all recorded conversions.
    pub fn clear_history(&mut self) -> Result<()> {
        self.history.clear()
    }
}
