//! Calculator engine - state machine plus persisted history

use std::sync::Arc;

use daybook_domain::constants::STORAGE_KEY_CALCULATOR_HISTORY;
use daybook_domain::{BinaryOp, CalculationRecord, CalculatorState, Result, UnaryOp};
use tracing::debug;

use super::display::display_expression;
use super::transitions;
use crate::history::HistoryStore;
use crate::ports::StoragePort;

/// Stateful wrapper over the pure calculator transitions.
///
/// Holds the current state tuple and records every completed binary
/// evaluation into the capped, persisted history. Domain failures never
/// escape: they land in the visible error state. Only storage failures
/// surface as errors.
pub struct CalculatorEngine {
    state: CalculatorState,
    history: HistoryStore<CalculationRecord>,
}

impl CalculatorEngine {
    /// Create an engine backed by the given store, loading any surviving
    /// history.
    pub fn new(store: Arc<dyn StoragePort>) -> Result<Self> {
        let history = HistoryStore::open(store, STORAGE_KEY_CALCULATOR_HISTORY)?;
        Ok(Self { state: CalculatorState::default(), history })
    }

    /// The current state tuple.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// The current display string.
    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// The running expression ("12 +" while awaiting the second operand).
    pub fn expression(&self) -> String {
        display_expression(&self.state)
    }

    /// Type one digit.
    pub fn input_digit(&mut self, digit: char) {
        self.state = transitions::input_digit(&self.state, digit);
    }

    /// Type the decimal point.
    pub fn input_decimal(&mut self) {
        self.state = transitions::input_decimal(&self.state);
    }

    /// Select a binary operation, evaluating any pending one first.
    pub fn apply_binary(&mut self, op: BinaryOp) -> Result<()> {
        let (next, completed) = transitions::apply_binary(&self.state, op);
        self.state = next;
        self.record_completed(completed)
    }

    /// Evaluate the pending operation.
    pub fn equals(&mut self) -> Result<()> {
        let (next, completed) = transitions::equals(&self.state);
        self.state = next;
        self.record_completed(completed)
    }

    /// Apply a unary operation to the display value.
    pub fn apply_unary(&mut self, op: UnaryOp) {
        self.state = transitions::apply_unary(&self.state, op);
    }

    /// Remove the last display character.
    pub fn backspace(&mut self) {
        self.state = transitions::backspace(&self.state);
    }

    /// Reset the state tuple; history is kept.
    pub fn clear(&mut self) {
        self.state = transitions::clear(&self.state);
    }

    /// Completed calculations, newest first.
    pub fn history(&self) -> &[CalculationRecord] {
        self.history.entries()
    }

    /// Forget all recorded calculations.
    pub fn clear_history(&mut self) -> Result<()> {
        self.history.clear()
    }

    fn record_completed(
        &mut self,
        completed: Option<transitions::CompletedCalculation>,
    ) -> Result<()> {
        if let Some(completed) = completed {
            debug!(expression = %completed.expression, result = %completed.result, "Recorded calculation");
            self.history
                .record(CalculationRecord::new(completed.expression, completed.result))?;
        }
        Ok(())
    }
}
