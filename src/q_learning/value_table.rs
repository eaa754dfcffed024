//! Value table implementation for temporal difference learning

use std::collections::HashMap;

use log::trace;

use crate::{Error, Result, types::CanonicalKey};

/// Learning rate α
pub const LEARNING_RATE: f64 = 0.95;

/// Discount factor γ
pub const DISCOUNT_FACTOR: f64 = 0.15;

/// Per-cell action values keyed by canonical state.
///
/// Rows are created lazily; a key that was never materialized reads as a
/// row of zeros.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueTable {
    /// Number of board cells, i.e. the width of every row
    cells: usize,
    rows: HashMap<CanonicalKey, Vec<f64>>,
}

impl ValueTable {
    /// Create an empty table for a board with `cells` cells
    pub fn new(cells: usize) -> Self {
        Self {
            cells,
            rows: HashMap::new(),
        }
    }

    pub fn cells(&self) -> usize {
        self.cells
    }

    pub fn contains(&self, state: &CanonicalKey) -> bool {
        self.rows.contains_key(state)
    }

    /// Create a zero row for `state` unless one exists.
    ///
    /// Returns `true` if a row was created.
    pub fn materialize(&mut self, state: &CanonicalKey) -> bool {
        if self.rows.contains_key(state) {
            return false;
        }
        trace!("materializing row for {state}");
        self.rows.insert(state.clone(), vec![0.0; self.cells]);
        true
    }

    /// Get the value of playing `action` in `state`
    pub fn get(&self, state: &CanonicalKey, action: usize) -> f64 {
        self.rows
            .get(state)
            .and_then(|row| row.get(action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Set the value of playing `action` in `state`, creating the row if needed
    pub fn set(&mut self, state: &CanonicalKey, action: usize, value: f64) {
        self.materialize(state);
        if let Some(slot) = self.rows.get_mut(state).and_then(|row| row.get_mut(action)) {
            *slot = value;
        }
    }

    pub fn row(&self, state: &CanonicalKey) -> Option<&[f64]> {
        self.rows.get(state).map(Vec::as_slice)
    }

    /// Insert a complete row, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if the key or row width does not match
    /// the table's board.
    pub fn insert_row(&mut self, state: CanonicalKey, values: Vec<f64>) -> Result<()> {
        if state.len() != self.cells || values.len() != self.cells {
            return Err(Error::InvalidKey {
                key: state.into_string(),
                reason: format!(
                    "row of {} values does not fit a {}-cell table",
                    values.len(),
                    self.cells
                ),
            });
        }
        self.rows.insert(state, values);
        Ok(())
    }

    /// Maximum value over the open cells of `state`.
    ///
    /// `None` when the state has no row or no open cell.
    pub fn best_value(&self, state: &CanonicalKey) -> Option<f64> {
        let row = self.rows.get(state)?;
        state
            .open_cells()
            .into_iter()
            .filter_map(|action| row.get(action).copied())
            .reduce(f64::max)
    }

    /// Q-learning update for the acting player's move
    ///
    /// Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
    ///
    /// where s' is `state` with `action` marked as the acting player's, and
    /// the bootstrap term is zero when s' has never been seen.
    pub fn update(&mut self, state: &CanonicalKey, action: usize, reward: f64) -> f64 {
        let next_state = state.after(action);
        let bootstrap = self.best_value(&next_state).unwrap_or(0.0);
        let current = self.get(state, action);
        let td_target = reward + DISCOUNT_FACTOR * bootstrap;
        let updated = current + LEARNING_RATE * (td_target - current);
        self.set(state, action, updated);
        updated
    }

    /// Number of materialized states
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows ordered by key, for stable persistence.
    pub fn sorted_rows(&self) -> Vec<(&CanonicalKey, &[f64])> {
        let mut rows: Vec<_> = self
            .rows
            .iter()
            .map(|(key, values)| (key, values.as_slice()))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));
        rows
    }
}
