//! Repository port for value-table persistence.

use crate::{Result, q_learning::ValueTable};

/// Port for persisting and loading one value table per agent name.
///
/// # Examples
///
/// ```no_run
/// use gomoku_agents::ports::TableRepository;
/// use gomoku_agents::q_learning::ValueTable;
///
/// fn backup<R: TableRepository>(repo: &R, table: &ValueTable) -> gomoku_agents::Result<()> {
///     repo.save("backup", table)
/// }
/// ```
pub trait TableRepository {
    /// Load the table stored for `name`, sized for `cells` board cells.
    ///
    /// A missing record is not an error: an empty table is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the record exists but cannot be read or is
    /// malformed.
    fn load(&self, name: &str, cells: usize) -> Result<ValueTable>;

    /// Replace the record stored for `name` with `table`.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be written. The previous record,
    /// if any, is left intact.
    fn save(&self, name: &str, table: &ValueTable) -> Result<()>;
}
