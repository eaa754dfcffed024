//! In-memory value-table repository for testing.
//!
//! This adapter provides a pure in-memory implementation of TableRepository,
//! enabling fast tests without any file system I/O.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{Result, ports::TableRepository, q_learning::ValueTable};

/// In-memory repository for testing.
///
/// # Examples
///
/// ```
/// use gomoku_agents::adapters::InMemoryRepository;
/// use gomoku_agents::ports::TableRepository;
/// use gomoku_agents::q_learning::ValueTable;
///
/// let repo = InMemoryRepository::new();
/// repo.save("alice", &ValueTable::new(9))?;
/// assert!(repo.contains("alice"));
/// assert!(repo.load("bob", 9)?.is_empty());
/// # Ok::<(), gomoku_agents::Error>(())
/// ```
///
/// # Thread Safety
///
/// All clones share the same underlying storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, ValueTable>>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn storage(&self) -> MutexGuard<'_, HashMap<String, ValueTable>> {
        self.storage.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of tables currently stored.
    pub fn count(&self) -> usize {
        self.storage().len()
    }

    /// Check if a table is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.storage().contains_key(name)
    }
}

impl TableRepository for InMemoryRepository {
    fn load(&self, name: &str, cells: usize) -> Result<ValueTable> {
        Ok(self
            .storage()
            .get(name)
            .cloned()
            .unwrap_or_else(|| ValueTable::new(cells)))
    }

    fn save(&self, name: &str, table: &ValueTable) -> Result<()> {
        self.storage().insert(name.to_string(), table.clone());
        Ok(())
    }
}
