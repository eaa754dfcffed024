//! Ports (trait boundaries) for external dependencies.
//!
//! Agents, the game environment and value-table storage meet only through
//! these traits. Concrete storage lives in [`crate::adapters`].

pub mod agent;
pub mod environment;
pub mod repository;

pub use agent::Agent;
pub use environment::Environment;
pub use repository::TableRepository;
