//! Tabular Q-learning
//!
//! [`LearningAgent`] learns per-cell move values for states seen from its own
//! side of the board and keeps them in a [`ValueTable`]:
//!
//! Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
//!
//! with α = [`LEARNING_RATE`] and γ = [`DISCOUNT_FACTOR`]. Every move is
//! followed by a zero-reward update; the episode reward (−10 loss, +10 win,
//! +5 draw) is applied to the last move when the driver calls `score`.
//!
//! ## Usage Example
//!
//! ```no_run
//! use gomoku_agents::adapters::CsvTableRepository;
//! use gomoku_agents::app::LearningConfig;
//! use gomoku_agents::q_learning::LearningAgent;
//!
//! let config = LearningConfig::new("alice").with_exploration_rate(0.1);
//! let agent = LearningAgent::new(config, CsvTableRepository::new("tables"))?;
//! # Ok::<(), gomoku_agents::Error>(())
//! ```

pub mod agent;
pub mod value_table;

// Public re-exports
pub use agent::{LearningAgent, PendingTransition};
pub use value_table::{DISCOUNT_FACTOR, LEARNING_RATE, ValueTable};
