//! Application layer: configuration and the container that builds agents.
//!
//! # Usage
//!
//! ```
//! use gomoku_agents::app::{App, LearningConfig};
//!
//! let app = App::for_testing().with_default_seed(42);
//! let agent = app.create_learning_agent(LearningConfig::new("alice"))?;
//! # Ok::<(), gomoku_agents::Error>(())
//! ```

pub mod config;
pub mod container;

pub use config::LearningConfig;
pub use container::App;
