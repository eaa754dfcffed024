//! Application container wiring agents to their storage.

use std::path::PathBuf;

use crate::{
    Result,
    adapters::{CsvTableRepository, InMemoryRepository},
    agents::{RandomAgent, RuleBasedAgent},
    app::LearningConfig,
    ports::TableRepository,
    q_learning::LearningAgent,
};

/// Owns the table repository and builds agents that use it.
///
/// # Examples
///
/// ```no_run
/// use gomoku_agents::app::{App, LearningConfig};
///
/// let app = App::with_table_dir("tables");
/// let agent = app.create_learning_agent(LearningConfig::new("alice"))?;
/// # Ok::<(), gomoku_agents::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct App<R: TableRepository + Clone> {
    repository: R,
    default_seed: Option<u64>,
}

impl App<CsvTableRepository> {
    /// Production container storing CSV tables under `dir`.
    pub fn with_table_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(CsvTableRepository::new(dir))
    }
}

impl App<InMemoryRepository> {
    /// Container backed by in-memory storage.
    pub fn for_testing() -> Self {
        Self::new(InMemoryRepository::new())
    }
}

impl<R: TableRepository + Clone> App<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            default_seed: None,
        }
    }

    /// Seed applied to agents whose configuration has none.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Build a learning agent, loading its stored table if one exists.
    pub fn create_learning_agent(&self, mut config: LearningConfig) -> Result<LearningAgent<R>> {
        if config.seed.is_none() {
            config.seed = self.default_seed;
        }
        LearningAgent::new(config, self.repository.clone())
    }

    pub fn create_rule_based_agent(&self, name: impl Into<String>) -> RuleBasedAgent {
        RuleBasedAgent::new(name)
    }

    pub fn create_random_agent(&self, name: impl Into<String>, seed: Option<u64>) -> RandomAgent {
        RandomAgent::new(name, seed.or(self.default_seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::Agent;

    #[test]
    fn test_agents_share_repository() {
        let app = App::for_testing().with_default_seed(1);
        let mut agent = app
            .create_learning_agent(LearningConfig::new("shared"))
            .unwrap();
        agent.shutdown().unwrap();
        assert!(app.repository().contains("shared"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let app = App::for_testing();
        assert!(
            app.create_learning_agent(LearningConfig::new("q").with_exploration_rate(2.0))
                .is_err()
        );
    }
}
