use crate::engine::scenario::ScenarioRunner;
use crate::model::{ExperimentConfig, TrialResult};
use crate::seed::Seeder;
use crate::storage::Store;
use crate::strategy_api::{JoinStrategy, StrategyContext};
use anyhow::Context;
use std::sync::Arc;

pub struct Driver {
    pub store: Store,
    pub strategies: Vec<Arc<dyn JoinStrategy>>,
}

impl Driver {
    /// Runs every configured scenario in order, each against freshly reset
    /// storage, and hands back the accumulated measurements. The first
    /// failure aborts the whole experiment; partial results are dropped, not
    /// reported.
    pub async fn run_experiment(
        &self,
        cfg: &ExperimentConfig,
    ) -> anyhow::Result<Vec<TrialResult>> {
        let runner = ScenarioRunner {
            store: self.store.clone(),
            strategies: self.strategies.clone(),
            ctx: StrategyContext {
                batch_size: cfg.settings.batch_size,
            },
        };

        let mut all = Vec::new();
        for (idx, scenario) in cfg.scenarios.iter().enumerate() {
            tracing::info!(
                event = "scenario_start",
                scenario = idx + 1,
                total = cfg.scenarios.len(),
                posts = scenario.num_posts,
                users = scenario.num_users,
            );
            self.store.reset().with_context(|| {
                format!("resetting storage for scenario {}", idx + 1)
            })?;

            // A fresh seeder per scenario keeps each scenario's rows a pure
            // function of (seed, scenario), independent of ordering.
            let mut seeder = Seeder::new(cfg.settings.seed);
            let results = runner.run_scenario(&mut seeder, scenario).await?;
            all.extend(results);
        }
        Ok(all)
    }
}
