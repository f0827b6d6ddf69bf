use crate::model::{ScenarioConfig, TrialResult};
use crate::seed::Seeder;
use crate::storage::Store;
use crate::strategy_api::{JoinStrategy, StrategyContext};
use crate::timing;
use std::sync::Arc;

pub struct ScenarioRunner {
    pub store: Store,
    pub strategies: Vec<Arc<dyn JoinStrategy>>,
    pub ctx: StrategyContext,
}

impl ScenarioRunner {
    /// Seeds the scenario's fixtures once, then times every strategy
    /// `repetitions` times against those same rows. Trials run strictly one
    /// after another so no two measurements overlap.
    pub async fn run_scenario(
        &self,
        seeder: &mut Seeder,
        scenario: &ScenarioConfig,
    ) -> anyhow::Result<Vec<TrialResult>> {
        seeder.populate(&self.store, scenario)?;

        let mut results =
            Vec::with_capacity(self.strategies.len() * scenario.repetitions as usize);
        for strategy in &self.strategies {
            for rep in 1..=scenario.repetitions {
                let (rows, time_ms) =
                    timing::measure(|| strategy.resolve(&self.store, &self.ctx)).await?;
                tracing::info!(
                    event = "trial_complete",
                    method = %strategy.method(),
                    rep,
                    rows = rows.len(),
                    time_ms,
                );
                results.push(TrialResult {
                    method: strategy.method(),
                    num_posts: scenario.num_posts,
                    num_users: scenario.num_users,
                    time_ms,
                });
            }
        }
        Ok(results)
    }
}
