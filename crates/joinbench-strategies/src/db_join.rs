use anyhow::Context;
use async_trait::async_trait;
use joinbench_core::model::{JoinMethod, PostAuthor};
use joinbench_core::storage::Store;
use joinbench_core::strategy_api::{JoinStrategy, StrategyContext};

/// Lets the storage engine do the work: one LEFT JOIN, one result set.
pub struct DbJoinStrategy;

#[async_trait]
impl JoinStrategy for DbJoinStrategy {
    fn method(&self) -> JoinMethod {
        JoinMethod::Db
    }

    async fn resolve(
        &self,
        store: &Store,
        _ctx: &StrategyContext,
    ) -> anyhow::Result<Vec<PostAuthor>> {
        store.posts_with_authors().context("engine-side join")
    }
}
