use crate::model::{JoinMethod, PostAuthor};
use crate::storage::Store;
use async_trait::async_trait;

/// Knobs a strategy may consult while resolving the join.
#[derive(Debug, Clone, Copy)]
pub struct StrategyContext {
    /// Upper bound on user ids probed per lookup query.
    pub batch_size: usize,
}

/// One way of answering "who authored each post". Implementations must return
/// exactly one row per stored post, with authors that no longer exist resolved
/// to `None`, so results from different strategies stay comparable.
#[async_trait]
pub trait JoinStrategy: Send + Sync {
    fn method(&self) -> JoinMethod;

    async fn resolve(
        &self,
        store: &Store,
        ctx: &StrategyContext,
    ) -> anyhow::Result<Vec<PostAuthor>>;
}
