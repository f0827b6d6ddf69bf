use anyhow::Context;
use async_trait::async_trait;
use joinbench_core::model::{JoinMethod, Post, PostAuthor};
use joinbench_core::storage::Store;
use joinbench_core::strategy_api::{JoinStrategy, StrategyContext};
use std::collections::{HashMap, HashSet};

/// Fetches posts and users separately and correlates them in memory: distinct
/// author ids, then batched id lookups, then one map probe per post.
pub struct AppJoinStrategy;

#[async_trait]
impl JoinStrategy for AppJoinStrategy {
    fn method(&self) -> JoinMethod {
        JoinMethod::InApp
    }

    async fn resolve(
        &self,
        store: &Store,
        ctx: &StrategyContext,
    ) -> anyhow::Result<Vec<PostAuthor>> {
        let posts = store.all_posts().context("fetching posts")?;

        let author_ids = distinct_author_ids(&posts);
        let mut authors: HashMap<i64, String> = HashMap::with_capacity(author_ids.len());
        for chunk in author_ids.chunks(ctx.batch_size.max(1)) {
            let batch = store
                .user_names_by_ids(chunk)
                .context("fetching author batch")?;
            for (id, name) in batch {
                authors.insert(id, name);
            }
        }
        tracing::debug!(
            event = "author_lookup",
            posts = posts.len(),
            distinct = author_ids.len(),
            resolved = authors.len(),
        );

        Ok(posts
            .into_iter()
            .map(|post| PostAuthor {
                post_id: post.id,
                author_name: post.author_id.and_then(|id| authors.get(&id).cloned()),
            })
            .collect())
    }
}

/// Dedups in first-seen order. Ids that repeat across posts are fetched once.
fn distinct_author_ids(posts: &[Post]) -> Vec<i64> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for post in posts {
        if let Some(id) = post.author_id {
            if seen.insert(id) {
                ids.push(id);
            }
        }
    }
    ids
}
