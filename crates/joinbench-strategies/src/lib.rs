use std::sync::Arc;

use joinbench_core::strategy_api::JoinStrategy;

mod app_join;
mod db_join;

pub use app_join::AppJoinStrategy;
pub use db_join::DbJoinStrategy;

/// Both strategies, in the order the experiment reports them.
pub fn default_strategies() -> Vec<Arc<dyn JoinStrategy>> {
    vec![Arc::new(DbJoinStrategy), Arc::new(AppJoinStrategy)]
}
