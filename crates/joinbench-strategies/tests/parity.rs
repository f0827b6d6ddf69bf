use joinbench_core::model::{PostAuthor, ScenarioConfig};
use joinbench_core::seed::Seeder;
use joinbench_core::storage::Store;
use joinbench_core::strategy_api::{JoinStrategy, StrategyContext};
use joinbench_strategies::{AppJoinStrategy, DbJoinStrategy};

const CTX: StrategyContext = StrategyContext { batch_size: 5000 };

fn seeded_store(num_posts: u32, num_users: u32) -> anyhow::Result<Store> {
    let store = Store::memory()?;
    store.init_schema()?;
    let mut seeder = Seeder::new(1234);
    seeder.populate(
        &store,
        &ScenarioConfig {
            num_posts,
            num_users,
            repetitions: 1,
        },
    )?;
    Ok(store)
}

fn sorted(mut rows: Vec<PostAuthor>) -> Vec<PostAuthor> {
    rows.sort_by_key(|r| r.post_id);
    rows
}

#[tokio::test]
async fn both_strategies_agree_on_seeded_data() -> anyhow::Result<()> {
    let store = seeded_store(80, 13)?;

    let db = DbJoinStrategy.resolve(&store, &CTX).await?;
    let app = AppJoinStrategy.resolve(&store, &CTX).await?;

    assert_eq!(db.len(), 80);
    assert!(db.iter().all(|r| r.author_name.is_some()));
    assert_eq!(sorted(db), sorted(app));
    Ok(())
}

#[tokio::test]
async fn missing_authors_resolve_to_none_on_both_sides() -> anyhow::Result<()> {
    let store = seeded_store(40, 6)?;

    // Drop one user out from under their posts.
    let victim: i64 = {
        let conn = store.conn.lock().unwrap();
        conn.execute("PRAGMA foreign_keys = OFF", [])?;
        let id: i64 = conn.query_row("SELECT author_id FROM posts LIMIT 1", [], |r| r.get(0))?;
        conn.execute("DELETE FROM users WHERE id = ?1", [id])?;
        id
    };
    let orphaned: i64 = {
        let conn = store.conn.lock().unwrap();
        conn.query_row(
            "SELECT count(*) FROM posts WHERE author_id = ?1",
            [victim],
            |r| r.get(0),
        )?
    };
    assert!(orphaned > 0);

    let db = DbJoinStrategy.resolve(&store, &CTX).await?;
    let app = AppJoinStrategy.resolve(&store, &CTX).await?;

    assert_eq!(db.len(), 40);
    assert_eq!(
        db.iter().filter(|r| r.author_name.is_none()).count() as i64,
        orphaned
    );
    assert_eq!(sorted(db), sorted(app));
    Ok(())
}

#[tokio::test]
async fn tiny_batches_do_not_change_the_answer() -> anyhow::Result<()> {
    let store = seeded_store(60, 25)?;

    // batch_size 4 forces several lookup batches over ~25 distinct authors
    let small = StrategyContext { batch_size: 4 };
    let app_small = AppJoinStrategy.resolve(&store, &small).await?;
    let app_big = AppJoinStrategy.resolve(&store, &CTX).await?;
    let db = DbJoinStrategy.resolve(&store, &CTX).await?;

    assert_eq!(sorted(app_small.clone()), sorted(app_big));
    assert_eq!(sorted(app_small), sorted(db));
    Ok(())
}

#[tokio::test]
async fn empty_tables_yield_empty_results() -> anyhow::Result<()> {
    let store = Store::memory()?;
    store.init_schema()?;

    assert!(DbJoinStrategy.resolve(&store, &CTX).await?.is_empty());
    assert!(AppJoinStrategy.resolve(&store, &CTX).await?.is_empty());
    Ok(())
}
