use clap::{Parser, Subcommand};
use joinbench_core::engine::{Driver, ScenarioRunner};
use joinbench_core::model::{JoinMethod, PostAuthor, ScenarioConfig};
use joinbench_core::seed::Seeder;
use joinbench_core::storage::Store;
use joinbench_core::strategy_api::{JoinStrategy, StrategyContext};
use joinbench_strategies::{AppJoinStrategy, DbJoinStrategy};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "joinbench",
    version,
    about = "Measures engine-side vs in-app join strategies over seeded fixtures"
)]
struct Cli {
    /// log filter, e.g. info or joinbench_core=debug
    #[arg(long, default_value = "warn", env = "JOINBENCH_LOG", global = true)]
    log_level: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    Run(RunArgs),
    Scenario(ScenarioArgs),
    Check(CheckArgs),
    Init(InitArgs),
    Version,
}

#[derive(Parser, Clone)]
struct RunArgs {
    #[arg(long, default_value = "joinbench.yaml")]
    config: PathBuf,

    /// overrides the database path from the config
    #[arg(long)]
    db: Option<PathBuf>,

    /// overrides the output path from the config
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Parser, Clone)]
struct ScenarioArgs {
    #[arg(long, default_value_t = 1000)]
    posts: u32,
    #[arg(long, default_value_t = 10000)]
    users: u32,
    #[arg(long, default_value_t = 3)]
    reps: u32,

    /// strategy selection: db|in_app|both
    #[arg(long, default_value = "both")]
    method: String,

    #[arg(long, default_value = "joinbench.db")]
    db: PathBuf,

    #[arg(long)]
    output: Option<PathBuf>,

    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 5000)]
    batch_size: usize,
}

#[derive(Parser, Clone)]
struct CheckArgs {
    #[arg(long, default_value_t = 200)]
    posts: u32,
    #[arg(long, default_value_t = 50)]
    users: u32,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 5000)]
    batch_size: usize,
}

#[derive(Parser, Clone)]
struct InitArgs {
    #[arg(long, default_value = "joinbench.yaml")]
    config: PathBuf,

    /// generate .gitignore for the database and output artifact
    #[arg(long)]
    gitignore: bool,
}

mod exit_codes {
    pub const OK: i32 = 0;
    pub const EXPERIMENT_FAILED: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
}

fn init_logging(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    let code = match dispatch(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fatal: {e:?}");
            exit_codes::CONFIG_ERROR
        }
    };
    std::process::exit(code);
}

async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Run(args) => cmd_run(args).await,
        Command::Scenario(args) => cmd_scenario(args).await,
        Command::Check(args) => cmd_check(args).await,
        Command::Init(args) => cmd_init(args).await,
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(exit_codes::OK)
        }
    }
}

async fn cmd_run(args: RunArgs) -> anyhow::Result<i32> {
    let cfg =
        joinbench_core::config::load_config(&args.config).map_err(|e| anyhow::anyhow!(e))?;
    let db_path = args.db.unwrap_or_else(|| cfg.database.clone());
    let output = args.output.unwrap_or_else(|| cfg.output.clone());
    ensure_parent_dir(&db_path)?;
    ensure_parent_dir(&output)?;

    let store = Store::open(&db_path)?;
    store.init_schema()?;
    let driver = Driver {
        store,
        strategies: joinbench_strategies::default_strategies(),
    };

    tracing::info!(
        event = "experiment_start",
        config = %args.config.display(),
        scenarios = cfg.scenarios.len(),
    );

    let results = match driver.run_experiment(&cfg).await {
        Ok(r) => r,
        Err(e) => {
            eprintln!("experiment aborted: {e:?}");
            return Ok(exit_codes::EXPERIMENT_FAILED);
        }
    };

    joinbench_core::report::json::write_results(&output, &results)?;
    joinbench_core::report::console::print_summary(&results);
    eprintln!("wrote {} trials to {}", results.len(), output.display());
    Ok(exit_codes::OK)
}

async fn cmd_scenario(args: ScenarioArgs) -> anyhow::Result<i32> {
    ensure_parent_dir(&args.db)?;
    let store = Store::open(&args.db)?;
    store.init_schema()?;
    store.reset()?;

    let runner = ScenarioRunner {
        store,
        strategies: select_strategies(&args.method)?,
        ctx: StrategyContext {
            batch_size: args.batch_size.max(1),
        },
    };
    let scenario = ScenarioConfig {
        num_posts: args.posts,
        num_users: args.users,
        repetitions: args.reps.max(1),
    };

    let mut seeder = Seeder::new(args.seed);
    let results = match runner.run_scenario(&mut seeder, &scenario).await {
        Ok(r) => r,
        Err(e) => {
            eprintln!("scenario failed: {e:?}");
            return Ok(exit_codes::EXPERIMENT_FAILED);
        }
    };

    if let Some(out) = &args.output {
        ensure_parent_dir(out)?;
        joinbench_core::report::json::write_results(out, &results)?;
        eprintln!("wrote {} trials to {}", results.len(), out.display());
    }
    joinbench_core::report::console::print_summary(&results);
    Ok(exit_codes::OK)
}

/// Correctness gate: seeds one in-memory scenario and verifies both
/// strategies produce the same rows.
async fn cmd_check(args: CheckArgs) -> anyhow::Result<i32> {
    let store = Store::memory()?;
    store.init_schema()?;

    let mut seeder = Seeder::new(args.seed);
    seeder.populate(
        &store,
        &ScenarioConfig {
            num_posts: args.posts,
            num_users: args.users,
            repetitions: 1,
        },
    )?;

    let ctx = StrategyContext {
        batch_size: args.batch_size.max(1),
    };
    let db = DbJoinStrategy.resolve(&store, &ctx).await?;
    let in_app = AppJoinStrategy.resolve(&store, &ctx).await?;

    let db_set: HashSet<PostAuthor> = db.into_iter().collect();
    let app_set: HashSet<PostAuthor> = in_app.into_iter().collect();
    if db_set != app_set {
        eprintln!(
            "strategy mismatch: {} rows only in db, {} rows only in in_app",
            db_set.difference(&app_set).count(),
            app_set.difference(&db_set).count()
        );
        return Ok(exit_codes::EXPERIMENT_FAILED);
    }

    eprintln!(
        "ok: strategies agree on {} posts x {} users ({} rows)",
        args.posts,
        args.users,
        db_set.len()
    );
    Ok(exit_codes::OK)
}

async fn cmd_init(args: InitArgs) -> anyhow::Result<i32> {
    if !args.config.exists() {
        if let Some(parent) = args.config.parent() {
            std::fs::create_dir_all(parent)?;
        }
        joinbench_core::config::write_sample_config(&args.config)?;
        eprintln!("created {}", args.config.display());
    } else {
        eprintln!("note: {} already exists", args.config.display());
    }

    if args.gitignore {
        let gi_path = std::path::Path::new(".gitignore");
        if !gi_path.exists() {
            std::fs::write(
                gi_path,
                "joinbench.db\njoinbench.db-shm\njoinbench.db-wal\npostsOutputs.json\n",
            )?;
            eprintln!("created .gitignore");
        } else {
            eprintln!("note: .gitignore already exists (skipped)");
        }
    }

    Ok(exit_codes::OK)
}

fn select_strategies(method: &str) -> anyhow::Result<Vec<Arc<dyn JoinStrategy>>> {
    match method {
        "both" => Ok(joinbench_strategies::default_strategies()),
        other => match JoinMethod::parse(other) {
            Some(JoinMethod::Db) => Ok(vec![Arc::new(DbJoinStrategy)]),
            Some(JoinMethod::InApp) => Ok(vec![Arc::new(AppJoinStrategy)]),
            None => anyhow::bail!("unknown method {:?} (expected db|in_app|both)", other),
        },
    }
}

fn ensure_parent_dir(path: &std::path::Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
