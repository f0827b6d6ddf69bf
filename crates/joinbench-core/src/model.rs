use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub version: u32,
    #[serde(default = "default_database")]
    pub database: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub settings: Settings,
    pub scenarios: Vec<ScenarioConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            batch_size: default_batch_size(),
        }
    }
}

fn default_database() -> PathBuf {
    PathBuf::from("joinbench.db")
}

fn default_output() -> PathBuf {
    PathBuf::from("postsOutputs.json")
}

fn default_seed() -> u64 {
    42
}

fn default_batch_size() -> usize {
    5000
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub num_posts: u32,
    pub num_users: u32,
    #[serde(default = "default_repetitions")]
    pub repetitions: u32,
}

fn default_repetitions() -> u32 {
    3
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinMethod {
    Db,
    InApp,
}

impl JoinMethod {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "db" => Some(JoinMethod::Db),
            "in_app" => Some(JoinMethod::InApp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JoinMethod::Db => "db",
            JoinMethod::InApp => "in_app",
        }
    }
}

impl std::fmt::Display for JoinMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One timed strategy invocation. The serialized form is the output
/// artifact's record schema: `{"method", "numPosts", "numUsers", "timeMs"}`,
/// with `method` one of `"db"` / `"in_app"` and `timeMs` a non-negative
/// float of milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialResult {
    pub method: JoinMethod,
    #[serde(rename = "numPosts")]
    pub num_posts: u32,
    #[serde(rename = "numUsers")]
    pub num_users: u32,
    #[serde(rename = "timeMs")]
    pub time_ms: f64,
}

/// What both strategies resolve per post. `author_name` is `None` when the
/// referenced user no longer exists, for the engine-side and the in-app
/// reconstruction alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostAuthor {
    pub post_id: i64,
    pub author_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub content: String,
    pub author_id: i64,
}

#[derive(Debug, Clone)]
pub struct Post {
    pub id: i64,
    pub content: String,
    pub author_id: Option<i64>,
}
