use joinbench_core::model::{JoinMethod, TrialResult};
use joinbench_core::report::json::write_results;
use tempfile::tempdir;

#[test]
fn artifact_is_one_array_with_the_agreed_field_names() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("postsOutputs.json");

    let trials = vec![
        TrialResult {
            method: JoinMethod::Db,
            num_posts: 1000,
            num_users: 10000,
            time_ms: 12.5,
        },
        TrialResult {
            method: JoinMethod::InApp,
            num_posts: 1000,
            num_users: 10000,
            time_ms: 48.25,
        },
    ];
    write_results(&path, &trials)?;

    let raw = std::fs::read_to_string(&path)?;
    let parsed: serde_json::Value = serde_json::from_str(&raw)?;
    let arr = parsed.as_array().expect("top-level array");
    assert_eq!(arr.len(), 2);

    let mut keys: Vec<String> = arr[0].as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, ["method", "numPosts", "numUsers", "timeMs"]);

    assert_eq!(arr[0]["method"], "db");
    assert_eq!(arr[1]["method"], "in_app");
    assert_eq!(arr[0]["numPosts"], 1000);
    assert_eq!(arr[0]["numUsers"], 10000);
    assert_eq!(arr[1]["timeMs"], 48.25);
    Ok(())
}

#[test]
fn empty_experiment_serializes_to_an_empty_array() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("postsOutputs.json");

    write_results(&path, &[])?;
    assert_eq!(std::fs::read_to_string(&path)?, "[]");
    Ok(())
}
