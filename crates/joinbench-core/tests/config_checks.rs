use joinbench_core::config::{load_config, write_sample_config};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn sample_config_passes_validation() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("joinbench.yaml");
    write_sample_config(&path)?;

    let cfg = load_config(&path).map_err(|e| anyhow::anyhow!(e))?;
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.scenarios.len(), 3);
    assert!(cfg.scenarios.iter().all(|s| s.repetitions == 3));
    assert_eq!(cfg.settings.batch_size, 5000);
    Ok(())
}

#[test]
fn missing_fields_fall_back_to_defaults() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("joinbench.yaml");
    fs::write(
        &path,
        "version: 1\nscenarios:\n  - { num_posts: 5, num_users: 2 }\n",
    )?;

    let cfg = load_config(&path).map_err(|e| anyhow::anyhow!(e))?;
    assert_eq!(cfg.database, PathBuf::from("joinbench.db"));
    assert_eq!(cfg.output, PathBuf::from("postsOutputs.json"));
    assert_eq!(cfg.settings.seed, 42);
    assert_eq!(cfg.settings.batch_size, 5000);
    assert_eq!(cfg.scenarios[0].repetitions, 3);
    Ok(())
}

#[test]
fn rejects_unsupported_version() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("joinbench.yaml");
    fs::write(
        &path,
        "version: 2\nscenarios:\n  - { num_posts: 1, num_users: 1 }\n",
    )?;

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("unsupported config version"));
    Ok(())
}

#[test]
fn rejects_empty_scenario_list() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("joinbench.yaml");
    fs::write(&path, "version: 1\nscenarios: []\n")?;

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("no scenarios"));
    Ok(())
}

#[test]
fn rejects_zero_batch_size() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("joinbench.yaml");
    fs::write(
        &path,
        "version: 1\nsettings:\n  batch_size: 0\nscenarios:\n  - { num_posts: 1, num_users: 1 }\n",
    )?;

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("batch_size"));
    Ok(())
}

#[test]
fn rejects_zero_repetitions() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("joinbench.yaml");
    fs::write(
        &path,
        "version: 1\nscenarios:\n  - { num_posts: 1, num_users: 1, repetitions: 0 }\n",
    )?;

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("zero repetitions"));
    Ok(())
}
