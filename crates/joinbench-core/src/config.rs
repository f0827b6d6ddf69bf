use crate::errors::ConfigError;
use crate::model::ExperimentConfig;
use std::path::Path;

pub const SUPPORTED_CONFIG_VERSION: u32 = 1;

pub fn load_config(path: &Path) -> Result<ExperimentConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError(format!("failed to read config {}: {}", path.display(), e)))?;
    let cfg: ExperimentConfig = serde_yaml::from_str(&raw)
        .map_err(|e| ConfigError(format!("failed to parse YAML: {}", e)))?;
    if cfg.version != SUPPORTED_CONFIG_VERSION {
        return Err(ConfigError(format!(
            "unsupported config version {} (supported: {})",
            cfg.version, SUPPORTED_CONFIG_VERSION
        )));
    }
    if cfg.scenarios.is_empty() {
        return Err(ConfigError("config has no scenarios".into()));
    }
    if cfg.settings.batch_size == 0 {
        return Err(ConfigError("settings.batch_size must be at least 1".into()));
    }
    if let Some(s) = cfg.scenarios.iter().find(|s| s.repetitions == 0) {
        return Err(ConfigError(format!(
            "scenario {}x{} has zero repetitions",
            s.num_posts, s.num_users
        )));
    }
    Ok(cfg)
}

pub fn write_sample_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, include_str!("../../../joinbench.yaml"))
        .map_err(|e| ConfigError(format!("failed to write sample config: {}", e)))?;
    Ok(())
}
