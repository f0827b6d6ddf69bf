use crate::model::TrialResult;
use anyhow::Context;
use std::path::Path;

/// Serializes all trials into one JSON array at `path`. Called once, after
/// the whole experiment has completed; an aborted experiment writes nothing.
pub fn write_results(path: &Path, results: &[TrialResult]) -> anyhow::Result<()> {
    let body = serde_json::to_string(results).context("serializing trial results")?;
    std::fs::write(path, body)
        .with_context(|| format!("writing results to {}", path.display()))?;
    Ok(())
}
