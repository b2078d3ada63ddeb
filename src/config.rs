//! Load and persist `.pathgrammar.json`.

use std::path::Path;

use crate::constants::CONFIG_FILE_NAME;
use crate::types::GrammarConfig;

/// Load the grammar config from a directory. Missing or unreadable files
/// yield `None`.
pub async fn load_grammar_config(dir_path: &Path) -> Option<GrammarConfig> {
    let path = dir_path.join(CONFIG_FILE_NAME);
    let content = tokio::fs::read_to_string(&path).await.ok()?;
    match serde_json::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("Ignoring malformed {}: {}", path.display(), e);
            None
        }
    }
}

/// Persist the grammar config to a directory.
pub async fn save_grammar_config(
    dir_path: &Path,
    config: &GrammarConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let path = dir_path.join(CONFIG_FILE_NAME);
    let content = serde_json::to_string_pretty(config)?;
    tokio::fs::write(path, content).await?;
    Ok(())
}
