//! Writing generated configuration for the daemon

use std::path::Path;
use tokio::fs;

use crate::config::AgentConfiguration;
use crate::error::ConfabError;

/// Write the agent configuration as JSON to `path`
///
/// Creates the parent directory if needed and replaces any existing file.
pub async fn write_configuration(
    path: &Path,
    config: &AgentConfiguration,
) -> Result<(), ConfabError> {
    let json = config.to_json_pretty()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|source| ConfabError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    fs::write(path, json)
        .await
        .map_err(|source| ConfabError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(
        path = %path.display(),
        node_name = %config.node_name,
        "Wrote agent configuration"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RawConfiguration;
    use crate::generator::generate_configuration;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_write_creates_parent_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config").join("config.json");
        let config = generate_configuration(&RawConfiguration::default());

        write_configuration(&path, &config).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: AgentConfiguration = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, config);
    }

    #[tokio::test]
    async fn test_write_to_unwritable_path_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let config = generate_configuration(&RawConfiguration::default());
        let err = write_configuration(&blocker.join("config.json"), &config)
            .await
            .unwrap_err();

        assert!(matches!(err, ConfabError::Write { .. }));
    }
}
