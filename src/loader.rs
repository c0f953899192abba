//! File plumbing for the command-line front end
//!
//! All functions are async and go through `tokio::fs`; every I/O failure is
//! reported as [`DialectError::Io`] naming the path involved.

use crate::config::Config;
use crate::dialects::Dialect;
use crate::error::{DialectError, DialectResult};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Read a whole UTF-8 input file
pub async fn read_input(path: &Path) -> DialectResult<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| DialectError::Io(format!("Failed to read '{}': {}", path.display(), e)))
}

/// Write `content` to `path`, replacing any existing file
pub async fn write_output(path: &Path, content: &str) -> DialectResult<()> {
    fs::write(path, content)
        .await
        .map_err(|e| DialectError::Io(format!("Failed to write '{}': {}", path.display(), e)))
}

/// Create `dir` and any missing parents
pub async fn ensure_dir(dir: &Path) -> DialectResult<()> {
    fs::create_dir_all(dir).await.map_err(|e| {
        DialectError::Io(format!(
            "Failed to create directory '{}': {}",
            dir.display(),
            e
        ))
    })
}

/// `<dir>/<input stem>_<dialect id>.txt`
pub fn batch_output_path(input: &Path, dir: &Path, dialect: Dialect) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    dir.join(format!("{}_{}.txt", stem, dialect.id()))
}

/// Load a JSON configuration file
pub async fn load_config(path: &Path) -> DialectResult<Config> {
    let json = fs::read_to_string(path).await.map_err(|e| {
        DialectError::Config(format!(
            "Failed to read configuration '{}': {}",
            path.display(),
            e
        ))
    })?;
    Config::from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("speech.txt");
        write_output(&path, "Grukk'z iz krumpa.").await.unwrap();
        assert_eq!(read_input(&path).await.unwrap(), "Grukk'z iz krumpa.");
    }

    #[tokio::test]
    async fn test_missing_input_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        match read_input(&path).await {
            Err(DialectError::Io(msg)) => assert!(msg.contains("missing.txt")),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_ensure_dir_creates_parents() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("out").join("dialects");
        ensure_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
        // Existing directories are fine
        ensure_dir(&nested).await.unwrap();
    }

    #[test]
    fn test_batch_output_path() {
        let path = batch_output_path(Path::new("notes/speech.txt"), Path::new("out"), Dialect::Lord);
        assert_eq!(path, Path::new("out").join("speech_lord.txt"));

        let path = batch_output_path(Path::new("README"), Path::new("out"), Dialect::Wild);
        assert_eq!(path, Path::new("out").join("README_wild.txt"));
    }

    #[tokio::test]
    async fn test_load_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        write_output(&path, r#"{ "deterministic": true }"#).await.unwrap();
        let config = load_config(&path).await.unwrap();
        assert!(config.deterministic);
        assert!(config.flourishes);

        let missing = dir.path().join("nope.json");
        assert!(matches!(load_config(&missing).await, Err(DialectError::Config(_))));
    }
}
