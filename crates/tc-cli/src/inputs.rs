//! Asynchronous loading of input files

use anyhow::{Context, Result};
use futures::future::try_join_all;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A file's path and its text
#[derive(Debug, Clone)]
pub struct LoadedInput {
    pub path: PathBuf,
    pub text: String,
}

pub async fn read_input(path: &Path) -> Result<LoadedInput> {
    let mut text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    if text.starts_with('\u{feff}') {
        text.drain(..'\u{feff}'.len_utf8());
    }
    debug!("Read {} bytes from {:?}", text.len(), path);

    Ok(LoadedInput {
        path: path.to_path_buf(),
        text,
    })
}

pub async fn read_optional(path: Option<&Path>) -> Result<Option<LoadedInput>> {
    match path {
        Some(path) => read_input(path).await.map(Some),
        None => Ok(None),
    }
}

/// Read every file concurrently; results keep the order of `paths`
pub async fn read_all(paths: &[PathBuf]) -> Result<Vec<LoadedInput>> {
    try_join_all(paths.iter().map(|path| read_input(path))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_all_keeps_order() {
        let dir = TempDir::new().unwrap();
        let paths: Vec<PathBuf> = (0..4)
            .map(|i| {
                let path = dir.path().join(format!("{}.txt", i));
                fs::write(&path, format!("file {}", i)).unwrap();
                path
            })
            .collect();

        let inputs = read_all(&paths).await.unwrap();
        let texts: Vec<_> = inputs.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["file 0", "file 1", "file 2", "file 3"]);
    }

    #[tokio::test]
    async fn test_read_strips_bom() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("device.txt");
        fs::write(&path, "\u{feff}1#Fan\n60\n").unwrap();

        let input = read_input(&path).await.unwrap();
        assert_eq!(input.text, "1#Fan\n60\n");
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let err = read_input(Path::new("/nonexistent/shadow.txt"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/shadow.txt"));
    }

    #[tokio::test]
    async fn test_read_optional_none() {
        assert!(read_optional(None).await.unwrap().is_none());
    }
}
