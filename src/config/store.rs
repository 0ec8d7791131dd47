// JSON file store for settings.
// Reads optional JSON documents and writes them atomically via a temp file.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::Result;

/// Read a JSON document, returning None if the file does not exist.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    let value: T = serde_json::from_str(&contents)?;
    Ok(Some(value))
}

/// Write a JSON document, creating parent directories as needed.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(value)?;

    // Write atomically via temp file
    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        value: i32,
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("sample.json");

        let sample = Sample {
            name: "drop".to_string(),
            value: 42,
        };
        write_json(&path, &sample).unwrap();

        let read: Option<Sample> = read_json(&path).unwrap();
        assert_eq!(read, Some(sample));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_read_missing_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let read: Option<Sample> = read_json(&path).unwrap();
        assert!(read.is_none());
    }

    #[test]
    fn test_read_garbage_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let read: Result<Option<Sample>> = read_json(&path);
        assert!(read.is_err());
    }
}
