use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_QUIZ_PATH: &str = "sns_lab2.json";

/// Why a quiz file could not be turned into a JSON document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("JSON Parse Error: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read `path` and parse it as an untyped JSON document.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value, LoadError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading quiz file");

    let json_content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    tracing::debug!(bytes = json_content.len(), "read quiz file");

    serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    fn write_temp(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents).expect("write temp file");
        file
    }

    #[test]
    fn test_load_valid_document() {
        let file = write_temp(br#"[{"question":"Q"}]"#);
        let value = load_document(file.path()).unwrap();
        assert!(value.is_array());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load_document(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert!(err.to_string().starts_with("File not found: "));
        assert!(err.to_string().ends_with("nope.json"));
    }

    #[test]
    fn test_parse_error_reports_position() {
        let file = write_temp(b"[{\"question\": }]");
        let err = load_document(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        let message = err.to_string();
        assert!(message.starts_with("JSON Parse Error: "));
        assert!(message.contains("line 1 column"));
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let file = write_temp(&[b'[', 0xff, 0xfe, b']']);
        let err = load_document(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
