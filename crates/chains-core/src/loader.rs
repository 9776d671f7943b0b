//! # Record Loader
//!
//! Reads a chain file and parses it into a [`Record`]. Invalid UTF-8,
//! malformed JSON and a top-level value that is not an object are all
//! [`LoadError::Parse`]; the validator never sees them.

use std::path::Path;

use crate::error::LoadError;
use crate::record::Record;

/// Read and parse the record at `path`.
///
/// # Errors
///
/// [`LoadError::Io`] when the file cannot be read, [`LoadError::Parse`] when
/// the content is not a JSON object.
pub fn load_record(path: &Path) -> Result<Record, LoadError> {
    let content = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_record(path, &content)
}

/// Parse record bytes. `path` is only used for error context.
///
/// # Errors
///
/// [`LoadError::Parse`] when `content` is not a UTF-8 JSON object.
pub fn parse_record(path: &Path, content: impl AsRef<[u8]>) -> Result<Record, LoadError> {
    serde_json::from_slice(content.as_ref()).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_object() {
        let r = parse_record(Path::new("1.json"), r#"{"chainId": 1, "name": "Ether"}"#).unwrap();
        assert_eq!(r.field_names().count(), 2);
        assert!(r.contains("name"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_record(Path::new("1.json"), r#"{"chainId": 1,"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn rejects_non_object_top_level() {
        for content in ["[]", "1", "\"x\"", "null"] {
            let err = parse_record(Path::new("1.json"), content).unwrap_err();
            assert!(matches!(err, LoadError::Parse { .. }), "accepted {content}");
        }
    }

    #[test]
    fn rejects_invalid_utf8() {
        let err = parse_record(Path::new("1.json"), b"{\"name\": \"\xff\"}").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert_eq!(err.kind(), "ParseError");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_record(Path::new("/tmp/chains-no-such-record-xyz.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert_eq!(err.kind(), "IoError");
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("5.json");
        std::fs::write(&path, br#"{"chainId": 5}"#).unwrap();
        let r = load_record(&path).unwrap();
        assert!(r.contains("chainId"));
    }
}
