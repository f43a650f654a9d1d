use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AppError, Result};

/// Reads an input document and returns its top-level array elements
/// without interpreting them.
pub async fn read_array(path: &Path) -> Result<Vec<Value>> {
    let content = tokio::fs::read_to_string(path).await?;

    match serde_json::from_str(&content)? {
        Value::Array(items) => Ok(items),
        _ => Err(AppError::NotAnArray {
            path: path.to_path_buf(),
        }),
    }
}

pub fn parse_record<T: DeserializeOwned>(path: &Path, index: usize, item: Value) -> Result<T> {
    serde_json::from_value(item).map_err(|source| AppError::Ingest {
        path: path.to_path_buf(),
        index,
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tokio_test::assert_err;

    use super::*;

    #[tokio::test]
    async fn object_document_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Title": "not an array"}}"#).unwrap();

        let err = read_array(file.path()).await.unwrap_err();
        assert!(matches!(err, AppError::NotAnArray { .. }));
    }

    #[tokio::test]
    async fn malformed_json_is_a_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{{").unwrap();

        let err = read_array(file.path()).await.unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert_err!(read_array(&dir.path().join("absent.json")).await);
    }
}
