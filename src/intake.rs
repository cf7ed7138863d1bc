use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{Error, Result};

const BOM: char = '\u{feff}';

/// A review file the user picked. Selecting does no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    path: PathBuf,
}

impl SelectedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if !has_json_extension(&path) {
            warn!(path = %path.display(), "Selected file does not have a .json extension");
        }
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read_text(&self) -> Result<String> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|source| Error::Read {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "Read review file");

        let text = String::from_utf8(bytes).map_err(|e| Error::Read {
            path: self.path.clone(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })?;

        // Editors on Windows often save with a byte-order mark.
        Ok(match text.strip_prefix(BOM) {
            Some(stripped) => stripped.to_string(),
            None => text,
        })
    }
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_json_extension() {
        assert!(has_json_extension(Path::new("reviews.json")));
        assert!(has_json_extension(Path::new("REVIEWS.JSON")));
        assert!(!has_json_extension(Path::new("reviews.csv")));
        assert!(!has_json_extension(Path::new("reviews")));
    }

    #[tokio::test]
    async fn test_read_text() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(b"[]").unwrap();

        let selected = SelectedFile::new(file.path());
        assert_eq!(selected.read_text().await.unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_strips_byte_order_mark() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(b"\xEF\xBB\xBF[{\"Review_Text\": \"ok\", \"Rating\": 4}]").unwrap();

        let text = SelectedFile::new(file.path()).read_text().await.unwrap();
        assert!(text.starts_with('['));
        assert_eq!(crate::validator::validate(&text).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_rejects_invalid_utf8() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(&[0x5b, 0xff, 0xfe, 0x5d]).unwrap();

        let err = SelectedFile::new(file.path()).read_text().await.unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SelectedFile::new(dir.path().join("absent.json"))
            .read_text()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}
