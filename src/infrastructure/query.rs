use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to read query document {path}: {source}")]
pub struct QueryLoadError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// GraphQL query text read once at startup. The text is opaque here; the
/// upstream service is the only thing that parses it.
#[derive(Debug, Clone)]
pub struct QueryDocument {
    text: Arc<str>,
}

impl QueryDocument {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, QueryLoadError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| QueryLoadError {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from(text))
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<String> for QueryDocument {
    fn from(text: String) -> Self {
        Self { text: text.into() }
    }
}

impl From<&str> for QueryDocument {
    fn from(text: &str) -> Self {
        Self { text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::QueryDocument;
    use std::io::Write;

    #[tokio::test]
    async fn reads_entire_file_verbatim() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        let text = "query Report($ReportNumber: String!) {\n  report(number: $ReportNumber) { id }\n}\n";
        file.write_all(text.as_bytes()).expect("write query");

        let document = QueryDocument::load(file.path()).await.expect("load query");

        assert_eq!(document.as_str(), text);
    }

    #[tokio::test]
    async fn missing_file_reports_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.graphql");

        let error = QueryDocument::load(&path).await.expect_err("expected failure");

        assert_eq!(error.path, path);
        assert!(error.to_string().contains("absent.graphql"));
    }
}
