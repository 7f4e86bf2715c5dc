use crate::model::ManifestReport;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to decode content: {0}")]
    Decode(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unknown error: {0}")]
    Unknown(String),
}

#[async_trait]
pub trait ManifestParser: Send + Sync {
    /// Returns the manifest format ID this parser handles (e.g., "pip").
    fn manifest_id(&self) -> &str;

    /// Parses raw manifest content (e.g., requirements.txt) into a ManifestReport.
    ///
    /// Lines that do not declare an exact-version pin are skipped, never
    /// reported as errors; `Err` means the content itself could not be read
    /// or decoded, and no partial report is returned in that case.
    async fn parse(&self, content: &[u8]) -> Result<ManifestReport, ParseError>;
}
