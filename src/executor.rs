use crate::model::ManifestReport;
use crate::traits::ManifestParser;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{info, instrument};

/// Runs manifest parsers with a bounded level of concurrency.
///
/// Each parse is independent (the parsers hold no cross-invocation state),
/// so the semaphore only limits how many manifests are scanned at once when
/// the inventory system fans out over a large tree.
pub struct ScanExecutor {
    semaphore: Arc<Semaphore>,
}

impl ScanExecutor {
    pub fn new(concurrency_limit: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(concurrency_limit)),
        }
    }

    #[instrument(skip(self, parser, content))]
    pub async fn execute<P>(
        &self,
        parser: Arc<P>,
        content: Vec<u8>,
    ) -> Result<ManifestReport, crate::traits::ParseError>
    where
        P: ManifestParser + 'static,
    {
        let _permit =
            self.semaphore.acquire().await.map_err(|e| {
                crate::traits::ParseError::Unknown(format!("Semaphore error: {}", e))
            })?;

        info!("Starting scan for manifest format: {}", parser.manifest_id());

        let result = parser.parse(&content).await;

        info!(
            "Finished scan for manifest format: {}",
            parser.manifest_id()
        );
        result
    }
}
