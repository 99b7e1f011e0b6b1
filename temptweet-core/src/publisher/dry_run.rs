use async_trait::async_trait;
use tracing::info;

use crate::TempTweetError;

use super::Publisher;

/// Publishes nothing; used by `--dry-run`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunPublisher;

#[async_trait]
impl Publisher for DryRunPublisher {
    async fn publish(&self, text: &str) -> Result<String, TempTweetError> {
        info!(chars = text.chars().count(), "dry run, status not posted");
        Ok("(dry run: nothing was posted)".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn dry_run_never_fails() {
        let body = DryRunPublisher.publish("anything").await.unwrap();
        assert!(body.contains("dry run"));
    }
}
