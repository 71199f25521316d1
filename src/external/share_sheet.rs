use async_trait::async_trait;

use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Dismissed,
}

#[async_trait]
pub trait ShareSheet: Send + Sync {
    async fn share(&self, message: &str) -> Result<ShareOutcome, Error>;
}

#[derive(Debug, Default)]
pub struct TracingShareSheet;

#[async_trait]
impl ShareSheet for TracingShareSheet {
    #[tracing::instrument(skip(self))]
    async fn share(&self, message: &str) -> Result<ShareOutcome, Error> {
        tracing::info!("sharing {} bytes of text", message.len());
        Ok(ShareOutcome::Shared)
    }
}
