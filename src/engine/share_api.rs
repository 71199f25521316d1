use super::Engine;

use async_trait::async_trait;

use crate::{api::ShareAPI, catalog::PROMO_MESSAGE, entities::Place, error::Error};

impl Engine {
    async fn share_text(&self, message: &str) -> Result<(), Error> {
        let outcome = self.share_sheet.share(message).await?;
        tracing::debug!(?outcome, "share sheet closed");

        Ok(())
    }
}

#[async_trait]
impl ShareAPI for Engine {
    #[tracing::instrument(skip(self, place), fields(title = %place.title))]
    async fn share_place(&self, place: &Place) -> Result<(), Error> {
        self.share_text(&place.share_message()).await
    }

    #[tracing::instrument(skip(self))]
    async fn share_fact(&self, fact: &str) -> Result<(), Error> {
        self.share_text(fact).await
    }

    #[tracing::instrument(skip(self))]
    async fn share_app(&self) -> Result<(), Error> {
        self.share_text(PROMO_MESSAGE).await
    }
}
