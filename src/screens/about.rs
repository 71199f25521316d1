use crate::api::{DynAPI, ShareAPI};
use crate::error::absorb;

pub struct AboutScreen {
    api: DynAPI,
}

impl AboutScreen {
    pub fn new(api: DynAPI) -> Self {
        Self { api }
    }

    pub async fn share_app(&self) {
        absorb(self.api.share_app().await, "share app");
    }
}
