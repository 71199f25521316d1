use crate::api::{DynAPI, ShareAPI, API};
use crate::catalog::random_fact;
use crate::entities::{Category, Place};
use crate::error::absorb;

pub struct RecommendedScreen {
    api: DynAPI,
    category: Category,
    fact: &'static str,
}

impl RecommendedScreen {
    pub fn new(api: DynAPI) -> Self {
        Self {
            api,
            category: Category::default(),
            fact: random_fact(),
        }
    }

    pub fn on_focus(&mut self) {
        self.fact = random_fact();
    }

    pub fn fact(&self) -> &'static str {
        self.fact
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn select_category(&mut self, category: Category) {
        self.category = category;
    }

    pub fn places(&self) -> Vec<Place> {
        self.api.catalog().by_category(self.category)
    }

    pub async fn share_fact(&self) {
        absorb(self.api.share_fact(self.fact).await, "share fact");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FACTS;
    use crate::screens::testing::memory_api;

    #[tokio::test]
    async fn lists_places_for_the_active_category() {
        let (api, _, sheet) = memory_api();
        let mut screen = RecommendedScreen::new(api);

        assert_eq!(screen.category(), Category::Nature);
        assert_eq!(screen.places()[0].title, "Prince’s Island Park");

        screen.select_category(Category::Culture);
        assert!(screen.places().iter().all(|p| p.category == Category::Culture));

        screen.on_focus();
        assert!(FACTS.contains(&screen.fact()));

        screen.share_fact().await;
        assert_eq!(sheet.messages.lock().await.as_slice(), &[screen.fact().to_string()]);
    }
}
