use chrono::{DateTime, Duration, Utc};

use crate::catalog::Catalog;
use crate::entities::Place;
use crate::error::{invalid_input_error, invalid_invocation_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Recommended,
    Saved,
    Map,
    About,
}

impl Default for Tab {
    fn default() -> Self {
        Self::Recommended
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    Loader { deadline: DateTime<Utc> },
    Onboarding { step: usize },
    Tabs { tab: Tab },
    PlaceDetails { place: Place },
}

impl Route {
    pub fn name(&self) -> String {
        match self {
            Self::Loader { deadline: _ } => "Loader".into(),
            Self::Onboarding { step: _ } => "Onboarding".into(),
            Self::Tabs { tab: _ } => "Tabs".into(),
            Self::PlaceDetails { place: _ } => "PlaceDetails".into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OnboardingPage {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
}

pub const ONBOARDING_PAGES: [OnboardingPage; 3] = [
    OnboardingPage {
        title: "Hi, I’m your Calgary Guide.",
        subtitle: "I’ll show you the best of our city — from nature escapes to cultural gems and fun activities.",
        cta: "Go",
    },
    OnboardingPage {
        title: "I’ll recommend top places in three categories:",
        subtitle: "Nature, Culture, and Entertainment. Save your favorite spots and create your personal list for an unforgettable trip!",
        cta: "Next",
    },
    OnboardingPage {
        title: "With our interactive map, you’ll always know where to go next.",
        subtitle: "Let’s start your journey and dive into the spirit of Calgary together!",
        cta: "Start",
    },
];

#[derive(Clone, Debug)]
pub struct Navigator {
    stack: Vec<Route>,
    catalog: Catalog,
}

impl Navigator {
    pub fn new(catalog: Catalog, loader_delay: Duration, now: DateTime<Utc>) -> Self {
        Self {
            stack: vec![Route::Loader {
                deadline: now + loader_delay,
            }],
            catalog,
        }
    }

    pub fn current(&self) -> &Route {
        // the stack is never emptied: replace swaps the top, go_back keeps the root
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn onboarding_page(&self) -> Option<&'static OnboardingPage> {
        match self.current() {
            Route::Onboarding { step } => ONBOARDING_PAGES.get(*step),
            _ => None,
        }
    }

    fn replace(&mut self, route: Route) {
        tracing::debug!(from = %self.current().name(), to = %route.name(), "replace");
        self.stack.clear();
        self.stack.push(route);
    }

    #[tracing::instrument(skip(self))]
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        match self.current() {
            Route::Loader { deadline } if now >= *deadline => {
                self.replace(Route::Onboarding { step: 0 });
                true
            }
            _ => false,
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn advance_onboarding(&mut self) -> Result<(), Error> {
        match self.current() {
            Route::Onboarding { step } if step + 1 < ONBOARDING_PAGES.len() => {
                let step = step + 1;
                self.replace(Route::Onboarding { step });
                Ok(())
            }
            Route::Onboarding { step: _ } => {
                self.replace(Route::Tabs { tab: Tab::default() });
                Ok(())
            }
            _ => Err(invalid_invocation_error()),
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn select_tab(&mut self, tab: Tab) -> Result<(), Error> {
        match self.stack.last_mut() {
            Some(Route::Tabs { tab: current }) => {
                *current = tab;
                Ok(())
            }
            _ => Err(invalid_invocation_error()),
        }
    }

    /// Pushes the details screen. The payload must be an exact catalog entry
    /// at the time of navigation.
    #[tracing::instrument(skip(self, place), fields(title = %place.title))]
    pub fn open_place_details(&mut self, place: Place) -> Result<(), Error> {
        match self.current() {
            Route::Tabs { tab: _ } | Route::PlaceDetails { place: _ } => {}
            _ => return Err(invalid_invocation_error()),
        }

        if !self.catalog.contains(&place) {
            return Err(invalid_input_error());
        }

        self.stack.push(Route::PlaceDetails { place });
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub fn go_back(&mut self) -> Result<(), Error> {
        match self.current() {
            Route::PlaceDetails { place: _ } => {
                self.stack.pop();
                Ok(())
            }
            _ => Err(invalid_invocation_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> (Navigator, DateTime<Utc>) {
        let now = Utc::now();
        (
            Navigator::new(Catalog::calgary(), Duration::milliseconds(6000), now),
            now,
        )
    }

    fn into_tabs(navigator: &mut Navigator, now: DateTime<Utc>) {
        navigator.tick(now + Duration::seconds(6));
        for _ in 0..ONBOARDING_PAGES.len() {
            navigator.advance_onboarding().unwrap();
        }
    }

    #[test]
    fn loader_waits_for_its_deadline() {
        let (mut navigator, now) = started();

        assert!(!navigator.tick(now + Duration::milliseconds(5999)));
        assert_eq!(navigator.current().name(), "Loader");

        assert!(navigator.tick(now + Duration::milliseconds(6000)));
        assert_eq!(navigator.current(), &Route::Onboarding { step: 0 });
        assert_eq!(navigator.depth(), 1);
    }

    #[test]
    fn onboarding_walks_three_pages_then_tabs() {
        let (mut navigator, now) = started();
        navigator.tick(now + Duration::seconds(7));

        let ctas: Vec<&str> = (0..3)
            .map(|_| {
                let cta = navigator.onboarding_page().unwrap().cta;
                navigator.advance_onboarding().unwrap();
                cta
            })
            .collect();

        assert_eq!(ctas, vec!["Go", "Next", "Start"]);
        assert_eq!(
            navigator.current(),
            &Route::Tabs {
                tab: Tab::Recommended
            }
        );
        assert!(navigator.advance_onboarding().is_err());
    }

    #[test]
    fn details_push_and_pop() {
        let (mut navigator, now) = started();
        into_tabs(&mut navigator, now);
        navigator.select_tab(Tab::Map).unwrap();

        let tower = Catalog::calgary().find("Calgary Tower").unwrap().clone();
        navigator.open_place_details(tower.clone()).unwrap();
        assert_eq!(navigator.current(), &Route::PlaceDetails { place: tower });
        assert!(navigator.select_tab(Tab::Saved).is_err());

        navigator.go_back().unwrap();
        assert_eq!(navigator.current(), &Route::Tabs { tab: Tab::Map });
        assert!(navigator.go_back().is_err());
    }

    #[test]
    fn details_reject_places_outside_the_catalog() {
        let (mut navigator, now) = started();
        into_tabs(&mut navigator, now);

        let mut stale = Catalog::calgary().find("Bowness Park").unwrap().clone();
        stale.description = "renamed".into();

        assert_eq!(navigator.open_place_details(stale).unwrap_err().code, 101);
    }

    #[test]
    fn details_unreachable_before_tabs() {
        let (mut navigator, _) = started();
        let tower = Catalog::calgary().find("Calgary Tower").unwrap().clone();

        assert_eq!(navigator.open_place_details(tower).unwrap_err().code, 100);
    }
}
