use rand::seq::SliceRandom;

use crate::entities::{Category, Place};

#[derive(Clone, Debug)]
pub struct Catalog {
    places: Vec<Place>,
}

impl Catalog {
    pub fn new(places: Vec<Place>) -> Self {
        Self { places }
    }

    pub fn calgary() -> Self {
        Self::new(vec![
            Place::new(
                "Prince’s Island Park",
                "📍 51.0533, -114.0713",
                "nature_princes_island.png",
                "A green island on the Bow River right in downtown Calgary, linked to the city by several pedestrian bridges. You'll find walking paths, bike trails, ponds and picnic areas. In summer it becomes a stage for festivals like the Calgary Folk Music Festival; in winter it turns into a calm, snow-covered oasis perfect for a quiet stroll.",
                Category::Nature,
            ),
            Place::new(
                "Nose Hill Park",
                "📍 51.1061, -114.1110",
                "nature_nose_hill.png",
                "One of North America’s largest urban parks (over 11 km²). A natural prairie landscape with meadows and native flora and fauna. Hikes reward you with panoramic views of downtown and the far-off Rockies. Deer, coyotes and birds of prey are often spotted. Ideal for hiking and experiencing wilderness inside the city.",
                Category::Nature,
            ),
            Place::new(
                "Bowness Park",
                "📍 51.0837, -114.2158",
                "nature_bowness.png",
                "A historic family park with more than a century of memories. In summer you can rent pedal boats, canoes and enjoy the large lagoon; in winter it hosts one of the city’s most beloved outdoor skating areas. Picnic sites, BBQs, playgrounds and riverfront paths make it a local favorite year-round.",
                Category::Nature,
            ),
            Place::new(
                "Heritage Park Historical Village",
                "📍 50.9936, -114.1082",
                "culture_heritage_park.png",
                "Canada’s largest living-history museum recreating life in Western Canada from the 1860s to the mid-1900s. Stroll through historic streets, ride a working steam train, visit old-time shops and interact with costumed interpreters. It’s full immersion into the region’s past and a must-see for first-time visitors.",
                Category::Culture,
            ),
            Place::new(
                "Studio Bell – National Music Centre",
                "📍 51.0455, -114.0504",
                "culture_studio_bell.png",
                "A striking contemporary complex dedicated to music in Canada and beyond. Inside you’ll find interactive galleries, recording studios, rare instruments and performance spaces. Learn about Canadian music legends and even try playing selected instruments yourself. A hit for music lovers and families.",
                Category::Culture,
            ),
            Place::new(
                "Glenbow Museum",
                "📍 51.0446, -114.0633",
                "culture_glenbow.png",
                "One of Western Canada’s largest museums, home to more than a million artifacts. Collections span Canadian and European art, Indigenous cultures, archival documents and historic objects. After a major renovation, Glenbow has reopened as a modern venue for exhibitions, talks and cultural events.",
                Category::Culture,
            ),
            Place::new(
                "Calgary Tower",
                "📍 51.0449, -114.0631",
                "ent_tower.png",
                "A signature 191-metre observation tower with a glass-floor experience and sweeping views of the skyline, Bow River and distant Rockies. At night the tower glows with colourful lighting. It’s an essential stop for first-timers and a great photo spot.",
                Category::Entertainment,
            ),
            Place::new(
                "Scotiabank Saddledome",
                "📍 51.0374, -114.0519",
                "ent_saddledome.png",
                "An Olympic-era arena famous for its saddle-shaped roof. Today it hosts Calgary Flames hockey games, arena concerts and major shows. Whether you’re here for sports or live music, the venue is a city icon.",
                Category::Entertainment,
            ),
            Place::new(
                "Calgary Stampede Grounds",
                "📍 51.0370, -114.0528",
                "ent_stampede.png",
                "The home of the legendary Calgary Stampede: the world’s biggest rodeo and a 10-day city-wide celebration every July with shows, chuckwagon races, concerts and fairs. Outside the festival, the grounds host trade shows and entertainment events year-round.",
                Category::Entertainment,
            ),
        ])
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn by_category(&self, category: Category) -> Vec<Place> {
        filter_by_category(&self.places, category)
    }

    pub fn find(&self, title: &str) -> Option<&Place> {
        self.places.iter().find(|place| place.title == title)
    }

    pub fn contains(&self, place: &Place) -> bool {
        self.find(&place.title).map_or(false, |entry| entry == place)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::calgary()
    }
}

pub fn filter_by_category(places: &[Place], category: Category) -> Vec<Place> {
    places
        .iter()
        .filter(|place| place.category == category)
        .cloned()
        .collect()
}

pub const PROMO_MESSAGE: &str = "Discover Calgary Eagle Guide — your personal city guide. Explore by category, save favorites, and use the interactive map. (App link here)";

pub const FACTS: [&str; 50] = [
    "Calgary is known as “Cowtown” for its cowboy heritage.",
    "It is home to the Calgary Stampede, a world-class rodeo festival.",
    "The city has over 333 days of sunshine a year.",
    "The Calgary Tower is a landmark with an observation deck.",
    "The Bow River divides the city in two.",
    "Calgary is the gateway to the Rocky Mountains.",
    "It is home to Heritage Park, Canada’s largest open-air historical museum.",
    "The city is home to over 30 museums.",
    "Calgary hosted the 1988 Winter Olympics.",
    "The city has over 5,000 restaurants.",
    "Calgary is one of the largest cities in Canada by area.",
    "The city has over 8,000 hectares of parks.",
    "Prince’s Island Park is located right in the city center.",
    "Calgary has a modern C-Train light rail system.",
    "It is home to the Calgary Zoo with over 1,000 species of animals.",
    "The city is named after a village in Scotland.",
    "Calgary is one of the largest centers of the oil industry in Canada.",
    "The local NHL hockey club is the Calgary Flames.",
    "Calgary is one of the most multicultural cities in Canada.",
    "In winter, temperatures can drop below −30 °C.",
    "Calgary is famous for the Chinook — a warm wind that can rapidly raise temperatures.",
    "Stephen Avenue Walk is the main pedestrian street with cafés and shops.",
    "The city has over 100 art galleries.",
    "The Calgary Folk Music Festival takes place here.",
    "Downtown features the unique Peace Bridge by Santiago Calatrava.",
    "Calgary has Canada’s largest system of pedestrian skywalks — the +15.",
    "The city sits at an elevation of over 1,000 m above sea level.",
    "Calgary ranks among the world’s cities with the highest standard of living.",
    "The city grew rapidly during the 20th-century oil boom.",
    "Many films and TV series are shot in Calgary, including “The Last of Us”.",
    "The city has over 20 theatres.",
    "Studio Bell is Canada’s National Music Centre.",
    "Calgary is served by YYC Calgary International Airport.",
    "Over 1.6 million people live in the Calgary metropolitan area.",
    "City parks contain more than 200,000 trees.",
    "Calgary is a major winter sports hub.",
    "The city often hosts international business forums.",
    "Calgary is famous for its steakhouse cuisine.",
    "Numerous street-food festivals are held throughout the year.",
    "Calgary has its own professional soccer team, Cavalry FC.",
    "There are 1,000+ km of cycling paths and routes.",
    "Calgary has a large Chinese community and its own Chinatown.",
    "It is home to the University of Calgary.",
    "The skyline features many modern skyscrapers, including The Bow Tower.",
    "Calgary is known for its cleanliness and green spaces.",
    "Fort Calgary marks the historic site of the city’s founding.",
    "Winter in Calgary is often windy.",
    "Local farmers’ markets are very popular.",
    "Calgary is frequently called the “energy capital of Canada”.",
    "It is one of the fastest-growing cities in Canada.",
];

pub fn random_fact() -> &'static str {
    FACTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(FACTS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn titles_are_unique() {
        let catalog = Catalog::calgary();
        let titles: HashSet<_> = catalog.places().iter().map(|p| p.title.clone()).collect();
        assert_eq!(titles.len(), catalog.places().len());
    }

    #[test]
    fn three_places_per_category() {
        let catalog = Catalog::calgary();
        for category in Category::ALL {
            let places = catalog.by_category(category);
            assert_eq!(places.len(), 3);
            assert!(places.iter().all(|p| p.category == category));
        }
    }

    #[test]
    fn every_entry_has_coordinates() {
        for place in Catalog::calgary().places() {
            assert!(place.coordinates().is_ok(), "{}", place.title);
        }
    }

    #[test]
    fn contains_requires_exact_entry() {
        let catalog = Catalog::calgary();
        let mut tower = catalog.find("Calgary Tower").unwrap().clone();
        assert!(catalog.contains(&tower));

        tower.coords = "📍 0, 0".into();
        assert!(!catalog.contains(&tower));
    }

    #[test]
    fn random_fact_comes_from_the_list() {
        let fact = random_fact();
        assert!(FACTS.contains(&fact));
    }
}
