//! Render-ready shapes of API payloads.
//!
//! Components rebuild their whole fragment from these on every payload, no
//! incremental patching of earlier output.

use crate::data::Place;
use crate::filter::CountryFilter;
use crate::host::Destination;
use crate::id::PlaceId;

/// One entry of the `places-list` container.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceCard {
    pub id: PlaceId,
    pub name: String,
    pub description: String,
    pub location: String,
    pub image: String,
    pub visible: bool,
}

impl PlaceCard {
    /// Where the card's details button leads.
    pub fn details(&self) -> Destination {
        Destination::PlaceDetails(self.id.clone())
    }
}

impl From<&Place> for PlaceCard {
    fn from(place: &Place) -> Self {
        Self {
            id: place.id.clone(),
            name: place.name.clone(),
            description: place.description.clone(),
            location: place.location.clone(),
            image: place.image.clone(),
            visible: true,
        }
    }
}

/// One card per place. Cards the filter rejects stay in the list but are
/// marked hidden, so changing the filter never needs the places again.
pub fn place_cards(places: &[Place], filter: &CountryFilter) -> Vec<PlaceCard> {
    places
        .iter()
        .map(|place| {
            let mut card = PlaceCard::from(place);
            card.visible = filter.matches(&card.location);
            card
        })
        .collect()
}

/// The single card of the `place-details` container.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDetailsCard {
    pub id: PlaceId,
    pub name: String,
    pub description: String,
    pub location: String,
    pub images: Vec<String>,
}

impl PlaceDetailsCard {
    pub fn add_review(&self) -> Destination {
        Destination::AddReview(self.id.clone())
    }
}

impl From<&Place> for PlaceDetailsCard {
    fn from(place: &Place) -> Self {
        Self {
            id: place.id.clone(),
            name: place.name.clone(),
            description: place.description.clone(),
            location: place.location.clone(),
            images: place.images.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::place;

    fn sample() -> Vec<Place> {
        vec![
            place("1", "Loft", "Paris, France"),
            place("2", "Cabin", "Banff, Canada"),
            place("3", "Villa", "Nice, France"),
        ]
    }

    #[test]
    fn test_one_card_per_place() {
        let places = sample();
        let cards = place_cards(&places, &CountryFilter::All);

        assert_eq!(cards.len(), places.len());
        for (card, place) in cards.iter().zip(&places) {
            assert_eq!(card.name, place.name);
            assert_eq!(card.location, place.location);
            assert!(card.visible);
        }
    }

    #[test]
    fn test_unknown_country_hides_every_card() {
        let cards = place_cards(&sample(), &CountryFilter::from_value("Japan"));
        assert_eq!(cards.len(), 3);
        assert!(cards.iter().all(|card| !card.visible));
    }

    #[test]
    fn test_country_filter_hides_others() {
        let cards = place_cards(&sample(), &CountryFilter::from_value("France"));
        let visible: Vec<_> = cards
            .iter()
            .filter(|card| card.visible)
            .map(|card| card.name.as_str())
            .collect();
        assert_eq!(visible, vec!["Loft", "Villa"]);
    }

    #[test]
    fn test_details_button_targets_place() {
        let card = PlaceCard::from(&place("42", "Loft", "Paris, France"));
        assert_eq!(card.details(), Destination::PlaceDetails("42".into()));
    }

    #[test]
    fn test_details_card_keeps_every_image() {
        let mut loft = place("1", "Loft", "Paris, France");
        loft.images = vec!["a.jpg".to_string(), "b.jpg".to_string()];

        let card = PlaceDetailsCard::from(&loft);
        assert_eq!(card.images, vec!["a.jpg", "b.jpg"]);
        assert_eq!(card.add_review(), Destination::AddReview("1".into()));
    }
}
