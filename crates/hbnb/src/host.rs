//! What controllers need from the page hosting them.

use crate::id::PlaceId;

/// Name of the query parameter carrying a place id.
pub const PLACE_ID_PARAM: &str = "id";

/// Pages a controller can send the user to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Index,
    Login,
    PlaceDetails(PlaceId),
    AddReview(PlaceId),
}

impl Destination {
    /// Route of the destination in the single-page app.
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Index => "/",
            Destination::Login => "/login",
            Destination::PlaceDetails(_) => "/place",
            Destination::AddReview(_) => "/add_review",
        }
    }

    /// Document serving the destination when every page is its own HTML file.
    pub fn document(&self) -> &'static str {
        match self {
            Destination::Index => "index.html",
            Destination::Login => "login.html",
            Destination::PlaceDetails(_) => "place.html",
            Destination::AddReview(_) => "add_review.html",
        }
    }

    /// `path()` plus the place id query, e.g. `/place?id=42`.
    pub fn route_href(&self) -> String {
        self.with_place_query(self.path())
    }

    /// `document()` plus the place id query, e.g. `place.html?id=42`.
    pub fn document_href(&self) -> String {
        self.with_place_query(self.document())
    }

    fn with_place_query(&self, base: &str) -> String {
        match self.place_id() {
            Some(place_id) => format!("{base}?{PLACE_ID_PARAM}={}", place_id.url_encoded()),
            None => base.to_string(),
        }
    }

    /// The place carried in the `id` query parameter, if any.
    pub fn place_id(&self) -> Option<&PlaceId> {
        match self {
            Destination::PlaceDetails(id) | Destination::AddReview(id) => Some(id),
            Destination::Index | Destination::Login => None,
        }
    }
}

/// Browser side effects: page navigation and blocking alerts.
pub trait Host {
    fn navigate(&self, to: Destination);
    fn alert(&self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_paths() {
        let id = PlaceId::from("p-1");
        assert_eq!(Destination::Index.path(), "/");
        assert_eq!(Destination::Login.path(), "/login");
        assert_eq!(Destination::PlaceDetails(id.clone()).path(), "/place");
        assert_eq!(Destination::AddReview(id.clone()).path(), "/add_review");
        assert_eq!(Destination::AddReview(id.clone()).place_id(), Some(&id));
        assert_eq!(Destination::Index.place_id(), None);
    }

    #[test]
    fn test_hrefs_carry_place_id_query() {
        let id = PlaceId::from("42");
        assert_eq!(Destination::PlaceDetails(id.clone()).route_href(), "/place?id=42");
        assert_eq!(Destination::AddReview(id.clone()).route_href(), "/add_review?id=42");
        assert_eq!(Destination::Login.route_href(), "/login");

        assert_eq!(Destination::Index.document_href(), "index.html");
        assert_eq!(Destination::Login.document_href(), "login.html");
        assert_eq!(Destination::PlaceDetails(id.clone()).document_href(), "place.html?id=42");
        assert_eq!(Destination::AddReview(id).document_href(), "add_review.html?id=42");
    }

    #[test]
    fn test_hrefs_encode_place_id() {
        let id = PlaceId::from("a b&c=d");
        assert_eq!(
            Destination::PlaceDetails(id).document_href(),
            "place.html?id=a%20b%26c%3Dd"
        );
    }
}
