use crate::api::{ApiClient, ApiError};
use crate::data::Place;
use crate::host::Host;
use crate::log::{debug, info};
use crate::page::PageController;
use crate::places::PlacesApi;
use crate::session::{CookieJar, Session};

use super::report;

/// What the `places-list` page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexView {
    /// No session: the login link is shown and no places are listed.
    Anonymous,
    /// Logged in: the login link is hidden and these places are listed.
    Places(Vec<Place>),
}

impl IndexView {
    pub fn shows_login_link(&self) -> bool {
        matches!(self, IndexView::Anonymous)
    }

    /// The country filter only makes sense next to a listing.
    pub fn shows_filter(&self) -> bool {
        !self.shows_login_link()
    }

    pub fn places(&self) -> &[Place] {
        match self {
            IndexView::Anonymous => &[],
            IndexView::Places(places) => places,
        }
    }
}

/// Drives the `places-list` page.
pub struct IndexController<C, J, H> {
    api: PlacesApi<C>,
    session: Session<J>,
    host: H,
}

impl<C, J, H> IndexController<C, J, H>
where
    C: ApiClient,
    J: CookieJar,
    H: Host,
{
    pub fn new(api: PlacesApi<C>, session: Session<J>, host: H) -> Self {
        Self { api, session, host }
    }
}

#[async_trait::async_trait(?Send)]
impl<C, J, H> PageController for IndexController<C, J, H>
where
    C: ApiClient,
    J: CookieJar,
    H: Host,
{
    type View = IndexView;

    async fn activate(&self) -> IndexView {
        let Some(token) = self.session.token() else {
            debug!("no session, showing login link");
            return IndexView::Anonymous;
        };

        match self.api.fetch_places(&token).await {
            Ok(places) => {
                info!(count = places.len(), "places loaded");
                IndexView::Places(places)
            }
            Err(err @ ApiError::Unauthorized(_)) => {
                self.session.clear();
                report(&self.host, "Session expired", &err);
                IndexView::Anonymous
            }
            Err(err) => {
                report(&self.host, "Failed to load places", &err);
                IndexView::Places(Vec::new())
            }
        }
    }
}
