use crate::api::{ApiClient, ApiError};
use crate::errors::ReviewError;
use crate::host::{Destination, Host};
use crate::id::PlaceId;
use crate::log::{debug, info, warn};
use crate::page::PageController;
use crate::places::PlacesApi;
use crate::session::{CookieJar, Session};

use super::report;

pub const REVIEW_SUBMITTED: &str = "Review submitted successfully!";

/// Drives the `review-form` page.
///
/// Activation is the only way to get a [`ReviewSubmitter`], and it refuses
/// to hand one out without a session: anonymous visitors are sent back to
/// the index page before any form is wired.
pub struct AddReviewController<C, J, H> {
    api: PlacesApi<C>,
    session: Session<J>,
    host: H,
    place_id: Option<PlaceId>,
}

impl<C, J, H> AddReviewController<C, J, H>
where
    C: ApiClient,
    J: CookieJar + Clone,
    H: Host + Clone,
{
    pub fn new(api: PlacesApi<C>, session: Session<J>, host: H, place_id: Option<PlaceId>) -> Self {
        Self {
            api,
            session,
            host,
            place_id,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl<C, J, H> PageController for AddReviewController<C, J, H>
where
    C: ApiClient,
    J: CookieJar + Clone,
    H: Host + Clone,
{
    type View = Option<ReviewSubmitter<C, J, H>>;

    async fn activate(&self) -> Self::View {
        let Some(token) = self.session.token() else {
            debug!("no session, leaving review page");
            self.host.navigate(Destination::Index);
            return None;
        };
        let Some(place_id) = self.place_id.clone() else {
            self.host.alert("No place selected");
            self.host.navigate(Destination::Index);
            return None;
        };

        Some(ReviewSubmitter {
            api: self.api.clone(),
            session: self.session.clone(),
            host: self.host.clone(),
            token,
            place_id,
        })
    }
}

/// Posts reviews for one place on behalf of a logged-in user.
#[derive(Clone)]
pub struct ReviewSubmitter<C, J, H> {
    api: PlacesApi<C>,
    session: Session<J>,
    host: H,
    token: String,
    place_id: PlaceId,
}

impl<C, J, H> ReviewSubmitter<C, J, H>
where
    C: ApiClient,
    J: CookieJar,
    H: Host,
{
    pub fn place_id(&self) -> &PlaceId {
        &self.place_id
    }

    /// Sends the review. On success the user is told and the caller should
    /// reset the form; every failure is alerted and leaves the form intact.
    pub async fn submit(&self, review_text: &str) -> Result<(), ReviewError> {
        let review_text = review_text.trim();
        if review_text.is_empty() {
            warn!("refusing to submit an empty review");
            self.host.alert(&ReviewError::EmptyText.to_string());
            return Err(ReviewError::EmptyText);
        }

        match self
            .api
            .submit_review(&self.token, &self.place_id, review_text)
            .await
        {
            Ok(()) => {
                info!(place_id = %self.place_id, "review submitted");
                self.host.alert(REVIEW_SUBMITTED);
                Ok(())
            }
            Err(err @ ApiError::Unauthorized(_)) => {
                self.session.clear();
                report(&self.host, "Session expired", &err);
                self.host.navigate(Destination::Index);
                Err(err.into())
            }
            Err(err) => {
                report(&self.host, "Failed to submit review", &err);
                Err(err.into())
            }
        }
    }
}
