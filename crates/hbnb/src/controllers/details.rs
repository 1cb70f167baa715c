use crate::api::{ApiClient, ApiError};
use crate::data::Place;
use crate::host::Host;
use crate::id::PlaceId;
use crate::log::{debug, info};
use crate::page::PageController;
use crate::places::PlacesApi;
use crate::session::{CookieJar, Session};

use super::report;

/// What the `place-details` page shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailsView {
    /// Whether the `add-review` section is visible.
    pub can_review: bool,
    pub place: Option<Place>,
}

/// Drives the `place-details` page for the place named in the URL.
pub struct DetailsController<C, J, H> {
    api: PlacesApi<C>,
    session: Session<J>,
    host: H,
    place_id: Option<PlaceId>,
}

impl<C, J, H> DetailsController<C, J, H>
where
    C: ApiClient,
    J: CookieJar,
    H: Host,
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
impl<C, J, H> PageController for DetailsController<C, J, H>
where
    C: ApiClient,
    J: CookieJar,
    H: Host,
{
    type View = DetailsView;

    async fn activate(&self) -> DetailsView {
        let Some(token) = self.session.token() else {
            debug!("no session, review section hidden");
            return DetailsView::default();
        };
        let Some(place_id) = &self.place_id else {
            self.host.alert("No place selected");
            return DetailsView {
                can_review: true,
                place: None,
            };
        };

        match self.api.fetch_place_details(&token, place_id).await {
            Ok(place) => {
                info!(%place_id, "place details loaded");
                DetailsView {
                    can_review: true,
                    place: Some(place),
                }
            }
            Err(err @ ApiError::Unauthorized(_)) => {
                self.session.clear();
                report(&self.host, "Session expired", &err);
                DetailsView::default()
            }
            Err(err) => {
                report(&self.host, "Failed to load place details", &err);
                DetailsView {
                    can_review: true,
                    place: None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpMethod;
    use crate::testing::{MemoryCookieJar, RecordingHost, Reply, ScriptedApi};
    use futures::executor::block_on;
    use serde_json::json;

    fn controller(
        api: &ScriptedApi,
        cookies: &str,
        place_id: Option<&str>,
    ) -> (
        DetailsController<ScriptedApi, MemoryCookieJar, RecordingHost>,
        MemoryCookieJar,
        RecordingHost,
    ) {
        let jar = MemoryCookieJar::with_cookies(cookies);
        let host = RecordingHost::default();
        let controller = DetailsController::new(
            PlacesApi::new(api.clone()),
            Session::new(jar.clone()),
            host.clone(),
            place_id.map(PlaceId::from),
        );
        (controller, jar, host)
    }

    #[test]
    fn test_anonymous_hides_review_and_skips_fetch() {
        let api = ScriptedApi::new();
        let (controller, _, host) = controller(&api, "", Some("42"));

        let view = block_on(controller.activate());

        assert!(!view.can_review);
        assert_eq!(view.place, None);
        assert!(api.calls().is_empty());
        assert!(host.events().is_empty());
    }

    #[test]
    fn test_authenticated_fetches_place() {
        let api = ScriptedApi::new().reply(
            HttpMethod::Get,
            "/places/42",
            Reply::Json(json!({
                "id": "42",
                "name": "Loft",
                "description": "Bright",
                "location": "Paris, France",
                "images": ["a.jpg", "b.jpg", "c.jpg"]
            })),
        );
        let (controller, _, _) = controller(&api, "token=T", Some("42"));

        let view = block_on(controller.activate());

        assert!(view.can_review);
        let place = view.place.unwrap();
        assert_eq!(place.name, "Loft");
        assert_eq!(place.images.len(), 3);
        assert_eq!(api.calls().len(), 1);
    }

    #[test]
    fn test_missing_place_id_alerts_without_fetch() {
        let api = ScriptedApi::new();
        let (controller, _, host) = controller(&api, "token=T", None);

        let view = block_on(controller.activate());

        assert_eq!(view.place, None);
        assert!(api.calls().is_empty());
        assert_eq!(host.alerts(), vec!["No place selected"]);
    }

    #[test]
    fn test_not_found_alerts_status_text() {
        let api = ScriptedApi::new().reply(
            HttpMethod::Get,
            "/places/404",
            Reply::Status(404, "NOT FOUND"),
        );
        let (controller, _, host) = controller(&api, "token=T", Some("404"));

        let view = block_on(controller.activate());

        assert_eq!(view.place, None);
        assert_eq!(
            host.alerts(),
            vec!["Failed to load place details: NOT FOUND"]
        );
    }

    #[test]
    fn test_expired_token_hides_review_section() {
        let api = ScriptedApi::new().reply(
            HttpMethod::Get,
            "/places/42",
            Reply::Status(401, "UNAUTHORIZED"),
        );
        let (controller, jar, _) = controller(&api, "token=stale", Some("42"));

        let view = block_on(controller.activate());

        assert!(!view.can_review);
        assert_eq!(jar.get("token"), None);
    }
}
