//! The four HBnB endpoints.

use crate::api::{ApiClient, ApiResult, HttpApiClient};
use crate::config::ApiConfig;
use crate::data::{AccessToken, Credentials, NewReview, Place};
use crate::id::PlaceId;

pub const LOGIN_ENDPOINT: &str = "/login";
pub const PLACES_ENDPOINT: &str = "/places";
pub const REVIEWS_ENDPOINT: &str = "/reviews";

/// Client for the HBnB API. Stateless apart from the base URL, the token is
/// passed to every authenticated call.
#[derive(Debug, Clone)]
pub struct PlacesApi<C> {
    client: C,
}

impl PlacesApi<HttpApiClient> {
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(HttpApiClient::new(config.base_url()))
    }
}

impl<C: ApiClient> PlacesApi<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// `POST /login`, returns the access token.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<String> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        let token: AccessToken = self.client.post(LOGIN_ENDPOINT, &credentials).await?;
        Ok(token.access_token)
    }

    /// `GET /places`
    pub async fn fetch_places(&self, token: &str) -> ApiResult<Vec<Place>> {
        self.client
            .with_bearer_token(token)
            .get(PLACES_ENDPOINT)
            .await
    }

    /// `GET /places/{place_id}`
    pub async fn fetch_place_details(&self, token: &str, place_id: &PlaceId) -> ApiResult<Place> {
        let endpoint = format!("{PLACES_ENDPOINT}/{}", place_id.url_encoded());
        self.client.with_bearer_token(token).get(&endpoint).await
    }

    /// `POST /reviews`. The response body is not used.
    pub async fn submit_review(
        &self,
        token: &str,
        place_id: &PlaceId,
        review_text: &str,
    ) -> ApiResult<()> {
        let review = NewReview {
            place_id: place_id.clone(),
            review_text: review_text.to_string(),
        };
        self.client
            .with_bearer_token(token)
            .post_discarding(REVIEWS_ENDPOINT, &review)
            .await
    }
}
