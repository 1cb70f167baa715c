use hbnb::api::HttpApiClient;
use hbnb::config::ApiConfig;
use hbnb::places::PlacesApi;

/// The API client every page talks through.
pub type Api = PlacesApi<HttpApiClient>;

/// Create a new instance of the API client for the configured base URL.
pub fn create() -> Api {
    PlacesApi::from_config(&ApiConfig::from_env())
}
