use gloo_net::http::{Request, RequestBuilder, Response};
use std::collections::HashMap;

use crate::log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Request failed with status {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("Network error: {0}")]
    NetworkError(gloo_net::Error),
    #[error("Parse error: {0}")]
    ParseError(gloo_net::Error),
    #[error("Serialize error: {0}")]
    SerializeError(gloo_net::Error),
}

impl ApiError {
    /// Transport failures never reached the API or could not be understood.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ApiError::NetworkError(_) | ApiError::ParseError(_) | ApiError::SerializeError(_)
        )
    }

    /// The text shown to the user in an alert.
    ///
    /// Application failures surface the HTTP status text, transport failures
    /// a generic message (the details go to the log).
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized(text) if !text.is_empty() => text.clone(),
            ApiError::Unauthorized(_) => "Unauthorized".to_string(),
            ApiError::Status {
                status,
                status_text,
            } => {
                if status_text.is_empty() {
                    format!("HTTP {status}")
                } else {
                    status_text.clone()
                }
            }
            ApiError::NetworkError(_) | ApiError::ParseError(_) | ApiError::SerializeError(_) => {
                "Unable to reach the server, please try again later".to_string()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiHeaders(HashMap<String, String>);

impl ApiHeaders {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn insert(&mut self, key: String, value: String) {
        self.0.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl From<ApiHeaders> for gloo_net::http::Headers {
    fn from(val: ApiHeaders) -> Self {
        let headers = gloo_net::http::Headers::new();
        for (key, value) in val.0 {
            headers.set(&key, &value);
        }
        headers
    }
}

/// Only a 2xx status counts as success. `401` is kept apart so callers can
/// expire their session.
pub fn check_status(status: u16, status_text: &str) -> ApiResult<()> {
    match status {
        200..=299 => Ok(()),
        401 => Err(ApiError::Unauthorized(status_text.to_string())),
        status => Err(ApiError::Status {
            status,
            status_text: status_text.to_string(),
        }),
    }
}

fn handle_response_status(response: Response) -> ApiResult<Response> {
    check_status(response.status(), &response.status_text())?;
    Ok(response)
}

async fn parse_json_response<T>(response: Response) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    response.json::<T>().await.map_err(ApiError::ParseError)
}

async fn handle_json_response<T>(response: Response) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let validated_response = handle_response_status(response)?;
    parse_json_response(validated_response).await
}

#[async_trait::async_trait(?Send)]
pub trait ApiClient: Clone {
    /// A copy of this client that sends `Authorization: Bearer <token>`.
    fn with_bearer_token(&self, token: &str) -> Self;

    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned;

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize;

    /// POST for endpoints whose success payload carries nothing the client uses.
    async fn post_discarding<B>(&self, endpoint: &str, body: &B) -> ApiResult<()>
    where
        B: serde::Serialize;
}

#[derive(Clone, Debug)]
pub struct HttpApiClient {
    root_url: String,
    headers: ApiHeaders,
}

impl HttpApiClient {
    pub fn new(root_url: impl Into<String>) -> Self {
        Self {
            root_url: root_url.into(),
            headers: ApiHeaders::new(),
        }
    }

    pub fn set_header(&mut self, key: String, value: String) {
        self.headers.insert(key, value);
    }

    pub fn headers(&self) -> &ApiHeaders {
        &self.headers
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.root_url, endpoint)
    }

    fn request(&self, method: HttpMethod, endpoint: &str) -> RequestBuilder {
        let url = self.url(endpoint);
        debug!(?method, %url, "sending request");

        let request = match method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
        };
        request.headers(self.headers.clone().into())
    }

    pub async fn make_request(&self, method: HttpMethod, endpoint: &str) -> ApiResult<Response> {
        self.request(method, endpoint)
            .send()
            .await
            .map_err(ApiError::NetworkError)
    }

    pub async fn make_request_with_body<B>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<Response>
    where
        B: serde::Serialize,
    {
        self.request(method, endpoint)
            .json(body)
            .map_err(ApiError::SerializeError)?
            .send()
            .await
            .map_err(ApiError::NetworkError)
    }
}

#[async_trait::async_trait(?Send)]
impl ApiClient for HttpApiClient {
    fn with_bearer_token(&self, token: &str) -> Self {
        let mut client = self.clone();
        client.set_header("Authorization".to_string(), format!("Bearer {token}"));
        client
    }

    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.make_request(HttpMethod::Get, endpoint).await?;
        handle_json_response(response).await
    }

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let response = self
            .make_request_with_body(HttpMethod::Post, endpoint, body)
            .await?;
        handle_json_response(response).await
    }

    async fn post_discarding<B>(&self, endpoint: &str, body: &B) -> ApiResult<()>
    where
        B: serde::Serialize,
    {
        let response = self
            .make_request_with_body(HttpMethod::Post, endpoint, body)
            .await?;
        handle_response_status(response).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status_accepts_2xx_only() {
        assert!(check_status(200, "OK").is_ok());
        assert!(check_status(201, "Created").is_ok());
        assert!(check_status(204, "").is_ok());

        match check_status(404, "NOT FOUND") {
            Err(ApiError::Status {
                status,
                status_text,
            }) => {
                assert_eq!(status, 404);
                assert_eq!(status_text, "NOT FOUND");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            check_status(302, "Found"),
            Err(ApiError::Status { status: 302, .. })
        ));
    }

    #[test]
    fn test_check_status_separates_unauthorized() {
        assert!(matches!(
            check_status(401, "UNAUTHORIZED"),
            Err(ApiError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_user_message_surfaces_status_text() {
        let err = ApiError::Status {
            status: 400,
            status_text: "BAD REQUEST".to_string(),
        };
        assert_eq!(err.user_message(), "BAD REQUEST");
        assert!(!err.is_transport());

        let err = ApiError::Status {
            status: 500,
            status_text: String::new(),
        };
        assert_eq!(err.user_message(), "HTTP 500");
    }

    #[test]
    fn test_user_message_is_generic_for_transport_failures() {
        let err = ApiError::NetworkError(gloo_net::Error::GlooError("connection refused".into()));
        assert!(err.is_transport());
        assert!(!err.user_message().contains("connection refused"));
    }

    #[test]
    fn test_bearer_token_does_not_touch_original_client() {
        let client = HttpApiClient::new("http://api.test/v1");
        let authed = client.with_bearer_token("T");

        assert_eq!(authed.headers().get("Authorization"), Some("Bearer T"));
        assert_eq!(client.headers().get("Authorization"), None);
        assert_eq!(authed.url("/places"), "http://api.test/v1/places");
    }
}
