//! In-memory stand-ins for the browser and the API.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;

use crate::api::{ApiClient, ApiError, ApiResult, HttpMethod, check_status};
use crate::data::Place;
use crate::host::{Destination, Host};
use crate::session::{CookieJar, get_cookie};

pub fn place(id: &str, name: &str, location: &str) -> Place {
    Place {
        id: id.into(),
        name: name.to_string(),
        description: format!("{name} description"),
        location: location.to_string(),
        image: format!("{id}.jpg"),
        images: Vec::new(),
    }
}

/// Cookie jar with `document.cookie` write semantics: a write replaces the
/// cookie of the same name, `max-age=0` removes it.
#[derive(Clone, Default)]
pub struct MemoryCookieJar {
    cookies: Rc<RefCell<Vec<(String, String)>>>,
    writes: Rc<RefCell<Vec<String>>>,
}

impl MemoryCookieJar {
    pub fn with_cookies(cookies: &str) -> Self {
        let jar = Self::default();
        for segment in cookies.split(';') {
            if let Some((name, value)) = segment.trim().split_once('=') {
                jar.cookies
                    .borrow_mut()
                    .push((name.to_string(), value.to_string()));
            }
        }
        jar
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    pub fn get(&self, name: &str) -> Option<String> {
        get_cookie(&self.cookies(), name)
    }
}

impl CookieJar for MemoryCookieJar {
    fn cookies(&self) -> String {
        self.cookies
            .borrow()
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write(&self, cookie: &str) {
        self.writes.borrow_mut().push(cookie.to_string());

        let mut parts = cookie.split(';').map(str::trim);
        let Some((name, value)) = parts.next().and_then(|pair| pair.split_once('=')) else {
            return;
        };
        let expired = parts.any(|attr| attr.eq_ignore_ascii_case("max-age=0"));

        let mut cookies = self.cookies.borrow_mut();
        cookies.retain(|(existing, _)| existing != name);
        if !expired {
            cookies.push((name.to_string(), value.to_string()));
        }
    }
}

#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(u16, &'static str),
    Offline,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: HttpMethod,
    pub endpoint: String,
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

/// API client answering from a fixed script and recording every request.
#[derive(Clone, Default)]
pub struct ScriptedApi {
    replies: Rc<RefCell<HashMap<(HttpMethod, String), Reply>>>,
    calls: Rc<RefCell<Vec<Call>>>,
    bearer: Option<String>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, method: HttpMethod, endpoint: &str, reply: Reply) -> Self {
        self.replies
            .borrow_mut()
            .insert((method, endpoint.to_string()), reply);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn answer(&self, method: HttpMethod, endpoint: &str, body: Option<Value>) -> ApiResult<Value> {
        self.calls.borrow_mut().push(Call {
            method,
            endpoint: endpoint.to_string(),
            bearer: self.bearer.clone(),
            body,
        });

        let reply = self
            .replies
            .borrow()
            .get(&(method, endpoint.to_string()))
            .cloned()
            .unwrap_or_else(|| panic!("unscripted request: {method:?} {endpoint}"));

        match reply {
            Reply::Json(value) => Ok(value),
            Reply::Status(status, text) => check_status(status, text).map(|_| Value::Null),
            Reply::Offline => Err(ApiError::NetworkError(gloo_net::Error::GlooError(
                "Failed to fetch".to_string(),
            ))),
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> ApiResult<T> {
    serde_json::from_value(value).map_err(|e| ApiError::ParseError(gloo_net::Error::SerdeError(e)))
}

fn encode<B: serde::Serialize>(body: &B) -> Value {
    serde_json::to_value(body).expect("request body serializes")
}

#[async_trait::async_trait(?Send)]
impl ApiClient for ScriptedApi {
    fn with_bearer_token(&self, token: &str) -> Self {
        let mut client = self.clone();
        client.bearer = Some(token.to_string());
        client
    }

    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        decode(self.answer(HttpMethod::Get, endpoint, None)?)
    }

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        decode(self.answer(HttpMethod::Post, endpoint, Some(encode(body)))?)
    }

    async fn post_discarding<B>(&self, endpoint: &str, body: &B) -> ApiResult<()>
    where
        B: serde::Serialize,
    {
        self.answer(HttpMethod::Post, endpoint, Some(encode(body)))
            .map(|_| ())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Navigate(Destination),
    Alert(String),
}

#[derive(Clone, Default)]
pub struct RecordingHost {
    events: Rc<RefCell<Vec<HostEvent>>>,
}

impl RecordingHost {
    pub fn events(&self) -> Vec<HostEvent> {
        self.events.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                HostEvent::Alert(message) => Some(message),
                HostEvent::Navigate(_) => None,
            })
            .collect()
    }

    pub fn navigations(&self) -> Vec<Destination> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                HostEvent::Navigate(to) => Some(to),
                HostEvent::Alert(_) => None,
            })
            .collect()
    }
}

impl Host for RecordingHost {
    fn navigate(&self, to: Destination) {
        self.events.borrow_mut().push(HostEvent::Navigate(to));
    }

    fn alert(&self, message: &str) {
        self.events
            .borrow_mut()
            .push(HostEvent::Alert(message.to_string()));
    }
}
