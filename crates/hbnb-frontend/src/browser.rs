//! Browser implementations of the controllers' session and host seams.

use hbnb::host::{Destination, Host, PLACE_ID_PARAM};
use hbnb::id::PlaceId;
use hbnb::log::warn;
use hbnb::session::{CookieJar, Session};
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, UrlSearchParams};
use yew_router::prelude::Navigator;

use crate::routes::Route;

/// The page's `document.cookie`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DocumentCookieJar;

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()
}

impl CookieJar for DocumentCookieJar {
    fn cookies(&self) -> String {
        html_document()
            .and_then(|document| document.cookie().ok())
            .unwrap_or_default()
    }

    fn write(&self, cookie: &str) {
        let Some(document) = html_document() else {
            warn!("no document to write the cookie to");
            return;
        };
        if let Err(err) = document.set_cookie(cookie) {
            warn!(?err, "failed to write cookie");
        }
    }
}

pub type BrowserSession = Session<DocumentCookieJar>;

pub fn session() -> BrowserSession {
    Session::new(DocumentCookieJar)
}

/// Alerts through `window.alert`. Navigates through the router when the page
/// runs as a single-page app, otherwise loads the destination's HTML document.
#[derive(Clone)]
pub struct BrowserHost {
    navigator: Option<Navigator>,
}

impl BrowserHost {
    pub fn new(navigator: Option<Navigator>) -> Self {
        Self { navigator }
    }
}

impl Host for BrowserHost {
    fn navigate(&self, to: Destination) {
        let Some(navigator) = &self.navigator else {
            set_href(&to.document_href());
            return;
        };

        let route = Route::from(&to);
        match to.place_id() {
            Some(place_id) => {
                let query = [(PLACE_ID_PARAM, place_id.as_str())];
                if let Err(err) = navigator.push_with_query(&route, &query) {
                    warn!(?err, "router navigation failed, falling back to location");
                    set_href(&to.route_href());
                }
            }
            None => navigator.push(&route),
        }
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                warn!(alert = message, "alert was blocked");
            }
        }
    }
}

fn set_href(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().set_href(url) {
        warn!(?err, url, "failed to navigate");
    }
}

/// The current `location.search`.
pub fn window_search() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

/// Reads the place id from a query string such as `?id=42`.
pub fn place_id_from_search(search: &str) -> Option<PlaceId> {
    UrlSearchParams::new_with_str(search)
        .ok()?
        .get(PLACE_ID_PARAM)
        .filter(|id| !id.is_empty())
        .map(PlaceId::from)
}
