use hbnb::id::PlaceId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::browser::{self, BrowserHost};

/// The host for controllers of the current page.
#[hook]
pub fn use_host() -> BrowserHost {
    BrowserHost::new(use_navigator())
}

/// The `id` query parameter of the current URL. Re-renders on route changes
/// when running under the router.
#[hook]
pub fn use_place_id() -> Option<PlaceId> {
    let search = match use_location() {
        Some(location) => location.query_str().to_string(),
        None => browser::window_search(),
    };
    browser::place_id_from_search(&search)
}
