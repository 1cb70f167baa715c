use hbnb::host::Destination;
use hbnb::page::PageMode;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::Page;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Index,
    #[at("/login")]
    Login,
    #[at("/place")]
    Place,
    #[at("/add_review")]
    AddReview,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn mode(&self) -> Option<PageMode> {
        match self {
            Route::Login => Some(PageMode::Login),
            Route::Index => Some(PageMode::Index),
            Route::Place => Some(PageMode::Details),
            Route::AddReview => Some(PageMode::AddReview),
            Route::NotFound => None,
        }
    }
}

impl From<&Destination> for Route {
    fn from(destination: &Destination) -> Self {
        match destination {
            Destination::Index => Route::Index,
            Destination::Login => Route::Login,
            Destination::PlaceDetails(_) => Route::Place,
            Destination::AddReview(_) => Route::AddReview,
        }
    }
}

pub fn switch(route: Route) -> Html {
    match route.mode() {
        Some(mode) => html! { <Page {mode} /> },
        None => html! { <div>{ "404 Not Found" }</div> },
    }
}
