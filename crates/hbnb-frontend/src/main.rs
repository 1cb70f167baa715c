mod browser;
mod components;
mod hooks;
mod markup;
mod pages;
mod providers;
mod routes;

use hbnb::log::{debug, info};
use hbnb::page;
use web_sys::Element;
use yew::prelude::*;
use yew_router::prelude::*;

use routes::{Route, switch};

/// Element the single-page app renders into.
const APP_ROOT_ID: &str = "app";

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn mount_app(root: Element) {
    info!("mounting single-page app");
    yew::Renderer::<App>::with_root(root).render();
}

fn main() {
    hbnb::log::setup().expect("Failed to setup logging");

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    let mounted = page::dispatch(
        |id| document.get_element_by_id(id).is_some(),
        |mode| markup::mount(&document, mode),
    );
    if mounted.is_some() {
        return;
    }

    match document.get_element_by_id(APP_ROOT_ID) {
        Some(root) => mount_app(root),
        None => debug!("no page marker and no app root, nothing to mount"),
    }
}
