use gloo_events::EventListener;
use hbnb::controllers::{IndexController, IndexView};
use hbnb::filter::{CountryFilter, country_options};
use hbnb::page::PageController;
use hbnb::view::place_cards;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::{COUNTRY_FILTER_ID, LOGIN_LINK_ID, element_by_id, fill_options, set_shown};
use crate::browser;
use crate::components::PlaceCards;
use crate::hooks::use_host;
use crate::providers::api;

/// Cards rendered inside the page's `places-list`; drives the page's own
/// `login-link` and `country-filter`.
#[function_component(IndexMarkup)]
pub fn index_markup() -> Html {
    let host = use_host();
    let controller = use_memo((), move |_| {
        IndexController::new(api::create(), browser::session(), host)
    });

    let view = use_state(|| None::<IndexView>);
    let filter = use_state(CountryFilter::default);

    {
        let controller = controller.clone();
        let view = view.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                view.set(Some(controller.activate().await));
            });
        });
    }

    {
        let filter = filter.clone();
        use_effect_with((), move |_| {
            let listener = element_by_id(COUNTRY_FILTER_ID).map(|select| {
                EventListener::new(&select, "change", move |event| {
                    let select = event
                        .target()
                        .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok());
                    if let Some(select) = select {
                        filter.set(CountryFilter::from_value(&select.value()));
                    }
                })
            });
            move || drop(listener)
        });
    }

    let current = (*view).as_ref();
    let shows_login_link = current.is_some_and(IndexView::shows_login_link);
    let shows_filter = current.is_some_and(IndexView::shows_filter);
    let places = current.map(IndexView::places).unwrap_or_default();

    use_effect_with(
        (shows_login_link, shows_filter, country_options(places)),
        |(shows_login_link, shows_filter, options)| {
            set_shown(LOGIN_LINK_ID, *shows_login_link);
            set_shown(COUNTRY_FILTER_ID, *shows_filter);
            fill_options(COUNTRY_FILTER_ID, options);
        },
    );

    html! { <PlaceCards cards={place_cards(places, &filter)} /> }
}
