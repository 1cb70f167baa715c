use hbnb::controllers::{IndexController, IndexView};
use hbnb::filter::{CountryFilter, country_options};
use hbnb::page::PageController;
use hbnb::view::place_cards;
use yew::prelude::*;

use crate::browser;
use crate::components::{CountryFilterSelect, Header, PlacesList};
use crate::hooks::use_host;
use crate::providers::api;

#[function_component(IndexPage)]
pub fn index_page() -> Html {
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

    // Filtering only re-renders what is already loaded.
    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |selected: CountryFilter| filter.set(selected))
    };

    let current = (*view).as_ref();
    let authenticated = current.map(|view| !view.shows_login_link());
    let shows_filter = current.is_some_and(IndexView::shows_filter);
    let places = current.map(IndexView::places).unwrap_or_default();

    html! {
        <>
            <Header {authenticated} />
            <main class="index">
                if shows_filter {
                    <CountryFilterSelect
                        options={country_options(places)}
                        selected={(*filter).clone()}
                        on_change={on_filter}
                    />
                }
                <PlacesList cards={place_cards(places, &filter)} />
            </main>
        </>
    }
}
