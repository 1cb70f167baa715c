use hbnb::controllers::{DetailsController, DetailsView};
use hbnb::host::Host;
use hbnb::page::PageController;
use hbnb::view::PlaceDetailsCard;
use yew::prelude::*;

use crate::browser;
use crate::components::{Header, PlaceDetails};
use crate::hooks::{use_host, use_place_id};
use crate::providers::api;

#[function_component(DetailsPage)]
pub fn details_page() -> Html {
    let host = use_host();
    let place_id = use_place_id();
    let controller = use_memo(place_id.clone(), {
        let host = host.clone();
        move |place_id| {
            DetailsController::new(api::create(), browser::session(), host, place_id.clone())
        }
    });

    let view = use_state(|| None::<DetailsView>);

    {
        let controller = controller.clone();
        let view = view.clone();
        use_effect_with(place_id, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                view.set(Some(controller.activate().await));
            });
        });
    }

    let current = (*view).as_ref();
    let card = current
        .and_then(|view| view.place.as_ref())
        .map(PlaceDetailsCard::from);
    let can_review = current.is_some_and(|view| view.can_review);
    let authenticated = current.map(|view| view.can_review);

    let on_add_review = {
        let destination = card.as_ref().map(PlaceDetailsCard::add_review);
        Callback::from(move |_: MouseEvent| {
            if let Some(destination) = &destination {
                host.navigate(destination.clone());
            }
        })
    };

    html! {
        <>
            <Header {authenticated} />
            <main class="details">
                <PlaceDetails card={card.clone()} />
                <section id="add-review" style={(!can_review).then_some("display: none")}>
                    <h2>{ "Add a review" }</h2>
                    <button
                        class="add-review-button"
                        disabled={card.is_none()}
                        onclick={on_add_review}
                    >
                        { "Write a review" }
                    </button>
                </section>
            </main>
        </>
    }
}

