use hbnb::controllers::{DetailsController, DetailsView};
use hbnb::page::PageController;
use hbnb::view::PlaceDetailsCard;
use yew::prelude::*;

use super::{ADD_REVIEW_ID, set_shown};
use crate::browser;
use crate::components::PlaceDetailsCardView;
use crate::hooks::{use_host, use_place_id};
use crate::providers::api;

/// The card rendered inside the page's `place-details`; shows the page's own
/// `add-review` section only with a session.
#[function_component(DetailsMarkup)]
pub fn details_markup() -> Html {
    let host = use_host();
    let place_id = use_place_id();
    let controller = use_memo(place_id.clone(), move |place_id| {
        DetailsController::new(api::create(), browser::session(), host, place_id.clone())
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
    let can_review = current.is_some_and(|view| view.can_review);
    let card = current
        .and_then(|view| view.place.as_ref())
        .map(PlaceDetailsCard::from);

    use_effect_with(can_review, |can_review| set_shown(ADD_REVIEW_ID, *can_review));

    html! { <PlaceDetailsCardView {card} /> }
}
