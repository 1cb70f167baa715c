use hbnb::view::PlaceDetailsCard;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlaceDetailsProps {
    #[prop_or_default]
    pub card: Option<PlaceDetailsCard>,
}

/// The card alone, for a `place-details` container the page already has.
#[function_component(PlaceDetailsCardView)]
pub fn place_details_card_view(props: &PlaceDetailsProps) -> Html {
    let Some(card) = &props.card else {
        return html! {};
    };

    html! {
        <article class="place-details-card">
            <h1 class="place-name">{ &card.name }</h1>
            <p class="place-description">{ &card.description }</p>
            <p class="place-location">{ &card.location }</p>
            <div class="place-images">
                { for card.images.iter().map(|src| html! {
                    <img class="place-image" src={src.clone()} alt={card.name.clone()} />
                }) }
            </div>
        </article>
    }
}

/// The `place-details` container with at most one card.
#[function_component(PlaceDetails)]
pub fn place_details(props: &PlaceDetailsProps) -> Html {
    html! {
        <section id="place-details">
            <PlaceDetailsCardView card={props.card.clone()} />
        </section>
    }
}
