use hbnb::host::Host;
use hbnb::view::PlaceCard;
use yew::prelude::*;

use crate::hooks::use_host;

#[derive(Properties, PartialEq)]
pub struct PlaceCardViewProps {
    pub card: PlaceCard,
}

#[function_component(PlaceCardView)]
pub fn place_card_view(props: &PlaceCardViewProps) -> Html {
    let host = use_host();
    let card = &props.card;

    let on_details = {
        let destination = card.details();
        Callback::from(move |_: MouseEvent| host.navigate(destination.clone()))
    };

    html! {
        <article class="place-card" style={(!card.visible).then_some("display: none")}>
            <img class="place-image" src={card.image.clone()} alt={card.name.clone()} />
            <h2 class="place-name">{ &card.name }</h2>
            <p class="place-description">{ &card.description }</p>
            <p class="place-location">{ &card.location }</p>
            <button class="details-button" onclick={on_details}>{ "View Details" }</button>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct PlacesListProps {
    pub cards: Vec<PlaceCard>,
}

/// The cards alone, for a `places-list` container the page already has.
#[function_component(PlaceCards)]
pub fn place_cards_view(props: &PlacesListProps) -> Html {
    html! {
        { for props.cards.iter().map(|card| html! {
            <PlaceCardView key={card.id.to_string()} card={card.clone()} />
        }) }
    }
}

/// The `places-list` container, rebuilt from `cards` on every render.
#[function_component(PlacesList)]
pub fn places_list(props: &PlacesListProps) -> Html {
    html! {
        <section id="places-list">
            <PlaceCards cards={props.cards.clone()} />
        </section>
    }
}
