//! One component per page mode.

pub mod add_review;
pub mod details;
pub mod index;
pub mod login;

pub use add_review::*;
pub use details::*;
pub use index::*;
pub use login::*;

use hbnb::page::PageMode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub mode: PageMode,
}

/// The page component for a mode, whichever way the mode was selected.
#[function_component(Page)]
pub fn page(props: &PageProps) -> Html {
    match props.mode {
        PageMode::Login => html! { <LoginPage /> },
        PageMode::Index => html! { <IndexPage /> },
        PageMode::Details => html! { <DetailsPage /> },
        PageMode::AddReview => html! { <AddReviewPage /> },
    }
}
