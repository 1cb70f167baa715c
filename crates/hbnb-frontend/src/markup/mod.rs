//! Pages served as their own HTML documents.
//!
//! The document already carries the page's elements (`login-link`,
//! `country-filter`, `add-review`, the forms and their fields). Nothing here
//! renders a second copy of them: forms get submit listeners, the list and
//! details containers get their cards rendered inside, and the surrounding
//! elements are shown, hidden or filled in place.

mod details;
mod forms;
mod index;

use hbnb::log::{debug, info, warn};
use hbnb::page::PageMode;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlOptionElement, HtmlSelectElement};
use yew::BaseComponent;

use details::DetailsMarkup;
use index::IndexMarkup;

pub const LOGIN_LINK_ID: &str = "login-link";
pub const COUNTRY_FILTER_ID: &str = "country-filter";
pub const ADD_REVIEW_ID: &str = "add-review";
pub const EMAIL_ID: &str = "email";
pub const PASSWORD_ID: &str = "password";
pub const REVIEW_TEXT_ID: &str = "review-text";

/// Activates `mode` on the page's own markup.
pub fn mount(document: &Document, mode: PageMode) {
    let Some(root) = document.get_element_by_id(mode.root_id()) else {
        return;
    };

    info!(?mode, "wiring page markup");
    match mode {
        PageMode::Login => forms::wire_login(root),
        PageMode::Index => render_into::<IndexMarkup>(root),
        PageMode::Details => render_into::<DetailsMarkup>(root),
        PageMode::AddReview => forms::wire_review(root),
    }
}

/// Replaces the container's static content with `C`.
fn render_into<C>(container: Element)
where
    C: BaseComponent,
    C::Properties: Default,
{
    container.set_inner_html("");
    yew::Renderer::<C>::with_root(container).render();
}

pub fn element_by_id(id: &str) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// Shows or hides the element with `id`. Pages without it are left alone.
pub fn set_shown(id: &str, shown: bool) {
    let Some(element) = element_by_id(id).and_then(|e| e.dyn_into::<HtmlElement>().ok()) else {
        debug!(id, "element not in markup");
        return;
    };

    let style = element.style();
    let result = if shown {
        style.remove_property("display").map(|_| ())
    } else {
        style.set_property("display", "none")
    };
    if let Err(err) = result {
        warn!(?err, id, "failed to toggle element");
    }
}

/// Replaces the options of the `<select>` with `id`, keeping the current
/// selection when it is still offered.
pub fn fill_options(id: &str, options: &[String]) {
    let Some(select) = element_by_id(id).and_then(|e| e.dyn_into::<HtmlSelectElement>().ok()) else {
        debug!(id, "select not in markup");
        return;
    };

    let selected = select.value();
    select.set_inner_html("");
    for option in options {
        let appended = HtmlOptionElement::new_with_text_and_value(option, option)
            .and_then(|element| select.append_child(&element));
        if let Err(err) = appended {
            warn!(?err, %option, "failed to add filter option");
        }
    }
    if options.contains(&selected) {
        select.set_value(&selected);
    }
}
