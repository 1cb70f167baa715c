use std::rc::Rc;

use hbnb::api::HttpApiClient;
use hbnb::async_callback;
use hbnb::controllers::{AddReviewController, ReviewSubmitter};
use hbnb::page::PageController;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::browser::{self, BrowserHost, DocumentCookieJar};
use crate::components::Header;
use crate::hooks::{use_host, use_place_id};
use crate::providers::api;

type Submitter = ReviewSubmitter<HttpApiClient, DocumentCookieJar, BrowserHost>;

#[function_component(AddReviewPage)]
pub fn add_review_page() -> Html {
    let host = use_host();
    let place_id = use_place_id();
    let controller = use_memo(place_id.clone(), move |place_id| {
        AddReviewController::new(api::create(), browser::session(), host, place_id.clone())
    });

    // Only present once activation found a session; the form is not
    // rendered, let alone wired, before that.
    let submitter = use_state(|| None::<Rc<Submitter>>);
    let review_text = use_state(String::new);
    let loading = use_state(|| false);

    {
        let controller = controller.clone();
        let submitter = submitter.clone();
        use_effect_with(place_id, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                submitter.set(controller.activate().await.map(Rc::new));
            });
        });
    }

    let on_input = {
        let review_text = review_text.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(textarea) = e.target_dyn_into::<HtmlTextAreaElement>() {
                review_text.set(textarea.value());
            }
        })
    };

    let on_submit = async_callback!([submitter, review_text, loading] |event: SubmitEvent| {
        event.prevent_default();
    } async {
        let Some(submitter) = (*submitter).clone() else {
            return;
        };
        if *loading {
            return;
        }
        loading.set(true);
        if submitter.submit(&review_text).await.is_ok() {
            review_text.set(String::new());
        }
        loading.set(false);
    });

    let Some(active) = (*submitter).clone() else {
        return html! {};
    };

    html! {
        <>
            <Header authenticated={Some(true)} />
            <main class="add-review">
                <h1>{ format!("Reviewing place {}", active.place_id()) }</h1>
                <form id="review-form" onsubmit={on_submit}>
                    <label for="review-text">{ "Your review" }</label>
                    <textarea
                        id="review-text"
                        name="review-text"
                        required=true
                        value={(*review_text).clone()}
                        oninput={on_input}
                    />
                    <button type="submit" disabled={*loading}>
                        { if *loading { "Submitting..." } else { "Submit Review" } }
                    </button>
                </form>
            </main>
        </>
    }
}
