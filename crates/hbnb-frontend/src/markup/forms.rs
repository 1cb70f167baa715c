use std::cell::Cell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use hbnb::controllers::{AddReviewController, LoginController};
use hbnb::page::PageController;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::{EMAIL_ID, PASSWORD_ID, REVIEW_TEXT_ID, element_by_id};
use crate::browser::{self, BrowserHost};
use crate::providers::api;

/// Calls `handler` instead of submitting `form`. The listener lives as long
/// as the page.
fn on_submit(form: &Element, mut handler: impl FnMut() + 'static) {
    let options = EventListenerOptions::enable_prevent_default();
    EventListener::new_with_options(form, "submit", options, move |event| {
        event.prevent_default();
        handler();
    })
    .forget();
}

fn input_value(id: &str) -> String {
    element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

fn textarea_value(id: &str) -> String {
    element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlTextAreaElement>().ok())
        .map(|textarea| textarea.value())
        .unwrap_or_default()
}

pub fn wire_login(form: Element) {
    let controller = Rc::new(LoginController::new(
        api::create(),
        browser::session(),
        BrowserHost::new(None),
    ));
    {
        let controller = controller.clone();
        spawn_local(async move { controller.activate().await });
    }

    let busy = Rc::new(Cell::new(false));
    on_submit(&form, move || {
        if busy.replace(true) {
            return;
        }
        let email = input_value(EMAIL_ID);
        let password = input_value(PASSWORD_ID);
        let controller = controller.clone();
        let busy = busy.clone();
        spawn_local(async move {
            // Failures are alerted by the controller, the form stays as typed.
            let _ = controller.submit(&email, &password).await;
            busy.set(false);
        });
    });
}

pub fn wire_review(form: Element) {
    let place_id = browser::place_id_from_search(&browser::window_search());
    let controller = AddReviewController::new(
        api::create(),
        browser::session(),
        BrowserHost::new(None),
        place_id,
    );

    spawn_local(async move {
        // Without a session the controller has already redirected.
        let Some(submitter) = controller.activate().await else {
            return;
        };
        let submitter = Rc::new(submitter);
        let busy = Rc::new(Cell::new(false));

        let target = form.clone();
        on_submit(&target, move || {
            if busy.replace(true) {
                return;
            }
            let review_text = textarea_value(REVIEW_TEXT_ID);
            let submitter = submitter.clone();
            let busy = busy.clone();
            let form = form.clone();
            spawn_local(async move {
                if submitter.submit(&review_text).await.is_ok() {
                    if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
                        form.reset();
                    }
                }
                busy.set(false);
            });
        });
    });
}
