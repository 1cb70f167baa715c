use hbnb::async_callback;
use hbnb::controllers::LoginController;
use hbnb::page::PageController;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::browser;
use crate::hooks::use_host;
use crate::providers::api;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let host = use_host();
    let controller = use_memo((), move |_| {
        LoginController::new(api::create(), browser::session(), host)
    });

    let email = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);

    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move { controller.activate().await });
        });
    }

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let on_submit = async_callback!([controller, email, password, loading] |event: SubmitEvent| {
        event.prevent_default();
    } async {
        if *loading {
            return;
        }
        loading.set(true);
        // Failures are alerted by the controller, the form stays as typed.
        let _ = controller.submit(&email, &password).await;
        loading.set(false);
    });

    html! {
        <main class="login">
            <form id="login-form" onsubmit={on_submit}>
                <h1>{ "Login" }</h1>
                <label for="email">{ "Email" }</label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    required=true
                    value={(*email).clone()}
                    oninput={on_email}
                />
                <label for="password">{ "Password" }</label>
                <input
                    id="password"
                    name="password"
                    type="password"
                    required=true
                    value={(*password).clone()}
                    oninput={on_password}
                />
                <button type="submit" class="login-button" disabled={*loading}>
                    { if *loading { "Logging in..." } else { "Login" } }
                </button>
            </form>
        </main>
    }
}
