use hbnb::controllers::logout;
use hbnb::host::{Destination, Host};
use yew::prelude::*;

use crate::browser;
use crate::hooks::use_host;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// `None` while the page has not settled yet; both links stay hidden.
    #[prop_or_default]
    pub authenticated: Option<bool>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let host = use_host();

    let on_login = {
        let host = host.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            host.navigate(Destination::Login);
        })
    };

    let on_logout = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        logout(&browser::session(), &host);
    });

    let hidden = |visible: bool| (!visible).then_some("display: none");

    html! {
        <header class="site-header">
            <a class="logo" href="/">{ "HBnB" }</a>
            <nav>
                <a
                    id="login-link"
                    class="login-button"
                    href="/login"
                    style={hidden(props.authenticated == Some(false))}
                    onclick={on_login}
                >
                    { "Login" }
                </a>
                <a
                    class="logout-button"
                    href="/login"
                    style={hidden(props.authenticated == Some(true))}
                    onclick={on_logout}
                >
                    { "Logout" }
                </a>
            </nav>
        </header>
    }
}
