//! Top navigation with login/logout control.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once above the router outlet. It reads the reactive `AuthState`
//! so the login link flips to a logout button as soon as a login completes.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::LOGIN_PATH;
use crate::net::http::ApiClient;
use crate::net::middleware::default_navigator;
use crate::services::auth::AuthService;
use crate::state::auth::AuthState;
use crate::state::session::Session;
use crate::util::guard::AppRoute;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let service = AuthService::new(expect_context::<ApiClient>(), expect_context::<Session>());

    let on_logout = move |_: leptos::ev::MouseEvent| {
        service.logout();
        auth.set(AuthState::default());
        default_navigator().reload_to(LOGIN_PATH);
    };

    let identity = move || auth.get().username.unwrap_or_else(|| "signed in".to_owned());

    view! {
        <nav class="nav-bar">
            {AppRoute::ALL
                .into_iter()
                .filter(|route| *route != AppRoute::Login)
                .map(|route| view! { <A href=route.path()>{route.title()}</A> })
                .collect_view()}
            <span class="nav-bar__spacer"></span>
            <Show
                when=move || auth.get().authenticated
                fallback=|| view! { <A href=AppRoute::Login.path()>{AppRoute::Login.title()}</A> }
            >
                <span class="nav-bar__self">{identity}</span>
                <button class="btn nav-bar__logout" on:click=on_logout.clone() title="Logout">
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
