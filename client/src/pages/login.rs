//! Login page with username + password form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::http::ApiClient;
use crate::net::types::LoginRequest;
use crate::services::auth::AuthService;
use crate::state::auth::AuthState;
use crate::state::session::Session;
use crate::util::guard::AppRoute;

fn validate_login_input(username: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let service = AuthService::new(expect_context::<ApiClient>(), expect_context::<Session>());
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let service = service.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match service.login(&credentials).await {
                Ok(resp) if resp.credential().is_some() => {
                    auth.set(AuthState::signed_in(&credentials.username));
                    info.set(String::new());
                    navigate(AppRoute::Items.path(), NavigateOptions::default());
                }
                Ok(_) => info.set("Login succeeded but no token was issued.".to_owned()),
                Err(e) => info.set(format!("Login failed: {e}")),
            }
            password.set(String::new());
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
