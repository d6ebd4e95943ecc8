//! Landing page with links into the app.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;
use crate::util::guard::AppRoute;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="home-page">
            <h1>"Itemdesk"</h1>
            <p>"Browse products, or sign in to manage items."</p>
            <ul class="home-page__links">
                <li>
                    <A href=AppRoute::Products.path()>"Products"</A>
                </li>
                <li>
                    <A href=AppRoute::Items.path()>"Items"</A>
                    <Show when=move || !auth.get().authenticated>
                        <span class="home-page__hint">" (sign-in required)"</span>
                    </Show>
                </li>
            </ul>
        </div>
    }
}
