//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::net::middleware::{default_navigator, session_client};
use crate::net::transport::default_transport;
use crate::pages::{home::HomePage, items::ItemsPage, login::LoginPage, products::ProductsPage};
use crate::state::auth::AuthState;
use crate::state::session::default_session;

/// Root application component.
///
/// Builds the session and API client once and provides them, with the
/// reactive auth mirror, to every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = default_session();
    let client = session_client(default_transport(), &session, default_navigator());
    let auth = RwSignal::new(AuthState::from_session(&session));

    provide_context(session);
    provide_context(client);
    provide_context(auth);

    view! {
        <Title text="Itemdesk"/>

        <Router>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("items") view=ItemsPage/>
                    <Route path=StaticSegment("products") view=ProductsPage/>
                </Routes>
            </main>
        </Router>
    }
}
