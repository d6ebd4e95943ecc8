//! Gate for views that need a stored credential.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::Session;
use crate::util::guard::{AppRoute, RouteGuard};

/// Render `children` only when the guard allows `route`; otherwise redirect.
///
/// The check runs once when the route mounts, before any child renders, so a
/// gated page never issues a request without first passing the guard.
#[component]
pub fn RequireSession(route: AppRoute, children: Children) -> impl IntoView {
    let guard = RouteGuard::new(expect_context::<Session>());
    match guard.check(route).redirect_target() {
        None => children().into_any(),
        Some(target) => view! { <Redirect path=target/> }.into_any(),
    }
}
