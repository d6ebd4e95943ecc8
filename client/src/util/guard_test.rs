use super::*;

fn guard_with(token: Option<&str>) -> RouteGuard {
    let session = Session::in_memory();
    if let Some(token) = token {
        session.set(token);
    }
    RouteGuard::new(session)
}

// =============================================================
// RouteGuard::check
// =============================================================

#[test]
fn items_without_session_redirects_to_login() {
    assert_eq!(guard_with(None).check(AppRoute::Items), RouteAccess::RedirectToLogin);
}

#[test]
fn products_without_session_is_allowed() {
    assert_eq!(guard_with(None).check(AppRoute::Products), RouteAccess::Allow);
}

#[test]
fn items_with_session_is_allowed() {
    assert_eq!(guard_with(Some("t")).check(AppRoute::Items), RouteAccess::Allow);
}

#[test]
fn ungated_routes_always_allowed() {
    for token in [None, Some("t")] {
        let guard = guard_with(token);
        for route in [AppRoute::Home, AppRoute::Login, AppRoute::Products] {
            assert_eq!(guard.check(route), RouteAccess::Allow, "{route:?} with {token:?}");
        }
    }
}

#[test]
fn guard_sees_session_changes() {
    let session = Session::in_memory();
    let guard = RouteGuard::new(session.clone());
    assert_eq!(guard.check(AppRoute::Items), RouteAccess::RedirectToLogin);
    session.set("t");
    assert_eq!(guard.check(AppRoute::Items), RouteAccess::Allow);
    session.clear();
    assert_eq!(guard.check(AppRoute::Items), RouteAccess::RedirectToLogin);
}

// =============================================================
// RouteAccess
// =============================================================

#[test]
fn redirect_target_is_login_path() {
    assert_eq!(RouteAccess::RedirectToLogin.redirect_target(), Some("/login"));
    assert_eq!(RouteAccess::Allow.redirect_target(), None);
}

// =============================================================
// AppRoute
// =============================================================

#[test]
fn only_items_requires_session() {
    let gated: Vec<_> = AppRoute::ALL.into_iter().filter(|r| r.requires_session()).collect();
    assert_eq!(gated, vec![AppRoute::Items]);
}
