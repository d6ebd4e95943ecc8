//! Route table and the credential guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` declares one Leptos route per `AppRoute`; gated views are wrapped in
//! `RequireSession`, which asks `RouteGuard::check` once per navigation before
//! the view renders. The guard never contacts the server.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::config::LOGIN_PATH;
use crate::state::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Login,
    Items,
    Products,
}

impl AppRoute {
    pub const ALL: [Self; 4] = [Self::Home, Self::Login, Self::Items, Self::Products];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => LOGIN_PATH,
            Self::Items => "/items",
            Self::Products => "/products",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Login",
            Self::Items => "Items",
            Self::Products => "Products",
        }
    }

    pub fn requires_session(self) -> bool {
        matches!(self, Self::Items)
    }
}

/// Outcome of one navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Allow,
    RedirectToLogin,
}

impl RouteAccess {
    /// Where the router should go instead, if anywhere.
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin => Some(LOGIN_PATH),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RouteGuard {
    session: Session,
}

impl RouteGuard {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn check(&self, route: AppRoute) -> RouteAccess {
        if route.requires_session() && !self.session.is_present() {
            log::debug!("{} requires a session; redirecting to {LOGIN_PATH}", route.path());
            RouteAccess::RedirectToLogin
        } else {
            RouteAccess::Allow
        }
    }
}
