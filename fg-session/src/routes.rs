//! Route table and guard.

use crate::user::User;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    About,
    Dashboard,
    EventMap,
    Analytics,
    Alerts,
    Contact,
    Login,
    Signup,
}

impl Route {
    /// Gated routes in navigation order.
    pub const NAVIGATION: [Route; 7] = [
        Route::Landing,
        Route::About,
        Route::Dashboard,
        Route::EventMap,
        Route::Analytics,
        Route::Alerts,
        Route::Contact,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::About => "/about",
            Route::Dashboard => "/dashboard",
            Route::EventMap => "/event-map",
            Route::Analytics => "/analytics",
            Route::Alerts => "/alerts",
            Route::Contact => "/contact",
            Route::Login => "/login",
            Route::Signup => "/signup",
        }
    }

    /// Navigation label.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Landing => "Home",
            Route::About => "About",
            Route::Dashboard => "Dashboard",
            Route::EventMap => "Event Map",
            Route::Analytics => "Analytics",
            Route::Alerts => "Alerts",
            Route::Contact => "Contact",
            Route::Login => "Sign In",
            Route::Signup => "Request Access",
        }
    }

    /// Resolve a path, ignoring a trailing slash. Unknown paths yield `None`.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        [Route::Login, Route::Signup]
            .into_iter()
            .chain(Route::NAVIGATION)
            .find(|r| r.path() == trimmed)
    }

    /// The two auth routes reachable without a session.
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login | Route::Signup)
    }

    /// Where a request for this route actually lands.
    ///
    /// Gated routes redirect to [`Route::Login`] without a user.
    pub fn guard(self, user: Option<&User>) -> Route {
        if self.is_public() || user.is_some() {
            self
        } else {
            Route::Login
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{CredentialVerifier, DemoCredentials};

    #[test]
    fn every_route_round_trips_its_path() {
        for route in Route::NAVIGATION.iter().chain(&[Route::Login, Route::Signup]) {
            assert_eq!(Route::from_path(route.path()), Some(*route));
        }
        assert_eq!(Route::from_path("/event-map/"), Some(Route::EventMap));
        assert_eq!(Route::from_path(""), Some(Route::Landing));
        assert_eq!(Route::from_path("/admin"), None);
    }

    #[test]
    fn gated_routes_redirect_without_user() {
        for route in Route::NAVIGATION {
            assert_eq!(route.guard(None), Route::Login);
        }
        assert_eq!(Route::Signup.guard(None), Route::Signup);
        assert_eq!(Route::Login.guard(None), Route::Login);
    }

    #[test]
    fn gated_routes_open_with_user() {
        let user = DemoCredentials::default()
            .verify("demo@flowguard.ai", "demo123")
            .unwrap();
        for route in Route::NAVIGATION {
            assert_eq!(route.guard(Some(&user)), route);
        }
    }
}
