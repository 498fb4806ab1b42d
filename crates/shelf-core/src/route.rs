//! Route surface of the admin dashboard and the guard that gates it.
//!
//! ```text
//! /                       landing
//! /login, /signup         public
//! /dashboard              → /dashboard/categories once authenticated
//! /dashboard/categories
//! /dashboard/customers
//! /dashboard/reports
//! /dashboard/settings
//! ```
//!
//! Any `/dashboard/*` path requires an authenticated session.

use std::fmt;

use serde::Serialize;

use crate::entities::AuthState;

const DASHBOARD_PREFIX: &str = "/dashboard";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Landing,
    Login,
    Signup,
    Dashboard,
    Categories,
    Customers,
    Reports,
    Settings,
    NotFound(String),
}

impl Route {
    /// Parse a path. Trailing slashes are ignored; unknown paths map to
    /// `NotFound`.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim().trim_end_matches('/');
        match trimmed {
            "" => Self::Landing,
            "/login" => Self::Login,
            "/signup" => Self::Signup,
            "/dashboard" => Self::Dashboard,
            "/dashboard/categories" => Self::Categories,
            "/dashboard/customers" => Self::Customers,
            "/dashboard/reports" => Self::Reports,
            "/dashboard/settings" => Self::Settings,
            other => Self::NotFound(other.to_string()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Landing => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Dashboard => DASHBOARD_PREFIX,
            Self::Categories => "/dashboard/categories",
            Self::Customers => "/dashboard/customers",
            Self::Reports => "/dashboard/reports",
            Self::Settings => "/dashboard/settings",
            Self::NotFound(path) => path,
        }
    }

    /// Whether the route lives under `/dashboard` and so needs a session.
    #[must_use]
    pub fn is_dashboard(&self) -> bool {
        match self {
            Self::Dashboard | Self::Categories | Self::Customers | Self::Reports | Self::Settings => {
                true
            }
            Self::NotFound(path) => path
                .strip_prefix(DASHBOARD_PREFIX)
                .is_some_and(|rest| rest.starts_with('/')),
            Self::Landing | Self::Login | Self::Signup => false,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of running a route through [`guard`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "route", rename_all = "snake_case")]
pub enum RouteDecision {
    Render(Route),
    Redirect(Route),
    /// Session restore still in progress.
    Pending,
}

/// Decide what happens when `route` is visited in `auth` state.
#[must_use]
pub fn guard(route: &Route, auth: &AuthState) -> RouteDecision {
    match auth {
        AuthState::Restoring if route.is_dashboard() => RouteDecision::Pending,
        AuthState::Restoring | AuthState::Unauthenticated => {
            if route.is_dashboard() {
                RouteDecision::Redirect(Route::Login)
            } else {
                RouteDecision::Render(route.clone())
            }
        }
        AuthState::Authenticated(_) => match route {
            Route::Landing => RouteDecision::Redirect(Route::Dashboard),
            Route::Dashboard => RouteDecision::Redirect(Route::Categories),
            other => RouteDecision::Render(other.clone()),
        },
    }
}
