//! Application routing table.

use crate::frontend::components::guard::NavigationGuard;
use crate::frontend::pages::login::Login;
use crate::frontend::pages::not_found::NotFound;
use crate::frontend::pages::tasks::Tasks;
use crate::simple_error;
use crate::utils::Result;

use dioxus::prelude::*;
use dioxus_router::Routable;

/// Main routing enum for the application.
///
/// Every route except the catch-all passes through [`NavigationGuard`].
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavigationGuard)]
        /// Sign-in page, also the target of `/`.
        #[redirect("/", || Route::Login {})]
        #[route("/login")]
        Login {},
        /// Task list, only reachable with a session token.
        #[route("/tasks")]
        Tasks {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Per-route metadata read by the navigation guard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
}

/// Static description of one entry in the routing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRecord {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub redirect: Option<&'static str>,
    pub meta: RouteMeta,
}

pub const LOGIN_PATH: &str = "/login";
pub const TASKS_PATH: &str = "/tasks";

const ROUTES: &[RouteRecord] = &[
    RouteRecord {
        path: "/",
        name: None,
        redirect: Some(LOGIN_PATH),
        meta: RouteMeta {
            requires_auth: false,
        },
    },
    RouteRecord {
        path: LOGIN_PATH,
        name: Some("Login"),
        redirect: None,
        meta: RouteMeta {
            requires_auth: false,
        },
    },
    RouteRecord {
        path: TASKS_PATH,
        name: Some("Tasks"),
        redirect: None,
        meta: RouteMeta {
            requires_auth: true,
        },
    },
];

/// The routing table as declared, excluding the catch-all.
pub fn table() -> &'static [RouteRecord] {
    ROUTES
}

/// Resolves a path the same way the router does, redirects included.
#[allow(dead_code)]
pub fn resolve(path: &str) -> Result<Route> {
    path.parse::<Route>()
        .map_err(|e| simple_error!("Unknown route {}: {}", path, e))
}

impl Route {
    pub fn meta(&self) -> RouteMeta {
        match self {
            Self::Tasks {} => RouteMeta {
                requires_auth: true,
            },
            Self::Login {} | Self::NotFound { .. } => RouteMeta::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Login {} => "Login",
            Self::Tasks {} => "Tasks",
            Self::NotFound { .. } => "NotFound",
        }
    }

    pub fn path(&self) -> String {
        self.to_string()
    }
}
