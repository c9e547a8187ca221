//! Navigation domain - the declarative screen graph handed to the
//! external router, and the single event the core emits.

use std::fmt;

/// Screens known to the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    SignUp,
    Login,
    Directory,
}

impl Route {
    /// Route name as registered with the router.
    pub fn name(&self) -> &'static str {
        match self {
            Route::SignUp => "SignUp",
            Route::Login => "Login",
            Route::Directory => "UserList",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Transition requests raised by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    /// An account was created; move to the directory.
    RegistrationSucceeded,
}

impl NavigationEvent {
    /// Destination of this event.
    pub fn target(&self) -> Route {
        match self {
            NavigationEvent::RegistrationSucceeded => Route::Directory,
        }
    }
}

/// Immutable description of the app's screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenGraph {
    initial: Route,
    routes: Vec<Route>,
}

impl ScreenGraph {
    pub fn new(initial: Route, routes: Vec<Route>) -> Self {
        Self { initial, routes }
    }

    pub fn initial(&self) -> Route {
        self.initial
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn contains(&self, route: Route) -> bool {
        self.routes.contains(&route)
    }
}

impl Default for ScreenGraph {
    fn default() -> Self {
        Self::new(
            Route::SignUp,
            vec![Route::SignUp, Route::Login, Route::Directory],
        )
    }
}
