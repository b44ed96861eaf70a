//! Route Table
//!
//! Maps path strings to pages. History is in-memory: the current route
//! lives in a signal and navigation swaps it directly.

use leptos::prelude::*;

/// Navigable views
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
}

/// Static path table
pub const ROUTES: [(&str, Route); 2] = [("/", Route::Home), ("/about", Route::About)];

impl Route {
    /// Resolve a path through the table. Unknown paths resolve to nothing.
    pub fn from_path(path: &str) -> Option<Route> {
        ROUTES
            .iter()
            .find(|(candidate, _)| *candidate == path)
            .map(|(_, route)| *route)
    }

    /// The path this route is served under
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
        }
    }

    /// Label shown in navigation
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
        }
    }
}

/// Router state provided via context
#[derive(Clone, Copy)]
pub struct RouterContext {
    /// Current route - read
    pub current: ReadSignal<Route>,
    /// Current route - write
    set_current: WriteSignal<Route>,
}

impl RouterContext {
    pub fn new(current: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        Self {
            current: current.0,
            set_current: current.1,
        }
    }

    /// Switch to another view
    pub fn navigate(&self, route: Route) {
        self.set_current.set(route);
    }
}
