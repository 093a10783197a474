//! Injectable navigation handle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages receive a `Navigator` as a prop instead of reaching for the router
//! themselves, so route wiring lives in `app` and tests can record targets.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Client-side navigation to an absolute app path.
#[derive(Clone, Copy)]
pub struct Navigator {
    go: Callback<String>,
}

impl Navigator {
    pub fn new<F>(go: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        Self { go: Callback::new(go) }
    }

    /// Navigator backed by the surrounding `<Router>`.
    ///
    /// Must be called inside router context (e.g. a route's `view`).
    pub fn from_router() -> Self {
        let navigate = use_navigate();
        Self::new(move |path: String| navigate(&path, NavigateOptions::default()))
    }

    pub fn go(&self, path: &str) {
        self.go.run(path.to_owned());
    }
}
