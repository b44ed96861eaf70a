//! Navigation Bar Component
//!
//! Top bar switching between the routed pages.

use leptos::prelude::*;

use crate::router::{RouterContext, ROUTES};

/// Navigation bar with one control per route table entry
#[component]
pub fn NavBar() -> impl IntoView {
    let router = use_context::<RouterContext>().expect("RouterContext should be provided");

    view! {
        <nav class="nav-bar">
            {ROUTES
                .iter()
                .map(|(_, route)| {
                    let route = *route;
                    let is_active = move || router.current.get() == route;
                    let link_class = move || {
                        if is_active() { "nav-link active" } else { "nav-link" }
                    };

                    view! {
                        <button class=link_class on:click=move |_| router.navigate(route)>
                            {route.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
