//! Blog Frontend App
//!
//! Application shell: owns the shared store and the router context,
//! renders the page selected by the current route.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{About, Home, NavBar};
use crate::router::{Route, RouterContext};
use crate::store::{BlogState, BlogStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // Shared state, one instance per page load
    let store = Store::new(BlogState::new());
    provide_context(store);

    // In-memory history: always starts at Home
    let (current_route, set_current_route) = signal(Route::Home);
    provide_context(RouterContext::new((current_route, set_current_route)));

    Effect::new(move |_| {
        let count = store.tags().read().len();
        web_sys::console::log_1(&format!("[APP] {} tags in store", count).into());
    });

    view! {
        <div class="app-layout">
            <NavBar />

            <main class="main-content">
                {move || match current_route.get() {
                    Route::Home => view! { <Home /> }.into_any(),
                    Route::About => view! { <About /> }.into_any(),
                }}
            </main>
        </div>
    }
}
