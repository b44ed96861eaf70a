//! Tag List Component
//!
//! Reads the shared tag list reactively.

use leptos::prelude::*;

use crate::store::{use_blog_store, BlogStateStoreFields};

/// Tag list fed by the shared store
#[component]
pub fn TagList() -> impl IntoView {
    let store = use_blog_store();

    view! {
        <div class="tag-list">
            <For
                each=move || store.tags().get()
                key=|tag| tag.id
                children=move |tag| {
                    view! { <span class="tag-chip">{tag.name}</span> }
                }
            />

            {move || if store.tags().read().is_empty() {
                view! { <div class="no-tags-message">"No tags yet"</div> }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}

            <p class="tag-count">{move || format!("{} tags", store.tags().read().len())}</p>
        </div>
    }
}
