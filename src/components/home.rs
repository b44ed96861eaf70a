//! Home Page
//!
//! Landing view: the shared tag list plus an input for adding tags by hand.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::TagList;
use crate::models::Tag;
use crate::store::{store_add_tag, use_blog_store, BlogStateStoreFields};

/// Tag add input
#[component]
fn TagAddInput() -> impl IntoView {
    let store = use_blog_store();

    let (new_tag_name, set_new_tag_name) = signal(String::new());

    let add_tag = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_tag_name.get();
        if name.is_empty() { return; }

        // Ids are minted locally; the API owns them in the full system
        let next_id = store
            .tags()
            .read()
            .iter()
            .map(|tag| tag.id)
            .max()
            .unwrap_or(0)
            + 1;
        store_add_tag(&store, Tag { id: next_id, name });
        set_new_tag_name.set(String::new());
    };

    view! {
        <form class="tag-add-form" on:submit=add_tag>
            <input
                type="text"
                placeholder="Add tag..."
                prop:value=move || new_tag_name.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_tag_name.set(input.value());
                }
            />
            <button type="submit">"+"</button>
        </form>
    }
}

/// Home page
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Blog"</h1>

            <TagAddInput />

            <TagList />
        </div>
    }
}
