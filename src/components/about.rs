//! About Page

use leptos::prelude::*;

/// About page
#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"About"</h1>
            <p>"A small blog frontend. Posts and tags come from the blog API."</p>
        </div>
    }
}
