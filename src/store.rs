//! Shared Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use crate::models::Tag;
use leptos::prelude::*;
use reactive_stores::Store;

/// Shared blog state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BlogState {
    /// All tags known to the frontend
    pub tags: Vec<Tag>,
}

impl BlogState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type BlogStore = Store<BlogState>;

/// Get the blog store from context
pub fn use_blog_store() -> BlogStore {
    expect_context::<BlogStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a tag to the store
pub fn store_add_tag(store: &BlogStore, tag: Tag) {
    store.tags().write().push(tag);
}

/// Replace the tag list wholesale
pub fn store_set_tags(store: &BlogStore, tags: Vec<Tag>) {
    *store.tags().write() = tags;
}

/// Clear the tag list
pub fn store_clear_tags(store: &BlogStore) {
    store.tags().write().clear();
}
