//! Frontend Models
//!
//! Data shapes matching the blog API entities.

use serde::{Deserialize, Serialize};

/// Tag data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

/// Post data structure (matches backend)
///
/// `tag_id` is an ordered list of references into `Tag::id`. Referential
/// integrity is the producer's concern and is not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub hit: i32,
    pub publish_time: i64,
    pub update_time: i64,
    pub tag_id: Vec<i32>,
    pub words_len: i32,
    pub summary: String,
    pub title: String,
}

/// Resolve a post's tag references against a tag list.
/// Preserves `tag_id` order; ids without a matching tag are skipped.
pub fn tags_for_post(tags: &[Tag], post: &Post) -> Vec<Tag> {
    post.tag_id
        .iter()
        .filter_map(|id| tags.iter().find(|tag| tag.id == *id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_tag(id: i32, name: &str) -> Tag {
        Tag {
            id,
            name: name.to_string(),
        }
    }

    fn make_post(id: i32, tag_id: Vec<i32>) -> Post {
        Post {
            id,
            hit: 0,
            publish_time: 1700000000,
            update_time: 1700000000,
            tag_id,
            words_len: 0,
            summary: String::new(),
            title: format!("Post {}", id),
        }
    }

    #[test]
    fn test_tag_json_contract() {
        let tag: Tag = serde_json::from_str(r#"{"id":1,"name":"rust"}"#).unwrap();
        assert_eq!(tag, make_tag(1, "rust"));
    }

    #[test]
    fn test_post_json_contract() {
        let json = r#"{
            "id": 7,
            "hit": 42,
            "publish_time": 1700000000,
            "update_time": 1700003600,
            "tag_id": [1, 2],
            "words_len": 1280,
            "summary": "A short summary",
            "title": "Hello"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.hit, 42);
        assert_eq!(post.tag_id, vec![1, 2]);
        assert_eq!(post.words_len, 1280);
        assert_eq!(post.update_time - post.publish_time, 3600);
        assert_eq!(post.title, "Hello");
    }

    #[test]
    fn test_tags_for_post_preserves_reference_order() {
        let tags = vec![make_tag(2, "b"), make_tag(1, "a")];
        let post = make_post(1, vec![1, 2]);

        let resolved = tags_for_post(&tags, &post);

        let names: Vec<&str> = resolved.iter().map(|tag| tag.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_tags_for_post_skips_missing_ids() {
        let tags = vec![make_tag(1, "a")];
        let post = make_post(1, vec![1, 99]);

        let resolved = tags_for_post(&tags, &post);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, 1);
    }
}
