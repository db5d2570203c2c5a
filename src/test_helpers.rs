//! Shared fixtures for unit tests.
//!
//! Keeps the per-module test suites free of fixture boilerplate: a sample
//! post pinned to a fixed timestamp, term builders, and canned collaborator
//! implementations.

use chrono::TimeZone;

use crate::collab::{CommentsRenderer, ImageResolver};
use crate::taxonomy::slugify;
use crate::types::{ImageRef, ImageSize, Post, Term};

/// Epoch seconds the sample post is published at; tests derive "now" from it.
pub const SAMPLE_PUBLISHED: i64 = 1_700_000_000;

/// A plain published post with no image, parent, or password.
pub fn sample_post() -> Post {
    Post {
        id: 7,
        title: "Sample Post".to_string(),
        content: "<p>Sample content.</p>".to_string(),
        parent: None,
        password_protected: false,
        published: chrono::Utc.timestamp_opt(SAMPLE_PUBLISHED, 0).unwrap(),
        featured_image: None,
        permalink: "https://example.com/sample-post".to_string(),
        format: None,
    }
}

/// Terms without links (the plain-display shape).
pub fn plain_terms(names: &[&str]) -> Vec<Term> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Term {
            id: i as u64 + 1,
            name: (*name).to_string(),
            link: None,
        })
        .collect()
}

/// Terms with links (the linked-display shape).
pub fn linked_terms(names: &[&str]) -> Vec<Term> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Term {
            id: i as u64 + 1,
            name: (*name).to_string(),
            link: Some(format!("https://example.com/tag/{}", slugify(name))),
        })
        .collect()
}

/// Resolver that answers every request with a deterministic URL.
pub struct FixedImages;

impl ImageResolver for FixedImages {
    fn resolve(&self, post_id: u64, size: ImageSize) -> Option<ImageRef> {
        Some(ImageRef {
            src: format!("https://img.example.com/{post_id}-{}.jpg", size.as_str()),
            width: 100,
            height: 100,
        })
    }
}

/// Resolver that never finds an image.
pub struct NoImages;

impl ImageResolver for NoImages {
    fn resolve(&self, _post_id: u64, _size: ImageSize) -> Option<ImageRef> {
        None
    }
}

/// Comments renderer that returns a fixed fragment.
pub struct FixedComments(pub String);

impl CommentsRenderer for FixedComments {
    fn render(&self, _post_id: u64) -> String {
        self.0.clone()
    }
}

/// A two-post manifest document with a pinned render time. Post 2 is a
/// child of post 1; post 1 carries tags, comments, and a resolved image.
pub fn sample_manifest_json() -> String {
    r#"{
        "now": "2024-05-03T12:00:00Z",
        "posts": [
            {
                "id": 1,
                "title": "Hello",
                "content": "The **first** post.",
                "published": "2024-05-01T09:00:00Z",
                "permalink": "https://example.com/hello",
                "featured_image": 11,
                "tags": [
                    { "id": 3, "name": "meta", "link": "https://example.com/tag/meta" },
                    { "id": 4, "name": "news", "link": "https://example.com/tag/news" }
                ],
                "categories": [
                    { "id": 5, "name": "General", "link": "https://example.com/category/general" }
                ],
                "comments": { "approved": 2, "open": true },
                "comments_html": "<ol class=\"comment-list\"><li>Nice.</li></ol>",
                "images": {
                    "medium_thumbnail": { "src": "https://example.com/i/1-350.jpg", "width": 350, "height": 350 },
                    "full_width": { "src": "https://example.com/i/1-940.jpg", "width": 940, "height": 400 }
                }
            },
            {
                "id": 2,
                "title": "Follow-up",
                "content": "A *second* post.",
                "published": "2024-05-02T09:00:00Z",
                "permalink": "https://example.com/follow-up",
                "parent": 1
            }
        ]
    }"#
    .to_string()
}
