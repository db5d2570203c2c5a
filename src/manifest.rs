//! JSON render manifest: the CLI's data source.
//!
//! A manifest carries the raw inputs the composers need — posts with their
//! terms, comment summaries, pre-rendered comment threads, and resolved
//! image URLs per named size — so the whole pipeline runs from one file
//! with no host CMS attached. Manifest entries implement the collaborator
//! traits directly.
//!
//! ```json
//! {
//!   "now": "2024-05-01T12:00:00Z",
//!   "posts": [{
//!     "id": 1,
//!     "title": "Hello",
//!     "content": "# Hello\n\nFirst post.",
//!     "published": "2024-04-30T09:00:00Z",
//!     "permalink": "https://example.com/hello",
//!     "tags": [{ "id": 3, "name": "meta", "link": "https://example.com/tag/meta" }],
//!     "comments": { "approved": 2, "open": true },
//!     "comments_html": "<ol class=\"comment-list\">...</ol>",
//!     "images": { "medium_thumbnail": { "src": "https://example.com/i/1-350.jpg", "width": 350, "height": 350 } }
//!   }]
//! }
//! ```
//!
//! Pinning `now` in the manifest makes renders reproducible; when absent
//! the wall clock is used.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::collab::{
    CommentSource, CommentsRenderer, ContentFilter, ImageResolver, MarkdownFilter, PostSource,
    RawHtmlFilter, TaxonomySource,
};
use crate::config::SiteConfig;
use crate::extra::{Collaborators, build_extra_fields};
use crate::types::{CommentSummary, ExtraFields, ImageRef, ImageSize, Post, Term};

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The top-level manifest document.
#[derive(Debug, Serialize, Deserialize)]
pub struct RenderManifest {
    pub posts: Vec<ManifestPost>,
    /// Render time for relative dates. Absent = wall clock at render.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub now: Option<DateTime<Utc>>,
}

/// One post plus everything its collaborators would supply.
#[derive(Debug, Serialize, Deserialize)]
pub struct ManifestPost {
    #[serde(flatten)]
    pub post: Post,
    #[serde(default)]
    pub tags: Vec<Term>,
    #[serde(default)]
    pub categories: Vec<Term>,
    #[serde(default)]
    pub comments: CommentSummary,
    /// Pre-rendered comment-thread fragment (the body composer still strips
    /// scripts from it).
    #[serde(default)]
    pub comments_html: String,
    /// Resolved image URLs keyed by named size (`"full_width"`, ...).
    #[serde(default)]
    pub images: BTreeMap<String, ImageRef>,
}

impl RenderManifest {
    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Non-fatal consistency problems worth surfacing before a render:
    /// duplicate post ids, parents that reference no post in the manifest,
    /// and image keys that match no named size.
    pub fn lint(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let ids: HashSet<u64> = self.posts.iter().map(|p| p.post.id).collect();
        if ids.len() != self.posts.len() {
            warnings.push("duplicate post ids in manifest".to_string());
        }
        let known_sizes: HashSet<&str> = ImageSize::ALL.iter().map(|s| s.as_str()).collect();
        for entry in &self.posts {
            if let Some(parent) = entry.post.parent
                && !ids.contains(&parent)
            {
                warnings.push(format!(
                    "post {} references unknown parent {parent}",
                    entry.post.id
                ));
            }
            for key in entry.images.keys() {
                if !known_sizes.contains(key.as_str()) {
                    warnings.push(format!(
                        "post {} has image for unknown size '{key}'",
                        entry.post.id
                    ));
                }
            }
        }
        warnings
    }
}

impl PostSource for RenderManifest {
    fn get(&self, post_id: u64) -> Option<Post> {
        self.posts
            .iter()
            .find(|p| p.post.id == post_id)
            .map(|p| p.post.clone())
    }

    fn parent(&self, post_id: u64) -> Option<u64> {
        self.posts
            .iter()
            .find(|p| p.post.id == post_id)
            .and_then(|p| p.post.parent)
    }
}

impl ImageResolver for ManifestPost {
    fn resolve(&self, post_id: u64, size: ImageSize) -> Option<ImageRef> {
        if post_id != self.post.id {
            return None;
        }
        self.images.get(size.as_str()).cloned()
    }
}

impl CommentsRenderer for ManifestPost {
    fn render(&self, _post_id: u64) -> String {
        self.comments_html.clone()
    }
}

impl CommentSource for ManifestPost {
    fn summary(&self, _post_id: u64) -> CommentSummary {
        self.comments
    }
}

impl TaxonomySource for ManifestPost {
    fn tags(&self, _post_id: u64) -> Vec<Term> {
        self.tags.clone()
    }

    fn categories(&self, _post_id: u64) -> Vec<Term> {
        self.categories.clone()
    }
}

/// Render every post in the manifest to its extra-fields record.
///
/// The content filter follows `render.markdown` in the config: markdown
/// expansion, or HTML pass-through with more-anchor stripping.
pub fn render_all(manifest: &RenderManifest, config: &SiteConfig) -> Vec<ExtraFields> {
    let now = manifest.now.unwrap_or_else(Utc::now);
    let markdown = MarkdownFilter;
    let raw = RawHtmlFilter;
    let filter: &dyn ContentFilter = if config.render.markdown { &markdown } else { &raw };

    manifest
        .posts
        .iter()
        .map(|entry| {
            let collab = Collaborators {
                images: entry,
                filter,
                comments: entry,
                comment_counts: entry,
                taxonomy: entry,
            };
            build_extra_fields(&entry.post, &collab, now, config)
        })
        .collect()
}
