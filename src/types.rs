//! Shared types used across the render pipeline.
//!
//! These types are serialized to JSON at the pipeline boundaries (manifest in,
//! extra-fields records out) and passed by reference through the composers.
//! Everything here is immutable for the duration of a render: composers read
//! from these structs and produce fragments, never mutating shared state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single blog post as supplied by the upstream data source.
///
/// The `content` field is the raw authored markup (markdown or pre-rendered
/// HTML, possibly containing unsafe script tags) before the content filter
/// and sanitization passes run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    /// Raw content markup. Never rendered directly: it passes through the
    /// content filter and the sanitization passes first.
    pub content: String,
    /// Parent post id, for ancestry depth computation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,
    /// When true, the body composer substitutes a password prompt for content.
    #[serde(default)]
    pub password_protected: bool,
    /// Publish timestamp, compared against "now" for the relative date.
    pub published: DateTime<Utc>,
    /// Featured image attachment id. `None` or `Some(0)` both mean "no image".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<u64>,
    /// Canonical URL of the post, used verbatim in share links.
    pub permalink: String,
    /// Post format slug (`"video"`, `"quote"`, ...), if any. Contributes a
    /// `format-{slug}` entry to the computed class list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// A taxonomy term (tag or category) attached to a post.
///
/// `link` is present for the linked display and absent for the plain one;
/// a term with no link degrades to its bare name even in linked mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Approved-comment count and open/closed flag for a post.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CommentSummary {
    pub approved: u32,
    pub open: bool,
}

/// A resolved image: source URL plus the dimensions it was generated at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub width: u32,
    pub height: u32,
}

/// Named image sizes a resolver can be asked for.
///
/// The dimensions each name maps to are declarative configuration
/// (`[images]` in `config.toml`, see [`crate::config::ImagesConfig`]);
/// this enum is just the vocabulary shared with the image resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSize {
    SmallThumbnail,
    FullWidth,
    Thumbnail,
    ThumbnailLarge,
    MediumThumbnail,
    RelatedThumbnail,
}

impl ImageSize {
    /// Every named size, in registration order.
    pub const ALL: [ImageSize; 6] = [
        ImageSize::SmallThumbnail,
        ImageSize::FullWidth,
        ImageSize::Thumbnail,
        ImageSize::ThumbnailLarge,
        ImageSize::MediumThumbnail,
        ImageSize::RelatedThumbnail,
    ];

    /// The manifest/config key for this size.
    pub fn as_str(self) -> &'static str {
        match self {
            ImageSize::SmallThumbnail => "small_thumbnail",
            ImageSize::FullWidth => "full_width",
            ImageSize::Thumbnail => "thumbnail",
            ImageSize::ThumbnailLarge => "thumbnail_large",
            ImageSize::MediumThumbnail => "medium_thumbnail",
            ImageSize::RelatedThumbnail => "related_thumbnail",
        }
    }
}

/// The aggregate payload computed per post for the external API layer.
///
/// Field names are part of the output contract: consumers embed this record
/// in their per-post JSON response as-is. A missing image serializes as
/// `null`, absent tags as an empty string — the record never fails to build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraFields {
    /// Medium-thumbnail URL of the featured image, or `null`.
    pub image_src: Option<String>,
    /// Plain (unlinked) tag list fragment; empty when the post has no tags.
    pub tag_list: String,
    /// Human-relative publish date, e.g. `"3 hours ago"`.
    pub date_ago: String,
    /// Approved comment count.
    pub comments: u32,
    /// Full post body fragment.
    pub post_template: String,
    /// Post sidebar fragment.
    pub post_side_template: String,
    /// Space-joined CSS class list for the post element.
    pub post_classes: String,
}
