//! Extra-fields aggregation.
//!
//! Combines the taxonomy, body, and sidebar composers with image resolution,
//! date formatting, and comment counts into one [`ExtraFields`] record per
//! post — the payload an API layer embeds in its per-post JSON response.
//! Aggregation never fails: missing collaborator data yields null or empty
//! fields.

use chrono::{DateTime, Utc};

use crate::body::render_body;
use crate::collab::{CommentSource, CommentsRenderer, ContentFilter, ImageResolver, TaxonomySource};
use crate::config::SiteConfig;
use crate::sidebar::render_sidebar;
use crate::taxonomy::{slugify, tag_list};
use crate::timeago::time_ago;
use crate::types::{ExtraFields, ImageSize, Post, Term};

/// The collaborator set the aggregator reads from. One struct so call sites
/// stay readable as the seam count grows.
pub struct Collaborators<'a> {
    pub images: &'a dyn ImageResolver,
    pub filter: &'a dyn ContentFilter,
    pub comments: &'a dyn CommentsRenderer,
    pub comment_counts: &'a dyn CommentSource,
    pub taxonomy: &'a dyn TaxonomySource,
}

/// Build the extra-fields record for one post.
pub fn build_extra_fields(
    post: &Post,
    collab: &Collaborators<'_>,
    now: DateTime<Utc>,
    config: &SiteConfig,
) -> ExtraFields {
    let image_src = post
        .featured_image
        .filter(|id| *id != 0)
        .and_then(|_| collab.images.resolve(post.id, ImageSize::MediumThumbnail))
        .map(|img| img.src);

    let tags = collab.taxonomy.tags(post.id);
    let categories = collab.taxonomy.categories(post.id);
    let summary = collab.comment_counts.summary(post.id);

    ExtraFields {
        image_src,
        tag_list: tag_list(&tags, config),
        date_ago: time_ago(post.published, now, &config.labels.ago),
        comments: summary.approved,
        post_template: render_body(post, collab.images, collab.filter, collab.comments, config),
        post_side_template: render_sidebar(post, &summary, &tags, &categories, now, config),
        post_classes: post_classes(post, &tags, &categories).join(" "),
    }
}

/// CSS class list for a post element: identity, type/status, format, and a
/// `tag-`/`category-` entry per attached term.
pub fn post_classes(post: &Post, tags: &[Term], categories: &[Term]) -> Vec<String> {
    let mut classes = vec![
        format!("post-{}", post.id),
        "post".to_string(),
        "type-post".to_string(),
        "status-publish".to_string(),
    ];
    match &post.format {
        Some(fmt) => classes.push(format!("format-{}", slugify(fmt))),
        None => classes.push("format-standard".to_string()),
    }
    for term in tags {
        classes.push(format!("tag-{}", slugify(&term.name)));
    }
    for term in categories {
        classes.push(format!("category-{}", slugify(&term.name)));
    }
    classes.push("hentry".to_string());
    classes
}
