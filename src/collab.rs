//! Collaborator seams: the external capabilities the composers depend on
//! but do not implement.
//!
//! Each trait covers one upstream concern — image resolution, content
//! filtering, comment rendering, comment counts, taxonomy lookup, post
//! ancestry. Composers take these as `&dyn` parameters so a host can back
//! them with whatever storage it has; the [`crate::manifest`] module backs
//! them with a JSON manifest for the CLI, and tests back them with fixtures.

use pulldown_cmark::{Parser, html as md_html};

use crate::sanitize;
use crate::types::{CommentSummary, ImageRef, ImageSize, Post, Term};

/// Maps (post, named size) to a resolved image, or `None` when the post has
/// no usable image at that size. Absence is a normal state, not an error.
pub trait ImageResolver {
    fn resolve(&self, post_id: u64, size: ImageSize) -> Option<ImageRef>;
}

/// Transforms raw authored markup into display markup (markdown expansion,
/// shortcode processing, embed resolution — whatever the host pipeline does).
/// Sanitization runs after this, in the body composer.
pub trait ContentFilter {
    fn filter(&self, raw: &str) -> String;
}

/// Produces the rendered comment-thread fragment for a post. The body
/// composer strips script tags from this output the same way it does for
/// content, so a renderer that emits inline scripts is safe to plug in.
pub trait CommentsRenderer {
    fn render(&self, post_id: u64) -> String;
}

/// Supplies the approved-comment count and open/closed flag for a post.
pub trait CommentSource {
    fn summary(&self, post_id: u64) -> CommentSummary;
}

/// Supplies ordered term lists for a post. Order is the upstream's; the
/// renderers never re-sort.
pub trait TaxonomySource {
    fn tags(&self, post_id: u64) -> Vec<Term>;
    fn categories(&self, post_id: u64) -> Vec<Term>;
}

/// Supplies the parent chain for ancestry depth computation.
pub trait PostSource {
    fn get(&self, post_id: u64) -> Option<Post>;
    fn parent(&self, post_id: u64) -> Option<u64>;
}

/// Markdown content filter backed by pulldown-cmark.
pub struct MarkdownFilter;

impl ContentFilter for MarkdownFilter {
    fn filter(&self, raw: &str) -> String {
        let parser = Parser::new(raw);
        let mut out = String::new();
        md_html::push_html(&mut out, parser);
        out
    }
}

/// Pass-through filter for pre-rendered HTML content. The only transform is
/// stripping `#more-N` jump anchors left over from teaser links.
pub struct RawHtmlFilter;

impl ContentFilter for RawHtmlFilter {
    fn filter(&self, raw: &str) -> String {
        sanitize::strip_more_anchors(raw)
    }
}

/// Comments renderer for hosts without a comment system: always empty.
pub struct NoComments;

impl CommentsRenderer for NoComments {
    fn render(&self, _post_id: u64) -> String {
        String::new()
    }
}

/// Parent walks are capped here so malformed (cyclic) parent data degrades
/// to a finite depth instead of hanging the render.
const MAX_ANCESTRY_HOPS: u32 = 64;

/// Depth of a post in the page hierarchy, by walking the parent chain.
///
/// A root post has depth 1 and each ancestor adds one. The configured front
/// page starts from −1, so a front page with no parent reports 0.
pub fn ancestry_depth(source: &dyn PostSource, post_id: u64, front_page: Option<u64>) -> i64 {
    let mut depth: i64 = if front_page == Some(post_id) { -1 } else { 0 };
    let mut current = Some(post_id);
    let mut hops = 0;
    while let Some(id) = current {
        depth += 1;
        hops += 1;
        if hops >= MAX_ANCESTRY_HOPS {
            break;
        }
        current = source.parent(id);
    }
    depth
}
