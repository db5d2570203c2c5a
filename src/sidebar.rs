//! Post sidebar composition.
//!
//! Secondary post metadata as one fragment: posted-ago date, linked tag and
//! category lists, comment count (only while comments are open), and the
//! share links built from the configured templates.

use chrono::{DateTime, Utc};
use maud::html;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::SiteConfig;
use crate::taxonomy::{category_link_list, tag_link_list};
use crate::timeago::time_ago;
use crate::types::{CommentSummary, Post, Term};

/// Render a post's sidebar fragment.
///
/// `now` is passed explicitly so identical inputs always produce identical
/// fragments; callers decide what "now" means (usually request time).
pub fn render_sidebar(
    post: &Post,
    summary: &CommentSummary,
    tags: &[Term],
    categories: &[Term],
    now: DateTime<Utc>,
    config: &SiteConfig,
) -> String {
    let mut out = String::new();

    let date = time_ago(post.published, now, &config.labels.ago);
    out.push_str(
        &html! {
            span.single-open-posted { (config.labels.posted) }
            span.single-open-posted-date { (date) }
        }
        .into_string(),
    );

    out.push_str(&tag_link_list(tags, config));
    out.push_str(&category_link_list(categories, config));

    if summary.open {
        out.push_str(
            &html! {
                div.side-comments {
                    span.single-open-comment { (config.labels.comments) }
                    span.single-open-comment-count { (summary.approved) }
                }
            }
            .into_string(),
        );
    }

    out.push_str(&share_links(post, config));
    out
}

/// Form-style query encoding: `-`, `_`, and `.` pass through and spaces
/// become `+`, everything else non-alphanumeric is percent-encoded.
const FORM_URLENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b' ');

fn form_urlencode(input: &str) -> String {
    utf8_percent_encode(input, FORM_URLENCODE)
        .to_string()
        .replace(' ', "+")
}

/// The share-intent anchors, from the configured templates.
///
/// `{url}` is replaced with the permalink verbatim and `{title}` with the
/// form-urlencoded post title. No configured links, no block.
fn share_links(post: &Post, config: &SiteConfig) -> String {
    if config.share.is_empty() {
        return String::new();
    }
    let encoded_title = form_urlencode(&post.title);
    html! {
        div.single-post-share {
            @for link in &config.share {
                @let href = link
                    .href
                    .replace("{url}", &post.permalink)
                    .replace("{title}", &encoded_title);
                a href=(href) class={ "social-icon " (link.class) } target="_blank" {}
            }
        }
    }
    .into_string()
}
