//! Post body composition.
//!
//! Assembles a single post's primary HTML view: optional full-width image,
//! title, filtered and sanitized content (or a password prompt for
//! protected posts), and the comment thread in its container. Every part is
//! fail-soft — an unresolvable image or empty comment thread degrades to an
//! empty sub-fragment, never an error.

use maud::{PreEscaped, html};

use crate::collab::{CommentsRenderer, ContentFilter, ImageResolver};
use crate::config::SiteConfig;
use crate::sanitize::{escape_cdata, strip_scripts};
use crate::types::{ImageSize, Post};

/// Render a post's body fragment.
///
/// Content passes through the injected filter, then the CDATA-terminator
/// escape, then the script stripper. The comments renderer's output is
/// script-stripped by the same rule, so collaborator-injected scripts never
/// reach the fragment either.
pub fn render_body(
    post: &Post,
    images: &dyn ImageResolver,
    filter: &dyn ContentFilter,
    comments: &dyn CommentsRenderer,
    config: &SiteConfig,
) -> String {
    let mut out = String::new();

    if let Some(img) = images.resolve(post.id, ImageSize::FullWidth) {
        out.push_str(
            &html! {
                div.open-post-image {
                    img src=(img.src) class="single-open-post-image" alt="Post with image";
                }
            }
            .into_string(),
        );
    }

    // Title is interpolated verbatim; upstream owns its encoding.
    out.push_str(
        &html! { h1 { (PreEscaped(post.title.as_str())) } }.into_string(),
    );

    if post.password_protected {
        out.push_str(&password_form(post.id, config));
    } else {
        let filtered = filter.filter(&post.content);
        out.push_str(&strip_scripts(&escape_cdata(&filtered)));
    }

    let thread = strip_scripts(&comments.render(post.id));
    out.push_str(
        &html! {
            div.clearfix {}
            div.comments-container { (PreEscaped(thread)) }
        }
        .into_string(),
    );

    out
}

/// The password prompt substituted for protected content.
///
/// The form action is left empty for the host to rewrite on delivery;
/// the notice text comes from `labels.password_notice`.
fn password_form(post_id: u64, config: &SiteConfig) -> String {
    let field_id = format!("pwbox-{post_id}");
    html! {
        form.post-password-form method="post" {
            p { (config.labels.password_notice) }
            p {
                label for=(field_id.clone()) {
                    "Password: "
                    input name="post_password" id=(field_id) type="password" size="20";
                }
                " "
                input type="submit" name="Submit" value="Enter";
            }
        }
    }
    .into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::{NoComments, RawHtmlFilter};
    use crate::test_helpers::{FixedComments, FixedImages, NoImages, sample_post};

    fn config() -> SiteConfig {
        SiteConfig::default()
    }

    #[test]
    fn includes_image_block_when_resolvable() {
        let post = sample_post();
        let out = render_body(&post, &FixedImages, &RawHtmlFilter, &NoComments, &config());
        assert!(out.contains(r#"<div class="open-post-image">"#));
        assert!(out.contains(r#"class="single-open-post-image""#));
        assert!(out.contains("full_width"));
    }

    #[test]
    fn no_image_block_when_unresolvable() {
        let post = sample_post();
        let out = render_body(&post, &NoImages, &RawHtmlFilter, &NoComments, &config());
        assert!(!out.contains("open-post-image"));
        // Still renders the rest
        assert!(out.contains("<h1>"));
    }

    #[test]
    fn title_rendered_verbatim_in_h1() {
        let mut post = sample_post();
        post.title = "Ben & Jerry".to_string();
        let out = render_body(&post, &NoImages, &RawHtmlFilter, &NoComments, &config());
        assert!(out.contains("<h1>Ben & Jerry</h1>"));
    }

    #[test]
    fn content_scripts_stripped() {
        let mut post = sample_post();
        post.content = "<p>hi</p><script>alert(1)</script>".to_string();
        let out = render_body(&post, &NoImages, &RawHtmlFilter, &NoComments, &config());
        assert!(out.contains("<p>hi</p>"));
        assert!(!out.contains("<script"));
    }

    #[test]
    fn cdata_terminator_escaped() {
        let mut post = sample_post();
        post.content = "<p>data ]]> end</p>".to_string();
        let out = render_body(&post, &NoImages, &RawHtmlFilter, &NoComments, &config());
        assert!(out.contains("]]&gt;"));
        assert!(!out.contains("]]>"));
    }

    #[test]
    fn password_protected_never_leaks_content() {
        let mut post = sample_post();
        post.password_protected = true;
        post.content = "SECRET-CONTENT-MARKER".to_string();
        let out = render_body(&post, &NoImages, &RawHtmlFilter, &NoComments, &config());
        assert!(!out.contains("SECRET-CONTENT-MARKER"));
        assert!(out.contains(r#"<form class="post-password-form""#));
        assert!(out.contains("pwbox-7"));
        assert!(out.contains(&config().labels.password_notice));
    }

    #[test]
    fn comments_wrapped_in_container() {
        let post = sample_post();
        let comments = FixedComments("<p>Nice post!</p>".to_string());
        let out = render_body(&post, &NoImages, &RawHtmlFilter, &comments, &config());
        assert!(out.contains(r#"<div class="clearfix"></div>"#));
        assert!(out.contains(r#"<div class="comments-container"><p>Nice post!</p></div>"#));
    }

    #[test]
    fn comment_scripts_stripped_too() {
        let post = sample_post();
        let comments = FixedComments("<p>ok</p><SCRIPT src=x>payload()</SCRIPT>".to_string());
        let out = render_body(&post, &NoImages, &RawHtmlFilter, &comments, &config());
        assert!(out.contains("<p>ok</p>"));
        assert!(!out.to_lowercase().contains("<script"));
    }

    #[test]
    fn idempotent_for_fixed_inputs() {
        let post = sample_post();
        let a = render_body(&post, &FixedImages, &RawHtmlFilter, &NoComments, &config());
        let b = render_body(&post, &FixedImages, &RawHtmlFilter, &NoComments, &config());
        assert_eq!(a, b);
    }
}
