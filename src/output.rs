//! CLI output formatting.
//!
//! Output is information-centric: the primary display for every post is its
//! title and positional index, with the permalink and resolved artifacts as
//! indented context lines. Each command has a `format_*` function (returns
//! `Vec<String>`) for testability and a `print_*` wrapper that writes to
//! stdout. Format functions are pure — no I/O, no side effects.
//!
//! ```text
//! Posts
//! 001 Hello (2 comments)
//!     Permalink: https://example.com/hello
//!     Image: https://example.com/i/1-350.jpg
//! 002 Follow-up
//!     Permalink: https://example.com/follow-up
//!
//! Rendered 2 posts
//! ```

use crate::collab::ancestry_depth;
use crate::config::SiteConfig;
use crate::manifest::RenderManifest;
use crate::sanitize::excerpt;
use crate::types::ExtraFields;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Header line for one post: index + title, with the comment count when
/// there is at least one.
fn post_header(index: usize, title: &str, comments: u32) -> String {
    if comments > 0 {
        let noun = if comments == 1 { "comment" } else { "comments" };
        format!("{} {} ({} {})", format_index(index), title, comments, noun)
    } else {
        format!("{} {}", format_index(index), title)
    }
}

/// Format the render summary: one block per post plus a trailing total.
///
/// Context lines per post: permalink, a word-capped plain-text excerpt
/// (`render.excerpt_words`), hierarchy depth when it differs from a root
/// post's (child posts, and the configured front page), and the resolved
/// card image.
pub fn format_render_output(
    manifest: &RenderManifest,
    records: &[ExtraFields],
    config: &SiteConfig,
) -> Vec<String> {
    let mut lines = vec!["Posts".to_string()];
    for (i, (entry, record)) in manifest.posts.iter().zip(records).enumerate() {
        lines.push(post_header(i + 1, &entry.post.title, record.comments));
        lines.push(format!("    Permalink: {}", entry.post.permalink));
        let teaser = excerpt(&entry.post.content, config.render.excerpt_words);
        if !teaser.is_empty() {
            lines.push(format!("    Excerpt: {teaser}"));
        }
        let depth = ancestry_depth(manifest, entry.post.id, config.site.front_page);
        if depth != 1 {
            lines.push(format!("    Depth: {depth}"));
        }
        if let Some(src) = &record.image_src {
            lines.push(format!("    Image: {src}"));
        }
    }
    lines.push(String::new());
    let noun = if records.len() == 1 { "post" } else { "posts" };
    lines.push(format!("Rendered {} {noun}", records.len()));
    lines
}

/// Format lint findings; an empty slice formats as a single all-clear line.
pub fn format_lint_output(warnings: &[String]) -> Vec<String> {
    if warnings.is_empty() {
        return vec!["Manifest is valid".to_string()];
    }
    let mut lines: Vec<String> = warnings.iter().map(|w| format!("Warning: {w}")).collect();
    let noun = if warnings.len() == 1 {
        "warning"
    } else {
        "warnings"
    };
    lines.push(format!("{} {noun}", warnings.len()));
    lines
}

pub fn print_render_output(manifest: &RenderManifest, records: &[ExtraFields], config: &SiteConfig) {
    for line in format_render_output(manifest, records, config) {
        println!("{line}");
    }
}

pub fn print_lint_output(warnings: &[String]) {
    for line in format_lint_output(warnings) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::manifest::render_all;
    use crate::test_helpers::sample_manifest_json;

    fn manifest() -> RenderManifest {
        serde_json::from_str(&sample_manifest_json()).unwrap()
    }

    #[test]
    fn render_output_lists_every_post() {
        let m = manifest();
        let config = SiteConfig::default();
        let records = render_all(&m, &config);
        let lines = format_render_output(&m, &records, &config);
        assert_eq!(lines[0], "Posts");
        assert_eq!(lines[1], "001 Hello (2 comments)");
        assert_eq!(lines[2], "    Permalink: https://example.com/hello");
        assert_eq!(lines[3], "    Excerpt: The **first** post.");
        assert_eq!(lines[4], "    Image: https://example.com/i/1-350.jpg");
        assert_eq!(lines[5], "002 Follow-up");
        assert_eq!(lines.last().unwrap(), "Rendered 2 posts");
    }

    #[test]
    fn excerpt_respects_configured_word_cap() {
        let m = manifest();
        let default_config = SiteConfig::default();
        let records = render_all(&m, &default_config);
        let default_lines = format_render_output(&m, &records, &default_config);

        let mut capped_config = SiteConfig::default();
        capped_config.render.excerpt_words = 1;
        let capped_lines = format_render_output(&m, &records, &capped_config);

        assert_ne!(default_lines, capped_lines);
        assert!(capped_lines.contains(&"    Excerpt: The…".to_string()));
    }

    #[test]
    fn child_post_gets_depth_line() {
        let m = manifest();
        let config = SiteConfig::default();
        let records = render_all(&m, &config);
        let lines = format_render_output(&m, &records, &config);
        // Post 2 is a child of post 1; root posts carry no depth line
        assert!(lines.contains(&"    Depth: 2".to_string()));
        assert_eq!(lines.iter().filter(|l| l.starts_with("    Depth:")).count(), 1);
    }

    #[test]
    fn front_page_setting_changes_depth() {
        let m = manifest();
        let mut config = SiteConfig::default();
        config.site.front_page = Some(1);
        let records = render_all(&m, &config);
        let lines = format_render_output(&m, &records, &config);
        // The configured front page starts below root depth
        assert!(lines.contains(&"    Depth: 0".to_string()));
    }

    #[test]
    fn singular_comment_count() {
        assert_eq!(post_header(1, "Hello", 1), "001 Hello (1 comment)");
        assert_eq!(post_header(1, "Hello", 0), "001 Hello");
    }

    #[test]
    fn lint_output_all_clear() {
        assert_eq!(format_lint_output(&[]), vec!["Manifest is valid"]);
    }

    #[test]
    fn lint_output_prefixes_warnings() {
        let warnings = vec!["duplicate post ids in manifest".to_string()];
        let lines = format_lint_output(&warnings);
        assert_eq!(lines[0], "Warning: duplicate post ids in manifest");
        assert_eq!(lines[1], "1 warning");
    }
}
