//! Site chrome fragments: document title and the social navigation block.
//!
//! These sit outside any single post's body/sidebar but follow the same
//! rules — pure functions over explicit inputs, empty output for empty
//! input.

use maud::{PreEscaped, html};

use crate::config::SiteConfig;

/// Assemble the `<title>` text for a view.
///
/// The site name is always present; the front page gets the site
/// description appended, and paged views get a "Page N" suffix for N ≥ 2.
pub fn document_title(
    page_title: &str,
    sep: &str,
    page: u32,
    is_front: bool,
    config: &SiteConfig,
) -> String {
    let mut title = if page_title.is_empty() {
        config.site.name.clone()
    } else {
        format!("{page_title} {sep} {}", config.site.name)
    };
    if is_front && !config.site.description.is_empty() {
        title = format!("{title} {sep} {}", config.site.description);
    }
    if page >= 2 {
        title = format!("{title} {sep} Page {page}");
    }
    title
}

/// A single social navigation anchor, or `None` when there is nothing to
/// link (both text and URL empty).
pub fn nav_link(text: &str, url: &str) -> Option<String> {
    if text.is_empty() && url.is_empty() {
        return None;
    }
    Some(
        html! {
            a href=(url) class="social-button" target="_blank" { (text) }
        }
        .into_string(),
    )
}

/// The "Follow us" block from the configured buttons. No buttons, no block.
pub fn nav_social(config: &SiteConfig) -> String {
    let links: Vec<String> = config
        .nav
        .buttons
        .iter()
        .filter_map(|b| nav_link(&b.text, &b.url))
        .collect();
    if links.is_empty() {
        return String::new();
    }
    html! {
        div.navigation-social {
            h6 { (config.labels.follow_us) ":" }
            @for link in &links {
                (PreEscaped(link.as_str()))
            }
        }
    }
    .into_string()
}
