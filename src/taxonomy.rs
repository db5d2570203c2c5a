//! Taxonomy term list fragments.
//!
//! Renders a post's tags and categories as display fragments in two modes:
//! plain (icon marker + bare names) and linked (text label + one anchor per
//! term). An empty term list always yields an empty fragment — callers never
//! get a bare container to style around.
//!
//! Term names are interpolated verbatim by default so the fragments stay
//! byte-compatible with existing consumers; set `render.escape_term_names`
//! in the config if taxonomy names can carry user-supplied markup.

use maud::{Markup, PreEscaped, html};

use crate::config::SiteConfig;
use crate::types::Term;

/// A term name, escaped or verbatim per config.
fn term_name(name: &str, config: &SiteConfig) -> Markup {
    if config.render.escape_term_names {
        PreEscaped(html_escape::encode_text(name).into_owned())
    } else {
        PreEscaped(name.to_string())
    }
}

/// A linked term. Terms without a link degrade to the bare name.
fn term_anchor(term: &Term, class: &str, config: &SiteConfig) -> Markup {
    match &term.link {
        Some(link) => html! { a href=(link) class=(class) { (term_name(&term.name, config)) } },
        None => term_name(&term.name, config),
    }
}

/// Plain tag list: icon marker plus bare names, one trailing space each.
pub fn tag_list(terms: &[Term], config: &SiteConfig) -> String {
    if terms.is_empty() {
        return String::new();
    }
    html! {
        div.tag-link {
            span.icon-tags {}
            @for term in terms {
                (term_name(&term.name, config)) " "
            }
        }
    }
    .into_string()
}

/// Linked tag list: "Tags" label plus one anchor per term, in source order.
pub fn tag_link_list(terms: &[Term], config: &SiteConfig) -> String {
    if terms.is_empty() {
        return String::new();
    }
    html! {
        div.tag-link {
            span.tag-text { (config.labels.tags) }
            @for term in terms {
                (term_anchor(term, "open-tag", config)) " "
            }
        }
    }
    .into_string()
}

/// Plain category list: folder icon plus bare names, one trailing space each.
pub fn category_list(terms: &[Term], config: &SiteConfig) -> String {
    if terms.is_empty() {
        return String::new();
    }
    html! {
        div.category-link {
            span.entypo_icon.icon-folder-open {}
            @for term in terms {
                (term_name(&term.name, config)) " "
            }
        }
    }
    .into_string()
}

/// Linked category list: "Categories" label plus one anchor per term.
pub fn category_link_list(terms: &[Term], config: &SiteConfig) -> String {
    if terms.is_empty() {
        return String::new();
    }
    html! {
        div.category-link {
            span.category-text { (config.labels.categories) }
            @for term in terms {
                (term_anchor(term, "open-category", config)) " "
            }
        }
    }
    .into_string()
}

/// Turn a term name into a CSS-class-safe slug.
///
/// Lowercases, replaces anything non-alphanumeric with dashes, collapses
/// runs, and trims dangling dashes. Used for the `tag-{slug}` and
/// `category-{slug}` entries of the post class list.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.extend(c.to_lowercase());
            prev_dash = false;
        } else if !prev_dash {
            out.push('-');
            prev_dash = true;
        }
    }
    out.trim_matches('-').to_string()
}
