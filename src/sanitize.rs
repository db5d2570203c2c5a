//! Display-safety string passes applied to filtered content.
//!
//! These are best-effort, output-compatible transforms, not a real HTML
//! sanitizer: the script stripper is a regex pass and will not catch
//! obfuscated or attribute-based vectors (`onerror=`, `javascript:` URLs,
//! split tags). Consumers feeding untrusted markup through the pipeline
//! should swap the content filter for one that runs a proper sanitizer;
//! these passes exist to keep fragment output stable for existing
//! consumers, and every composer applies them in the same order.

use regex::Regex;
use std::sync::OnceLock;

fn script_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<script\b[^>]*>.*?</script>").expect("script pattern is valid")
    })
}

fn more_anchor_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#more-[0-9]+").expect("more-anchor pattern is valid"))
}

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"))
}

/// Remove `<script>...</script>` blocks, content included.
///
/// Non-greedy and case-insensitive; matches across newlines. An unclosed
/// script tag is left alone (nothing to match).
pub fn strip_scripts(input: &str) -> String {
    script_re().replace_all(input, "").into_owned()
}

/// Escape the CDATA-terminator sequence so content can be embedded in a
/// CDATA section without ending it early.
pub fn escape_cdata(input: &str) -> String {
    input.replace("]]>", "]]&gt;")
}

/// Remove `#more-N` jump fragments from links in pre-rendered content,
/// so following a teaser link does not scroll past the post heading.
pub fn strip_more_anchors(input: &str) -> String {
    more_anchor_re().replace_all(input, "").into_owned()
}

/// Build a plain-text excerpt from markup: strips tags, collapses
/// whitespace, and caps the result at `max_words` words, appending an
/// ellipsis when truncated.
pub fn excerpt(input: &str, max_words: usize) -> String {
    let text = tag_re().replace_all(input, " ");
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        words.join(" ")
    } else {
        let mut out = words[..max_words].join(" ");
        out.push('…');
        out
    }
}
