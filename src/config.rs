//! Site configuration module.
//!
//! Everything a host CMS would keep as implicit global state — theme options,
//! image-size registrations, UI labels, share-link targets — is explicit
//! configuration here, loaded from a `config.toml` and passed by reference
//! into every composer call.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! name = "Gridpress"
//! description = ""
//! # front_page = 1            # Post id of the static front page, if any
//!
//! [grid]
//! columns = 4                 # Article columns on the index grid
//!
//! [comments]
//! location = "side"           # "side", "bottom", or "off"
//!
//! [labels]
//! tags = "Tags"
//! categories = "Categories"
//! posted = "Posted"
//! comments = "Comments"
//! ago = "ago"
//! follow_us = "Follow us"
//!
//! [render]
//! escape_term_names = false   # Escape term names in fragments (see below)
//! markdown = true             # Treat post content as markdown
//! excerpt_words = 20          # Word cap for excerpts
//!
//! [images]
//! full_width = [1170, 400]    # Named sizes handed to the image resolver
//! medium_thumbnail = [350, 350]
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! [grid]
//! columns = 3
//! ```
//!
//! Unknown keys are rejected to catch typos early.
//!
//! ## Term-name escaping
//!
//! `render.escape_term_names` defaults to `false` to keep fragment output
//! byte-compatible with existing consumers, which means term names are
//! interpolated into markup verbatim. If your taxonomy names can carry
//! user-supplied markup, turn this on.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::types::ImageSize;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity (name, tagline, optional front page).
    pub site: SiteInfo,
    /// Index grid layout.
    pub grid: GridConfig,
    /// Comment display placement.
    pub comments: CommentsConfig,
    /// UI label strings.
    pub labels: Labels,
    /// Rendering behavior switches.
    pub render: RenderConfig,
    /// Named image-size dimensions handed to the image resolver.
    pub images: ImagesConfig,
    /// Share-link templates for the post sidebar.
    #[serde(default = "default_share_links")]
    pub share: Vec<ShareLink>,
    /// Navigation social buttons.
    pub nav: NavConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteInfo::default(),
            grid: GridConfig::default(),
            comments: CommentsConfig::default(),
            labels: Labels::default(),
            render: RenderConfig::default(),
            images: ImagesConfig::default(),
            share: default_share_links(),
            nav: NavConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.columns == 0 || self.grid.columns > 12 {
            return Err(ConfigError::Validation("grid.columns must be 1-12".into()));
        }
        if self.render.excerpt_words == 0 {
            return Err(ConfigError::Validation(
                "render.excerpt_words must be at least 1".into(),
            ));
        }
        for link in &self.share {
            if !link.href.contains("{url}") {
                return Err(ConfigError::Validation(format!(
                    "share link '{}' must contain a {{url}} placeholder",
                    link.class
                )));
            }
        }
        for size in ImageSize::ALL {
            let [w, h] = self.images.dimensions(size);
            if w == 0 || h == 0 {
                return Err(ConfigError::Validation(format!(
                    "images.{} dimensions must be non-zero",
                    size.as_str()
                )));
            }
        }
        Ok(())
    }
}

/// Site identity settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Site name, appended to document titles.
    pub name: String,
    /// Tagline, shown in the document title on the front page.
    pub description: String,
    /// Post id of the static front page, if one is configured.
    /// Affects ancestry depth (the front page counts as depth −1).
    pub front_page: Option<u64>,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "Gridpress".to_string(),
            description: String::new(),
            front_page: None,
        }
    }
}

/// Index grid layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Number of article columns on the index grid (1-12).
    pub columns: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { columns: 4 }
    }
}

/// Where the comment thread is displayed relative to the post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentLocation {
    Side,
    Bottom,
    Off,
}

/// Comment display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommentsConfig {
    pub location: CommentLocation,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            location: CommentLocation::Side,
        }
    }
}

/// UI label strings (the translatable surface of the fragments).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Labels {
    pub tags: String,
    pub categories: String,
    pub posted: String,
    pub comments: String,
    /// Suffix appended to relative dates ("3 hours ago").
    pub ago: String,
    pub follow_us: String,
    /// Notice shown in the password prompt for protected posts.
    pub password_notice: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            tags: "Tags".to_string(),
            categories: "Categories".to_string(),
            posted: "Posted".to_string(),
            comments: "Comments".to_string(),
            ago: "ago".to_string(),
            follow_us: "Follow us".to_string(),
            password_notice:
                "This content is password protected. To view it please enter your password below."
                    .to_string(),
        }
    }
}

/// Rendering behavior switches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Escape term names before embedding them in fragments.
    /// Off by default for output compatibility; see the module docs.
    pub escape_term_names: bool,
    /// Treat post content as markdown (`false` = pre-rendered HTML).
    pub markdown: bool,
    /// Word cap for generated excerpts.
    pub excerpt_words: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            escape_term_names: false,
            markdown: true,
            excerpt_words: 20,
        }
    }
}

/// Named image-size dimensions as `[width, height]`.
///
/// These are declarative registration data for the image resolver; the
/// library never resizes anything itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    pub small_thumbnail: [u32; 2],
    pub full_width: [u32; 2],
    pub thumbnail: [u32; 2],
    pub thumbnail_large: [u32; 2],
    pub medium_thumbnail: [u32; 2],
    pub related_thumbnail: [u32; 2],
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            small_thumbnail: [70, 70],
            full_width: [1170, 400],
            thumbnail: [490, 318],
            thumbnail_large: [650, 411],
            medium_thumbnail: [350, 350],
            related_thumbnail: [255, 170],
        }
    }
}

impl ImagesConfig {
    /// Dimensions registered for a named size.
    pub fn dimensions(&self, size: ImageSize) -> [u32; 2] {
        match size {
            ImageSize::SmallThumbnail => self.small_thumbnail,
            ImageSize::FullWidth => self.full_width,
            ImageSize::Thumbnail => self.thumbnail,
            ImageSize::ThumbnailLarge => self.thumbnail_large,
            ImageSize::MediumThumbnail => self.medium_thumbnail,
            ImageSize::RelatedThumbnail => self.related_thumbnail,
        }
    }
}

/// A share-link template for the post sidebar.
///
/// `href` may contain `{url}` (replaced with the post permalink) and
/// `{title}` (replaced with the form-urlencoded post title).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShareLink {
    /// Icon class on the rendered anchor (e.g. `"icon-twitter"`).
    pub class: String,
    /// URL template with `{url}`/`{title}` placeholders.
    pub href: String,
}

fn default_share_links() -> Vec<ShareLink> {
    vec![
        ShareLink {
            class: "icon-twitter".to_string(),
            href: "http://twitter.com/share?url={url}&text={title}".to_string(),
        },
        ShareLink {
            class: "icon-facebook".to_string(),
            href: "http://www.facebook.com/sharer.php?u={url}".to_string(),
        },
        ShareLink {
            class: "icon-gplus".to_string(),
            href: "https://plus.google.com/share?url={url}".to_string(),
        },
    ]
}

/// A navigation social button (text + target URL).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavButton {
    pub text: String,
    pub url: String,
}

impl Default for NavButton {
    fn default() -> Self {
        Self {
            text: String::new(),
            url: String::new(),
        }
    }
}

/// Navigation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Social buttons rendered in the "Follow us" block. Empty = no block.
    pub buttons: Vec<NavButton>,
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from a `config.toml` path.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result. A missing file yields the stock defaults.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Gridpress Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
# Site name, appended to document titles.
name = "Gridpress"

# Tagline, shown in the document title on the front page.
description = ""

# Post id of the static front page, if one is configured.
# front_page = 1

# ---------------------------------------------------------------------------
# Index grid
# ---------------------------------------------------------------------------
[grid]
# Number of article columns on the index grid (1-12).
columns = 4

# ---------------------------------------------------------------------------
# Comments
# ---------------------------------------------------------------------------
[comments]
# Where the comment thread is displayed: "side", "bottom", or "off".
location = "side"

# ---------------------------------------------------------------------------
# Labels (the translatable surface of the fragments)
# ---------------------------------------------------------------------------
[labels]
tags = "Tags"
categories = "Categories"
posted = "Posted"
comments = "Comments"
ago = "ago"
follow_us = "Follow us"
password_notice = "This content is password protected. To view it please enter your password below."

# ---------------------------------------------------------------------------
# Rendering
# ---------------------------------------------------------------------------
[render]
# Escape term names before embedding them in fragments. Off by default for
# output compatibility with consumers of the unescaped fragments.
escape_term_names = false

# Treat post content as markdown (false = pre-rendered HTML).
markdown = true

# Word cap for generated excerpts.
excerpt_words = 20

# ---------------------------------------------------------------------------
# Named image sizes, as [width, height]. These are registration data for
# the image resolver; nothing is resized by gridpress itself.
# ---------------------------------------------------------------------------
[images]
small_thumbnail = [70, 70]
full_width = [1170, 400]
thumbnail = [490, 318]
thumbnail_large = [650, 411]
medium_thumbnail = [350, 350]
related_thumbnail = [255, 170]

# ---------------------------------------------------------------------------
# Share links. {url} is replaced with the post permalink, {title} with the
# form-urlencoded post title.
# ---------------------------------------------------------------------------
[[share]]
class = "icon-twitter"
href = "http://twitter.com/share?url={url}&text={title}"

[[share]]
class = "icon-facebook"
href = "http://www.facebook.com/sharer.php?u={url}"

[[share]]
class = "icon-gplus"
href = "https://plus.google.com/share?url={url}"

# ---------------------------------------------------------------------------
# Navigation social buttons ("Follow us" block). No buttons = no block.
# ---------------------------------------------------------------------------
# [[nav.buttons]]
# text = "Twitter"
# url = "https://twitter.com/example"
"##
}

/// Generate the index-grid CSS rule from the configured column count.
pub fn grid_css(grid: &GridConfig) -> String {
    let width = 100.0 / f64::from(grid.columns);
    format!(".main-content article {{ width: {width}%; }}")
}

/// Compute the body class list for a view.
///
/// The comment-location class is always present (unless comments are off);
/// single-post and page views additionally get the pull-to-side classes.
pub fn body_classes(config: &SiteConfig, is_single: bool) -> Vec<String> {
    let mut classes = Vec::new();
    match config.comments.location {
        CommentLocation::Side => classes.push("post-side-comments".to_string()),
        CommentLocation::Bottom => classes.push("post-bottom-comments".to_string()),
        CommentLocation::Off => {}
    }
    if is_single {
        classes.push("customize-support".to_string());
        classes.push("pull-content-to-side".to_string());
        classes.push("pull-content-to-side-ended".to_string());
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = SiteConfig::default();
        assert_eq!(config.site.name, "Gridpress");
        assert_eq!(config.grid.columns, 4);
        assert_eq!(config.comments.location, CommentLocation::Side);
        assert_eq!(config.labels.tags, "Tags");
        assert!(!config.render.escape_term_names);
        assert_eq!(config.render.excerpt_words, 20);
        assert_eq!(config.images.full_width, [1170, 400]);
        assert_eq!(config.share.len(), 3);
        assert!(config.nav.buttons.is_empty());
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[grid]
columns = 3
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.grid.columns, 3);
        // Default values preserved
        assert_eq!(config.labels.posted, "Posted");
        assert_eq!(config.images.medium_thumbnail, [350, 350]);
    }

    #[test]
    fn parse_comment_location() {
        let toml = r#"
[comments]
location = "bottom"
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.comments.location, CommentLocation::Bottom);
    }

    #[test]
    fn parse_share_links_replaces_defaults() {
        let toml = r#"
[[share]]
class = "icon-mastodon"
href = "https://toot.example/share?url={url}"
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.share.len(), 1);
        assert_eq!(config.share[0].class, "icon-mastodon");
    }

    #[test]
    fn parse_nav_buttons() {
        let toml = r#"
[[nav.buttons]]
text = "Twitter"
url = "https://twitter.com/example"
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.nav.buttons.len(), 1);
        assert_eq!(config.nav.buttons[0].text, "Twitter");
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("config.toml")).unwrap();
        assert_eq!(config.grid.columns, 4);
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[site]
name = "My Blog"

[labels]
tags = "Etiquetas"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.site.name, "My Blog");
        assert_eq!(config.labels.tags, "Etiquetas");
        // Unspecified values should be defaults
        assert_eq!(config.labels.categories, "Categories");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "this is not valid toml [[[").unwrap();
        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let toml_str = r#"
[grid]
colums = 4
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let toml_str = r#"
[gird]
columns = 4
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_columns_out_of_range() {
        let mut config = SiteConfig::default();
        config.grid.columns = 0;
        assert!(config.validate().is_err());
        config.grid.columns = 13;
        assert!(config.validate().is_err());
        config.grid.columns = 12;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_excerpt_words_zero() {
        let mut config = SiteConfig::default();
        config.render.excerpt_words = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("excerpt_words"));
    }

    #[test]
    fn validate_share_link_without_url_placeholder() {
        let mut config = SiteConfig::default();
        config.share.push(ShareLink {
            class: "icon-broken".to_string(),
            href: "https://example.com/share".to_string(),
        });
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("icon-broken"));
    }

    #[test]
    fn validate_zero_image_dimension() {
        let mut config = SiteConfig::default();
        config.images.thumbnail = [0, 318];
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[grid]
columns = 40
"#,
        )
        .unwrap();
        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str("columns = 4").unwrap();
        let overlay: toml::Value = toml::from_str("columns = 2").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("columns").unwrap().as_integer(), Some(2));
    }

    #[test]
    fn merge_toml_table_merge_preserves_base_keys() {
        let base: toml::Value = toml::from_str(
            r#"
[labels]
tags = "Tags"
posted = "Posted"
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[labels]
tags = "Topics"
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let labels = merged.get("labels").unwrap();
        assert_eq!(labels.get("tags").unwrap().as_str(), Some("Topics"));
        assert_eq!(labels.get("posted").unwrap().as_str(), Some("Posted"));
    }

    #[test]
    fn resolve_config_with_overlay() {
        let base = stock_defaults_value();
        let overlay: toml::Value = toml::from_str(
            r#"
[grid]
columns = 6
"#,
        )
        .unwrap();
        let config = resolve_config(base, Some(overlay)).unwrap();
        assert_eq!(config.grid.columns, 6);
        assert_eq!(config.labels.tags, "Tags");
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_is_valid_toml() {
        let content = stock_config_toml();
        let _: toml::Value = toml::from_str(content).expect("stock config must be valid TOML");
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config.grid.columns, 4);
        assert_eq!(config.comments.location, CommentLocation::Side);
        assert_eq!(config.images.full_width, [1170, 400]);
        assert_eq!(config.share.len(), 3);
        assert_eq!(config.labels.ago, "ago");
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        assert!(content.contains("[site]"));
        assert!(content.contains("[grid]"));
        assert!(content.contains("[comments]"));
        assert!(content.contains("[labels]"));
        assert!(content.contains("[render]"));
        assert!(content.contains("[images]"));
        assert!(content.contains("[[share]]"));
    }

    // =========================================================================
    // CSS and body class tests
    // =========================================================================

    #[test]
    fn grid_css_four_columns() {
        let css = grid_css(&GridConfig { columns: 4 });
        assert_eq!(css, ".main-content article { width: 25%; }");
    }

    #[test]
    fn grid_css_three_columns_fractional() {
        let css = grid_css(&GridConfig { columns: 3 });
        assert!(css.starts_with(".main-content article { width: 33.333"));
    }

    #[test]
    fn body_classes_side_comments() {
        let config = SiteConfig::default();
        let classes = body_classes(&config, false);
        assert_eq!(classes, vec!["post-side-comments"]);
    }

    #[test]
    fn body_classes_bottom_comments() {
        let mut config = SiteConfig::default();
        config.comments.location = CommentLocation::Bottom;
        let classes = body_classes(&config, false);
        assert_eq!(classes, vec!["post-bottom-comments"]);
    }

    #[test]
    fn body_classes_off_contributes_nothing() {
        let mut config = SiteConfig::default();
        config.comments.location = CommentLocation::Off;
        assert!(body_classes(&config, false).is_empty());
    }

    #[test]
    fn body_classes_single_view_pull_classes() {
        let config = SiteConfig::default();
        let classes = body_classes(&config, true);
        assert!(classes.contains(&"pull-content-to-side".to_string()));
        assert!(classes.contains(&"customize-support".to_string()));
    }
}
