//! # Gridpress
//!
//! A fragment renderer for grid-style blogs. A JSON manifest of posts is the
//! data source: each post carries its raw content plus the data its page
//! needs — taxonomy terms, comment summary, resolved image URLs — and renders
//! to one "extra fields" record an API layer can embed in its per-post
//! response.
//!
//! # Architecture: Composers over Collaborators
//!
//! Rendering is a set of pure composer functions wired to collaborator
//! traits:
//!
//! ```text
//! manifest.json  →  [collaborators]  →  composers  →  extra-fields records
//!                    images, filter,     body,
//!                    comments, terms     sidebar,
//!                                        taxonomy lists
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Testability**: every composer is a pure function from post + config
//!   to a fragment string, so tests assert on output with canned
//!   collaborators and no I/O.
//! - **Reproducibility**: "now" is an explicit input, so a manifest with a
//!   pinned render time produces byte-identical output on every run.
//! - **Fail-soft aggregation**: a missing image, empty term list, or absent
//!   comment thread degrades to a null or empty field, never an error —
//!   one bad post cannot take down a page of records.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`taxonomy`] | Tag and category list fragments, plain and linked, plus slug derivation |
//! | [`body`] | Post body composition: featured image, title, filtered content, comment container |
//! | [`sidebar`] | Post sidebar composition: relative date, linked term lists, comment count, share links |
//! | [`extra`] | Per-post aggregation of all composers into one [`types::ExtraFields`] record |
//! | [`collab`] | Collaborator traits (images, content filter, comments, terms) and stock impls |
//! | [`sanitize`] | Script stripping, CDATA-close escaping, more-anchor removal, excerpts |
//! | [`timeago`] | Human-relative date formatting with explicit "now" |
//! | [`chrome`] | Site chrome: document title assembly and the social navigation block |
//! | [`config`] | `config.toml` loading, validation, merging, and grid CSS generation |
//! | [`manifest`] | The JSON manifest format and its collaborator implementations |
//! | [`types`] | Shared types at the pipeline boundaries (`Post`, `Term`, `ExtraFields`) |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! Fragments are generated with [Maud](https://maud.lambda.xyz/), a
//! compile-time HTML macro system, rather than Handlebars or Tera:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a
//!   runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no
//!   stringly-typed lookups.
//! - **Zero runtime files**: no template directory to ship or get out of
//!   sync.
//!
//! ## Interpolation Is Mostly Unescaped — Deliberately
//!
//! Post titles and term names interpolate verbatim (`PreEscaped`), because
//! upstream data sources commonly deliver them already entity-encoded and
//! double-escaping mangles them. `render.escape_term_names` opts term names
//! into escaping for sources that deliver raw text. Content goes through the
//! script stripper either way — see [`sanitize`] for what that does and does
//! not defend against.
//!
//! ## Explicit "Now"
//!
//! No composer reads the clock. The render time flows in as a parameter
//! (pinned in the manifest, or wall clock at the CLI boundary), so the
//! library layer is deterministic end to end.

pub mod body;
pub mod chrome;
pub mod collab;
pub mod config;
pub mod extra;
pub mod manifest;
pub mod output;
pub mod sanitize;
pub mod sidebar;
pub mod taxonomy;
pub mod timeago;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
