//! typu-core: The polite concierge of web font delivery
//!
//! Like a hotel concierge who knows every restaurant in town by name, this
//! library turns a font family you merely mention into a stylesheet URL you
//! can actually use. Ask for "Roboto" and it hands you the exact css2 query
//! the Google Fonts delivery service expects, axes sorted, weights in line.
//!
//! ## Three Acts of URL Resolution
//!
//! **Catalog**: Knowing who is who
//! - A typed model of the webfonts catalog (families, variants, axes)
//! - A bundled snapshot embedded at build time, parsed once per process
//!
//! **Provider**: Choosing where the truth comes from
//! - One optional GET against the webfonts API when a key is supplied
//! - Graceful fallback to the bundled snapshot when the network misbehaves,
//!   with a warning so nobody is surprised later
//!
//! **Formatter**: Saying it in css2
//! - Variable fonts get their axes sorted (lowercase tags first, as the
//!   delivery service insists) and their ranges spelled `start..end`
//! - Static fonts get their weights deduplicated and their italics paired
//! - Every record formats to byte-identical output, every time
//!
//! ## A Sample Conversation
//!
//! ```rust,no_run
//! use typu_core::provider::ResolveOptions;
//! use typu_core::resolve::font_url;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! // Stay offline: resolve against the bundled snapshot.
//! let options = ResolveOptions::new().fetch_latest(false);
//! println!("{}", font_url("Roboto", &options).await?);
//!
//! // Or ask the live API, falling back to the snapshot on any hiccup.
//! let options = ResolveOptions::new().with_api_key("AIza...");
//! println!("{}", font_url("Recursive", &options).await?);
//! # Ok(())
//! # }
//! ```
//!
//! ---
//!
//! Crafted with care at FontLab https://www.fontlab.com/

pub mod bundled;
pub mod catalog;
pub mod css2;
pub mod output;
pub mod provider;
pub mod resolve;
