//! Underline extension for `md-inline`.
//!
//! Turns `__text__` into an underline element instead of strong emphasis, and
//! handles underline combined with single-star emphasis:
//!
//! ```text
//! __under__      -> <u>under</u>
//! __*em*under__  -> <u><em>em</em>under</u>
//! *__em__under*  -> <em><u>em</u>under</em>
//! ```
//!
//! The tag and an optional class are set through [`UnderlineConfig`].
//!
//! # Limitations
//!
//! - Bold, italic and underline together (`***__combine-3__***`) are not
//!   nested correctly.
//! - Only `*` works as the emphasis delimiter in combined forms, so
//!   `___underline-with-em___` is not treated as emphasis.
//!
//! # Example
//!
//! ```
//! use md_inline::Markdown;
//! use md_underline::{UnderlineConfig, UnderlineExtension};
//!
//! let config = UnderlineConfig::default().with_class("under");
//! let md = Markdown::new()
//!     .with_extension(&UnderlineExtension::new(config))
//!     .unwrap();
//!
//! assert_eq!(
//!     md.convert("__*em*under__"),
//!     r#"<p><u class="under"><em>em</em>under</u></p>"#
//! );
//! ```

mod config;
mod extension;
mod pattern;

pub use config::{ConfigError, DEFAULT_TAG, UnderlineConfig};
pub use extension::{EM_UNDERLINE, Registration, UNDERLINE, UNDERLINE_EM, UnderlineExtension};
pub use pattern::{EmUnderlinePattern, Nesting, UnderlinePattern};
