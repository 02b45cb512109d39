//! Registration of the underline rules.

use md_inline::{Extension, InlinePattern, NOT_STRONG, PatternRegistry, Position, RegistryError};

use crate::{EmUnderlinePattern, Nesting, UnderlineConfig, UnderlinePattern};

/// Rule name for `*..__x__..*`.
pub const EM_UNDERLINE: &str = "em_underline";
/// Rule name for `__..*x*..__`.
pub const UNDERLINE_EM: &str = "underline_em";
/// Rule name for `__x__`.
pub const UNDERLINE: &str = "underline";

/// A rule together with its name and insertion point.
pub struct Registration {
    pub name: &'static str,
    pub pattern: Box<dyn InlinePattern>,
    pub position: Position,
}

/// Underline extension.
///
/// Registers three rules before the host's `not_strong` rule, in this order:
/// `em_underline`, `underline_em`, `underline`. The combined rules must come
/// first, otherwise `__x__` would claim the underscores they need.
///
/// # Example
///
/// ```
/// use md_inline::Markdown;
/// use md_underline::{UnderlineConfig, UnderlineExtension};
///
/// let md = Markdown::new()
///     .with_extension(&UnderlineExtension::default())
///     .unwrap();
/// assert_eq!(md.convert("__under__"), "<p><u>under</u></p>");
///
/// let config = UnderlineConfig::new("span").unwrap().with_class("under");
/// let md = Markdown::new()
///     .with_extension(&UnderlineExtension::new(config))
///     .unwrap();
/// assert_eq!(md.convert_inline("__under__"), r#"<span class="under">under</span>"#);
/// ```
#[derive(Clone, Debug, Default)]
pub struct UnderlineExtension {
    config: UnderlineConfig,
}

impl UnderlineExtension {
    #[must_use]
    pub fn new(config: UnderlineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &UnderlineConfig {
        &self.config
    }

    /// The rules in registration order.
    #[must_use]
    pub fn registrations(&self) -> Vec<Registration> {
        let anchor = Position::before(NOT_STRONG);
        vec![
            Registration {
                name: EM_UNDERLINE,
                pattern: Box::new(EmUnderlinePattern::new(
                    &self.config,
                    Nesting::UnderlineInside,
                )),
                position: anchor.clone(),
            },
            Registration {
                name: UNDERLINE_EM,
                pattern: Box::new(EmUnderlinePattern::new(
                    &self.config,
                    Nesting::UnderlineOutside,
                )),
                position: anchor.clone(),
            },
            Registration {
                name: UNDERLINE,
                pattern: Box::new(UnderlinePattern::new(&self.config)),
                position: anchor,
            },
        ]
    }
}

impl Extension for UnderlineExtension {
    fn name(&self) -> &'static str {
        "underline"
    }

    fn extend(&self, patterns: &mut PatternRegistry) -> Result<(), RegistryError> {
        tracing::debug!(
            tag = self.config.tag(),
            cls = self.config.cls(),
            "Registering underline rules"
        );
        let mut added = Vec::new();
        for registration in self.registrations() {
            let name = registration.name;
            if let Err(err) = patterns.add(name, registration.pattern, registration.position) {
                // Leave the registry as it was: all three rules or none.
                for name in added {
                    patterns.remove(name);
                }
                return Err(err);
            }
            added.push(name);
        }
        Ok(())
    }
}
