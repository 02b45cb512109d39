//! Extension trait.

use crate::{PatternRegistry, RegistryError};

/// A bundle of inline rules added to a [`Markdown`](crate::Markdown) instance.
///
/// Extensions insert their patterns relative to the built-in ones, usually
/// with [`Position::Before`](crate::Position::Before) so they are tried
/// before a more generic rule would consume the same delimiters.
pub trait Extension {
    /// Extension name, used for logging.
    fn name(&self) -> &str;

    /// Register the extension's patterns.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistryError`] if a name is already taken or an anchor
    /// pattern is missing from `patterns`.
    fn extend(&self, patterns: &mut PatternRegistry) -> Result<(), RegistryError>;
}
