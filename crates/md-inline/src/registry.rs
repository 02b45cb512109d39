//! Named, ordered registry.
//!
//! Entries are kept in the order they are tried. New entries are positioned
//! relative to the ends of the list or to an existing entry by name.

use std::fmt;
use std::str::FromStr;

/// Registry error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    /// An entry with the same name already exists.
    #[error("Duplicate registry entry: {0}")]
    DuplicateName(String),
    /// The anchor named in a position does not exist.
    #[error("Unknown registry anchor: {0}")]
    UnknownAnchor(String),
    /// A location string could not be parsed.
    #[error("Invalid registry position: {0:?}")]
    InvalidPosition(String),
}

/// Where to insert a new entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Position {
    /// First entry.
    Begin,
    /// Last entry.
    End,
    /// Immediately before the named entry.
    Before(String),
    /// Immediately after the named entry.
    After(String),
}

impl Position {
    #[must_use]
    pub fn before(name: impl Into<String>) -> Self {
        Self::Before(name.into())
    }

    #[must_use]
    pub fn after(name: impl Into<String>) -> Self {
        Self::After(name.into())
    }
}

/// Parses the location strings used by Markdown extension APIs:
/// `_begin`, `_end`, `<name` and `>name`.
impl FromStr for Position {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "_begin" => Ok(Self::Begin),
            "_end" => Ok(Self::End),
            _ => {
                if let Some(name) = s.strip_prefix('<').filter(|n| !n.is_empty()) {
                    Ok(Self::before(name))
                } else if let Some(name) = s.strip_prefix('>').filter(|n| !n.is_empty()) {
                    Ok(Self::after(name))
                } else {
                    Err(RegistryError::InvalidPosition(s.to_owned()))
                }
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Begin => f.write_str("_begin"),
            Self::End => f.write_str("_end"),
            Self::Before(name) => write!(f, "<{name}"),
            Self::After(name) => write!(f, ">{name}"),
        }
    }
}

/// Ordered collection of uniquely named items.
///
/// # Example
///
/// ```
/// use md_inline::{Position, Registry};
///
/// let mut registry = Registry::new();
/// registry.add("strong", 1, Position::End).unwrap();
/// registry.add("emphasis", 2, Position::End).unwrap();
/// registry.add("underline", 3, "<strong".parse().unwrap()).unwrap();
///
/// assert_eq!(registry.names().collect::<Vec<_>>(), ["underline", "strong", "emphasis"]);
/// ```
pub struct Registry<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl<T> Registry<T> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert `item` under `name` at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if `name` is taken and
    /// [`RegistryError::UnknownAnchor`] if the position refers to a missing entry.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        item: T,
        position: Position,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        let index = match &position {
            Position::Begin => 0,
            Position::End => self.entries.len(),
            Position::Before(anchor) => self.anchor_index(anchor)?,
            Position::After(anchor) => self.anchor_index(anchor)? + 1,
        };

        tracing::debug!(name = %name, position = %position, index, "Registered entry");
        self.entries.insert(index, (name, item));
        Ok(())
    }

    /// Append an entry whose name is known to be unique.
    pub(crate) fn push(&mut self, name: &str, item: T) {
        debug_assert!(!self.contains(name), "duplicate entry {name}");
        self.entries.push((name.to_owned(), item));
    }

    /// Remove an entry by name, returning its item.
    pub fn remove(&mut self, name: &str) -> Option<T> {
        let index = self.index_of(name)?;
        Some(self.entries.remove(index).1)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, item)| item)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Position of the named entry in try order.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == name)
    }

    /// Entry names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(key, item)| (key.as_str(), item))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn anchor_index(&self, anchor: &str) -> Result<usize, RegistryError> {
        self.index_of(anchor)
            .ok_or_else(|| RegistryError::UnknownAnchor(anchor.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Registry<u32> {
        let mut registry = Registry::new();
        registry.add("a", 1, Position::End).unwrap();
        registry.add("b", 2, Position::End).unwrap();
        registry.add("c", 3, Position::End).unwrap();
        registry
    }

    fn names(registry: &Registry<u32>) -> Vec<&str> {
        registry.names().collect()
    }

    #[test]
    fn test_add_begin_and_end() {
        let mut registry = sample();
        registry.add("first", 0, Position::Begin).unwrap();
        registry.add("last", 9, Position::End).unwrap();

        assert_eq!(names(&registry), ["first", "a", "b", "c", "last"]);
    }

    #[test]
    fn test_add_before_and_after() {
        let mut registry = sample();
        registry.add("x", 10, Position::before("b")).unwrap();
        registry.add("y", 11, Position::after("b")).unwrap();

        assert_eq!(names(&registry), ["a", "x", "b", "y", "c"]);
    }

    #[test]
    fn test_repeated_before_keeps_insertion_order() {
        let mut registry = sample();
        for name in ["one", "two", "three"] {
            registry.add(name, 0, Position::before("b")).unwrap();
        }

        assert_eq!(names(&registry), ["a", "one", "two", "three", "b", "c"]);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = sample();
        let err = registry.add("b", 5, Position::End).unwrap_err();

        assert_eq!(err, RegistryError::DuplicateName("b".to_owned()));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_unknown_anchor_rejected() {
        let mut registry = sample();
        let err = registry.add("x", 5, Position::after("missing")).unwrap_err();

        assert_eq!(err, RegistryError::UnknownAnchor("missing".to_owned()));
        assert!(!registry.contains("x"));
    }

    #[test]
    fn test_parse_positions() {
        assert_eq!("_begin".parse::<Position>().unwrap(), Position::Begin);
        assert_eq!("_end".parse::<Position>().unwrap(), Position::End);
        assert_eq!(
            "<not_strong".parse::<Position>().unwrap(),
            Position::before("not_strong")
        );
        assert_eq!(
            ">not_strong".parse::<Position>().unwrap(),
            Position::after("not_strong")
        );
    }

    #[test]
    fn test_parse_invalid_positions() {
        for input in ["", "<", ">", "strong"] {
            let err = input.parse::<Position>().unwrap_err();
            assert!(
                matches!(err, RegistryError::InvalidPosition(_)),
                "Expected InvalidPosition for {input:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_position_display_round_trip() {
        let position = Position::before("not_strong");
        assert_eq!(position.to_string(), "<not_strong");
    }

    #[test]
    fn test_remove_and_lookup() {
        let mut registry = sample();

        assert_eq!(registry.get("b"), Some(&2));
        assert_eq!(registry.index_of("c"), Some(2));
        assert_eq!(registry.remove("b"), Some(2));
        assert_eq!(registry.remove("b"), None);
        assert_eq!(names(&registry), ["a", "c"]);
    }

    #[test]
    fn test_empty_registry() {
        let registry: Registry<u32> = Registry::default();
        assert!(registry.is_empty());
        assert_eq!(format!("{registry:?}"), "[]");
    }
}
