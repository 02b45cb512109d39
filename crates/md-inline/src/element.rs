//! Minimal element tree for inline output.
//!
//! Mirrors the text/tail model of `ElementTree`: an element's `text` is the
//! content before its first child, and each child's `tail` is the content
//! that follows it inside the parent.

use std::fmt::Write;

/// A node of the inline output tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    pub(crate) text: Option<String>,
    pub(crate) tail: Option<String>,
    pub(crate) children: Vec<Element>,
}

impl Element {
    /// Create an empty element with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing any previous value.
    ///
    /// Attributes keep their first insertion order when serialized.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.attributes.iter_mut().find(|(key, _)| *key == name) {
            slot.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    /// All attributes in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Text before the first child.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Text following this element inside its parent.
    #[must_use]
    pub fn tail(&self) -> Option<&str> {
        self.tail.as_deref()
    }

    pub fn set_tail(&mut self, tail: impl Into<String>) {
        self.tail = Some(tail.into());
    }

    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Append a child element.
    pub fn append(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Create a child element with the given tag and return it for editing.
    pub fn sub_element(&mut self, tag: impl Into<String>) -> &mut Element {
        self.children.push(Element::new(tag));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Append text at the current end of the content.
    ///
    /// Goes to `text` while the element has no children, otherwise to the
    /// tail of the last child.
    pub(crate) fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let slot = match self.children.last_mut() {
            Some(last) => &mut last.tail,
            None => &mut self.text,
        };
        slot.get_or_insert_with(String::new).push_str(text);
    }

    /// Serialize the element, including its tail.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Serialize only the content of the element (text and children).
    #[must_use]
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        self.write_content(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attributes {
            let _ = write!(out, " {name}=\"{}\"", escape_attribute(value));
        }
        out.push('>');
        self.write_content(out);
        let _ = write!(out, "</{}>", self.tag);
        if let Some(tail) = &self.tail {
            out.push_str(&escape_html(tail));
        }
    }

    fn write_content(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(&escape_html(text));
        }
        for child in &self.children {
            child.write_html(out);
        }
    }
}

/// Append `cls` to the element's `class` attribute.
///
/// An existing class value is kept and the new one is added after a space.
/// Empty `cls` leaves the element untouched.
///
/// # Example
///
/// ```
/// use md_inline::{Element, add_class};
///
/// let mut el = Element::new("u");
/// el.set("class", "bar");
/// add_class(&mut el, "foo");
/// assert_eq!(el.get("class"), Some("bar foo"));
/// ```
pub fn add_class(element: &mut Element, cls: &str) {
    if cls.is_empty() {
        return;
    }
    let value = match element.get("class") {
        Some(old) if !old.is_empty() => format!("{old} {cls}"),
        _ => cls.to_owned(),
    };
    element.set("class", value);
}

/// Escape `&`, `<` and `>` for HTML text content.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attribute(s: &str) -> String {
    escape_html(s).replace('"', "&quot;")
}
