//! Built-in inline rules.
//!
//! Expressions are compiled with `(?s)` so spans may cross line breaks inside
//! a paragraph.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{Element, Inline, InlinePattern, PatternRegistry};

/// Code span: `` `code` ``.
pub const BACKTICK: &str = "backtick";
/// Backslash escape: `\*`.
pub const ESCAPE: &str = "escape";
/// Lone `*` or `_` surrounded by spaces.
pub const NOT_STRONG: &str = "not_strong";
/// Strong emphasis: `***text***`.
pub const STRONG_EM: &str = "strong_em";
/// Strong: `**text**` or `__text__`.
pub const STRONG: &str = "strong";
/// Emphasis: `*text*`.
pub const EMPHASIS: &str = "emphasis";
/// Emphasis: `_text_`.
pub const EMPHASIS2: &str = "emphasis2";

/// Characters that a backslash turns into literal text.
const ESCAPED_CHARS: &[char] = &[
    '\\', '`', '*', '_', '{', '}', '[', ']', '(', ')', '>', '#', '+', '-', '.', '!',
];

static BACKTICK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)`([^`]+)`").unwrap());

static ESCAPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\\(.)").unwrap());

static NOT_STRONG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(^| )(\*|_)( |$)").unwrap());

static STRONG_EM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\*{3}(.+?)\*{3}|_{3}(.+?)_{3}").unwrap());

static STRONG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\*{2}(.+?)\*{2}|_{2}(.+?)_{2}").unwrap());

static EMPHASIS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\*([^*]+)\*").unwrap());

static EMPHASIS2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)_(.+?)_").unwrap());

/// The host rules in try order.
#[must_use]
pub fn builtin_patterns() -> PatternRegistry {
    let patterns: [(&str, Box<dyn InlinePattern>); 7] = [
        (BACKTICK, Box::new(CodeSpan)),
        (ESCAPE, Box::new(Escape)),
        (NOT_STRONG, Box::new(LiteralText(&NOT_STRONG_RE))),
        (
            STRONG_EM,
            Box::new(NestedTag {
                regex: &STRONG_EM_RE,
                outer: "strong",
                inner: "em",
            }),
        ),
        (STRONG, Box::new(SimpleTag::new(&STRONG_RE, "strong"))),
        (EMPHASIS, Box::new(SimpleTag::new(&EMPHASIS_RE, "em"))),
        (EMPHASIS2, Box::new(SimpleTag::new(&EMPHASIS2_RE, "em"))),
    ];

    let mut registry = PatternRegistry::new();
    for (name, pattern) in patterns {
        registry.push(name, pattern);
    }
    registry
}

/// First capture group that took part in the match.
///
/// Alternations such as `\*{2}(.+?)\*{2}|_{2}(.+?)_{2}` put the content in a
/// different group per branch.
fn content<'h>(caps: &Captures<'h>) -> Option<&'h str> {
    caps.iter().skip(1).flatten().next().map(|m| m.as_str())
}

struct CodeSpan;

impl InlinePattern for CodeSpan {
    fn regex(&self) -> &Regex {
        &BACKTICK_RE
    }

    fn handle_match(&self, caps: &Captures<'_>) -> Option<Inline> {
        let mut el = Element::new("code");
        el.set_text(caps[1].trim());
        Some(Inline::Element(el))
    }
}

struct Escape;

impl InlinePattern for Escape {
    fn regex(&self) -> &Regex {
        &ESCAPE_RE
    }

    fn handle_match(&self, caps: &Captures<'_>) -> Option<Inline> {
        let escaped = caps[1].chars().next()?;
        ESCAPED_CHARS
            .contains(&escaped)
            .then(|| Inline::Text(escaped.to_string()))
    }
}

/// Keeps the whole match as literal text.
struct LiteralText(&'static LazyLock<Regex>);

impl InlinePattern for LiteralText {
    fn regex(&self) -> &Regex {
        self.0
    }

    fn handle_match(&self, caps: &Captures<'_>) -> Option<Inline> {
        Some(Inline::Text(caps[0].to_owned()))
    }
}

/// Wraps the content group in a single tag.
struct SimpleTag {
    regex: &'static LazyLock<Regex>,
    tag: &'static str,
}

impl SimpleTag {
    fn new(regex: &'static LazyLock<Regex>, tag: &'static str) -> Self {
        Self { regex, tag }
    }
}

impl InlinePattern for SimpleTag {
    fn regex(&self) -> &Regex {
        self.regex
    }

    fn handle_match(&self, caps: &Captures<'_>) -> Option<Inline> {
        let mut el = Element::new(self.tag);
        el.set_text(content(caps)?);
        Some(Inline::Element(el))
    }
}

/// Wraps the content group in `outer > inner`.
struct NestedTag {
    regex: &'static LazyLock<Regex>,
    outer: &'static str,
    inner: &'static str,
}

impl InlinePattern for NestedTag {
    fn regex(&self) -> &Regex {
        self.regex
    }

    fn handle_match(&self, caps: &Captures<'_>) -> Option<Inline> {
        let mut el = Element::new(self.outer);
        el.sub_element(self.inner).set_text(content(caps)?);
        Some(Inline::Element(el))
    }
}
