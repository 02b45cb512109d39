//! Underline rules.
//!
//! Three expressions are recognized:
//!
//! | Rule           | Syntax                 | Output                         |
//! |----------------|------------------------|--------------------------------|
//! | `em_underline` | `*pre__mid__post*`     | `<em>pre<TAG>mid</TAG>post</em>` |
//! | `underline_em` | `__pre*mid*post__`     | `<TAG>pre<em>mid</em>post</TAG>` |
//! | `underline`    | `__text__`             | `<TAG>text</TAG>`              |
//!
//! The class from [`UnderlineConfig`] always goes on the `TAG` element,
//! whichever side of the nesting it is on.

use std::sync::LazyLock;

use md_inline::{Element, Inline, InlinePattern, add_class};
use regex::{Captures, Regex};

use crate::UnderlineConfig;

/// Tag of the emphasis element in combined rules.
const EMPHASIS_TAG: &str = "em";

static UNDERLINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)__(.+?)__").unwrap());

// *__underline-em__*, *__underline__em*, *em__underline__*, *em__underline__em*
static EM_UNDERLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\*(.*?)__(.+?)__(.*?)\*").unwrap());

// __*em-ul*__, __ul*em*__, __*em*ul__, __ul*em*ul__
static UNDERLINE_EM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)__(.*?)\*(.+?)\*(.*?)__").unwrap());

/// Which element of a combined rule carries the underline tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nesting {
    /// `*..__x__..*`: emphasis outside, underline inside.
    UnderlineInside,
    /// `__..*x*..__`: underline outside, emphasis inside.
    UnderlineOutside,
}

impl Nesting {
    /// Whether the underline element is the outer one.
    #[must_use]
    pub fn is_outside(self) -> bool {
        self == Self::UnderlineOutside
    }
}

/// `__text__` wrapped in the configured tag.
#[derive(Clone, Debug)]
pub struct UnderlinePattern {
    tag: String,
    cls: String,
}

impl UnderlinePattern {
    #[must_use]
    pub fn new(config: &UnderlineConfig) -> Self {
        Self {
            tag: config.tag().to_owned(),
            cls: config.cls().to_owned(),
        }
    }
}

impl InlinePattern for UnderlinePattern {
    fn regex(&self) -> &Regex {
        &UNDERLINE_RE
    }

    fn handle_match(&self, caps: &Captures<'_>) -> Option<Inline> {
        let mut el = Element::new(self.tag.as_str());
        el.set_text(&caps[1]);
        add_class(&mut el, &self.cls);
        Some(Inline::Element(el))
    }
}

/// Underline combined with `*` emphasis, in either nesting order.
///
/// Captures are `pre`, `mid` and `post`. `pre` becomes the outer element's
/// text, `mid` the inner element's text and `post` the inner element's tail.
/// Empty captures are left unset.
#[derive(Clone, Debug)]
pub struct EmUnderlinePattern {
    tag: String,
    cls: String,
    nesting: Nesting,
}

impl EmUnderlinePattern {
    #[must_use]
    pub fn new(config: &UnderlineConfig, nesting: Nesting) -> Self {
        Self {
            tag: config.tag().to_owned(),
            cls: config.cls().to_owned(),
            nesting,
        }
    }

    #[must_use]
    pub fn nesting(&self) -> Nesting {
        self.nesting
    }
}

impl InlinePattern for EmUnderlinePattern {
    fn regex(&self) -> &Regex {
        match self.nesting {
            Nesting::UnderlineInside => &EM_UNDERLINE_RE,
            Nesting::UnderlineOutside => &UNDERLINE_EM_RE,
        }
    }

    fn handle_match(&self, caps: &Captures<'_>) -> Option<Inline> {
        let capture = |i: usize| caps.get(i).map_or("", |m| m.as_str());
        let (pre, mid, post) = (capture(1), capture(2), capture(3));

        let (outer_tag, inner_tag) = if self.nesting.is_outside() {
            (self.tag.as_str(), EMPHASIS_TAG)
        } else {
            (EMPHASIS_TAG, self.tag.as_str())
        };

        let mut outer = Element::new(outer_tag);
        if self.nesting.is_outside() {
            add_class(&mut outer, &self.cls);
        }
        if !pre.is_empty() {
            outer.set_text(pre);
        }

        let inner = outer.sub_element(inner_tag);
        if !self.nesting.is_outside() {
            add_class(inner, &self.cls);
        }
        if !mid.is_empty() {
            inner.set_text(mid);
        }
        if !post.is_empty() {
            inner.set_tail(post);
        }

        Some(Inline::Element(outer))
    }
}
