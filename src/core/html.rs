//! Rich text received from the content API.
//!
//! Descriptions, blog posts and the location map arrive as HTML fragments.
//! They only reach `inner_html` wrapped in [`TrustedHtml`], which is built by
//! sanitizing the raw fragment.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Attributes the map embed needs on its `<iframe>`.
const IFRAME_ATTRIBUTES: &[&str] = &[
    "src",
    "width",
    "height",
    "loading",
    "allowfullscreen",
    "referrerpolicy",
    "style",
];

/// Allowed on every element; editor output leans on classes for layout.
const GENERIC_ATTRIBUTES: &[&str] = &["class"];

static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// HTML that has passed [`sanitize_html`] and may be rendered with `inner_html`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn sanitize(raw: &str) -> Self {
        Self(sanitize_html(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for TrustedHtml {
    fn from(raw: &str) -> Self {
        Self::sanitize(raw)
    }
}

/// Remove executable content from an HTML fragment.
///
/// Parses the fragment and keeps only whitelisted elements and attributes.
/// Script and style elements are dropped with their content, event handler
/// attributes never survive, and URLs are limited to safe schemes after
/// entity decoding. Map iframes are kept.
pub fn sanitize_html(raw: &str) -> String {
    sanitizer().clean(raw).to_string()
}

fn sanitizer() -> ammonia::Builder<'static> {
    let mut builder = ammonia::Builder::default();
    builder
        .add_tags(&["iframe"])
        .add_tag_attributes("iframe", IFRAME_ATTRIBUTES)
        .add_generic_attributes(GENERIC_ATTRIBUTES)
        .url_schemes(HashSet::from(["http", "https", "mailto", "tel"]));
    builder
}

/// Text content of an HTML fragment, with whitespace collapsed.
pub fn to_plain_text(raw: &str) -> String {
    let stripped = ANY_TAG.replace_all(raw, " ");
    let decoded = decode_entities(&stripped);
    WHITESPACE.replace_all(decoded.trim(), " ").into_owned()
}

pub fn word_count(raw: &str) -> usize {
    to_plain_text(raw).split_whitespace().count()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
