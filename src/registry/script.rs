//! Script entries: a plain source URL or a full attribute record.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::utils::html::{push_attr, push_flag};

/// Attribute value of a structured script entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// `true` renders as a bare attribute name.
    Flag(bool),
    Text(String),
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Attribute name to value, in declaration order.
pub type ScriptAttrs = IndexMap<String, AttrValue>;

/// A script registered for a page or template.
///
/// ```toml
/// scripts = [
///     "/js/app.js",
///     { src = "/js/search.js", defer = true, type = "module" },
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptEntry {
    /// Bare source URL.
    Plain(String),
    /// Attribute record; carries a `src` attribute.
    Attributed(ScriptAttrs),
}

impl ScriptEntry {
    pub fn plain(src: impl Into<String>) -> Self {
        Self::Plain(src.into())
    }

    /// Build an attribute record from `(name, value)` pairs.
    pub fn attributed<K, V>(attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        Self::Attributed(
            attrs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Source URL, if present.
    pub fn src(&self) -> Option<&str> {
        match self {
            Self::Plain(src) => Some(src),
            Self::Attributed(attrs) => match attrs.get("src") {
                Some(AttrValue::Text(src)) => Some(src),
                _ => None,
            },
        }
    }

    /// Render as a `<script>` include.
    pub fn to_tag(&self) -> String {
        let mut tag = String::from("<script");
        match self {
            Self::Plain(src) => push_attr(&mut tag, "src", src),
            Self::Attributed(attrs) => {
                for (name, value) in attrs {
                    match value {
                        AttrValue::Flag(true) => push_flag(&mut tag, name),
                        AttrValue::Flag(false) => push_attr(&mut tag, name, "false"),
                        AttrValue::Text(text) => push_attr(&mut tag, name, text),
                    }
                }
            }
        }
        tag.push_str("></script>");
        tag
    }
}

impl From<&str> for ScriptEntry {
    fn from(src: &str) -> Self {
        Self::plain(src)
    }
}

impl From<String> for ScriptEntry {
    fn from(src: String) -> Self {
        Self::Plain(src)
    }
}
