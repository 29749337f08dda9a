//! Selector parsing and formatting.
//!
//! Grammar (simple, engine-agnostic):
//!   tag?#id?.class*
//! - An optional leading tag name
//! - An optional `#`-prefixed id (at most one)
//! - Zero or more `.`-prefixed class names
//!   Examples:
//!   "app-backdrop"        -> tag only
//!   "#main"               -> id only
//!   "div#main.show-page"  -> tag, id, one class
//!
//! The engine itself passes selector strings through opaquely; this type is
//! for stage implementations that want a structured form to match against.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while parsing a selector string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("selector contains whitespace: `{0}`")]
    Whitespace(String),
    #[error("empty id segment in selector `{0}`")]
    EmptyId(String),
    #[error("multiple id segments in selector `{0}`")]
    DuplicateId(String),
    #[error("empty class segment in selector `{0}`")]
    EmptyClass(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Selector {
    /// Tag name, if the selector starts with one.
    pub tag: Option<String>,
    /// Id segment (`#id`), at most one.
    pub id: Option<String>,
    /// Ordered class segments (`.class`), possibly empty.
    pub classes: Vec<String>,
}

impl Selector {
    /// Parse a selector string according to the grammar described above.
    pub fn parse(s: &str) -> Result<Self, SelectorError> {
        if s.is_empty() {
            return Err(SelectorError::Empty);
        }
        if s.chars().any(char::is_whitespace) {
            return Err(SelectorError::Whitespace(s.to_string()));
        }

        let mut sel = Selector::default();
        let mut rest = s;

        let tag_len = rest.find(['#', '.']).unwrap_or(rest.len());
        if tag_len > 0 {
            sel.tag = Some(rest[..tag_len].to_string());
            rest = &rest[tag_len..];
        }

        while !rest.is_empty() {
            let marker = rest.as_bytes()[0];
            rest = &rest[1..];
            let seg_len = rest.find(['#', '.']).unwrap_or(rest.len());
            let seg = &rest[..seg_len];
            rest = &rest[seg_len..];

            match marker {
                b'#' => {
                    if seg.is_empty() {
                        return Err(SelectorError::EmptyId(s.to_string()));
                    }
                    if sel.id.is_some() {
                        return Err(SelectorError::DuplicateId(s.to_string()));
                    }
                    sel.id = Some(seg.to_string());
                }
                _ => {
                    if seg.is_empty() {
                        return Err(SelectorError::EmptyClass(s.to_string()));
                    }
                    sel.classes.push(seg.to_string());
                }
            }
        }

        Ok(sel)
    }

    /// True when a target with the given tag, id, and class list satisfies
    /// every segment of this selector.
    pub fn matches(&self, tag: &str, id: Option<&str>, classes: &[String]) -> bool {
        if let Some(want) = &self.tag {
            if want != tag {
                return false;
            }
        }
        if let Some(want) = &self.id {
            if id != Some(want.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|c| classes.iter().any(|have| have == c))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = &self.tag {
            f.write_str(tag)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{}", id)?;
        }
        for class in &self.classes {
            write!(f, ".{}", class)?;
        }
        Ok(())
    }
}

impl FromStr for Selector {
    type Err = SelectorError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::parse(s)
    }
}

// Serde support: serialize as string, deserialize from string
impl Serialize for Selector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Selector {
    fn deserialize<D>(deserializer: D) -> Result<Selector, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Selector::parse(&s).map_err(de::Error::custom)
    }
}
