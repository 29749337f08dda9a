//! StyleValue: the value side of an inline style write.
//! Numbers stay numeric until they hit the stage so effect endpoints can be
//! parsed without re-reading strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lightweight kind enum for pattern-matching and quick dispatch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StyleValueKind {
    Num,
    Text,
}

/// A style value as declared by a caller: either a bare number or a literal
/// string such as `"100px"` or `"ease-in-out"`. The empty string is the
/// conventional "clear this property" value.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StyleValue {
    Num(f64),
    Text(String),
}

impl StyleValue {
    /// Return the coarse kind of this value.
    #[inline]
    pub fn kind(&self) -> StyleValueKind {
        match self {
            StyleValue::Num(_) => StyleValueKind::Num,
            StyleValue::Text(_) => StyleValueKind::Text,
        }
    }

    /// Convenience constructors
    pub fn num(v: f64) -> Self {
        StyleValue::Num(v)
    }

    pub fn text(s: impl Into<String>) -> Self {
        StyleValue::Text(s.into())
    }

    /// The string form written to the stage.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Borrow the text content, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            StyleValue::Num(_) => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Num(n) => write!(f, "{}", n),
            StyleValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(v: f64) -> Self {
        StyleValue::Num(v)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_numbers_without_suffix() {
        assert_eq!(StyleValue::num(300.0).render(), "300");
        assert_eq!(StyleValue::num(0.35).render(), "0.35");
        assert_eq!(StyleValue::num(-20.0).render(), "-20");
    }

    #[test]
    fn renders_text_verbatim() {
        assert_eq!(StyleValue::text("100px").render(), "100px");
        assert_eq!(StyleValue::text("").render(), "");
    }

    #[test]
    fn serde_untagged_round_trip() {
        let n: StyleValue = serde_json::from_str("0.5").unwrap();
        assert_eq!(n, StyleValue::num(0.5));
        let t: StyleValue = serde_json::from_str("\"100px\"").unwrap();
        assert_eq!(t, StyleValue::text("100px"));
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"100px\"");
    }
}
