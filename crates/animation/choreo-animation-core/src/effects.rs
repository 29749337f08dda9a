//! Effect endpoints and the per-node effect store.
//!
//! An effect declares how one visual property moves between a `from` and a
//! `to` endpoint. Endpoints are classified once, when declared: either a
//! numeric magnitude with a unit suffix (eligible for interpolation) or an
//! opaque literal (written verbatim at the boundaries only). Transform-family
//! properties are flagged here so progress writes can merge them into a
//! single composite transform string.

use choreo_api_core::StyleValue;
use serde::{Deserialize, Serialize};

/// Classification of an endpoint literal, decided at registration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EndpointKind {
    /// Leading numeric token plus the remainder as a unit suffix.
    Numeric { num: f64, unit: String },
    /// No leading numeric token (or a multi-token string); never interpolated.
    Opaque,
}

/// One declared endpoint: the literal as given plus its parsed form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectEndpoint {
    pub literal: StyleValue,
    pub kind: EndpointKind,
}

impl EffectEndpoint {
    /// Classify a literal. Bare numbers are numeric with an empty unit.
    /// Strings are scanned for a leading numeric token unless they contain a
    /// space, which marks a compound value that must stay opaque.
    pub fn parse(literal: StyleValue) -> Self {
        let kind = match &literal {
            StyleValue::Num(n) => EndpointKind::Numeric {
                num: *n,
                unit: String::new(),
            },
            StyleValue::Text(s) if !s.contains(' ') => match leading_number(s) {
                Some((num, unit)) => EndpointKind::Numeric { num, unit },
                None => EndpointKind::Opaque,
            },
            StyleValue::Text(_) => EndpointKind::Opaque,
        };
        Self { literal, kind }
    }

    /// Numeric magnitude, if this endpoint has one.
    #[inline]
    pub fn num(&self) -> Option<f64> {
        match &self.kind {
            EndpointKind::Numeric { num, .. } => Some(*num),
            EndpointKind::Opaque => None,
        }
    }

    /// Unit suffix; empty for bare numbers and opaque endpoints.
    #[inline]
    pub fn unit(&self) -> &str {
        match &self.kind {
            EndpointKind::Numeric { unit, .. } => unit,
            EndpointKind::Opaque => "",
        }
    }
}

/// Scan a leading `-?digits[.digits]` token. Returns the parsed magnitude and
/// the remainder of the string as the unit.
fn leading_number(s: &str) -> Option<(f64, String)> {
    let bytes = s.as_bytes();
    let mut i = 0;
    if i < bytes.len() && bytes[i] == b'-' {
        i += 1;
    }
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    let (token, unit) = s.split_at(i);
    let num = token.parse::<f64>().ok()?;
    Some((num, unit.to_string()))
}

/// True for properties that compose into the single `transform` style value.
pub fn is_transform_property(prop: &str) -> bool {
    matches!(
        prop,
        "translateX"
            | "translateY"
            | "translateZ"
            | "scale"
            | "scaleX"
            | "scaleY"
            | "scaleZ"
            | "rotate"
            | "rotateX"
            | "rotateY"
            | "rotateZ"
            | "skewX"
            | "skewY"
            | "perspective"
    )
}

/// One property's declared endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectProperty {
    pub name: String,
    pub is_transform: bool,
    pub from: Option<EffectEndpoint>,
    pub to: Option<EffectEndpoint>,
}

impl EffectProperty {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_transform: is_transform_property(name),
            from: None,
            to: None,
        }
    }

    /// True when both endpoints carry differing numeric magnitudes.
    pub fn tweens(&self) -> bool {
        match (&self.from, &self.to) {
            (Some(from), Some(to)) => match (from.num(), to.num()) {
                (Some(a), Some(b)) => a != b,
                _ => false,
            },
            _ => false,
        }
    }
}

/// Per-node effect table, kept in declaration order.
#[derive(Default, Clone, Debug, Serialize, Deserialize)]
pub struct EffectStore {
    props: Vec<EffectProperty>,
}

impl EffectStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, prop: &str) -> &mut EffectProperty {
        if let Some(idx) = self.props.iter().position(|p| p.name == prop) {
            &mut self.props[idx]
        } else {
            self.props.push(EffectProperty::new(prop));
            let last = self.props.len() - 1;
            &mut self.props[last]
        }
    }

    /// Declare the `from` endpoint of a property. Returns whether the
    /// property is transform-composable.
    pub fn set_from(&mut self, prop: &str, val: StyleValue) -> bool {
        let entry = self.entry(prop);
        entry.from = Some(EffectEndpoint::parse(val));
        entry.is_transform
    }

    /// Declare the `to` endpoint of a property. Returns whether the property
    /// is transform-composable.
    pub fn set_to(&mut self, prop: &str, val: StyleValue) -> bool {
        let entry = self.entry(prop);
        entry.to = Some(EffectEndpoint::parse(val));
        entry.is_transform
    }

    pub fn get(&self, prop: &str) -> Option<&EffectProperty> {
        self.props.iter().find(|p| p.name == prop)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EffectProperty> {
        self.props.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.props.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn clear(&mut self) {
        self.props.clear();
    }
}
