//! Class and inline-style batches applied around a transition.
//!
//! Each node carries two of these: one applied while staging (before the
//! transition moves) and one applied at completion. The lists stay in
//! declaration order; `set_styles` replaces the style list wholesale while
//! `clear_styles` upserts empty-string entries, which the stage treats as
//! property removal.

use choreo_api_core::StyleValue;
use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, Serialize, Deserialize)]
pub struct StyleBatch {
    add_classes: Vec<String>,
    remove_classes: Vec<String>,
    styles: Vec<(String, StyleValue)>,
}

impl StyleBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, class: &str) {
        self.add_classes.push(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.remove_classes.push(class.to_string());
    }

    /// Replace the inline-style list.
    pub fn set_styles(&mut self, styles: Vec<(String, StyleValue)>) {
        self.styles = styles;
    }

    /// Record empty-string writes for the given properties, overwriting any
    /// value already staged for them.
    pub fn clear_styles(&mut self, props: &[&str]) {
        for prop in props {
            self.upsert_style(prop, StyleValue::text(""));
        }
    }

    pub fn upsert_style(&mut self, prop: &str, val: StyleValue) {
        if let Some(entry) = self.styles.iter_mut().find(|(p, _)| p == prop) {
            entry.1 = val;
        } else {
            self.styles.push((prop.to_string(), val));
        }
    }

    #[inline]
    pub fn classes_to_add(&self) -> &[String] {
        &self.add_classes
    }

    #[inline]
    pub fn classes_to_remove(&self) -> &[String] {
        &self.remove_classes
    }

    #[inline]
    pub fn styles(&self) -> &[(String, StyleValue)] {
        &self.styles
    }

    pub fn is_empty(&self) -> bool {
        self.add_classes.is_empty() && self.remove_classes.is_empty() && self.styles.is_empty()
    }

    pub fn clear(&mut self) {
        self.add_classes.clear();
        self.remove_classes.clear();
        self.styles.clear();
    }
}
