// crates/read_more_plugin/src/registrar.rs

use std::fmt;
use std::sync::Arc;

/// Output of a filter. `excerpt` yields text, `hasMoretag` a boolean.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Bool(bool),
}

impl FilterValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(text) => Some(text),
            FilterValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FilterValue::Bool(value) => Some(*value),
            FilterValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Text(text) => f.write_str(text),
            FilterValue::Bool(value) => write!(f, "{}", value),
        }
    }
}

/// A filter transforms one value (the page content) into rendered output.
pub type Filter = Arc<dyn Fn(&str) -> FilterValue + Send + Sync>;

/// A paired shortcode receives the inner block content first and the page
/// content second.
pub type PairedShortcode = Arc<dyn Fn(&str, &str) -> String + Send + Sync>;

/// The slice of a host's plugin API this plugin needs.
pub trait Registrar {
    /// Registers `filter` under `name`.
    fn add_filter(&mut self, name: &str, filter: Filter);

    /// Registers `shortcode` under `name` as a paired (block) shortcode.
    fn add_paired_shortcode(&mut self, name: &str, shortcode: PairedShortcode);
}
