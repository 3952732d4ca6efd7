// crates/read_more_plugin/src/registry.rs

use anyhow::{anyhow, Result};

use crate::registrar::{Filter, FilterValue, PairedShortcode, Registrar};

/// Keeps registered callables in memory, in registration order.
///
/// Registering a name twice keeps both entries; lookups use the most recent.
#[derive(Default)]
pub struct InMemoryRegistry {
    filters: Vec<(String, Filter)>,
    paired_shortcodes: Vec<(String, PairedShortcode)>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter names in the order they were registered.
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Paired shortcode names in the order they were registered.
    pub fn paired_shortcode_names(&self) -> Vec<&str> {
        self.paired_shortcodes.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn filter(&self, name: &str) -> Option<&Filter> {
        self.filters
            .iter()
            .rev()
            .find(|(registered, _)| registered == name)
            .map(|(_, filter)| filter)
    }

    pub fn paired_shortcode(&self, name: &str) -> Option<&PairedShortcode> {
        self.paired_shortcodes
            .iter()
            .rev()
            .find(|(registered, _)| registered == name)
            .map(|(_, shortcode)| shortcode)
    }

    /// Runs the filter registered as `name` over `content`.
    pub fn apply_filter(&self, name: &str, content: &str) -> Result<FilterValue> {
        let filter = self
            .filter(name)
            .ok_or_else(|| anyhow!("No filter registered as '{}'", name))?;
        Ok(filter(content))
    }

    /// Renders the paired shortcode `name` with its inner content and the
    /// content of the page it appears on.
    pub fn render_paired_shortcode(&self, name: &str, inner_content: &str, page_content: &str) -> Result<String> {
        let shortcode = self
            .paired_shortcode(name)
            .ok_or_else(|| anyhow!("No paired shortcode registered as '{}'", name))?;
        Ok(shortcode(inner_content, page_content))
    }
}

impl Registrar for InMemoryRegistry {
    fn add_filter(&mut self, name: &str, filter: Filter) {
        self.filters.push((name.to_string(), filter));
    }

    fn add_paired_shortcode(&mut self, name: &str, shortcode: PairedShortcode) {
        self.paired_shortcodes.push((name.to_string(), shortcode));
    }
}
