// crates/read_more_plugin/src/plugin.rs

use std::sync::Arc;

use content_splitter::{ContentSplitter, ReadMoreOptions};
use read_more_tag::{EXCERPT_FILTER, HAS_MORETAG_FILTER, READ_MORE_SHORTCODE};

use crate::registrar::{FilterValue, Registrar};

/// A plugin the host can install with its own options type.
pub trait Plugin {
    type Options;

    /// Called once per installation; registers everything the plugin offers.
    fn configure(&self, registrar: &mut dyn Registrar, options: Option<&Self::Options>);
}

/// The excerpt / "read more" plugin.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReadMorePlugin;

impl Plugin for ReadMorePlugin {
    type Options = ReadMoreOptions;

    fn configure(&self, registrar: &mut dyn Registrar, options: Option<&ReadMoreOptions>) {
        register(registrar, options);
    }
}

/// Installs `plugin` into `registrar`, the way a host's `addPlugin` does.
pub fn add_plugin<P: Plugin>(registrar: &mut dyn Registrar, plugin: &P, options: Option<&P::Options>) {
    plugin.configure(registrar, options);
}

/// Resolves `options` once and registers, in order, the `excerpt` filter,
/// the `hasMoretag` filter and the `readMore` paired shortcode.
///
/// All three share the same frozen splitter.
pub fn register(registrar: &mut dyn Registrar, options: Option<&ReadMoreOptions>) {
    let splitter = Arc::new(ContentSplitter::from_options(options));
    tracing::debug!(read_more_tag = splitter.read_more_tag(), "Resolved read-more configuration");
    register_splitter(registrar, splitter);
}

/// Registers the three callables around an already resolved `splitter`.
///
/// Callers that keep their own handle on the splitter see exactly the marker
/// the registered callables use.
pub fn register_splitter(registrar: &mut dyn Registrar, splitter: Arc<ContentSplitter>) {
    let excerpt = Arc::clone(&splitter);
    registrar.add_filter(
        EXCERPT_FILTER,
        Arc::new(move |content: &str| FilterValue::Text(excerpt.excerpt(content).to_string())),
    );
    tracing::debug!(name = EXCERPT_FILTER, "Registered filter");

    let has_more_tag = Arc::clone(&splitter);
    registrar.add_filter(
        HAS_MORETAG_FILTER,
        Arc::new(move |content: &str| FilterValue::Bool(has_more_tag.has_more_tag(content))),
    );
    tracing::debug!(name = HAS_MORETAG_FILTER, "Registered filter");

    registrar.add_paired_shortcode(
        READ_MORE_SHORTCODE,
        Arc::new(move |inner: &str, page: &str| splitter.read_more(inner, page)),
    );
    tracing::debug!(name = READ_MORE_SHORTCODE, "Registered paired shortcode");
}
