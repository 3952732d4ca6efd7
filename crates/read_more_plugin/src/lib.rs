// crates/read_more_plugin/src/lib.rs

//! Registration glue between [`content_splitter`] and a site-generator host.
//!
//! The host only has to implement [`Registrar`]; [`register`] (or
//! [`add_plugin`] with [`ReadMorePlugin`]) hands it three callables:
//! the `excerpt` and `hasMoretag` filters and the `readMore` paired
//! shortcode. [`InMemoryRegistry`] is a ready-made registrar for hosts that
//! keep their callables in a map, and for tests.

pub mod plugin;
pub mod registrar;
pub mod registry;

pub use content_splitter::ReadMoreOptions;
pub use plugin::{add_plugin, register, register_splitter, Plugin, ReadMorePlugin};
pub use registrar::{Filter, FilterValue, PairedShortcode, Registrar};
pub use registry::InMemoryRegistry;
