// crates/read_more_tag/src/lib.rs

//! Names shared by the splitter, the plugin glue and the preview CLI.

/// Marker used when the options carry no (or an empty) `readMoreTag`.
pub const DEFAULT_READ_MORE_TAG: &str = "<!--more-->";

/// Filter returning the text before the first marker.
pub const EXCERPT_FILTER: &str = "excerpt";

/// Filter returning whether the page contains the marker.
pub const HAS_MORETAG_FILTER: &str = "hasMoretag";

/// Paired shortcode appending its inner content to the excerpt.
pub const READ_MORE_SHORTCODE: &str = "readMore";
