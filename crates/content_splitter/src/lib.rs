// crates/content_splitter/src/lib.rs

//! Splits page content on a "read more" marker.
//!
//! Use [`ContentSplitter`] when the marker comes from user options:
//!
//! ```
//! use content_splitter::{ContentSplitter, ReadMoreOptions};
//!
//! let options = ReadMoreOptions::default().with_read_more_tag("<!--read-more-->");
//! let splitter = ContentSplitter::from_options(Some(&options));
//! assert_eq!(splitter.excerpt("Intro<!--read-more-->Body"), "Intro");
//! ```

pub mod config;
pub mod splitter;

pub use config::{resolve_config, ReadMoreConfig, ReadMoreOptions};
pub use splitter::{excerpt, has_more_tag, read_more, ContentSplitter};
