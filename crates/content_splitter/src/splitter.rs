// crates/content_splitter/src/splitter.rs

use crate::config::{resolve_config, ReadMoreConfig, ReadMoreOptions};

/// Splits content on a resolved marker. Only the first occurrence counts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentSplitter {
    config: ReadMoreConfig,
}

impl ContentSplitter {
    pub fn new(config: ReadMoreConfig) -> Self {
        Self { config }
    }

    pub fn from_options(options: Option<&ReadMoreOptions>) -> Self {
        Self::new(resolve_config(options))
    }

    pub fn read_more_tag(&self) -> &str {
        self.config.read_more_tag()
    }

    /// Splits `content` around the first marker.
    ///
    /// Returns the text before the marker and, when a marker exists, the
    /// text after it. Without a marker the whole content is the excerpt.
    pub fn split<'a>(&self, content: &'a str) -> (&'a str, Option<&'a str>) {
        let tag = self.read_more_tag();
        match content.find(tag) {
            Some(idx) => (&content[..idx], Some(&content[idx + tag.len()..])),
            None => (content, None),
        }
    }

    /// Text strictly before the first marker, untrimmed. Content without a
    /// marker comes back unchanged.
    pub fn excerpt<'a>(&self, content: &'a str) -> &'a str {
        self.split(content).0
    }

    /// Exact substring containment of the marker.
    pub fn has_more_tag(&self, content: &str) -> bool {
        content.contains(self.read_more_tag())
    }

    /// Renders the paired "read more" block.
    ///
    /// With a marker in `page_content` the result is the excerpt, one space
    /// and `inner_content` verbatim. Without one the page content stands
    /// alone and `inner_content` is dropped.
    pub fn read_more(&self, inner_content: &str, page_content: &str) -> String {
        match self.split(page_content) {
            (excerpt, Some(_)) => format!("{} {}", excerpt, inner_content),
            (whole, None) => whole.to_string(),
        }
    }
}

/// [`ContentSplitter::excerpt`] with the default marker.
pub fn excerpt(content: &str) -> &str {
    ContentSplitter::default().excerpt(content)
}

/// [`ContentSplitter::has_more_tag`] with the default marker.
pub fn has_more_tag(content: &str) -> bool {
    ContentSplitter::default().has_more_tag(content)
}

/// [`ContentSplitter::read_more`] with the default marker.
pub fn read_more(inner_content: &str, page_content: &str) -> String {
    ContentSplitter::default().read_more(inner_content, page_content)
}
