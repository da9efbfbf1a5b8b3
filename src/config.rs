//! Pipeline configuration.
//!
//! # Examples
//!
//! ```
//! use dblp_publist::PublistConfig;
//!
//! let mut config = PublistConfig::new();
//! config
//!     .set_feed_url("https://dblp.org/pid/k/DonaldEKnuth.xml")
//!     .set_container_id("papers");
//! assert_eq!(config.container_id(), "papers");
//! ```

/// Feed fetched when no other URL is configured.
pub const DEFAULT_FEED_URL: &str = "https://dblp.org/pid/11/1649.xml";

/// Id of the host element publications are rendered into.
pub const DEFAULT_CONTAINER_ID: &str = "publications-list";

/// Where the feed comes from and where its publications are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublistConfig {
    /// URL of the DBLP person feed
    feed_url: String,
    /// Id of the container element in the host page
    container_id: String,
}

impl Default for PublistConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
        }
    }
}

impl PublistConfig {
    /// Creates a configuration with the default feed and container
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the feed URL
    pub fn set_feed_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.feed_url = url.into();
        self
    }

    /// Sets the id of the container element
    pub fn set_container_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.container_id = id.into();
        self
    }

    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }
}
