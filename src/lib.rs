//! Fetch, filter and render a researcher's publication list from a DBLP feed.
//!
//! `dblp-publist` turns the XML export of a DBLP person page
//! (`https://dblp.org/pid/<pid>.xml`) into a cleaned, classified list of
//! publications and renders it as HTML into a host page.
//!
//! # Pipeline
//!
//! The work happens in three strictly sequential stages:
//!
//! 1. **Fetch** ([`fetch::DblpFetcher`]): one HTTP GET of the feed. Any
//!    failure is logged and yields no document.
//! 2. **Extract** ([`DblpXmlParser`], [`extract_publications`]): every `r`
//!    entry becomes a [`PublicationRecord`], unless its venue is
//!    unpublished or blacklisted (CoRR, ECCC).
//! 3. **Render** ([`render::HostDocument`]): the records replace the content
//!    of the `publications-list` container as list items.
//!
//! # Basic Usage
//!
//! ```rust
//! use dblp_publist::{DblpXmlParser, PublicationParser, PublicationType};
//!
//! let input = r#"<dblpperson><r><inproceedings key="conf/icalp/Doe20">
//! <author>Jane Doe 0001</author>
//! <title>Foo</title>
//! <year>2020</year>
//! <booktitle>ICALP</booktitle>
//! <ee>http://x</ee>
//! </inproceedings></r></dblpperson>"#;
//!
//! let records = DblpXmlParser::new().parse(input).unwrap();
//! assert_eq!(records[0].authors, "Jane Doe");
//! assert_eq!(records[0].kind, PublicationType::Conference);
//! ```
//!
//! # Error Handling
//!
//! Strict operations return the crate [`Result`] wrapping [`PublistError`].
//! The pipeline entry points ([`extract_publications`],
//! [`pipeline::render_page`]) collapse feed errors into an empty list so a
//! broken feed renders the "No publications found." placeholder instead of
//! failing.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub mod config;
pub mod dblp_xml;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod pipeline;
mod regex;
pub mod render;
mod utils;

// Reexports
pub use config::PublistConfig;
pub use dblp_xml::{DblpEntry, DblpXmlParser, extract_publications};
pub use render::HostDocument;
pub use utils::{clean_author_name, is_excluded_venue};

/// A specialized Result type for publication list operations.
pub type Result<T> = std::result::Result<T, PublistError>;

/// Errors raised while fetching, parsing or rendering a publication list.
#[derive(Error, Debug)]
pub enum PublistError {
    #[error("Parse error: {0}")]
    InvalidFormat(String),

    #[error("HTTP error! Status: {status}")]
    Http { status: u16 },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("No element with id '{0}' in host document")]
    ContainerNotFound(String),

    #[error("Error: {0}")]
    Other(String),
}

impl From<quick_xml::Error> for PublistError {
    fn from(err: quick_xml::Error) -> Self {
        PublistError::InvalidFormat(err.to_string())
    }
}

/// Whether a publication appeared in a journal or in conference proceedings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationType {
    Journal,
    Conference,
}

impl PublicationType {
    /// The CSS class a rendered list item carries for this type.
    pub fn as_class(&self) -> &'static str {
        match self {
            PublicationType::Journal => "journal",
            PublicationType::Conference => "conference",
        }
    }
}

impl fmt::Display for PublicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_class())
    }
}

/// A single cleaned publication, ready for display.
///
/// Records are only built by the extractor, which has already applied the
/// field defaults and dropped unpublished or blacklisted venues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationRecord {
    /// Title of the work, "No Title" when absent
    pub title: String,
    /// Cleaned author names joined with ", ", "No Authors" when absent
    pub authors: String,
    /// Publication year, "No Year" when absent
    pub year: String,
    /// Electronic edition link, "#" when absent
    pub url: String,
    /// Journal or proceedings name
    pub venue: String,
    /// Journal or conference
    #[serde(rename = "type")]
    pub kind: PublicationType,
}

/// Trait for implementing publication feed parsers.
pub trait PublicationParser {
    /// Parse a feed document into the records it contains.
    ///
    /// # Arguments
    ///
    /// * `input` - The raw feed document
    ///
    /// # Errors
    ///
    /// Returns `PublistError` if the input is malformed
    fn parse(&self, input: &str) -> Result<Vec<PublicationRecord>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = PublistError::InvalidFormat("Invalid tag".to_string());
        assert_eq!(error.to_string(), "Parse error: Invalid tag");

        let error = PublistError::Http { status: 404 };
        assert_eq!(error.to_string(), "HTTP error! Status: 404");
    }

    #[test]
    fn test_publication_type_class() {
        assert_eq!(PublicationType::Journal.as_class(), "journal");
        assert_eq!(PublicationType::Conference.to_string(), "conference");
    }

    #[test]
    fn test_record_serializes_type_field() {
        let record = PublicationRecord {
            title: "Foo".to_string(),
            authors: "Jane Doe".to_string(),
            year: "2020".to_string(),
            url: "http://x".to_string(),
            venue: "ICALP".to_string(),
            kind: PublicationType::Conference,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "conference");
        assert_eq!(json["venue"], "ICALP");
    }
}
