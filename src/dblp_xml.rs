//! DBLP person-feed parser: the extraction stage of the pipeline.
//!
//! Maps each `r` element of a feed such as `https://dblp.org/pid/11/1649.xml`
//! to a [`PublicationRecord`], dropping unpublished entries and venues on the
//! blacklist (CoRR, ECCC).
//!
//! # Example
//!
//! ```
//! use dblp_publist::{DblpXmlParser, PublicationParser};
//!
//! let input = r#"<dblpperson>
//! <r><article><title>Kept</title><journal>J. ACM</journal></article></r>
//! <r><article><title>Preprint</title><journal>CoRR</journal></article></r>
//! </dblpperson>"#;
//!
//! let records = DblpXmlParser::new().parse(input).unwrap();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].title, "Kept");
//! ```

mod parse;

use crate::dblp_xml::parse::parse_dblp_xml;
use crate::utils::{UNPUBLISHED_VENUE, is_excluded_venue, join_authors};
use crate::{PublicationParser, PublicationRecord, PublicationType, PublistError, Result};

const NO_TITLE: &str = "No Title";
const NO_YEAR: &str = "No Year";
const NO_URL: &str = "#";

/// The raw content of one `r` element, before defaults and filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DblpEntry {
    /// Text of the first `title` element
    pub title: Option<String>,
    /// Text of every `author` element, uncleaned
    pub authors: Vec<String>,
    /// Text of the first `year` element
    pub year: Option<String>,
    /// Text of the first `ee` element
    pub ee: Option<String>,
    /// Text of the first `journal` or `booktitle` element
    pub venue: Option<String>,
    /// Whether any `journal` element was present
    pub has_journal: bool,
}

impl PublicationRecord {
    /// Builds a display record from a raw entry.
    ///
    /// Returns `None` when the entry has no venue or its venue is on the
    /// blacklist.
    pub fn from_entry(entry: DblpEntry) -> Option<Self> {
        let venue = entry
            .venue
            .unwrap_or_else(|| UNPUBLISHED_VENUE.to_string());
        if is_excluded_venue(&venue) {
            return None;
        }

        let kind = if entry.has_journal {
            PublicationType::Journal
        } else {
            PublicationType::Conference
        };

        Some(PublicationRecord {
            title: entry.title.unwrap_or_else(|| NO_TITLE.to_string()),
            authors: join_authors(entry.authors.as_slice()),
            year: entry.year.unwrap_or_else(|| NO_YEAR.to_string()),
            url: entry.ee.unwrap_or_else(|| NO_URL.to_string()),
            venue,
            kind,
        })
    }
}

/// Parser for DBLP person feeds.
#[derive(Debug, Default, Clone)]
pub struct DblpXmlParser {}

impl DblpXmlParser {
    /// Creates a new DBLP XML parser instance.
    ///
    /// # Examples
    ///
    /// ```
    /// use dblp_publist::DblpXmlParser;
    /// let parser = DblpXmlParser::new();
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every `r` entry of the feed without filtering.
    ///
    /// # Errors
    ///
    /// Returns `PublistError::InvalidFormat` for empty or malformed XML
    pub fn parse_entries(&self, input: &str) -> Result<Vec<DblpEntry>> {
        if input.trim().is_empty() {
            return Err(PublistError::InvalidFormat("Empty input".into()));
        }
        parse_dblp_xml(input)
    }
}

impl PublicationParser for DblpXmlParser {
    fn parse(&self, input: &str) -> Result<Vec<PublicationRecord>> {
        Ok(self
            .parse_entries(input)?
            .into_iter()
            .filter_map(PublicationRecord::from_entry)
            .collect())
    }
}

/// Extracts the publication list from a fetched feed.
///
/// A missing or unparseable document is logged and treated as a feed with
/// no publications.
pub fn extract_publications(document: Option<&str>) -> Vec<PublicationRecord> {
    let Some(document) = document else {
        tracing::error!("XML document is missing");
        return Vec::new();
    };

    match DblpXmlParser::new().parse(document) {
        Ok(publications) => {
            tracing::info!(count = publications.len(), "extracted publications");
            publications
        }
        Err(err) => {
            tracing::error!(error = %err, "could not parse DBLP XML");
            Vec::new()
        }
    }
}
