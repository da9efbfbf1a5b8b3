//! HTML rendering of a publication list into a host page.
//!
//! The host page exposes one container element addressed by id
//! (`publications-list` by default). Rendering clears the container and
//! writes one `<li>` per publication, classed `journal` or `conference`, or a
//! single "No publications found." paragraph when the list is empty.
//!
//! # Example
//!
//! ```
//! use dblp_publist::HostDocument;
//!
//! let mut page = HostDocument::new(
//!     r#"<body><ul id="publications-list"><li>Loading...</li></ul></body>"#,
//! );
//! page.render_into("publications-list", &[]).unwrap();
//! assert!(page.as_str().contains(
//!     r#"<ul id="publications-list"><p>No publications found.</p></ul>"#
//! ));
//! ```

use scraper::node::Comment;
use scraper::{Html, Node, Selector};

use crate::{PublicationRecord, PublistError, Result};

/// Stands in for the rendered list while the host document is serialized.
const CONTENT_MARKER: &str = "dblp-publist:publications";

/// Markup written instead of list items when there is nothing to show.
pub const NO_PUBLICATIONS_PLACEHOLDER: &str = "<p>No publications found.</p>";

const DEFAULT_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Publications</title>
<style>
body { font-family: sans-serif; max-width: 60rem; margin: 2rem auto; line-height: 1.4; }
#publications-list { list-style: none; padding: 0; }
#publications-list li { margin-bottom: 1rem; padding-left: 0.75rem; border-left: 4px solid; }
#publications-list li.journal { border-color: #1f77b4; }
#publications-list li.conference { border-color: #2ca02c; }
</style>
</head>
<body>
<h1>Publications</h1>
<ul id="publications-list"></ul>
</body>
</html>
"#;

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders the list items for `publications`, or the placeholder when the
/// slice is empty.
pub fn render_publications(publications: &[PublicationRecord]) -> String {
    if publications.is_empty() {
        return NO_PUBLICATIONS_PLACEHOLDER.to_string();
    }

    let mut out = String::with_capacity(publications.len() * 256);
    for publication in publications {
        write_list_item(&mut out, publication);
    }
    out
}

fn write_list_item(out: &mut String, publication: &PublicationRecord) {
    out.push_str(&format!(
        "\n<li class=\"{}\">\n<strong><a href=\"{}\" target=\"_blank\">{}</a></strong><br>\n",
        publication.kind.as_class(),
        html_escape(&publication.url),
        html_escape(&publication.title),
    ));
    out.push_str(&format!(
        "<em>Authors: {}</em><br>\n<em>Published in: {}, {}</em>\n</li>\n",
        html_escape(&publication.authors),
        html_escape(&publication.venue),
        html_escape(&publication.year),
    ));
}

/// A host page containing the element publications are rendered into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostDocument {
    html: String,
}

impl Default for HostDocument {
    /// A standalone page with an empty `publications-list` container.
    fn default() -> Self {
        Self::new(DEFAULT_PAGE)
    }
}

impl HostDocument {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_string(self) -> String {
        self.html
    }

    /// Replaces the content of the element with id `container_id` by the
    /// rendered publications.
    ///
    /// The page is parsed as HTML, so comments, scripts and unquoted
    /// attributes are handled the way a browser would. The stored page is
    /// the re-serialized document.
    ///
    /// # Errors
    ///
    /// Returns `PublistError::ContainerNotFound` if no element has that id
    pub fn render_into(
        &mut self,
        container_id: &str,
        publications: &[PublicationRecord],
    ) -> Result<()> {
        let mut document = Html::parse_document(&self.html);
        let selector = Selector::parse(&format!(
            "[id=\"{}\"]",
            container_id.replace('\\', "\\\\").replace('"', "\\\"")
        ))
        .map_err(|e| PublistError::Other(format!("Invalid container id: {:?}", e)))?;

        let Some(container_node) = document.select(&selector).next().map(|el| el.id()) else {
            return Err(PublistError::ContainerNotFound(container_id.to_string()));
        };
        let Some(mut container) = document.tree.get_mut(container_node) else {
            return Err(PublistError::ContainerNotFound(container_id.to_string()));
        };
        while let Some(mut child) = container.first_child() {
            child.detach();
        }
        container.append(Node::Comment(Comment {
            comment: CONTENT_MARKER.into(),
        }));

        self.html = document.html().replacen(
            &format!("<!--{}-->", CONTENT_MARKER),
            &render_publications(publications),
            1,
        );
        tracing::info!(
            count = publications.len(),
            container = container_id,
            "publications displayed"
        );
        Ok(())
    }
}
