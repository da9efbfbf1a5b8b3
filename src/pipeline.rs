//! The fetch, extract, render pipeline, run once per invocation.
//!
//! Stages run strictly in order and only the fetch suspends. Feed failures
//! never abort the run: they are logged and the page gets the
//! "No publications found." placeholder.

use crate::render::HostDocument;
use crate::{Result, extract_publications};
#[cfg(feature = "fetch")]
use crate::{PublistConfig, fetch::DblpFetcher};

/// Extracts publications from `document` and renders them into a copy of
/// `host`, returning the finished page.
///
/// # Errors
///
/// Only fails when `host` has no usable element with id `container_id`
pub fn render_page(
    document: Option<&str>,
    container_id: &str,
    host: &HostDocument,
) -> Result<String> {
    let publications = extract_publications(document);
    let mut page = host.clone();
    page.render_into(container_id, &publications)?;
    Ok(page.into_string())
}

/// Fetches the configured feed and renders it into a copy of `host`.
///
/// # Errors
///
/// Only fails when `host` has no usable container element
#[cfg(feature = "fetch")]
pub async fn run_pipeline(config: &PublistConfig, host: &HostDocument) -> Result<String> {
    let document = DblpFetcher::new(config.feed_url()).fetch().await;
    render_page(document.as_deref(), config.container_id(), host)
}
