use crate::regex::Regex;
use itertools::Itertools;
use once_cell::sync::Lazy;

/// DBLP disambiguates homonymous authors with a numeric suffix ("Jane Doe 0001").
static TRAILING_DISAMBIGUATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s0-9]+$").unwrap()
});

/// Venue recorded for entries that carry neither a journal nor a booktitle.
pub(crate) const UNPUBLISHED_VENUE: &str = "Unpublished";

/// Lowercased venue fragments whose entries are never listed: arXiv's CoRR
/// and the Electronic Colloquium on Computational Complexity.
pub(crate) const EXCLUDED_VENUE_FRAGMENTS: &[&str] =
    &["corr", "electron. colloquium comput. complex"];

pub(crate) const NO_AUTHORS: &str = "No Authors";

/// Removes the trailing numeric disambiguator from a DBLP author name
///
/// Every trailing run of ASCII digits and whitespace is stripped in one pass,
/// so cleaning an already cleaned name leaves it unchanged.
///
/// # Arguments
///
/// * `name` - The author name as it appears in the feed
pub fn clean_author_name(name: &str) -> String {
    TRAILING_DISAMBIGUATOR_REGEX
        .replace(name, "")
        .trim()
        .to_string()
}

/// Cleans each author name and joins them with ", ", falling back to
/// "No Authors" when nothing is left
pub(crate) fn join_authors<S: AsRef<str>>(authors: &[S]) -> String {
    let joined = authors
        .iter()
        .map(|name| clean_author_name(name.as_ref()))
        .join(", ");
    if joined.is_empty() {
        NO_AUTHORS.to_string()
    } else {
        joined
    }
}

/// Whether entries published at `venue` are left out of the list
///
/// # Arguments
///
/// * `venue` - The journal or booktitle text, or "Unpublished"
pub fn is_excluded_venue(venue: &str) -> bool {
    if venue == UNPUBLISHED_VENUE {
        return true;
    }
    let venue = venue.to_lowercase();
    EXCLUDED_VENUE_FRAGMENTS
        .iter()
        .any(|fragment| venue.contains(fragment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("Jane Doe0001", "Jane Doe")]
    #[case("John Q. Public3", "John Q. Public")]
    #[case("Jane Doe 0001", "Jane Doe")]
    #[case("Jane Doe 0001 ", "Jane Doe")]
    #[case("  Alan Turing  ", "Alan Turing")]
    #[case("Ada Lovelace", "Ada Lovelace")]
    #[case("Name 12 34", "Name")]
    #[case("R2D2 Droid", "R2D2 Droid")]
    #[case("0042", "")]
    #[case("", "")]
    #[case("Name \u{0663}", "Name \u{0663}")]
    #[case("Name\u{FF11}", "Name\u{FF11}")]
    fn test_clean_author_name(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(clean_author_name(input), expected);
    }

    #[rstest]
    #[case("Jane Doe0001")]
    #[case("Name 12 34")]
    #[case("Kurt Gödel 0002  ")]
    #[case("Plain Name")]
    fn test_clean_author_name_is_idempotent(#[case] input: &str) {
        let once = clean_author_name(input);
        assert_eq!(clean_author_name(&once), once);
    }

    #[rstest]
    #[case(&["Jane Doe0001", "John Q. Public3"], "Jane Doe, John Q. Public")]
    #[case(&["Solo Author"], "Solo Author")]
    #[case(&[], "No Authors")]
    #[case(&[""], "No Authors")]
    #[case(&["0042"], "No Authors")]
    #[case(&["0042", "Jane Doe 0001"], ", Jane Doe")]
    fn test_join_authors(#[case] authors: &[&str], #[case] expected: &str) {
        assert_eq!(join_authors(authors), expected);
    }

    #[rstest]
    #[case("Unpublished", true)]
    #[case("CoRR", true)]
    #[case("corr", true)]
    #[case("Electron. Colloquium Comput. Complex.", true)]
    #[case("ELECTRON. COLLOQUIUM COMPUT. COMPLEX.", true)]
    #[case("ICALP", false)]
    #[case("J. ACM", false)]
    #[case("unpublished", false)]
    #[case("", false)]
    fn test_is_excluded_venue(#[case] venue: &str, #[case] expected: bool) {
        assert_eq!(is_excluded_venue(venue), expected);
    }
}
