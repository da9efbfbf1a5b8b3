//! DBLP person-feed XML parsing implementation.
//!
//! Walks the document with quick_xml and collects one [`DblpEntry`] per `r`
//! element, without applying any defaults or filtering.

use quick_xml::Reader;
use quick_xml::events::Event;
use quick_xml::name::QName;
use std::io::BufRead;

use crate::dblp_xml::DblpEntry;
use crate::{PublistError, Result};

/// Tag of the per-publication wrapper element in a DBLP person feed.
const ENTRY_TAG: &[u8] = b"r";

/// Child elements of an entry that carry publication data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Author,
    Year,
    ElectronicEdition,
    Journal,
    BookTitle,
}

impl Field {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"title" => Some(Field::Title),
            b"author" => Some(Field::Author),
            b"year" => Some(Field::Year),
            b"ee" => Some(Field::ElectronicEdition),
            b"journal" => Some(Field::Journal),
            b"booktitle" => Some(Field::BookTitle),
            _ => None,
        }
    }

    fn tag(&self) -> &'static [u8] {
        match self {
            Field::Title => b"title",
            Field::Author => b"author",
            Field::Year => b"year",
            Field::ElectronicEdition => b"ee",
            Field::Journal => b"journal",
            Field::BookTitle => b"booktitle",
        }
    }
}

/// Convert buffer position to approximate line number
fn buffer_position_to_line_number(content: &str, pos: usize) -> usize {
    if pos >= content.len() {
        return content.lines().count();
    }
    content[..pos].lines().count().max(1)
}

/// Parse a DBLP person feed into its raw entries, in document order.
pub(crate) fn parse_dblp_xml(content: &str) -> Result<Vec<DblpEntry>> {
    let mut reader = Reader::from_str(content);
    // Inline markup in titles ("On <i>k</i>-SAT") must keep its spacing.
    reader.config_mut().trim_text(false);

    let mut entries = Vec::new();
    let mut buf = Vec::new();

    loop {
        let pos = reader.buffer_position() as usize;
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.name() == QName(ENTRY_TAG) => {
                entries.push(parse_entry(&mut reader, &mut buf, content, pos)?);
            }
            Ok(Event::Empty(ref e)) if e.name() == QName(ENTRY_TAG) => {
                entries.push(DblpEntry::default());
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(PublistError::from(e)),
            _ => (),
        }
        buf.clear();
    }

    Ok(entries)
}

/// Parse the children of a single `r` element, up to its closing tag
fn parse_entry<B: BufRead>(
    reader: &mut Reader<B>,
    buf: &mut Vec<u8>,
    content: &str,
    start_pos: usize,
) -> Result<DblpEntry> {
    let mut entry = DblpEntry::default();

    loop {
        match reader.read_event_into(buf) {
            Ok(Event::Start(ref e)) => {
                if let Some(field) = Field::from_tag(e.name().as_ref()) {
                    let text = extract_text(reader, buf, field.tag())?;
                    apply_field(&mut entry, field, text);
                }
            }
            Ok(Event::Empty(ref e)) => {
                if let Some(field) = Field::from_tag(e.name().as_ref()) {
                    apply_field(&mut entry, field, String::new());
                }
            }
            Ok(Event::End(ref e)) if e.name() == QName(ENTRY_TAG) => break,
            Ok(Event::Eof) => {
                let line_num = buffer_position_to_line_number(content, start_pos);
                return Err(PublistError::InvalidFormat(format!(
                    "Unexpected EOF inside entry starting at line {}",
                    line_num
                )));
            }
            Err(e) => return Err(PublistError::from(e)),
            _ => (),
        }
        buf.clear();
    }

    Ok(entry)
}

/// Collects the text content of an element, including text nested in inline
/// children, until its closing tag is found. Surrounding whitespace is kept.
fn extract_text<B: BufRead>(
    reader: &mut Reader<B>,
    buf: &mut Vec<u8>,
    closing_tag: &[u8],
) -> Result<String> {
    let mut text = String::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event_into(buf) {
            Ok(Event::Text(e)) => {
                text.push_str(&e.unescape().map_err(|e| {
                    PublistError::InvalidFormat(format!("Invalid XML text content: {}", e))
                })?);
            }
            Ok(Event::CData(e)) => {
                text.push_str(&String::from_utf8_lossy(e.as_ref()));
            }
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(e)) if depth == 0 && e.name() == QName(closing_tag) => break,
            Ok(Event::End(_)) => depth = depth.saturating_sub(1),
            Ok(Event::Eof) => {
                return Err(PublistError::InvalidFormat(format!(
                    "Unexpected EOF while looking for closing tag '{}'",
                    String::from_utf8_lossy(closing_tag)
                )));
            }
            Err(e) => return Err(PublistError::from(e)),
            _ => (),
        }
        buf.clear();
    }

    Ok(text)
}

/// Stores a field's text on the entry. Only the first title, year, ee and
/// venue element of an entry count; every author is kept.
fn apply_field(entry: &mut DblpEntry, field: Field, text: String) {
    match field {
        Field::Title => {
            entry.title.get_or_insert(text);
        }
        Field::Author => entry.authors.push(text),
        Field::Year => {
            entry.year.get_or_insert(text);
        }
        Field::ElectronicEdition => {
            entry.ee.get_or_insert(text);
        }
        Field::Journal => {
            entry.has_journal = true;
            entry.venue.get_or_insert(text);
        }
        Field::BookTitle => {
            entry.venue.get_or_insert(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("", 0, 0)]
    #[case("a\nb\nc", 0, 1)]
    #[case("a\nb\nc", 2, 1)]
    #[case("a\nb\nc", 4, 2)]
    #[case("a\nb\nc", 99, 3)]
    fn test_buffer_position_to_line_number(
        #[case] content: &str,
        #[case] pos: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(buffer_position_to_line_number(content, pos), expected);
    }

    #[test]
    fn test_parse_entry_fields() {
        let input = r#"<dblpperson name="Jane Doe">
        <r><article key="journals/jacm/Doe21">
            <author pid="11/1649">Jane Doe 0001</author>
            <author pid="22/2">Max Mustermann</author>
            <title>Some <i>Very</i> Hard Problems.</title>
            <journal>J. ACM</journal>
            <year>2021</year>
            <ee type="oa">https://doi.org/10.1145/1</ee>
            <ee>https://example.org/mirror</ee>
        </article></r>
        </dblpperson>"#;

        let entries = parse_dblp_xml(input).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.title.as_deref(), Some("Some Very Hard Problems."));
        assert_eq!(entry.authors, vec!["Jane Doe 0001", "Max Mustermann"]);
        assert_eq!(entry.year.as_deref(), Some("2021"));
        assert_eq!(entry.ee.as_deref(), Some("https://doi.org/10.1145/1"));
        assert_eq!(entry.venue.as_deref(), Some("J. ACM"));
        assert!(entry.has_journal);
    }

    #[test]
    fn test_first_venue_wins_but_any_journal_classifies() {
        let input = r#"<dblpperson><r><inproceedings>
            <booktitle>STOC</booktitle>
            <journal>SIAM J. Comput.</journal>
        </inproceedings></r></dblpperson>"#;

        let entries = parse_dblp_xml(input).unwrap();
        assert_eq!(entries[0].venue.as_deref(), Some("STOC"));
        assert!(entries[0].has_journal);
    }

    #[test]
    fn test_ignores_authors_outside_entries() {
        let input = r#"<dblpperson>
        <person><author pid="11/1649">Jane Doe 0001</author></person>
        <r><article><title>Only Entry</title></article></r>
        <coauthors n="1"><co><na>Max Mustermann</na></co></coauthors>
        </dblpperson>"#;

        let entries = parse_dblp_xml(input).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].authors.is_empty());
    }

    #[test]
    fn test_unescapes_entities_and_cdata() {
        let input = r#"<dblpperson><r><article>
            <title>Graphs &amp; Games</title>
            <author><![CDATA[Ana Lee 7]]></author>
        </article></r></dblpperson>"#;

        let entries = parse_dblp_xml(input).unwrap();
        assert_eq!(entries[0].title.as_deref(), Some("Graphs & Games"));
        assert_eq!(entries[0].authors, vec!["Ana Lee 7"]);
    }

    #[test]
    fn test_text_is_not_trimmed() {
        let input = "<dblpperson><r><article>\
            <title> Leading and trailing </title>\
            <journal>Unpublished </journal>\
            <year>\n2020\n</year>\
            </article></r></dblpperson>";

        let entries = parse_dblp_xml(input).unwrap();
        assert_eq!(entries[0].title.as_deref(), Some(" Leading and trailing "));
        assert_eq!(entries[0].venue.as_deref(), Some("Unpublished "));
        assert_eq!(entries[0].year.as_deref(), Some("\n2020\n"));
    }

    #[test]
    fn test_empty_elements() {
        let input = r#"<dblpperson><r/><r><article><ee/><author/></article></r></dblpperson>"#;

        let entries = parse_dblp_xml(input).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], DblpEntry::default());
        assert_eq!(entries[1].ee.as_deref(), Some(""));
        assert_eq!(entries[1].authors, vec![""]);
    }

    #[test]
    fn test_unclosed_entry_is_error() {
        let input = "<dblpperson>\n<r><article><title>Incomplete</title>";
        assert!(parse_dblp_xml(input).is_err());
    }

    #[test]
    fn test_mismatched_tags_are_error() {
        let input = "<dblpperson><r><article><title>Oops</year></article></r></dblpperson>";
        assert!(parse_dblp_xml(input).is_err());
    }
}
