//! Canonical, versioned page JSON
//!
//! Every resolved page is written in one fixed layout regardless of the shape
//! it was read from. Key order comes from the struct declaration, so output is
//! byte-stable for equal records.

use crate::error::Result;
use crate::page::document::DocumentNode;
use crate::page::registry::PathSpec;
use crate::page::resolver::resolve_int;
use crate::page::types::{CanonicalStyle, PageRecord};
use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::Value;
use std::io;

/// Schema version of the layout produced by [`to_canonical_json`]
pub const CANONICAL_VERSION: u64 = 1;

#[derive(Serialize)]
struct CanonicalPage<'a> {
    version: u64,
    #[serde(rename = "thumbImg")]
    thumb_img: &'a str,
    #[serde(rename = "postImg")]
    post_img: &'a str,
    filename: &'a str,
    id: i64,
    date: &'a str,
    url: &'a str,
    title: &'a str,
    title_plain: &'a str,
    excerpt: &'a str,
    content: &'a str,
    dsq_thread_id: &'a str,
    #[serde(rename = "thumbBase64", skip_serializing_if = "is_empty")]
    thumb_base64: &'a str,
}

fn is_empty(s: &&str) -> bool {
    s.is_empty()
}

impl<'a> From<&'a PageRecord> for CanonicalPage<'a> {
    fn from(record: &'a PageRecord) -> Self {
        CanonicalPage {
            version: CANONICAL_VERSION,
            thumb_img: record.thumb_url(),
            post_img: record.image_url(),
            filename: record.html_filename(),
            id: record.id(),
            date: record.create_date(),
            url: record.url(),
            title: record.title(),
            title_plain: record.title_plain(),
            excerpt: record.description(),
            content: record.content(),
            dsq_thread_id: record.disqus_id(),
            thumb_base64: record.thumb_base64(),
        }
    }
}

/// Tab indentation, one member per line, no space after the colon
#[derive(Debug, Default)]
struct TabFormatter {
    depth: usize,
    has_value: bool,
}

impl TabFormatter {
    fn indent<W: ?Sized + io::Write>(&self, writer: &mut W) -> io::Result<()> {
        for _ in 0..self.depth {
            writer.write_all(b"\t")?;
        }
        Ok(())
    }

    fn open<W: ?Sized + io::Write>(&mut self, writer: &mut W, token: &[u8]) -> io::Result<()> {
        self.depth += 1;
        self.has_value = false;
        writer.write_all(token)
    }

    fn close<W: ?Sized + io::Write>(&mut self, writer: &mut W, token: &[u8]) -> io::Result<()> {
        self.depth -= 1;
        if self.has_value {
            writer.write_all(b"\n")?;
            self.indent(writer)?;
        }
        writer.write_all(token)
    }

    fn item<W: ?Sized + io::Write>(&self, writer: &mut W, first: bool) -> io::Result<()> {
        let separator: &[u8] = if first { b"\n" } else { b",\n" };
        writer.write_all(separator)?;
        self.indent(writer)
    }
}

impl Formatter for TabFormatter {
    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.open(writer, b"{")
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.close(writer, b"}")
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.item(writer, first)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.open(writer, b"[")
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.close(writer, b"]")
    }

    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.item(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }
}

/// Render a record in the canonical layout
pub fn to_canonical_json(record: &PageRecord, style: CanonicalStyle) -> Result<Vec<u8>> {
    let page = CanonicalPage::from(record);
    let mut out = Vec::new();

    match style {
        CanonicalStyle::Pretty => {
            let mut ser = serde_json::Serializer::with_formatter(&mut out, TabFormatter::default());
            page.serialize(&mut ser)?;
        }
        CanonicalStyle::Compact => serde_json::to_writer(&mut out, &page)?,
    }

    Ok(out)
}

/// Schema version declared by a stored page document
///
/// Absent input means a fresh record is being created, which always uses the
/// current layout, so it reports [`CANONICAL_VERSION`]. A document without a
/// readable `version` reports 0.
pub fn find_json_version(data: Option<&[u8]>) -> u64 {
    let Some(bytes) = data else {
        return CANONICAL_VERSION;
    };

    match serde_json::from_slice::<Value>(bytes) {
        Ok(doc) => version_of(&doc),
        Err(_) => 0,
    }
}

/// The `version` member of a parsed document, 0 when missing
pub fn version_of<D: DocumentNode>(doc: &D) -> u64 {
    let version = resolve_int(doc, &PathSpec::new(&["version"]));
    u64::try_from(version).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_PAGE: &str = "{\n\t\"version\":1,\n\t\"thumbImg\":\"\",\n\t\"postImg\":\"\",\n\t\"filename\":\"\",\n\t\"id\":0,\n\t\"date\":\"\",\n\t\"url\":\"\",\n\t\"title\":\"\",\n\t\"title_plain\":\"\",\n\t\"excerpt\":\"\",\n\t\"content\":\"\",\n\t\"dsq_thread_id\":\"\"\n}";

    #[test]
    fn test_version_probe() {
        assert_eq!(find_json_version(None), 1);
        assert_eq!(find_json_version(Some(&br#"{"version":1}"#[..])), 1);
        assert_eq!(find_json_version(Some(&br#"{"noversiongiven":""}"#[..])), 0);
        assert_eq!(find_json_version(Some(&b"not json"[..])), 0);
        assert_eq!(find_json_version(Some(&br#"{"version":"2"}"#[..])), 2);
    }

    #[test]
    fn test_empty_record_layout() {
        let json = to_canonical_json(&PageRecord::empty(), CanonicalStyle::Pretty).unwrap();
        assert_eq!(String::from_utf8(json).unwrap(), EMPTY_PAGE);
    }

    #[test]
    fn test_thumb_base64_appended_when_present() {
        let record = PageRecord::empty().with_thumb_base64("aGVsbG8=");
        let json = String::from_utf8(to_canonical_json(&record, CanonicalStyle::Pretty).unwrap()).unwrap();

        assert!(json.ends_with("\t\"dsq_thread_id\":\"\",\n\t\"thumbBase64\":\"aGVsbG8=\"\n}"));
    }

    #[test]
    fn test_values_are_escaped() {
        let record = PageRecord::empty()
            .with_title("Say \"hi\"")
            .with_content("line one\nline two")
            .with_id(17);
        let json = to_canonical_json(&record, CanonicalStyle::Pretty).unwrap();
        let text = String::from_utf8(json.clone()).unwrap();

        assert!(text.contains("\t\"title\":\"Say \\\"hi\\\"\",\n"));
        assert!(text.contains("\t\"id\":17,\n"));

        let parsed: Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(parsed["content"], "line one\nline two");
    }

    #[test]
    fn test_compact_style() {
        let record = PageRecord::empty().with_id(3).with_url("https://a/b/c/d");
        let json = String::from_utf8(to_canonical_json(&record, CanonicalStyle::Compact).unwrap()).unwrap();

        assert!(json.starts_with(r#"{"version":1,"thumbImg":"","postImg":"","filename":"","id":3,"#));
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_output_is_stable() {
        let record = PageRecord::empty().with_title("t").with_disqus_id("1 x");
        let first = to_canonical_json(&record, CanonicalStyle::Pretty).unwrap();
        let second = to_canonical_json(&record.clone(), CanonicalStyle::Pretty).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_canonical_output_reports_current_version() {
        let json = to_canonical_json(&PageRecord::empty(), CanonicalStyle::Pretty).unwrap();
        assert_eq!(find_json_version(Some(json.as_slice())), CANONICAL_VERSION);
    }
}
