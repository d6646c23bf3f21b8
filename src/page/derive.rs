//! Cross-field derivation applied after extraction
//!
//! Legacy shapes only carry a full URL. The domain and document-root path are
//! recovered from URLs of the form `scheme://host/locale/segment/rest...`.

use crate::page::types::{PageConfig, PageRecord};
use tracing::debug;

/// Filename for pages whose source does not name one
pub const DEFAULT_HTML_FILENAME: &str = "index.html";

/// Fewest `/`-delimited parts a URL needs before a location can be derived
const MIN_URL_PARTS: usize = 5;

/// Split a URL into `(domain, path_from_doc_root)`
///
/// Part 2 is the host; parts 4 and later, rejoined, are the path. Returns
/// `None` when the URL is too short for that split.
pub fn derive_location(url: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = url.split('/').collect();
    if parts.len() < MIN_URL_PARTS {
        return None;
    }
    Some((parts[2].to_string(), parts[4..].join("/")))
}

/// Fill fields that can be computed from their neighbours
pub fn apply(record: PageRecord, config: &PageConfig) -> PageRecord {
    let record = if record.html_filename().is_empty() {
        record.with_html_filename(config.default_html_filename.as_str())
    } else {
        record
    };

    if !record.path_from_doc_root().is_empty()
        || !record.domain().is_empty()
        || record.url().is_empty()
    {
        return record;
    }

    match derive_location(record.url()) {
        Some((domain, path)) => record.with_domain(domain).with_path_from_doc_root(path),
        None => {
            debug!(url = record.url(), "URL too short to derive domain and path");
            record
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_location_from_long_url() {
        let (domain, path) = derive_location("scheme://host/locale/a/b/c").unwrap();
        assert_eq!(domain, "host");
        assert_eq!(path, "a/b/c");
    }

    #[test]
    fn test_derive_location_short_urls() {
        assert_eq!(derive_location("https://host/locale"), None);
        assert_eq!(derive_location("https://host"), None);
        assert_eq!(derive_location("host"), None);
        // exactly five parts: the path is the single trailing part
        assert_eq!(
            derive_location("https://example.com/en/post"),
            Some(("example.com".to_string(), "post".to_string()))
        );
    }

    #[test]
    fn test_apply_derives_when_location_missing() {
        let record = PageRecord::empty().with_url("https://example.com/de/2017/03/01/post/");
        let record = apply(record, &PageConfig::default());

        assert_eq!(record.domain(), "example.com");
        assert_eq!(record.path_from_doc_root(), "2017/03/01/post/");
        assert_eq!(record.html_filename(), "index.html");
    }

    #[test]
    fn test_apply_skips_short_url() {
        let record = PageRecord::empty().with_url("https://example.com/de");
        let record = apply(record, &PageConfig::default());

        assert_eq!(record.domain(), "");
        assert_eq!(record.path_from_doc_root(), "");
    }

    #[test]
    fn test_apply_keeps_existing_location() {
        let record = PageRecord::empty()
            .with_url("https://example.com/de/a/b")
            .with_domain("other.org");
        let record = apply(record, &PageConfig::default());

        assert_eq!(record.domain(), "other.org");
        assert_eq!(record.path_from_doc_root(), "");

        let record = PageRecord::empty()
            .with_url("https://example.com/de/a/b")
            .with_path_from_doc_root("x/y");
        let record = apply(record, &PageConfig::default());

        assert_eq!(record.domain(), "");
        assert_eq!(record.path_from_doc_root(), "x/y");
    }

    #[test]
    fn test_filename_default_only_when_empty() {
        let config = PageConfig::default();

        let record = apply(PageRecord::empty(), &config);
        assert_eq!(record.html_filename(), "index.html");

        let record = apply(PageRecord::empty().with_html_filename("page.htm"), &config);
        assert_eq!(record.html_filename(), "page.htm");

        let custom = PageConfig {
            default_html_filename: "default.html".to_string(),
            ..PageConfig::default()
        };
        let record = apply(PageRecord::empty(), &custom);
        assert_eq!(record.html_filename(), "default.html");
    }
}
