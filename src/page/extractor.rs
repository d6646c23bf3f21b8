use crate::page::derive;
use crate::page::document::DocumentNode;
use crate::page::registry::{fields, page_registry, FieldRegistry, PathSpec};
use crate::page::resolver::{resolve_int, resolve_string};
use crate::page::types::{PageConfig, PageRecord};
use tracing::{debug, trace};

/// Reads logical fields from a document, taking the first usable candidate
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'r> {
    registry: &'r FieldRegistry,
}

impl Default for Extractor<'static> {
    fn default() -> Self {
        Extractor::new(page_registry())
    }
}

impl<'r> Extractor<'r> {
    pub fn new(registry: &'r FieldRegistry) -> Self {
        Extractor { registry }
    }

    /// First non-empty string among the field's candidates, else ""
    pub fn extract_first_string<D: DocumentNode>(&self, doc: &D, field: &str) -> String {
        self.first_match(doc, field, resolve_string, |s| !s.is_empty())
            .unwrap_or_default()
    }

    /// First strictly positive integer among the field's candidates, else 0
    ///
    /// Zero and negative values count as absent, so an id of 0 is never
    /// reported as found.
    pub fn extract_first_int<D: DocumentNode>(&self, doc: &D, field: &str) -> i64 {
        self.first_match(doc, field, resolve_int, |n| *n > 0)
            .unwrap_or(0)
    }

    fn first_match<D, T, R, P>(&self, doc: &D, field: &str, resolve: R, usable: P) -> Option<T>
    where
        D: DocumentNode,
        R: Fn(&D, &PathSpec) -> T,
        P: Fn(&T) -> bool,
    {
        let candidates = self.registry.candidates_for(field);
        if candidates.is_empty() {
            debug!(field, "no candidate paths registered");
            return None;
        }

        candidates
            .iter()
            .enumerate()
            .map(|(idx, path)| (idx, resolve(doc, path)))
            .find(|(_, value)| usable(value))
            .map(|(idx, value)| {
                if idx > 0 {
                    trace!(field, candidate = idx, "resolved from fallback path");
                }
                value
            })
    }

    /// Extract every page field, then apply derivation
    pub fn extract_record<D: DocumentNode>(
        &self,
        doc: &D,
        fs_path: &str,
        config: &PageConfig,
    ) -> PageRecord {
        let record = PageRecord::empty()
            .with_id(self.extract_first_int(doc, fields::ID))
            .with_title(self.extract_first_string(doc, fields::TITLE))
            .with_title_plain(self.extract_first_string(doc, fields::TITLE_PLAIN))
            .with_thumb_url(self.extract_first_string(doc, fields::THUMB_URL))
            .with_image_url(self.extract_first_string(doc, fields::IMAGE_URL))
            .with_description(self.extract_first_string(doc, fields::DESCRIPTION))
            .with_disqus_id(self.extract_first_string(doc, fields::DISQUS_ID))
            .with_create_date(self.extract_first_string(doc, fields::CREATE_DATE))
            .with_content(self.extract_first_string(doc, fields::CONTENT))
            .with_url(self.extract_first_string(doc, fields::URL))
            .with_domain(self.extract_first_string(doc, fields::DOMAIN))
            .with_path_from_doc_root(self.extract_first_string(doc, fields::PATH_FROM_DOC_ROOT))
            .with_html_filename(self.extract_first_string(doc, fields::HTML_FILENAME))
            .with_thumb_base64(self.extract_first_string(doc, fields::THUMB_BASE64))
            .with_fs_path(fs_path);

        derive::apply(record, config)
    }
}
