//! Key-path fallback registry
//!
//! Maps a logical field name to the ordered list of JSON locations where the
//! value has been stored across the legacy and current page shapes. Earlier
//! candidates win over later ones.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static INDEX_SEGMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(\d+)\]$").unwrap()
});

static PAGE_REGISTRY: Lazy<FieldRegistry> = Lazy::new(FieldRegistry::page_defaults);

/// Logical field names understood by the page registry
pub mod fields {
    pub const URL: &str = "url";
    pub const DOMAIN: &str = "domain";
    pub const ID: &str = "id";
    pub const TITLE: &str = "title";
    pub const TITLE_PLAIN: &str = "titlePlain";
    pub const THUMB_URL: &str = "thumbUrl";
    pub const IMAGE_URL: &str = "imageUrl";
    pub const DESCRIPTION: &str = "description";
    pub const DISQUS_ID: &str = "disqusId";
    pub const CREATE_DATE: &str = "createDate";
    pub const CONTENT: &str = "content";
    pub const PATH_FROM_DOC_ROOT: &str = "pathFromDocRoot";
    pub const HTML_FILENAME: &str = "htmlFilename";
    pub const THUMB_BASE64: &str = "thumbBase64";

    /// Every field the extractor reads
    pub const ALL: &[&str] = &[
        URL,
        DOMAIN,
        ID,
        TITLE,
        TITLE_PLAIN,
        THUMB_URL,
        IMAGE_URL,
        DESCRIPTION,
        DISQUS_ID,
        CREATE_DATE,
        CONTENT,
        PATH_FROM_DOC_ROOT,
        HTML_FILENAME,
        THUMB_BASE64,
    ];
}

/// Fallback table, in registration order
const PAGE_KEY_PATHS: &[(&str, &[&str])] = &[
    (fields::URL, &["post", "url"]),
    (fields::URL, &["url"]),
    (fields::DOMAIN, &["domain"]),
    (fields::ID, &["page", "post_id"]),
    (fields::ID, &["id"]),
    (fields::TITLE, &["title"]),
    (fields::TITLE_PLAIN, &["title_plain"]),
    (fields::THUMB_URL, &["thumbUrl"]),
    (fields::THUMB_URL, &["thumbImg"]),
    (fields::IMAGE_URL, &["imageUrl"]),
    (fields::IMAGE_URL, &["postImg"]),
    (fields::DESCRIPTION, &["page", "excerpt"]),
    (fields::DESCRIPTION, &["description"]),
    (fields::DESCRIPTION, &["excerpt"]),
    (fields::DISQUS_ID, &["page", "custom_fields", "dsq_thread_id", "[0]"]),
    (fields::DISQUS_ID, &["dsq_thread_id"]),
    (fields::CREATE_DATE, &["page", "date"]),
    (fields::CREATE_DATE, &["createDate"]),
    (fields::CREATE_DATE, &["date"]),
    (fields::CONTENT, &["content"]),
    (fields::PATH_FROM_DOC_ROOT, &["path"]),
    (fields::HTML_FILENAME, &["filename"]),
    (fields::THUMB_BASE64, &["thumbBase64"]),
];

/// One step of a path through a JSON document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object member lookup
    Key(String),
    /// Array element lookup
    Index(usize),
}

impl PathSegment {
    /// Parse a textual segment; `[N]` is an index marker, anything else a key
    pub fn parse(segment: &str) -> Self {
        INDEX_SEGMENT_REGEX
            .captures(segment)
            .and_then(|caps| caps[1].parse::<usize>().ok())
            .map(PathSegment::Index)
            .unwrap_or_else(|| PathSegment::Key(segment.to_string()))
    }
}

/// An immutable candidate location for a logical field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSpec {
    segments: Vec<PathSegment>,
}

impl PathSpec {
    pub fn new(segments: &[&str]) -> Self {
        PathSpec {
            segments: segments.iter().map(|s| PathSegment::parse(s)).collect(),
        }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

/// Logical field name -> ordered candidate paths
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    paths: HashMap<String, Vec<PathSpec>>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        FieldRegistry::default()
    }

    /// Build the fixed page table
    pub fn page_defaults() -> Self {
        let mut registry = FieldRegistry::new();
        for (field, segments) in PAGE_KEY_PATHS {
            registry.register(field, PathSpec::new(segments));
        }
        registry
    }

    /// Append a candidate to a field, after the ones already registered
    pub fn register(&mut self, field: &str, path: PathSpec) {
        self.paths.entry(field.to_string()).or_default().push(path);
    }

    /// Candidates in priority order; empty for unknown fields
    pub fn candidates_for(&self, field: &str) -> &[PathSpec] {
        self.paths.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, field: &str) -> bool {
        self.paths.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.paths.keys().map(String::as_str)
    }
}

/// The process-wide page registry, built on first use
pub fn page_registry() -> &'static FieldRegistry {
    &PAGE_REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_marker_parsing() {
        assert_eq!(PathSegment::parse("[0]"), PathSegment::Index(0));
        assert_eq!(PathSegment::parse("[12]"), PathSegment::Index(12));
        assert_eq!(PathSegment::parse("page"), PathSegment::Key("page".to_string()));
        assert_eq!(PathSegment::parse("[x]"), PathSegment::Key("[x]".to_string()));
        assert_eq!(PathSegment::parse("a[0]"), PathSegment::Key("a[0]".to_string()));
    }

    #[test]
    fn test_register_preserves_order() {
        let mut registry = FieldRegistry::new();
        registry.register("id", PathSpec::new(&["page", "post_id"]));
        registry.register("id", PathSpec::new(&["id"]));

        let candidates = registry.candidates_for("id");
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0], PathSpec::new(&["page", "post_id"]));
        assert_eq!(candidates[1], PathSpec::new(&["id"]));
    }

    #[test]
    fn test_unknown_field_has_no_candidates() {
        let registry = FieldRegistry::page_defaults();
        assert!(registry.candidates_for("nonexistent").is_empty());
        assert!(!registry.contains("nonexistent"));
    }

    #[test]
    fn test_every_extracted_field_is_registered() {
        let registry = page_registry();
        for field in fields::ALL {
            assert!(registry.contains(field), "missing field {}", field);
        }
        assert_eq!(registry.fields().count(), fields::ALL.len());
    }

    #[test]
    fn test_disqus_candidate_reaches_into_array() {
        let candidates = page_registry().candidates_for(fields::DISQUS_ID);
        assert_eq!(
            candidates[0].segments(),
            &[
                PathSegment::Key("page".to_string()),
                PathSegment::Key("custom_fields".to_string()),
                PathSegment::Key("dsq_thread_id".to_string()),
                PathSegment::Index(0),
            ]
        );
    }

    #[test]
    fn test_description_precedence() {
        let candidates = page_registry().candidates_for(fields::DESCRIPTION);
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0], PathSpec::new(&["page", "excerpt"]));
        assert_eq!(candidates[1], PathSpec::new(&["description"]));
        assert_eq!(candidates[2], PathSpec::new(&["excerpt"]));
    }
}
