use crate::page::derive::DEFAULT_HTML_FILENAME;

/// The resolved metadata of one page, independent of its source shape
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRecord {
    id: i64,
    title: String,
    title_plain: String,
    thumb_url: String,
    image_url: String,
    description: String,
    disqus_id: String,
    create_date: String,
    content: String,
    url: String,
    domain: String,
    path_from_doc_root: String,
    fs_path: String,
    html_filename: String,
    thumb_base64: String,
}

macro_rules! string_field {
    ($field:ident, $with:ident) => {
        pub fn $field(&self) -> &str {
            &self.$field
        }

        pub fn $with(mut self, value: impl Into<String>) -> Self {
            self.$field = value.into();
            self
        }
    };
}

impl PageRecord {
    /// All strings empty, id zero
    pub fn empty() -> Self {
        PageRecord::default()
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    string_field!(title, with_title);
    string_field!(title_plain, with_title_plain);
    string_field!(thumb_url, with_thumb_url);
    string_field!(image_url, with_image_url);
    string_field!(description, with_description);
    string_field!(disqus_id, with_disqus_id);
    string_field!(create_date, with_create_date);
    string_field!(content, with_content);
    string_field!(url, with_url);
    string_field!(domain, with_domain);
    string_field!(path_from_doc_root, with_path_from_doc_root);
    string_field!(fs_path, with_fs_path);
    string_field!(html_filename, with_html_filename);
    string_field!(thumb_base64, with_thumb_base64);
}

/// Which parser turns input bytes into a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonBackend {
    #[default]
    Serde,
    Simd,
}

/// Layout of the canonical output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CanonicalStyle {
    /// Tab-indented, one key per line
    #[default]
    Pretty,
    /// Single line, for newline-delimited output
    Compact,
}

/// Configuration for resolving and rendering pages
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Filename used when the source has none
    pub default_html_filename: String,

    /// Parser for raw input bytes
    pub backend: JsonBackend,

    /// Output layout
    pub style: CanonicalStyle,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            default_html_filename: String::from(DEFAULT_HTML_FILENAME),
            backend: JsonBackend::default(),
            style: CanonicalStyle::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_setters_build_new_values() {
        let empty = PageRecord::empty();
        let titled = empty.clone().with_title("Hello").with_id(3);

        assert_eq!(empty.title(), "");
        assert_eq!(empty.id(), 0);
        assert_eq!(titled.title(), "Hello");
        assert_eq!(titled.id(), 3);
    }

    #[test]
    fn test_default_config() {
        let config = PageConfig::default();
        assert_eq!(config.default_html_filename, "index.html");
        assert_eq!(config.backend, JsonBackend::Serde);
        assert_eq!(config.style, CanonicalStyle::Pretty);
    }
}
