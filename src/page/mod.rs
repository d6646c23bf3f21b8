//! Page schema resolution
//!
//! Reconciles the several JSON shapes a page's metadata has been stored in
//! into one [`PageRecord`], and writes it back in the canonical layout.
//!
//! Data flow: bytes -> parsed document -> [`Extractor`] (registry + resolver)
//! per logical field -> [`derive`] -> [`PageRecord`] -> [`canonical`].

pub mod registry;
pub mod document;
pub mod resolver;
pub mod extractor;
pub mod derive;
pub mod types;
pub mod canonical;
pub mod dao;
pub mod writer;

pub use registry::{fields, page_registry, FieldRegistry, PathSegment, PathSpec};
pub use document::{DocumentNode, Scalar};
pub use resolver::{resolve_int, resolve_string};
pub use extractor::Extractor;
pub use types::{CanonicalStyle, JsonBackend, PageConfig, PageRecord};
pub use canonical::{find_json_version, to_canonical_json, CANONICAL_VERSION};
pub use dao::PageDao;
pub use writer::CanonicalWriter;
