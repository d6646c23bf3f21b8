//! # pagemeld - page metadata schema resolution
//!
//! Blog post metadata has been stored in several JSON shapes over time: flat
//! fields, fields nested under `page`/`post` wrappers, and the current
//! versioned layout. This crate reads any of them into one [`PageRecord`] and
//! writes it back in the canonical layout.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagemeld::{PageConfig, PageDao};
//!
//! # fn main() -> pagemeld::Result<()> {
//! let legacy = br#"{"page": {"post_id": 12, "excerpt": "Hi"}, "title": "Hello"}"#;
//!
//! let dao = PageDao::new(Some(&legacy[..]), "", PageConfig::default())?;
//! assert_eq!(dao.record().id(), 12);
//! assert_eq!(dao.record().description(), "Hi");
//!
//! let canonical = dao.fill_json()?;
//! assert!(canonical.starts_with(b"{\n\t\"version\":1,"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Version probing
//!
//! ```rust
//! use pagemeld::find_json_version;
//!
//! assert_eq!(find_json_version(None), 1);
//! assert_eq!(find_json_version(Some(&br#"{"version":1}"#[..])), 1);
//! assert_eq!(find_json_version(Some(&br#"{"title":"x"}"#[..])), 0);
//! ```

use std::io::{BufRead, Write};

pub mod error;
pub mod page;

// Re-export commonly used types for convenience
pub use error::{PageError, Result};
pub use page::{
    find_json_version, to_canonical_json, CanonicalStyle, CanonicalWriter, Extractor, JsonBackend,
    PageConfig, PageDao, PageRecord, CANONICAL_VERSION,
};

/// Main entry point: resolve a stream of page documents, one per line
///
/// Blank lines are skipped. Every other line is resolved and written through
/// `writer` in `config.style`. Returns the number of pages written.
pub fn resolve_json<R: BufRead, W: Write>(
    reader: R,
    writer: &mut CanonicalWriter<W>,
    config: &PageConfig,
) -> Result<usize> {
    let mut count = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let dao = PageDao::new(Some(line.as_bytes()), "", config.clone())?;
        writer.write_record(dao.record())?;
        count += 1;
    }

    writer.flush()?;
    Ok(count)
}
