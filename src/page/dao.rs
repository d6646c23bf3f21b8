use crate::error::Result;
use crate::page::canonical::{find_json_version, to_canonical_json};
use crate::page::extractor::Extractor;
use crate::page::types::{JsonBackend, PageConfig, PageRecord};
use serde_json::Value;
use tracing::debug;

/// Loads one page document and writes it back in canonical form
#[derive(Debug, Clone)]
pub struct PageDao {
    record: PageRecord,
    version: u64,
    config: PageConfig,
}

impl PageDao {
    /// Resolve `data` into a page record
    ///
    /// `None` starts a new, empty page in the current layout. The filesystem
    /// path is carried on the record but never read from the document.
    pub fn new(data: Option<&[u8]>, fs_path: &str, config: PageConfig) -> Result<Self> {
        let version = find_json_version(data);

        let record = match data {
            None => PageRecord::empty().with_fs_path(fs_path),
            Some(bytes) => {
                let extractor = Extractor::default();
                match config.backend {
                    JsonBackend::Serde => {
                        let doc: Value = serde_json::from_slice(bytes)?;
                        extractor.extract_record(&doc, fs_path, &config)
                    }
                    JsonBackend::Simd => {
                        let mut buffer = bytes.to_vec();
                        let doc = simd_json::to_owned_value(&mut buffer)?;
                        extractor.extract_record(&doc, fs_path, &config)
                    }
                }
            }
        };

        debug!(version, id = record.id(), fs_path, "loaded page");

        Ok(PageDao {
            record,
            version,
            config,
        })
    }

    pub fn record(&self) -> &PageRecord {
        &self.record
    }

    /// Replace the record, e.g. after the caller edited it
    pub fn set_record(&mut self, record: PageRecord) {
        self.record = record;
    }

    /// Schema version of the source document
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The record in canonical layout
    pub fn fill_json(&self) -> Result<Vec<u8>> {
        to_canonical_json(&self.record, self.config.style)
    }
}
