use crate::error::Result;
use crate::page::canonical::to_canonical_json;
use crate::page::types::{CanonicalStyle, PageRecord};
use std::io::Write;

/// Writes canonical page documents to a single output
pub struct CanonicalWriter<W: Write> {
    writer: W,
    style: CanonicalStyle,
}

impl<W: Write> CanonicalWriter<W> {
    pub fn new(writer: W, style: CanonicalStyle) -> Self {
        CanonicalWriter { writer, style }
    }

    /// Write one document followed by a newline
    pub fn write_record(&mut self, record: &PageRecord) -> Result<()> {
        let json = to_canonical_json(record, self.style)?;
        self.writer.write_all(&json)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn write_records<'a, I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a PageRecord>,
    {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
