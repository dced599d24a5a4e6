//! Zip packaging of several exported cells.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::ExportError;

/// Name of the archive produced for multi-cell exports.
pub const ARCHIVE_NAME: &str = "images.zip";

/// Write `(name, bytes)` entries into an in-memory zip archive, in order.
pub fn write_zip<'a, I>(entries: I) -> Result<Vec<u8>, ExportError>
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    for (name, bytes) in entries {
        writer.start_file(name, options)?;
        writer.write_all(bytes)?;
    }

    Ok(writer.finish()?.into_inner())
}
