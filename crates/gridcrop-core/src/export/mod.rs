//! Packaging collected cells for download.
//!
//! A single cell is exported as one PNG named by the [`NamingScheme`];
//! several cells go into [`ARCHIVE_NAME`] with one PNG entry per cell, in
//! crop order.
//!
//! # Examples
//!
//! ```ignore
//! use gridcrop_core::export::{export_crops, NamingScheme};
//!
//! if let Some(file) = export_crops(&rows, &NamingScheme::default())? {
//!     std::fs::write(&file.name, &file.bytes)?;
//! }
//! ```

mod archive;
mod naming;

pub use archive::{write_zip, ARCHIVE_NAME};
pub use naming::{FilenamePreview, NamingScheme};

use thiserror::Error;

use crate::crop::CroppedCell;
use crate::decode::RasterImage;
use crate::encode::{encode_png_image, EncodeError};

/// Errors that can occur while exporting cells.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A cell could not be encoded.
    #[error("Failed to encode cell {index}: {source}")]
    Encode {
        index: usize,
        #[source]
        source: EncodeError,
    },

    /// The zip archive could not be written.
    #[error("Failed to write archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Writing archive contents failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Kind of file produced by an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Png,
    Zip,
}

impl ExportKind {
    /// MIME type to attach when offering the file for download.
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportKind::Png => "image/png",
            ExportKind::Zip => "application/zip",
        }
    }
}

/// A file ready for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub name: String,
    pub kind: ExportKind,
    pub bytes: Vec<u8>,
}

/// Export cell images in list order.
///
/// Returns `Ok(None)` when there is nothing to export.
pub fn export_images<'a, I>(
    images: I,
    scheme: &NamingScheme,
) -> Result<Option<ExportedFile>, ExportError>
where
    I: IntoIterator<Item = &'a RasterImage>,
{
    let mut encoded = images
        .into_iter()
        .enumerate()
        .map(|(index, image)| {
            encode_png_image(image)
                .map(|bytes| (scheme.filename(index), bytes))
                .map_err(|source| ExportError::Encode { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let count = encoded.len();

    let file = match count {
        0 => return Ok(None),
        1 => {
            let (name, bytes) = encoded.remove(0);
            ExportedFile {
                name,
                kind: ExportKind::Png,
                bytes,
            }
        }
        _ => ExportedFile {
            name: ARCHIVE_NAME.to_string(),
            kind: ExportKind::Zip,
            bytes: write_zip(
                encoded
                    .iter()
                    .map(|(name, bytes)| (name.as_str(), bytes.as_slice())),
            )?,
        },
    };

    log::debug!(
        "exported {} cell(s) as {} ({} bytes)",
        count,
        file.name,
        file.bytes.len()
    );
    Ok(Some(file))
}

/// Export collected crop rows in list order.
pub fn export_crops(
    crops: &[CroppedCell],
    scheme: &NamingScheme,
) -> Result<Option<ExportedFile>, ExportError> {
    export_images(crops.iter().map(|crop| &crop.image), scheme)
}
