//! IDX binary format reader for digit images and their labels
//!
//! Image files open with a 16-byte big-endian header `(magic, count, rows,
//! cols)` followed by `count * rows * cols` unsigned pixel bytes. Label files
//! open with an 8-byte header `(magic, count)` followed by `count` label bytes.

use crate::io::configuration::{
    IDX_IMAGES_HEADER_LEN, IDX_IMAGES_MAGIC, IDX_LABELS_HEADER_LEN, IDX_LABELS_MAGIC,
};
use crate::io::error::{Result, SequenceError, invalid_source};
use ndarray::Array3;
use std::path::Path;
use tracing::info;

/// Labeled glyph images read from a pair of IDX files
#[derive(Debug, Clone)]
pub struct Corpus {
    /// Raw pixels indexed by (image, row, col)
    pub images: Array3<u8>,
    /// Digit label for each image
    pub labels: Vec<u8>,
}

impl Corpus {
    /// Pair images with labels, checking that both hold the same number of entries
    ///
    /// # Errors
    ///
    /// Returns `CorpusMismatch` if the counts differ
    pub fn new(images: Array3<u8>, labels: Vec<u8>) -> Result<Self> {
        let image_count = images.dim().0;
        if image_count != labels.len() {
            return Err(SequenceError::CorpusMismatch {
                images: image_count,
                labels: labels.len(),
            });
        }
        Ok(Self { images, labels })
    }

    /// Number of labeled images
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the corpus holds no images
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Glyph height in pixels
    pub fn rows(&self) -> usize {
        self.images.dim().1
    }

    /// Glyph width in pixels
    pub fn cols(&self) -> usize {
        self.images.dim().2
    }
}

fn read_u32_be(bytes: &[u8], offset: usize) -> Result<u32> {
    bytes
        .get(offset..offset + 4)
        .and_then(|slice| <[u8; 4]>::try_from(slice).ok())
        .map(u32::from_be_bytes)
        .ok_or_else(|| invalid_source(&format!("header truncated at byte {offset}")))
}

fn check_magic(found: u32, expected: u32, kind: &str) -> Result<()> {
    if found == expected {
        Ok(())
    } else {
        Err(invalid_source(&format!(
            "{kind} file has magic {found:#010x}, expected {expected:#010x}"
        )))
    }
}

/// Decode an IDX image file held in memory
///
/// # Errors
///
/// Returns `InvalidSourceData` if the header is short, the magic number is
/// wrong, or the payload holds fewer pixels than the header declares
pub fn parse_images(bytes: &[u8]) -> Result<Array3<u8>> {
    check_magic(read_u32_be(bytes, 0)?, IDX_IMAGES_MAGIC, "image")?;
    let count = read_u32_be(bytes, 4)? as usize;
    let rows = read_u32_be(bytes, 8)? as usize;
    let cols = read_u32_be(bytes, 12)? as usize;

    let pixel_count = count
        .checked_mul(rows)
        .and_then(|n| n.checked_mul(cols))
        .ok_or_else(|| invalid_source(&"image dimensions overflow"))?;

    let payload = bytes
        .get(IDX_IMAGES_HEADER_LEN..IDX_IMAGES_HEADER_LEN.saturating_add(pixel_count))
        .ok_or_else(|| {
            invalid_source(&format!(
                "image payload holds {} bytes, header declares {pixel_count}",
                bytes.len().saturating_sub(IDX_IMAGES_HEADER_LEN)
            ))
        })?;

    Array3::from_shape_vec((count, rows, cols), payload.to_vec())
        .map_err(|e| invalid_source(&format!("image payload shape: {e}")))
}

/// Decode an IDX label file held in memory
///
/// # Errors
///
/// Returns `InvalidSourceData` if the header is short, the magic number is
/// wrong, or the payload holds fewer labels than the header declares
pub fn parse_labels(bytes: &[u8]) -> Result<Vec<u8>> {
    check_magic(read_u32_be(bytes, 0)?, IDX_LABELS_MAGIC, "label")?;
    let count = read_u32_be(bytes, 4)? as usize;

    bytes
        .get(IDX_LABELS_HEADER_LEN..IDX_LABELS_HEADER_LEN.saturating_add(count))
        .map(<[u8]>::to_vec)
        .ok_or_else(|| {
            invalid_source(&format!(
                "label payload holds {} bytes, header declares {count}",
                bytes.len().saturating_sub(IDX_LABELS_HEADER_LEN)
            ))
        })
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| SequenceError::FileSystem {
        path: path.to_path_buf(),
        operation: "read corpus file",
        source: e,
    })
}

/// Load and pair an IDX image file with its label file
///
/// # Errors
///
/// Returns an error if:
/// - Either file cannot be read (`FileSystem`)
/// - Either file is malformed (`InvalidSourceData`)
/// - The image and label counts differ (`CorpusMismatch`)
pub fn load_corpus(images_path: &Path, labels_path: &Path) -> Result<Corpus> {
    let images = parse_images(&read_file(images_path)?)?;
    let labels = parse_labels(&read_file(labels_path)?)?;
    let corpus = Corpus::new(images, labels)?;

    info!(
        images = corpus.len(),
        rows = corpus.rows(),
        cols = corpus.cols(),
        "loaded digit corpus"
    );
    Ok(corpus)
}
