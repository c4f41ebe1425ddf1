//! PNG export of generated digit strips

use crate::io::configuration::PIXEL_MAX;
use crate::io::error::{Result, SequenceError};
use image::{GrayImage, Luma};
use ndarray::Array2;
use std::path::Path;

/// Convert a [0, 1] strip to 8-bit grayscale with an inverted ramp
///
/// Background (0) renders white and full ink (1) renders black, so digits
/// appear dark on a light page. Values outside [0, 1] are clamped.
pub fn to_gray_image(strip: &Array2<f32>) -> GrayImage {
    let (rows, cols) = strip.dim();
    let mut img = GrayImage::new(cols as u32, rows as u32);

    for ((row, col), &value) in strip.indexed_iter() {
        let ink = (value.clamp(0.0, 1.0) * PIXEL_MAX).round() as u8;
        img.put_pixel(col as u32, row as u32, Luma([u8::MAX - ink]));
    }

    img
}

/// Export a generated strip as a grayscale PNG
///
/// # Errors
///
/// Returns an error if:
/// - The strip has no pixels (`InvalidParameter`)
/// - The parent directory cannot be created (`FileSystem`)
/// - The image cannot be saved to the specified path (`ImageExport`)
pub fn export_sequence_as_png(strip: &Array2<f32>, output_path: &Path) -> Result<()> {
    if strip.is_empty() {
        return Err(crate::io::error::invalid_parameter(
            "strip",
            &format!("{:?}", strip.dim()),
            &"image has no pixels",
        ));
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SequenceError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    to_gray_image(strip)
        .save(output_path)
        .map_err(|e| SequenceError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
