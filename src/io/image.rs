//! Canvas export to raster image files
//!
//! The output format follows the file extension. Export failures surface
//! immediately and are never retried.

use crate::io::error::{Result, SynthesisError, config_error};
use crate::spatial::canvas::Canvas;
use image::{GrayImage, RgbImage};
use std::path::Path;

/// Write a canvas to a raster image file
///
/// Grayscale canvases export one byte per pixel, RGB canvases three. The
/// parent directory is created if missing.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be encoded and written.
pub fn export_canvas(canvas: &Canvas, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|err| SynthesisError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: err,
            })?;
        }
    }

    let width = canvas.width() as u32;
    let height = canvas.height() as u32;
    let buffer = canvas.raw().to_vec();

    let saved = if canvas.channel_count() == 1 {
        GrayImage::from_raw(width, height, buffer)
            .ok_or_else(|| config_error("canvas buffer does not match its dimensions"))?
            .save(output_path)
    } else {
        RgbImage::from_raw(width, height, buffer)
            .ok_or_else(|| config_error("canvas buffer does not match its dimensions"))?
            .save(output_path)
    };

    saved.map_err(|err| SynthesisError::Export {
        path: output_path.to_path_buf(),
        source: err,
    })
}
