//! Pixel canvas with fixed channel count and 4-connected adjacency
//!
//! The canvas owns a row-major `height x width x channels` byte buffer and is
//! mutated in place by every synthesis pass. Its `pixels` iteration order is
//! the canonical full-canvas traversal used throughout the system; grouping
//! and hole filling rely on it for reproducible scans.

use crate::io::configuration::MAX_CANVAS_DIMENSION;
use crate::io::error::{Result, SynthesisError, invalid_parameter};
use ndarray::Array3;

/// Maximum channel count a colour can carry
pub const MAX_CHANNELS: usize = 3;

/// A `(row, col)` position on a canvas
pub type Coordinate = (usize, usize);

/// Fixed-arity colour value, one byte per channel
///
/// Carries either one channel (grayscale) or three (RGB). Equality is exact
/// and element-wise; the all-zero value is the "unset" sentinel used by the
/// hole-filling pass. The total order exists so colour-keyed maps iterate
/// deterministically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    // Trailing entries beyond `channels` stay zero so derived comparisons hold
    values: [u8; MAX_CHANNELS],
    channels: u8,
}

impl Color {
    /// Single-channel grayscale colour
    pub const fn gray(value: u8) -> Self {
        Self {
            values: [value, 0, 0],
            channels: 1,
        }
    }

    /// Three-channel RGB colour
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            values: [r, g, b],
            channels: 3,
        }
    }

    /// All-zero colour with the given arity, the unset sentinel
    pub const fn unset(channel_count: usize) -> Self {
        Self {
            values: [0, 0, 0],
            channels: channel_count as u8,
        }
    }

    /// Build a colour from a channel slice
    ///
    /// # Errors
    ///
    /// Returns an error if the slice length is not 1 or 3.
    pub fn from_channels(channels: &[u8]) -> Result<Self> {
        match *channels {
            [value] => Ok(Self::gray(value)),
            [r, g, b] => Ok(Self::rgb(r, g, b)),
            _ => Err(invalid_parameter(
                "color",
                &format!("{channels:?}"),
                &"a colour carries exactly 1 or 3 channels",
            )),
        }
    }

    /// Number of channels this colour carries
    pub const fn channel_count(&self) -> usize {
        self.channels as usize
    }

    /// Channel values in order
    pub fn as_slice(&self) -> &[u8] {
        self.values.get(..self.channels as usize).unwrap_or(&[])
    }

    /// Whether every channel is zero
    pub const fn is_unset(&self) -> bool {
        matches!(self.values, [0, 0, 0])
    }

    pub(crate) const fn from_raw(values: [u8; MAX_CHANNELS], channel_count: usize) -> Self {
        Self {
            values,
            channels: channel_count as u8,
        }
    }
}

/// In-bounds 4-connected neighbours of a cell, in the fixed order
/// up, left, down, right
///
/// Yields 2 results at a corner, 3 on an edge, 4 in the interior. The fixed
/// order keeps neighbour-weighted draws reproducible under a seeded
/// generator.
pub fn adjacent_coordinates(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> impl Iterator<Item = Coordinate> {
    let up = row.checked_sub(1).map(|r| (r, col));
    let left = col.checked_sub(1).map(|c| (row, c));
    let down = (row + 1 < rows).then_some((row + 1, col));
    let right = (col + 1 < cols).then_some((row, col + 1));

    [up, left, down, right].into_iter().flatten()
}

/// Fixed-channel pixel canvas backed by a row-major byte buffer
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    channels: usize,
    buffer: Array3<u8>,
}

impl Canvas {
    /// Create a zero-filled canvas
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// [`MAX_CANVAS_DIMENSION`], or if the channel count is not 1 or 3.
    pub fn new(width: usize, height: usize, channels: usize) -> Result<Self> {
        let invalid = |reason| SynthesisError::InvalidDimensions {
            width,
            height,
            channels,
            reason,
        };

        if width == 0 || height == 0 {
            return Err(invalid("dimensions must be positive"));
        }
        if width > MAX_CANVAS_DIMENSION || height > MAX_CANVAS_DIMENSION {
            return Err(invalid("dimension exceeds the safety maximum"));
        }
        if channels != 1 && channels != 3 {
            return Err(invalid("channel count must be 1 (grayscale) or 3 (RGB)"));
        }

        Ok(Self {
            width,
            height,
            channels,
            buffer: Array3::zeros((height, width, channels)),
        })
    }

    /// Canvas width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Canvas height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Channels per pixel: 1 for grayscale, 3 for RGB
    pub const fn channel_count(&self) -> usize {
        self.channels
    }

    /// Colour at a pixel, or `None` outside the canvas
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        if row >= self.height || col >= self.width {
            return None;
        }

        let mut values = [0_u8; MAX_CHANNELS];
        for (offset, slot) in values.iter_mut().take(self.channels).enumerate() {
            *slot = self.buffer.get([row, col, offset]).copied().unwrap_or(0);
        }
        Some(Color::from_raw(values, self.channels))
    }

    /// Write a colour to a pixel
    ///
    /// # Errors
    ///
    /// Returns a channel mismatch error if the colour's arity disagrees with
    /// the canvas, or an out-of-bounds error for coordinates outside it.
    pub fn set(&mut self, row: usize, col: usize, color: Color) -> Result<()> {
        if color.channel_count() != self.channels {
            return Err(SynthesisError::ChannelMismatch {
                expected: self.channels,
                actual: color.channel_count(),
            });
        }
        if row >= self.height || col >= self.width {
            return Err(SynthesisError::OutOfBounds {
                row,
                col,
                rows: self.height,
                cols: self.width,
            });
        }

        for (offset, &value) in color.as_slice().iter().enumerate() {
            if let Some(cell) = self.buffer.get_mut([row, col, offset]) {
                *cell = value;
            }
        }
        Ok(())
    }

    /// Fresh row-major iterator over every coordinate
    ///
    /// This ordering (row 0 col 0..width, then row 1, ...) is the canonical
    /// traversal order for all full-canvas scans.
    pub fn pixels(&self) -> impl Iterator<Item = Coordinate> + use<> {
        let rows = self.height;
        let cols = self.width;
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    /// In-bounds 4-connected neighbours of a pixel, in the order
    /// up, left, down, right
    pub fn adjacent(&self, row: usize, col: usize) -> impl Iterator<Item = Coordinate> + use<> {
        adjacent_coordinates(row, col, self.height, self.width)
    }

    /// Overwrite every pixel with one colour
    ///
    /// # Errors
    ///
    /// Returns a channel mismatch error if the colour's arity disagrees with
    /// the canvas.
    pub fn fill(&mut self, color: Color) -> Result<()> {
        for (row, col) in self.pixels() {
            self.set(row, col, color)?;
        }
        Ok(())
    }

    /// Produce a canvas where each source pixel becomes a `factor x factor`
    /// block of identical colour
    ///
    /// Pure with respect to the source canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if `factor` is zero, or if the scaled dimensions
    /// exceed the safety maximum.
    pub fn scale_up(&self, factor: usize) -> Result<Self> {
        if factor < 1 {
            return Err(invalid_parameter(
                "factor",
                &factor,
                &"scale factor must be at least 1",
            ));
        }

        let scaled_width = self.width.checked_mul(factor).unwrap_or(usize::MAX);
        let scaled_height = self.height.checked_mul(factor).unwrap_or(usize::MAX);
        let mut scaled = Self::new(scaled_width, scaled_height, self.channels)?;
        for (row, col) in self.pixels() {
            let Some(color) = self.get(row, col) else {
                continue;
            };
            for block_row in 0..factor {
                for block_col in 0..factor {
                    scaled.set(row * factor + block_row, col * factor + block_col, color)?;
                }
            }
        }
        Ok(scaled)
    }

    /// Row-major raw buffer, `channels` bytes per pixel
    pub fn raw(&self) -> &[u8] {
        self.buffer.as_slice().unwrap_or(&[])
    }
}
