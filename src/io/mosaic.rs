//! Decorative mosaic of gapped squares
//!
//! Renders a grid of randomly coloured squares separated by background
//! gaps, with optional "chaining": gaps between same-colour neighbours are
//! painted over so the squares visually join. This is a drawing collaborator
//! only; it consumes core types and nothing flows back into the synthesis
//! passes.

use crate::io::error::{Result, config_error};
use crate::io::palette::Palette;
use crate::spatial::canvas::{Canvas, Color};
use ndarray::Array2;
use rand::Rng;

/// Geometry and colouring parameters for a mosaic
#[derive(Debug, Clone)]
pub struct MosaicConfig {
    /// Output width in pixels
    pub width: usize,
    /// Output height in pixels
    pub height: usize,
    /// Square width in pixels
    pub square_width: usize,
    /// Square height in pixels
    pub square_height: usize,
    /// Gap between squares in pixels
    pub gap: usize,
    /// Margin around the outermost squares in pixels
    pub external_gap: usize,
    /// Background and gap colour
    pub background: Color,
    /// Colours and draw weights for the squares
    pub palette: Palette,
}

impl MosaicConfig {
    /// Check that squares and gaps tile the output exactly
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a square dimension is zero, the
    /// background arity disagrees with the palette, or the squares plus
    /// gaps do not divide the interior evenly along either axis.
    pub fn validate(&self) -> Result<()> {
        if self.square_width == 0 || self.square_height == 0 {
            return Err(config_error("mosaic squares must have positive size"));
        }
        if self.background.channel_count() != self.palette.channel_count() {
            return Err(config_error(
                "mosaic background and palette must share a channel arity",
            ));
        }
        self.cells_along(self.width, self.square_width)?;
        self.cells_along(self.height, self.square_height)?;
        Ok(())
    }

    // Number of squares fitting a span exactly, or a configuration error
    fn cells_along(&self, span: usize, square: usize) -> Result<usize> {
        let pitch = square + self.gap;
        let interior = (span + self.gap)
            .checked_sub(2 * self.external_gap)
            .unwrap_or(0);
        if interior < pitch || !interior.is_multiple_of(pitch) {
            return Err(config_error(format!(
                "span {span} minus margins is not an exact multiple of square {square} plus gap {}",
                self.gap
            )));
        }
        Ok(interior / pitch)
    }
}

/// A generated mosaic: square colours plus the three gap layers
///
/// Gap cells start as background and are overwritten by the chaining
/// operations when their neighbouring squares share a colour.
#[derive(Debug, Clone)]
pub struct Mosaic {
    config: MosaicConfig,
    rows: usize,
    columns: usize,
    squares: Array2<Color>,
    horizontal_gaps: Array2<Color>,
    vertical_gaps: Array2<Color>,
    middle_gaps: Array2<Color>,
}

impl Mosaic {
    /// Generate a mosaic with palette-coloured squares
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the geometry does not tile the
    /// output exactly.
    pub fn generate<R: Rng + ?Sized>(config: MosaicConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let rows = config.cells_along(config.height, config.square_height)?;
        let columns = config.cells_along(config.width, config.square_width)?;

        let mut squares = Array2::from_elem((rows, columns), config.background);
        for cell in squares.iter_mut() {
            *cell = config.palette.sample(rng);
        }

        let horizontal_gaps = Array2::from_elem((rows.saturating_sub(1), columns), config.background);
        let vertical_gaps = Array2::from_elem((rows, columns.saturating_sub(1)), config.background);
        let middle_gaps = Array2::from_elem(
            (rows.saturating_sub(1), columns.saturating_sub(1)),
            config.background,
        );

        Ok(Self {
            config,
            rows,
            columns,
            squares,
            horizontal_gaps,
            vertical_gaps,
            middle_gaps,
        })
    }

    /// Join vertically adjacent same-colour squares across the gap
    /// between their rows
    pub fn chain_vertical(&mut self) {
        for row in 0..self.rows.saturating_sub(1) {
            for col in 0..self.columns {
                let above = self.squares.get([row, col]).copied();
                let below = self.squares.get([row + 1, col]).copied();
                if let (Some(above), Some(below)) = (above, below) {
                    if above == below {
                        if let Some(gap) = self.horizontal_gaps.get_mut([row, col]) {
                            *gap = above;
                        }
                    }
                }
            }
        }
    }

    /// Join horizontally adjacent same-colour squares across the gap
    /// between their columns
    pub fn chain_horizontal(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.columns.saturating_sub(1) {
                let left = self.squares.get([row, col]).copied();
                let right = self.squares.get([row, col + 1]).copied();
                if let (Some(left), Some(right)) = (left, right) {
                    if left == right {
                        if let Some(gap) = self.vertical_gaps.get_mut([row, col]) {
                            *gap = left;
                        }
                    }
                }
            }
        }
    }

    /// Join same-colour squares in both directions, optionally filling the
    /// middle gap where all four corners of a 2x2 block share a colour
    pub fn chain_squares(&mut self, with_middles: bool) {
        self.chain_horizontal();
        self.chain_vertical();

        if !with_middles {
            return;
        }

        for row in 0..self.rows.saturating_sub(1) {
            for col in 0..self.columns.saturating_sub(1) {
                let corners = [
                    self.squares.get([row, col]).copied(),
                    self.squares.get([row, col + 1]).copied(),
                    self.squares.get([row + 1, col]).copied(),
                    self.squares.get([row + 1, col + 1]).copied(),
                ];
                let [Some(first), rest @ ..] = corners else {
                    continue;
                };
                if rest.iter().all(|&corner| corner == Some(first)) {
                    if let Some(gap) = self.middle_gaps.get_mut([row, col]) {
                        *gap = first;
                    }
                }
            }
        }
    }

    /// Render the mosaic to a canvas
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas cannot be constructed or written.
    pub fn render(&self) -> Result<Canvas> {
        let channels = self.config.palette.channel_count();
        let mut canvas = Canvas::new(self.config.width, self.config.height, channels)?;
        canvas.fill(self.config.background)?;

        let square_width = self.config.square_width;
        let square_height = self.config.square_height;
        let gap = self.config.gap;
        let margin = self.config.external_gap;
        let pitch_row = square_height + gap;
        let pitch_col = square_width + gap;

        Self::blit(&mut canvas, &self.squares, square_height, square_width, |row, col| {
            (margin + row * pitch_row, margin + col * pitch_col)
        })?;
        Self::blit(&mut canvas, &self.horizontal_gaps, gap, square_width, |row, col| {
            (margin + row * pitch_row + square_height, margin + col * pitch_col)
        })?;
        Self::blit(&mut canvas, &self.vertical_gaps, square_height, gap, |row, col| {
            (margin + row * pitch_row, margin + col * pitch_col + square_width)
        })?;
        Self::blit(&mut canvas, &self.middle_gaps, gap, gap, |row, col| {
            (
                margin + row * pitch_row + square_height,
                margin + col * pitch_col + square_width,
            )
        })?;

        Ok(canvas)
    }

    // Paint each cell of a layer as a solid block at its computed origin
    fn blit<F>(
        canvas: &mut Canvas,
        cells: &Array2<Color>,
        block_height: usize,
        block_width: usize,
        origin: F,
    ) -> Result<()>
    where
        F: Fn(usize, usize) -> (usize, usize),
    {
        for ((row, col), &color) in cells.indexed_iter() {
            let (top, left) = origin(row, col);
            for block_row in 0..block_height {
                for block_col in 0..block_width {
                    canvas.set(top + block_row, left + block_col, color)?;
                }
            }
        }
        Ok(())
    }
}
