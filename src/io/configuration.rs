//! Synthesis constants and runtime configuration defaults

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default canvas width in pixels before upscaling
pub const DEFAULT_WIDTH: usize = 480;
/// Default canvas height in pixels before upscaling
pub const DEFAULT_HEIGHT: usize = 270;

/// Default integer upscaling factor applied after synthesis
pub const DEFAULT_SCALE: usize = 4;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension
pub const MAX_CANVAS_DIMENSION: usize = 10_000;

// Walk lengths well beyond the pixel count keep unset leftovers rare
/// Walk steps per canvas pixel when no explicit step count is given
pub const STEP_COUNT_MULTIPLIER: usize = 100;

/// Probability that the walk keeps its current colour at each step
pub const DEFAULT_STAY_PROBABILITY: f64 = 0.9998;

/// Maximum number of hole-filling passes over the canvas
pub const DEFAULT_HOLE_FILL_DEPTH: usize = 6;

/// Number of blob-removal passes applied after hole filling
pub const DEFAULT_NOISE_PASSES: usize = 2;

// Regions at or below this size are dissolved regardless of their border
/// Pixel-count threshold under which a region counts as a blob
pub const DEFAULT_SMALLNESS_THRESHOLD: usize = 16;

/// Number of seed points scattered for the nearest-neighbour pipeline
pub const DEFAULT_SEED_POINT_COUNT: usize = 48;

/// Built-in palette as `(rgb, weight)` pairs, a Doom One derivative
pub const DEFAULT_PALETTE: [([u8; 3], f64); 5] = [
    ([187, 194, 207], 2.0),
    ([152, 190, 101], 6.0),
    ([236, 190, 123], 4.0),
    ([81, 175, 239], 4.0),
    ([209, 147, 227], 4.0),
];

// The mosaic defaults tile 1920x1080 exactly: 16x9 squares of 100px with 20px gaps
/// Default side length of a mosaic square in pixels
pub const DEFAULT_MOSAIC_SQUARE: usize = 100;
/// Default gap between mosaic squares in pixels
pub const DEFAULT_MOSAIC_GAP: usize = 20;
/// Default margin around the outermost mosaic squares in pixels
pub const DEFAULT_MOSAIC_EXTERNAL_GAP: usize = 10;
/// Default mosaic canvas width in pixels
pub const DEFAULT_MOSAIC_WIDTH: usize = 1920;
/// Default mosaic canvas height in pixels
pub const DEFAULT_MOSAIC_HEIGHT: usize = 1080;
