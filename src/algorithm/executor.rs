//! End-to-end pipeline drivers and their configuration
//!
//! Two pipelines share the canvas and the seeded generator discipline: the
//! walk pipeline (random walk, hole filling, repeated blob removal,
//! upscaling) and the nearest-neighbour pipeline (seed scattering, nearest
//! fill, upscaling). Each drains a single `StdRng` seeded from the
//! configuration, so a given configuration always reproduces the same
//! canvas byte for byte.

use crate::algorithm::blob_removal::BlobRemover;
use crate::algorithm::hole_fill::HoleFiller;
use crate::algorithm::nearest::fill_nearest;
use crate::algorithm::walker::RandomWalk;
use crate::io::configuration::{
    DEFAULT_HOLE_FILL_DEPTH, DEFAULT_NOISE_PASSES, DEFAULT_SCALE, DEFAULT_SEED,
    DEFAULT_SEED_POINT_COUNT, DEFAULT_SMALLNESS_THRESHOLD, DEFAULT_STAY_PROBABILITY,
    STEP_COUNT_MULTIPLIER,
};
use crate::io::error::{Result, config_error, invalid_parameter};
use crate::io::palette::{Palette, SeedSet};
use crate::math::distance::DistanceMetric;
use crate::spatial::canvas::Canvas;
use rand::{SeedableRng, rngs::StdRng};

/// Parameters for the walk pipeline
#[derive(Debug, Clone)]
pub struct WalkPipelineConfig {
    /// Canvas width in pixels before upscaling
    pub width: usize,
    /// Canvas height in pixels before upscaling
    pub height: usize,
    /// Channels per pixel: 1 for grayscale, 3 for RGB
    pub channels: usize,
    /// Colours and draw weights for the walk
    pub palette: Palette,
    /// Per-step probability of keeping the current colour
    pub stay_probability: f64,
    /// Total walk steps
    pub step_count: usize,
    /// Maximum hole-filling passes
    pub hole_fill_depth: usize,
    /// Number of blob-removal passes
    pub noise_passes: usize,
    /// Pixel-count threshold under which a region counts as a blob
    pub smallness_threshold: usize,
    /// Integer upscaling factor applied last
    pub scale: usize,
    /// Seed for the pipeline's random number generator
    pub seed: u64,
}

impl WalkPipelineConfig {
    /// Defaults for the given canvas size and palette
    ///
    /// The step count defaults to a large multiple of the pixel count so
    /// unset leftovers stay rare.
    pub fn new(width: usize, height: usize, palette: Palette) -> Self {
        let channels = palette.channel_count();
        Self {
            width,
            height,
            channels,
            palette,
            stay_probability: DEFAULT_STAY_PROBABILITY,
            step_count: width.saturating_mul(height).saturating_mul(STEP_COUNT_MULTIPLIER),
            hole_fill_depth: DEFAULT_HOLE_FILL_DEPTH,
            noise_passes: DEFAULT_NOISE_PASSES,
            smallness_threshold: DEFAULT_SMALLNESS_THRESHOLD,
            scale: DEFAULT_SCALE,
            seed: DEFAULT_SEED,
        }
    }

    /// Check parameter consistency
    ///
    /// # Errors
    ///
    /// Returns an error for a zero scale factor or a palette whose arity
    /// disagrees with the configured channel count. Canvas dimensions are
    /// validated by canvas construction.
    pub fn validate(&self) -> Result<()> {
        if self.scale < 1 {
            return Err(invalid_parameter(
                "scale",
                &self.scale,
                &"scale factor must be at least 1",
            ));
        }
        if self.palette.channel_count() != self.channels {
            return Err(config_error(format!(
                "palette carries {} channel(s) but the pipeline is configured for {}",
                self.palette.channel_count(),
                self.channels
            )));
        }
        Ok(())
    }
}

/// Pipeline stages reported to observers as they complete
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkStage {
    /// Random walk finished painting
    Walk,
    /// Hole filling converged or hit its depth bound
    HoleFill,
    /// All blob-removal passes applied
    BlobRemoval,
    /// Final canvas upscaled
    Upscale,
}

/// Run the walk pipeline
///
/// # Errors
///
/// Returns an error for inconsistent configuration or a canvas write
/// failure.
pub fn synthesize_walk(config: &WalkPipelineConfig) -> Result<Canvas> {
    synthesize_walk_with(config, |_, _| Ok(()))
}

/// Run the walk pipeline, reporting each completed stage to an observer
///
/// The observer sees the canvas after every stage; intermediate exports and
/// progress displays hook in here without touching the passes themselves.
///
/// # Errors
///
/// Returns an error for inconsistent configuration, a canvas write
/// failure, or an error returned by the observer.
pub fn synthesize_walk_with<F>(config: &WalkPipelineConfig, mut observer: F) -> Result<Canvas>
where
    F: FnMut(WalkStage, &Canvas) -> Result<()>,
{
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut canvas = Canvas::new(config.width, config.height, config.channels)?;

    let walk = RandomWalk::new(
        config.step_count,
        config.stay_probability,
        config.palette.clone(),
    )?;
    walk.paint(&mut canvas, &mut rng)?;
    observer(WalkStage::Walk, &canvas)?;

    HoleFiller::new(config.hole_fill_depth).fill(&mut canvas, &mut rng)?;
    observer(WalkStage::HoleFill, &canvas)?;

    let remover = BlobRemover::new(config.smallness_threshold);
    for _ in 0..config.noise_passes {
        if remover.remove(&mut canvas, &mut rng)? == 0 {
            break;
        }
    }
    observer(WalkStage::BlobRemoval, &canvas)?;

    if config.scale > 1 {
        canvas = canvas.scale_up(config.scale)?;
    }
    observer(WalkStage::Upscale, &canvas)?;

    Ok(canvas)
}

/// Parameters for the nearest-neighbour pipeline
#[derive(Debug, Clone)]
pub struct NearestPipelineConfig {
    /// Canvas width in pixels before upscaling
    pub width: usize,
    /// Canvas height in pixels before upscaling
    pub height: usize,
    /// Channels per pixel: 1 for grayscale, 3 for RGB
    pub channels: usize,
    /// Colours and draw weights for seed scattering
    pub palette: Palette,
    /// Number of seed points scattered over the canvas
    pub seed_count: usize,
    /// Distance metric deciding the closest seed
    pub metric: DistanceMetric,
    /// Integer upscaling factor applied last
    pub scale: usize,
    /// Seed for the pipeline's random number generator
    pub seed: u64,
}

impl NearestPipelineConfig {
    /// Defaults for the given canvas size and palette
    pub fn new(width: usize, height: usize, palette: Palette) -> Self {
        let channels = palette.channel_count();
        Self {
            width,
            height,
            channels,
            palette,
            seed_count: DEFAULT_SEED_POINT_COUNT,
            metric: DistanceMetric::Euclidean,
            scale: DEFAULT_SCALE,
            seed: DEFAULT_SEED,
        }
    }

    /// Check parameter consistency
    ///
    /// # Errors
    ///
    /// Returns an error for a zero scale factor, a zero seed count, or a
    /// palette whose arity disagrees with the configured channel count.
    pub fn validate(&self) -> Result<()> {
        if self.scale < 1 {
            return Err(invalid_parameter(
                "scale",
                &self.scale,
                &"scale factor must be at least 1",
            ));
        }
        if self.seed_count == 0 {
            return Err(invalid_parameter(
                "seed_count",
                &self.seed_count,
                &"at least one seed point is required",
            ));
        }
        if self.palette.channel_count() != self.channels {
            return Err(config_error(format!(
                "palette carries {} channel(s) but the pipeline is configured for {}",
                self.palette.channel_count(),
                self.channels
            )));
        }
        Ok(())
    }
}

/// Run the nearest-neighbour pipeline
///
/// # Errors
///
/// Returns an error for inconsistent configuration or a canvas write
/// failure.
pub fn synthesize_nearest(config: &NearestPipelineConfig) -> Result<Canvas> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut canvas = Canvas::new(config.width, config.height, config.channels)?;

    let seeds = SeedSet::scatter(
        config.seed_count,
        config.width,
        config.height,
        &config.palette,
        &mut rng,
    )?;
    fill_nearest(&mut canvas, &seeds, config.metric)?;

    if config.scale > 1 {
        canvas = canvas.scale_up(config.scale)?;
    }
    Ok(canvas)
}
