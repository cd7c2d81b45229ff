//! Command-line interface for the synthesis pipelines
//!
//! Three subcommands mirror the three renderers: `walk` runs the full
//! random-walk pipeline, `nearest` the nearest-neighbour pipeline, and
//! `mosaic` the decorative gapped-square grid. Global flags control the
//! seed, output path, palette, and progress display.

use crate::algorithm::executor::{
    NearestPipelineConfig, WalkPipelineConfig, WalkStage, synthesize_nearest,
    synthesize_walk_with,
};
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_HOLE_FILL_DEPTH, DEFAULT_MOSAIC_EXTERNAL_GAP, DEFAULT_MOSAIC_GAP,
    DEFAULT_MOSAIC_HEIGHT, DEFAULT_MOSAIC_SQUARE, DEFAULT_MOSAIC_WIDTH, DEFAULT_NOISE_PASSES,
    DEFAULT_SCALE, DEFAULT_SEED, DEFAULT_SEED_POINT_COUNT, DEFAULT_SMALLNESS_THRESHOLD,
    DEFAULT_STAY_PROBABILITY, DEFAULT_WIDTH,
};
use crate::io::error::Result;
use crate::io::image::export_canvas;
use crate::io::mosaic::{Mosaic, MosaicConfig};
use crate::io::palette::{Palette, parse_hex_color, parse_palette_entry};
use crate::io::progress::StageProgress;
use crate::math::distance::DistanceMetric;
use clap::{Parser, Subcommand, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};

/// Command-line arguments for the synthesis tool
#[derive(Parser)]
#[command(name = "pixeldrift")]
#[command(
    author,
    version,
    about = "Generate pixel-art wallpapers with stochastic algorithms"
)]
pub struct Cli {
    /// Renderer to run
    #[command(subcommand)]
    pub command: Command,

    /// Random seed for reproducible generation
    #[arg(short, long, global = true, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output image path; the format follows the extension
    #[arg(short, long, global = true, default_value = "pixeldrift.png")]
    pub output: PathBuf,

    /// Palette entry as RRGGBB or RRGGBB:weight, repeatable
    /// (defaults to the built-in palette)
    #[arg(short = 'c', long = "color", global = true, value_name = "RRGGBB[:W]")]
    pub colors: Vec<String>,
}

/// Renderer selection
#[derive(Subcommand)]
pub enum Command {
    /// Random-walk colour field with hole filling and blob removal
    Walk {
        /// Canvas width in pixels before upscaling
        #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
        width: usize,

        /// Canvas height in pixels before upscaling
        #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
        height: usize,

        /// Walk steps (defaults to width * height * 100)
        #[arg(long)]
        steps: Option<usize>,

        /// Per-step probability of keeping the current colour
        #[arg(long, default_value_t = DEFAULT_STAY_PROBABILITY)]
        stay_probability: f64,

        /// Maximum hole-filling passes
        #[arg(long, default_value_t = DEFAULT_HOLE_FILL_DEPTH)]
        depth: usize,

        /// Number of blob-removal passes
        #[arg(long, default_value_t = DEFAULT_NOISE_PASSES)]
        passes: usize,

        /// Regions of at most this many pixels count as blobs
        #[arg(long, default_value_t = DEFAULT_SMALLNESS_THRESHOLD)]
        threshold: usize,

        /// Integer upscaling factor applied last
        #[arg(long, default_value_t = DEFAULT_SCALE)]
        scale: usize,

        /// Also export the canvas after each pipeline stage
        #[arg(long)]
        stages: bool,
    },

    /// Nearest-neighbour colouring of scattered seed points
    Nearest {
        /// Canvas width in pixels before upscaling
        #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
        width: usize,

        /// Canvas height in pixels before upscaling
        #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
        height: usize,

        /// Number of seed points scattered over the canvas
        #[arg(long, default_value_t = DEFAULT_SEED_POINT_COUNT)]
        seeds: usize,

        /// Distance metric: manhattan (taxicab) or euclidean
        #[arg(long, default_value = "euclidean")]
        metric: String,

        /// Integer upscaling factor applied last
        #[arg(long, default_value_t = DEFAULT_SCALE)]
        scale: usize,
    },

    /// Decorative mosaic of gapped squares
    Mosaic {
        /// Output width in pixels
        #[arg(short, long, default_value_t = DEFAULT_MOSAIC_WIDTH)]
        width: usize,

        /// Output height in pixels
        #[arg(short = 'H', long, default_value_t = DEFAULT_MOSAIC_HEIGHT)]
        height: usize,

        /// Square side length in pixels
        #[arg(long, default_value_t = DEFAULT_MOSAIC_SQUARE)]
        square: usize,

        /// Gap between squares in pixels
        #[arg(long, default_value_t = DEFAULT_MOSAIC_GAP)]
        gap: usize,

        /// Margin around the outermost squares in pixels
        #[arg(long, default_value_t = DEFAULT_MOSAIC_EXTERNAL_GAP)]
        external_gap: usize,

        /// Background colour as RRGGBB hex
        #[arg(long, default_value = "282c34")]
        background: String,

        /// How to join same-colour neighbouring squares
        #[arg(long, value_enum, default_value = "none")]
        chain: ChainMode,
    },
}

/// Gap-chaining behaviour for the mosaic renderer
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ChainMode {
    /// Leave all gaps as background
    None,
    /// Join vertically adjacent same-colour squares
    Vertical,
    /// Join horizontally adjacent same-colour squares
    Horizontal,
    /// Join in both directions
    Both,
    /// Join in both directions and fill enclosed middle gaps
    Middles,
}

/// Dispatches a parsed command line to the matching pipeline
pub struct PipelineRunner {
    cli: Cli,
}

impl PipelineRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected pipeline and export the result
    ///
    /// # Errors
    ///
    /// Returns an error for malformed configuration or a failed export.
    pub fn run(self) -> Result<()> {
        let Cli {
            command,
            seed,
            quiet,
            output,
            colors,
        } = self.cli;

        let palette = build_palette(&colors)?;
        let progress = StageProgress::new(!quiet);

        match command {
            Command::Walk {
                width,
                height,
                steps,
                stay_probability,
                depth,
                passes,
                threshold,
                scale,
                stages,
            } => {
                let mut config = WalkPipelineConfig::new(width, height, palette);
                config.stay_probability = stay_probability;
                config.hole_fill_depth = depth;
                config.noise_passes = passes;
                config.smallness_threshold = threshold;
                config.scale = scale;
                config.seed = seed;
                if let Some(steps) = steps {
                    config.step_count = steps;
                }
                run_walk(&config, &progress, &output, stages)
            }
            Command::Nearest {
                width,
                height,
                seeds,
                metric,
                scale,
            } => {
                let mut config = NearestPipelineConfig::new(width, height, palette);
                config.seed_count = seeds;
                config.metric = metric.parse::<DistanceMetric>()?;
                config.scale = scale;
                config.seed = seed;
                run_nearest(&config, &progress, &output)
            }
            Command::Mosaic {
                width,
                height,
                square,
                gap,
                external_gap,
                background,
                chain,
            } => {
                let config = MosaicConfig {
                    width,
                    height,
                    square_width: square,
                    square_height: square,
                    gap,
                    external_gap,
                    background: parse_hex_color(&background)?,
                    palette,
                };
                run_mosaic(config, chain, seed, &progress, &output)
            }
        }
    }
}

// The built-in palette applies when no --color flags are given
fn build_palette(colors: &[String]) -> Result<Palette> {
    if colors.is_empty() {
        return Palette::default_rgb();
    }

    let entries = colors
        .iter()
        .map(|spec| parse_palette_entry(spec))
        .collect::<Result<Vec<_>>>()?;
    Palette::new(entries)
}

fn run_walk(
    config: &WalkPipelineConfig,
    progress: &StageProgress,
    output: &Path,
    export_stages: bool,
) -> Result<()> {
    let mut active = progress.begin("random walk");

    let canvas = synthesize_walk_with(config, |stage, intermediate| {
        let (done, next, suffix) = match stage {
            WalkStage::Walk => ("random walk done", Some("hole filling"), Some("walk")),
            WalkStage::HoleFill => ("hole filling done", Some("blob removal"), Some("filled")),
            WalkStage::BlobRemoval => ("blob removal done", Some("upscaling"), Some("denoised")),
            WalkStage::Upscale => ("upscaling done", None, None),
        };

        StageProgress::complete(active.take(), done);
        if let Some(label) = next {
            active = progress.begin(label);
        }

        if export_stages {
            if let Some(suffix) = suffix {
                export_canvas(intermediate, &stage_path(output, suffix))?;
            }
        }
        Ok(())
    })?;

    StageProgress::complete(active.take(), "done");
    export_canvas(&canvas, output)
}

fn run_nearest(
    config: &NearestPipelineConfig,
    progress: &StageProgress,
    output: &Path,
) -> Result<()> {
    let active = progress.begin("nearest-neighbour fill");
    let canvas = synthesize_nearest(config)?;
    StageProgress::complete(active, "nearest-neighbour fill done");
    export_canvas(&canvas, output)
}

fn run_mosaic(
    config: MosaicConfig,
    chain: ChainMode,
    seed: u64,
    progress: &StageProgress,
    output: &Path,
) -> Result<()> {
    let active = progress.begin("mosaic");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut mosaic = Mosaic::generate(config, &mut rng)?;
    match chain {
        ChainMode::None => {}
        ChainMode::Vertical => mosaic.chain_vertical(),
        ChainMode::Horizontal => mosaic.chain_horizontal(),
        ChainMode::Both => mosaic.chain_squares(false),
        ChainMode::Middles => mosaic.chain_squares(true),
    }
    let canvas = mosaic.render()?;

    StageProgress::complete(active, "mosaic done");
    export_canvas(&canvas, output)
}

// Derives `<stem>_<suffix>.<ext>` next to the final output path
fn stage_path(output: &Path, suffix: &str) -> PathBuf {
    let stem = output
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("pixeldrift");
    let extension = output
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("png");
    output.with_file_name(format!("{stem}_{suffix}.{extension}"))
}
