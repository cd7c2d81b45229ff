//! Palette and seed-point configuration
//!
//! Converts user-facing colour specifications (hex strings, weight ratios,
//! seed counts) into validated in-memory structures. Malformed input is
//! rejected here so the synthesis passes never see it.

use crate::io::configuration::DEFAULT_PALETTE;
use crate::io::error::{Result, config_error};
use crate::math::sampling::WeightedTable;
use crate::spatial::canvas::{Color, Coordinate};
use rand::Rng;
use std::collections::HashSet;

/// Parse an `RRGGBB` hex colour, with or without a leading `#`
///
/// # Errors
///
/// Returns a configuration error if the input is not six hex digits.
pub fn parse_hex_color(hex: &str) -> Result<Color> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(config_error(format!("'{hex}' is not an RRGGBB hex colour")));
    }

    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .unwrap_or(0)
    };
    Ok(Color::rgb(channel(0..2), channel(2..4), channel(4..6)))
}

/// Parse a palette entry of the form `RRGGBB` or `RRGGBB:weight`
///
/// A bare colour gets weight 1.
///
/// # Errors
///
/// Returns a configuration error for a malformed colour or weight.
pub fn parse_palette_entry(entry: &str) -> Result<(Color, f64)> {
    match entry.split_once(':') {
        Some((hex, weight)) => {
            let weight: f64 = weight.parse().map_err(|err| {
                config_error(format!("'{weight}' is not a palette weight: {err}"))
            })?;
            Ok((parse_hex_color(hex)?, weight))
        }
        None => Ok((parse_hex_color(entry)?, 1.0)),
    }
}

/// Ordered list of colours with draw weights
///
/// Weights are normalized to a probability distribution at the point of
/// drawing; the list itself is immutable once validated.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<(Color, f64)>,
    table: WeightedTable,
}

impl Palette {
    /// Validate and build a palette
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the list is empty, mixes colour
    /// arities, or carries negative, non-finite, or all-zero weights.
    pub fn new(entries: Vec<(Color, f64)>) -> Result<Self> {
        let Some(&(first, _)) = entries.first() else {
            return Err(config_error("palette requires at least one colour"));
        };
        if entries
            .iter()
            .any(|(color, _)| color.channel_count() != first.channel_count())
        {
            return Err(config_error("palette mixes grayscale and RGB colours"));
        }

        let weights: Vec<f64> = entries.iter().map(|&(_, weight)| weight).collect();
        let table = WeightedTable::new(&weights)?;
        Ok(Self { entries, table })
    }

    /// The built-in palette, a Doom One derivative
    ///
    /// # Errors
    ///
    /// Never fails in practice; the built-in entries are statically valid.
    pub fn default_rgb() -> Result<Self> {
        let entries = DEFAULT_PALETTE
            .iter()
            .map(|&([r, g, b], weight)| (Color::rgb(r, g, b), weight))
            .collect();
        Self::new(entries)
    }

    /// Number of palette entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette has no entries (never true once constructed)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Channel arity shared by every palette colour
    pub fn channel_count(&self) -> usize {
        self.entries
            .first()
            .map_or(0, |&(color, _)| color.channel_count())
    }

    /// First palette colour, the walk's starting colour
    pub fn first_color(&self) -> Color {
        self.entries
            .first()
            .map_or(Color::rgb(0, 0, 0), |&(color, _)| color)
    }

    /// Draw a colour with probability proportional to its weight
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        let index = self.table.sample(rng);
        self.entries
            .get(index)
            .map_or_else(|| self.first_color(), |&(color, _)| color)
    }
}

/// Ordered mapping from coordinates to seed colours
///
/// Iteration order is insertion order and doubles as the nearest-neighbour
/// tie-break order: on an exact distance tie the earlier seed wins.
#[derive(Debug, Clone)]
pub struct SeedSet {
    entries: Vec<(Coordinate, Color)>,
}

impl SeedSet {
    /// Validate and build a seed set
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the list is empty or contains a
    /// duplicate coordinate.
    pub fn new(entries: Vec<(Coordinate, Color)>) -> Result<Self> {
        if entries.is_empty() {
            return Err(config_error("seed set requires at least one point"));
        }

        let mut seen: HashSet<Coordinate> = HashSet::new();
        for &(point, _) in &entries {
            if !seen.insert(point) {
                return Err(config_error(format!(
                    "duplicate seed coordinate ({}, {})",
                    point.0, point.1
                )));
            }
        }

        Ok(Self { entries })
    }

    /// Scatter `count` palette-coloured seeds uniformly over a canvas area
    ///
    /// Coordinate collisions keep the first occupant, so the result may hold
    /// fewer than `count` seeds.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `count` is zero or the area is empty.
    pub fn scatter<R: Rng + ?Sized>(
        count: usize,
        width: usize,
        height: usize,
        palette: &Palette,
        rng: &mut R,
    ) -> Result<Self> {
        if count == 0 {
            return Err(config_error("seed count must be at least 1"));
        }
        if width == 0 || height == 0 {
            return Err(config_error("seed area must be non-empty"));
        }

        let mut occupied: HashSet<Coordinate> = HashSet::new();
        let mut entries = Vec::with_capacity(count);
        for _ in 0..count {
            let point = (rng.random_range(0..height), rng.random_range(0..width));
            if occupied.insert(point) {
                entries.push((point, palette.sample(rng)));
            }
        }

        Self::new(entries)
    }

    /// Seed entries in iteration (tie-break) order
    pub fn entries(&self) -> &[(Coordinate, Color)] {
        &self.entries
    }

    /// Number of seeds
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no seeds (never true once constructed)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
