//! Connected-component grouping of same-colour pixels
//!
//! A region is a maximal set of 4-connected pixels sharing one colour. One
//! grouping pass partitions the canvas exactly: every pixel lands in exactly
//! one region. Flood filling runs breadth-first over an explicit queue so
//! large regions never risk exhausting the call stack.

use crate::spatial::canvas::{Canvas, Color, Coordinate, adjacent_coordinates};
use bitvec::prelude::*;
use std::collections::{HashMap, HashSet, VecDeque};

/// A maximal 4-connected set of same-colour pixels
///
/// Built by [`group_regions`] and never mutated afterwards; consumers that
/// recolour a region write to the canvas, not the region.
#[derive(Debug, Clone)]
pub struct Region {
    color: Color,
    points: Vec<Coordinate>,
    grid_rows: usize,
    grid_cols: usize,
}

impl Region {
    /// Colour shared by every pixel in the region
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Member coordinates in flood-fill discovery order
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Number of pixels in the region
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the region has no pixels (never true for grouped regions)
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Coordinates adjacent to the region but not inside it
    ///
    /// Computed on demand and not cached; each call walks the membership
    /// afresh. Yields every boundary coordinate exactly once.
    pub fn boundary_points(&self) -> impl Iterator<Item = Coordinate> {
        let members: HashSet<Coordinate> = self.points.iter().copied().collect();
        let rows = self.grid_rows;
        let cols = self.grid_cols;
        let mut seen: HashSet<Coordinate> = HashSet::new();

        self.points
            .iter()
            .flat_map(move |&(row, col)| adjacent_coordinates(row, col, rows, cols))
            .filter(move |point| !members.contains(point) && seen.insert(*point))
    }
}

/// Group every pixel of the canvas into colour regions
///
/// Builds a boolean membership map per distinct colour present, then scans
/// pixels in row-major order and flood-fills each unassigned pixel's region
/// breadth-first. The returned list partitions the canvas: regions are
/// pairwise disjoint and their union covers every coordinate.
pub fn group_regions(canvas: &Canvas) -> Vec<Region> {
    let rows = canvas.height();
    let cols = canvas.width();
    let cell_count = rows * cols;

    let mut membership: HashMap<Color, BitVec> = HashMap::new();
    for (row, col) in canvas.pixels() {
        let Some(color) = canvas.get(row, col) else {
            continue;
        };
        membership
            .entry(color)
            .or_insert_with(|| bitvec![0; cell_count])
            .set(row * cols + col, true);
    }

    let mut assigned: BitVec = bitvec![0; cell_count];
    let mut regions = Vec::new();

    for (row, col) in canvas.pixels() {
        let index = row * cols + col;
        if assigned.get(index).is_some_and(|bit| *bit) {
            continue;
        }
        let Some(color) = canvas.get(row, col) else {
            continue;
        };
        let Some(mask) = membership.get(&color) else {
            continue;
        };

        let mut queue: VecDeque<Coordinate> = VecDeque::from([(row, col)]);
        assigned.set(index, true);
        let mut points = Vec::new();

        while let Some((current_row, current_col)) = queue.pop_front() {
            points.push((current_row, current_col));

            for (next_row, next_col) in adjacent_coordinates(current_row, current_col, rows, cols) {
                let next_index = next_row * cols + next_col;
                let same_color = mask.get(next_index).is_some_and(|bit| *bit);
                let unvisited = assigned.get(next_index).is_none_or(|bit| !*bit);
                if same_color && unvisited {
                    assigned.set(next_index, true);
                    queue.push_back((next_row, next_col));
                }
            }
        }

        regions.push(Region {
            color,
            points,
            grid_rows: rows,
            grid_cols: cols,
        });
    }

    regions
}
