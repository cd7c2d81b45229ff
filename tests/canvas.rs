//! Validates canvas construction, traversal order, adjacency, and upscaling

use pixeldrift::SynthesisError;
use pixeldrift::spatial::{Canvas, Color};

#[test]
fn test_construction_rejects_bad_dimensions() {
    assert!(matches!(
        Canvas::new(0, 10, 3),
        Err(SynthesisError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        Canvas::new(10, 0, 3),
        Err(SynthesisError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        Canvas::new(10, 10, 2),
        Err(SynthesisError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        Canvas::new(10, 10, 4),
        Err(SynthesisError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        Canvas::new(20_000, 10, 3),
        Err(SynthesisError::InvalidDimensions { .. })
    ));
}

#[test]
fn test_construction_accepts_grayscale_and_rgb() {
    let gray = match Canvas::new(4, 3, 1) {
        Ok(canvas) => canvas,
        Err(err) => unreachable!("grayscale construction failed: {err}"),
    };
    assert_eq!(gray.width(), 4);
    assert_eq!(gray.height(), 3);
    assert_eq!(gray.channel_count(), 1);
    assert_eq!(gray.raw().len(), 12);

    let rgb = match Canvas::new(4, 3, 3) {
        Ok(canvas) => canvas,
        Err(err) => unreachable!("RGB construction failed: {err}"),
    };
    assert_eq!(rgb.channel_count(), 3);
    assert_eq!(rgb.raw().len(), 36);
}

#[test]
fn test_set_validates_channel_arity() {
    let mut canvas = match Canvas::new(4, 4, 3) {
        Ok(canvas) => canvas,
        Err(err) => unreachable!("construction failed: {err}"),
    };

    assert!(matches!(
        canvas.set(0, 0, Color::gray(5)),
        Err(SynthesisError::ChannelMismatch {
            expected: 3,
            actual: 1
        })
    ));
    assert!(canvas.set(0, 0, Color::rgb(1, 2, 3)).is_ok());
    assert_eq!(canvas.get(0, 0), Some(Color::rgb(1, 2, 3)));
}

#[test]
fn test_out_of_bounds_access() {
    let mut canvas = match Canvas::new(4, 4, 1) {
        Ok(canvas) => canvas,
        Err(err) => unreachable!("construction failed: {err}"),
    };

    assert_eq!(canvas.get(4, 0), None);
    assert_eq!(canvas.get(0, 4), None);
    assert!(matches!(
        canvas.set(4, 0, Color::gray(1)),
        Err(SynthesisError::OutOfBounds { .. })
    ));
}

#[test]
fn test_pixels_iterates_row_major_and_restarts() {
    let canvas = match Canvas::new(3, 2, 1) {
        Ok(canvas) => canvas,
        Err(err) => unreachable!("construction failed: {err}"),
    };

    let first: Vec<_> = canvas.pixels().collect();
    assert_eq!(first, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);

    // A fresh call yields a fresh sequence
    let second: Vec<_> = canvas.pixels().collect();
    assert_eq!(first, second);
}

#[test]
fn test_adjacency_order_and_bounds() {
    let canvas = match Canvas::new(5, 4, 1) {
        Ok(canvas) => canvas,
        Err(err) => unreachable!("construction failed: {err}"),
    };

    // Fixed order: up, left, down, right
    let interior: Vec<_> = canvas.adjacent(1, 1).collect();
    assert_eq!(interior, vec![(0, 1), (1, 0), (2, 1), (1, 2)]);

    let corner: Vec<_> = canvas.adjacent(0, 0).collect();
    assert_eq!(corner, vec![(1, 0), (0, 1)]);

    let edge: Vec<_> = canvas.adjacent(0, 2).collect();
    assert_eq!(edge, vec![(0, 1), (1, 2), (0, 3)]);

    // Every coordinate sees 2 to 4 distinct in-bounds neighbours
    for (row, col) in canvas.pixels() {
        let neighbours: Vec<_> = canvas.adjacent(row, col).collect();
        assert!(
            (2..=4).contains(&neighbours.len()),
            "({row}, {col}) has {} neighbours",
            neighbours.len()
        );
        for &(neighbour_row, neighbour_col) in &neighbours {
            assert!(neighbour_row < canvas.height() && neighbour_col < canvas.width());
        }
        let distinct: std::collections::HashSet<_> = neighbours.iter().collect();
        assert_eq!(distinct.len(), neighbours.len());
    }
}

#[test]
fn test_scale_up_block_identity() {
    let mut canvas = match Canvas::new(3, 2, 1) {
        Ok(canvas) => canvas,
        Err(err) => unreachable!("construction failed: {err}"),
    };
    for (row, col) in canvas.pixels() {
        let value = (row * 10 + col) as u8 + 1;
        if let Err(err) = canvas.set(row, col, Color::gray(value)) {
            unreachable!("write failed: {err}");
        }
    }

    let factor = 3;
    let scaled = match canvas.scale_up(factor) {
        Ok(scaled) => scaled,
        Err(err) => unreachable!("scale_up failed: {err}"),
    };

    assert_eq!(scaled.width(), canvas.width() * factor);
    assert_eq!(scaled.height(), canvas.height() * factor);
    for (row, col) in scaled.pixels() {
        assert_eq!(
            scaled.get(row, col),
            canvas.get(row / factor, col / factor),
            "block identity broken at ({row}, {col})"
        );
    }

    // The source canvas is untouched
    assert_eq!(canvas.get(0, 0), Some(Color::gray(1)));
}

#[test]
fn test_scale_up_rejects_zero_factor() {
    let canvas = match Canvas::new(2, 2, 1) {
        Ok(canvas) => canvas,
        Err(err) => unreachable!("construction failed: {err}"),
    };
    assert!(matches!(
        canvas.scale_up(0),
        Err(SynthesisError::InvalidParameter { .. })
    ));
}

#[test]
fn test_scale_up_by_one_is_identity() {
    let mut canvas = match Canvas::new(2, 2, 3) {
        Ok(canvas) => canvas,
        Err(err) => unreachable!("construction failed: {err}"),
    };
    if let Err(err) = canvas.set(1, 0, Color::rgb(9, 8, 7)) {
        unreachable!("write failed: {err}");
    }

    let copy = match canvas.scale_up(1) {
        Ok(copy) => copy,
        Err(err) => unreachable!("scale_up failed: {err}"),
    };
    assert_eq!(copy.raw(), canvas.raw());
}

#[test]
fn test_color_unset_sentinel() {
    assert!(Color::gray(0).is_unset());
    assert!(Color::rgb(0, 0, 0).is_unset());
    assert!(!Color::gray(1).is_unset());
    assert!(!Color::rgb(0, 0, 1).is_unset());

    assert!(Color::from_channels(&[1, 2]).is_err());
    assert_eq!(Color::from_channels(&[7]).ok(), Some(Color::gray(7)));
    assert_eq!(
        Color::from_channels(&[1, 2, 3]).ok(),
        Some(Color::rgb(1, 2, 3))
    );

    // Arity participates in equality
    assert_ne!(Color::gray(5), Color::rgb(5, 0, 0));
}
