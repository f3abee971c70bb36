//! Built-in layout shapes.

use crate::core::{Difficulty, Position};

/// Append a `cols × rows` block at layer `z`, offset by `(dx, dy)`, row-major.
fn push_grid(out: &mut Vec<Position>, cols: u8, rows: u8, z: u8, dx: f32, dy: f32) {
    for row in 0..rows {
        for col in 0..cols {
            out.push(Position::new(f32::from(col) + dx, f32::from(row) + dy, z));
        }
    }
}

/// Single layer, 6×6 (36 positions).
#[must_use]
pub fn flat() -> Vec<Position> {
    let mut out = Vec::with_capacity(36);
    push_grid(&mut out, 6, 6, 0, 0.0, 0.0);
    out
}

/// 8×6 base with a centered 6×4 layer on top (72 positions).
#[must_use]
pub fn two_tier() -> Vec<Position> {
    let mut out = Vec::with_capacity(72);
    push_grid(&mut out, 8, 6, 0, 0.0, 0.0);
    push_grid(&mut out, 6, 4, 1, 1.0, 1.0);
    out
}

/// Six-layer pyramid: 72, 40, 18, 8, 4 and a 2-tile cap (144 positions).
///
/// Layer 2 sits half a row down and the cap sits between rows, so the
/// upper layers only approximately align with the grid below.
#[must_use]
pub fn pyramid() -> Vec<Position> {
    let mut out = Vec::with_capacity(144);
    push_grid(&mut out, 12, 6, 0, 0.0, 0.0);
    push_grid(&mut out, 10, 4, 1, 1.0, 1.0);
    push_grid(&mut out, 6, 3, 2, 3.0, 1.5);
    push_grid(&mut out, 4, 2, 3, 4.0, 2.0);
    push_grid(&mut out, 2, 2, 4, 5.0, 2.0);
    out.push(Position::new(5.5, 2.5, 5));
    out.push(Position::new(6.5, 2.5, 5));
    out
}

/// Layout for a difficulty level.
#[must_use]
pub fn layout_for(difficulty: Difficulty) -> Vec<Position> {
    match difficulty {
        Difficulty::Easy => flat(),
        Difficulty::Medium => two_tier(),
        Difficulty::Hard => pyramid(),
    }
}

/// Layout for a storage key; unknown keys get the flat layout.
#[must_use]
pub fn layout_for_key(key: &str) -> Vec<Position> {
    layout_for(Difficulty::from_key(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer_sizes(layout: &[Position]) -> Vec<usize> {
        let top = layout.iter().map(|p| p.z).max().unwrap_or(0);
        (0..=top)
            .map(|z| layout.iter().filter(|p| p.z == z).count())
            .collect()
    }

    #[test]
    fn test_flat() {
        let layout = flat();
        assert_eq!(layout.len(), 36);
        assert!(layout.iter().all(|p| p.z == 0));
        assert_eq!(layout[0], Position::new(0.0, 0.0, 0));
        assert_eq!(layout[7], Position::new(1.0, 1.0, 0));
    }

    #[test]
    fn test_two_tier() {
        let layout = two_tier();
        assert_eq!(layout.len(), 72);
        assert_eq!(layer_sizes(&layout), vec![48, 24]);
        // First upper tile is offset to center over the base.
        assert_eq!(layout[48], Position::new(1.0, 1.0, 1));
    }

    #[test]
    fn test_pyramid() {
        let layout = pyramid();
        assert_eq!(layout.len(), 144);
        assert_eq!(layer_sizes(&layout), vec![72, 40, 18, 8, 4, 2]);
        assert!(layout.iter().any(|p| p.z == 2 && (p.y - 1.5).abs() < f32::EPSILON));
        assert_eq!(layout[142], Position::new(5.5, 2.5, 5));
        assert_eq!(layout[143], Position::new(6.5, 2.5, 5));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(pyramid(), pyramid());
        assert_eq!(layout_for(Difficulty::Medium), two_tier());
    }

    #[test]
    fn test_unknown_key_falls_back_to_flat() {
        assert_eq!(layout_for_key("shreshtha").len(), 144);
        assert_eq!(layout_for_key("???"), flat());
    }
}
