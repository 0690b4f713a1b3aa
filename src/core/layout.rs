//! Grid-to-plane coordinate mapping
//!
//! Course positions are authored on a logical grid of `(level, slot)` cells.
//! [`Layout::scale`] turns them into plane coordinates: `slot` drives `x`,
//! `level` drives `y`. No layout is computed; positions are hand authored.

use super::models::Position;
use serde::Serialize;

/// Default horizontal spacing between sibling courses on one level
pub const INTRA_LEVEL_SPACING: f64 = 100.0;

/// Default vertical spacing between prerequisite tiers
pub const INTER_LEVEL_SPACING: f64 = 200.0;

/// Default radius of a course node
pub const NODE_RADIUS: f64 = 30.0;

/// A point on the continuous plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Spacing constants for mapping grid positions to the plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Layout {
    /// Horizontal distance between adjacent slots
    pub intra_level_spacing: f64,
    /// Vertical distance between adjacent levels
    pub inter_level_spacing: f64,
    /// Radius used when drawing nodes
    pub node_radius: f64,
}

impl Layout {
    /// Create a layout with explicit spacing
    ///
    /// # Errors
    /// Returns an error message if any value is not a finite positive number
    pub fn new(
        intra_level_spacing: f64,
        inter_level_spacing: f64,
        node_radius: f64,
    ) -> Result<Self, String> {
        for (name, value) in [
            ("intra_level_spacing", intra_level_spacing),
            ("inter_level_spacing", inter_level_spacing),
            ("node_radius", node_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("Layout value '{name}' must be positive, got {value}"));
            }
        }
        Ok(Self {
            intra_level_spacing,
            inter_level_spacing,
            node_radius,
        })
    }

    /// Map a grid position to plane coordinates
    ///
    /// `x = slot * intra_level_spacing`, `y = level * inter_level_spacing`.
    #[must_use]
    pub fn scale(&self, position: Position) -> Point {
        Point {
            x: f64::from(position.slot) * self.intra_level_spacing,
            y: f64::from(position.level) * self.inter_level_spacing,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            intra_level_spacing: INTRA_LEVEL_SPACING,
            inter_level_spacing: INTER_LEVEL_SPACING,
            node_radius: NODE_RADIUS,
        }
    }
}

/// Map a grid position with the default spacing
#[must_use]
pub fn scale(position: Position) -> Point {
    Layout::default().scale(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_maps_to_origin() {
        assert_eq!(scale(Position::new(0, 0)), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_default_spacing() {
        assert_eq!(scale(Position::new(1, -1)), Point::new(-100.0, 200.0));
        assert_eq!(scale(Position::new(3, 2)), Point::new(200.0, 600.0));
    }

    #[test]
    fn test_axes_are_independent() {
        let layout = Layout::default();
        for level in 0..5 {
            for slot in -3..4 {
                let point = layout.scale(Position::new(level, slot));
                assert!((point.y - layout.scale(Position::new(level, 0)).y).abs() < f64::EPSILON);
                assert!((point.x - layout.scale(Position::new(0, slot)).x).abs() < f64::EPSILON);
            }
        }
    }

    #[test]
    fn test_injective_per_axis() {
        let layout = Layout::default();
        let xs: Vec<f64> = (-3..4).map(|s| layout.scale(Position::new(0, s)).x).collect();
        assert!(xs.windows(2).all(|pair| pair[0] < pair[1]));
        let ys: Vec<f64> = (0..5).map(|l| layout.scale(Position::new(l, 0)).y).collect();
        assert!(ys.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_custom_spacing() {
        let layout = Layout::new(50.0, 75.0, 10.0).unwrap();
        assert_eq!(layout.scale(Position::new(2, 3)), Point::new(150.0, 150.0));
    }

    #[test]
    fn test_rejects_non_positive_spacing() {
        assert!(Layout::new(0.0, 200.0, 30.0).is_err());
        assert!(Layout::new(100.0, -1.0, 30.0).is_err());
        assert!(Layout::new(100.0, 200.0, f64::NAN).is_err());
    }
}
