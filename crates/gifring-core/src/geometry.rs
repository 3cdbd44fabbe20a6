//! Crop circle geometry.
//!
//! This module maps the normalized mask state (integer percentages) onto an
//! absolute circle in source pixel space, and provides the clamping and
//! percent conversions shared by the interaction handlers and the export
//! pipeline.
//!
//! # Coordinate System
//!
//! - (0, 0) = top-left corner of the media, in pixels
//! - The circle must stay fully inside [0, width] x [0, height]

use crate::MaskState;

/// An absolute circle in source pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center X in pixels
    pub center_x: f64,
    /// Center Y in pixels
    pub center_y: f64,
    /// Radius in pixels
    pub radius: f64,
}

impl Circle {
    /// Circle diameter in pixels.
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    /// Check whether a point lies inside the circle (boundary inclusive).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let dx = x - self.center_x;
        let dy = y - self.center_y;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    /// Distance from a point to the circle center.
    pub fn distance_from_center(&self, x: f64, y: f64) -> f64 {
        let dx = x - self.center_x;
        let dy = y - self.center_y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Compute the absolute crop circle for the given media dimensions.
///
/// The diameter is `min(width, height) * size_percent / 100`; the center is
/// the percentage position of each axis. Pure and deterministic; does not
/// clamp (the stored mask state is already kept inside bounds by the
/// interaction handlers).
pub fn circle_for(width: u32, height: u32, mask: &MaskState) -> Circle {
    let diameter = width.min(height) as f64 * (mask.size_percent as f64 / 100.0);
    Circle {
        center_x: width as f64 * (mask.x_percent as f64 / 100.0),
        center_y: height as f64 * (mask.y_percent as f64 / 100.0),
        radius: diameter / 2.0,
    }
}

/// Radius in pixels for a given size percentage.
pub fn radius_for(width: u32, height: u32, size_percent: u32) -> f64 {
    width.min(height) as f64 * (size_percent as f64 / 100.0) / 2.0
}

/// Clamp a circle center so the circle stays fully inside the media.
///
/// Each axis is clamped to [radius, span - radius]. The outer `max` wins when
/// the interval is inverted, mirroring the reference clamp order.
pub fn clamp_center(width: u32, height: u32, radius: f64, cx: f64, cy: f64) -> (f64, f64) {
    let cx = (width as f64 - radius).min(cx).max(radius);
    let cy = (height as f64 - radius).min(cy).max(radius);
    (cx, cy)
}

/// Convert an absolute center back to integer percentages.
///
/// Rounds to the nearest integer, matching the integer slider controls.
pub fn center_to_percents(width: u32, height: u32, cx: f64, cy: f64) -> (u32, u32) {
    let x = (cx / width as f64 * 100.0).round() as u32;
    let y = (cy / height as f64 * 100.0).round() as u32;
    (x.min(100), y.min(100))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_for_default_mask() {
        let circle = circle_for(100, 100, &MaskState::default());
        assert_eq!(circle.center_x, 50.0);
        assert_eq!(circle.center_y, 50.0);
        assert_eq!(circle.radius, 50.0);
        assert_eq!(circle.diameter(), 100.0);
    }

    #[test]
    fn test_circle_for_uses_min_dimension() {
        // Diameter follows the shorter axis
        let circle = circle_for(200, 100, &MaskState::default());
        assert_eq!(circle.radius, 50.0);
        assert_eq!(circle.center_x, 100.0);
        assert_eq!(circle.center_y, 50.0);
    }

    #[test]
    fn test_circle_for_half_size() {
        let mut mask = MaskState::default();
        mask.size_percent = 50;
        let circle = circle_for(100, 100, &mask);
        assert_eq!(circle.radius, 25.0);
    }

    #[test]
    fn test_circle_for_zero_size() {
        let mut mask = MaskState::default();
        mask.size_percent = 0;
        let circle = circle_for(100, 100, &mask);
        assert_eq!(circle.radius, 0.0);
    }

    #[test]
    fn test_circle_contains() {
        let circle = Circle {
            center_x: 50.0,
            center_y: 50.0,
            radius: 25.0,
        };
        assert!(circle.contains(50.0, 50.0));
        assert!(circle.contains(50.0, 75.0)); // on the boundary
        assert!(!circle.contains(50.0, 75.5));
        assert!(!circle.contains(0.0, 0.0));
    }

    #[test]
    fn test_clamp_center_inside_unchanged() {
        let (cx, cy) = clamp_center(100, 100, 25.0, 50.0, 50.0);
        assert_eq!((cx, cy), (50.0, 50.0));
    }

    #[test]
    fn test_clamp_center_pulls_back_from_edges() {
        let (cx, cy) = clamp_center(100, 100, 25.0, 5.0, 98.0);
        assert_eq!((cx, cy), (25.0, 75.0));
    }

    #[test]
    fn test_clamp_center_rectangular_media() {
        // 200x100 with radius 50: x range [50, 150], y pinned to 50
        let (cx, cy) = clamp_center(200, 100, 50.0, 0.0, 100.0);
        assert_eq!((cx, cy), (50.0, 50.0));

        let (cx, _) = clamp_center(200, 100, 50.0, 180.0, 50.0);
        assert_eq!(cx, 150.0);
    }

    #[test]
    fn test_center_to_percents_rounds() {
        assert_eq!(center_to_percents(100, 100, 49.2, 50.5), (49, 51));
        assert_eq!(center_to_percents(100, 100, 0.0, 100.0), (0, 100));
    }

    #[test]
    fn test_center_to_percents_caps_at_100() {
        // Float noise slightly past the edge must not exceed the slider range
        assert_eq!(center_to_percents(100, 100, 100.4, 100.4), (100, 100));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
