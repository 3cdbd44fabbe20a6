//! Pointer interaction: drag-to-move and wheel-to-zoom.
//!
//! Both handlers are pure functions from the current mask state (plus media
//! dimensions and pointer coordinates) to a new mask state. The session layer
//! owns the ephemeral drag anchor and decides when to call them.
//!
//! # Algorithm Notes
//!
//! - Drag deltas are relative to the previous pointer position, not the
//!   original anchor; the caller advances the anchor after every move so a
//!   long drag cannot drift or accelerate.
//! - Wheel zoom keeps the point under the cursor visually fixed by scaling
//!   the cursor-to-center vector by `new_radius / old_radius`.

use crate::geometry::{center_to_percents, circle_for, clamp_center, radius_for};
use crate::MaskState;

/// Size percentage change per wheel notch.
pub const WHEEL_STEP: u32 = 2;

/// Ephemeral drag state: the last pointer position, relative to the preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Last recorded pointer X, in preview pixels
    pub anchor_x: f64,
    /// Last recorded pointer Y, in preview pixels
    pub anchor_y: f64,
}

impl DragSession {
    /// Open a drag session anchored at the given pointer position.
    pub fn new(anchor_x: f64, anchor_y: f64) -> Self {
        Self { anchor_x, anchor_y }
    }

    /// Pointer delta since the anchor.
    pub fn delta_to(&self, x: f64, y: f64) -> (f64, f64) {
        (x - self.anchor_x, y - self.anchor_y)
    }

    /// Advance the anchor to the current pointer position.
    pub fn advance(&mut self, x: f64, y: f64) {
        self.anchor_x = x;
        self.anchor_y = y;
    }
}

/// Move the circle center by a pointer delta, keeping it inside bounds.
///
/// The center is converted to pixels, displaced, clamped so the circle stays
/// fully inside the media, and converted back to rounded percentages. A zero
/// delta returns the input state unchanged.
pub fn drag_move(mask: &MaskState, width: u32, height: u32, dx: f64, dy: f64) -> MaskState {
    let circle = circle_for(width, height, mask);
    let (cx, cy) = clamp_center(
        width,
        height,
        circle.radius,
        circle.center_x + dx,
        circle.center_y + dy,
    );
    let (x_percent, y_percent) = center_to_percents(width, height, cx, cy);

    MaskState {
        x_percent,
        y_percent,
        ..mask.clone()
    }
}

/// Step the circle size by one wheel notch, zooming about the cursor.
///
/// Scroll-up (`scroll_up == true`, negative deltaY) shrinks the circle,
/// scroll-down grows it, two percent per notch, clamped to 0-100. Returns
/// `None` when clamping leaves the size unchanged, so callers can skip the
/// redundant recompute.
///
/// The new center is `cursor + (center - cursor) * new_radius / old_radius`,
/// which pins the point under the cursor while the circle scales. When the
/// old radius is zero that ratio is undefined, so the recentering is skipped
/// and only the size changes; NaN or infinity must never reach the mask.
pub fn wheel_zoom(
    mask: &MaskState,
    width: u32,
    height: u32,
    cursor_x: f64,
    cursor_y: f64,
    scroll_up: bool,
) -> Option<MaskState> {
    let old_size = mask.size_percent;
    let new_size = if scroll_up {
        old_size.saturating_sub(WHEEL_STEP)
    } else {
        (old_size + WHEEL_STEP).min(100)
    };
    if new_size == old_size {
        return None;
    }

    let circle = circle_for(width, height, mask);
    let old_radius = circle.radius;
    let new_radius = radius_for(width, height, new_size);

    let (cx, cy) = if old_radius > 0.0 {
        let scale = new_radius / old_radius;
        (
            cursor_x + (circle.center_x - cursor_x) * scale,
            cursor_y + (circle.center_y - cursor_y) * scale,
        )
    } else {
        (circle.center_x, circle.center_y)
    };

    let (cx, cy) = clamp_center(width, height, new_radius, cx, cy);
    let (x_percent, y_percent) = center_to_percents(width, height, cx, cy);

    Some(MaskState {
        size_percent: new_size,
        x_percent,
        y_percent,
        ..mask.clone()
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::geometry::radius_for;
    use proptest::prelude::*;

    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (10u32..=300, 10u32..=300)
    }

    fn mask_strategy() -> impl Strategy<Value = MaskState> {
        (0u32..=100, 0u32..=100, 0u32..=100).prop_map(|(size, x, y)| MaskState {
            size_percent: size,
            x_percent: x,
            y_percent: y,
            ..MaskState::default()
        })
    }

    proptest! {
        /// Property: drag output percentages stay in the slider range.
        #[test]
        fn prop_drag_stays_in_slider_range(
            (width, height) in dimensions_strategy(),
            mask in mask_strategy(),
            (dx, dy) in (-1000.0f64..=1000.0, -1000.0f64..=1000.0),
        ) {
            let moved = drag_move(&mask, width, height, dx, dy);
            prop_assert!(moved.x_percent <= 100);
            prop_assert!(moved.y_percent <= 100);
            prop_assert_eq!(moved.size_percent, mask.size_percent);
        }

        /// Property: wheel zoom never produces NaN-derived garbage and always
        /// changes size by exactly one step when it returns a new state.
        #[test]
        fn prop_wheel_steps_by_two_or_noop(
            (width, height) in dimensions_strategy(),
            mask in mask_strategy(),
            (cx, cy) in (0.0f64..=300.0, 0.0f64..=300.0),
            scroll_up in any::<bool>(),
        ) {
            match wheel_zoom(&mask, width, height, cx, cy, scroll_up) {
                Some(zoomed) => {
                    let diff = zoomed.size_percent.abs_diff(mask.size_percent);
                    prop_assert!(diff == WHEEL_STEP || zoomed.size_percent == 0 || zoomed.size_percent == 100);
                    prop_assert!(zoomed.x_percent <= 100);
                    prop_assert!(zoomed.y_percent <= 100);
                }
                None => {
                    prop_assert!(mask.size_percent >= 99 || mask.size_percent == 0);
                }
            }
        }

        /// Property: after a drag, the pre-rounding center is fully inside
        /// the media for the circle's radius.
        #[test]
        fn prop_drag_center_inside_bounds(
            (width, height) in dimensions_strategy(),
            mask in mask_strategy(),
            (dx, dy) in (-1000.0f64..=1000.0, -1000.0f64..=1000.0),
        ) {
            let moved = drag_move(&mask, width, height, dx, dy);
            let radius = radius_for(width, height, moved.size_percent);

            // Rounding to whole percents can shift the center by at most half
            // a percent of the span.
            let slack_x = width as f64 / 200.0 + 1e-9;
            let slack_y = height as f64 / 200.0 + 1e-9;
            let cx = width as f64 * moved.x_percent as f64 / 100.0;
            let cy = height as f64 * moved.y_percent as f64 / 100.0;
            prop_assert!(cx - radius >= -slack_x);
            prop_assert!(cx + radius <= width as f64 + slack_x);
            prop_assert!(cy - radius >= -slack_y);
            prop_assert!(cy + radius <= height as f64 + slack_y);
        }
    }
}
