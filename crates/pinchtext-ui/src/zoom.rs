//! # Pinch-zoom scale model
//!
//! The widget layer separates *touch plumbing* from *scale state*. This
//! module owns the scale state: the current ratio, the baseline captured
//! when a second finger lands, and the zoom-enabled switch.
//!
//! A gesture has two phases:
//!
//! - *armed* — fewer than two pointers down (or zoom disabled); distance
//!   tracking is idle.
//! - *tracking* — two pointers down; [`PinchZoom::begin`] has captured
//!   `base_distance`/`base_ratio`, and every subsequent move updates the
//!   ratio through [`PinchZoom::track`].
//!
//! The transition back to *armed* is implicit: callers stop feeding
//! distances once a sample no longer reports two pointers. Baselines and
//! the ratio persist across gestures, so the next pinch resumes from the
//! last zoom level rather than snapping back.

use pinchtext_core::TouchSample;

/// Pixels of inter-pointer travel per doubling of scale.
pub const STEP: f32 = 200.0;

/// Smallest scale ratio a pinch can reach.
pub const MIN_RATIO: f32 = 0.1;

/// Largest scale ratio a pinch can reach.
pub const MAX_RATIO: f32 = 1024.0;

/// Scale state of the pinch-zoom interaction, carried for the widget's
/// whole lifetime.
#[derive(Clone, Copy, Debug)]
pub struct PinchZoom {
    ratio: f32,
    base_distance: i32,
    base_ratio: f32,
    zoom_enabled: bool,
}

impl Default for PinchZoom {
    fn default() -> Self {
        Self::new()
    }
}

impl PinchZoom {
    pub fn new() -> Self {
        Self {
            ratio: 1.0,
            base_distance: 0,
            base_ratio: 0.0,
            zoom_enabled: true,
        }
    }

    /// Inter-pointer distance of a two-pointer sample, in pixels truncated
    /// toward zero. Symmetric under swapping the pointers.
    pub fn distance(sample: &TouchSample) -> Option<i32> {
        let p0 = sample.position(0)?;
        let p1 = sample.position(1)?;
        Some(p0.distance_to(p1) as i32)
    }

    /// Capture the gesture baseline when the second finger lands. Leaves
    /// the current ratio untouched; the first move after this call is what
    /// changes the rendered size.
    pub fn begin(&mut self, distance: i32) {
        self.base_distance = distance;
        self.base_ratio = self.ratio;
        log::debug!(
            "pinch tracking: base_distance={distance} base_ratio={}",
            self.base_ratio
        );
    }

    /// Update the ratio from the current inter-pointer distance.
    ///
    /// Every [`STEP`] pixels of travel beyond the baseline doubles (or
    /// halves) the baseline ratio; the result is clamped to
    /// `[MIN_RATIO, MAX_RATIO]`. Pure in the captured baseline and the
    /// given distance, so replaying an identical sample yields an
    /// identical ratio.
    pub fn track(&mut self, distance: i32) -> f32 {
        let delta = (distance - self.base_distance) as f32 / STEP;
        let multiplier = 2.0_f32.powf(delta);
        self.ratio = (self.base_ratio * multiplier).clamp(MIN_RATIO, MAX_RATIO);
        log::trace!("pinch move: distance={distance} ratio={}", self.ratio);
        self.ratio
    }

    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    /// Enable or disable zoom. Takes effect on the next sample; never
    /// resets the ratio or the captured baseline, so re-enabling resumes
    /// from the last computed zoom level.
    pub fn set_zoom_enabled(&mut self, enabled: bool) {
        self.zoom_enabled = enabled;
    }

    pub fn zoom_enabled(&self) -> bool {
        self.zoom_enabled
    }
}
