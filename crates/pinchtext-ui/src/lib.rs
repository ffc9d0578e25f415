//! Pinch-to-zoom text widget.
//!
//! [`PinchZoomText`] wraps any [`TextControl`] and turns two-finger pinch
//! gestures into font-size writes on it. The host platform forwards every
//! touch event through [`PinchZoomText::on_touch`]; the widget does the
//! rest:
//!
//! ```rust
//! use pinchtext_core::{PaintFlags, TextControl, TextStyle, TouchAction, TouchSample, Vec2};
//! use pinchtext_ui::PinchZoomText;
//!
//! struct Label {
//!     font_size: f32,
//!     flags: PaintFlags,
//! }
//!
//! impl TextControl for Label {
//!     fn set_font_size(&mut self, size: f32) {
//!         self.font_size = size;
//!     }
//!     fn set_paint_flags(&mut self, flags: PaintFlags) {
//!         self.flags = flags;
//!     }
//!     fn paint_flags(&self) -> PaintFlags {
//!         self.flags
//!     }
//! }
//!
//! let label = Label { font_size: 0.0, flags: PaintFlags::ANTI_ALIAS };
//! let mut text = PinchZoomText::new(label, TextStyle::default());
//!
//! // Second finger lands 200 px from the first, then spreads to 600 px.
//! text.on_touch(Some(&TouchSample::pair(
//!     TouchAction::PointerDown,
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(200.0, 0.0),
//! )));
//! text.on_touch(Some(&TouchSample::pair(
//!     TouchAction::Move,
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(600.0, 0.0),
//! )));
//! assert_eq!(text.control().font_size, 18.0); // ratio 4.0 + initial 14.0
//! ```
//!
//! Zoom can be switched off at runtime with
//! [`PinchZoomText::set_zoom_enabled`]; the widget keeps claiming touch
//! events (the paint-flag toggling still applies) but the font size stays
//! frozen until zoom is re-enabled.

pub mod zoom;

pub use zoom::{MAX_RATIO, MIN_RATIO, PinchZoom, STEP};

use pinchtext_core::{PaintFlags, TextControl, TextStyle, TouchAction, TouchSample};

/// A text widget that rescales its font in response to a two-finger pinch.
///
/// Composes with the host widget through [`TextControl`] rather than
/// extending it: touch samples come in, font-size and paint-flag writes go
/// out. The host keeps layout, painting, and lifecycle.
pub struct PinchZoomText<C: TextControl> {
    control: C,
    zoom: PinchZoom,
    initial_font_size: f32,
}

impl<C: TextControl> PinchZoomText<C> {
    /// Wrap a control. The initial font size is resolved from `style` once,
    /// applied to the control immediately, and used afterwards as the
    /// offset the scale ratio is added to.
    pub fn new(mut control: C, style: TextStyle) -> Self {
        control.set_font_size(style.font_size);
        Self {
            control,
            zoom: PinchZoom::new(),
            initial_font_size: style.font_size,
        }
    }

    /// Feed one touch sample; returns whether the event was handled.
    ///
    /// An absent sample is the only unhandled case. Every present sample is
    /// claimed — including single-finger and non-zoom events — so the
    /// paint-flag toggling around an interaction keeps working even while
    /// zoom is disabled.
    pub fn on_touch(&mut self, sample: Option<&TouchSample>) -> bool {
        let Some(sample) = sample else {
            return false;
        };

        match sample.action {
            TouchAction::Down => {
                let flags = self.control.paint_flags() | PaintFlags::PINCH_QUALITY;
                self.control.set_paint_flags(flags);
            }
            TouchAction::Up | TouchAction::Cancel => {
                let flags = self.control.paint_flags() - PaintFlags::PINCH_QUALITY;
                self.control.set_paint_flags(flags);
            }
            _ => {}
        }

        // Zoom needs exactly two pointers.
        if self.zoom.zoom_enabled() && sample.pointer_count() == 2 {
            if let Some(distance) = PinchZoom::distance(sample) {
                if sample.action == TouchAction::PointerDown {
                    self.zoom.begin(distance);
                } else {
                    let ratio = self.zoom.track(distance);
                    self.control.set_font_size(ratio + self.initial_font_size);
                }
            }
        }

        true
    }

    /// Enable or disable the zoom feature. Takes effect on the next sample
    /// and never resets the current zoom level.
    pub fn set_zoom_enabled(&mut self, enabled: bool) {
        self.zoom.set_zoom_enabled(enabled);
    }

    pub fn zoom_enabled(&self) -> bool {
        self.zoom.zoom_enabled()
    }

    /// Current scale ratio relative to the initial font size.
    pub fn ratio(&self) -> f32 {
        self.zoom.ratio()
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut C {
        &mut self.control
    }

    pub fn into_control(self) -> C {
        self.control
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinchtext_core::Vec2;

    #[derive(Default)]
    struct FakeText {
        font_size: f32,
        flags: PaintFlags,
        size_writes: usize,
    }

    impl TextControl for FakeText {
        fn set_font_size(&mut self, size: f32) {
            self.font_size = size;
            self.size_writes += 1;
        }
        fn set_paint_flags(&mut self, flags: PaintFlags) {
            self.flags = flags;
        }
        fn paint_flags(&self) -> PaintFlags {
            self.flags
        }
    }

    fn widget() -> PinchZoomText<FakeText> {
        PinchZoomText::new(FakeText::default(), TextStyle::default())
    }

    fn pair(action: TouchAction, x1: f32) -> TouchSample {
        TouchSample::pair(action, Vec2::new(0.0, 0.0), Vec2::new(x1, 0.0))
    }

    #[test]
    fn test_initial_size_applied() {
        let w = PinchZoomText::new(FakeText::default(), TextStyle { font_size: 17.0 });
        assert_eq!(w.control().font_size, 17.0);
        assert_eq!(w.control().size_writes, 1);
    }

    #[test]
    fn test_absent_sample_not_handled() {
        let mut w = widget();
        assert!(!w.on_touch(None));
        assert_eq!(w.ratio(), 1.0);
        assert_eq!(w.control().size_writes, 1); // construction only
    }

    #[test]
    fn test_down_raises_quality_flags() {
        let mut w = widget();
        w.control_mut().flags = PaintFlags::ANTI_ALIAS;

        let down = TouchSample::single(TouchAction::Down, Vec2::new(5.0, 5.0));
        assert!(w.on_touch(Some(&down)));
        assert!(w.control().flags.contains(PaintFlags::PINCH_QUALITY));
        assert!(w.control().flags.contains(PaintFlags::ANTI_ALIAS));

        let up = TouchSample::single(TouchAction::Up, Vec2::new(5.0, 5.0));
        assert!(w.on_touch(Some(&up)));
        assert_eq!(w.control().flags, PaintFlags::ANTI_ALIAS);
    }

    #[test]
    fn test_cancel_clears_quality_flags() {
        let mut w = widget();
        w.on_touch(Some(&TouchSample::single(
            TouchAction::Down,
            Vec2::new(0.0, 0.0),
        )));
        assert!(w.control().flags.contains(PaintFlags::PINCH_QUALITY));

        w.on_touch(Some(&TouchSample::single(
            TouchAction::Cancel,
            Vec2::new(0.0, 0.0),
        )));
        assert!(!w.control().flags.intersects(PaintFlags::PINCH_QUALITY));
    }

    #[test]
    fn test_flags_toggle_even_when_zoom_disabled() {
        let mut w = widget();
        w.set_zoom_enabled(false);
        let down = TouchSample::single(TouchAction::Down, Vec2::new(0.0, 0.0));
        assert!(w.on_touch(Some(&down)));
        assert!(w.control().flags.contains(PaintFlags::PINCH_QUALITY));
    }

    #[test]
    fn test_pinch_out_scenario() {
        let mut w = widget();
        w.on_touch(Some(&pair(TouchAction::PointerDown, 200.0)));
        assert_eq!(w.control().size_writes, 1); // baseline capture writes nothing

        w.on_touch(Some(&pair(TouchAction::Move, 600.0)));
        assert_eq!(w.ratio(), 4.0);
        assert_eq!(w.control().font_size, 18.0);
    }

    #[test]
    fn test_pinch_in_scenario() {
        let mut w = widget();
        w.on_touch(Some(&pair(TouchAction::PointerDown, 200.0)));
        w.on_touch(Some(&pair(TouchAction::Move, 0.0)));
        assert_eq!(w.ratio(), 0.5);
        assert_eq!(w.control().font_size, 14.5);
    }

    #[test]
    fn test_second_finger_replaced_resets_baseline() {
        let mut w = widget();
        w.on_touch(Some(&pair(TouchAction::PointerDown, 200.0)));
        w.on_touch(Some(&pair(TouchAction::Move, 600.0)));
        let writes = w.control().size_writes;

        // Finger lifts and lands again closer in: no size write, new baseline.
        w.on_touch(Some(&pair(TouchAction::PointerDown, 100.0)));
        assert_eq!(w.control().size_writes, writes);
        assert_eq!(w.ratio(), 4.0);

        // Moving back out to 300 px is one step from the new 100 px base.
        w.on_touch(Some(&pair(TouchAction::Move, 300.0)));
        assert_eq!(w.ratio(), 8.0);
        assert_eq!(w.control().font_size, 22.0);
    }

    #[test]
    fn test_disable_freezes_mid_gesture() {
        let mut w = widget();
        w.on_touch(Some(&pair(TouchAction::PointerDown, 200.0)));
        w.on_touch(Some(&pair(TouchAction::Move, 600.0)));
        assert_eq!(w.control().font_size, 18.0);

        w.set_zoom_enabled(false);
        assert!(w.on_touch(Some(&pair(TouchAction::Move, 1000.0)))); // still claimed
        assert_eq!(w.control().font_size, 18.0);
        assert_eq!(w.ratio(), 4.0);

        // Re-enabling resumes from the frozen ratio.
        w.set_zoom_enabled(true);
        w.on_touch(Some(&pair(TouchAction::Move, 400.0)));
        assert_eq!(w.ratio(), 2.0);
        assert_eq!(w.control().font_size, 16.0);
    }

    #[test]
    fn test_repeated_identical_move_is_idempotent() {
        let mut w = widget();
        w.on_touch(Some(&pair(TouchAction::PointerDown, 200.0)));
        w.on_touch(Some(&pair(TouchAction::Move, 333.0)));
        let (r, size) = (w.ratio(), w.control().font_size);

        w.on_touch(Some(&pair(TouchAction::Move, 333.0)));
        assert_eq!(w.ratio(), r);
        assert_eq!(w.control().font_size, size);
    }

    #[test]
    fn test_single_finger_move_does_not_zoom() {
        let mut w = widget();
        let m = TouchSample::single(TouchAction::Move, Vec2::new(50.0, 50.0));
        assert!(w.on_touch(Some(&m)));
        assert_eq!(w.ratio(), 1.0);
        assert_eq!(w.control().size_writes, 1);
    }

    #[test]
    fn test_extreme_pinch_saturates() {
        let mut w = widget();
        w.on_touch(Some(&pair(TouchAction::PointerDown, 200.0)));
        w.on_touch(Some(&pair(TouchAction::Move, 2400.0)));
        assert_eq!(w.ratio(), MAX_RATIO);
        assert_eq!(w.control().font_size, MAX_RATIO + 14.0);

        w.on_touch(Some(&pair(TouchAction::Move, 4000.0)));
        assert_eq!(w.control().font_size, MAX_RATIO + 14.0);
    }
}
