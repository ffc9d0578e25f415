//! Headless pinch-zoom sample.
//!
//! The widget normally sits inside a host toolkit that feeds it real touch
//! events. This sample stands in for that host: it replays scripted pinch
//! gestures against a console-backed text control and toggles the zoom
//! feature between gestures, the way the toggle button in a real embedding
//! would.
//!
//! Pass an optional text-size attribute (e.g. `18sp`) as the first
//! argument; the default is 14sp.

use anyhow::Result;
use pinchtext_core::{PaintFlags, TextControl, TextStyle, TouchAction, TouchSample, Vec2};
use pinchtext_ui::PinchZoomText;

/// Stand-in for a platform text widget: remembers what the transform wrote
/// and logs every font-size change.
struct ConsoleText {
    font_size: f32,
    flags: PaintFlags,
}

impl ConsoleText {
    fn new() -> Self {
        Self {
            font_size: 0.0,
            flags: PaintFlags::ANTI_ALIAS,
        }
    }
}

impl TextControl for ConsoleText {
    fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
        log::info!("font size -> {size}sp");
    }
    fn set_paint_flags(&mut self, flags: PaintFlags) {
        self.flags = flags;
    }
    fn paint_flags(&self) -> PaintFlags {
        self.flags
    }
}

/// Replay one two-finger gesture: first finger at the origin, second finger
/// landing `start` px away and sliding to `end` px in a few moves.
fn run_gesture(text: &mut PinchZoomText<ConsoleText>, start: f32, end: f32) {
    let origin = Vec2::new(0.0, 0.0);
    let at = |x: f32| Vec2::new(x, 0.0);

    text.on_touch(Some(&TouchSample::single(TouchAction::Down, origin)));
    text.on_touch(Some(&TouchSample::pair(
        TouchAction::PointerDown,
        origin,
        at(start),
    )));
    for step in 1..=4 {
        let x = start + (end - start) * (step as f32 / 4.0);
        text.on_touch(Some(&TouchSample::pair(TouchAction::Move, origin, at(x))));
    }
    text.on_touch(Some(&TouchSample::pair(
        TouchAction::PointerUp,
        origin,
        at(end),
    )));
    text.on_touch(Some(&TouchSample::single(TouchAction::Up, origin)));

    println!(
        "gesture {start}px -> {end}px: ratio {:.2}, font size {:.2}sp",
        text.ratio(),
        text.control().font_size
    );
}

/// The embedding's toggle button: flip the feature and update the label.
fn toggle_zoom(text: &mut PinchZoomText<ConsoleText>) {
    let enabled = !text.zoom_enabled();
    text.set_zoom_enabled(enabled);
    println!("[{}]", if enabled { "Zoom enabled" } else { "Zoom disabled" });
}

fn main() -> Result<()> {
    env_logger::init();

    let attr = std::env::args().nth(1);
    let style = TextStyle::from_attr(attr.as_deref())?;
    let mut text = PinchZoomText::new(ConsoleText::new(), style);
    println!("initial font size: {}sp", text.control().font_size);

    run_gesture(&mut text, 200.0, 600.0); // pinch out: two doublings
    run_gesture(&mut text, 400.0, 200.0); // pinch back in

    toggle_zoom(&mut text); // "Zoom disabled"
    run_gesture(&mut text, 200.0, 600.0); // frozen: size does not move

    toggle_zoom(&mut text); // "Zoom enabled"
    run_gesture(&mut text, 200.0, 300.0); // resumes from the frozen level

    Ok(())
}
