use crate::PaintFlags;

/// Abstract control surface of a host text widget.
///
/// The pinch-zoom transform composes with the host through this trait
/// rather than extending a widget type: it consumes touch samples and
/// produces font-size and paint-flag writes. The host keeps ownership of
/// layout, painting, and lifecycle.
pub trait TextControl {
    /// Set the rendered font size, in scale-independent units.
    fn set_font_size(&mut self, size: f32);

    fn set_paint_flags(&mut self, flags: PaintFlags);

    fn paint_flags(&self) -> PaintFlags;
}
