use bitflags::bitflags;

bitflags! {
    /// Rendering-quality flags understood by a text control.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct PaintFlags: u32 {
        const ANTI_ALIAS = 1 << 0;
        const UNDERLINE = 1 << 1;
        /// Position glyphs on a linear (non-hinted) advance grid.
        const LINEAR_TEXT = 1 << 2;
        /// Rasterize glyphs with subpixel positioning.
        const SUBPIXEL_TEXT = 1 << 3;
    }
}

impl PaintFlags {
    /// Flags raised for the duration of a touch interaction so glyphs stay
    /// crisp while they are being rescaled.
    pub const PINCH_QUALITY: PaintFlags = PaintFlags::LINEAR_TEXT.union(PaintFlags::SUBPIXEL_TEXT);
}
