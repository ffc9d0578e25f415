//! # Touch samples and the text-control seam
//!
//! `pinchtext-core` holds the vocabulary shared between a host text widget
//! and the pinch-zoom transform in `pinchtext-ui`. There are four pieces:
//!
//! - [`TouchSample`] — an immutable snapshot of one platform touch event:
//!   an action code plus per-pointer positions.
//! - [`PaintFlags`] — rendering-quality flags a text control understands.
//! - [`TextControl`] — the abstract control surface of a host widget. The
//!   transform composes with the host through this trait rather than
//!   extending it: samples come in, font-size and paint-flag writes go out.
//! - [`TextStyle`] — markup-level configuration resolved once at
//!   construction, with a documented default font size.
//!
//! ## Feeding samples
//!
//! The host platform delivers samples synchronously, one at a time, on its
//! event-dispatch thread:
//!
//! ```rust
//! use pinchtext_core::{TouchAction, TouchSample, Vec2};
//!
//! let sample = TouchSample::pair(
//!     TouchAction::Move,
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(200.0, 0.0),
//! );
//! assert_eq!(sample.pointer_count(), 2);
//! ```
//!
//! Positions are guaranteed present for every index covered by the pointer
//! count; consumers only read indexes 0 and 1, and only when the count is
//! exactly two.

pub mod control;
pub mod geometry;
pub mod input;
pub mod paint;
pub mod style;

pub use control::*;
pub use geometry::*;
pub use input::*;
pub use paint::*;
pub use style::*;
