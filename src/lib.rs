//! Axis-aligned rectangle geometry with anchor alignment and aspect-ratio fitting.
//!
//! Pure geometry: no I/O, no allocations outside the optional SVG renderer,
//! `no_std` compatible.
//!
//! # Modules
//!
//! - [`rect`] — The [`Rectangle`] value type, containment, growth, intersection and union
//! - [`align`] — Anchor resolution and alignment against points and rectangles
//! - [`fit`] — Aspect-ratio fitting (`scale_to_aspect`, `scale_to`)
//! - [`mode`] — Anchor, aspect-ratio and scale mode vocabularies
//! - [`point`] — The [`Point`] pair used for corners, centers and offsets
//! - `svg` — SVG rendering of rectangles for debugging (feature `svg`)
//!
//! # Example
//!
//! ```
//! use zenrect::{AlignHorz, AlignVert, Anchors, AspectRatioMode, Rectangle};
//!
//! let viewport = Rectangle::new(100.0, 100.0, 40.0, 50.0);
//! let mut image = Rectangle::new(0.0, 0.0, 10.0, 10.0);
//!
//! image.scale_to_aspect(&viewport, AspectRatioMode::Keep, Anchors::default());
//! assert_eq!(image, Rectangle::new(100.0, 105.0, 40.0, 40.0));
//!
//! image.align_to_rect(&viewport, Anchors::shared(AlignHorz::Left, AlignVert::Top));
//! assert_eq!(image.top_left(), viewport.top_left());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod align;
pub mod fit;
pub mod mode;
pub mod point;
pub mod rect;
#[cfg(feature = "svg")]
pub mod svg;

pub use mode::{AlignHorz, AlignVert, Anchors, AspectRatioMode, ParseError, ScaleMode};
pub use point::Point;
pub use rect::{Rectangle, TOLERANCE};
