//! Aspect-ratio fitting: resize a rectangle against a target, then align it.
//!
//! ```
//! use zenrect::{Rectangle, ScaleMode};
//!
//! // Fit a 1600×900 image into a 400×400 viewport at (100, 100).
//! let viewport = Rectangle::new(100.0, 100.0, 400.0, 400.0);
//! let mut image = Rectangle::new(0.0, 0.0, 1600.0, 900.0);
//! image.scale_to(&viewport, ScaleMode::Fit);
//!
//! assert_eq!(image, Rectangle::new(100.0, 187.5, 400.0, 225.0));
//! ```

use num_traits::Float;

use crate::mode::{Anchors, AspectRatioMode, ScaleMode};
use crate::rect::Rectangle;

impl Rectangle {
    /// Resize against `target` according to `mode`, then align with `anchors`.
    ///
    /// - [`Keep`](AspectRatioMode::Keep): uniform scale so the rectangle fits
    ///   inside the target; one axis may end up short.
    /// - [`KeepNoEnlarge`](AspectRatioMode::KeepNoEnlarge): as `Keep`, but only
    ///   when the rectangle is wider or taller than the target.
    /// - [`KeepByExpanding`](AspectRatioMode::KeepByExpanding): uniform scale so
    ///   the rectangle covers the target; one axis may overflow.
    /// - [`Ignore`](AspectRatioMode::Ignore): take the target's size.
    ///
    /// A rectangle with both dimensions below `f64::EPSILON` is not resized by
    /// the aspect-preserving modes. Alignment always happens, even when the
    /// size did not change.
    pub fn scale_to_aspect(
        &mut self,
        target: &Rectangle,
        mode: AspectRatioMode,
        anchors: Anchors,
    ) -> &mut Self {
        let (tw, th) = (target.width, target.height);
        let (sw, sh) = (self.width, self.height);

        match mode {
            AspectRatioMode::Keep
            | AspectRatioMode::KeepByExpanding
            | AspectRatioMode::KeepNoEnlarge => {
                let oversized = sw > tw || sh > th;
                if mode == AspectRatioMode::KeepNoEnlarge && !oversized {
                    log::trace!("scale_to_aspect: {sw}x{sh} already within {tw}x{th}, size kept");
                } else if Float::abs(sw) >= f64::EPSILON || Float::abs(sh) >= f64::EPSILON {
                    let w_ratio = Float::abs(tw) / Float::abs(sw);
                    let h_ratio = Float::abs(th) / Float::abs(sh);
                    let factor = match mode {
                        AspectRatioMode::KeepByExpanding => w_ratio.max(h_ratio),
                        _ => w_ratio.min(h_ratio),
                    };
                    log::trace!("scale_to_aspect: {mode} scales {sw}x{sh} by {factor}");
                    self.scale(factor);
                } else {
                    log::trace!("scale_to_aspect: degenerate {sw}x{sh}, size kept");
                }
            }
            AspectRatioMode::Ignore => {
                self.width = tw;
                self.height = th;
            }
        }

        self.align_to_rect(target, anchors)
    }

    /// Resize and center against `target` using a named [`ScaleMode`].
    pub fn scale_to(&mut self, target: &Rectangle, mode: ScaleMode) -> &mut Self {
        match mode.aspect_ratio_mode() {
            Some(aspect) => self.scale_to_aspect(target, aspect, Anchors::CENTER),
            None => {
                log::trace!("scale_to: {mode} aligns without resizing");
                self.align_to_rect(target, Anchors::CENTER)
            }
        }
    }
}
