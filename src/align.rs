//! Anchor resolution and alignment of a rectangle against a coordinate,
//! a point, or another rectangle.

use crate::mode::{AlignHorz, AlignVert, Anchors};
use crate::point::Point;
use crate::rect::Rectangle;

impl Rectangle {
    /// X coordinate of the anchor. [`AlignHorz::Ignore`] resolves to `0.0`.
    pub fn horz_anchor(&self, anchor: AlignHorz) -> f64 {
        match anchor {
            AlignHorz::Left => self.left(),
            AlignHorz::Right => self.right(),
            AlignHorz::Center => self.center().x,
            AlignHorz::Ignore => 0.0,
        }
    }

    /// Y coordinate of the anchor. [`AlignVert::Ignore`] resolves to `0.0`.
    pub fn vert_anchor(&self, anchor: AlignVert) -> f64 {
        match anchor {
            AlignVert::Top => self.top(),
            AlignVert::Bottom => self.bottom(),
            AlignVert::Center => self.center().y,
            AlignVert::Ignore => 0.0,
        }
    }

    /// Translate horizontally so the anchor lands on `target_x`.
    pub fn align_to_horz(&mut self, target_x: f64, anchor: AlignHorz) -> &mut Self {
        if anchor != AlignHorz::Ignore {
            let dx = target_x - self.horz_anchor(anchor);
            self.translate_x(dx);
        }
        self
    }

    /// Translate vertically so the anchor lands on `target_y`.
    pub fn align_to_vert(&mut self, target_y: f64, anchor: AlignVert) -> &mut Self {
        if anchor != AlignVert::Ignore {
            let dy = target_y - self.vert_anchor(anchor);
            self.translate_y(dy);
        }
        self
    }

    /// Line up `subject_anchor` of this rectangle with `target_anchor` of `target`.
    ///
    /// `None` uses `target_anchor` on both rectangles. Nothing moves if either
    /// anchor is [`AlignHorz::Ignore`].
    ///
    /// ```
    /// use zenrect::{AlignHorz, Rectangle};
    ///
    /// let mut r = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    /// r.align_to_horz_rect(&Rectangle::new(10.0, 10.0, 20.0, 20.0), AlignHorz::Right, Some(AlignHorz::Left));
    /// assert_eq!(r.x, 30.0);
    /// ```
    pub fn align_to_horz_rect(
        &mut self,
        target: &Rectangle,
        target_anchor: AlignHorz,
        subject_anchor: Option<AlignHorz>,
    ) -> &mut Self {
        let subject_anchor = subject_anchor.unwrap_or(target_anchor);
        if target_anchor != AlignHorz::Ignore && subject_anchor != AlignHorz::Ignore {
            self.align_to_horz(target.horz_anchor(target_anchor), subject_anchor);
        }
        self
    }

    /// Vertical counterpart of [`align_to_horz_rect`](Self::align_to_horz_rect).
    pub fn align_to_vert_rect(
        &mut self,
        target: &Rectangle,
        target_anchor: AlignVert,
        subject_anchor: Option<AlignVert>,
    ) -> &mut Self {
        let subject_anchor = subject_anchor.unwrap_or(target_anchor);
        if target_anchor != AlignVert::Ignore && subject_anchor != AlignVert::Ignore {
            self.align_to_vert(target.vert_anchor(target_anchor), subject_anchor);
        }
        self
    }

    /// Move the given anchors onto a fixed point. Each axis is skipped when
    /// its anchor is `Ignore`.
    pub fn align_to_point(&mut self, point: Point, horz: AlignHorz, vert: AlignVert) -> &mut Self {
        self.align_to_horz(point.x, horz).align_to_vert(point.y, vert)
    }

    /// Align against `target` on both axes.
    pub fn align_to_rect(&mut self, target: &Rectangle, anchors: Anchors) -> &mut Self {
        self.align_to_horz_rect(target, anchors.target_horz, Some(anchors.subject_horz))
            .align_to_vert_rect(target, anchors.target_vert, Some(anchors.subject_vert))
    }
}
