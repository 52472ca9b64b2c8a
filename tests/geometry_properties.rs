//! Whole-API checks over a grid of rectangles, including flipped ones.
//!
//! Every rectangle in the grid is run through the same algebraic laws:
//! standardize is idempotent, union is commutative, disjoint intersections
//! collapse to zero, corners round-trip, and fitting never escapes the target.

use zenrect::*;

/// Positions, sizes and signs mixed so that every quadrant and both
/// orientations of each axis show up.
fn grid() -> Vec<Rectangle> {
    let coords = [-25.0, 0.0, 7.5];
    let sizes = [-12.0, 0.0, 3.0, 40.0];
    let mut out = Vec::new();
    for &x in &coords {
        for &y in &coords {
            for &w in &sizes {
                for &h in &sizes {
                    out.push(Rectangle::new(x, y, w, h));
                }
            }
        }
    }
    out
}

fn assert_same_point(a: Point, b: Point) {
    assert!(
        (a.x - b.x).abs() <= TOLERANCE && (a.y - b.y).abs() <= TOLERANCE,
        "{a:?} != {b:?}"
    );
}

fn standardized(r: Rectangle) -> Rectangle {
    let mut r = r;
    r.standardize();
    r
}

// ---- Equality ----

#[test]
fn equality_within_tolerance() {
    for r in grid() {
        let nudged = Rectangle::new(r.x + 0.0009, r.y - 0.0009, r.width + 0.0005, r.height - 0.0005);
        assert_eq!(r, nudged);
        let off = Rectangle::new(r.x + 0.01, r.y, r.width, r.height);
        assert_ne!(r, off);
    }
}

// ---- Standardize ----

#[test]
fn standardize_is_idempotent_and_non_negative() {
    for r in grid() {
        let once = standardized(r);
        let twice = standardized(once);
        assert!(once.is_standardized(), "{r:?}");
        assert!(once.width >= 0.0 && once.height >= 0.0);
        assert_eq!(once, twice);
        // Same area, same extents.
        assert_eq!(once.area(), r.area());
        assert_eq!(once.min(), r.min());
        assert_eq!(once.max(), r.max());
    }
}

// ---- Union / intersection ----

#[test]
fn union_is_commutative_and_covers_both() {
    let rects = grid();
    for a in &rects {
        for b in rects.iter().step_by(7) {
            let ab = a.union(b);
            let ba = b.union(a);
            assert_eq!(ab, ba, "{a:?} ∪ {b:?}");
            assert!(ab.is_standardized());
            assert!(ab.min_x() <= a.min_x() && ab.min_x() <= b.min_x());
            assert!(ab.max_y() >= a.max_y() && ab.max_y() >= b.max_y());
        }
    }
}

#[test]
fn disjoint_intersection_is_zero() {
    for a in grid() {
        // Shift a copy fully past a's right edge, and separately past its bottom edge.
        let gap = 1.0;
        let mut right = a;
        right.translate_x(a.max_x() - a.min_x() + gap);
        assert!(a.intersection(&right).exact_eq(&Rectangle::ZERO), "{a:?}");

        let mut below = a;
        below.translate_y(a.max_y() - a.min_y() + gap);
        assert!(a.intersection(&below).exact_eq(&Rectangle::ZERO), "{a:?}");
    }
}

#[test]
fn intersection_is_inside_union() {
    let rects = grid();
    for a in &rects {
        for b in rects.iter().step_by(5) {
            let i = a.intersection(b);
            if i.exact_eq(&Rectangle::ZERO) {
                continue;
            }
            let u = a.union(b);
            assert!(i.min_x() >= u.min_x() && i.max_x() <= u.max_x());
            assert!(i.min_y() >= u.min_y() && i.max_y() <= u.max_y());
            assert_eq!(i, b.intersection(a));
        }
    }
}

// ---- Corners ----

#[test]
fn corners_round_trip_in_any_order() {
    let points = [
        Point::new(-3.0, 4.0),
        Point::new(10.0, -2.0),
        Point::new(0.0, 0.0),
        Point::new(5.5, 5.5),
    ];
    for &p1 in &points {
        for &p2 in &points {
            let mut r = Rectangle::ZERO;
            r.set_from_corners(p1, p2);
            assert!(r.is_standardized());
            assert_eq!(r.top_left(), Point::new(p1.x.min(p2.x), p1.y.min(p2.y)));
            assert_eq!(r.bottom_right(), Point::new(p1.x.max(p2.x), p1.y.max(p2.y)));
            assert_eq!(Rectangle::from_corners(p2, p1), r);
        }
    }
}

// ---- Scenarios ----

#[test]
fn scale_to_aspect_keep_scenario() {
    let mut r = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    r.scale_to_aspect(
        &Rectangle::new(100.0, 100.0, 40.0, 50.0),
        AspectRatioMode::Keep,
        Anchors::default(),
    );
    assert_eq!((r.width, r.height), (40.0, 40.0));
    assert_eq!(r.position(), Point::new(100.0, 105.0));
}

#[test]
fn scale_to_aspect_keep_no_enlarge_scenario() {
    let mut r = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    r.scale_to_aspect(
        &Rectangle::new(100.0, 100.0, 40.0, 50.0),
        AspectRatioMode::KeepNoEnlarge,
        Anchors::default(),
    );
    assert_eq!((r.width, r.height), (10.0, 10.0));
    assert_eq!(r.position(), Point::new(115.0, 120.0));
}

#[test]
fn align_right_to_left_scenario() {
    let mut r = Rectangle::new(1.0, 2.0, 3.0, 4.0);
    r.align_to_horz_rect(
        &Rectangle::new(10.0, 10.0, 20.0, 20.0),
        AlignHorz::Right,
        Some(AlignHorz::Left),
    );
    assert_eq!(r.x, 30.0);
    assert_eq!(r.y, 2.0);
}

#[test]
fn scale_from_center_scenario() {
    let mut r = Rectangle::new(1.0, 2.0, 3.0, 4.0);
    r.scale_from_center_xy(2.0, 3.0);
    assert!(r.exact_eq(&Rectangle::new(-0.5, -2.0, 6.0, 12.0)));
}

#[test]
fn inside_checks_y_against_max_y() {
    // A tall, narrow rectangle separates max_x (10) from max_y (100).
    let tall = Rectangle::new(0.0, 0.0, 10.0, 100.0);
    assert!(tall.inside_xy(5.0, 50.0));
    assert!(tall.inside_rect(&Rectangle::new(2.0, 20.0, 6.0, 70.0)));
    assert!(tall.inside_line(Point::new(1.0, 1.0), Point::new(9.0, 99.0)));

    let wide = Rectangle::new(0.0, 0.0, 100.0, 10.0);
    assert!(!wide.inside_xy(50.0, 50.0));
}

#[test]
fn keep_and_keep_no_enlarge_share_min_ratio_when_shrinking() {
    let target = Rectangle::new(0.0, 0.0, 30.0, 10.0);
    for mode in [AspectRatioMode::Keep, AspectRatioMode::KeepNoEnlarge] {
        let mut r = Rectangle::new(0.0, 0.0, 60.0, 60.0);
        r.scale_to_aspect(&target, mode, Anchors::default());
        // min(30/60, 10/60) = 1/6, not max = 1/2.
        assert_eq!(r, Rectangle::new(10.0, 0.0, 10.0, 10.0), "{mode}");
    }
}

// ---- Fitting laws ----

#[test]
fn fit_stays_inside_target_and_fill_covers_it() {
    let target = Rectangle::new(-50.0, 20.0, 160.0, 90.0);
    for r in grid() {
        if r.area() == 0.0 {
            continue;
        }

        let mut fit = standardized(r);
        fit.scale_to(&target, ScaleMode::Fit);
        assert!(fit.width <= target.width + TOLERANCE && fit.height <= target.height + TOLERANCE);
        assert!(
            (fit.width - target.width).abs() <= TOLERANCE
                || (fit.height - target.height).abs() <= TOLERANCE,
            "fit touches one axis: {fit:?}"
        );
        assert_same_point(fit.center(), target.center());
        assert!((fit.aspect_ratio() - r.aspect_ratio()).abs() < 1e-9);

        let mut fill = standardized(r);
        fill.scale_to(&target, ScaleMode::Fill);
        assert!(fill.width >= target.width - TOLERANCE && fill.height >= target.height - TOLERANCE);
        assert_same_point(fill.center(), target.center());
    }
}

#[test]
fn fit_no_enlarge_never_grows() {
    let target = Rectangle::new(0.0, 0.0, 20.0, 20.0);
    for r in grid() {
        let before = standardized(r);
        let mut after = before;
        after.scale_to(&target, ScaleMode::FitNoEnlarge);
        assert!(after.width <= before.width + TOLERANCE, "{before:?} -> {after:?}");
        assert!(after.height <= before.height + TOLERANCE, "{before:?} -> {after:?}");
        assert_same_point(after.center(), target.center());
    }
}

#[test]
fn stretch_matches_target_exactly() {
    let target = Rectangle::new(3.0, -4.0, 12.0, 5.0);
    for r in grid() {
        let mut s = r;
        s.scale_to(&target, ScaleMode::StretchToFill);
        assert_eq!(s, target);
    }
}

#[test]
fn center_mode_keeps_size() {
    let target = Rectangle::new(3.0, -4.0, 12.0, 5.0);
    for r in grid() {
        let mut c = r;
        c.scale_to(&target, ScaleMode::Center);
        assert!(c.size() == r.size());
        assert_same_point(c.center(), target.center());
    }
}

#[test]
fn modes_parse_into_working_layouts() {
    let target = Rectangle::new(0.0, 0.0, 100.0, 50.0);
    let mode: ScaleMode = "fill".parse().unwrap();
    let mut r = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    r.scale_to(&target, mode);
    assert_eq!(r, Rectangle::new(0.0, -25.0, 100.0, 100.0));

    let horz: AlignHorz = "right".parse().unwrap();
    let vert: AlignVert = "bottom".parse().unwrap();
    let mut r = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    r.align_to_rect(&target, Anchors::shared(horz, vert));
    assert_eq!(r.bottom_right(), target.bottom_right());

    assert!(matches!(
        "diagonal".parse::<AlignVert>(),
        Err(ParseError::UnknownKeyword { .. })
    ));
}
