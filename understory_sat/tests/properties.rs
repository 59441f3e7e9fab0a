// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property checks for the separating-axis tests.

use kurbo::{Affine, Point, Size, Vec2};
use proptest::prelude::*;
use understory_sat::{test_box_box, test_polygon_circle, test_polygon_polygon};

/// Regular polygon with `sides` vertices, wound counter-clockwise.
fn regular(sides: usize, radius: f64, phase: f64) -> Vec<Point> {
    (0..sides)
        .map(|i| {
            let angle = phase + core::f64::consts::TAU * i as f64 / sides as f64;
            Point::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

fn polygon() -> impl Strategy<Value = Vec<Point>> {
    (3_usize..8, 0.5..4.0_f64, 0.0..1.0_f64).prop_map(|(n, r, phase)| regular(n, r, phase))
}

fn center() -> impl Strategy<Value = Point> {
    (-10.0..10.0_f64, -10.0..10.0_f64).prop_map(|(x, y)| Point::new(x, y))
}

fn size() -> impl Strategy<Value = Size> {
    (0.5..5.0_f64, 0.5..5.0_f64).prop_map(|(w, h)| Size::new(w, h))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn polygon_test_is_symmetric(
        a in polygon(),
        b in polygon(),
        ca in center(),
        cb in center(),
    ) {
        let ab = test_polygon_polygon(ca, &a, cb, &b);
        let ba = test_polygon_polygon(cb, &b, ca, &a);
        prop_assert_eq!(ab.has_separating_axis, ba.has_separating_axis);
        if !ab.has_separating_axis {
            prop_assert!((ab.value - ba.value).abs() < 1e-9);
        }
    }

    #[test]
    fn polygon_test_ignores_common_translation(
        a in polygon(),
        b in polygon(),
        ca in center(),
        cb in center(),
        shift in center(),
    ) {
        let base = test_polygon_polygon(ca, &a, cb, &b);
        let moved = test_polygon_polygon(ca + shift.to_vec2(), &a, cb + shift.to_vec2(), &b);
        prop_assert_eq!(base.has_separating_axis, moved.has_separating_axis);
        prop_assert!((base.value - moved.value).abs() < 1e-9);
    }

    #[test]
    fn witness_axis_is_unit_and_value_nonnegative(
        a in polygon(),
        c in center(),
        r in 0.1..3.0_f64,
    ) {
        let result = test_polygon_circle(Point::ORIGIN, &a, c, r);
        prop_assert!((result.axis.hypot() - 1.0).abs() < 1e-9);
        prop_assert!(result.value >= 0.0);
    }

    #[test]
    fn far_circle_is_separated_near_circle_overlaps(
        a in polygon(),
        dir in 0.0..core::f64::consts::TAU,
    ) {
        // Every vertex lies within radius 4 of the center.
        let away = Vec2::new(dir.cos(), dir.sin());
        let far = test_polygon_circle(Point::ORIGIN, &a, (away * 6.0).to_point(), 1.0);
        prop_assert!(far.has_separating_axis);
        let inside = test_polygon_circle(Point::ORIGIN, &a, (away * 0.1).to_point(), 0.2);
        prop_assert!(inside.is_overlapping(0.0));
    }

    #[test]
    fn box_test_agrees_with_its_inverse(
        pa in center(),
        sa in size(),
        pb in center(),
        sb in size(),
        angle in -3.0..3.0_f64,
        offset in center(),
    ) {
        let relative = Affine::translate(offset.to_vec2()) * Affine::rotate(angle);
        let forward = test_box_box(pa, sa, pb, sb, relative);
        let backward = test_box_box(pb, sb, pa, sa, relative.inverse());
        prop_assert_eq!(forward, backward);
    }
}
