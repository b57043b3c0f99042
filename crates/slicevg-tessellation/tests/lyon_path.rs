use approx::assert_abs_diff_eq;
use lyon::path::Event;
use slicevg_core::math::Point;
use slicevg_core::SlicePath;
use slicevg_tessellation::{FillRule, Path};

fn quarter_wedge() -> SlicePath {
    let mut path = SlicePath::new();
    path.move_to(Point::new(0.0, -10.0));
    path.arc_to(10.0, false, true, Point::new(10.0, 0.0));
    path.line_to(Point::new(0.0, 0.0));
    path.close();
    path
}

#[test]
fn wedge_becomes_one_closed_sub_path() {
    let path = Path::from_slice_path(&quarter_wedge());
    let events: Vec<_> = path.raw.iter().collect();

    let Some(Event::Begin { at }) = events.first() else {
        panic!("path must begin with a sub-path");
    };
    assert_abs_diff_eq!(at.x, 0.0);
    assert_abs_diff_eq!(at.y, -10.0);

    assert!(events
        .iter()
        .any(|e| matches!(e, Event::Quadratic { .. } | Event::Cubic { .. })));

    let begins = events.iter().filter(|e| matches!(e, Event::Begin { .. })).count();
    assert_eq!(begins, 1);

    let Some(Event::End { close, .. }) = events.last() else {
        panic!("path must end its sub-path");
    };
    assert!(*close);
}

#[test]
fn arc_ends_on_the_requested_point() {
    let path = Path::from_slice_path(&quarter_wedge());

    let line_from = path
        .raw
        .iter()
        .find_map(|e| match e {
            Event::Line { from, .. } => Some(from),
            _ => None,
        })
        .expect("the wedge has a line back to the center");

    assert_abs_diff_eq!(line_from.x, 10.0, epsilon = 1e-4);
    assert_abs_diff_eq!(line_from.y, 0.0, epsilon = 1e-4);
}

#[test]
fn ring_keeps_both_circles() {
    let mut ring = SlicePath::new();
    for (radius, clockwise) in [(10.0, true), (6.0, false)] {
        let left = Point::new(-radius, 0.0);
        ring.move_to(left);
        ring.arc_to(radius, true, clockwise, Point::new(radius, 0.0));
        ring.arc_to(radius, true, clockwise, left);
    }
    ring.close();

    let path: Path = (&ring).into();
    let ends: Vec<bool> = path
        .raw
        .iter()
        .filter_map(|e| match e {
            Event::End { close, .. } => Some(close),
            _ => None,
        })
        .collect();

    assert_eq!(ends, vec![false, true]);
    assert_eq!(path.fill_rule(), FillRule::NonZero);
}

#[test]
fn builder_matches_conversion() {
    let built = Path::builder()
        .move_to(Point::new(0.0, -10.0))
        .arc_to(10.0, false, true, Point::new(10.0, 0.0))
        .line_to(Point::new(0.0, 0.0))
        .close()
        .build();
    let converted = Path::from_slice_path(&quarter_wedge());

    assert_eq!(
        built.raw.iter().collect::<Vec<_>>(),
        converted.raw.iter().collect::<Vec<_>>()
    );
}

#[test]
fn fill_rule_maps_to_lyon() {
    assert_eq!(
        lyon::tessellation::FillRule::from(FillRule::EvenOdd),
        lyon::tessellation::FillRule::EvenOdd
    );
    assert_eq!(
        lyon::tessellation::FillRule::from(FillRule::default()),
        lyon::tessellation::FillRule::NonZero
    );
}
