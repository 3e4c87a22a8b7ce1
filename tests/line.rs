//! Tests for candidate line geometry

use lrp_rating::{CandidateLine, GeoPoint, Polyline};

fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Two-point line running east at latitude 52, roughly 137 m long.
fn eastward_line() -> Polyline {
    Polyline::new(vec![GeoPoint::new(5.0, 52.0), GeoPoint::new(5.002, 52.0)])
        .unwrap()
}

#[test]
fn test_rejects_fewer_than_two_points() {
    assert!(Polyline::new(vec![]).is_none());
    assert!(Polyline::new(vec![GeoPoint::new(5.0, 52.0)]).is_none());
}

#[test]
fn test_rejects_out_of_range_coordinates() {
    let line = Polyline::new(vec![GeoPoint::new(5.0, 95.0), GeoPoint::new(5.002, 52.0)]);
    assert!(line.is_none());

    let line = Polyline::new(vec![GeoPoint::new(f64::NAN, 52.0), GeoPoint::new(5.002, 52.0)]);
    assert!(line.is_none());
}

#[test]
fn test_length_and_points() {
    let line = eastward_line();

    assert!(approx_eq(line.length_m(), 136.9, 0.5));
    assert_eq!(line.points().len(), 2);
    assert_eq!(line.points()[0], GeoPoint::new(5.0, 52.0));
}

#[test]
fn test_offset_zero_resolves_to_start() {
    let line = eastward_line();

    let point = line.coordinate_along_line(0.0);
    assert_eq!(point, Some(GeoPoint::new(5.0, 52.0)));
}

#[test]
fn test_negative_offset_clamps_to_start() {
    let line = eastward_line();

    let point = line.coordinate_along_line(-25.0);
    assert_eq!(point, Some(GeoPoint::new(5.0, 52.0)));
}

#[test]
fn test_offset_past_end_clamps_to_end() {
    let line = eastward_line();

    let point = line.coordinate_along_line(line.length_m() + 50.0);
    assert_eq!(point, Some(GeoPoint::new(5.002, 52.0)));
}

#[test]
fn test_interpolates_inside_a_segment() {
    let line = eastward_line();

    let midpoint = line
        .coordinate_along_line(line.length_m() / 2.0)
        .unwrap();
    assert!(approx_eq(midpoint.longitude, 5.001, 1e-9));
    assert!(approx_eq(midpoint.latitude, 52.0, 1e-9));
}

#[test]
fn test_offset_lands_in_the_right_segment() {
    // ~68.5 m east, then ~111.2 m north.
    let line = Polyline::new(vec![
        GeoPoint::new(5.0, 52.0),
        GeoPoint::new(5.001, 52.0),
        GeoPoint::new(5.001, 52.001),
    ])
    .unwrap();

    let point = line
        .coordinate_along_line(100.0)
        .unwrap();
    assert!(approx_eq(point.longitude, 5.001, 1e-9));
    assert!(point.latitude > 52.00025 && point.latitude < 52.00032);
}
