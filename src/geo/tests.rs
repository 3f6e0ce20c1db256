use crate::geo::errors::InvalidArgument;
use crate::geo::models::{GeoPoint, Located, Nearby};
use crate::geo::{distance_km, filter_by_radius, find_within, rank_by_distance};

const CARDIFF: GeoPoint = GeoPoint {
    lat: 51.4816,
    lng: -3.1791,
};
const LONDON: GeoPoint = GeoPoint {
    lat: 51.5074,
    lng: -0.1278,
};

#[derive(Clone, Debug, PartialEq)]
struct Pin {
    label: &'static str,
    at: GeoPoint,
}

impl Located for Pin {
    fn position(&self) -> GeoPoint {
        self.at
    }
}

fn pin(label: &'static str, lat: f64, lng: f64) -> Pin {
    Pin {
        label,
        at: GeoPoint::new(lat, lng),
    }
}

fn labels(nearby: &[Nearby<Pin>]) -> Vec<&'static str> {
    nearby.iter().map(|n| n.record.label).collect()
}

#[test]
fn test_distance_to_itself_is_zero() {
    let points = [
        CARDIFF,
        LONDON,
        GeoPoint::new(-33.86, 151.2),
        GeoPoint::new(90.0, 180.0),
    ];
    for point in points {
        assert_eq!(distance_km(point, point), 0.0);
    }
}

#[test]
fn test_distance_is_symmetric() {
    let sydney = GeoPoint::new(-33.8688, 151.2093);
    assert_eq!(distance_km(CARDIFF, LONDON), distance_km(LONDON, CARDIFF));
    assert_eq!(distance_km(sydney, LONDON), distance_km(LONDON, sydney));
}

#[test]
fn test_cardiff_to_london() {
    let distance = distance_km(CARDIFF, LONDON);
    assert!((distance - 211.24).abs() < 1.0, "got {distance}");
}

#[test]
fn test_one_degree_of_latitude() {
    let distance = distance_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0));
    assert!((distance - 111.19).abs() < 0.01, "got {distance}");
}

#[test]
fn test_filter_keeps_only_points_within_radius_sorted() {
    let candidates = vec![
        pin("london", LONDON.lat, LONDON.lng),
        pin("newport", 51.5842, -2.9977),
        pin("cardiff-bay", 51.4637, -3.1634),
        pin("swansea", 51.6214, -3.9436),
    ];

    let nearby = filter_by_radius(CARDIFF, &candidates, 60.0).unwrap();

    assert_eq!(labels(&nearby), vec!["cardiff-bay", "newport", "swansea"]);
    for pair in nearby.windows(2) {
        assert!(pair[0].distance <= pair[1].distance);
    }
    for candidate in &candidates {
        let distance = distance_km(CARDIFF, candidate.at);
        let kept = nearby.iter().any(|n| n.record == *candidate);
        assert_eq!(kept, distance <= 60.0);
    }
}

#[test]
fn test_filter_does_not_touch_candidates() {
    let candidates = vec![pin("a", 51.47, -3.17), pin("b", 51.6, -3.0)];
    let before = candidates.clone();

    let _ = filter_by_radius(CARDIFF, &candidates, 100.0).unwrap();

    assert_eq!(candidates, before);
}

#[test]
fn test_boundary_is_inclusive() {
    let far = pin("london", LONDON.lat, LONDON.lng);
    let radius = distance_km(CARDIFF, far.at);

    let nearby = filter_by_radius(CARDIFF, &[far], radius).unwrap();

    assert_eq!(nearby.len(), 1);
    assert_eq!(nearby[0].distance, radius);
}

#[test]
fn test_ties_keep_input_order() {
    let candidates = vec![
        pin("first", 51.5, -3.1791),
        pin("second", 51.5, -3.1791),
        pin("closest", 51.4817, -3.1791),
        pin("third", 51.5, -3.1791),
    ];

    let nearby = filter_by_radius(CARDIFF, &candidates, 10.0).unwrap();

    assert_eq!(labels(&nearby), vec!["closest", "first", "second", "third"]);
}

#[test]
fn test_zero_radius() {
    let candidates = vec![pin("near", 51.4817, -3.1791)];
    assert!(filter_by_radius(CARDIFF, &candidates, 0.0).unwrap().is_empty());

    let candidates = vec![
        pin("near", 51.4817, -3.1791),
        pin("here", CARDIFF.lat, CARDIFF.lng),
    ];
    let nearby = filter_by_radius(CARDIFF, &candidates, 0.0).unwrap();
    assert_eq!(labels(&nearby), vec!["here"]);
    assert_eq!(nearby[0].distance, 0.0);
}

#[test]
fn test_no_candidates() {
    let candidates: Vec<Pin> = vec![];
    assert!(filter_by_radius(CARDIFF, &candidates, 5.0).unwrap().is_empty());
    assert!(filter_by_radius(GeoPoint::new(-89.0, 179.0), &candidates, 0.0)
        .unwrap()
        .is_empty());
}

#[test]
fn test_invalid_radius() {
    let candidates = vec![pin("a", 51.47, -3.17)];
    assert_eq!(
        filter_by_radius(CARDIFF, &candidates, -5.0),
        Err(InvalidArgument::Radius(-5.0))
    );
    assert!(matches!(
        filter_by_radius(CARDIFF, &candidates, f64::NAN),
        Err(InvalidArgument::Radius(_))
    ));
    assert_eq!(
        filter_by_radius(CARDIFF, &candidates, f64::INFINITY),
        Err(InvalidArgument::Radius(f64::INFINITY))
    );
}

#[test]
fn test_invalid_origin() {
    let candidates = vec![pin("a", 51.47, -3.17)];
    assert_eq!(
        filter_by_radius(GeoPoint::new(200.0, 0.0), &candidates, 5.0),
        Err(InvalidArgument::Latitude(200.0))
    );
    assert_eq!(
        filter_by_radius(GeoPoint::new(0.0, -180.5), &candidates, 5.0),
        Err(InvalidArgument::Longitude(-180.5))
    );
    assert!(matches!(
        filter_by_radius(GeoPoint::new(f64::NAN, 0.0), &candidates, 5.0),
        Err(InvalidArgument::Latitude(_))
    ));
}

#[test]
fn test_invalid_candidate_yields_no_partial_result() {
    let candidates = vec![pin("good", 51.47, -3.17), pin("bad", 51.47, f64::NAN)];
    assert!(matches!(
        filter_by_radius(CARDIFF, &candidates, 5.0),
        Err(InvalidArgument::Longitude(_))
    ));
}

#[test]
fn test_rank_keeps_everything() {
    let candidates = vec![
        pin("london", LONDON.lat, LONDON.lng),
        pin("here", CARDIFF.lat, CARDIFF.lng),
    ];

    let ranked = rank_by_distance(CARDIFF, &candidates).unwrap();

    assert_eq!(labels(&ranked), vec!["here", "london"]);
}

#[test]
fn test_find_within_is_strict() {
    let candidates = vec![pin("fifty-meters", 0.0, 0.00045)];
    let origin = GeoPoint::new(0.0, 0.0);

    assert!(find_within(origin, &candidates, 0.05).is_none());
    assert_eq!(
        find_within(origin, &candidates, 0.06).map(|p| p.label),
        Some("fifty-meters")
    );
}
