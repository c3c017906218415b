//! Tests for uncovered-gap reporting.

use interval_cover::{find_gaps, is_coverable, CoverError, Gap, Interval};

fn intervals<T: PartialOrd + Copy>(pairs: &[(T, T)]) -> Vec<Interval<T>> {
    pairs.iter().copied().map(Interval::from).collect()
}

#[test]
fn no_intervals_leaves_whole_target_uncovered() {
    let gaps = find_gaps::<i32>(&[], 0, 10).unwrap();

    assert_eq!(gaps, vec![Gap { start: 0, end: 10 }]);
}

#[test]
fn trailing_gap_is_reported() {
    let ivs = intervals(&[(0.0f32, 0.25), (0.25, 0.75), (0.75, 0.999)]);

    let gaps = find_gaps(&ivs, 0.0f32, 1.0).unwrap();

    assert_eq!(gaps, vec![Gap { start: 0.999, end: 1.0 }]);
}

#[test]
fn leading_middle_and_trailing_gaps() {
    // Window 0..20, covered: 2..5, 4..8 (merged 2..8), 12..15.
    let ivs = intervals(&[(12, 15), (2, 5), (4, 8)]);

    let gaps = find_gaps(&ivs, 0, 20).unwrap();

    assert_eq!(
        gaps,
        vec![
            Gap { start: 0, end: 2 },
            Gap { start: 8, end: 12 },
            Gap { start: 15, end: 20 },
        ]
    );
}

#[test]
fn touching_intervals_leave_no_gap() {
    let ivs = intervals(&[(0, 5), (5, 10)]);

    assert!(find_gaps(&ivs, 0, 10).unwrap().is_empty());
    assert!(is_coverable(&ivs, 0, 10).unwrap());
}

#[test]
fn intervals_outside_target_are_ignored() {
    let ivs = intervals(&[(-10, -5), (0, 10), (20, 30)]);

    assert!(find_gaps(&ivs, 0, 10).unwrap().is_empty());
}

#[test]
fn intervals_are_clipped_to_target() {
    let ivs = intervals(&[(-10, 3), (7, 30)]);

    let gaps = find_gaps(&ivs, 0, 10).unwrap();

    assert_eq!(gaps, vec![Gap { start: 3, end: 7 }]);
}

#[test]
fn uncovered_point_is_a_degenerate_gap() {
    let ivs = intervals(&[(0, 3), (6, 9)]);

    assert_eq!(find_gaps(&ivs, 4, 4).unwrap(), vec![Gap { start: 4, end: 4 }]);
    assert!(!is_coverable(&ivs, 4, 4).unwrap());
}

#[test]
fn covered_point_has_no_gap() {
    let ivs = intervals(&[(1.0, 1.0)]);

    assert!(find_gaps(&ivs, 1.0, 1.0).unwrap().is_empty());
}

#[test]
fn validation_matches_cover() {
    let ivs = intervals(&[(0, 1), (4, 2)]);

    assert_eq!(find_gaps(&ivs, 3, 1), Err(CoverError::MalformedRange));
    assert_eq!(
        find_gaps(&ivs, 0, 1),
        Err(CoverError::MalformedInterval { index: 1 })
    );
}

#[test]
fn gaps_serialize_as_json_objects() {
    let gap = Gap { start: 1.5, end: 2.0 };

    let json = serde_json::to_string(&gap).unwrap();

    assert_eq!(json, r#"{"start":1.5,"end":2.0}"#);
}
