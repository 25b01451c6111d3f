//! Hit testing against anchors and control handles.

use crate::segment::{Segment, distance_squared};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// An editable feature of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    Anchor,
    IncomingHandle,
    OutgoingHandle,
}

/// Result of a successful hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    pub feature: Feature,
    pub index: usize,
}

impl Hit {
    pub fn new(feature: Feature, index: usize) -> Self {
        Self { feature, index }
    }
}

/// Find the first feature within `radius` of `point`.
///
/// Segments are scanned in order; at each index the anchor is tested before
/// the incoming handle, which is tested before the outgoing handle. The first
/// feature strictly inside the radius wins, even if a later one is closer.
pub fn hit_test(segments: &[Segment], point: Point, radius: f64) -> Option<Hit> {
    let radius_squared = radius * radius;
    for (index, segment) in segments.iter().enumerate() {
        let candidates = [
            (Feature::Anchor, segment.anchor),
            (Feature::IncomingHandle, segment.incoming_control),
            (Feature::OutgoingHandle, segment.outgoing_control),
        ];
        for (feature, position) in candidates {
            if distance_squared(point, position) < radius_squared {
                return Some(Hit::new(feature, index));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments() -> Vec<Segment> {
        vec![
            Segment::new(Point::new(0.0, 0.0), Point::new(20.0, 0.0), Point::new(20.0, 0.0)),
            Segment::new(Point::new(20.0, 0.0), Point::new(30.0, 0.0), Point::new(40.0, 0.0)),
        ]
    }

    #[test]
    fn test_empty_misses() {
        assert!(hit_test(&[], Point::new(0.0, 0.0), 5.0).is_none());
    }

    #[test]
    fn test_anchor_beats_handles() {
        let hit = hit_test(&segments(), Point::new(20.0, 0.0), 5.0).unwrap();
        assert_eq!(hit, Hit::new(Feature::Anchor, 0));
    }

    #[test]
    fn test_incoming_handle() {
        let hit = hit_test(&segments(), Point::new(1.0, 1.0), 5.0).unwrap();
        assert_eq!(hit, Hit::new(Feature::IncomingHandle, 0));
    }

    #[test]
    fn test_first_fit_not_best_fit() {
        let segs = vec![
            Segment::corner(Point::new(0.0, 0.0)),
            Segment::corner(Point::new(6.0, 0.0)),
        ];
        // 4 from anchor 0, 2 from anchor 1
        let hit = hit_test(&segs, Point::new(4.0, 0.0), 5.0).unwrap();
        assert_eq!(hit, Hit::new(Feature::Anchor, 0));
    }

    #[test]
    fn test_radius_is_strict() {
        // exactly 5 away from (30, 0) and from every other feature
        assert!(hit_test(&segments(), Point::new(30.0, 5.0), 5.0).is_none());
        let hit = hit_test(&segments(), Point::new(30.0, 4.9), 5.0).unwrap();
        assert_eq!(hit, Hit::new(Feature::OutgoingHandle, 1));
    }
}
