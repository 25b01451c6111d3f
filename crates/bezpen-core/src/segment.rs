//! Segment records and the cubic pieces they describe.

use kurbo::{BezPath, CubicBez, Point, Vec2};
use serde::{Deserialize, Serialize};

/// One joint of a curve: an on-curve anchor and its two control handles.
///
/// Segment `i > 0` closes the cubic piece
/// `(anchor[i-1], outgoing_control[i-1], incoming_control[i], anchor[i])`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Handle pulling into this anchor from the previous segment.
    pub incoming_control: Point,
    /// Handle pushing out toward the next segment.
    pub outgoing_control: Point,
    /// On-curve point.
    pub anchor: Point,
}

impl Segment {
    pub fn new(incoming_control: Point, outgoing_control: Point, anchor: Point) -> Self {
        Self {
            incoming_control,
            outgoing_control,
            anchor,
        }
    }

    /// Segment with both handles collapsed onto the anchor.
    pub fn corner(anchor: Point) -> Self {
        Self::new(anchor, anchor, anchor)
    }

    /// Translate all three points.
    pub fn translate(&mut self, delta: Vec2) {
        self.incoming_control += delta;
        self.outgoing_control += delta;
        self.anchor += delta;
    }
}

/// Reflect `p` through `center`.
pub fn reflect(p: Point, center: Point) -> Point {
    center + (center - p)
}

/// Squared distance between two points.
pub fn distance_squared(a: Point, b: Point) -> f64 {
    (a - b).hypot2()
}

/// Number of drawn pieces for a segment list.
pub fn piece_count(len: usize, closed: bool) -> usize {
    match len {
        0 => 0,
        n if closed && n > 1 => n,
        n => n - 1,
    }
}

/// The cubic pieces drawn for a segment list, closing piece last.
pub fn pieces(segments: &[Segment], closed: bool) -> Vec<CubicBez> {
    let mut result: Vec<CubicBez> = segments
        .windows(2)
        .map(|w| CubicBez::new(w[0].anchor, w[0].outgoing_control, w[1].incoming_control, w[1].anchor))
        .collect();
    if closed && segments.len() > 1 {
        let (first, last) = (segments[0], segments[segments.len() - 1]);
        result.push(CubicBez::new(
            last.anchor,
            last.outgoing_control,
            first.incoming_control,
            first.anchor,
        ));
    }
    result
}

/// Build the stroked path for a segment list.
pub fn to_bez_path(segments: &[Segment], closed: bool) -> BezPath {
    let mut path = BezPath::new();
    let Some(first) = segments.first() else {
        return path;
    };
    path.move_to(first.anchor);
    for piece in pieces(segments, closed) {
        path.curve_to(piece.p1, piece.p2, piece.p3);
    }
    if closed && segments.len() > 1 {
        path.close_path();
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_segments() -> Vec<Segment> {
        vec![
            Segment::new(Point::new(0.0, 0.0), Point::new(20.0, 0.0), Point::new(20.0, 0.0)),
            Segment::new(Point::new(20.0, 0.0), Point::new(30.0, 0.0), Point::new(40.0, 0.0)),
        ]
    }

    #[test]
    fn test_reflect() {
        let r = reflect(Point::new(15.0, 5.0), Point::new(10.0, 0.0));
        assert_eq!(r, Point::new(5.0, -5.0));
    }

    #[test]
    fn test_piece_count() {
        assert_eq!(piece_count(0, false), 0);
        assert_eq!(piece_count(0, true), 0);
        assert_eq!(piece_count(1, true), 0);
        assert_eq!(piece_count(3, false), 2);
        assert_eq!(piece_count(3, true), 3);
    }

    #[test]
    fn test_open_pieces() {
        let segs = two_segments();
        let pieces = pieces(&segs, false);
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].p0, Point::new(20.0, 0.0));
        assert_eq!(pieces[0].p1, Point::new(20.0, 0.0));
        assert_eq!(pieces[0].p2, Point::new(20.0, 0.0));
        assert_eq!(pieces[0].p3, Point::new(40.0, 0.0));
    }

    #[test]
    fn test_closing_piece_uses_first_segment() {
        let segs = two_segments();
        let pieces = pieces(&segs, true);
        assert_eq!(pieces.len(), 2);
        let closing = pieces[1];
        assert_eq!(closing.p0, Point::new(40.0, 0.0));
        assert_eq!(closing.p1, Point::new(30.0, 0.0));
        assert_eq!(closing.p2, Point::new(0.0, 0.0));
        assert_eq!(closing.p3, Point::new(20.0, 0.0));
    }

    #[test]
    fn test_path_elements() {
        let segs = two_segments();
        assert_eq!(to_bez_path(&segs, false).elements().len(), 2);
        // move, two curves, close
        assert_eq!(to_bez_path(&segs, true).elements().len(), 4);
        assert!(to_bez_path(&[], true).elements().is_empty());
    }
}
