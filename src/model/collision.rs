use super::*;

/// Whether the two boxes intersect with a nonzero area.
/// Boxes that only touch along an edge do not overlap.
pub fn overlaps(a: Aabb2<Coord>, b: Aabb2<Coord>) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: Coord, y: Coord, w: Coord, h: Coord) -> Aabb2<Coord> {
        Aabb2::point(vec2(x, y)).extend_positive(vec2(w, h))
    }

    #[test]
    fn intersecting_boxes_overlap() {
        assert!(overlaps(rect(0.0, 0.0, 10.0, 10.0), rect(5.0, 5.0, 10.0, 10.0)));
        assert!(overlaps(rect(5.0, 5.0, 10.0, 10.0), rect(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn contained_box_overlaps() {
        assert!(overlaps(rect(0.0, 0.0, 100.0, 100.0), rect(40.0, 40.0, 10.0, 5.0)));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(a, rect(10.0, 0.0, 10.0, 10.0)));
        assert!(!overlaps(a, rect(-10.0, 0.0, 10.0, 10.0)));
        assert!(!overlaps(a, rect(0.0, 10.0, 10.0, 10.0)));
        assert!(!overlaps(a, rect(0.0, -10.0, 10.0, 10.0)));
        // Corner contact
        assert!(!overlaps(a, rect(10.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn separated_boxes_do_not_overlap() {
        assert!(!overlaps(rect(0.0, 0.0, 10.0, 10.0), rect(50.0, 0.0, 10.0, 10.0)));
        assert!(!overlaps(rect(0.0, 0.0, 10.0, 10.0), rect(0.0, 50.0, 10.0, 10.0)));
    }
}
