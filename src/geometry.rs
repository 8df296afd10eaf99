/// Geometry primitives shared by every entity.
///
/// Positions are in board pixels (the 505x606 coordinate space); the renderer
/// is the only place that knows about terminal cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box derived from an entity position.
///
/// Boxes are never stored on the entities themselves; they are computed from
/// the current position whenever a collision test needs one, so a stale box
/// cannot be read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundingBox {
    /// Builds a box from a sprite position plus the kind's fixed offset and size.
    pub fn at(position: Vec2, left_offset: f64, top_offset: f64, width: f64, height: f64) -> Self {
        let left = position.x + left_offset;
        let top = position.y + top_offset;
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    /// Strict-overlap test: boxes that merely share an edge or corner do NOT
    /// intersect. Used identically for player-vs-enemy and player-vs-item.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        let outside_bottom = self.bottom <= other.top;
        let outside_top = self.top >= other.bottom;
        let outside_left = self.left >= other.right;
        let outside_right = self.right <= other.left;

        !(outside_bottom || outside_top || outside_left || outside_right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(left: f64, top: f64, w: f64, h: f64) -> BoundingBox {
        BoundingBox::at(Vec2::new(left, top), 0.0, 0.0, w, h)
    }

    #[test]
    fn test_overlapping_boxes_intersect() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_separated_boxes_do_not_intersect() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(20.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));

        let c = boxed(0.0, 20.0, 10.0, 10.0);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_shared_edge_is_not_an_intersection() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        // Touching on the right edge
        let b = boxed(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        // Touching on the bottom edge
        let c = boxed(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&c));
        // Touching only at a corner
        let d = boxed(10.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&d));
    }

    #[test]
    fn test_epsilon_overlap_flips_the_result() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let eps = 1e-9;

        // Shrinking away from the shared edge keeps it false
        let apart = boxed(10.0 + eps, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&apart));

        // Crossing the shared edge makes it true
        let over = boxed(10.0 - eps, 0.0, 10.0, 10.0);
        assert!(a.intersects(&over));
    }

    #[test]
    fn test_contained_box_intersects() {
        let outer = boxed(0.0, 0.0, 100.0, 100.0);
        let inner = boxed(40.0, 40.0, 10.0, 10.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_box_fields_follow_offset_and_size() {
        let b = BoundingBox::at(Vec2::new(100.0, 200.0), 10.0, 51.0, 82.0, 88.0);
        assert_eq!(b.left, 110.0);
        assert_eq!(b.top, 251.0);
        assert_eq!(b.right, 110.0 + 82.0);
        assert_eq!(b.bottom, 251.0 + 88.0);
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_intersection_is_symmetric(
                ax in -500.0f64..500.0, ay in -500.0f64..500.0,
                bx in -500.0f64..500.0, by in -500.0f64..500.0,
                aw in 1.0f64..200.0, ah in 1.0f64..200.0,
                bw in 1.0f64..200.0, bh in 1.0f64..200.0,
            ) {
                let a = boxed(ax, ay, aw, ah);
                let b = boxed(bx, by, bw, bh);
                prop_assert_eq!(a.intersects(&b), b.intersects(&a));
            }

            #[test]
            fn test_box_never_intersects_a_far_translate(
                x in -500.0f64..500.0, y in -500.0f64..500.0,
                w in 1.0f64..200.0, h in 1.0f64..200.0,
            ) {
                let a = boxed(x, y, w, h);
                // Translated past its own width: separated along x
                let b = boxed(x + w + 1.0, y, w, h);
                prop_assert!(!a.intersects(&b));
            }
        }
    }
}
