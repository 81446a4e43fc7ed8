use serde::{Deserialize, Serialize};

/// Axis-aligned box. `(x, y)` is the top-left corner; y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Whether the two boxes share interior area. Touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Index of the first box in `targets` that overlaps `subject`.
pub fn first_hit(subject: &Rect, targets: &[Rect]) -> Option<usize> {
    targets.iter().position(|t| subject.overlaps(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_boxes() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn contained_box_overlaps() {
        let outer = Rect::new(0.0, 0.0, 20.0, 20.0);
        let inner = Rect::new(5.0, 5.0, 1.0, 1.0);
        assert!(outer.overlaps(&inner));
    }

    #[test]
    fn first_hit_picks_lowest_index() {
        let subject = Rect::new(0.0, 0.0, 4.0, 4.0);
        let targets = [
            Rect::new(50.0, 50.0, 4.0, 4.0),
            Rect::new(2.0, 2.0, 4.0, 4.0),
            Rect::new(1.0, 1.0, 4.0, 4.0),
        ];
        assert_eq!(first_hit(&subject, &targets), Some(1));
        assert_eq!(first_hit(&subject, &targets[..1]), None);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn rect() -> impl Strategy<Value = Rect> {
            (-50.0f32..50.0, -50.0f32..50.0, 0.1f32..30.0, 0.1f32..30.0)
                .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
        }

        proptest! {
            #[test]
            fn overlap_is_symmetric(a in rect(), b in rect()) {
                prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
            }

            #[test]
            fn box_overlaps_itself(a in rect()) {
                prop_assert!(a.overlaps(&a));
            }
        }
    }
}
