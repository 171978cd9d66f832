//! Axis-aligned collision detection.
//!
//! Every movement rule in the game resolves through the one predicate in
//! this module: walls block the player, walls bounce ghosts, ghosts catch
//! the player, the player eats pellets. All of it is AABB overlap on
//! integer pixel rectangles.

use sdl2::rect::Rect;

/// Anything with an axis-aligned bounding box.
///
/// The world stores one concrete entity type, but collision code only ever
/// needs the box, so the helpers below stay independent of entity fields.
pub trait Collidable {
    /// The entity's current bounding box in board pixels.
    fn bounds(&self) -> Rect;
}

/// Checks whether two rectangles overlap.
///
/// Touching edges do not count: a rectangle spanning x 0..32 and one
/// spanning x 32..64 are adjacent, not overlapping. The test is symmetric,
/// and call sites rely on that (player-vs-wall and ghost-vs-player pass
/// their arguments in opposite orders).
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}

/// Returns true if `bounds` overlaps any entity in the slice.
///
/// Short-circuits on the first hit, which is all the wall-blocking rules
/// need: they undo one whole position delta no matter which wall was hit.
pub fn hits_any<T: Collidable>(bounds: &Rect, others: &[T]) -> bool {
    others.iter().any(|other| overlaps(bounds, &other.bounds()))
}

/// Collects the indices of every entity in the slice overlapping `bounds`,
/// in slice order.
///
/// The pellet scan wants all hits (each one scores) plus the last one (the
/// only pellet actually removed), so this returns the full index list.
pub fn overlapping_indices<T: Collidable>(bounds: &Rect, others: &[T]) -> Vec<usize> {
    let mut hits = Vec::new();

    for (index, other) in others.iter().enumerate() {
        if overlaps(bounds, &other.bounds()) {
            hits.push(index);
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Box32 {
        x: i32,
        y: i32,
    }

    impl Collidable for Box32 {
        fn bounds(&self) -> Rect {
            Rect::new(self.x, self.y, 32, 32)
        }
    }

    #[test]
    fn test_overlaps_overlapping() {
        let a = Rect::new(0, 0, 32, 32);
        let b = Rect::new(16, 16, 32, 32);

        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a)); // Symmetric
    }

    #[test]
    fn test_overlaps_touching_edges() {
        // Rectangles sharing only an edge must NOT overlap (strict inequality)
        let a = Rect::new(0, 0, 32, 32);
        let b = Rect::new(32, 0, 32, 32);

        assert!(!overlaps(&a, &b));
        assert!(!overlaps(&b, &a));

        let below = Rect::new(0, 32, 32, 32);
        assert!(!overlaps(&a, &below));
    }

    #[test]
    fn test_overlaps_separated() {
        let a = Rect::new(0, 0, 32, 32);
        let b = Rect::new(100, 100, 32, 32);

        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_overlaps_contained() {
        // Small rectangle completely inside a larger one
        let large = Rect::new(0, 0, 100, 100);
        let small = Rect::new(25, 25, 50, 50);

        assert!(overlaps(&large, &small));
        assert!(overlaps(&small, &large));
    }

    #[test]
    fn test_overlaps_one_pixel() {
        // Corner overlap of a single pixel still counts
        let a = Rect::new(0, 0, 32, 32);
        let b = Rect::new(31, 31, 32, 32);

        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_hits_any_first_hit_short_circuit() {
        let walls = vec![
            Box32 { x: 100, y: 0 },
            Box32 { x: 16, y: 0 },
            Box32 { x: 20, y: 0 },
        ];
        let body = Rect::new(0, 0, 32, 32);

        assert!(hits_any(&body, &walls));

        let clear = Rect::new(200, 200, 32, 32);
        assert!(!hits_any(&clear, &walls));
    }

    #[test]
    fn test_hits_any_empty_slice() {
        let body = Rect::new(0, 0, 32, 32);
        let walls: Vec<Box32> = Vec::new();

        assert!(!hits_any(&body, &walls));
    }

    #[test]
    fn test_overlapping_indices_in_slice_order() {
        let pellets = vec![
            Box32 { x: 16, y: 0 },
            Box32 { x: 200, y: 200 },
            Box32 { x: 20, y: 0 },
        ];
        let body = Rect::new(0, 0, 32, 32);

        assert_eq!(overlapping_indices(&body, &pellets), vec![0, 2]);
    }
}
