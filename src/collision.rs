//! Collision detection for Road Rush
//!
//! AABB (Axis-Aligned Bounding Box) intersection between the player and
//! the scrolling obstacle/pickup sprites. Detection is pure and stateless;
//! the response (crash, slow-down, boost) lives in `game::world`.

use sdl2::rect::Rect;

/// Trait for sprites that participate in collision detection.
///
/// Every moving sprite exposes its screen-space bounding box; the world
/// tests the player's box against each obstacle and pickup once per frame.
pub trait Collidable {
    /// Returns the axis-aligned bounding box for this sprite, matching its
    /// position and size as rendered on screen.
    fn bounds(&self) -> Rect;
}

/// Checks whether two axis-aligned bounding boxes intersect.
///
/// Rectangles that merely touch at an edge do not intersect (exclusive
/// upper bounds), so a car sliding past the player's side is not a crash.
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}

/// Tests one sprite against a collection, returning indices of every member
/// whose box overlaps it. Used for the player-vs-car-group check.
pub fn collide_with_group<T: Collidable>(entity: &impl Collidable, group: &[T]) -> Vec<usize> {
    let entity_bounds = entity.bounds();

    group
        .iter()
        .enumerate()
        .filter(|(_, other)| aabb_intersect(&entity_bounds, &other.bounds()))
        .map(|(index, _)| index)
        .collect()
}

/// Convenience check for the singleton pickups (hourglass, energy box).
pub fn collide_pair(a: &impl Collidable, b: &impl Collidable) -> bool {
    aabb_intersect(&a.bounds(), &b.bounds())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Box2D(Rect);

    impl Collidable for Box2D {
        fn bounds(&self) -> Rect {
            self.0
        }
    }

    #[test]
    fn test_aabb_intersect_overlapping() {
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(16, 16, 32, 32);

        assert!(aabb_intersect(&rect_a, &rect_b));
        assert!(aabb_intersect(&rect_b, &rect_a)); // Symmetric
    }

    #[test]
    fn test_aabb_intersect_touching_edges() {
        // Touching edges should NOT intersect (exclusive upper bounds)
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(32, 0, 32, 32);

        assert!(!aabb_intersect(&rect_a, &rect_b));
    }

    #[test]
    fn test_aabb_intersect_separated() {
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(100, 100, 32, 32);

        assert!(!aabb_intersect(&rect_a, &rect_b));
    }

    #[test]
    fn test_aabb_intersect_contained() {
        let large = Rect::new(0, 0, 100, 100);
        let small = Rect::new(25, 25, 50, 50);

        assert!(aabb_intersect(&large, &small));
        assert!(aabb_intersect(&small, &large));
    }

    #[test]
    fn test_collide_with_group_reports_indices() {
        let player = Box2D(Rect::new(50, 50, 40, 60));
        let cars = vec![
            Box2D(Rect::new(0, 0, 40, 60)),    // clear
            Box2D(Rect::new(60, 80, 40, 60)),  // overlaps
            Box2D(Rect::new(500, 50, 40, 60)), // clear
        ];

        assert_eq!(collide_with_group(&player, &cars), vec![1]);
    }

    #[test]
    fn test_collide_pair() {
        let player = Box2D(Rect::new(50, 50, 40, 60));
        let pickup = Box2D(Rect::new(55, 90, 30, 30));
        let parked = Box2D(Rect::new(55, 1500, 30, 30));

        assert!(collide_pair(&player, &pickup));
        assert!(!collide_pair(&player, &parked));
    }
}
