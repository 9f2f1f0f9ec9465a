//! The player-controlled car.
//!
//! Steering is horizontal only; the sprite sits at a fixed height while the
//! world scrolls past it. A move is applied only when the resulting edge
//! stays inside the road boundaries, so the player can never leave the road.

use crate::collision::Collidable;
use rand::seq::SliceRandom;
use rand::Rng;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

/// Steering input for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
    None,
}

impl Steer {
    /// Collapses held keys into one steering direction. Holding both keys
    /// steers right, matching the original input priority.
    pub fn from_keys(left: bool, right: bool) -> Self {
        if right {
            Steer::Right
        } else if left {
            Steer::Left
        } else {
            Steer::None
        }
    }
}

pub struct Player {
    pub center_x: f32,
    pub y: f32,
    pub width: u32,
    pub height: u32,
}

impl Player {
    /// Spawns the player in a random lane at the configured height.
    pub fn spawn<R: Rng>(y: f32, width: u32, height: u32, lanes: &[f32], rng: &mut R) -> Self {
        Player {
            center_x: lanes.choose(rng).copied().unwrap_or(0.0),
            y,
            width,
            height,
        }
    }

    /// Moves the player sideways by `speed`, clamping so the leading edge
    /// never crosses the road boundary.
    pub fn steer(&mut self, direction: Steer, speed: f32, road_left: f32, road_right: f32) {
        let half = self.width as f32 / 2.0;
        match direction {
            Steer::Right => self.center_x = (self.center_x + speed).min(road_right - half),
            Steer::Left => self.center_x = (self.center_x - speed).max(road_left + half),
            Steer::None => {}
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, texture: &Texture) -> Result<(), String> {
        canvas
            .copy(texture, None, Some(self.bounds()))
            .map_err(|e| e.to_string())
    }
}

impl Collidable for Player {
    fn bounds(&self) -> Rect {
        let x = self.center_x - self.width as f32 / 2.0;
        Rect::new(x as i32, self.y as i32, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const LANES: [f32; 4] = [228.0, 348.0, 468.0, 588.0];
    const ROAD_LEFT: f32 = 138.0;
    const ROAD_RIGHT: f32 = 678.0;

    fn player() -> Player {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        Player::spawn(500.0, 64, 100, &LANES, &mut rng)
    }

    #[test]
    fn spawns_in_a_configured_lane() {
        let p = player();
        assert!(LANES.contains(&p.center_x));
        assert_eq!(p.y, 500.0);
    }

    #[test]
    fn steers_left_and_right() {
        let mut p = player();
        let start = p.center_x;

        p.steer(Steer::Right, 5.0, ROAD_LEFT, ROAD_RIGHT);
        assert_eq!(p.center_x, start + 5.0);

        p.steer(Steer::Left, 5.0, ROAD_LEFT, ROAD_RIGHT);
        assert_eq!(p.center_x, start);

        p.steer(Steer::None, 5.0, ROAD_LEFT, ROAD_RIGHT);
        assert_eq!(p.center_x, start);
    }

    #[test]
    fn never_leaves_the_road_for_any_input_sequence() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut p = player();
        let half = p.width as f32 / 2.0;

        for _ in 0..10_000 {
            let direction = match rng.gen_range(0..3) {
                0 => Steer::Left,
                1 => Steer::Right,
                _ => Steer::None,
            };
            p.steer(direction, 5.0, ROAD_LEFT, ROAD_RIGHT);

            assert!(p.center_x - half >= ROAD_LEFT);
            assert!(p.center_x + half <= ROAD_RIGHT);
        }
    }

    #[test]
    fn steering_is_blocked_at_the_road_edge() {
        let mut p = player();
        p.center_x = ROAD_RIGHT - p.width as f32 / 2.0;

        p.steer(Steer::Right, 5.0, ROAD_LEFT, ROAD_RIGHT);
        assert_eq!(p.center_x, ROAD_RIGHT - p.width as f32 / 2.0);

        p.center_x = ROAD_LEFT + p.width as f32 / 2.0;
        p.steer(Steer::Left, 5.0, ROAD_LEFT, ROAD_RIGHT);
        assert_eq!(p.center_x, ROAD_LEFT + p.width as f32 / 2.0);
    }

    #[test]
    fn vertical_position_is_fixed() {
        let mut p = player();
        for _ in 0..100 {
            p.steer(Steer::Right, 5.0, ROAD_LEFT, ROAD_RIGHT);
        }
        assert_eq!(p.y, 500.0);
    }
}
