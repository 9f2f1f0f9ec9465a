//! Scrolling road sprites: obstacle cars, collectible pickups, and the
//! tiling road background.
//!
//! All three share the same shape: a float position, pixel dimensions, and
//! a per-frame `update(dy)` that scrolls the sprite downward and wraps it
//! back above the screen once it passes its off-screen threshold. Sprites
//! are repositioned, never destroyed.

use crate::collision::Collidable;
use rand::seq::SliceRandom;
use rand::Rng;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

/// A car scrolls until this y, then respawns above the screen.
const CAR_WRAP_THRESHOLD: f32 = 1000.0;
const CAR_RESPAWN_Y: f32 = -1400.0;

/// Pickups linger far below the screen before coming back around, which
/// keeps them rare compared to cars.
const EFFECT_WRAP_THRESHOLD: f32 = 3000.0;
const EFFECT_RESPAWN_Y: f32 = -5000.0;

/// Consumed pickups are parked here until the next wrap.
const CONSUMED_Y: f32 = 1500.0;

/// The road snaps back up once its top edge scrolls past this y.
const ROAD_SCROLL_LIMIT: f32 = -324.0;
const ROAD_TOP_Y: f32 = -1296.0;

/// Picks a spawn lane from the configured set.
fn pick_lane<R: Rng>(lanes: &[f32], rng: &mut R) -> f32 {
    lanes.choose(rng).copied().unwrap_or(0.0)
}

fn sprite_rect(center_x: f32, y: f32, width: u32, height: u32) -> Rect {
    let x = center_x - width as f32 / 2.0;
    Rect::new(x as i32, y as i32, width, height)
}

/// An obstacle car scrolling down one of the fixed lanes.
pub struct Car {
    pub center_x: f32,
    pub y: f32,
    pub width: u32,
    pub height: u32,
    /// Index into the car texture set, so each car keeps its look across respawns
    pub skin: usize,
}

impl Car {
    pub fn spawn<R: Rng>(
        skin: usize,
        start_y: f32,
        width: u32,
        height: u32,
        lanes: &[f32],
        rng: &mut R,
    ) -> Self {
        Car {
            center_x: pick_lane(lanes, rng),
            y: start_y,
            width,
            height,
            skin,
        }
    }

    /// Scrolls down by `dy`; past the wrap threshold the car respawns far
    /// above the screen in a freshly chosen lane.
    pub fn update<R: Rng>(&mut self, dy: f32, lanes: &[f32], rng: &mut R) {
        if self.y < CAR_WRAP_THRESHOLD {
            self.y += dy;
        } else {
            self.y = CAR_RESPAWN_Y;
            self.center_x = pick_lane(lanes, rng);
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, texture: &Texture) -> Result<(), String> {
        canvas
            .copy(texture, None, Some(self.bounds()))
            .map_err(|e| e.to_string())
    }
}

impl Collidable for Car {
    fn bounds(&self) -> Rect {
        sprite_rect(self.center_x, self.y, self.width, self.height)
    }
}

/// A collectible pickup (hourglass or energy box) scrolling down a lane.
///
/// Pickups use a much deeper wrap range than cars so they appear far less
/// often. A consumed pickup is parked below the screen and rejoins the
/// scroll on its next wrap.
pub struct Effect {
    pub center_x: f32,
    pub y: f32,
    pub width: u32,
    pub height: u32,
}

impl Effect {
    pub fn spawn<R: Rng>(
        start_y: f32,
        width: u32,
        height: u32,
        lanes: &[f32],
        rng: &mut R,
    ) -> Self {
        Effect {
            center_x: pick_lane(lanes, rng),
            y: start_y,
            width,
            height,
        }
    }

    pub fn update<R: Rng>(&mut self, dy: f32, lanes: &[f32], rng: &mut R) {
        if self.y < EFFECT_WRAP_THRESHOLD {
            self.y += dy;
        } else {
            self.y = EFFECT_RESPAWN_Y;
            self.center_x = pick_lane(lanes, rng);
        }
    }

    /// Removes the pickup from play by parking it off the visible screen.
    pub fn consume(&mut self) {
        self.y = CONSUMED_Y;
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, texture: &Texture) -> Result<(), String> {
        canvas
            .copy(texture, None, Some(self.bounds()))
            .map_err(|e| e.to_string())
    }
}

impl Collidable for Effect {
    fn bounds(&self) -> Rect {
        sprite_rect(self.center_x, self.y, self.width, self.height)
    }
}

/// The scrolling road background.
///
/// The texture tiles vertically: it scrolls down until the snap limit and
/// jumps back up by one tile period, which reads as a seamless loop.
pub struct Road {
    pub center_x: f32,
    pub y: f32,
    pub width: u32,
    pub height: u32,
}

impl Road {
    pub fn new(center_x: f32, width: u32, height: u32) -> Self {
        Road {
            center_x,
            y: ROAD_TOP_Y,
            width,
            height,
        }
    }

    pub fn update(&mut self, dy: f32) {
        if self.y > ROAD_SCROLL_LIMIT {
            self.y = ROAD_TOP_Y;
        }
        self.y += dy;
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, texture: &Texture) -> Result<(), String> {
        let dest = sprite_rect(self.center_x, self.y, self.width, self.height);
        canvas.copy(texture, None, Some(dest)).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const LANES: [f32; 4] = [228.0, 348.0, 468.0, 588.0];

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn car_scrolls_below_threshold() {
        let mut rng = rng();
        let mut car = Car::spawn(0, 100.0, 60, 100, &LANES, &mut rng);
        car.update(4.0, &LANES, &mut rng);
        assert_eq!(car.y, 104.0);
    }

    #[test]
    fn car_wraps_exactly_when_crossing_threshold() {
        let mut rng = rng();
        let mut car = Car::spawn(0, 999.5, 60, 100, &LANES, &mut rng);

        // Still below the threshold: advances past it
        car.update(3.0, &LANES, &mut rng);
        assert_eq!(car.y, 1002.5);

        // Now past it: respawns above the screen in a configured lane
        car.update(3.0, &LANES, &mut rng);
        assert_eq!(car.y, -1400.0);
        assert!(LANES.contains(&car.center_x));
    }

    #[test]
    fn car_spawn_lane_comes_from_configured_set() {
        let mut rng = rng();
        for _ in 0..32 {
            let car = Car::spawn(0, -200.0, 60, 100, &LANES, &mut rng);
            assert!(LANES.contains(&car.center_x));
        }
    }

    #[test]
    fn effect_wraps_at_deeper_threshold() {
        let mut rng = rng();
        let mut effect = Effect::spawn(2999.0, 40, 40, &LANES, &mut rng);

        effect.update(5.0, &LANES, &mut rng);
        assert_eq!(effect.y, 3004.0);

        effect.update(5.0, &LANES, &mut rng);
        assert_eq!(effect.y, -5000.0);
        assert!(LANES.contains(&effect.center_x));
    }

    #[test]
    fn consumed_effect_parks_off_screen_then_rejoins() {
        let mut rng = rng();
        let mut effect = Effect::spawn(200.0, 40, 40, &LANES, &mut rng);

        effect.consume();
        assert_eq!(effect.y, 1500.0);

        // Still below the wrap threshold, so it keeps drifting down until
        // the wrap brings it back into play
        effect.update(5.0, &LANES, &mut rng);
        assert_eq!(effect.y, 1505.0);
    }

    #[test]
    fn road_scrolls_then_snaps_back_one_tile() {
        let mut road = Road::new(408.0, 816, 1944);
        assert_eq!(road.y, -1296.0);

        road.update(4.0);
        assert_eq!(road.y, -1292.0);

        // Drive it past the snap limit
        road.y = -323.0;
        road.update(4.0);
        assert_eq!(road.y, -1292.0);
    }

    #[test]
    fn bounds_center_on_lane() {
        let mut rng = rng();
        let car = Car::spawn(0, 50.0, 60, 100, &LANES, &mut rng);
        let bounds = car.bounds();
        assert_eq!(bounds.width(), 60);
        assert_eq!(bounds.x(), (car.center_x - 30.0) as i32);
        assert_eq!(bounds.y(), 50);
    }
}
