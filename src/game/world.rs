//! DriveWorld owns every sprite that exists during a drive and runs the
//! per-frame position updates and collision checks.
//!
//! Collision *response* that touches the outside world (sound, scene
//! switching) is reported back to the caller; the world itself only
//! mutates positions and the numeric game state.

use crate::collision::{collide_pair, collide_with_group};
use crate::config::GameConfig;
use crate::entity::{Car, Effect, Road};
use crate::game::state::GameState;
use crate::player::{Player, Steer};
use rand::Rng;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

/// Vertical spawn offsets staggering the four cars above the screen.
const CAR_SPAWN_YS: [f32; 4] = [-200.0, -800.0, -1400.0, -2000.0];
const HOURGLASS_SPAWN_Y: f32 = -4000.0;
const ENERGY_SPAWN_Y: f32 = -1000.0;

/// Obstacles scroll slower than the road, pickups slower still, which
/// reads as the player overtaking traffic.
const CAR_SCROLL_FACTOR: f32 = 0.5;
const EFFECT_SCROLL_FACTOR: f32 = 0.3;

/// Pixel dimensions of each sprite, queried from the textures at startup
/// (tests supply them directly).
#[derive(Debug, Clone, Copy)]
pub struct SpriteSizes {
    pub player: (u32, u32),
    pub cars: [(u32, u32); 4],
    pub hourglass: (u32, u32),
    pub energy: (u32, u32),
    pub road: (u32, u32),
}

/// Borrowed textures for everything the world renders.
pub struct WorldTextures<'a> {
    pub road: &'a Texture<'a>,
    pub player: &'a Texture<'a>,
    pub cars: [&'a Texture<'a>; 4],
    pub hourglass: &'a Texture<'a>,
    pub energy: &'a Texture<'a>,
}

/// What this frame's collision pass found.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CollisionReport {
    pub crashed: bool,
    pub picked_hourglass: bool,
    pub picked_energy: bool,
}

pub struct DriveWorld {
    pub player: Player,
    pub cars: Vec<Car>,
    pub hourglass: Effect,
    pub energy: Effect,
    pub road: Road,
    sizes: SpriteSizes,
}

impl DriveWorld {
    pub fn new<R: Rng>(config: &GameConfig, sizes: SpriteSizes, rng: &mut R) -> Self {
        let cars = CAR_SPAWN_YS
            .iter()
            .enumerate()
            .map(|(skin, &y)| {
                let (w, h) = sizes.cars[skin];
                Car::spawn(skin, y, w, h, &config.lanes, rng)
            })
            .collect();

        DriveWorld {
            player: Player::spawn(
                config.player_y,
                sizes.player.0,
                sizes.player.1,
                &config.lanes,
                rng,
            ),
            cars,
            hourglass: Effect::spawn(
                HOURGLASS_SPAWN_Y,
                sizes.hourglass.0,
                sizes.hourglass.1,
                &config.lanes,
                rng,
            ),
            energy: Effect::spawn(
                ENERGY_SPAWN_Y,
                sizes.energy.0,
                sizes.energy.1,
                &config.lanes,
                rng,
            ),
            road: Road::new(config.center_x(), sizes.road.0, sizes.road.1),
            sizes,
        }
    }

    /// Rebuilds every sprite at its spawn position. Called when a new
    /// drive starts so the previous run's layout never carries over.
    pub fn reset<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) {
        *self = DriveWorld::new(config, self.sizes, rng);
    }

    /// Moves every sprite for one frame: the player by its steering input,
    /// everything else by its share of the scroll speed.
    pub fn update_positions<R: Rng>(
        &mut self,
        steer: Steer,
        state: &GameState,
        config: &GameConfig,
        rng: &mut R,
    ) {
        self.player
            .steer(steer, state.player_speed, config.road_left, config.road_right);

        for car in &mut self.cars {
            car.update(state.dy * CAR_SCROLL_FACTOR, &config.lanes, rng);
        }
        self.road.update(state.dy);
        self.hourglass
            .update(state.dy * EFFECT_SCROLL_FACTOR, &config.lanes, rng);
        self.energy
            .update(state.dy * EFFECT_SCROLL_FACTOR, &config.lanes, rng);
    }

    /// One collision pass: player vs cars, hourglass, and energy box.
    ///
    /// Pickups are consumed here and their state effect applied; a crash is
    /// only reported, since ending the scene is the controller's call.
    pub fn resolve_collisions(&mut self, state: &mut GameState) -> CollisionReport {
        let mut report = CollisionReport::default();

        if !collide_with_group(&self.player, &self.cars).is_empty() {
            report.crashed = true;
        }

        if collide_pair(&self.player, &self.hourglass) {
            self.hourglass.consume();
            state.apply_hourglass();
            report.picked_hourglass = true;
        }

        if collide_pair(&self.player, &self.energy) {
            self.energy.consume();
            state.apply_energy();
            report.picked_energy = true;
        }

        report
    }

    /// Draws the drive scene back-to-front.
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        textures: &WorldTextures,
    ) -> Result<(), String> {
        self.road.render(canvas, textures.road)?;
        self.hourglass.render(canvas, textures.hourglass)?;
        self.energy.render(canvas, textures.energy)?;
        for car in &self.cars {
            car.render(canvas, textures.cars[car.skin % textures.cars.len()])?;
        }
        self.player.render(canvas, textures.player)
    }
}
