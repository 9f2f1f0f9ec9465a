//! Menu / About / Driving state machine.
//!
//! The controller consumes one `FrameInput` snapshot per frame and mutates
//! the game state, world, and audio accordingly. Scene switches that the
//! original game performed behind a blocking 600 ms sleep (start
//! confirmation, crash aftermath) are modelled as a timed `PendingScene`
//! sub-state instead: the loop keeps ticking, the world freezes, and the
//! switch fires once the countdown runs out.

use crate::audio::AudioSink;
use crate::config::GameConfig;
use crate::game::state::GameState;
use crate::game::ui::GameUi;
use crate::game::world::DriveWorld;
use crate::player::Steer;
use rand::Rng;

/// Cinematic pause length before a pending scene switch fires.
const SCENE_PAUSE_MS: f32 = 600.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Menu,
    About,
    Driving,
}

/// Everything the controller needs to know about one frame of input.
/// Built from the SDL event pump in `main`; tests construct it directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameInput {
    pub quit: bool,
    pub escape: bool,
    pub left: bool,
    pub right: bool,
    pub click: Option<(i32, i32)>,
}

/// A scene switch scheduled to fire after a short on-screen pause.
struct PendingScene {
    target: Scene,
    remaining_ms: f32,
}

pub struct SceneController {
    scene: Scene,
    pending: Option<PendingScene>,
}

impl SceneController {
    pub fn new() -> Self {
        SceneController {
            scene: Scene::Menu,
            pending: None,
        }
    }

    /// The visible scene; unchanged while a switch is pending.
    pub fn scene(&self) -> Scene {
        self.scene
    }

    /// Runs one frame of the active scene. `dt` is in milliseconds.
    #[allow(clippy::too_many_arguments)]
    pub fn advance<R: Rng>(
        &mut self,
        input: &FrameInput,
        dt: f32,
        state: &mut GameState,
        world: &mut DriveWorld,
        ui: &mut GameUi,
        config: &GameConfig,
        audio: &mut dyn AudioSink,
        rng: &mut R,
    ) {
        // Escape and window-close quit from any scene.
        if input.quit || input.escape {
            state.quit();
            return;
        }

        // A pending switch freezes the world until its countdown expires.
        if let Some(pending) = &mut self.pending {
            pending.remaining_ms -= dt;
            if pending.remaining_ms <= 0.0 {
                let target = pending.target;
                self.pending = None;
                self.enter(target, state, world, config, audio, rng);
            }
            return;
        }

        match self.scene {
            Scene::Menu => self.update_menu(input, state, ui, audio),
            Scene::About => self.update_about(input, ui, audio),
            Scene::Driving => self.update_drive(input, dt, state, world, ui, config, audio, rng),
        }
    }

    fn enter<R: Rng>(
        &mut self,
        target: Scene,
        state: &mut GameState,
        world: &mut DriveWorld,
        config: &GameConfig,
        audio: &mut dyn AudioSink,
        rng: &mut R,
    ) {
        self.scene = target;
        if target == Scene::Driving {
            state.start_drive();
            world.reset(config, rng);
            audio.start_music();
        }
    }

    fn update_menu(
        &mut self,
        input: &FrameInput,
        state: &mut GameState,
        ui: &GameUi,
        audio: &mut dyn AudioSink,
    ) {
        let Some((x, y)) = input.click else { return };

        if ui.start.contains(x, y) {
            audio.play_confirm();
            self.pending = Some(PendingScene {
                target: Scene::Driving,
                remaining_ms: SCENE_PAUSE_MS,
            });
        } else if ui.exit.contains(x, y) {
            state.quit();
        } else if ui.about.contains(x, y) {
            audio.play_confirm();
            self.scene = Scene::About;
        }
    }

    fn update_about(&mut self, input: &FrameInput, ui: &GameUi, audio: &mut dyn AudioSink) {
        if let Some((x, y)) = input.click {
            if ui.back.contains(x, y) {
                audio.play_confirm();
                self.scene = Scene::Menu;
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn update_drive<R: Rng>(
        &mut self,
        input: &FrameInput,
        dt: f32,
        state: &mut GameState,
        world: &mut DriveWorld,
        ui: &mut GameUi,
        config: &GameConfig,
        audio: &mut dyn AudioSink,
        rng: &mut R,
    ) {
        state.tick(dt);
        ui.set_score(state.score);
        state.update_boost(dt);

        let report = world.resolve_collisions(state);
        if report.picked_hourglass || report.picked_energy {
            audio.play_confirm();
        }
        if report.crashed {
            // The drive ends this frame; the menu appears after the pause.
            audio.pause_music();
            audio.play_crash();
            state.end_drive();
            self.pending = Some(PendingScene {
                target: Scene::Menu,
                remaining_ms: SCENE_PAUSE_MS,
            });
            return;
        }

        let steer = Steer::from_keys(input.left, input.right);
        world.update_positions(steer, state, config, rng);
    }
}

impl Default for SceneController {
    fn default() -> Self {
        Self::new()
    }
}
