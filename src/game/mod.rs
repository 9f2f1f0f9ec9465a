// Game module - session state, the drive world, scenes, and menu UI
//
// This module contains:
// - state.rs: GameState (score, scroll speed, boost timer, flags)
// - world.rs: DriveWorld entity ownership, movement, and collisions
// - scene.rs: SceneController menu/about/drive state machine
// - ui.rs: menu, about-screen, and HUD labels

pub mod scene;
pub mod state;
pub mod ui;
pub mod world;

pub use scene::{FrameInput, Scene, SceneController};
pub use state::GameState;
pub use ui::GameUi;
pub use world::{DriveWorld, SpriteSizes, WorldTextures};
