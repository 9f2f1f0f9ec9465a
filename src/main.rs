use sdl2::event::Event;
use sdl2::image::LoadTexture;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::mouse::MouseButton;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::time::Instant;

mod audio;
mod collision;
mod config;
mod entity;
mod game;
mod player;
mod text;

use audio::{AudioSink, MixerAudio};
use config::GameConfig;
use game::ui::GRASS_GREEN;
use game::{DriveWorld, FrameInput, GameState, GameUi, Scene, SceneController, SpriteSizes, WorldTextures};

/// Frame cap, matching the original 120 Hz tick.
const FRAME_CAP_NS: u32 = 1_000_000_000 / 120;

/// Generic texture loading helper with consistent error reporting.
fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &str,
) -> Result<Texture<'a>, String> {
    texture_creator
        .load_texture(path)
        .map_err(|e| format!("Failed to load {}: {}", path, e))
}

fn size_of(texture: &Texture) -> (u32, u32) {
    let query = texture.query();
    (query.width, query.height)
}

/// Collects this frame's events and key states into one input snapshot.
fn poll_input(event_pump: &mut sdl2::EventPump) -> FrameInput {
    let mut input = FrameInput::default();

    for event in event_pump.poll_iter() {
        match event {
            Event::Quit { .. } => input.quit = true,
            Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } => input.escape = true,
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => input.click = Some((x, y)),
            _ => {}
        }
    }

    let keyboard = event_pump.keyboard_state();
    input.left = keyboard.is_scancode_pressed(Scancode::Left);
    input.right = keyboard.is_scancode_pressed(Scancode::Right);

    input
}

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _audio_subsystem = sdl_context.audio()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;
    let _mixer_context = sdl2::mixer::init(sdl2::mixer::InitFlag::OGG)?;

    sdl2::mixer::open_audio(
        sdl2::mixer::DEFAULT_FREQUENCY,
        sdl2::mixer::DEFAULT_FORMAT,
        sdl2::mixer::DEFAULT_CHANNELS,
        1024,
    )?;
    sdl2::mixer::allocate_channels(4);

    let config = GameConfig::load_or_default("assets/config/game.json");

    let window = video_subsystem
        .window("Road Rush", config.screen_width, config.screen_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;
    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(config.screen_width, config.screen_height)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let road_texture = load_texture(&texture_creator, "assets/road.png")?;
    let player_texture = load_texture(&texture_creator, "assets/player.png")?;
    let car_textures = [
        load_texture(&texture_creator, "assets/car1.png")?,
        load_texture(&texture_creator, "assets/car2.png")?,
        load_texture(&texture_creator, "assets/car3.png")?,
        load_texture(&texture_creator, "assets/car4.png")?,
    ];
    let hourglass_texture = load_texture(&texture_creator, "assets/hourglass.png")?;
    let energy_texture = load_texture(&texture_creator, "assets/energy.png")?;

    let textures = WorldTextures {
        road: &road_texture,
        player: &player_texture,
        cars: [
            &car_textures[0],
            &car_textures[1],
            &car_textures[2],
            &car_textures[3],
        ],
        hourglass: &hourglass_texture,
        energy: &energy_texture,
    };

    let sizes = SpriteSizes {
        player: size_of(&player_texture),
        cars: [
            size_of(&car_textures[0]),
            size_of(&car_textures[1]),
            size_of(&car_textures[2]),
            size_of(&car_textures[3]),
        ],
        hourglass: size_of(&hourglass_texture),
        energy: size_of(&energy_texture),
        road: size_of(&road_texture),
    };

    let mut audio = MixerAudio::load("assets")?;
    audio.play_intro();

    let mut rng = rand::thread_rng();
    let mut state = GameState::new(&config);
    let mut world = DriveWorld::new(&config, sizes, &mut rng);
    let mut ui = GameUi::new(&config);
    let mut controller = SceneController::new();

    println!("Controls:");
    println!("Left/Right - Steer");
    println!("ESC - Quit");

    let mut last_frame = Instant::now();
    while state.running {
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32() * 1000.0;
        last_frame = now;

        let input = poll_input(&mut event_pump);
        controller.advance(
            &input, dt, &mut state, &mut world, &mut ui, &config, &mut audio, &mut rng,
        );

        canvas.set_draw_color(GRASS_GREEN);
        canvas.clear();

        match controller.scene() {
            Scene::Menu => {
                world.road.render(&mut canvas, textures.road)?;
                ui.render_menu(&mut canvas, state.score > 0.0)?;
            }
            Scene::About => {
                world.road.render(&mut canvas, textures.road)?;
                ui.render_about(&mut canvas)?;
            }
            Scene::Driving => {
                world.render(&mut canvas, &textures)?;
                ui.render_hud(&mut canvas)?;
            }
        }

        canvas.present();

        std::thread::sleep(std::time::Duration::new(0, FRAME_CAP_NS));
    }

    Ok(())
}
