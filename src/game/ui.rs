//! Menu, about-screen, and HUD labels.
//!
//! Label positions mirror the original layout: the vertical menu axis is
//! split into sevenths of the screen height.

use crate::config::GameConfig;
use crate::text::{text_height, Label};
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub const GRASS_GREEN: Color = Color::RGB(58, 121, 39);
const WHITE: Color = Color::RGB(255, 255, 255);
const YELLOW: Color = Color::RGB(240, 214, 60);

const ABOUT_LINES: [&str; 10] = [
    "Welcome to the game!",
    "Use <- and -> arrow keys",
    "to steer your car.",
    "Collect hourglasses",
    "to slow down.",
    "Collect energy boxes",
    "to steer faster.",
    "Press ESC at any time",
    "to quit.",
    "Good luck!",
];

pub struct GameUi {
    pub start: Label,
    pub exit: Label,
    pub about: Label,
    pub back: Label,
    score_hud: Label,
    score_menu: Label,
    about_lines: Vec<Label>,
}

impl GameUi {
    pub fn new(config: &GameConfig) -> Self {
        let cx = config.screen_width as i32 / 2;
        let seventh = config.screen_height as i32 / 7;

        // Instruction lines stack below the 2/7 mark, double line spacing,
        // with an extra blank line before the sign-off.
        let line_spacing = text_height(2) as i32 * 2;
        let about_lines = ABOUT_LINES
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let slot = if i == ABOUT_LINES.len() - 1 { i as i32 + 2 } else { i as i32 };
                Label::centered(line, 2, cx, seventh * 2 + slot * line_spacing)
            })
            .collect();

        GameUi {
            start: Label::centered("Start Game", 3, cx, seventh * 3),
            exit: Label::centered("Exit Game", 3, cx, seventh * 4),
            about: Label::centered("About", 2, cx, seventh * 6),
            back: Label::centered("Go Back", 2, cx, seventh * 6),
            score_hud: Label::new("Score: 0", 2, 20, 20),
            score_menu: Label::centered("Score: 0", 3, cx, seventh),
            about_lines,
        }
    }

    /// Refreshes both score labels to the current (whole-number) score.
    pub fn set_score(&mut self, score: f32) {
        let text = format!("Score: {:.0}", score);
        self.score_hud.set_text(text.clone());
        self.score_menu.set_text(text);
    }

    /// Main menu: start/exit/about, plus the last run's score if any.
    pub fn render_menu(&self, canvas: &mut Canvas<Window>, show_score: bool) -> Result<(), String> {
        if show_score {
            self.score_menu.render(canvas, YELLOW)?;
        }
        self.start.render(canvas, WHITE)?;
        self.exit.render(canvas, WHITE)?;
        self.about.render(canvas, WHITE)
    }

    /// About screen: the instruction lines and the way back.
    pub fn render_about(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        for line in &self.about_lines {
            line.render(canvas, WHITE)?;
        }
        self.back.render(canvas, WHITE)
    }

    /// In-drive HUD: the running score in the top-left corner.
    pub fn render_hud(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        self.score_hud.render(canvas, WHITE)
    }
}
