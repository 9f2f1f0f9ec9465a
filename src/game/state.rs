//! Core drive state: score, scroll speed, and the speed-boost timer.
//!
//! Pure data and arithmetic, no SDL types, so every rule here is testable
//! without a window.

use crate::config::GameConfig;

/// Mutable state of one game session.
///
/// `score` only ever grows during a drive and resets when a new drive
/// starts. `dy` is the downward scroll applied to the world each frame and
/// ramps up linearly with elapsed time.
pub struct GameState {
    /// False once the player asked to quit; the top-level loop stops
    pub running: bool,

    /// True while the Driving scene is live; cleared by a crash
    pub is_driving: bool,

    pub score: f32,
    pub dy: f32,
    pub player_speed: f32,

    /// Accumulated boosted frame time; only advances while boosted
    pub boost_timer: f32,

    base_player_speed: f32,
    start_speed: f32,
    boost_duration_ms: f32,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        GameState {
            running: true,
            is_driving: false,
            score: 0.0,
            dy: config.start_speed,
            player_speed: config.player_speed,
            boost_timer: 0.0,
            base_player_speed: config.player_speed,
            start_speed: config.start_speed,
            boost_duration_ms: config.boost_duration_ms,
        }
    }

    /// Resets everything a fresh drive depends on.
    pub fn start_drive(&mut self) {
        self.score = 0.0;
        self.dy = self.start_speed;
        self.player_speed = self.base_player_speed;
        self.boost_timer = 0.0;
        self.is_driving = true;
    }

    pub fn end_drive(&mut self) {
        self.is_driving = false;
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Per-frame ramp and score accrual. `dt` is in milliseconds.
    pub fn tick(&mut self, dt: f32) {
        self.dy += dt / 1500.0;
        self.score += dt / 100.0;
    }

    pub fn is_boosted(&self) -> bool {
        self.player_speed != self.base_player_speed
    }

    /// Advances the boost timer while boosted and reverts the player speed
    /// once the boost has run its course. The effective duration shrinks as
    /// the world speeds up (duration divided by the current scroll speed).
    pub fn update_boost(&mut self, dt: f32) {
        if !self.is_boosted() {
            return;
        }

        if self.boost_timer > self.boost_duration_ms / self.dy {
            self.player_speed = self.base_player_speed;
            self.boost_timer = 0.0;
        } else {
            self.boost_timer += dt;
        }
    }

    /// Energy box pickup: temporary steering speed doubling.
    pub fn apply_energy(&mut self) {
        self.player_speed *= 2.0;
    }

    /// Hourglass pickup: slows the world scroll down.
    pub fn apply_hourglass(&mut self) {
        self.dy *= 0.7;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        let mut s = GameState::new(&GameConfig::default());
        s.start_drive();
        s
    }

    #[test]
    fn start_drive_resets_session_values() {
        let mut s = state();
        s.score = 420.0;
        s.dy = 9.0;
        s.apply_energy();
        s.boost_timer = 300.0;

        s.start_drive();
        assert_eq!(s.score, 0.0);
        assert_eq!(s.dy, GameConfig::default().start_speed);
        assert_eq!(s.player_speed, GameConfig::default().player_speed);
        assert_eq!(s.boost_timer, 0.0);
        assert!(s.is_driving);
    }

    #[test]
    fn score_is_non_decreasing_over_a_drive() {
        let mut s = state();
        let mut last = s.score;
        for _ in 0..500 {
            s.tick(8.3);
            assert!(s.score >= last);
            last = s.score;
        }
    }

    #[test]
    fn scroll_speed_ramps_linearly() {
        let mut s = state();
        let start = s.dy;
        s.tick(1500.0);
        assert!((s.dy - (start + 1.0)).abs() < 1e-4);
    }

    #[test]
    fn boost_timer_never_advances_at_base_speed() {
        let mut s = state();
        for _ in 0..100 {
            s.update_boost(8.3);
        }
        assert_eq!(s.boost_timer, 0.0);
    }

    #[test]
    fn energy_doubles_speed_then_reverts_after_scaled_duration() {
        let mut s = state();
        let base = s.player_speed;

        s.apply_energy();
        assert_eq!(s.player_speed, base * 2.0);
        assert!(s.is_boosted());

        // dy stays fixed here, so the boost should last boost_duration / dy
        // of accumulated boosted time plus one expiry frame.
        let threshold = 2000.0 / s.dy;
        let dt = 10.0;
        let mut elapsed = 0.0;
        while s.is_boosted() {
            s.update_boost(dt);
            elapsed += dt;
            assert!(elapsed < threshold + 3.0 * dt, "boost never expired");
        }

        assert_eq!(s.player_speed, base);
        assert_eq!(s.boost_timer, 0.0);
        assert!(elapsed + dt >= threshold);
    }

    #[test]
    fn hourglass_slows_the_scroll() {
        let mut s = state();
        s.dy = 10.0;
        s.apply_hourglass();
        assert!((s.dy - 7.0).abs() < 1e-6);
    }

    #[test]
    fn double_energy_pickup_stacks_until_expiry() {
        let mut s = state();
        let base = s.player_speed;
        s.apply_energy();
        s.apply_energy();
        assert_eq!(s.player_speed, base * 4.0);

        while s.is_boosted() {
            s.update_boost(50.0);
        }
        assert_eq!(s.player_speed, base);
    }
}
