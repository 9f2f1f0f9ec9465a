//! Game Configuration
//!
//! Tunable gameplay values loaded from `assets/config/game.json`.
//! Every field has a sensible default so the game still runs when the
//! config file is missing or unreadable.

use serde::{Deserialize, Serialize};

/// Tunable gameplay configuration.
///
/// Distances are in logical pixels, speeds in pixels per tick at the
/// reference frame rate, durations in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Logical screen width in pixels
    pub screen_width: u32,

    /// Logical screen height in pixels
    pub screen_height: u32,

    /// Horizontal center x-coordinates obstacles and pickups may spawn at
    pub lanes: Vec<f32>,

    /// Left road boundary (player's left edge never crosses it)
    pub road_left: f32,

    /// Right road boundary (player's right edge never crosses it)
    pub road_right: f32,

    /// Fixed vertical position of the player sprite
    pub player_y: f32,

    /// Scroll speed at the start of a drive
    pub start_speed: f32,

    /// Base horizontal steering speed of the player
    pub player_speed: f32,

    /// Length of the energy speed boost; the effective duration is this
    /// value divided by the current scroll speed
    pub boost_duration_ms: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            screen_width: 816,
            screen_height: 648,
            lanes: vec![228.0, 348.0, 468.0, 588.0],
            road_left: 138.0,
            road_right: 678.0,
            player_y: 500.0,
            start_speed: 2.0,
            player_speed: 5.0,
            boost_duration_ms: 2000.0,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Loads the config, falling back to defaults if the file is absent
    /// or malformed. A bad config file is reported but never fatal.
    pub fn load_or_default(path: &str) -> Self {
        match Self::load_from_file(path) {
            Ok(mut config) => {
                if config.lanes.is_empty() {
                    eprintln!("Warning: {} defines no lanes, using default lanes", path);
                    config.lanes = GameConfig::default().lanes;
                }
                config
            }
            Err(e) => {
                println!("No usable config at {} ({}), using defaults", path, e);
                GameConfig::default()
            }
        }
    }

    /// Horizontal screen center, where the road texture is anchored
    pub fn center_x(&self) -> f32 {
        self.screen_width as f32 / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lanes_lie_between_road_edges() {
        let config = GameConfig::default();
        for lane in &config.lanes {
            assert!(*lane > config.road_left);
            assert!(*lane < config.road_right);
        }
    }

    #[test]
    fn load_or_default_survives_missing_file() {
        let config = GameConfig::load_or_default("definitely/not/a/real/path.json");
        assert_eq!(config.screen_width, GameConfig::default().screen_width);
        assert!(!config.lanes.is_empty());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.lanes, config.lanes);
        assert_eq!(parsed.start_speed, config.start_speed);
    }
}
