//! Audio playback
//!
//! Thin wrapper over SDL2_mixer. Gameplay code talks to the `AudioSink`
//! trait so the logic stays headless in tests; `MixerAudio` is the real
//! implementation and `NullAudio` the silent one.
//!
//! Channel assignment follows the original soundtrack layout:
//! channel 0 crash, channel 1 UI confirmation/pickup, channel 2 intro.

use sdl2::mixer::{Channel, Chunk, Music};

/// The sounds the game can trigger. Implementations must tolerate being
/// called every frame; playback failures are reported, never fatal.
pub trait AudioSink {
    /// Intro jingle, played once at startup
    fn play_intro(&mut self);

    /// Crash sound on a player-car collision
    fn play_crash(&mut self);

    /// Short confirmation sound for menu clicks and pickups
    fn play_confirm(&mut self);

    /// Starts the looping background music from the beginning
    fn start_music(&mut self);

    /// Pauses the background music (crash aftermath)
    fn pause_music(&mut self);

    /// Resumes paused background music
    #[allow(dead_code)] // Reserved for an un-pause control
    fn resume_music(&mut self);
}

/// SDL2_mixer-backed audio output.
pub struct MixerAudio {
    intro: Chunk,
    crash: Chunk,
    confirm: Chunk,
    music: Music<'static>,
}

const CRASH_CHANNEL: Channel = Channel(0);
const CONFIRM_CHANNEL: Channel = Channel(1);
const INTRO_CHANNEL: Channel = Channel(2);

impl MixerAudio {
    /// Loads every sound from the asset directory. Any missing file is
    /// fatal at startup, like the rest of the asset set.
    pub fn load(asset_dir: &str) -> Result<Self, String> {
        let sound = |name: &str| Chunk::from_file(format!("{}/{}", asset_dir, name));

        Ok(MixerAudio {
            intro: sound("intro.ogg")?,
            crash: sound("crash.ogg")?,
            confirm: sound("effect.ogg")?,
            music: Music::from_file(format!("{}/music.ogg", asset_dir))?,
        })
    }

    fn play_on(channel: Channel, chunk: &Chunk) {
        if let Err(e) = channel.play(chunk, 0) {
            eprintln!("Audio playback failed: {}", e);
        }
    }
}

impl AudioSink for MixerAudio {
    fn play_intro(&mut self) {
        Self::play_on(INTRO_CHANNEL, &self.intro);
    }

    fn play_crash(&mut self) {
        Self::play_on(CRASH_CHANNEL, &self.crash);
    }

    fn play_confirm(&mut self) {
        Self::play_on(CONFIRM_CHANNEL, &self.confirm);
    }

    fn start_music(&mut self) {
        // -1 loops forever
        if let Err(e) = self.music.play(-1) {
            eprintln!("Music playback failed: {}", e);
        }
    }

    fn pause_music(&mut self) {
        Music::pause();
    }

    fn resume_music(&mut self) {
        Music::resume();
    }
}

/// Silent sink for headless tests. Records what was asked of it so scene
/// tests can assert on the audio cues.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct NullAudio {
    pub intro_plays: u32,
    pub crash_plays: u32,
    pub confirm_plays: u32,
    pub music_starts: u32,
    pub music_paused: bool,
}

#[cfg(test)]
impl AudioSink for NullAudio {
    fn play_intro(&mut self) {
        self.intro_plays += 1;
    }

    fn play_crash(&mut self) {
        self.crash_plays += 1;
    }

    fn play_confirm(&mut self) {
        self.confirm_plays += 1;
    }

    fn start_music(&mut self) {
        self.music_starts += 1;
        self.music_paused = false;
    }

    fn pause_music(&mut self) {
        self.music_paused = true;
    }

    fn resume_music(&mut self) {
        self.music_paused = false;
    }
}
