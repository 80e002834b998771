//! Collaborator contracts the core calls into
//!
//! The embedding shell owns the window, sprite atlas, audio device and input
//! polling. The core only ever asks it to blit a named sprite or play a named
//! cue. Null and recording implementations live here for headless runs and
//! for tests.

use glam::Vec2;

/// Draws sprites and full-screen surfaces by image key.
///
/// Keys follow the sprite sheet naming scheme (`"table"`, `"bat01"`,
/// `"impact3"`, `"digit05"`, ...). Positions are sprite anchor points;
/// surfaces cover the whole arena.
pub trait Renderer {
    /// Draw a full-screen surface (background, overlays)
    fn draw_surface(&mut self, image: &str);
    /// Draw a sprite centered at `pos`
    fn draw_sprite(&mut self, image: &str, pos: Vec2);
}

/// Plays named sound cues.
///
/// Implementations must absorb every failure (missing device, missing cue):
/// playback problems never surface to gameplay logic.
pub trait SoundService {
    /// Play a one-shot cue by name (e.g. `"hit3"`, `"score_goal0"`)
    fn play(&mut self, cue: &str);

    /// Start looping background music; default is a no-op
    fn play_music(&mut self, _name: &str) {}
}

/// Renderer that discards everything. Used by the headless demo binary and
/// by tests that only exercise simulation.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_surface(&mut self, _image: &str) {}
    fn draw_sprite(&mut self, _image: &str, _pos: Vec2) {}
}

/// Sound service that discards everything.
#[derive(Debug, Default)]
pub struct NullSoundService;

impl SoundService for NullSoundService {
    fn play(&mut self, _cue: &str) {}
}

/// Records every draw call in order. Test-side renderer.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub surfaces: Vec<String>,
    pub sprites: Vec<(String, Vec2)>,
}

impl Renderer for RecordingRenderer {
    fn draw_surface(&mut self, image: &str) {
        self.surfaces.push(image.to_string());
    }

    fn draw_sprite(&mut self, image: &str, pos: Vec2) {
        self.sprites.push((image.to_string(), pos));
    }
}

/// Records every cue played. Test-side sound service.
#[derive(Debug, Default)]
pub struct RecordingSoundService {
    pub cues: Vec<String>,
}

impl SoundService for RecordingSoundService {
    fn play(&mut self, cue: &str) {
        self.cues.push(cue.to_string());
    }
}

/// Sound service that logs cues instead of playing them. Used by the demo
/// binary so a headless run still shows what would have been heard.
#[derive(Debug, Default)]
pub struct LogSoundService;

impl SoundService for LogSoundService {
    fn play(&mut self, cue: &str) {
        log::debug!("sfx: {cue}");
    }

    fn play_music(&mut self, name: &str) {
        log::debug!("music: {name}");
    }
}
