//! Game state and core simulation types
//!
//! `Match` owns every entity in play. All state needed to continue a match
//! deterministically lives here and serializes, so an embedding shell can
//! snapshot mid-rally.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::services::SoundService;

/// Shared entity contract: a position and a current sprite key, consumed by
/// the renderer once per frame.
pub trait Actor {
    fn pos(&self) -> Vec2;
    fn image(&self) -> String;
}

/// The ball. Replaced wholesale on respawn, never reset in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Direction unit vector; scaled by `speed` one substep at a time
    pub dir: Vec2,
    /// Substeps per frame; increments on every bat hit
    pub speed: u32,
}

impl Ball {
    /// New ball at the arena center heading horizontally in `dir_x` (±1)
    pub fn new(dir_x: f32) -> Self {
        Self {
            pos: Vec2::new(HALF_WIDTH, HALF_HEIGHT),
            dir: Vec2::new(dir_x, 0.0),
            speed: BALL_START_SPEED,
        }
    }

    /// Whether the ball has left the arena off the left or right edge
    pub fn is_out(&self) -> bool {
        self.pos.x < 0.0 || self.pos.x > WIDTH
    }
}

impl Actor for Ball {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn image(&self) -> String {
        "ball".to_string()
    }
}

/// How a bat receives its per-frame movement delta.
///
/// Resolved once at construction: `Human` reads the matching axis from the
/// frame input, `Ai` runs the predictive controller in `tick.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlSource {
    Human,
    Ai,
}

/// A player's bat. X is fixed per player; Y moves within [80, 400].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bat {
    /// Player index: 0 = left, 1 = right
    pub player: usize,
    pub pos: Vec2,
    pub score: u8,
    /// Counts down by one every frame, unbounded below. Positive values mark
    /// the glow/miss animation window after a hit or a conceded point.
    pub timer: i32,
    pub control: ControlSource,
    /// Current sprite frame: 0 neutral, 1 glow-hit, 2 glow-miss
    frame: u8,
}

impl Bat {
    pub fn new(player: usize, control: ControlSource) -> Self {
        Self {
            player,
            pos: Vec2::new(BAT_X[player], HALF_HEIGHT),
            score: 0,
            timer: 0,
            control,
            frame: 0,
        }
    }

    /// Apply this frame's movement delta and pick the sprite frame.
    ///
    /// `ball_out` is the ball's out-of-bounds state at the start of the
    /// frame; it selects between the glow-hit and glow-miss sprites.
    pub fn step(&mut self, delta: f32, ball_out: bool) {
        self.timer -= 1;
        self.pos.y = (self.pos.y + delta).clamp(BAT_MIN_Y, BAT_MAX_Y);

        self.frame = if self.timer > 0 {
            if ball_out { 2 } else { 1 }
        } else {
            0
        };
    }
}

impl Actor for Bat {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn image(&self) -> String {
        format!("bat{}{}", self.player, self.frame)
    }
}

/// Transient visual shown where the ball bounced. Five sprites, two frames
/// each; the owning `Match` removes it once `age` reaches 10.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Impact {
    pub pos: Vec2,
    pub age: u32,
}

impl Impact {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, age: 0 }
    }

    pub fn update(&mut self) {
        self.age += 1;
    }
}

impl Actor for Impact {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn image(&self) -> String {
        format!("impact{}", self.age / 2)
    }
}

/// Where the match is in the conceded-point protocol.
///
/// Kept separate from the bats' cosmetic timers, which only drive the
/// glow/miss animations over the same 20-frame window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RespawnPhase {
    /// Ball in play (or out this very frame, not yet scored)
    Idle,
    /// Point scored; serve a fresh ball when the countdown hits zero
    Delay { frames_left: u32 },
}

/// One match: two bats, one ball, live impact effects and the shared AI
/// targeting offset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub bats: [Bat; 2],
    pub ball: Ball,
    pub impacts: Vec<Impact>,
    /// Bias added to the AI's near-ball target; re-randomized in [-10, 10]
    /// each time the ball bounces off a bat, so the AI doesn't return every
    /// ball dead-center
    pub ai_offset: f32,
    pub respawn: RespawnPhase,
    rng: Pcg32,
}

impl Match {
    /// Create a match with the given control wiring. The first serve heads
    /// left, toward player 0.
    pub fn new(seed: u64, controls: [ControlSource; 2]) -> Self {
        Self {
            bats: [Bat::new(0, controls[0]), Bat::new(1, controls[1])],
            ball: Ball::new(-1.0),
            impacts: Vec::new(),
            ai_offset: 0.0,
            respawn: RespawnPhase::Idle,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// An exhibition match: both bats AI-driven, gameplay sound suppressed.
    pub fn exhibition(seed: u64) -> Self {
        Self::new(seed, [ControlSource::Ai, ControlSource::Ai])
    }

    /// Current scores, left player first
    pub fn scores(&self) -> [u8; 2] {
        [self.bats[0].score, self.bats[1].score]
    }

    /// Play one of `variants` numbered variants of a cue, e.g. `"hit3"`.
    ///
    /// No-op while bat 0 is AI-driven: that means this is the background
    /// exhibition match behind the menu, which plays silently.
    pub fn play_sound(&mut self, sounds: &mut dyn SoundService, name: &str, variants: u32) {
        if self.bats[0].control == ControlSource::Ai {
            return;
        }
        let variant = self.rng.random_range(0..variants);
        sounds.play(&format!("{name}{variant}"));
    }

    /// Draw a fresh AI offset after a bat bounce
    pub(crate) fn randomize_ai_offset(&mut self) {
        self.ai_offset = self.rng.random_range(-10..=10) as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::RecordingSoundService;

    #[test]
    fn test_impact_lifecycle_frames() {
        let mut impact = Impact::new(Vec2::new(100.0, 100.0));
        for age in 0..IMPACT_LIFETIME {
            assert_eq!(impact.age, age);
            assert_eq!(impact.image(), format!("impact{}", age / 2));
            impact.update();
        }
        assert_eq!(impact.age, IMPACT_LIFETIME);
    }

    #[test]
    fn test_bat_sprite_frames() {
        let mut bat = Bat::new(0, ControlSource::Human);
        bat.step(0.0, false);
        assert_eq!(bat.image(), "bat00");

        bat.timer = 10;
        bat.step(0.0, false);
        assert_eq!(bat.image(), "bat01");

        bat.timer = 10;
        bat.step(0.0, true);
        assert_eq!(bat.image(), "bat02");
    }

    #[test]
    fn test_play_sound_suppressed_in_exhibition() {
        let mut sounds = RecordingSoundService::default();
        let mut game = Match::exhibition(7);
        game.play_sound(&mut sounds, "hit", 5);
        assert!(sounds.cues.is_empty());

        let mut game = Match::new(7, [ControlSource::Human, ControlSource::Ai]);
        game.play_sound(&mut sounds, "hit", 5);
        assert_eq!(sounds.cues.len(), 1);
        assert!(sounds.cues[0].starts_with("hit"));
    }

    #[test]
    fn test_new_match_serves_toward_left() {
        let game = Match::exhibition(1);
        assert_eq!(game.ball.dir, Vec2::new(-1.0, 0.0));
        assert_eq!(game.ball.pos, Vec2::new(HALF_WIDTH, HALF_HEIGHT));
        assert_eq!(game.ball.speed, BALL_START_SPEED);
    }
}
