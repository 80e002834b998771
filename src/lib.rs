//! Boing - a two-player/AI Pong-style arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, bats, scoring)
//! - `app`: Top-level menu/play/game-over state machine
//! - `services`: Collaborator contracts (renderer, sound) the core calls into
//!
//! Window creation, sprite loading, audio devices, keyboard polling and the
//! frame scheduler are all owned by the embedding shell. The core runs one
//! `update()` then one `draw()` per scheduled tick and nothing else.

pub mod app;
pub mod services;
pub mod sim;

pub use app::{App, FrameInput, MatchState};
pub use sim::{Match, MatchInput};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions in pixels
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 480.0;
    pub const HALF_WIDTH: f32 = WIDTH / 2.0;
    pub const HALF_HEIGHT: f32 = HEIGHT / 2.0;

    /// Horizontal distance from the centerline at which the ball's edge
    /// meets a bat's edge. Bat centers sit 360 px from the centerline; bat
    /// half-width 9 plus ball half-width 7 brings contact to 360 - 9 - 7.
    pub const BAT_COLLISION_DIST: f32 = 344.0;
    /// Vertical reach of a bat, exclusive on both sides
    pub const BAT_HALF_REACH: f32 = 64.0;
    /// Distance from the vertical center to the top/bottom walls
    pub const WALL_DIST: f32 = 220.0;

    /// Bat Y clamp range
    pub const BAT_MIN_Y: f32 = 80.0;
    pub const BAT_MAX_Y: f32 = 400.0;
    /// Bat center X positions per player index
    pub const BAT_X: [f32; 2] = [40.0, 760.0];

    /// Per-frame movement magnitude for a human-controlled bat
    pub const PLAYER_SPEED: f32 = 6.0;
    /// Per-frame movement cap for the AI controller
    pub const MAX_AI_SPEED: f32 = 6.0;

    /// Ball speed at serve, in substeps per frame
    pub const BALL_START_SPEED: u32 = 5;

    /// Frames a bat glows after returning the ball
    pub const GLOW_FRAMES: i32 = 10;
    /// Frames between a point conceded and the next serve
    pub const RESPAWN_DELAY_FRAMES: i32 = 20;
    /// Frames an impact effect lives (5 sprites, 2 frames each)
    pub const IMPACT_LIFETIME: u32 = 10;

    /// First score that ends the game (game over when a score exceeds this)
    pub const WINNING_SCORE: u8 = 9;
}
