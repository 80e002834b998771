//! Per-frame match update
//!
//! One `Match::update` per scheduled tick. Bats move first so the ball's
//! collision checks see current bat positions, then the ball runs its
//! substeps, then impact effects age out, then the scoring/respawn protocol
//! runs if the ball has left the arena.

use glam::Vec2;

use super::state::{Ball, ControlSource, Impact, Match, RespawnPhase};
use super::vector;
use crate::consts::*;
use crate::services::SoundService;

/// Input for a single frame: one signed movement delta per player, already
/// scaled by the shell (±PLAYER_SPEED for a held key, 0 otherwise). Only
/// read for bats wired to `ControlSource::Human`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchInput {
    pub axes: [f32; 2],
}

impl Match {
    /// Advance the match by one frame
    pub fn update(&mut self, input: &MatchInput, sounds: &mut dyn SoundService) {
        // The ball's out state at the start of the frame drives the bats'
        // glow-hit vs glow-miss sprite choice
        let ball_out = self.ball.is_out();

        for player in 0..2 {
            let delta = match self.bats[player].control {
                ControlSource::Human => input.axes[player],
                ControlSource::Ai => self.ai_move(player),
            };
            self.bats[player].step(delta, ball_out);
        }

        // Impacts spawned by this frame's ball update start aging next
        // frame, so their first sprite still shows for two full ticks
        let existing = self.impacts.len();
        self.update_ball(sounds);

        for impact in &mut self.impacts[..existing] {
            impact.update();
        }
        self.impacts.retain(|impact| impact.age < IMPACT_LIFETIME);

        if self.ball.is_out() {
            self.score_and_respawn(sounds);
        }
    }

    /// AI movement delta for the given bat.
    ///
    /// Blends two targets by how far away the ball is: the vertical center
    /// when the ball is distant (ready for either half), the ball's Y plus
    /// the shared offset when it is close. Deterministic given ball
    /// position, bat position and the current offset.
    fn ai_move(&self, player: usize) -> f32 {
        let bat = &self.bats[player];
        let x_distance = (self.ball.pos.x - bat.pos.x).abs();

        let target_far = HALF_HEIGHT;
        let target_near = self.ball.pos.y + self.ai_offset;

        let weight_far = (x_distance / HALF_WIDTH).min(1.0);
        let target_y = weight_far * target_far + (1.0 - weight_far) * target_near;

        (target_y - bat.pos.y).clamp(-MAX_AI_SPEED, MAX_AI_SPEED)
    }

    /// Move the ball through `speed` one-pixel substeps, resolving bat and
    /// wall bounces as they happen.
    fn update_ball(&mut self, sounds: &mut dyn SoundService) {
        let mut ball = self.ball;

        for _ in 0..ball.speed {
            let original_x = ball.pos.x;
            ball.pos += ball.dir;

            // A bat bounce can only trigger on the substep where the ball
            // first reaches the collision distance; once past it, later
            // substeps this frame no longer qualify.
            let dist = (ball.pos.x - HALF_WIDTH).abs();
            let original_dist = (original_x - HALF_WIDTH).abs();
            if dist >= BAT_COLLISION_DIST && original_dist < BAT_COLLISION_DIST {
                let (near, new_dir_x) = if ball.pos.x < HALF_WIDTH {
                    (0, 1.0)
                } else {
                    (1, -1.0)
                };

                let difference_y = ball.pos.y - self.bats[near].pos.y;
                if difference_y > -BAT_HALF_REACH && difference_y < BAT_HALF_REACH {
                    // Reflect horizontally, then deflect up or down by where
                    // the ball struck the bat, capping the vertical component
                    // so rallies can't turn near-vertical
                    ball.dir.x = -ball.dir.x;
                    ball.dir.y = (ball.dir.y + difference_y / 128.0).clamp(-1.0, 1.0);
                    ball.dir = vector::normalize(ball.dir)
                        .expect("bat deflection produced a zero direction vector");

                    self.impacts.push(Impact::new(Vec2::new(
                        ball.pos.x - new_dir_x * 10.0,
                        ball.pos.y,
                    )));

                    ball.speed += 1;

                    self.randomize_ai_offset();
                    self.bats[near].timer = GLOW_FRAMES;

                    // Generic hit cue every time, plus a graduated cue keyed
                    // by the post-increment speed
                    self.play_sound(sounds, "hit", 5);
                    let graduated = match ball.speed {
                        ..=10 => "hit_slow",
                        ..=12 => "hit_medium",
                        ..=16 => "hit_fast",
                        _ => "hit_veryfast",
                    };
                    self.play_sound(sounds, graduated, 1);
                }
            }

            // Top and bottom walls sit WALL_DIST from the vertical center.
            // Re-applying the reversed dy pulls the ball back inside bounds.
            if (ball.pos.y - HALF_HEIGHT).abs() > WALL_DIST {
                ball.dir.y = -ball.dir.y;
                ball.pos.y += ball.dir.y;

                self.impacts.push(Impact::new(ball.pos));

                self.play_sound(sounds, "bounce", 5);
                self.play_sound(sounds, "bounce_synth", 1);
            }
        }

        self.ball = ball;
    }

    /// Scoring and the 20-frame serve delay, run only while the ball is out
    fn score_and_respawn(&mut self, sounds: &mut dyn SoundService) {
        let scoring = if self.ball.pos.x < HALF_WIDTH { 1 } else { 0 };
        let losing = 1 - scoring;

        match self.respawn {
            RespawnPhase::Idle => {
                // First frame out: award the point and open the delay window.
                // The losing bat's timer drives its miss animation and the
                // conceded-point overlay for the same 20 frames.
                self.bats[scoring].score += 1;
                self.play_sound(sounds, "score_goal", 1);
                self.bats[losing].timer = RESPAWN_DELAY_FRAMES;
                self.respawn = RespawnPhase::Delay {
                    frames_left: RESPAWN_DELAY_FRAMES as u32,
                };
            }
            RespawnPhase::Delay { frames_left } => {
                let frames_left = frames_left - 1;
                if frames_left == 0 {
                    // Serve toward the player who just conceded
                    let dir_x = if losing == 0 { -1.0 } else { 1.0 };
                    self.ball = Ball::new(dir_x);
                    self.respawn = RespawnPhase::Idle;
                } else {
                    self.respawn = RespawnPhase::Delay { frames_left };
                }
            }
        }
    }
}
