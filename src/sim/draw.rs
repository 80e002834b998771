//! Match drawing
//!
//! Mirrors the update order: background, conceded-point overlays, bats, ball,
//! impacts, then the score digits. The renderer is handed sprite keys and
//! anchor positions; it owns the actual images.

use glam::Vec2;

use super::state::{Actor, Match};
use crate::services::Renderer;

/// Score digit layout: left player's digits start at x=255, the right
/// player's 160 px further over, 55 px between digits, all on row 46.
const DIGIT_BASE_X: f32 = 255.0;
const DIGIT_PLAYER_STRIDE: f32 = 160.0;
const DIGIT_STRIDE: f32 = 55.0;
const DIGIT_Y: f32 = 46.0;

impl Match {
    /// Draw the whole match for this frame
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_surface("table");

        let ball_out = self.ball.is_out();

        // While a conceded point is being animated, flash that player's
        // side of the table
        for player in 0..2 {
            if self.bats[player].timer > 0 && ball_out {
                renderer.draw_surface(&format!("effect{player}"));
            }
        }

        for bat in &self.bats {
            renderer.draw_sprite(&bat.image(), bat.pos());
        }
        renderer.draw_sprite(&self.ball.image(), self.ball.pos());
        for impact in &self.impacts {
            renderer.draw_sprite(&impact.image(), impact.pos());
        }

        for player in 0..2 {
            self.draw_score(renderer, player, ball_out);
        }
    }

    /// Two zero-padded digits per player. Digit sprites are `digit{c}{d}`
    /// where c is the colour: 0 grey, 1 blue, 2 green. Grey normally, tinted
    /// while the opposing bat is animating a conceded point.
    fn draw_score(&self, renderer: &mut dyn Renderer, player: usize, ball_out: bool) {
        let score = format!("{:02}", self.bats[player].score);

        let other = 1 - player;
        let colour = if self.bats[other].timer > 0 && ball_out {
            if player == 0 { '2' } else { '1' }
        } else {
            '0'
        };

        for (i, digit) in score.chars().enumerate() {
            let pos = Vec2::new(
                DIGIT_BASE_X + DIGIT_PLAYER_STRIDE * player as f32 + DIGIT_STRIDE * i as f32,
                DIGIT_Y,
            );
            renderer.draw_sprite(&format!("digit{colour}{digit}"), pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::services::RecordingRenderer;
    use crate::sim::state::RespawnPhase;

    #[test]
    fn test_draw_order_and_scores() {
        let mut renderer = RecordingRenderer::default();
        let game = Match::exhibition(1);

        game.draw(&mut renderer);

        assert_eq!(renderer.surfaces, vec!["table"]);
        // Two bats, the ball, no impacts, then four digit sprites
        let keys: Vec<&str> = renderer.sprites.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["bat00", "bat10", "ball", "digit00", "digit00", "digit00", "digit00"]
        );
        assert_eq!(renderer.sprites[3].1, Vec2::new(255.0, 46.0));
        assert_eq!(renderer.sprites[4].1, Vec2::new(310.0, 46.0));
        assert_eq!(renderer.sprites[5].1, Vec2::new(415.0, 46.0));
        assert_eq!(renderer.sprites[6].1, Vec2::new(470.0, 46.0));
    }

    #[test]
    fn test_conceded_point_overlay_and_tint() {
        let mut renderer = RecordingRenderer::default();
        let mut game = Match::exhibition(1);

        // Right player conceded: ball out right, bat 1 mid-animation
        game.ball.pos.x = WIDTH + 5.0;
        game.bats[1].timer = RESPAWN_DELAY_FRAMES;
        game.bats[0].score = 1;
        game.respawn = RespawnPhase::Delay { frames_left: 10 };

        game.draw(&mut renderer);

        assert_eq!(renderer.surfaces, vec!["table", "effect1"]);
        // Left player's digits turn green, right player's stay grey
        let keys: Vec<&str> = renderer.sprites.iter().map(|(k, _)| k.as_str()).collect();
        assert!(keys.contains(&"digit20"));
        assert!(keys.contains(&"digit21"));
        assert!(keys.contains(&"digit00"));
        assert!(!keys.contains(&"digit10"));
    }
}
