//! Top-level application state machine
//!
//! Owns the MENU / PLAY / GAME_OVER transitions, the player-count selection
//! and the control wiring of each new match. An AI-vs-AI exhibition match
//! always runs behind the menu. The frame scheduler lives in the shell; it
//! calls `update()` then `draw()` once per tick.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::services::{Renderer, SoundService};
use crate::sim::{ControlSource, Match, MatchInput};

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    Menu,
    Play,
    GameOver,
}

/// Raw per-frame input from the shell. `confirm`, `up` and `down` are held
/// states; the confirm edge is detected here. Axes are the per-player signed
/// movement deltas (±PLAYER_SPEED while a movement key is held).
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub confirm: bool,
    pub up: bool,
    pub down: bool,
    pub axes: [f32; 2],
}

/// Application state: the active match plus everything around it
pub struct App {
    pub state: MatchState,
    num_players: u8,
    game: Match,
    /// Confirm key state last frame, for edge detection
    confirm_down: bool,
    /// Seeds for each new match
    rng: Pcg32,
}

impl App {
    /// Start at the menu with a one-player selection and a background
    /// exhibition match
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let game = Match::exhibition(rng.random());
        Self {
            state: MatchState::Menu,
            num_players: 1,
            game,
            confirm_down: false,
            rng,
        }
    }

    pub fn num_players(&self) -> u8 {
        self.num_players
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Advance one frame
    pub fn update(&mut self, input: &FrameInput, sounds: &mut dyn SoundService) {
        // Confirm acts on the press edge only, never while held
        let confirm_pressed = input.confirm && !self.confirm_down;
        self.confirm_down = input.confirm;

        match self.state {
            MatchState::Menu => {
                if confirm_pressed {
                    self.state = MatchState::Play;
                    let right = if self.num_players == 2 {
                        ControlSource::Human
                    } else {
                        ControlSource::Ai
                    };
                    self.game = Match::new(self.rng.random(), [ControlSource::Human, right]);
                    log::info!("match started ({} player)", self.num_players);
                } else {
                    if self.num_players == 2 && input.up {
                        sounds.play("up");
                        self.num_players = 1;
                    } else if self.num_players == 1 && input.down {
                        sounds.play("down");
                        self.num_players = 2;
                    }

                    // Keep the exhibition match going behind the menu
                    self.game.update(&MatchInput { axes: input.axes }, sounds);
                }
            }

            MatchState::Play => {
                let [left, right] = self.game.scores();
                if left.max(right) > WINNING_SCORE {
                    log::info!("game over: {left} - {right}");
                    self.state = MatchState::GameOver;
                } else {
                    self.game.update(&MatchInput { axes: input.axes }, sounds);
                }
            }

            MatchState::GameOver => {
                if confirm_pressed {
                    self.state = MatchState::Menu;
                    self.num_players = 1;
                    self.game = Match::exhibition(self.rng.random());
                }
            }
        }
    }

    /// Draw the match, then whatever overlay the current state calls for
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        self.game.draw(renderer);

        match self.state {
            MatchState::Menu => {
                renderer.draw_surface(&format!("menu{}", self.num_players - 1));
            }
            MatchState::Play => {}
            MatchState::GameOver => {
                renderer.draw_surface("over");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{NullSoundService, RecordingRenderer, RecordingSoundService};

    fn press_confirm(app: &mut App, sounds: &mut dyn SoundService) {
        let pressed = FrameInput {
            confirm: true,
            ..Default::default()
        };
        app.update(&pressed, sounds);
        app.update(&FrameInput::default(), sounds);
    }

    #[test]
    fn test_menu_to_play_to_game_over_to_menu() {
        let mut sounds = NullSoundService;
        let mut app = App::new(1);
        assert_eq!(app.state, MatchState::Menu);

        press_confirm(&mut app, &mut sounds);
        assert_eq!(app.state, MatchState::Play);
        assert_eq!(app.game().bats[0].control, ControlSource::Human);
        assert_eq!(app.game().bats[1].control, ControlSource::Ai);

        // Force a finished game; the next update flips to game over without
        // ticking the match further
        app.game.bats[0].score = 10;
        let ball_before = app.game.ball;
        app.update(&FrameInput::default(), &mut sounds);
        assert_eq!(app.state, MatchState::GameOver);
        assert_eq!(app.game.ball, ball_before);

        press_confirm(&mut app, &mut sounds);
        assert_eq!(app.state, MatchState::Menu);
        assert_eq!(app.num_players(), 1);
        assert_eq!(app.game().scores(), [0, 0]);
        assert_eq!(app.game().bats[0].control, ControlSource::Ai);
    }

    #[test]
    fn test_confirm_is_edge_triggered() {
        let mut sounds = NullSoundService;
        let mut app = App::new(2);

        let held = FrameInput {
            confirm: true,
            ..Default::default()
        };
        app.update(&held, &mut sounds);
        assert_eq!(app.state, MatchState::Play);

        // Still held on game over: no transition until released and re-pressed
        app.game.bats[1].score = 10;
        app.update(&held, &mut sounds);
        assert_eq!(app.state, MatchState::GameOver);
        app.update(&held, &mut sounds);
        assert_eq!(app.state, MatchState::GameOver);

        app.update(&FrameInput::default(), &mut sounds);
        app.update(&held, &mut sounds);
        assert_eq!(app.state, MatchState::Menu);
    }

    #[test]
    fn test_player_count_toggle_with_cues() {
        let mut sounds = RecordingSoundService::default();
        let mut app = App::new(3);
        assert_eq!(app.num_players(), 1);

        let down = FrameInput {
            down: true,
            ..Default::default()
        };
        app.update(&down, &mut sounds);
        assert_eq!(app.num_players(), 2);
        assert_eq!(sounds.cues, vec!["down"]);

        // Holding down with 2 already selected does nothing
        app.update(&down, &mut sounds);
        assert_eq!(app.num_players(), 2);
        assert_eq!(sounds.cues, vec!["down"]);

        let up = FrameInput {
            up: true,
            ..Default::default()
        };
        app.update(&up, &mut sounds);
        assert_eq!(app.num_players(), 1);
        assert_eq!(sounds.cues, vec!["down", "up"]);
    }

    #[test]
    fn test_two_player_wiring() {
        let mut sounds = NullSoundService;
        let mut app = App::new(4);
        let down = FrameInput {
            down: true,
            ..Default::default()
        };
        app.update(&down, &mut sounds);
        press_confirm(&mut app, &mut sounds);

        assert_eq!(app.game().bats[0].control, ControlSource::Human);
        assert_eq!(app.game().bats[1].control, ControlSource::Human);
    }

    #[test]
    fn test_menu_overlay_follows_player_count() {
        let mut app = App::new(5);
        let mut renderer = RecordingRenderer::default();
        app.draw(&mut renderer);
        assert_eq!(renderer.surfaces.last().unwrap(), "menu0");

        app.update(
            &FrameInput {
                down: true,
                ..Default::default()
            },
            &mut NullSoundService,
        );
        let mut renderer = RecordingRenderer::default();
        app.draw(&mut renderer);
        assert_eq!(renderer.surfaces.last().unwrap(), "menu1");
    }

    #[test]
    fn test_exhibition_runs_silently_behind_menu() {
        let mut sounds = RecordingSoundService::default();
        let mut app = App::new(6);
        for _ in 0..300 {
            app.update(&FrameInput::default(), &mut sounds);
        }
        assert_eq!(app.state, MatchState::Menu);
        assert!(sounds.cues.is_empty(), "exhibition gameplay never makes noise");
    }
}
