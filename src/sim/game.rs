//! Game lifecycle
//!
//! `Game` wraps the state with its serve-angle source and handles the
//! host's commands: start, restart, pause, exit, resize and pointer drags.

use serde::{Deserialize, Serialize};

use super::error::{InvalidPointerSnafu, SimError};
use super::paddle::Side;
use super::serve::{AngleSource, SeededAngles};
use super::state::{GamePhase, GameState, Playfield, Snapshot};
use super::tick::{GameEvent, tick};
use crate::settings::Settings;

/// User commands from the host's buttons/keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Start,
    Restart,
    TogglePause,
    Exit,
}

/// What the host should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// Stop the application; shutting down is up to the host
    Exit,
}

/// A running game and its serve-angle source
#[derive(Debug)]
pub struct Game<A = SeededAngles> {
    state: GameState,
    angles: A,
}

impl Game<SeededAngles> {
    /// Game seeded from settings, or from entropy when no seed is configured
    pub fn from_settings(settings: &Settings) -> Result<Self, SimError> {
        let angles = match settings.seed {
            Some(seed) => SeededAngles::new(seed),
            None => SeededAngles::from_entropy(),
        };
        log::info!("Serve angles seeded with {}", angles.seed());
        Self::with_angles(settings, angles)
    }
}

impl<A: AngleSource> Game<A> {
    /// Create a game and make the opening serve
    pub fn with_angles(settings: &Settings, angles: A) -> Result<Self, SimError> {
        let mut game = Self {
            state: GameState::from_settings(settings)?,
            angles,
        };
        game.serve(Side::Right);
        Ok(game)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for hosts that restore or script a state
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Serve with the base velocity heading toward `toward`
    fn serve(&mut self, toward: Side) {
        let base = self.state.tuning.serve_toward(toward);
        let angle = self.angles.next_angle();
        self.state.serve_ball(base, angle);
    }

    /// Advance one tick. `dt` is validated but does not scale motion.
    pub fn update(&mut self, dt: f32) -> Result<Vec<GameEvent>, SimError> {
        SimError::check_tick(dt)?;
        Ok(tick(&mut self.state, &mut self.angles))
    }

    /// Resume if paused; otherwise reset scores and serve a new game
    pub fn start_game(&mut self) {
        if self.state.is_paused() {
            self.state.phase = GamePhase::Running;
            log::info!("Resumed");
            return;
        }
        self.new_round();
    }

    /// Reset scores and serve, whatever the current phase
    pub fn restart_game(&mut self) {
        self.new_round();
    }

    fn new_round(&mut self) {
        self.state.reset_scores();
        self.serve(Side::Right);
        self.state.phase = GamePhase::Running;
        log::info!("New game started");
    }

    pub fn toggle_pause(&mut self) {
        self.state.phase = match self.state.phase {
            GamePhase::Paused => GamePhase::Running,
            GamePhase::Fresh | GamePhase::Running => GamePhase::Paused,
        };
        log::info!("Paused: {}", self.state.is_paused());
    }

    /// Apply a user command
    pub fn handle(&mut self, command: Command) -> Outcome {
        match command {
            Command::Start => self.start_game(),
            Command::Restart => self.restart_game(),
            Command::TogglePause => self.toggle_pause(),
            Command::Exit => {
                log::info!("Exit requested");
                return Outcome::Exit;
            }
        }
        Outcome::Continue
    }

    /// New playfield size from the host. Scores are untouched.
    ///
    /// Sizes too narrow for both paddles are refused.
    pub fn on_resize(&mut self, width: f32, height: f32) -> Result<(), SimError> {
        let field = Playfield::new(width, height)?;
        self.state.check_fit(field)?;
        self.state.playfield = field;
        self.state.layout_paddles();
        log::debug!("Playfield resized to {}x{}", width, height);
        Ok(())
    }

    /// Drag a paddle: left third moves player 1, right third moves player 2
    ///
    /// Returns the paddle that moved, if any. Paddles are not clamped.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> Result<Option<Side>, SimError> {
        if !(x.is_finite() && y.is_finite()) {
            return InvalidPointerSnafu { x, y }.fail();
        }
        let field = self.state.playfield;
        let third = field.width / 3.0;
        let side = if x < third {
            Some(Side::Left)
        } else if x > field.width - third {
            Some(Side::Right)
        } else {
            None
        };
        if let Some(side) = side {
            self.state.paddle_mut(side).set_center_y(y);
        }
        Ok(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::serve::FixedAngle;
    use glam::Vec2;

    fn game() -> Game<FixedAngle> {
        Game::with_angles(&Settings::default(), FixedAngle(0.0)).unwrap()
    }

    #[test]
    fn test_new_game_serves() {
        let game = game();
        assert_eq!(game.phase(), GamePhase::Fresh);
        assert_eq!(game.state().ball.center(), Vec2::new(400.0, 300.0));
        assert_eq!(game.state().ball.vel, Vec2::new(4.0, 0.0));
    }

    #[test]
    fn test_fresh_game_ticks() {
        let mut game = game();
        let before = game.state().ball.pos;
        game.update(1.0 / 60.0).unwrap();
        assert_eq!(game.state().ball.pos, before + Vec2::new(4.0, 0.0));
    }

    #[test]
    fn test_pause_freezes_state() {
        let mut game = game();
        game.toggle_pause();
        assert_eq!(game.phase(), GamePhase::Paused);
        let before = game.snapshot();
        for _ in 0..10 {
            assert!(game.update(1.0 / 60.0).unwrap().is_empty());
        }
        assert_eq!(game.snapshot(), before);

        game.toggle_pause();
        assert_eq!(game.phase(), GamePhase::Running);
    }

    #[test]
    fn test_start_while_paused_only_resumes() {
        let mut game = game();
        game.state_mut().player1.score = 2;
        game.state_mut().ball.pos = Vec2::new(10.0, 20.0);
        game.toggle_pause();
        game.start_game();
        assert_eq!(game.phase(), GamePhase::Running);
        assert_eq!(game.state().scores(), (2, 0));
        assert_eq!(game.state().ball.pos, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_start_while_running_resets() {
        let mut game = game();
        game.start_game();
        game.state_mut().player1.score = 4;
        game.state_mut().player2.score = 1;
        game.state_mut().ball.pos = Vec2::new(10.0, 20.0);
        game.start_game();
        assert_eq!(game.state().scores(), (0, 0));
        assert_eq!(game.state().ball.center(), Vec2::new(400.0, 300.0));
        assert_eq!(game.phase(), GamePhase::Running);
    }

    #[test]
    fn test_restart_resets_even_when_paused() {
        let mut game = game();
        game.state_mut().player2.score = 9;
        game.toggle_pause();
        game.restart_game();
        assert_eq!(game.state().scores(), (0, 0));
        assert!(!game.state().is_paused());
    }

    #[test]
    fn test_handle_commands() {
        let mut game = game();
        assert_eq!(game.handle(Command::TogglePause), Outcome::Continue);
        assert!(game.state().is_paused());
        assert_eq!(game.handle(Command::Start), Outcome::Continue);
        assert!(!game.state().is_paused());
        assert_eq!(game.handle(Command::Restart), Outcome::Continue);
        assert_eq!(game.handle(Command::Exit), Outcome::Exit);
    }

    #[test]
    fn test_update_rejects_bad_dt() {
        let mut game = game();
        let before = game.snapshot();
        assert_eq!(game.update(0.0), Err(SimError::InvalidTick { dt: 0.0 }));
        assert!(game.update(-1.0).is_err());
        assert!(game.update(f32::INFINITY).is_err());
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_resize_keeps_scores() {
        let mut game = game();
        game.state_mut().player1.score = 3;
        game.on_resize(1024.0, 768.0).unwrap();
        assert_eq!(game.state().playfield.width, 1024.0);
        assert_eq!(game.state().playfield.height, 768.0);
        assert_eq!(game.state().player2.pos.x, 1024.0 - 25.0);
        assert_eq!(game.state().scores(), (3, 0));

        assert!(game.on_resize(0.0, 768.0).is_err());
        assert_eq!(game.state().playfield.width, 1024.0);
    }

    #[test]
    fn test_resize_refuses_width_without_room_for_paddles() {
        let mut game = game();
        assert_eq!(
            game.on_resize(30.0, 600.0),
            Err(SimError::InvalidDimension {
                width: 30.0,
                height: 600.0
            })
        );
        assert_eq!(game.state().playfield.width, 800.0);
        assert_eq!(game.state().player2.pos.x, 775.0);

        // Exactly two paddle widths still fits
        assert!(game.on_resize(50.0, 600.0).is_ok());
        assert_eq!(game.state().player1.pos.x, 0.0);
        assert_eq!(game.state().player2.pos.x, 25.0);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let zero_width = Settings {
            width: 0.0,
            ..Settings::default()
        };
        assert!(matches!(
            Game::with_angles(&zero_width, FixedAngle(0.0)),
            Err(SimError::InvalidDimension { .. })
        ));
        assert!(Game::from_settings(&zero_width).is_err());
    }

    #[test]
    fn test_pointer_thirds() {
        let mut game = game();
        assert_eq!(game.on_pointer_move(100.0, 450.0), Ok(Some(Side::Left)));
        assert_eq!(game.state().player1.center().y, 450.0);

        assert_eq!(game.on_pointer_move(700.0, -40.0), Ok(Some(Side::Right)));
        assert_eq!(game.state().player2.center().y, -40.0);

        assert_eq!(game.on_pointer_move(400.0, 10.0), Ok(None));
        assert_eq!(game.state().player1.center().y, 450.0);
        assert_eq!(game.state().player2.center().y, -40.0);
    }

    #[test]
    fn test_pointer_on_third_boundaries_moves_nothing() {
        let mut game = Game::with_angles(
            &Settings {
                width: 900.0,
                ..Settings::default()
            },
            FixedAngle(0.0),
        )
        .unwrap();
        assert_eq!(game.on_pointer_move(300.0, 50.0), Ok(None));
        assert_eq!(game.on_pointer_move(600.0, 50.0), Ok(None));
        assert_eq!(game.state().player1.center().y, 300.0);
        assert_eq!(game.state().player2.center().y, 300.0);
    }

    #[test]
    fn test_pointer_rejects_nan() {
        let mut game = game();
        assert!(game.on_pointer_move(f32::NAN, 10.0).is_err());
        assert!(game.on_pointer_move(10.0, f32::INFINITY).is_err());
        assert_eq!(game.state().player1.center().y, 300.0);
    }

    #[test]
    fn test_seeded_game_is_reproducible() {
        let settings = Settings {
            seed: Some(1234),
            ..Settings::default()
        };
        let a = Game::from_settings(&settings).unwrap();
        let b = Game::from_settings(&settings).unwrap();
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
