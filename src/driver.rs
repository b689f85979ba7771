//! Frame driver
//!
//! Turns wall-clock frame times into fixed simulation ticks and forwards
//! host input to the game. Input is applied immediately, between ticks.

use crate::consts::{MAX_FRAME_TIME, MAX_SUBSTEPS};
use crate::sim::{AngleSource, Command, Game, GameEvent, Outcome};

/// Input delivered by the host between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Pointer/touch drag in playfield coordinates
    PointerMove { x: f32, y: f32 },
    /// Playfield resized
    Resize { width: f32, height: f32 },
    /// Button or key command
    Command(Command),
}

/// Fixed-rate tick scheduler
#[derive(Debug, Clone)]
pub struct FrameDriver {
    dt: f32,
    accumulator: f32,
    ticks: u64,
}

impl FrameDriver {
    /// Driver ticking `tick_rate` times per second
    pub fn new(tick_rate: f32) -> Self {
        Self {
            dt: 1.0 / tick_rate,
            accumulator: 0.0,
            ticks: 0,
        }
    }

    /// Total ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Account for `elapsed` seconds of wall time and run the ticks due
    ///
    /// Returns the events produced by every tick run this frame.
    pub fn advance<A: AngleSource>(&mut self, game: &mut Game<A>, elapsed: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if !elapsed.is_finite() || elapsed < 0.0 {
            log::warn!("Ignoring frame with elapsed time {}", elapsed);
            return events;
        }

        self.accumulator += elapsed.min(MAX_FRAME_TIME);

        let mut substeps = 0;
        while self.accumulator >= self.dt && substeps < MAX_SUBSTEPS {
            match game.update(self.dt) {
                Ok(tick_events) => events.extend(tick_events),
                Err(e) => log::warn!("Tick rejected: {}", e),
            }
            self.accumulator -= self.dt;
            self.ticks += 1;
            substeps += 1;
        }

        // Drop backlog the substep cap could not work off
        if self.accumulator >= self.dt {
            self.accumulator = 0.0;
        }

        events
    }

    /// Forward a host event to the game
    pub fn dispatch<A: AngleSource>(&mut self, game: &mut Game<A>, event: HostEvent) -> Outcome {
        match event {
            HostEvent::PointerMove { x, y } => {
                if let Err(e) = game.on_pointer_move(x, y) {
                    log::warn!("Pointer ignored: {}", e);
                }
            }
            HostEvent::Resize { width, height } => match game.on_resize(width, height) {
                Ok(()) => {
                    let [left, right] = game.snapshot().score_labels();
                    log::debug!("Score labels refreshed: {} - {}", left, right);
                }
                Err(e) => log::warn!("Resize ignored: {}", e),
            },
            HostEvent::Command(command) => {
                if command == Command::Restart || command == Command::Start {
                    self.accumulator = 0.0;
                }
                return game.handle(command);
            }
        }
        Outcome::Continue
    }
}
