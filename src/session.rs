//! Round lifecycle: play until someone wins, show the end menu, then either
//! restart the level or stop.

use rand::Rng;
use tracing::info;

use crate::compute::{apply_intent, check_game_over, tick, Intent, Outcome};
use crate::entities::World;
use crate::level::init_world;
use crate::render::Audio;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// The round just ended; the end menu is drawn on the next update.
    ShowEndMenu(Outcome),
    /// Waiting for restart or quit.  Nothing else advances.
    AwaitMenuChoice(Outcome),
    Terminated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Restart,
    Quit,
}

pub struct Session {
    pub world: World,
    pub phase: Phase,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            world: init_world(),
            phase: Phase::Playing,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase != Phase::Terminated
    }

    /// Apply a player intent.  Ignored outside of play.
    pub fn handle_intent(&mut self, intent: Intent) {
        if self.phase == Phase::Playing {
            self.world = apply_intent(&self.world, intent);
        }
    }

    /// The top-level quit signal; honoured in every phase.
    pub fn quit(&mut self) {
        info!("quit requested");
        self.phase = Phase::Terminated;
    }

    /// Run one frame of the state machine and report the resulting phase.
    pub fn update(&mut self, rng: &mut impl Rng, audio: &mut impl Audio) -> Phase {
        match self.phase {
            Phase::Playing => {
                self.world = tick(&self.world, rng, audio);
                let outcome = check_game_over(&self.world);
                if outcome.is_over() {
                    info!(?outcome, score = self.world.score, frame = self.world.frame, "round over");
                    self.phase = Phase::ShowEndMenu(outcome);
                }
            }
            Phase::ShowEndMenu(outcome) => self.phase = Phase::AwaitMenuChoice(outcome),
            Phase::AwaitMenuChoice(_) | Phase::Terminated => {}
        }
        self.phase
    }

    /// Answer the end menu.  Has no effect unless the menu is waiting.
    pub fn choose(&mut self, choice: MenuChoice) {
        if !matches!(self.phase, Phase::AwaitMenuChoice(_)) {
            return;
        }
        match choice {
            MenuChoice::Restart => {
                info!("restarting level");
                self.world = init_world();
                self.phase = Phase::Playing;
            }
            MenuChoice::Quit => self.phase = Phase::Terminated,
        }
    }

    /// Lines of the end-of-round message box, if one is showing.
    pub fn end_message(&self) -> Option<Vec<String>> {
        let outcome = match self.phase {
            Phase::ShowEndMenu(o) | Phase::AwaitMenuChoice(o) => o,
            _ => return None,
        };
        let mut lines = match outcome {
            Outcome::PlayerWins => vec![
                "You have defeated the invaders!".to_string(),
                String::new(),
                format!("Your score: {:4.1}", self.world.score),
            ],
            _ => vec!["Your tank has been destroyed.".to_string(), String::new()],
        };
        lines.push("Play again? (Y/N)".to_string());
        Some(lines)
    }
}
