//! Freeway: guide a chicken across ten lanes of traffic before the game
//! clock runs out. Every crossing is worth exactly one point, which makes
//! this the shipped example of tight per-title reward bounds.

use freeplay_core::action::Action;
use freeplay_core::settings::{Reward, RomSettings};
use freeplay_core::state::{StateDeserializer, StateSerializer};
use freeplay_core::system::System;

use crate::registry::RomEntry;
use crate::score::bcd;

// ---------------------------------------------------------------------------
// Working-RAM layout (offsets into the 128-byte RIOT page)
// ---------------------------------------------------------------------------

/// Crossings completed, packed BCD, two digits.
const SCORE: usize = 103;

/// Seconds left on the game clock, packed BCD. Counts down from 0x99 wrapped
/// into 2:16 of play; zero once the match is over.
const GAME_CLOCK: usize = 22;

pub struct Freeway {
    reward: Reward,
    score: u32,
    started: bool,
    terminal: bool,
}

impl Freeway {
    pub fn new() -> Self {
        Self {
            reward: 0,
            score: 0,
            started: false,
            terminal: false,
        }
    }
}

impl Default for Freeway {
    fn default() -> Self {
        Self::new()
    }
}

impl RomSettings for Freeway {
    fn reset(&mut self) {
        *self = Self::new();
    }

    fn step(&mut self, system: &dyn System) {
        let score = bcd(system.ram(SCORE));
        // One crossing per frame at most; clamp shields the declared bounds
        // from the score counter being cleared mid-episode.
        self.reward = (score as Reward - self.score as Reward).clamp(0, 1);
        self.score = score;

        let clock = system.ram(GAME_CLOCK);
        if !self.started && clock != 0 {
            self.started = true;
        }
        self.terminal = self.started && clock == 0;
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn reward(&self) -> Reward {
        self.reward
    }

    fn rom(&self) -> &'static str {
        "freeway"
    }

    fn fresh(&self) -> Box<dyn RomSettings> {
        Box::new(Self::new())
    }

    fn is_minimal(&self, action: Action) -> bool {
        // The chicken only ever walks up or down.
        matches!(action, Action::Noop | Action::Up | Action::Down)
    }

    fn min_reward(&self) -> Reward {
        0
    }

    fn max_reward(&self) -> Reward {
        1
    }

    fn save_state(&self, out: &mut StateSerializer) {
        out.put("reward", &self.reward);
        out.put("score", &self.score);
        out.put("started", &self.started);
        out.put("terminal", &self.terminal);
    }

    fn load_state(&mut self, input: &mut StateDeserializer) {
        self.reward = input.take("reward");
        self.score = input.take("score");
        self.started = input.take("started");
        self.terminal = input.take("terminal");
    }
}

fn create() -> Box<dyn RomSettings> {
    Box::new(Freeway::new())
}

inventory::submit! {
    RomEntry::new("freeway", create)
}
