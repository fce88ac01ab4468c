//! Breakout: single-player brick-breaking. One paddle, five balls, score
//! capped at 896 across two screens.

use freeplay_core::action::Action;
use freeplay_core::settings::{Reward, RomSettings};
use freeplay_core::state::{StateDeserializer, StateSerializer};
use freeplay_core::system::System;

use crate::registry::RomEntry;
use crate::score::bcd;

// ---------------------------------------------------------------------------
// Working-RAM layout (offsets into the 128-byte RIOT page)
// ---------------------------------------------------------------------------

/// Low nibble holds the hundreds digit of the score.
const SCORE_HUNDREDS: usize = 76;

/// Packed BCD: tens and units digits of the score.
const SCORE_TENS_UNITS: usize = 77;

/// Balls remaining. Reads 5 once the first serve is armed, 0 at game over;
/// before the attract screen hands over it holds whatever boot left there.
const BALL_COUNT: usize = 57;

const STARTING_BALLS: u32 = 5;

pub struct Breakout {
    reward: Reward,
    score: u32,
    lives: u32,
    started: bool,
    terminal: bool,
}

impl Breakout {
    pub fn new() -> Self {
        Self {
            reward: 0,
            score: 0,
            lives: STARTING_BALLS,
            started: false,
            terminal: false,
        }
    }

    fn read_score(system: &dyn System) -> u32 {
        u32::from(system.ram(SCORE_HUNDREDS) & 0x0F) * 100 + bcd(system.ram(SCORE_TENS_UNITS))
    }
}

impl Default for Breakout {
    fn default() -> Self {
        Self::new()
    }
}

impl RomSettings for Breakout {
    fn reset(&mut self) {
        *self = Self::new();
    }

    fn step(&mut self, system: &dyn System) {
        let score = Self::read_score(system);
        self.reward = score as Reward - self.score as Reward;
        self.score = score;

        let balls = u32::from(system.ram(BALL_COUNT));
        if !self.started && balls == STARTING_BALLS {
            self.started = true;
        }
        self.terminal = self.started && balls == 0;
        self.lives = balls;
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn reward(&self) -> Reward {
        self.reward
    }

    fn rom(&self) -> &'static str {
        "breakout"
    }

    fn fresh(&self) -> Box<dyn RomSettings> {
        Box::new(Self::new())
    }

    fn is_minimal(&self, action: Action) -> bool {
        matches!(
            action,
            Action::Noop | Action::Fire | Action::Right | Action::Left
        )
    }

    fn lives(&self) -> u32 {
        self.lives
    }

    fn save_state(&self, out: &mut StateSerializer) {
        out.put("reward", &self.reward);
        out.put("score", &self.score);
        out.put("lives", &self.lives);
        out.put("started", &self.started);
        out.put("terminal", &self.terminal);
    }

    fn load_state(&mut self, input: &mut StateDeserializer) {
        self.reward = input.take("reward");
        self.score = input.take("score");
        self.lives = input.take("lives");
        self.started = input.take("started");
        self.terminal = input.take("terminal");
    }
}

fn create() -> Box<dyn RomSettings> {
    Box::new(Breakout::new())
}

inventory::submit! {
    RomEntry::new("breakout", create)
}
