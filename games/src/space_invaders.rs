//! Space Invaders: one cannon, three ships, a descending fleet. The episode
//! ends when the last ship is lost or the fleet reaches the ground.

use freeplay_core::action::Action;
use freeplay_core::settings::{Reward, RomSettings};
use freeplay_core::state::{StateDeserializer, StateSerializer};
use freeplay_core::system::System;

use crate::registry::RomEntry;
use crate::score::decimal_score;

// ---------------------------------------------------------------------------
// Working-RAM layout (offsets into the 128-byte RIOT page)
// ---------------------------------------------------------------------------

/// Packed BCD: tens and units digits of the score.
const SCORE_LO: usize = 104;

/// Packed BCD: thousands and hundreds digits of the score.
const SCORE_HI: usize = 105;

/// Ships remaining, 3 at the start of a game.
const SHIPS: usize = 73;

/// Nonzero once the fleet has reached the ground.
const INVASION: usize = 77;

pub struct SpaceInvaders {
    reward: Reward,
    score: u32,
    lives: u32,
    terminal: bool,
}

impl SpaceInvaders {
    pub fn new() -> Self {
        Self {
            reward: 0,
            score: 0,
            lives: 3,
            terminal: false,
        }
    }
}

impl Default for SpaceInvaders {
    fn default() -> Self {
        Self::new()
    }
}

impl RomSettings for SpaceInvaders {
    fn reset(&mut self) {
        *self = Self::new();
    }

    fn step(&mut self, system: &dyn System) {
        let score = decimal_score(system, &[SCORE_HI, SCORE_LO]);
        self.reward = score as Reward - self.score as Reward;
        self.score = score;

        self.lives = u32::from(system.ram(SHIPS));
        self.terminal = self.lives == 0 || system.ram(INVASION) != 0;
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn reward(&self) -> Reward {
        self.reward
    }

    fn rom(&self) -> &'static str {
        "space_invaders"
    }

    fn fresh(&self) -> Box<dyn RomSettings> {
        Box::new(Self::new())
    }

    fn is_minimal(&self, action: Action) -> bool {
        matches!(
            action,
            Action::Noop
                | Action::Fire
                | Action::Right
                | Action::Left
                | Action::RightFire
                | Action::LeftFire
        )
    }

    fn lives(&self) -> u32 {
        self.lives
    }

    fn save_state(&self, out: &mut StateSerializer) {
        out.put("reward", &self.reward);
        out.put("score", &self.score);
        out.put("lives", &self.lives);
        out.put("terminal", &self.terminal);
    }

    fn load_state(&mut self, input: &mut StateDeserializer) {
        self.reward = input.take("reward");
        self.score = input.take("score");
        self.lives = input.take("lives");
        self.terminal = input.take("terminal");
    }
}

fn create() -> Box<dyn RomSettings> {
    Box::new(SpaceInvaders::new())
}

inventory::submit! {
    RomEntry::new("space_invaders", create)
}
