//! Pong: two paddles, first side to 21 points wins. The one shipped title
//! that exercises the whole second-player channel, plus the structured
//! paddle feedback (serves, rail bounces, blade contact, misses).

use freeplay_core::action::{Action, ActionVec};
use freeplay_core::settings::{Reward, RomSettings};
use freeplay_core::state::{StateDeserializer, StateSerializer};
use freeplay_core::system::System;

use crate::registry::RomEntry;

// ---------------------------------------------------------------------------
// Working-RAM layout (offsets into the 128-byte RIOT page)
// ---------------------------------------------------------------------------

/// Left paddle's score (player two), plain binary 0..=21.
const SCORE_B: usize = 13;

/// Right paddle's score (player one), plain binary 0..=21.
const SCORE_A: usize = 14;

/// Ball column, increasing rightward.
const BALL_X: usize = 49;

/// Ball scanline, increasing downward.
const BALL_Y: usize = 54;

/// Right paddle's top scanline.
const PADDLE_A_Y: usize = 60;

/// Left paddle's top scanline.
const PADDLE_B_Y: usize = 61;

/// Nonzero while the serve timer runs and the ball is out of play.
const SERVE_DELAY: usize = 58;

/// Playfield rails; the ball reflects off these scanlines.
const TOP_RAIL: u8 = 38;
const BOTTOM_RAIL: u8 = 202;

/// Half the paddle blade, in scanlines; normalizes contact offsets.
const PADDLE_HALF_SPAN: i16 = 8;

const POINTS_TO_WIN: u32 = 21;

pub struct Pong {
    reward: Reward,
    reward_b: Reward,
    score_a: u32,
    score_b: u32,
    terminal: bool,
    serving: bool,
    wall_bounce: bool,
    side_bounce: f64,
    crash: bool,
    ball_x: u8,
    ball_dx: i8,
}

impl Pong {
    pub fn new() -> Self {
        Self {
            reward: 0,
            reward_b: 0,
            score_a: 0,
            score_b: 0,
            terminal: false,
            serving: false,
            wall_bounce: false,
            side_bounce: 0.0,
            crash: false,
            ball_x: 0,
            ball_dx: 0,
        }
    }
}

impl Default for Pong {
    fn default() -> Self {
        Self::new()
    }
}

impl RomSettings for Pong {
    fn reset(&mut self) {
        *self = Self::new();
    }

    fn step(&mut self, system: &dyn System) {
        let a = u32::from(system.ram(SCORE_A));
        let b = u32::from(system.ram(SCORE_B));
        let gained_a = a.saturating_sub(self.score_a) as Reward;
        let gained_b = b.saturating_sub(self.score_b) as Reward;
        self.reward = gained_a - gained_b;
        self.reward_b = gained_b - gained_a;
        self.score_a = a;
        self.score_b = b;
        self.terminal = a >= POINTS_TO_WIN || b >= POINTS_TO_WIN;

        // A point only lands when the ball escapes past a blade.
        self.crash = gained_a + gained_b > 0;
        self.serving = system.ram(SERVE_DELAY) != 0;

        let x = system.ram(BALL_X);
        let y = system.ram(BALL_Y);
        self.wall_bounce = !self.serving && (y <= TOP_RAIL || y >= BOTTOM_RAIL);

        // A horizontal reversal away from the rails is a blade contact;
        // report where on the blade the ball struck, normalized to [-1, 1].
        let dx = (i16::from(x) - i16::from(self.ball_x)).signum() as i8;
        if dx != 0 && self.ball_dx != 0 && dx != self.ball_dx && !self.serving {
            let paddle = if dx < 0 { PADDLE_A_Y } else { PADDLE_B_Y };
            let offset = i16::from(y) - i16::from(system.ram(paddle)) - PADDLE_HALF_SPAN;
            self.side_bounce =
                (f64::from(offset) / f64::from(PADDLE_HALF_SPAN)).clamp(-1.0, 1.0);
        }
        if dx != 0 {
            self.ball_dx = dx;
        }
        self.ball_x = x;
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn reward(&self) -> Reward {
        self.reward
    }

    fn rom(&self) -> &'static str {
        "pong"
    }

    fn fresh(&self) -> Box<dyn RomSettings> {
        Box::new(Self::new())
    }

    fn is_minimal(&self, action: Action) -> bool {
        // The paddle knob maps onto left/right of the vocabulary.
        matches!(action, Action::Noop | Action::Right | Action::Left)
    }

    fn min_reward(&self) -> Reward {
        -1
    }

    fn max_reward(&self) -> Reward {
        1
    }

    fn starting_actions(&self) -> ActionVec {
        // Select the two-player variant on the console switches, then start.
        vec![Action::Select, Action::Select, Action::Reset]
    }

    fn side_bouncing(&self) -> f64 {
        self.side_bounce
    }

    fn wall_bouncing(&self) -> bool {
        self.wall_bounce
    }

    fn crash(&self) -> bool {
        self.crash
    }

    fn serving(&self) -> bool {
        self.serving
    }

    fn points(&self) -> i32 {
        (self.score_a + self.score_b) as i32
    }

    fn reward_b(&self) -> Reward {
        self.reward_b
    }

    fn is_minimal_b(&self, action: Action) -> bool {
        self.is_minimal(action)
    }

    fn save_state(&self, out: &mut StateSerializer) {
        out.put("reward", &self.reward);
        out.put("reward_b", &self.reward_b);
        out.put("score_a", &self.score_a);
        out.put("score_b", &self.score_b);
        out.put("terminal", &self.terminal);
        out.put("serving", &self.serving);
        out.put("wall_bounce", &self.wall_bounce);
        out.put("side_bounce", &self.side_bounce);
        out.put("crash", &self.crash);
        out.put("ball_x", &self.ball_x);
        out.put("ball_dx", &self.ball_dx);
    }

    fn load_state(&mut self, input: &mut StateDeserializer) {
        self.reward = input.take("reward");
        self.reward_b = input.take("reward_b");
        self.score_a = input.take("score_a");
        self.score_b = input.take("score_b");
        self.terminal = input.take("terminal");
        self.serving = input.take("serving");
        self.wall_bounce = input.take("wall_bounce");
        self.side_bounce = input.take("side_bounce");
        self.crash = input.take("crash");
        self.ball_x = input.take("ball_x");
        self.ball_dx = input.take("ball_dx");
    }
}

fn create() -> Box<dyn RomSettings> {
    Box::new(Pong::new())
}

inventory::submit! {
    RomEntry::new("pong", create)
}
