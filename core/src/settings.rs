use crate::action::{Action, ActionVec};
use crate::state::{StateDeserializer, StateSerializer};
use crate::system::System;

/// Instantaneous reward attributed to one emulated frame.
pub type Reward = i32;

/// Default lower reward bound. Wide enough that no known title clips.
pub const DEFAULT_MIN_REWARD: Reward = -65536;

/// Default upper reward bound.
pub const DEFAULT_MAX_REWARD: Reward = 65536;

/// Default hard episode cap: eight hours of play at 60 frames per second.
/// A safety bound for runaway episodes, not a gameplay rule.
pub const DEFAULT_MAX_FRAMES: u32 = 8 * 60 * 60 * 60;

/// Identifies which player's signals a query refers to.
///
/// Every title has a first player. Titles wired for a second, independently
/// scored player override the `_b` hook family of [`RomSettings`]; the
/// defaults keep player two reward-neutral and minimal-empty, so
/// single-player adapters never mention it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players in fixed order, for exhaustive sweeps.
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    pub(crate) fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// Per-title adaptation contract between the emulator and a learning agent.
///
/// Each supported title implements this trait to translate raw machine state
/// into the signals an agent consumes: instantaneous reward, terminal-state
/// detection, action-set restriction, lives, and checkpoint save/restore.
/// The driver owns one instance per running title and calls [`step`] once
/// per emulated frame, before any query for that frame is trusted.
///
/// Nine operations are required. Everything else defaults to the documented
/// neutral behavior, so a single-player title with a plain scalar score
/// implements only what it must. There is no error channel anywhere in the
/// contract: a query made before the first `step`, or a reward outside the
/// declared bounds, is a bug in the adapter or driver, not a reportable
/// condition.
///
/// [`step`]: RomSettings::step
pub trait RomSettings {
    // --- required ---

    /// Reinitialize all adapter-private bookkeeping to the state of a
    /// freshly started episode. Idempotent: resetting an already-reset
    /// instance changes nothing.
    fn reset(&mut self);

    /// Re-derive cached reward/terminal/lives state from this frame's
    /// machine state. Called exactly once per emulated frame; the accessor
    /// must not be retained beyond the call.
    fn step(&mut self, system: &dyn System);

    /// True iff the current episode must end. A pure read of state already
    /// derived by `step`/`reset`.
    fn is_terminal(&self) -> bool;

    /// Reward attributable to the most recently stepped frame — a delta,
    /// not a running total. Always within `[min_reward(), max_reward()]`.
    fn reward(&self) -> Reward;

    /// Canonical title identifier, constant for the adapter's lifetime.
    /// The registry looks adapters up by this name.
    fn rom(&self) -> &'static str;

    /// A fresh, independently mutable instance of the same title in its
    /// pre-reset default state.
    fn fresh(&self) -> Box<dyn RomSettings>;

    /// Is `action` part of the restricted set with a distinct, meaningful
    /// effect in this title?
    fn is_minimal(&self, action: Action) -> bool;

    /// Write every piece of adapter-private state needed to resume stepping
    /// from this exact point, in one fixed tag order.
    fn save_state(&self, out: &mut StateSerializer);

    /// Exact inverse of [`save_state`]: read the same tags in the same
    /// order.
    ///
    /// [`save_state`]: RomSettings::save_state
    fn load_state(&mut self, input: &mut StateDeserializer);

    // --- optional: legality and episode shape ---

    /// Is `action` accepted at all? Default: every action, always. Legality
    /// does not depend on game state and never changes over the instance's
    /// lifetime.
    fn is_legal(&self, _action: Action) -> bool {
        true
    }

    /// Minimum possible instantaneous reward.
    fn min_reward(&self) -> Reward {
        DEFAULT_MIN_REWARD
    }

    /// Maximum possible instantaneous reward.
    fn max_reward(&self) -> Reward {
        DEFAULT_MAX_REWARD
    }

    /// Remaining lives. The default is a single-life approximation for
    /// titles without a life counter: 0 once terminal, otherwise 1.
    fn lives(&self) -> u32 {
        if self.is_terminal() { 0 } else { 1 }
    }

    /// Actions the driver must inject before the episode becomes
    /// controllable (variant selection, a serve button). Default: none.
    fn starting_actions(&self) -> ActionVec {
        ActionVec::new()
    }

    /// Whether controller ports 1/2 are wired swapped for this title.
    fn swap_ports(&self) -> bool {
        false
    }

    /// Hard episode-length cap in frames. The driver, not the adapter,
    /// enforces it.
    fn max_frames(&self) -> u32 {
        DEFAULT_MAX_FRAMES
    }

    // --- optional: structured feedback (paddle and sports titles) ---

    /// Where on the paddle the last contact landed, normalized to
    /// `[-1, 1]`. 0.0 for titles without paddle feedback.
    fn side_bouncing(&self) -> f64 {
        0.0
    }

    /// Did the ball bounce off a rail this frame?
    fn wall_bouncing(&self) -> bool {
        false
    }

    /// Did a rally end in a miss this frame?
    fn crash(&self) -> bool {
        false
    }

    /// Is a serve currently in progress?
    fn serving(&self) -> bool {
        false
    }

    /// Points played so far, for titles that count rallies.
    fn points(&self) -> i32 {
        0
    }

    // --- optional: player-two hooks ---

    /// Player two's instantaneous reward. Neutral unless overridden.
    fn reward_b(&self) -> Reward {
        0
    }

    /// Player two's minimal-set membership. Empty unless overridden.
    fn is_minimal_b(&self, _action: Action) -> bool {
        false
    }

    /// Player two's legality; inherits player one's unless overridden.
    fn is_legal_b(&self, action: Action) -> bool {
        self.is_legal(action)
    }

    /// Player two's remaining lives; the same single-life default as
    /// [`lives`].
    ///
    /// [`lives`]: RomSettings::lives
    fn lives_b(&self) -> u32 {
        if self.is_terminal() { 0 } else { 1 }
    }
}
