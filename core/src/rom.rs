//! Driver-facing pairing of one title adapter with its action-set cache.

use crate::action::{Action, ActionVec};
use crate::settings::{Player, Reward, RomSettings};
use crate::state::{StateDeserializer, StateSerializer};
use crate::system::System;

/// Memoized per-player action subsets.
///
/// Minimality and legality are fixed for an adapter's lifetime (they do not
/// depend on game state), so each subset is computed on first request by
/// filtering the canonical vocabulary through the adapter's predicate, then
/// returned unchanged for every later frame. There is no invalidation path.
#[derive(Debug, Default)]
pub struct ActionCache {
    minimal: [Option<ActionVec>; 2],
    legal: [Option<ActionVec>; 2],
}

impl ActionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The minimal action set for `player`, computed on first call.
    pub fn minimal(&mut self, player: Player, settings: &dyn RomSettings) -> &[Action] {
        self.minimal[player.index()]
            .get_or_insert_with(|| {
                Action::ALL
                    .into_iter()
                    .filter(|&a| match player {
                        Player::One => settings.is_minimal(a),
                        Player::Two => settings.is_minimal_b(a),
                    })
                    .collect()
            })
            .as_slice()
    }

    /// The full legal action set for `player`, computed on first call.
    pub fn legal(&mut self, player: Player, settings: &dyn RomSettings) -> &[Action] {
        self.legal[player.index()]
            .get_or_insert_with(|| {
                Action::ALL
                    .into_iter()
                    .filter(|&a| match player {
                        Player::One => settings.is_legal(a),
                        Player::Two => settings.is_legal_b(a),
                    })
                    .collect()
            })
            .as_slice()
    }
}

/// One running title: a boxed adapter plus its memoized action sets.
///
/// This is what the registry hands to the driver. Queries that exist per
/// player dispatch on [`Player`] instead of duplicating the surface.
pub struct Rom {
    settings: Box<dyn RomSettings>,
    actions: ActionCache,
}

impl Rom {
    /// Wrap a freshly constructed adapter.
    pub fn new(settings: Box<dyn RomSettings>) -> Self {
        Self {
            settings,
            actions: ActionCache::new(),
        }
    }

    /// Canonical title identifier.
    pub fn name(&self) -> &'static str {
        self.settings.rom()
    }

    /// Direct read access to the underlying adapter.
    pub fn settings(&self) -> &dyn RomSettings {
        self.settings.as_ref()
    }

    /// A blank instance of the same title, with its own empty cache.
    pub fn fresh(&self) -> Rom {
        Rom::new(self.settings.fresh())
    }

    // --- lifecycle ---

    pub fn reset(&mut self) {
        self.settings.reset();
    }

    pub fn step(&mut self, system: &dyn System) {
        self.settings.step(system);
    }

    // --- per-frame queries ---

    pub fn is_terminal(&self) -> bool {
        self.settings.is_terminal()
    }

    /// Instantaneous reward for `player`.
    pub fn reward(&self, player: Player) -> Reward {
        let reward = match player {
            Player::One => self.settings.reward(),
            Player::Two => self.settings.reward_b(),
        };
        debug_assert!(
            (self.settings.min_reward()..=self.settings.max_reward()).contains(&reward),
            "{}: reward {reward} outside [{}, {}]",
            self.name(),
            self.settings.min_reward(),
            self.settings.max_reward(),
        );
        reward
    }

    pub fn lives(&self, player: Player) -> u32 {
        match player {
            Player::One => self.settings.lives(),
            Player::Two => self.settings.lives_b(),
        }
    }

    pub fn is_minimal(&self, player: Player, action: Action) -> bool {
        match player {
            Player::One => self.settings.is_minimal(action),
            Player::Two => self.settings.is_minimal_b(action),
        }
    }

    pub fn is_legal(&self, player: Player, action: Action) -> bool {
        match player {
            Player::One => self.settings.is_legal(action),
            Player::Two => self.settings.is_legal_b(action),
        }
    }

    // --- memoized action sets ---

    /// The restricted action set for `player`, in canonical order.
    pub fn minimal_actions(&mut self, player: Player) -> &[Action] {
        self.actions.minimal(player, self.settings.as_ref())
    }

    /// The full legal action set for `player`, in canonical order.
    pub fn legal_actions(&mut self, player: Player) -> &[Action] {
        self.actions.legal(player, self.settings.as_ref())
    }

    // --- episode shape ---

    pub fn min_reward(&self) -> Reward {
        self.settings.min_reward()
    }

    pub fn max_reward(&self) -> Reward {
        self.settings.max_reward()
    }

    pub fn starting_actions(&self) -> ActionVec {
        self.settings.starting_actions()
    }

    pub fn swap_ports(&self) -> bool {
        self.settings.swap_ports()
    }

    pub fn max_frames(&self) -> u32 {
        self.settings.max_frames()
    }

    // --- structured feedback ---

    pub fn side_bouncing(&self) -> f64 {
        self.settings.side_bouncing()
    }

    pub fn wall_bouncing(&self) -> bool {
        self.settings.wall_bouncing()
    }

    pub fn crash(&self) -> bool {
        self.settings.crash()
    }

    pub fn serving(&self) -> bool {
        self.settings.serving()
    }

    pub fn points(&self) -> i32 {
        self.settings.points()
    }

    // --- checkpointing ---

    /// Write the adapter's private state into `out`.
    pub fn save_state(&self, out: &mut StateSerializer) {
        self.settings.save_state(out);
    }

    /// Restore the adapter's private state from `input`.
    ///
    /// The cached action sets survive a restore untouched: legality never
    /// changes over an instance's lifetime, so a checkpoint carries none.
    pub fn load_state(&mut self, input: &mut StateDeserializer) {
        self.settings.load_state(input);
        log::debug!("{}: checkpoint restored", self.name());
    }
}
