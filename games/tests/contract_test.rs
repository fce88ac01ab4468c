//! Properties every shipped adapter must uphold, checked across the whole
//! registry rather than per title.

mod common;

use common::TestConsole;
use freeplay_core::action::Action;
use freeplay_core::rom::Rom;
use freeplay_core::settings::Player;
use freeplay_core::state::{StateDeserializer, StateSerializer};
use freeplay_games::registry;

fn every_rom() -> Vec<Rom> {
    registry::all()
        .into_iter()
        .map(|entry| registry::create(entry.name).expect("listed titles instantiate"))
        .collect()
}

#[test]
fn test_reward_stays_within_declared_bounds() {
    for mut rom in every_rom() {
        rom.reset();
        rom.step(&TestConsole::new());
        for player in Player::BOTH {
            let reward = rom.reward(player);
            assert!(
                reward >= rom.min_reward() && reward <= rom.max_reward(),
                "{}: reward {reward} escapes [{}, {}]",
                rom.name(),
                rom.min_reward(),
                rom.max_reward(),
            );
        }
    }
}

#[test]
fn test_minimal_is_a_subset_of_legal() {
    for mut rom in every_rom() {
        for player in Player::BOTH {
            let legal: Vec<Action> = rom.legal_actions(player).to_vec();
            for &action in rom.minimal_actions(player) {
                assert!(
                    legal.contains(&action),
                    "{}: minimal action {action:?} is not legal",
                    rom.name(),
                );
            }
        }
    }
}

#[test]
fn test_action_sets_preserve_canonical_order() {
    for mut rom in every_rom() {
        for player in Player::BOTH {
            for set in [rom.minimal_actions(player).to_vec(), rom.legal_actions(player).to_vec()] {
                for pair in set.windows(2) {
                    assert!(
                        pair[0] < pair[1],
                        "{}: action set reordered: {:?} before {:?}",
                        rom.name(),
                        pair[0],
                        pair[1],
                    );
                }
            }
        }
    }
}

#[test]
fn test_action_sets_are_memoized() {
    for mut rom in every_rom() {
        for player in Player::BOTH {
            let name = rom.name();
            let first = rom.minimal_actions(player).to_vec();
            assert_eq!(rom.minimal_actions(player), first, "{}", name);
            let first = rom.legal_actions(player).to_vec();
            assert_eq!(rom.legal_actions(player), first, "{}", name);
        }
    }
}

#[test]
fn test_set_membership_agrees_with_predicates() {
    for mut rom in every_rom() {
        for player in Player::BOTH {
            let minimal = rom.minimal_actions(player).to_vec();
            let legal = rom.legal_actions(player).to_vec();
            for action in Action::ALL {
                assert_eq!(
                    minimal.contains(&action),
                    rom.is_minimal(player, action),
                    "{}: minimal set and predicate disagree on {action:?}",
                    rom.name(),
                );
                assert_eq!(
                    legal.contains(&action),
                    rom.is_legal(player, action),
                    "{}: legal set and predicate disagree on {action:?}",
                    rom.name(),
                );
            }
        }
    }
}

#[test]
fn test_reset_is_idempotent() {
    for mut rom in every_rom() {
        rom.reset();
        let once = (
            rom.is_terminal(),
            rom.reward(Player::One),
            rom.lives(Player::One),
            rom.lives(Player::Two),
        );
        rom.reset();
        let twice = (
            rom.is_terminal(),
            rom.reward(Player::One),
            rom.lives(Player::One),
            rom.lives(Player::Two),
        );
        assert_eq!(once, twice, "{}: double reset diverged", rom.name());
    }
}

#[test]
fn test_checkpoint_round_trips_through_bytes() {
    for mut rom in every_rom() {
        rom.reset();
        rom.step(&TestConsole::new());

        let mut ser = StateSerializer::new();
        rom.save_state(&mut ser);
        let bytes = ser.into_bytes();

        let mut restored = rom.fresh();
        let mut de =
            StateDeserializer::from_bytes(&bytes).expect("checkpoint bytes parse");
        restored.load_state(&mut de);
        assert!(
            de.is_exhausted(),
            "{}: load_state left checkpoint entries unread",
            rom.name(),
        );

        rom.step(&TestConsole::new());
        restored.step(&TestConsole::new());
        assert_eq!(restored.is_terminal(), rom.is_terminal(), "{}", rom.name());
        for player in Player::BOTH {
            assert_eq!(restored.reward(player), rom.reward(player), "{}", rom.name());
            assert_eq!(restored.lives(player), rom.lives(player), "{}", rom.name());
        }
        assert_eq!(restored.points(), rom.points(), "{}", rom.name());
    }
}

#[test]
fn test_fresh_instances_are_independent() {
    for mut rom in every_rom() {
        rom.reset();
        let mut console = TestConsole::new();
        console.set(0, 1);
        rom.step(&console);

        let mut twin = rom.fresh();
        twin.reset();
        twin.step(&TestConsole::new());
        // Stepping the twin must not disturb the original's bookkeeping.
        rom.step(&console);
        assert_eq!(rom.name(), twin.name());
    }
}

#[test]
fn test_episode_caps_are_sane() {
    for rom in every_rom() {
        assert!(
            rom.max_frames() >= 60 * 60,
            "{}: episode cap shorter than a minute of play",
            rom.name(),
        );
    }
}
