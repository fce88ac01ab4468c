use serde::{Deserialize, Serialize};

/// A single discrete controller action.
///
/// The console exposes one digital joystick with a fire button per player,
/// plus the Select/Reset console switches. Discriminants fix the canonical
/// order that every action-set computation preserves: subsets are filtered
/// out of [`Action::ALL`], never reordered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Action {
    Noop = 0,
    Fire = 1,
    Up = 2,
    Right = 3,
    Left = 4,
    Down = 5,
    UpRight = 6,
    UpLeft = 7,
    DownRight = 8,
    DownLeft = 9,
    UpFire = 10,
    RightFire = 11,
    LeftFire = 12,
    DownFire = 13,
    UpRightFire = 14,
    UpLeftFire = 15,
    DownRightFire = 16,
    DownLeftFire = 17,
    /// Console switch: cycle the selected game variant.
    Select = 18,
    /// Console switch: start (or restart) the selected game.
    Reset = 19,
}

impl Action {
    /// The full vocabulary in canonical order.
    pub const ALL: [Action; 20] = [
        Action::Noop,
        Action::Fire,
        Action::Up,
        Action::Right,
        Action::Left,
        Action::Down,
        Action::UpRight,
        Action::UpLeft,
        Action::DownRight,
        Action::DownLeft,
        Action::UpFire,
        Action::RightFire,
        Action::LeftFire,
        Action::DownFire,
        Action::UpRightFire,
        Action::UpLeftFire,
        Action::DownRightFire,
        Action::DownLeftFire,
        Action::Select,
        Action::Reset,
    ];
}

/// An ordered sequence of actions (action sets, starting sequences).
pub type ActionVec = Vec<Action>;
