pub mod action;
pub mod rom;
pub mod settings;
pub mod state;
pub mod system;

pub mod prelude {
    pub use crate::action::{Action, ActionVec};
    pub use crate::rom::{ActionCache, Rom};
    pub use crate::settings::{
        DEFAULT_MAX_FRAMES, DEFAULT_MAX_REWARD, DEFAULT_MIN_REWARD, Player, Reward, RomSettings,
    };
    pub use crate::state::{StateDeserializer, StateSerializer};
    pub use crate::system::{RAM_SIZE, System};
}
