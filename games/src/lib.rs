pub mod breakout;
pub mod freeway;
pub mod pong;
pub mod registry;
pub mod score;
pub mod space_invaders;

pub use breakout::Breakout;
pub use freeway::Freeway;
pub use pong::Pong;
pub use space_invaders::SpaceInvaders;
