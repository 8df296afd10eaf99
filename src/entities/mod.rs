mod enemy;
mod item;
mod player;

// Re-export all public types
pub use enemy::Enemy;
pub use item::{Item, ItemKind};
pub use player::{DisplayState, Player};
