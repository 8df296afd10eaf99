// Library exports for testing
pub use entities::{DisplayState, Enemy, Item, ItemKind, Player};
pub use geometry::{BoundingBox, Vec2};
pub use input::{Command, InputAction};
pub use world::World;

pub mod app;
pub mod board;
pub mod entities;
pub mod geometry;
pub mod input;
pub mod renderer;
pub mod world;
