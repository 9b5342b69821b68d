pub mod world;

pub use world::{Building, Position, Workers};
