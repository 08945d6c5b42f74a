mod ai;
mod board;
mod bst;
mod catalog;
mod common;
mod config;
pub mod coord;
mod fleet;
mod game;
mod logging;
mod player;
mod sequence;
mod ship;
mod store;
pub mod ui;

pub use ai::*;
pub use board::*;
pub use bst::SearchTree;
pub use catalog::*;
pub use common::*;
pub use config::*;
pub use coord::{decode, encode, Coordinate};
pub use fleet::*;
pub use game::*;
pub use logging::init_logging;
pub use player::*;
pub use sequence::balanced_order;
pub use ship::*;
pub use store::SessionStore;
