//! Rules engine for the gem market game. Keep this crate free of IO and
//! platform concerns.

pub mod bank;
pub mod board;
pub mod cards;
pub mod config;
pub mod deck;
pub mod events;
pub mod game;
pub mod gems;
pub mod moves;
pub mod payment;
pub mod player;
pub mod rng;
pub mod state;
pub mod table;

pub use bank::*;
pub use board::*;
pub use cards::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use game::*;
pub use gems::*;
pub use moves::*;
pub use payment::*;
pub use player::*;
pub use rng::*;
pub use state::*;
pub use table::*;
