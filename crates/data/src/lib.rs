//! Catalog and rule file loading for the gem market game.

pub mod load;

pub use load::*;
