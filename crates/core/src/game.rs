use crate::{
    Catalog, GameMeta, Gems, MoveError, Phase, PossibleBuy, RulesConfig, Shuffler, Table,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

mod ranking;
mod turn;

pub use ranking::*;
pub use turn::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("unsupported player count {count}, expected {min} to {max}")]
    PlayerCount {
        count: usize,
        min: usize,
        max: usize,
    },
}

/// One table plus the turn controller driving it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    table: Table,
    meta: GameMeta,
}

impl Game {
    pub fn new(
        config: RulesConfig,
        players: usize,
        catalog: Catalog,
        shuffler: &mut dyn Shuffler,
    ) -> Result<Self, SetupError> {
        check_players(&config, players)?;
        info!(players, cards = catalog.len(), "starting game");
        Self::from_table(Table::new(config, players, catalog, shuffler))
    }

    /// Starts round 1 on an existing table, one seat per ledger.
    pub fn from_table(table: Table) -> Result<Self, SetupError> {
        check_players(table.config(), table.players().len())?;
        let meta = GameMeta::new(table.players().len());
        Ok(Self { table, meta })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn meta(&self) -> &GameMeta {
        &self.meta
    }

    pub fn phase(&self) -> Phase {
        self.meta.phase
    }

    pub fn round_number(&self) -> u32 {
        self.meta.round
    }

    pub fn current_player(&self) -> usize {
        self.meta.current
    }

    pub fn score(&self, player: usize) -> Result<u32, MoveError> {
        Ok(self.table.player(player)?.score())
    }

    pub fn held_gems(&self, player: usize) -> Result<Gems, MoveError> {
        Ok(self.table.player(player)?.gems)
    }

    pub fn bonus_vector(&self, player: usize) -> Result<Gems, MoveError> {
        Ok(self.table.player(player)?.bonus())
    }

    pub fn total_gems(&self, player: usize) -> Result<Gems, MoveError> {
        Ok(self.table.player(player)?.total_gems())
    }

    pub fn possible_buys(&self, player: usize) -> Result<Vec<PossibleBuy>, MoveError> {
        self.table.possible_buys(player)
    }

    /// Standings, best first. `None` until the game has ended.
    pub fn final_ranking(&self) -> Option<Vec<Standing>> {
        (self.meta.phase == Phase::Ended).then(|| rank_players(self.table.players()))
    }
}

fn check_players(config: &RulesConfig, players: usize) -> Result<(), SetupError> {
    if config.supports_players(players) {
        return Ok(());
    }
    Err(SetupError::PlayerCount {
        count: players,
        min: config.min_players,
        max: config.max_players,
    })
}
