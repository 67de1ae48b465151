use serde::{Deserialize, Serialize};

/// Table constants. Every field has a default so partial rule files load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RulesConfig {
    pub min_players: usize,
    pub max_players: usize,
    pub gems_two_players: u8,
    pub gems_three_players: u8,
    pub gems_default: u8,
    pub gold_supply: u8,
    pub board_width: usize,
    pub player_gem_cap: u32,
    pub double_take_min_stock: u8,
    pub reserve_limit: usize,
    pub win_points: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: 4,
            gems_two_players: 4,
            gems_three_players: 5,
            gems_default: 7,
            gold_supply: 5,
            board_width: 4,
            player_gem_cap: 10,
            double_take_min_stock: 4,
            reserve_limit: 3,
            win_points: 15,
        }
    }
}

impl RulesConfig {
    pub fn gems_per_color(&self, players: usize) -> u8 {
        match players {
            2 => self.gems_two_players,
            3 => self.gems_three_players,
            _ => self.gems_default,
        }
    }

    pub fn supports_players(&self, players: usize) -> bool {
        (self.min_players..=self.max_players).contains(&players)
    }
}
