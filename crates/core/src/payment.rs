use crate::{GemColor, Gems, MoveError};
use serde::{Deserialize, Serialize};

/// How a purchase is settled: coloured gems handed back to the bank plus gold
/// covering whatever the held gems could not.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payment {
    pub gems: Gems,
    pub gold: u8,
}

impl Payment {
    /// Discounts `cost` by `bonus`, pays from `held` where possible and covers
    /// the rest with gold. Fails when the shortfall exceeds `gold`.
    pub fn plan(cost: &Gems, bonus: &Gems, held: &Gems, gold: u8) -> Result<Self, MoveError> {
        let mut gems = Gems::default();
        let mut shortfall = 0u32;
        for color in GemColor::ALL {
            let need = cost[color].saturating_sub(bonus[color]);
            let from_held = need.min(held[color]);
            gems[color] = from_held;
            shortfall += u32::from(need - from_held);
        }
        let gold_used = u8::try_from(shortfall)
            .ok()
            .filter(|used| *used <= gold)
            .ok_or(MoveError::InsufficientFunds { shortfall, gold })?;
        Ok(Self {
            gems,
            gold: gold_used,
        })
    }
}
