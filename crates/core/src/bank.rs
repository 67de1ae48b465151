use crate::{GemColor, Gems, MoveError};
use serde::{Deserialize, Serialize};

/// Shared supply of coloured gems and gold.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bank {
    pub gems: Gems,
    pub gold: u8,
}

impl Bank {
    pub fn new(per_color: u8, gold: u8) -> Self {
        Self {
            gems: Gems::splat(per_color),
            gold,
        }
    }

    pub fn stock(&self, color: GemColor) -> u8 {
        self.gems[color]
    }

    pub fn take(&mut self, color: GemColor, count: u8) -> Result<(), MoveError> {
        let available = self.gems[color];
        let remaining = available
            .checked_sub(count)
            .ok_or(MoveError::StockExceeded {
                color,
                requested: count,
                available,
            })?;
        self.gems[color] = remaining;
        Ok(())
    }

    pub fn give(&mut self, color: GemColor, count: u8) {
        self.gems[color] = self.gems[color].saturating_add(count);
    }

    pub fn take_gold(&mut self) -> Result<(), MoveError> {
        self.gold = self.gold.checked_sub(1).ok_or(MoveError::BankGoldEmpty)?;
        Ok(())
    }

    pub fn give_gold(&mut self, count: u8) {
        self.gold = self.gold.saturating_add(count);
    }

    /// First colour, in canonical order, that cannot cover `request`.
    pub fn check_supply(&self, request: &Gems) -> Result<(), MoveError> {
        for (color, requested) in request.iter() {
            let available = self.gems[color];
            if requested > available {
                return Err(MoveError::StockExceeded {
                    color,
                    requested,
                    available,
                });
            }
        }
        Ok(())
    }

    /// All-or-nothing withdrawal of a gem vector.
    pub fn withdraw(&mut self, request: &Gems) -> Result<(), MoveError> {
        self.check_supply(request)?;
        for (color, count) in request.iter() {
            self.take(color, count)?;
        }
        Ok(())
    }

    pub fn deposit(&mut self, gems: &Gems) {
        for (color, count) in gems.iter() {
            self.give(color, count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_refuses_to_go_negative() {
        let mut bank = Bank::new(2, 5);
        bank.take(GemColor::Blue, 2).expect("two available");
        let err = bank.take(GemColor::Blue, 1).expect_err("stack empty");
        assert_eq!(
            err,
            MoveError::StockExceeded {
                color: GemColor::Blue,
                requested: 1,
                available: 0,
            }
        );
        assert_eq!(bank.stock(GemColor::Blue), 0);
    }

    #[test]
    fn withdraw_is_all_or_nothing() {
        let mut bank = Bank::new(1, 5);
        bank.take(GemColor::Black, 1).expect("one available");
        let before = bank;
        let request = Gems::new([1, 1, 0, 0, 1]);
        assert!(matches!(
            bank.withdraw(&request),
            Err(MoveError::StockExceeded {
                color: GemColor::Black,
                ..
            })
        ));
        assert_eq!(bank, before);
    }

    #[test]
    fn gold_runs_out() {
        let mut bank = Bank::new(4, 1);
        bank.take_gold().expect("one gold");
        assert_eq!(bank.take_gold(), Err(MoveError::BankGoldEmpty));
        bank.give_gold(2);
        assert_eq!(bank.gold, 2);
    }
}
