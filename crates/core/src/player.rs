use crate::{Card, Gems, MoveError, Payment};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerLedger {
    pub gems: Gems,
    pub gold: u8,
    pub owned: Vec<Card>,
    pub reserved: Vec<Card>,
}

impl PlayerLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.owned.iter().map(|card| u32::from(card.points)).sum()
    }

    /// Permanent discount: owned cards counted per bonus colour.
    pub fn bonus(&self) -> Gems {
        let mut bonus = Gems::default();
        for card in &self.owned {
            bonus[card.bonus] = bonus[card.bonus].saturating_add(1);
        }
        bonus
    }

    /// Held gems plus card bonuses.
    pub fn total_gems(&self) -> Gems {
        self.gems.saturating_add(&self.bonus())
    }

    /// Held coloured gems; gold does not count towards the cap.
    pub fn held_total(&self) -> u32 {
        self.gems.total()
    }

    pub fn payment_for(&self, card: &Card) -> Result<Payment, MoveError> {
        Payment::plan(&card.cost, &self.bonus(), &self.gems, self.gold)
    }

    pub fn can_afford(&self, card: &Card) -> bool {
        self.payment_for(card).is_ok()
    }

    pub(crate) fn receive(&mut self, gems: &Gems) {
        self.gems = self.gems.saturating_add(gems);
    }

    pub(crate) fn pay(&mut self, payment: &Payment) {
        self.gems = self.gems.saturating_sub(&payment.gems);
        self.gold = self.gold.saturating_sub(payment.gold);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GemColor, Tier};

    fn owned(bonus: GemColor, points: u8) -> Card {
        Card::new(Tier::One, Gems::default(), bonus, points)
    }

    #[test]
    fn bonus_and_score_derive_from_owned_cards() {
        let ledger = PlayerLedger {
            gems: Gems::new([1, 0, 0, 2, 0]),
            gold: 0,
            owned: vec![
                owned(GemColor::White, 1),
                owned(GemColor::White, 0),
                owned(GemColor::Red, 3),
            ],
            reserved: Vec::new(),
        };
        assert_eq!(ledger.score(), 4);
        assert_eq!(ledger.bonus(), Gems::new([2, 0, 0, 1, 0]));
        assert_eq!(ledger.total_gems(), Gems::new([3, 0, 0, 3, 0]));
        assert_eq!(ledger.held_total(), 3);
    }

    #[test]
    fn affordability_counts_gold_as_wildcard() {
        let ledger = PlayerLedger {
            gems: Gems::new([0, 0, 0, 3, 0]),
            gold: 1,
            owned: vec![owned(GemColor::White, 0)],
            reserved: Vec::new(),
        };
        let cheap = Card::new(Tier::One, Gems::new([2, 0, 0, 2, 0]), GemColor::Red, 1);
        let dear = Card::new(Tier::One, Gems::new([3, 0, 0, 2, 0]), GemColor::Red, 1);
        assert!(ledger.can_afford(&cheap));
        assert!(!ledger.can_afford(&dear));
    }
}
