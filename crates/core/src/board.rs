use crate::{Card, Deck, Tier};
use serde::{Deserialize, Serialize};

/// Face-up market, one row per tier, each backed by that tier's deck.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    decks: [Deck; 3],
    rows: [Vec<Card>; 3],
}

impl Board {
    pub fn deal(mut decks: [Deck; 3], width: usize) -> Self {
        let rows = [
            decks[0].draw_cards(width),
            decks[1].draw_cards(width),
            decks[2].draw_cards(width),
        ];
        Self { decks, rows }
    }

    pub fn row(&self, tier: Tier) -> &[Card] {
        &self.rows[tier.index()]
    }

    pub fn card(&self, tier: Tier, slot: usize) -> Option<&Card> {
        self.rows[tier.index()].get(slot)
    }

    pub fn deck_len(&self, tier: Tier) -> usize {
        self.decks[tier.index()].len()
    }

    pub fn draw(&mut self, tier: Tier) -> Option<Card> {
        self.decks[tier.index()].draw()
    }

    /// Removes a face-up card and refills its slot from the deck. With the
    /// deck exhausted the row shrinks by one instead.
    pub fn take(&mut self, tier: Tier, slot: usize) -> Option<Card> {
        if slot >= self.rows[tier.index()].len() {
            return None;
        }
        let taken = match self.draw(tier) {
            Some(next) => std::mem::replace(&mut self.rows[tier.index()][slot], next),
            None => self.rows[tier.index()].remove(slot),
        };
        Some(taken)
    }

    pub fn cards(&self) -> impl Iterator<Item = (Tier, usize, &Card)> + '_ {
        Tier::ALL.into_iter().flat_map(move |tier| {
            self.row(tier)
                .iter()
                .enumerate()
                .map(move |(slot, card)| (tier, slot, card))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GemColor, Gems};

    fn tier_cards(tier: Tier, count: u8) -> Vec<Card> {
        (0..count)
            .map(|points| Card::new(tier, Gems::splat(1), GemColor::White, points))
            .collect()
    }

    fn board(counts: [u8; 3]) -> Board {
        Board::deal(
            [
                Deck::new(tier_cards(Tier::One, counts[0])),
                Deck::new(tier_cards(Tier::Two, counts[1])),
                Deck::new(tier_cards(Tier::Three, counts[2])),
            ],
            4,
        )
    }

    #[test]
    fn deal_fills_rows_up_to_width() {
        let board = board([6, 4, 2]);
        assert_eq!(board.row(Tier::One).len(), 4);
        assert_eq!(board.deck_len(Tier::One), 2);
        assert_eq!(board.row(Tier::Two).len(), 4);
        assert_eq!(board.row(Tier::Three).len(), 2);
        assert_eq!(board.cards().count(), 10);
    }

    #[test]
    fn take_refills_the_same_slot() {
        let mut board = board([5, 4, 4]);
        let taken = board.take(Tier::One, 1).expect("slot 1 exists");
        assert_eq!(taken.points, 1);
        let points: Vec<u8> = board.row(Tier::One).iter().map(|c| c.points).collect();
        assert_eq!(points, vec![0, 4, 2, 3]);
        assert_eq!(board.deck_len(Tier::One), 0);
    }

    #[test]
    fn take_shrinks_row_when_deck_is_empty() {
        let mut board = board([4, 4, 4]);
        board.take(Tier::Two, 0).expect("slot 0 exists");
        let points: Vec<u8> = board.row(Tier::Two).iter().map(|c| c.points).collect();
        assert_eq!(points, vec![1, 2, 3]);
        assert_eq!(board.take(Tier::Two, 3), None);
    }
}
