use crate::{Card, Shuffler};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A tier's face-down draw pile. Cards leave from the front.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deck {
    draw: VecDeque<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { draw: cards.into() }
    }

    pub fn shuffled(mut cards: Vec<Card>, shuffler: &mut dyn Shuffler) -> Self {
        shuffler.shuffle(&mut cards);
        Self::new(cards)
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.draw.pop_front()
    }

    pub fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some(card) = self.draw() {
                cards.push(card);
            } else {
                break;
            }
        }
        cards
    }

    pub fn len(&self) -> usize {
        self.draw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GemColor, Gems, Tier};

    fn card(points: u8) -> Card {
        Card::new(Tier::One, Gems::splat(1), GemColor::Red, points)
    }

    #[test]
    fn draws_in_fifo_order_until_empty() {
        let mut deck = Deck::new(vec![card(0), card(1), card(2)]);
        assert_eq!(deck.draw().map(|c| c.points), Some(0));
        let rest = deck.draw_cards(5);
        assert_eq!(rest.iter().map(|c| c.points).collect::<Vec<_>>(), vec![1, 2]);
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
    }
}
