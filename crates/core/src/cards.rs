use crate::{GemColor, Gems};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    One,
    Two,
    Three,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::One, Tier::Two, Tier::Three];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            _ => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub tier: Tier,
    pub cost: Gems,
    pub bonus: GemColor,
    pub points: u8,
}

impl Card {
    pub fn new(tier: Tier, cost: Gems, bonus: GemColor, points: u8) -> Self {
        Self {
            tier,
            cost,
            bonus,
            points,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] +{} {}pt",
            self.cost,
            self.bonus.code(),
            self.points
        )
    }
}

/// Where a purchasable card currently sits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardRef {
    Board { tier: Tier, slot: usize },
    Reserved { slot: usize },
}

/// Every card of the game, grouped by tier in draw order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    tiers: [Vec<Card>; 3],
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut catalog = Self::new();
        for card in cards {
            catalog.push(card);
        }
        catalog
    }

    pub fn push(&mut self, card: Card) {
        self.tiers[card.tier.index()].push(card);
    }

    pub fn tier(&self, tier: Tier) -> &[Card] {
        &self.tiers[tier.index()]
    }

    pub fn len(&self) -> usize {
        self.tiers.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn into_tiers(self) -> [Vec<Card>; 3] {
        self.tiers
    }
}
