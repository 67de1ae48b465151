use crate::Card;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Orders a tier's draw pile once, before the opening deal.
pub trait Shuffler {
    fn shuffle(&mut self, cards: &mut [Card]);
}

#[derive(Debug, Clone)]
pub struct SeededShuffler {
    seed: u64,
    rng: StdRng,
}

impl SeededShuffler {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Shuffler for SeededShuffler {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }
}

/// Leaves every pile in catalog order.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepOrder;

impl Shuffler for KeepOrder {
    fn shuffle(&mut self, _cards: &mut [Card]) {}
}
