use crate::{Card, Gems, MoveError, Payment, Standing, Tier};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    GemsTaken {
        player: usize,
        gems: Gems,
    },
    CardReserved {
        player: usize,
        tier: Tier,
        slot: usize,
        card: Card,
        replenished: bool,
    },
    CardBought {
        player: usize,
        card: Card,
        from_reserve: bool,
        payment: Payment,
        replenished: bool,
    },
    MoveRejected {
        player: usize,
        error: MoveError,
    },
    FinalRoundStarted {
        player: usize,
        points: u32,
        round: u32,
    },
    RoundCompleted {
        round: u32,
    },
    GameEnded {
        rounds: u32,
        standings: Vec<Standing>,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
