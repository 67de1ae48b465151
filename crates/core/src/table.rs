use crate::{
    Bank, Board, Card, CardRef, Catalog, Deck, EventBus, GemColor, Gems, Move, Payment, Phase,
    PlayerLedger, RulesConfig, Shuffler, Tier,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

mod buy;
mod reserve;
mod take;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MoveError {
    #[error("invalid move input: {0}")]
    InvalidShape(String),
    #[error("not enough {color} in the bank: {available} left, {requested} requested")]
    StockExceeded {
        color: GemColor,
        requested: u8,
        available: u8,
    },
    #[error("no gold left in the bank")]
    BankGoldEmpty,
    #[error("player would hold {total} gems, limit is {cap}")]
    PlayerGemCapExceeded { total: u32, cap: u32 },
    #[error("{color} stack has {available} gems, taking two needs {required}")]
    StackTooLowForDouble {
        color: GemColor,
        available: u8,
        required: u8,
    },
    #[error("player already holds {limit} reserved cards")]
    ReserveLimitReached { limit: usize },
    #[error("no card at slot {slot}")]
    NoSuchCard { slot: usize },
    #[error("tier {tier} does not exist")]
    InvalidTarget { tier: i64 },
    #[error("not enough gems: short by {shortfall}, holding {gold} gold")]
    InsufficientFunds { shortfall: u32, gold: u8 },
    #[error("unknown move kind {0:?}")]
    UnknownMoveKind(String),
    #[error("no moves accepted in phase {0:?}")]
    IllegalPhase(Phase),
    #[error("no player {player} at this table")]
    UnknownPlayer { player: usize },
    #[error("it is player {expected}'s turn, not player {actual}'s")]
    OutOfTurn { expected: usize, actual: usize },
}

/// A move that passed every check; committing it cannot be refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Plan {
    Take(Gems),
    Reserve { tier: Tier, slot: usize },
    Buy { source: CardRef, payment: Payment },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PossibleBuy {
    pub source: CardRef,
    pub card: Card,
    pub payment: Payment,
}

/// Bank, market and player ledgers. Only the move validator mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    config: RulesConfig,
    bank: Bank,
    board: Board,
    players: Vec<PlayerLedger>,
}

impl Table {
    pub fn new(
        config: RulesConfig,
        players: usize,
        catalog: Catalog,
        shuffler: &mut dyn Shuffler,
    ) -> Self {
        let [one, two, three] = catalog.into_tiers();
        let decks = [
            Deck::shuffled(one, shuffler),
            Deck::shuffled(two, shuffler),
            Deck::shuffled(three, shuffler),
        ];
        let board = Board::deal(decks, config.board_width);
        let bank = Bank::new(config.gems_per_color(players), config.gold_supply);
        Self {
            config,
            bank,
            board,
            players: vec![PlayerLedger::new(); players],
        }
    }

    /// Assembles an arbitrary position, e.g. a mid-game snapshot.
    pub fn from_parts(
        config: RulesConfig,
        bank: Bank,
        board: Board,
        players: Vec<PlayerLedger>,
    ) -> Self {
        Self {
            config,
            bank,
            board,
            players,
        }
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[PlayerLedger] {
        &self.players
    }

    pub fn player(&self, player: usize) -> Result<&PlayerLedger, MoveError> {
        self.players
            .get(player)
            .ok_or(MoveError::UnknownPlayer { player })
    }

    /// Runs every check `apply` would without touching the table.
    pub fn validate(&self, player: usize, mv: &Move) -> Result<(), MoveError> {
        self.plan(player, mv).map(|_| ())
    }

    pub fn apply(
        &mut self,
        player: usize,
        mv: &Move,
        events: &mut EventBus,
    ) -> Result<(), MoveError> {
        let plan = self.plan(player, mv)?;
        match plan {
            Plan::Take(gems) => self.commit_take(player, gems, events)?,
            Plan::Reserve { tier, slot } => self.commit_reserve(player, tier, slot, events)?,
            Plan::Buy { source, payment } => self.commit_buy(player, source, payment, events)?,
        }
        debug!(
            player,
            kind = %mv.kind(),
            bank = %self.bank.gems,
            gold = self.bank.gold,
            "move applied"
        );
        Ok(())
    }

    /// Board and reserved cards the player could buy right now.
    pub fn possible_buys(&self, player: usize) -> Result<Vec<PossibleBuy>, MoveError> {
        let ledger = self.player(player)?;
        let board = self
            .board
            .cards()
            .map(|(tier, slot, card)| (CardRef::Board { tier, slot }, card));
        let reserved = ledger
            .reserved
            .iter()
            .enumerate()
            .map(|(slot, card)| (CardRef::Reserved { slot }, card));
        Ok(board
            .chain(reserved)
            .filter_map(|(source, card)| {
                let payment = ledger.payment_for(card).ok()?;
                Some(PossibleBuy {
                    source,
                    card: *card,
                    payment,
                })
            })
            .collect())
    }

    fn plan(&self, player: usize, mv: &Move) -> Result<Plan, MoveError> {
        let ledger = self.player(player)?;
        match mv {
            Move::TakeThree(request) => self.check_take_three(ledger, request).map(Plan::Take),
            Move::TakeTwo(request) => self.check_take_two(ledger, request).map(Plan::Take),
            Move::Reserve { tier, slot } => self.check_reserve(ledger, *tier, *slot),
            Move::Buy {
                tier,
                slot,
                from_reserve,
            } => self.check_buy(ledger, *tier, *slot, *from_reserve),
        }
    }
}

fn tier_from(tier: u8) -> Result<Tier, MoveError> {
    Tier::from_number(tier).ok_or(MoveError::InvalidTarget {
        tier: i64::from(tier),
    })
}
