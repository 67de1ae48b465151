use super::{tier_from, MoveError, Plan, Table};
use crate::{Event, EventBus, PlayerLedger, Tier};

impl Table {
    pub(super) fn check_reserve(
        &self,
        ledger: &PlayerLedger,
        tier: u8,
        slot: usize,
    ) -> Result<Plan, MoveError> {
        let tier = tier_from(tier)?;
        if self.bank.gold == 0 {
            return Err(MoveError::BankGoldEmpty);
        }
        let limit = self.config.reserve_limit;
        if ledger.reserved.len() >= limit {
            return Err(MoveError::ReserveLimitReached { limit });
        }
        if self.board.card(tier, slot).is_none() {
            return Err(MoveError::NoSuchCard { slot });
        }
        Ok(Plan::Reserve { tier, slot })
    }

    pub(super) fn commit_reserve(
        &mut self,
        player: usize,
        tier: Tier,
        slot: usize,
        events: &mut EventBus,
    ) -> Result<(), MoveError> {
        let ledger = self
            .players
            .get_mut(player)
            .ok_or(MoveError::UnknownPlayer { player })?;
        if self.board.card(tier, slot).is_none() {
            return Err(MoveError::NoSuchCard { slot });
        }
        self.bank.take_gold()?;
        let replenished = self.board.deck_len(tier) > 0;
        let card = self
            .board
            .take(tier, slot)
            .ok_or(MoveError::NoSuchCard { slot })?;
        ledger.gold = ledger.gold.saturating_add(1);
        ledger.reserved.push(card);
        events.push(Event::CardReserved {
            player,
            tier,
            slot,
            card,
            replenished,
        });
        Ok(())
    }
}
