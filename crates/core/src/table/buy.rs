use super::{tier_from, MoveError, Plan, Table};
use crate::{Card, CardRef, Event, EventBus, Payment, PlayerLedger};

impl Table {
    pub(super) fn check_buy(
        &self,
        ledger: &PlayerLedger,
        tier: u8,
        slot: usize,
        from_reserve: bool,
    ) -> Result<Plan, MoveError> {
        let source = if from_reserve {
            CardRef::Reserved { slot }
        } else {
            CardRef::Board {
                tier: tier_from(tier)?,
                slot,
            }
        };
        let card = self
            .card_at(ledger, source)
            .ok_or(MoveError::NoSuchCard { slot })?;
        let payment = ledger.payment_for(card)?;
        Ok(Plan::Buy { source, payment })
    }

    /// Settles the payment in both directions: what leaves the player's hand
    /// lands back in the bank.
    pub(super) fn commit_buy(
        &mut self,
        player: usize,
        source: CardRef,
        payment: Payment,
        events: &mut EventBus,
    ) -> Result<(), MoveError> {
        let ledger = self
            .players
            .get_mut(player)
            .ok_or(MoveError::UnknownPlayer { player })?;
        let (card, replenished) = match source {
            CardRef::Board { tier, slot } => {
                let replenished = self.board.deck_len(tier) > 0;
                let card = self
                    .board
                    .take(tier, slot)
                    .ok_or(MoveError::NoSuchCard { slot })?;
                (card, replenished)
            }
            CardRef::Reserved { slot } => {
                if slot >= ledger.reserved.len() {
                    return Err(MoveError::NoSuchCard { slot });
                }
                (ledger.reserved.remove(slot), false)
            }
        };
        ledger.pay(&payment);
        self.bank.deposit(&payment.gems);
        self.bank.give_gold(payment.gold);
        ledger.owned.push(card);
        events.push(Event::CardBought {
            player,
            card,
            from_reserve: matches!(source, CardRef::Reserved { .. }),
            payment,
            replenished,
        });
        Ok(())
    }

    fn card_at<'a>(&'a self, ledger: &'a PlayerLedger, source: CardRef) -> Option<&'a Card> {
        match source {
            CardRef::Board { tier, slot } => self.board.card(tier, slot),
            CardRef::Reserved { slot } => ledger.reserved.get(slot),
        }
    }
}
