use super::{MoveError, Table};
use crate::{Event, EventBus, GemColor, Gems, PlayerLedger};

impl Table {
    pub(super) fn check_take_three(
        &self,
        ledger: &PlayerLedger,
        request: &[u8],
    ) -> Result<Gems, MoveError> {
        let gems = gem_vector(request)?;
        if let Some(count) = request.iter().find(|count| **count > 1) {
            return Err(MoveError::InvalidShape(format!(
                "take three allows 0 or 1 per colour, got {count}"
            )));
        }
        let total = gems.total();
        if !(1..=3).contains(&total) {
            return Err(MoveError::InvalidShape(format!(
                "take three requests 1 to 3 gems, got {total}"
            )));
        }
        self.bank.check_supply(&gems)?;
        self.check_gem_cap(ledger, &gems)?;
        Ok(gems)
    }

    pub(super) fn check_take_two(
        &self,
        ledger: &PlayerLedger,
        request: &[u8],
    ) -> Result<Gems, MoveError> {
        let gems = gem_vector(request)?;
        let mut picked = gems.iter().filter(|(_, count)| *count != 0);
        let color = match (picked.next(), picked.next()) {
            (Some((color, 2)), None) => color,
            _ => {
                return Err(MoveError::InvalidShape(
                    "take two needs exactly one colour set to 2".to_string(),
                ))
            }
        };
        // Checked before the plain stock test so a thin stack always reports
        // this error.
        let available = self.bank.stock(color);
        let required = self.config.double_take_min_stock;
        if available < required {
            return Err(MoveError::StackTooLowForDouble {
                color,
                available,
                required,
            });
        }
        self.bank.check_supply(&gems)?;
        self.check_gem_cap(ledger, &gems)?;
        Ok(gems)
    }

    pub(super) fn commit_take(
        &mut self,
        player: usize,
        gems: Gems,
        events: &mut EventBus,
    ) -> Result<(), MoveError> {
        let ledger = self
            .players
            .get_mut(player)
            .ok_or(MoveError::UnknownPlayer { player })?;
        self.bank.withdraw(&gems)?;
        ledger.receive(&gems);
        events.push(Event::GemsTaken { player, gems });
        Ok(())
    }

    fn check_gem_cap(&self, ledger: &PlayerLedger, gains: &Gems) -> Result<(), MoveError> {
        let total = ledger.held_total() + gains.total();
        let cap = self.config.player_gem_cap;
        if total > cap {
            return Err(MoveError::PlayerGemCapExceeded { total, cap });
        }
        Ok(())
    }
}

fn gem_vector(request: &[u8]) -> Result<Gems, MoveError> {
    Gems::from_slice(request).ok_or_else(|| {
        MoveError::InvalidShape(format!(
            "expected {} gem counts, got {}",
            GemColor::COUNT,
            request.len()
        ))
    })
}
