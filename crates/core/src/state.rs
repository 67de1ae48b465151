use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Active,
    FinalRound,
    Ended,
}

/// What happened when a player finished their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEnd {
    NextPlayer,
    RoundComplete { round: u32 },
    GameOver { round: u32 },
}

/// Turn bookkeeping, owned by the turn controller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameMeta {
    pub players: usize,
    pub round: u32,
    pub current: usize,
    pub phase: Phase,
}

impl GameMeta {
    pub fn new(players: usize) -> Self {
        Self {
            players,
            round: 1,
            current: 0,
            phase: Phase::Active,
        }
    }

    /// Triggers the final round. Returns false if it was already triggered
    /// or the game is over.
    pub fn start_final_round(&mut self) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        self.phase = Phase::FinalRound;
        true
    }

    /// Hands the turn to the next seat. The round number is left on the last
    /// round played once the game ends.
    pub fn end_turn(&mut self) -> TurnEnd {
        if self.current + 1 < self.players {
            self.current += 1;
            return TurnEnd::NextPlayer;
        }
        let round = self.round;
        self.current = 0;
        if self.phase == Phase::FinalRound {
            self.phase = Phase::Ended;
            return TurnEnd::GameOver { round };
        }
        self.round += 1;
        TurnEnd::RoundComplete { round }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_advance_after_every_seat_moves() {
        let mut meta = GameMeta::new(3);
        assert_eq!(meta.end_turn(), TurnEnd::NextPlayer);
        assert_eq!(meta.end_turn(), TurnEnd::NextPlayer);
        assert_eq!(meta.end_turn(), TurnEnd::RoundComplete { round: 1 });
        assert_eq!(meta.round, 2);
        assert_eq!(meta.current, 0);
        assert_eq!(meta.phase, Phase::Active);
    }

    #[test]
    fn final_round_ends_when_the_round_completes() {
        let mut meta = GameMeta::new(2);
        assert!(meta.start_final_round());
        assert!(!meta.start_final_round());
        assert_eq!(meta.end_turn(), TurnEnd::NextPlayer);
        assert_eq!(meta.phase, Phase::FinalRound);
        assert_eq!(meta.end_turn(), TurnEnd::GameOver { round: 1 });
        assert_eq!(meta.phase, Phase::Ended);
        assert_eq!(meta.round, 1);
        assert!(!meta.start_final_round());
    }
}
