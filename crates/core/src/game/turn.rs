use super::{rank_players, Game, Standing};
use crate::{Event, EventBus, Move, MoveError, Phase, TurnEnd};
use thiserror::Error;
use tracing::{debug, info};

/// Supplies moves for whichever player is due to act.
pub trait MoveSource {
    /// `None` means no further input will arrive. An `Err` is a move the
    /// source could not even build (bad tag, unparsable numbers).
    fn next_move(&mut self, game: &Game, player: usize) -> Option<Result<Move, MoveError>>;

    fn rejected(&mut self, _player: usize, _error: &MoveError) {}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("no more moves from player {player}")]
    SourceClosed { player: usize },
    #[error("game is over")]
    GameOver,
}

impl Game {
    pub fn apply_move(
        &mut self,
        player: usize,
        mv: &Move,
        events: &mut EventBus,
    ) -> Result<(), MoveError> {
        if self.meta.phase == Phase::Ended {
            return Err(MoveError::IllegalPhase(self.meta.phase));
        }
        if player >= self.meta.players {
            return Err(MoveError::UnknownPlayer { player });
        }
        if player != self.meta.current {
            return Err(MoveError::OutOfTurn {
                expected: self.meta.current,
                actual: player,
            });
        }
        self.table.apply(player, mv, events)?;
        self.finish_turn(events);
        Ok(())
    }

    /// Asks `source` for the current player's move until one is accepted.
    /// Rejected moves leave the turn with the same player.
    pub fn play_turn<S: MoveSource + ?Sized>(
        &mut self,
        source: &mut S,
        events: &mut EventBus,
    ) -> Result<(), TurnError> {
        if self.meta.phase == Phase::Ended {
            return Err(TurnError::GameOver);
        }
        let player = self.meta.current;
        loop {
            let submitted = source
                .next_move(self, player)
                .ok_or(TurnError::SourceClosed { player })?;
            match submitted.and_then(|mv| self.apply_move(player, &mv, events)) {
                Ok(()) => return Ok(()),
                Err(error) => {
                    debug!(player, %error, "move rejected");
                    source.rejected(player, &error);
                    events.push(Event::MoveRejected { player, error });
                }
            }
        }
    }

    pub fn play_to_end<S: MoveSource + ?Sized>(
        &mut self,
        source: &mut S,
        events: &mut EventBus,
    ) -> Result<Vec<Standing>, TurnError> {
        while self.meta.phase != Phase::Ended {
            self.play_turn(source, events)?;
        }
        Ok(rank_players(self.table.players()))
    }

    fn finish_turn(&mut self, events: &mut EventBus) {
        if self.meta.phase == Phase::Active {
            let threshold = self.table.config().win_points;
            let leader = self
                .table
                .players()
                .iter()
                .enumerate()
                .map(|(player, ledger)| (player, ledger.score()))
                .find(|(_, points)| *points >= threshold);
            if let Some((player, points)) = leader {
                if self.meta.start_final_round() {
                    info!(player, points, round = self.meta.round, "final round");
                    events.push(Event::FinalRoundStarted {
                        player,
                        points,
                        round: self.meta.round,
                    });
                }
            }
        }
        match self.meta.end_turn() {
            TurnEnd::NextPlayer => {}
            TurnEnd::RoundComplete { round } => {
                debug!(round, "round complete");
                events.push(Event::RoundCompleted { round });
            }
            TurnEnd::GameOver { round } => {
                let standings = rank_players(self.table.players());
                let winner = standings.first().map(|standing| standing.player);
                info!(rounds = round, ?winner, "game over");
                events.push(Event::RoundCompleted { round });
                events.push(Event::GameEnded {
                    rounds: round,
                    standings,
                });
            }
        }
    }
}
