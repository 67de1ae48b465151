use crate::PlayerLedger;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Standing {
    pub rank: usize,
    pub player: usize,
    pub points: u32,
    pub cards: usize,
}

/// Most points first. Equal points go to the higher seat index, then to the
/// player with fewer cards.
pub fn rank_players(players: &[PlayerLedger]) -> Vec<Standing> {
    let mut standings: Vec<Standing> = players
        .iter()
        .enumerate()
        .map(|(player, ledger)| Standing {
            rank: 0,
            player,
            points: ledger.score(),
            cards: ledger.owned.len(),
        })
        .collect();
    standings.sort_by_key(|standing| {
        (
            Reverse(standing.points),
            Reverse(standing.player),
            standing.cards,
        )
    });
    for (position, standing) in standings.iter_mut().enumerate() {
        standing.rank = position + 1;
    }
    standings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, GemColor, Gems, Tier};

    fn ledger_with(points: &[u8]) -> PlayerLedger {
        PlayerLedger {
            owned: points
                .iter()
                .map(|p| Card::new(Tier::Three, Gems::default(), GemColor::Green, *p))
                .collect(),
            ..PlayerLedger::default()
        }
    }

    #[test]
    fn ties_go_to_the_higher_seat() {
        let players = vec![
            ledger_with(&[5, 5, 5]),
            ledger_with(&[4, 4, 4]),
            ledger_with(&[3, 3, 3, 3, 3]),
        ];
        let order: Vec<usize> = rank_players(&players)
            .iter()
            .map(|standing| standing.player)
            .collect();
        assert_eq!(order, vec![2, 0, 1]);
    }

    #[test]
    fn ranks_are_one_based() {
        let players = vec![ledger_with(&[1]), ledger_with(&[2])];
        let standings = rank_players(&players);
        assert_eq!(standings[0].rank, 1);
        assert_eq!(standings[0].player, 1);
        assert_eq!(standings[0].points, 2);
        assert_eq!(standings[1].rank, 2);
        assert_eq!(standings[1].cards, 1);
    }
}
