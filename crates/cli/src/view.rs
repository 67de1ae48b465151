use gembazaar_core::{
    Bank, Board, CardRef, Event, Game, Payment, PlayerLedger, PossibleBuy, Standing, Tier,
};

pub fn render_state(game: &Game) -> String {
    let table = game.table();
    let mut lines = vec![format!(
        "== Round {} | Player {} to move | {:?} ==",
        game.round_number(),
        game.current_player(),
        game.phase()
    )];
    lines.extend(board_lines(table.board()));
    lines.push(bank_line(table.bank()));
    for (index, ledger) in table.players().iter().enumerate() {
        lines.extend(player_lines(index, ledger));
    }
    lines.join("\n")
}

fn board_lines(board: &Board) -> Vec<String> {
    let mut lines = Vec::new();
    for tier in Tier::ALL.into_iter().rev() {
        lines.push(format!(
            "-- Tier {tier} ({} left in deck) --",
            board.deck_len(tier)
        ));
        for (slot, card) in board.row(tier).iter().enumerate() {
            lines.push(format!("  {slot}: {card}"));
        }
    }
    lines
}

fn bank_line(bank: &Bank) -> String {
    format!("Bank: {} gold:{}", bank.gems, bank.gold)
}

fn player_lines(index: usize, ledger: &PlayerLedger) -> Vec<String> {
    let mut lines = vec![
        format!("-- Player {index}: {} points --", ledger.score()),
        format!("  held:  {} gold:{}", ledger.gems, ledger.gold),
        format!("  cards: {}", ledger.bonus()),
        format!("  total: {} gold:{}", ledger.total_gems(), ledger.gold),
    ];
    for card in &ledger.owned {
        lines.push(format!("    owned {card}"));
    }
    for (slot, card) in ledger.reserved.iter().enumerate() {
        lines.push(format!("    reserved {slot}: {card}"));
    }
    lines
}

pub fn render_buys(buys: &[PossibleBuy]) -> String {
    if buys.is_empty() {
        return "Nothing affordable.".to_string();
    }
    let mut lines = vec!["Affordable:".to_string()];
    for buy in buys {
        lines.push(format!(
            "  {} {} pays {}",
            buy_command(buy.source),
            buy.card,
            payment_text(&buy.payment)
        ));
    }
    lines.join("\n")
}

fn buy_command(source: CardRef) -> String {
    match source {
        CardRef::Board { tier, slot } => format!("b {tier} {slot} 0"),
        CardRef::Reserved { slot } => format!("b 0 {slot} 1"),
    }
}

fn payment_text(payment: &Payment) -> String {
    if payment.gold == 0 {
        payment.gems.to_string()
    } else {
        format!("{} gold:{}", payment.gems, payment.gold)
    }
}

/// One line per applied event. Rejections are reported by the prompt.
pub fn describe_event(event: &Event) -> Option<String> {
    let line = match event {
        Event::GemsTaken { player, gems } => format!(">> Player {player} took {gems}"),
        Event::CardReserved {
            player,
            tier,
            slot,
            card,
            replenished,
        } => format!(
            ">> Player {player} reserved tier {tier} slot {slot}: {card}{}",
            refill_note(*replenished)
        ),
        Event::CardBought {
            player,
            card,
            from_reserve,
            payment,
            replenished,
        } => {
            if *from_reserve {
                format!(
                    ">> Player {player} bought {card} from reserve paying {}",
                    payment_text(payment)
                )
            } else {
                format!(
                    ">> Player {player} bought {card} from board paying {}{}",
                    payment_text(payment),
                    refill_note(*replenished)
                )
            }
        }
        Event::MoveRejected { .. } => return None,
        Event::FinalRoundStarted {
            player,
            points,
            round,
        } => format!(">> Player {player} reached {points} points, round {round} is the last"),
        Event::RoundCompleted { round } => format!(">> Round {round} complete"),
        Event::GameEnded { rounds, .. } => format!(">> Game over after {rounds} rounds"),
    };
    Some(line)
}

fn refill_note(replenished: bool) -> &'static str {
    if replenished {
        ""
    } else {
        " (deck empty)"
    }
}

pub fn render_standings(standings: &[Standing]) -> String {
    let mut lines = vec![
        "== Final Standings ==".to_string(),
        "rank  player  points  cards".to_string(),
    ];
    for standing in standings {
        lines.push(format!(
            "{:>4}  {:>6}  {:>6}  {:>5}",
            standing.rank, standing.player, standing.points, standing.cards
        ));
    }
    lines.join("\n")
}

pub fn help_text() -> &'static str {
    "Moves:
  t3 w u g r b    take one gem each of up to three colours, e.g. t3 1 1 1 0 0
  t2 w u g r b    take two gems of one colour, e.g. t2 0 0 2 0 0
  r tier slot     reserve a board card and take one gold
  b tier slot 0   buy a board card
  b 0 slot 1      buy one of your reserved cards
Commands: help, json, quit"
}

#[cfg(test)]
mod tests {
    use super::*;
    use gembazaar_core::{Card, GemColor, Gems};

    #[test]
    fn standings_table_lists_every_player() {
        let standings = [
            Standing {
                rank: 1,
                player: 2,
                points: 15,
                cards: 6,
            },
            Standing {
                rank: 2,
                player: 0,
                points: 15,
                cards: 7,
            },
        ];
        let text = render_standings(&standings);
        let rows: Vec<&str> = text.lines().skip(2).collect();
        assert_eq!(rows, vec!["   1       2      15      6", "   2       0      15      7"]);
    }

    #[test]
    fn rejections_are_not_echoed_as_events() {
        let event = Event::MoveRejected {
            player: 0,
            error: gembazaar_core::MoveError::BankGoldEmpty,
        };
        assert_eq!(describe_event(&event), None);
        let taken = Event::GemsTaken {
            player: 1,
            gems: Gems::new([1, 1, 1, 0, 0]),
        };
        assert_eq!(
            describe_event(&taken).as_deref(),
            Some(">> Player 1 took w:1 u:1 g:1 r:0 b:0")
        );
    }

    #[test]
    fn buy_hints_show_the_command_to_type() {
        let card = Card::new(Tier::Two, Gems::new([0, 2, 0, 0, 0]), GemColor::Red, 1);
        let buys = [
            PossibleBuy {
                source: CardRef::Board {
                    tier: Tier::Two,
                    slot: 3,
                },
                card,
                payment: Payment {
                    gems: Gems::new([0, 1, 0, 0, 0]),
                    gold: 1,
                },
            },
            PossibleBuy {
                source: CardRef::Reserved { slot: 0 },
                card,
                payment: Payment {
                    gems: Gems::new([0, 2, 0, 0, 0]),
                    gold: 0,
                },
            },
        ];
        let text = render_buys(&buys);
        assert!(text.contains("b 2 3 0"), "{text}");
        assert!(text.contains("gold:1"), "{text}");
        assert!(text.contains("b 0 0 1"), "{text}");
        assert_eq!(render_buys(&[]), "Nothing affordable.");
    }
}
