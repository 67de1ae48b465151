mod console;
mod view;

use anyhow::Context;
use clap::Parser;
use console::ConsoleSource;
use gembazaar_core::{EventBus, Game, MoveSource, Phase, SeededShuffler, Standing};
use gembazaar_data::{load_assets_with, Assets};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;
use view::{describe_event, render_standings};

#[derive(Parser)]
#[command(name = "gembazaar")]
#[command(about = "Hot-seat gem market card game for the terminal")]
struct Args {
    /// Number of players at the table
    #[arg(short, long, default_value = "2")]
    players: usize,

    /// Deck shuffle seed; defaults to the current time
    #[arg(long)]
    seed: Option<u64>,

    /// Directory holding gamedata.tsv and an optional rules.json
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Card catalog to use instead of the one in the assets directory
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Rules file to use instead of the one in the assets directory
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let Assets { rules, catalog } = load_game_assets(&args)?;
    let mut shuffler = SeededShuffler::from_seed(args.seed.unwrap_or_else(clock_seed));
    info!(seed = shuffler.seed(), players = args.players, "dealing");
    let mut game = Game::new(rules, args.players, catalog, &mut shuffler)?;

    let mut source = ConsoleSource::new(io::stdin().lock(), io::stdout());
    let mut events = EventBus::default();
    let mut out = io::stdout();
    writeln!(out, "seed {}, type help for move syntax", shuffler.seed())?;
    let standings = play(&mut game, &mut source, &mut events, &mut out)?;
    writeln!(out, "{}", render_standings(&standings))?;
    Ok(())
}

fn load_game_assets(args: &Args) -> anyhow::Result<Assets> {
    load_assets_with(&args.assets, args.catalog.as_deref(), args.rules.as_deref())
}

fn play<S: MoveSource, W: Write>(
    game: &mut Game,
    source: &mut S,
    events: &mut EventBus,
    out: &mut W,
) -> anyhow::Result<Vec<Standing>> {
    let mut round = 0;
    while game.phase() != Phase::Ended {
        if game.round_number() != round {
            round = game.round_number();
            writeln!(out, "\n== Turn {round} ==")?;
        }
        game.play_turn(source, events)
            .context("game stopped before it ended")?;
        for line in events.drain().filter_map(|event| describe_event(&event)) {
            writeln!(out, "{line}")?;
        }
    }
    game.final_ranking().context("finished game has no standings")
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gembazaar_core::{
        Bank, Board, Card, Deck, GemColor, Gems, PlayerLedger, RulesConfig, Table, Tier,
    };
    use std::fs;
    use std::io::Cursor;

    fn final_card_table() -> Game {
        let prize = Card::new(Tier::Three, Gems::default(), GemColor::Black, 15);
        let board = Board::deal(
            [Deck::default(), Deck::default(), Deck::new(vec![prize])],
            4,
        );
        Game::from_table(Table::from_parts(
            RulesConfig::default(),
            Bank::new(4, 5),
            board,
            vec![PlayerLedger::new(), PlayerLedger::new()],
        ))
        .expect("two seats")
    }

    #[test]
    fn plays_a_short_game_to_the_standings() {
        let mut game = final_card_table();
        let script = "b 3 0 0\nt2 4 0 0 0 0\nt3 1 1 1 0 0\n";
        let mut source = ConsoleSource::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let mut events = EventBus::default();
        let mut out = Vec::new();
        let standings =
            play(&mut game, &mut source, &mut events, &mut out).expect("game finishes");
        assert_eq!(standings[0].player, 0);
        assert_eq!(standings[0].points, 15);
        assert_eq!(standings[1].player, 1);

        let log = String::from_utf8(out).expect("utf8");
        assert!(log.contains("== Turn 1 =="), "{log}");
        assert!(!log.contains("== Turn 2 =="), "{log}");
        assert!(log.contains(">> Player 0 bought"), "{log}");
        assert!(log.contains(">> Player 0 reached 15 points"), "{log}");
        assert!(log.contains(">> Game over after 1 rounds"), "{log}");
        let prompts = String::from_utf8(source.output().clone()).expect("utf8");
        assert!(prompts.contains("illegal move"), "{prompts}");
    }

    #[test]
    fn running_out_of_input_is_an_error() {
        let mut game = final_card_table();
        let mut source = ConsoleSource::new(Cursor::new(Vec::<u8>::new()), Vec::<u8>::new());
        let mut events = EventBus::default();
        let mut out = Vec::<u8>::new();
        let err = play(&mut game, &mut source, &mut events, &mut out).expect_err("no moves");
        assert!(format!("{err:#}").contains("no more moves from player 0"));
    }

    #[test]
    fn parses_defaults() {
        let args = Args::parse_from(["gembazaar"]);
        assert_eq!(args.players, 2);
        assert_eq!(args.assets, PathBuf::from("assets"));
        assert!(args.catalog.is_none());
        assert!(args.rules.is_none());
        let args = Args::parse_from(["gembazaar", "-p", "3", "--seed", "9", "-v"]);
        assert_eq!((args.players, args.seed, args.verbose), (3, Some(9), true));
    }

    fn workspace_assets() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("assets")
    }

    #[test]
    fn rules_come_from_the_assets_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::copy(
            workspace_assets().join("gamedata.tsv"),
            dir.path().join("gamedata.tsv"),
        )
        .expect("copy catalog");
        fs::write(dir.path().join("rules.json"), r#"{ "win_points": 9 }"#).expect("write rules");
        let assets_dir = dir.path().to_string_lossy().into_owned();

        let args = Args::parse_from(["gembazaar", "--assets", assets_dir.as_str()]);
        let assets = load_game_assets(&args).expect("assets directory");
        assert_eq!(assets.rules.win_points, 9);
        assert_eq!(assets.catalog.len(), 90);

        let override_path = dir.path().join("house.json");
        fs::write(&override_path, r#"{ "reserve_limit": 2 }"#).expect("write override");
        let override_arg = override_path.to_string_lossy().into_owned();
        let args = Args::parse_from([
            "gembazaar",
            "--assets",
            assets_dir.as_str(),
            "--rules",
            override_arg.as_str(),
        ]);
        let assets = load_game_assets(&args).expect("rules override");
        assert_eq!(assets.rules.reserve_limit, 2);
        assert_eq!(assets.rules.win_points, 15);
    }

    #[test]
    fn explicit_files_skip_the_assets_directory() {
        let catalog = workspace_assets().join("gamedata.tsv");
        let rules = workspace_assets().join("rules.json");
        let catalog = catalog.to_string_lossy().into_owned();
        let rules = rules.to_string_lossy().into_owned();
        let args = Args::parse_from([
            "gembazaar",
            "--assets",
            "no-such-dir",
            "--catalog",
            catalog.as_str(),
            "--rules",
            rules.as_str(),
        ]);
        let assets = load_game_assets(&args).expect("explicit files");
        assert_eq!(assets.rules, RulesConfig::default());
        let missing = Args::parse_from(["gembazaar", "--assets", "no-such-dir"]);
        assert!(load_game_assets(&missing).is_err());
    }
}
