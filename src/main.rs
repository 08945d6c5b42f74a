use std::collections::HashSet;
use std::io::{self, BufRead, Write};

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use rand::{rngs::SmallRng, SeedableRng};

use salvo::{
    init_logging, random_placement, ui, Catalog, Difficulty, FireReport, MatchConfig,
    MemoryCatalog, Mode, Orientation, ParticipantId, SessionId, SessionStore, ShotOutcome,
    ShotResult, CLASSIC_TEMPLATE_ID,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the scripted opponent in this terminal.
    Play {
        #[arg(long, default_value = CLASSIC_TEMPLATE_ID)]
        template: String,
        #[arg(long, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        /// Place every ship at random without prompting.
        #[arg(long)]
        auto_place: bool,
    },
    /// List the available fleet templates.
    Templates,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let store = SessionStore::new(MemoryCatalog::classic());

    match cli.command {
        Commands::Templates => {
            for t in store.catalog().fleet_templates() {
                println!("{} ({}x{}): {}", t.id, t.board_size, t.board_size, t.name);
            }
            Ok(())
        }
        Commands::Play {
            template,
            difficulty,
            seed,
            auto_place,
        } => {
            let mut config = MatchConfig::default().with_difficulty(difficulty);
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                config = config.with_seed(s);
            }
            let mut rng = match seed {
                Some(s) => SmallRng::seed_from_u64(s.wrapping_add(1)),
                None => {
                    let mut seed_rng = rand::rng();
                    SmallRng::from_rng(&mut seed_rng)
                }
            };
            let human = ParticipantId::from("player");
            let summary = store.create_session_with(&human, &template, Mode::VsScripted, config)?;
            let mut lines = io::stdin().lock().lines();

            place_fleet(&store, summary.id, &human, &mut rng, &mut lines, auto_place)?;
            play(&store, summary.id, &human, &mut lines)
        }
    }
}

fn prompt(text: &str) -> anyhow::Result<()> {
    print!("{text}");
    io::stdout().flush()?;
    Ok(())
}

fn next_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> anyhow::Result<String> {
    lines
        .next()
        .ok_or_else(|| anyhow!("input closed"))?
        .map_err(Into::into)
}

fn place_fleet<C: Catalog>(
    store: &SessionStore<C>,
    id: SessionId,
    human: &ParticipantId,
    rng: &mut SmallRng,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    auto_place: bool,
) -> anyhow::Result<()> {
    if !auto_place {
        println!("Place your ships (e.g. B3 h or B3 v). Press enter for random placement.");
    }
    loop {
        let view = store.board_view(id, human)?;
        let Some(ship) = view.ships_to_place.first().cloned() else {
            return Ok(());
        };
        let line = if auto_place {
            String::new()
        } else {
            print!("{}", ui::render_own_board(&view));
            prompt(&format!("Place {} (length {}): ", ship.name, ship.length))?;
            next_line(lines)?
        };

        let mut parts = line.split_whitespace();
        let (start, orientation) = match (parts.next(), parts.next()) {
            (None, _) => {
                let occupied: HashSet<u32> = view
                    .fleet
                    .iter()
                    .flat_map(|s| s.segments.iter().map(|seg| seg.coordinate_key))
                    .collect();
                let cells = random_placement(rng, view.board_size, ship.length, &occupied)
                    .ok_or_else(|| anyhow!("no room left for {}", ship.name))?;
                let start = cells
                    .first()
                    .ok_or_else(|| anyhow!("empty footprint for {}", ship.name))?;
                (start.label(), Orientation::of(&cells))
            }
            (Some(start), orient) => match orient.unwrap_or("h").parse::<Orientation>() {
                Ok(o) => (start.to_string(), o),
                Err(e) => {
                    println!("Error: {e}");
                    continue;
                }
            },
        };

        if let Err(e) = store.place_ship(id, human, &ship.ship_type_id, &start, orientation) {
            println!("Error: {e}");
        }
    }
}

fn describe(who: &str, shot: &ShotOutcome) -> String {
    match (shot.result, &shot.ship_hit) {
        (ShotResult::Sunk, Some(name)) => format!("{who} fired at {}: sunk the {name}!", shot.coordinate),
        (ShotResult::Hit, _) | (ShotResult::Sunk, None) => format!("{who} fired at {}: hit", shot.coordinate),
        (ShotResult::Water, _) => format!("{who} fired at {}: water", shot.coordinate),
    }
}

fn play<C: Catalog>(
    store: &SessionStore<C>,
    id: SessionId,
    human: &ParticipantId,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<()> {
    println!("All ships placed. Fire by entering a cell such as C7, or 'quit'.");
    loop {
        let view = store.board_view(id, human)?;
        print!("{}", ui::render_player_view(&view));
        prompt("Target: ")?;
        let line = next_line(lines)?;
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") {
            return Ok(());
        }

        let FireReport {
            outcome,
            match_finished,
            winner,
            scripted_counter_shot,
            ..
        } = match store.fire_shot(id, human, line) {
            Ok(report) => report,
            Err(e) => {
                println!("Error: {e}");
                continue;
            }
        };
        println!("{}", describe("You", &outcome));
        if let Some(reply) = &scripted_counter_shot {
            println!("{}", describe("Opponent", reply));
        }

        if match_finished {
            let view = store.board_view(id, human)?;
            print!("{}", ui::render_player_view(&view));
            if winner == Some(view.my_side) {
                println!("You won!");
            } else {
                println!("You lost.");
            }
            let stats = store.statistics(id, human)?;
            println!(
                "Shots: {}  Hits: {}  Accuracy: {:.2}%  Untouched cells: {}  Duration: {}s",
                stats.shot_count,
                stats.hits,
                stats.accuracy,
                stats.target_cells_remaining,
                stats.duration_seconds
            );
            return Ok(());
        }
    }
}
