use std::path::PathBuf;
use std::time::Duration;

use caller::{GameInput, GameRecording, Recorder};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tombola::{
    generate_tombola, visualize_card, DrawSequence, GameController, Template, Tombola, Winner,
};
use tracing::{debug, info, warn};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Pause between two announced numbers.
const DRAW_DELAY: Duration = Duration::from_millis(50);

#[derive(Parser)]
struct Args {
    /// Path to the input file: the number of players followed by the template.
    /// Without it, the built-in template is used.
    input: Option<PathBuf>,

    /// Number of players, overriding the one in the input file
    #[arg(short, long)]
    players: Option<usize>,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Don't print the cards before the game starts
    #[arg(long, default_value_t = false)]
    hide_cards: bool,

    /// Record the game as a JSON file into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn print_tombola(tombola: &Tombola) {
    for (player_idx, set) in tombola.players.iter().enumerate() {
        println!("Cards of player {}\n", player_idx + 1);
        for (card_idx, card) in set.iter().enumerate() {
            println!("Card {}\n{}\n", card_idx + 1, visualize_card(card));
        }
    }
}

fn print_winner(tombola: &Tombola, winner: Winner) -> anyhow::Result<()> {
    let card = tombola
        .card(winner.player_idx, winner.card_idx)
        .ok_or_else(|| anyhow::anyhow!("Winning card {:?} does not exist", winner))?;
    println!(
        "\nPlayer {} is a winner with card {}!\n{}",
        winner.player_idx + 1,
        winner.card_idx + 1,
        visualize_card(card)
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let (num_players, template) = match (&args.input, args.players) {
        (Some(path), players) => {
            let input = GameInput::load(path)?;
            (players.unwrap_or(input.num_players), input.template)
        }
        (None, Some(players)) => (players, Template::classic()),
        (None, None) => anyhow::bail!("Either an input file or --players is required"),
    };
    info!(num_players);
    if num_players == 0 {
        warn!("No players, so there is no game to play");
        return Ok(());
    }

    let tombola = generate_tombola(&mut rng, &template, num_players)?;
    debug!(cards = tombola.iter_cards().count(), "Generated the cards");
    if !args.hide_cards {
        print_tombola(&tombola);
    }

    println!("Let's play bingo!\n");
    let draws = DrawSequence::new(&mut rng);
    let outcome = GameController::new(&tombola).play(draws, |num| {
        println!("The next number drawn is {}", num);
        std::thread::sleep(DRAW_DELAY);
    })?;
    info!(
        draws = outcome.drawn.len(),
        winners = outcome.winners.len(),
        "Game over"
    );

    for &winner in &outcome.winners {
        info!(
            player = winner.player_idx + 1,
            card = winner.card_idx + 1,
            "Winner"
        );
        print_winner(&tombola, winner)?;
    }

    if let Some(rec) = &mut recorder {
        let path = rec.write_game_recording(&GameRecording {
            seed,
            tombola,
            outcome,
        })?;
        info!(path = %path.display(), "Recorded the game");
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
