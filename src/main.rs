use anyhow::{Context, Result};
use clap::Parser;

use std::cmp::Ordering;
use std::io::{stdin, stdout, Write};

use connect4_minimax::{
    arena::Arena,
    config::{Config, Control, First, Selector, DEFAULT_DEPTH},
    game::{Game, GameState},
    search::{LOSS_SCORE, WIN_SCORE},
    COLS, ROWS,
};

/// Play Connect 4 against a minimax computer opponent
#[derive(Parser)]
#[command(name = "connect4", about = "Play Connect 4 against a minimax computer opponent")]
struct Cli {
    /// Number of rows on the board
    #[arg(long, default_value_t = ROWS)]
    rows: usize,

    /// Number of columns on the board
    #[arg(long, default_value_t = COLS)]
    cols: usize,

    /// Plies searched per computer move
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: usize,

    /// Who controls player one
    #[arg(long, value_enum, default_value = "human")]
    player_one: Control,

    /// Who controls player two
    #[arg(long, value_enum, default_value = "ai")]
    player_two: Control,

    /// Which player opens the game
    #[arg(long, value_enum, default_value = "random")]
    first: First,

    /// How the computer picks its moves
    #[arg(long, value_enum, default_value = "minimax")]
    selector: Selector,

    /// Display symbols of player one and player two
    #[arg(long, default_value = "XO")]
    symbols: String,

    /// Play this many minimax-versus-greedy games instead of an interactive game
    #[arg(long)]
    arena: Option<usize>,

    /// Log search details
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = Config {
        rows: cli.rows,
        cols: cli.cols,
        depth: cli.depth,
        players: [cli.player_one, cli.player_two],
        first: cli.first,
        selector: cli.selector,
        symbols: Config::parse_symbols(&cli.symbols).context("reading --symbols")?,
    };

    if let Some(games) = cli.arena {
        let arena = Arena::new(config, [Selector::Minimax, Selector::Greedy])
            .context("setting up the arena")?;
        let report = arena.run(games)?;
        println!(
            "Minimax (player 1) wins: {}, greedy (player 2) wins: {}, draws: {}",
            report.one_wins, report.two_wins, report.draws
        );
        println!("Positions searched: {}", report.nodes);
        return Ok(());
    }

    let mut game = Game::new(config).context("starting the game")?;
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        game.board()
            .display(game.config().symbols)
            .context("failed to draw board")?;

        match game.state() {
            GameState::Playing => {
                let piece = game.turn();
                let next_move = match game.config().control(piece) {
                    Control::Ai => {
                        println!("AI is thinking...");
                        stdout().flush()?;

                        let decision = game.computer_move()?;
                        if let Some(score) = decision.score {
                            describe_score(piece.number(), score);
                        }
                        println!("Best move: {}", decision.column + 1);
                        decision.column + 1
                    }
                    Control::Human => {
                        print!(
                            "Player {} ({}) move input > ",
                            piece.number(),
                            game.config().symbol(piece)
                        );
                        stdout().flush()?;
                        let mut input_str = String::new();
                        if stdin.read_line(&mut input_str)? == 0 {
                            // end of input
                            return Ok(());
                        }

                        match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str.trim());
                                continue;
                            }
                            Ok(column) => column,
                        }
                    }
                };

                if let Err(err) = game.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::PlayerOneWin => {
                println!("Player 1 wins!");
                break;
            }
            GameState::PlayerTwoWin => {
                println!("Player 2 wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}

fn describe_score(player: usize, score: i64) {
    match score {
        WIN_SCORE => println!("Player {} can force a win.", player),
        LOSS_SCORE => println!("Player {} cannot stop a loss.", player),
        _ => match score.cmp(&0) {
            Ordering::Greater => println!("Player {} is ahead ({}).", player, score),
            Ordering::Less => println!("Player {} is behind ({}).", player, score),
            Ordering::Equal => println!("The position is even."),
        },
    }
}
