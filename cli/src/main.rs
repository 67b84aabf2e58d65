mod config;
mod logger;
mod render;

use clap::Parser;
use std::io::{self, BufRead, Write};

use multiply_four_engine::{
    Board, ComputerTurn, Difficulty, GameSession, MoveOutcome, Multiplier, SessionSettings,
};

#[derive(Parser)]
#[command(
    name = "multiply_four",
    about = "Multiplication four-in-a-row against the computer"
)]
struct Args {
    /// easy, normal, or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Fixed RNG seed for a replayable game
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = config::CONFIG_FILE)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,
}

#[derive(Debug, PartialEq)]
enum Command {
    Move { multiplier: Multiplier, target: u32 },
    Moves(Multiplier),
    Difficulty(Difficulty),
    New,
    Help,
    Quit,
}

fn parse_multiplier(token: &str) -> Result<Multiplier, String> {
    token
        .parse::<u8>()
        .ok()
        .and_then(Multiplier::new)
        .ok_or_else(|| format!("The multiplier must be 1-9, got '{}'", token))
}

fn parse_command(line: &str) -> Result<Command, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["quit"] | ["q"] => Ok(Command::Quit),
        ["new"] => Ok(Command::New),
        ["help"] | ["?"] => Ok(Command::Help),
        ["moves", m] => Ok(Command::Moves(parse_multiplier(m)?)),
        ["difficulty", d] => Ok(Command::Difficulty(d.parse()?)),
        [m, t] => {
            let multiplier = parse_multiplier(m)?;
            let target = t
                .parse::<u32>()
                .map_err(|_| format!("The target must be a board value, got '{}'", t))?;
            Ok(Command::Move { multiplier, target })
        }
        _ => Err("Type 'help' for the commands".to_string()),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  <multiplier> <target>   mark <target> as <multiplier> x something");
    println!("  moves <multiplier>      list the legal targets for a multiplier");
    println!("  difficulty <tier>       easy, normal, or hard");
    println!("  new                     start a new game");
    println!("  quit                    leave");
}

fn print_board(session: &GameSession) {
    print!("{}", render::render_board(session.board(), session.state()));
}

fn play_turn(session: &mut GameSession, multiplier: Multiplier, target: u32) {
    match session.attempt_move(multiplier, target) {
        MoveOutcome::Rejected(reason) => {
            println!("{}!", reason);
            log!("Rejected player move {} -> {}: {:?}", multiplier, target, reason);
            return;
        }
        MoveOutcome::Won { .. } => {
            print_board(session);
            println!("You win! Congratulations!");
            return;
        }
        MoveOutcome::Draw => {
            print_board(session);
            println!("Game over! It's a draw.");
            return;
        }
        MoveOutcome::Applied => {}
    }

    match session.computer_turn() {
        ComputerTurn::Passed { multiplier } => {
            print_board(session);
            log!("Computer passed with multiplier {}", multiplier);
            println!("Computer couldn't find a move! Your turn.");
        }
        ComputerTurn::Played {
            multiplier,
            operand,
            target,
            outcome,
        } => {
            print_board(session);
            log!("Computer played {} x {} = {}", multiplier, operand, target);
            match outcome {
                MoveOutcome::Won { .. } => {
                    println!(
                        "Computer placed at {} ({} x {}). Computer wins! Better luck next time.",
                        target, multiplier, operand
                    );
                }
                MoveOutcome::Draw => {
                    println!("Computer placed at {}. Game over! It's a draw.", target);
                }
                _ => {
                    println!("Computer placed at {} ({} x {}).", target, multiplier, operand);
                }
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Game".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = config::load_config(&args.config)?;
    let difficulty = args.difficulty.unwrap_or(config.difficulty);
    let seed = args.seed.or(config.seed);
    let board = match &config.board {
        Some(rows) => Board::from_rows(rows)?,
        None => Board::standard(),
    };

    let mut session = GameSession::new(board, SessionSettings { difficulty, seed });
    log!(
        "New session: difficulty {}, seed {}",
        session.difficulty(),
        session.seed()
    );

    println!("Make four in a line using multiplication.");
    print_help();
    print_board(&session);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match parse_command(trimmed) {
            Err(message) => println!("{}", message),
            Ok(Command::Quit) => break,
            Ok(Command::Help) => print_help(),
            Ok(Command::New) => {
                session.reset();
                println!("New game. Make four in a line using multiplication.");
                print_board(&session);
            }
            Ok(Command::Difficulty(difficulty)) => {
                session.set_difficulty(difficulty);
                config.difficulty = difficulty;
                if let Err(error) = config::save_config(&args.config, &config) {
                    log!("Could not save config: {}", error);
                }
                println!("Difficulty set to {}.", difficulty);
            }
            Ok(Command::Moves(multiplier)) => {
                let moves = session.legal_moves(multiplier);
                println!("{}", render::render_legal_moves(multiplier, &moves));
            }
            Ok(Command::Move { multiplier, target }) => {
                play_turn(&mut session, multiplier, target);
            }
        }
    }

    Ok(())
}
