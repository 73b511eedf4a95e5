mod config;
mod render;

use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::{WrapErr, eyre};
use config::CubeConfig;
use cube_core::{
    CubeState, MoveToken, Observer, Session, StateFile, Step, Transition, view::Orientation,
};
use env_logger::TimestampPrecision;
use log::{LevelFilter, debug, info, warn};
use owo_colors::OwoColorize;

/// Plays moves on a 3x3x3 cube in the terminal
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file, in TOML format. See src/cli/cube_config.toml.
    #[arg(long, short = 'c', value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Turn the camera as if dragged by this many pixels (can be repeated)
    #[arg(
        long,
        value_name = "DX,DY",
        value_parser = parse_drag,
        allow_hyphen_values = true,
        global = true
    )]
    drag: Vec<(f64, f64)>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply moves without animating and print the result
    Apply {
        /// The moves to apply, e.g. "R U' F2". Invalid moves are skipped.
        moves: String,
        /// Start from this state file instead of a solved cube
        #[arg(long)]
        state: Option<PathBuf>,
    },
    /// Animate moves one at a time
    Play {
        /// The moves to play, e.g. "R U' F2". Invalid moves are skipped.
        moves: String,
        /// Start from this state file instead of a solved cube
        #[arg(long)]
        state: Option<PathBuf>,
    },
    /// Validate a state file
    Check {
        /// The state file, in TOML format
        file: PathBuf,
    },
    /// Write the solved state as a state file
    Solved {
        /// Where to write it; stdout if not given
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn parse_drag(s: &str) -> Result<(f64, f64), String> {
    let (dx, dy) = s
        .split_once(',')
        .ok_or_else(|| format!("expected DX,DY but got `{s}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid drag distance `{v}`: {e}"))
    };
    Ok((parse(dx)?, parse(dy)?))
}

/// Prints session notifications as they happen
struct Announcer {
    labels: bool,
    orientation: Orientation,
}

impl Observer for Announcer {
    fn move_finished(&mut self, token: MoveToken) {
        println!("move finished: {}", token.bold());
    }

    fn solved(&mut self) {
        println!("{}", "solved!".green().bold());
    }

    fn transition_started(&mut self, transition: &Transition) {
        println!("{} ({})", transition.token.bold(), transition.class.dimmed());
        print!(
            "{}",
            render::net(&transition.presented, self.labels, &self.orientation)
        );
    }
}

fn read_state_file(path: &Path) -> color_eyre::Result<StateFile> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read state file {}", path.display()))?;
    let file = toml::from_str::<StateFile>(&text)
        .wrap_err_with(|| format!("Failed to parse state file {}", path.display()))?;
    Ok(file)
}

/// A session starting from `state`, or from a solved cube
fn start<O: Observer>(observer: O, state: Option<&Path>) -> color_eyre::Result<Session<O>> {
    let mut session = Session::new(observer);
    if let Some(path) = state {
        session.set_state(&read_state_file(path)?.facelets)?;
    }
    Ok(session)
}

fn print_result(state: &CubeState, config: &CubeConfig) {
    print!(
        "{}",
        render::net(state, config.face_labels, &config.orientation)
    );
    if state.is_solved() {
        println!("{}", "solved".green());
    } else {
        println!("{}", "not solved".red());
    }
}

fn apply(config: &CubeConfig, moves: &str, state: Option<&Path>) -> color_eyre::Result<()> {
    let mut session = start((), state)?;
    let queued = session.enqueue_sequence(moves, true);
    if queued == 0 {
        warn!("No valid moves in {moves:?}");
    }
    session.run_until_blocked();

    print_result(session.state(), config);
    Ok(())
}

fn play(config: &CubeConfig, moves: &str, state: Option<&Path>) -> color_eyre::Result<()> {
    let announcer = Announcer {
        labels: config.face_labels,
        orientation: config.orientation,
    };
    let mut session = start(announcer, state)?;
    if session.enqueue_sequence(moves, false) == 0 {
        warn!("No valid moves in {moves:?}");
    }

    loop {
        match session.frame() {
            Step::Idle | Step::Drained { .. } => break,
            Step::Committed(_) => {}
            Step::Started(_) | Step::Blocked => {
                let Some(transition) = session.transition() else {
                    return Err(eyre!("Session is blocked without a pending transition"));
                };
                let wait = transition.class.duration(config.speed());
                debug!(target: "play", "Animating: token={} wait={wait:?}", transition.token);
                crossbeam_channel::after(wait).recv()?;
                session.transition_complete();
            }
        }
    }

    print_result(session.state(), config);
    Ok(())
}

fn check(config: &CubeConfig, file: &Path) -> color_eyre::Result<()> {
    let state = CubeState::from_records(&read_state_file(file)?.facelets)?;
    println!("{}", "valid".green());
    print_result(&state, config);
    Ok(())
}

fn solved(output: Option<&Path>) -> color_eyre::Result<()> {
    let file = StateFile {
        facelets: CubeState::solved().to_records(),
    };
    let text = toml::to_string(&file)?;

    match output {
        Some(path) => {
            fs::write(path, text)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote solved state to {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let mut config = CubeConfig::load(cli.config.as_deref())?;
    config.drag(&cli.drag);

    match cli.command {
        Commands::Apply { moves, state } => apply(&config, &moves, state.as_deref()),
        Commands::Play { moves, state } => play(&config, &moves, state.as_deref()),
        Commands::Check { file } => check(&config, &file),
        Commands::Solved { output } => solved(output.as_deref()),
    }
}
