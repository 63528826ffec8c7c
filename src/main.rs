mod app;
mod command;
mod config;
mod consts;
mod game;
mod leaderboard;
mod logging;
mod menu;
mod options;
mod ui;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::game::Game;
use crate::leaderboard::Leaderboard;
use anyhow::Context;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

static USAGE: &str = "\
Usage: snake-eater [<options>]

Play Snake on a wraparound board

Options:
  --config <FILE>       Read configuration from the given file
  --scores-file <FILE>  Store the leaderboard in the given file
  --log-file <FILE>     Write logs to the given file
  --no-scoreboard       Don't keep a leaderboard
  -h, --help            Show this help and exit
  -V, --version         Show the program version and exit
";

/// What the command line asked for
#[derive(Clone, Debug, Eq, PartialEq)]
enum Mode {
    Run(Arguments),
    Help,
    Version,
}

/// Command-line settings, which take precedence over the configuration file
#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    scores_file: Option<PathBuf>,
    log_file: Option<PathBuf>,
    no_scoreboard: bool,
}

impl Mode {
    fn from_parser(mut parser: Parser) -> Result<Mode, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Long("config") => args.config = Some(PathBuf::from(parser.value()?)),
                Arg::Long("scores-file") => {
                    args.scores_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Long("no-scoreboard") => args.no_scoreboard = true,
                Arg::Short('h') | Arg::Long("help") => return Ok(Mode::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Mode::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Mode::Run(args))
    }
}

fn main() -> ExitCode {
    match Mode::from_parser(Parser::from_env()) {
        Ok(Mode::Run(args)) => match run(args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("snake-eater: {e:?}");
                ExitCode::from(2)
            }
        },
        Ok(Mode::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Mode::Version) => {
            println!("snake-eater {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("snake-eater: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    let default_config = Config::default_path();
    let config = match args.config {
        Some(ref path) => Config::load(path, false),
        None => Config::load_default(default_config.as_deref()),
    }
    .context("failed to load configuration")?;
    let mut options = config.game;
    if args.no_scoreboard {
        options.scoreboard = false;
    }

    if let Some(path) = args.log_file.or_else(|| config.log_file()) {
        if let Err(e) = logging::init(&path) {
            eprintln!("snake-eater: logging disabled: {e:#}");
        }
    }
    tracing::info!(?options, "Starting snake-eater {}", env!("CARGO_PKG_VERSION"));
    if args.config.is_none() && default_config.is_none() {
        tracing::warn!("Could not determine configuration directory; using default configuration");
    }

    let leaderboard = if !options.scoreboard {
        Leaderboard::in_memory()
    } else if let Some(path) = args.scores_file.or_else(|| config.scores_file()) {
        tracing::info!(path = %path.display(), "Loading leaderboard");
        Leaderboard::load(path)
    } else {
        tracing::warn!("Could not determine leaderboard path; scores will not be saved");
        Leaderboard::in_memory()
    };
    let game = Game::new(options, leaderboard);

    let terminal = ratatui::init();
    let r = crossterm::execute!(io::stdout(), EnableMouseCapture)
        .and_then(|()| App::new(game).run(terminal));
    if let Err(e) = crossterm::execute!(io::stdout(), DisableMouseCapture) {
        tracing::warn!("Failed to disable mouse capture: {e}");
    }
    ratatui::restore();
    match r {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        r => r.context("terminal I/O failed"),
    }
}
