#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::fs::File;
#[cfg(feature = "std")]
use std::io::{self, BufReader};
#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use toy_robot::{init_logging_with, Session, GRID_SIZE};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Command file to run. Reads standard input when absent or `-`.
    input: Option<PathBuf>,
    /// Do not print the interactive banner.
    #[arg(long, short)]
    quiet: bool,
    #[arg(long, value_enum, help = "Overrides the TOY_ROBOT_LOG environment variable")]
    log_level: Option<LogLevel>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[cfg(feature = "std")]
impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging_with(cli.log_level.map(Into::into));

    let mut session = Session::new();
    let stdout = io::stdout();

    let summary = match cli.input.filter(|p| p.as_os_str() != "-") {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            log::info!("reading commands from {}", path.display());
            session.run(BufReader::new(file), stdout.lock())?
        }
        None => {
            if !cli.quiet {
                println!("Toy Robot - enter commands ('EXIT' to quit):");
                log::debug!("grid is {}x{}", GRID_SIZE, GRID_SIZE);
            }
            session.run(io::stdin().lock(), stdout.lock())?
        }
    };

    log::debug!("final board:\n{}", session.board());
    log::debug!("{:?}", summary);
    Ok(())
}
