use anyhow::Result;
use catalog::Catalog;
use clap::Parser;
use kitchen::Kitchen;
use settings::{Mode, Settings};
use std::io::{self, BufRead, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cook;
mod kitchen;
mod recipe;
mod settings;
mod setup;

/// Cooks learn random recipes from a fixed catalog, then show what they know
#[derive(Parser, Debug)]
#[command(name = "recipe-kitchen", version)]
struct Cli {
    /// Hardcoded cooks, or cooks entered on stdin
    #[arg(short, long, value_enum, default_value_t = Mode::Classic)]
    mode: Mode,

    /// Distinct recipes each cook learns (defaults to 2 classic, 3 interactive)
    #[arg(short, long, value_name = "N")]
    target: Option<usize>,

    /// Print the simple/complex summary even in classic mode
    #[arg(long)]
    complexity: bool,

    /// Seed the random source for a reproducible run
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Verbosity level on stderr (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Mode defaults with the command-line overrides applied, checked
    /// against the catalog before any cook is entered.
    fn settings(&self, catalog: &Catalog) -> Result<Settings> {
        let mut settings = Settings::for_mode(self.mode);
        if let Some(target) = self.target {
            settings = settings.with_target(target);
        }
        if self.complexity {
            settings = settings.with_complexity_report();
        }
        if let Some(seed) = self.seed {
            settings = settings.with_seed(seed);
        }
        settings.validate(catalog)?;
        Ok(settings)
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run<R: BufRead, W: Write>(cli: &Cli, input: R, mut out: W) -> Result<()> {
    let catalog = Catalog::standard();
    let settings = cli.settings(&catalog)?;
    let cooks = match settings.mode {
        Mode::Classic => kitchen::classic_cooks(),
        Mode::Interactive => setup::read_cooks(input, &mut out)?,
    };

    let mut kitchen = Kitchen::with_catalog(catalog, cooks, settings, out);
    kitchen.run()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("{:?}", cli);

    run(&cli, io::stdin().lock(), io::stdout().lock())
}
