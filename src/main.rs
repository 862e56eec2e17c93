use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use prodex::{AppError, Config, NameOrdering};

#[derive(Parser)]
#[command(name = "prodex")]
#[command(version)]
#[command(about = "Interactive product catalog with key-selectable sort and search", long_about = None)]
struct Cli {
    /// Flat-text data file to load (overrides prodex.toml)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Name comparison policy: "first-char" (reference behavior) or "full"
    #[arg(long, value_name = "MODE")]
    name_ordering: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = Config::load(Path::new("."))?;
    if let Some(data) = cli.data {
        config.data = data;
    }
    if let Some(mode) = cli.name_ordering.as_deref() {
        config.name_ordering = match mode {
            "first-char" => NameOrdering::FirstChar,
            "full" => NameOrdering::Full,
            other => {
                return Err(AppError::Configuration(format!(
                    "unknown name ordering '{other}': expected first-char or full"
                )));
            }
        };
    }

    let mut input = io::stdin().lock();
    let mut output = io::stdout();
    prodex::run(&config, &mut input, &mut output)
}
