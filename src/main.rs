use clap::{ArgAction, Parser, ValueEnum};
use eyre::Result;
use tracing::{Level, debug};
use vitrine::{archived, catalog, display, export};

#[derive(Parser)]
#[command(author, version, about = "Print the showcased project catalog")]
struct Options {
    /// Print the superseded catalog revision instead of the current one
    #[arg(long)]
    archived: bool,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Set verbosity level
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    Csv,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    let level = match options.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();
    let catalog = if options.archived { archived() } else { catalog() };
    debug!(
        records = catalog.len(),
        archived = options.archived,
        "emitting catalog"
    );
    match options.format {
        Format::Text => display::display_catalog(catalog),
        Format::Json => println!("{}", export::to_json(catalog)?),
        Format::Csv => export::to_csv(catalog, std::io::stdout())?,
    }
    Ok(())
}
