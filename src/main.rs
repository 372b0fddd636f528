use clap::Parser;
use dayone_to_jrnl::utils::{load_file_config, resolve_config};
use eyre::Result;
use std::path::PathBuf;

/// Convert a Day One journal export (JSON) to jrnl format.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Day One export file (Journal.json). Photos are read from the
    /// `photos` folder next to it.
    #[arg(value_name = "SOURCE_FILE")]
    source: PathBuf,

    /// Directory holding the jrnl file. Must already exist.
    /// Falls back to `target_dir` from the config file.
    #[arg(value_name = "TARGET_DIR")]
    target_dir: Option<PathBuf>,

    /// Name of the journal file inside TARGET_DIR.
    /// Defaults to journal.txt if not set in config.
    #[arg(long, value_name = "NAME")]
    journal_name: Option<String>,

    /// Path to a specific configuration file.
    /// Defaults to $XDG_CONFIG_HOME/dayone-to-jrnl/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print each entry written and each photo not found.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress standard output (progress bar and summary).
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load config file (CLI path > default path)
    let file_cfg = load_file_config(cli.config.as_deref())?;

    // 2. Resolve target_dir and journal name (CLI > Config > Default)
    let mut config = resolve_config(cli.source, cli.target_dir, cli.journal_name, file_cfg)?;
    config.verbose = cli.verbose;
    config.quiet = cli.quiet;

    // 3. Run the conversion
    dayone_to_jrnl::execute(config)?;
    Ok(())
}
