//! oncotree-translate: map OncoTree codes in a clinical file from one
//! OncoTree version to another.

mod config;
mod translate;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use config::TranslatorConfig;
use translate::TranslateRequest;

#[derive(Parser)]
#[command(
    name = "oncotree-translate",
    version,
    about = "Translate OncoTree codes between OncoTree versions"
)]
struct Cli {
    /// Source file provided by the user
    #[arg(short = 'i', long)]
    input_file: PathBuf,
    /// Destination file for the translated contents
    #[arg(short = 'o', long)]
    output_file: PathBuf,
    /// OncoTree version used in the source file
    #[arg(short = 's', long)]
    source_version: String,
    /// OncoTree version to map to in the destination file
    #[arg(short = 't', long)]
    target_version: String,
    /// Enable automatic resolution of ambiguous mappings
    #[arg(short = 'a', long)]
    auto_mapping_enabled: bool,
    /// Column holding the OncoTree codes (default: ONCOTREE_CODE)
    #[arg(long)]
    code_column: Option<String>,
    /// OncoTree API base URL
    #[arg(long, env = "ONCOTREE_API_URL")]
    api_url: Option<String>,
    /// Read versions.json and tumor_types/<version>.json from this directory instead of the API
    #[arg(long)]
    offline_dir: Option<PathBuf>,
    /// Config file (default: oncotree-translate.toml, searched upward)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log debug detail for every translated code
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,
    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(cli: &Cli) {
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => TranslatorConfig::load(path)?,
        None => {
            let cwd = std::env::current_dir()?;
            match TranslatorConfig::find_and_load(&cwd)? {
                Some((config, path)) => {
                    tracing::debug!(path = %path.display(), "using config file");
                    config
                }
                None => TranslatorConfig::default(),
            }
        }
    };

    let request = TranslateRequest {
        input_file: cli.input_file,
        output_file: cli.output_file,
        source_version: cli.source_version,
        target_version: cli.target_version,
        auto_mapping: cli.auto_mapping_enabled || config.resolution.auto.unwrap_or(false),
        code_column: cli.code_column,
        api_url: cli.api_url,
        offline_dir: cli.offline_dir,
    };

    let summary = translate::run(&request, &config)?;
    println!(
        "Wrote {} records to {}",
        summary.total(),
        request.output_file.display()
    );
    if summary.needs_review() > 0 {
        println!(
            "{} records need review (search the output for \"Choose from\" or \"manually mapped\")",
            summary.needs_review()
        );
    }
    Ok(())
}
