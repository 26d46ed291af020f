mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "pdfcmp",
    version,
    about = "Compare a generated PDF against its original, line by line"
)]
struct Cli {
    /// Log debug detail to stderr (overridden by RUST_LOG)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match every generated line to an original line and report the differences
    Compare {
        /// Original PDF, or a JSON extraction saved by `pdfcmp extract --out`
        original: PathBuf,

        /// Generated PDF, or a saved JSON extraction
        generated: PathBuf,

        #[command(flatten)]
        options: commands::compare::OptionFlags,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the full result (rows, summary, highlights) to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// List matching lines too, not just mismatches
        #[arg(long)]
        show_all: bool,
    },
    /// Compare word content only, ignoring layout and order
    Content {
        /// Original PDF or saved JSON extraction
        original: PathBuf,

        /// Generated PDF or saved JSON extraction
        generated: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Extract positioned lines from a PDF (without comparing)
    Extract {
        /// Path to PDF file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the extraction to a JSON file for later `compare`
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Inspect and validate comparison profiles
    Presets {
        #[command(subcommand)]
        action: PresetsAction,
    },
}

#[derive(Subcommand)]
enum PresetsAction {
    /// List predefined profiles
    List,
    /// Show the options of a predefined profile
    Show {
        /// Preset name (e.g., "strict")
        preset: String,
    },
    /// Validate a custom profile file
    Validate {
        /// Path to JSON profile file
        file: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "pdfcmp=debug" } else { "pdfcmp=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Compare {
            original,
            generated,
            options,
            output,
            out,
            show_all,
        } => commands::compare::run(&original, &generated, &options, &output, out, show_all),
        Commands::Content {
            original,
            generated,
            output,
        } => commands::content::run(&original, &generated, &output),
        Commands::Extract {
            input_file,
            output,
            out,
        } => commands::extract::run(&input_file, &output, out),
        Commands::Presets { action } => match action {
            PresetsAction::List => commands::presets::list(),
            PresetsAction::Show { preset } => commands::presets::show(&preset),
            PresetsAction::Validate { file } => commands::presets::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
