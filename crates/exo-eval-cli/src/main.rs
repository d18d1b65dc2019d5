//! exo-eval CLI - Payroll-relief schedule comparison tool

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

/// Payroll-tax relief schedule comparison and chart rendering tool.
#[derive(Parser)]
#[command(name = "exo-eval")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render comparison charts (all schemes by default)
    Render {
        /// Output directory for the SVG files
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Render only these schemes (e.g. ZRR DFPE)
        #[arg(long)]
        scheme: Vec<String>,

        /// Chart theme (dss or igf)
        #[arg(long, default_value = "dss")]
        theme: String,

        /// Also write gaps.json and gaps.csv next to the charts
        #[arg(long)]
        with_report: bool,
    },

    /// Print the threshold gap table
    Gaps {
        /// Write the report as pretty JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,

        /// Write the report as CSV to this path
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// List the targeted schemes
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // Without a subcommand, render every chart with defaults into the
        // working directory.
        None => commands::render::run(PathBuf::from("."), Vec::new(), "dss", false, cli.verbose),
        Some(Commands::Render {
            out_dir,
            scheme,
            theme,
            with_report,
        }) => commands::render::run(out_dir, scheme, &theme, with_report, cli.verbose),
        Some(Commands::Gaps { json, csv }) => commands::gaps::run(json, csv, cli.verbose),
        Some(Commands::List) => commands::list::run(cli.verbose),
    }
}
