use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod listing;

use commands::{IndexArgs, SearchArgs};

#[derive(Parser)]
#[command(name = "symref-cmd")]
#[command(about = "Command-line utility for symbol usage queries")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find documents referring to a class
    Usages {
        #[command(flatten)]
        index: IndexArgs,

        #[command(flatten)]
        search: SearchArgs,

        /// Binary name of the referenced class, e.g. java.util.Map$Entry
        name: String,
    },

    /// Find documents referring to any class declared directly in a package
    PackageUsages {
        #[command(flatten)]
        index: IndexArgs,

        #[command(flatten)]
        search: SearchArgs,

        /// Package name; an empty string selects the unnamed package
        package: String,
    },

    /// List the package names stored in the index
    Packages {
        #[command(flatten)]
        index: IndexArgs,

        /// Only list packages starting with this prefix
        #[arg(long)]
        prefix: Option<String>,

        /// Report names only down to the first level below the prefix
        #[arg(long)]
        direct_only: bool,
    },

    /// Display summary information about an index listing
    Inspect {
        #[command(flatten)]
        index: IndexArgs,

        /// Increase verbosity (-v lists every term with its document frequency)
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "symref=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Usages {
            index,
            search,
            name,
        } => commands::usages::run(index, search, name),
        Commands::PackageUsages {
            index,
            search,
            package,
        } => commands::usages::run_package(index, search, package),
        Commands::Packages {
            index,
            prefix,
            direct_only,
        } => commands::packages::run(index, prefix, direct_only),
        Commands::Inspect { index, verbose } => commands::inspect::run(index, verbose),
    }
}
