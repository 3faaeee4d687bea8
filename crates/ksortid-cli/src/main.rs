//! CLI for ksortid: short, URL-safe, time-sortable IDs.

mod commands;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ksortid")]
#[command(about = "ksortid: short, URL-safe, time-sortable IDs from a pooled CSPRNG")]
#[command(version = ksortid_core::VERSION)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print time-sortable IDs: 8-character timestamp followed by random characters
    Sort {
        /// Total ID length, including the 8-character timestamp (default: 20)
        #[arg(long, short)]
        length: Option<usize>,

        /// Number of IDs to print
        #[arg(long, short = 'n', default_value = "1")]
        count: usize,

        /// JSON config file (pool_size, length, random_length)
        #[arg(long)]
        config: Option<String>,

        /// Entropy pool size in bytes (default: 4096)
        #[arg(long)]
        pool_size: Option<usize>,
    },

    /// Print purely random IDs (nanoid-style)
    Random {
        /// ID length (default: 21)
        #[arg(long, short)]
        length: Option<usize>,

        /// Number of IDs to print
        #[arg(long, short = 'n', default_value = "1")]
        count: usize,

        /// JSON config file (pool_size, length, random_length)
        #[arg(long)]
        config: Option<String>,

        /// Entropy pool size in bytes (default: 4096)
        #[arg(long)]
        pool_size: Option<usize>,
    },

    /// Decode the timestamp and random suffix of a sortable ID
    Inspect {
        /// A sortable ID produced by `ksortid sort`
        id: String,
    },

    /// Throughput against uuid v4 and nanoid, plus pool and distribution stats
    Bench {
        /// Iterations per generator
        #[arg(long, default_value = "100000")]
        iterations: usize,

        /// Entropy pool size in bytes
        #[arg(long, default_value = "4096")]
        pool_size: usize,

        /// Write a machine-readable report as JSON
        #[arg(long)]
        output: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Sort {
            length,
            count,
            config,
            pool_size,
        } => {
            let config = commands::load_config(
                config.as_deref(),
                &commands::Overrides {
                    length,
                    pool_size,
                    ..Default::default()
                },
            );
            commands::sort::run(&config, count);
        }
        Commands::Random {
            length,
            count,
            config,
            pool_size,
        } => {
            let config = commands::load_config(
                config.as_deref(),
                &commands::Overrides {
                    random_length: length,
                    pool_size,
                    ..Default::default()
                },
            );
            commands::random::run(&config, count);
        }
        Commands::Inspect { id } => commands::inspect::run(&id),
        Commands::Bench {
            iterations,
            pool_size,
            output,
        } => commands::bench::run(commands::bench::BenchCommandConfig {
            iterations,
            pool_size,
            output_path: output.as_deref(),
        }),
    }
}
