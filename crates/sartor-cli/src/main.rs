//! Sartor CLI — garment draping, benchmarking, and catalog inspection.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "sartor")]
#[command(version, about = "Sartor — procedural garment draping core")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drape a garment and export the mesh as JSON.
    Drape {
        /// Garment style (casual, formal, sporty, elegant, bohemian).
        /// Unknown styles fall back to casual.
        #[arg(short, long, default_value = "casual")]
        style: String,

        /// Body scale.
        #[arg(long, default_value_t = 1.0)]
        scale: f32,

        /// Body build (slim, average, athletic, heavy).
        #[arg(long, default_value = "average")]
        build: String,

        /// Integration steps.
        #[arg(long)]
        steps: Option<u32>,

        /// RNG seed for reproducible wrinkles.
        #[arg(long)]
        seed: Option<u64>,

        /// Output JSON file path. Prints a summary only when omitted.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (casual_shirt, formal_dress,
        /// sporty_tee, elegant_drape, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List the built-in garment patterns.
    Patterns,

    /// List the built-in fabric classes.
    Fabrics,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Drape {
            style,
            scale,
            build,
            steps,
            seed,
            output,
        } => commands::drape(&style, scale, &build, steps, seed, output.as_deref()),
        Commands::Benchmark { scenario, output } => {
            commands::benchmark(&scenario, output.as_deref())
        }
        Commands::Patterns => commands::patterns(),
        Commands::Fabrics => commands::fabrics(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
