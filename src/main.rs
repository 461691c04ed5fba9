//! # permid CLI
//!
//! Command-line interface for encoding and decoding permuted IDs.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use permid::{
    commands::{self, DecodeArgs, EncodeArgs, InitArgs, StreamArgs},
    ui,
};

const GLOBAL_HELP: &str = "\
Configuration Files:
  ~/.config/permid/config   Global parameters (exponent, prime_p, prime_q)
  .permid                   Project parameters (searched upward, override global)

Parameters:
  IDs are base32(counter^E mod N) with N = prime_p * prime_q.
  An ID only decodes with the exponent and primes that produced it.

Getting Started:
  permid encode 1 2 3            Print IDs for counters 1, 2 and 3
  permid decode K61PVA0          Recover the counter behind an ID
  permid stream --count 10       Print the first ten IDs
  permid init --random-exponent  Pin a private exponent for this project

Learn more:
  permid <COMMAND> --help        Show detailed help for a command";

#[derive(Parser)]
#[command(name = "permid")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Short, non-sequential, reversible IDs from integer counters")]
#[command(
    long_about = "permid turns a monotonically increasing counter into a short, URL-safe ID. \
Counters are scrambled with a modular exponentiation bijection (x^E mod N) and written \
as 7 base-32 characters, so consecutive counters yield unrelated-looking IDs that still \
decode back to exactly one counter.

This is obfuscation, not encryption: anyone holding the parameters can reverse an ID."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Parameter override shared by the commands that build a codec
#[derive(Args)]
struct ExponentArg {
    /// Public exponent to use instead of the configured one
    #[arg(long, value_name = "E")]
    exponent: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode counters into IDs
    #[command(
        long_about = "Encode one or more counters into IDs, printed one per line.\n\n\
Counters must lie in [0, N). Counters 0 and 1 map to themselves and therefore \
encode to 0000000 and 1000000.",
        after_help = "Examples:\n  \
permid encode 42\n  \
permid encode 1 2 3\n  \
permid encode 42 --exponent 65537"
    )]
    Encode {
        /// Counters to encode
        #[arg(required = true, value_name = "COUNTER")]
        counters: Vec<u64>,

        #[command(flatten)]
        params: ExponentArg,
    },

    /// Decode IDs back into counters
    #[command(
        long_about = "Decode one or more IDs back into their counters, printed one per line.\n\n\
IDs must be exactly 7 characters from the permid alphabet. Lowercase input is accepted.",
        after_help = "Examples:\n  \
permid decode K61PVA0\n  \
permid decode k61pva0 BWQRPZ0"
    )]
    Decode {
        /// IDs to decode
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,

        #[command(flatten)]
        params: ExponentArg,
    },

    /// Stream IDs for consecutive counters
    #[command(
        long_about = "Print IDs for consecutive counters starting at --start.\n\n\
Runs until --count IDs were printed, the counter domain is exhausted, or the output \
is closed.",
        after_help = "Examples:\n  \
permid stream --count 10\n  \
permid stream --start 1000 --count 5\n  \
permid stream | head -n 3"
    )]
    Stream {
        /// First counter
        #[arg(long, default_value_t = 1)]
        start: u64,

        /// Number of IDs to print
        #[arg(long)]
        count: Option<u64>,

        #[command(flatten)]
        params: ExponentArg,
    },

    /// Show the effective parameters
    Params {
        #[command(flatten)]
        params: ExponentArg,
    },

    /// Pin parameters for the current directory
    #[command(
        long_about = "Write a .permid file pinning the exponent and primes for this project.\n\n\
Every permid command run below this directory uses the pinned parameters.",
        after_help = "Examples:\n  \
permid init\n  \
permid init --random-exponent\n  \
permid init --exponent 65537"
    )]
    Init {
        /// Pick a random exponent coprime with the totient
        #[arg(long)]
        random_exponent: bool,

        /// Overwrite an existing .permid file
        #[arg(long)]
        force: bool,

        #[command(flatten)]
        params: ExponentArg,
    },

    /// Create the global configuration file
    Setup,

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        ui::error(&err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { counters, params } => commands::encode(&EncodeArgs {
            counters,
            exponent: params.exponent,
        }),

        Commands::Decode { ids, params } => commands::decode(&DecodeArgs {
            ids,
            exponent: params.exponent,
        }),

        Commands::Stream {
            start,
            count,
            params,
        } => commands::stream(&StreamArgs {
            start,
            count,
            exponent: params.exponent,
        }),

        Commands::Params { params } => commands::params(params.exponent),

        Commands::Init {
            random_exponent,
            force,
            params,
        } => {
            let exponent = params.exponent;
            if random_exponent && exponent.is_some() {
                anyhow::bail!("--random-exponent cannot be combined with --exponent");
            }
            commands::init(InitArgs {
                exponent,
                random_exponent,
                force,
            })
        }

        Commands::Setup => commands::setup(),

        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),
    }
}
