mod generator;
mod inspect;
mod listing;
mod logger;
mod stats;
mod throughput;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "qhal", about = "Tools for HAL command streams")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a listing into a word file
    Asm {
        #[arg(short, long)]
        input: String,
        #[arg(short, long, default_value = "out.bin")]
        output: String,
    },
    /// Print the listing for a word file
    Disasm {
        #[arg(short, long)]
        input: String,
        /// Prefix each line with the raw word
        #[arg(long)]
        hex: bool,
    },
    /// Break a single word into its fields
    Explain {
        /// Decimal or 0x-prefixed hex
        word: String,
    },
    /// List the opcode registry
    Opcodes,
    /// Write a word file of random valid commands
    Gen {
        #[arg(short, long, default_value = "bench.bin")]
        output: String,
        #[arg(short, long, default_value_t = 100_000)]
        count: usize,
        #[arg(short, long, default_value_t = 12345)]
        seed: u64,
        #[arg(long)]
        dual_only: bool,
    },
    /// Measure decode/encode throughput over a word file
    Bench {
        #[arg(short, long)]
        input: String,
        #[arg(short, long, default_value_t = 10)]
        rounds: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::configure(cli.verbose)?;

    match cli.command {
        Commands::Asm { input, output } => {
            listing::assemble(&input, &output)?;
        }
        Commands::Disasm { input, hex } => {
            listing::disassemble(&input, hex)?;
        }
        Commands::Explain { word } => {
            inspect::explain(&word)?;
        }
        Commands::Opcodes => {
            inspect::list_opcodes();
        }
        Commands::Gen {
            output,
            count,
            seed,
            dual_only,
        } => {
            generator::generate_word_file(&output, count, seed, dual_only)?;
        }
        Commands::Bench { input, rounds } => {
            throughput::run_benchmark(&input, rounds)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from(["qhal", "-vv", "gen", "--count", "10", "--dual-only"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Gen {
                count, dual_only, ..
            } => {
                assert_eq!(count, 10);
                assert!(dual_only);
            }
            _ => panic!("expected gen"),
        }
    }
}
