use clap::{Parser, Subcommand};

use elbonian_cli::commands::{batch_ops, convert_ops};

#[derive(Parser)]
#[command(name = "elbtool", about = "Elbonian numeral conversion diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a single value between Arabic and Elbonian
    Convert {
        /// The value, in either representation
        input: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Validate an input and report the rule it violates, if any
    Check {
        /// The value to check
        input: String,
    },

    /// Convert inputs from a file (one per line) to JSONL records
    Batch {
        /// Path to the input file
        input_file: String,
        /// Path to the output JSONL file
        output_file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Command::Convert { input, json } => convert_ops::convert_cmd(&input, json),
        Command::Check { input } => convert_ops::check_cmd(&input),
        Command::Batch {
            input_file,
            output_file,
        } => batch_ops::batch_cmd(&input_file, &output_file),
    }
}
