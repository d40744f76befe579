mod batch;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use log::LevelFilter;
use notation_converter::converter::notation::Notation;
use notation_converter::converter::{convert, is_valid};
use std::path::PathBuf;
use std::process;

/// Converts arithmetic expressions between infix, prefix and postfix notation
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    #[clap(flatten)]
    verbose: Verbosity,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Converts an expression into another notation
    Convert {
        /// The expression to convert
        expression: String,
        /// The notation the expression is written in
        #[clap(short, long)]
        from: Notation,
        /// The notation to convert into, both other notations if omitted
        #[clap(short, long)]
        to: Option<Notation>,
    },
    /// Checks whether an expression is well-formed
    Validate {
        /// The expression to check
        expression: String,
        /// The notation the expression should be written in
        #[clap(short, long)]
        notation: Notation,
    },
    /// Converts every expression in a directory of infix, prefix and postfix files
    Batch {
        /// Directory with .txt files named after the notation they hold
        input_dir: PathBuf,
        /// Directory to write one converted file per input file into
        #[clap(short, long)]
        output_dir: Option<PathBuf>,
        /// File to write a log of every failed conversion into
        #[clap(short, long)]
        error_log: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    init_logger(&args.verbose);

    match args.command {
        Command::Convert {
            expression,
            from,
            to,
        } => match to {
            Some(to) => println!("{}", convert_expression(&expression, from, to)?),
            None => {
                for to in from.others() {
                    println!("{}: {}", to, convert_expression(&expression, from, to)?);
                }
            }
        },
        Command::Validate {
            expression,
            notation,
        } => {
            let valid = is_valid(&expression, notation);
            println!("{}", valid);
            if !valid {
                process::exit(1);
            }
        }
        Command::Batch {
            input_dir,
            output_dir,
            error_log,
        } => batch::run(&input_dir, output_dir.as_deref(), error_log.as_deref())?,
    }

    Ok(())
}

fn convert_expression(expression: &str, from: Notation, to: Notation) -> Result<String> {
    convert(expression, from, to)
        .with_context(|| format!("could not convert {:?} from {} to {}", expression, from, to))
}

fn init_logger(verbose: &Verbosity) {
    let level = verbose
        .log_level()
        .map_or(LevelFilter::Off, |level| level.to_level_filter());
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
