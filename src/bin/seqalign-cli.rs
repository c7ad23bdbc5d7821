//! CLI tool for computing edit distances and alignments between strings.
//!
//! This binary provides a command-line interface to the seqalign library:
//! `distance` prints the minimum edit cost between two strings, `align`
//! additionally renders the optimal edit script diff-style.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use seqalign::prelude::*;

#[derive(Parser)]
#[command(name = "seqalign")]
#[command(about = "Sequence edit distance and alignment", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the minimum edit cost between two strings
    Distance {
        /// Source string
        source: String,

        /// Target string
        target: String,

        /// Permit substitution edits (otherwise delete + insert)
        #[arg(short = 's', long)]
        allow_sub: bool,

        /// Prune positions further than this from the main diagonal
        #[arg(short, long)]
        beam: Option<usize>,
    },

    /// Print the optimal edit script, diff-style
    Align {
        /// Source string
        source: String,

        /// Target string
        target: String,

        /// Permit substitution edits (otherwise delete + insert)
        #[arg(short = 's', long)]
        allow_sub: bool,

        /// Prune positions further than this from the main diagonal
        #[arg(short, long)]
        beam: Option<usize>,

        /// Include per-edit costs in the output
        #[arg(long)]
        with_cost: bool,
    },
}

fn build_config(allow_sub: bool, beam: Option<usize>) -> AlignConfig {
    let mut config = AlignConfig::new().allow_sub(allow_sub);
    if let Some(width) = beam {
        config = config.edit_beam(width);
    }
    config
}

fn render_op(op: &EditOp<char, char, usize>, with_cost: bool) -> String {
    match op {
        EditOp::Eql(a, _) => format!("  {a}"),
        EditOp::Ins(b, c) => {
            let line = format!("+ {b}");
            if with_cost {
                format!("{line}  ({c})").green().to_string()
            } else {
                line.green().to_string()
            }
        }
        EditOp::Del(a, c) => {
            let line = format!("- {a}");
            if with_cost {
                format!("{line}  ({c})").red().to_string()
            } else {
                line.red().to_string()
            }
        }
        EditOp::Sub(a, b, c) => {
            let line = format!("~ {a} -> {b}");
            if with_cost {
                format!("{line}  ({c})").yellow().to_string()
            } else {
                line.yellow().to_string()
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Distance {
            source,
            target,
            allow_sub,
            beam,
        } => {
            let a: Vec<char> = source.chars().collect();
            let b: Vec<char> = target.chars().collect();
            let config = build_config(allow_sub, beam);

            let cost = edit_distance(&a, &b, &UnitCost, &config)?;
            println!("{cost}");
        }
        Commands::Align {
            source,
            target,
            allow_sub,
            beam,
            with_cost,
        } => {
            let a: Vec<char> = source.chars().collect();
            let b: Vec<char> = target.chars().collect();
            let config = build_config(allow_sub, beam);

            let mut sink = ScriptSink::new();
            let cost = edit_alignment(&a, &b, &mut sink, &UnitCost, &config)?;

            for op in sink.ops() {
                println!("{}", render_op(op, with_cost));
            }
            println!("total cost: {}", cost.to_string().bold());
        }
    }

    Ok(())
}
