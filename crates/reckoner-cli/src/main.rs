//! Reckoner CLI - calculator, curve sampler and molar mass tool

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reckoner::prelude::*;
use reckoner::DEFAULT_SAMPLE_POINTS;
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "reckon")]
#[command(
    author,
    version,
    about = "Evaluate arithmetic, sample curves and compute molar masses"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate keypad arithmetic the way a basic calculator displays it
    Basic {
        /// Expression using digits, + - * / ( ) . and %
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },

    /// Evaluate a scientific expression
    Eval {
        /// Expression with functions, constants and ^
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// Value bound to the variable x
        #[arg(long, allow_negative_numbers = true)]
        x: Option<f64>,
    },

    /// Sample an expression in x over a domain
    Plot {
        /// Expression in x, e.g. "sin(x)"
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// Lower bound of the domain
        #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
        min: f64,

        /// Upper bound of the domain
        #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
        max: f64,

        /// Number of evenly spaced points
        #[arg(short, long, default_value_t = DEFAULT_SAMPLE_POINTS)]
        points: usize,

        /// Emit JSON instead of tab-separated lines
        #[arg(long)]
        json: bool,
    },

    /// Compute the molar mass of a chemical formula
    Molar {
        /// Formula such as H2O or Al2(SO4)3
        formula: String,

        /// Reject characters and counts outside the formula grammar
        #[arg(long)]
        strict: bool,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Basic { expression } => {
            println!("{}", evaluate_arithmetic(&expression));
            Ok(())
        }
        Commands::Eval { expression, x } => eval(&expression, x),
        Commands::Plot {
            expression,
            min,
            max,
            points,
            json,
        } => plot(&expression, min, max, points, json),
        Commands::Molar {
            formula,
            strict,
            json,
        } => molar(&formula, strict, json),
    }
}

fn eval(expression: &str, x: Option<f64>) -> Result<()> {
    let value = match x {
        Some(x) => parse_and_evaluate_at(expression, x),
        None => parse_and_evaluate(expression),
    }
    .with_context(|| format!("Failed to evaluate '{}'", expression))?;

    println!("{}", value);
    Ok(())
}

fn plot(expression: &str, min: f64, max: f64, points: usize, json: bool) -> Result<()> {
    let curve = sample_curve(expression, min, max, points)
        .with_context(|| format!("Failed to sample '{}' over [{}, {}]", expression, min, max))?;

    let gaps = curve.iter().filter(|s| s.is_gap()).count();
    if gaps > 0 {
        log::info!("{} of {} points are undefined", gaps, curve.len());
    }

    let mut output = String::new();
    if json {
        output = serde_json::to_string_pretty(&curve).context("Failed to encode samples")?;
        output.push('\n');
    } else {
        for sample in &curve {
            if sample.is_gap() {
                output.push_str(&format!("{}\t\n", sample.x));
            } else {
                output.push_str(&format!("{}\t{}\n", sample.x, sample.y));
            }
        }
    }

    io::stdout()
        .write_all(output.as_bytes())
        .context("Failed to write to stdout")?;
    Ok(())
}

fn molar(formula: &str, strict: bool, json: bool) -> Result<()> {
    let options = if strict {
        FormulaOptions::strict()
    } else {
        FormulaOptions::default()
    };
    let mass = molar_mass_with(formula, &options)
        .with_context(|| format!("Failed to compute molar mass of '{}'", formula))?;

    if json {
        let text = serde_json::to_string_pretty(&mass).context("Failed to encode molar mass")?;
        println!("{}", text);
        return Ok(());
    }

    print_breakdown(&mass);
    Ok(())
}

fn print_breakdown(mass: &MolarMass) {
    println!(
        "{:<8}{:>8}{:>14}{:>14}",
        "Element", "Count", "g/mol", "Subtotal"
    );
    for entry in &mass.breakdown {
        println!(
            "{:<8}{:>8}{:>14.3}{:>14.3}",
            entry.element, entry.count, entry.atomic_mass, entry.contribution
        );
    }
    println!("Total: {:.3} g/mol", mass.total);
}
