//! Misura CLI
//!
//! Commands:
//! - convert: Convert an amount between two units of the same category
//! - units: List known units, grouped by category
//! - info: Show metadata for a single unit
//!
//! `--json` switches any command to machine-readable output. Diagnostics
//! go to stderr; set RUST_LOG to adjust verbosity.

use std::env;
use std::process::ExitCode;

use misura_tool::{approx_line, format_value, parse_amount};
use misura_units::{convert, Unit, UNITS};
use serde::Serialize;
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Serialize)]
struct ConvertOutput {
    amount: f64,
    from: &'static str,
    to: &'static str,
    value: f64,
    ratio: f64,
}

fn usage() -> ExitCode {
    eprintln!("misura v{VERSION} - recipe unit converter");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  misura convert <amount> <from> <to> [--json]");
    eprintln!("  misura units [category] [--json]");
    eprintln!("  misura info <unit> [--json]");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  misura convert 1 cup ml");
    eprintln!("  misura convert 100 g kg --json");
    eprintln!("  misura units volume");
    ExitCode::from(2)
}

/// Resolve a user-supplied unit id or alias, reporting unknown ids as a
/// recoverable error rather than the registry's fail-fast panic.
fn resolve_unit(id: &str) -> Result<&'static Unit, ExitCode> {
    match UNITS.get(id) {
        Some(unit) => Ok(unit),
        None => {
            eprintln!("Unknown unit '{id}'. Run `misura units` to list known units.");
            Err(ExitCode::FAILURE)
        }
    }
}

fn cmd_convert(args: &[String], as_json: bool) -> ExitCode {
    let [amount_text, from_id, to_id] = args else {
        return usage();
    };

    let amount = match parse_amount(amount_text) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Invalid amount: {e}");
            return ExitCode::FAILURE;
        }
    };

    let from = match resolve_unit(from_id) {
        Ok(u) => u,
        Err(code) => return code,
    };
    let to = match resolve_unit(to_id) {
        Ok(u) => u,
        Err(code) => return code,
    };

    debug!(amount, from = from.id, to = to.id, "converting");

    match convert(amount, from.id, to.id) {
        Ok(conversion) => {
            if as_json {
                let output = ConvertOutput {
                    amount,
                    from: from.id,
                    to: to.id,
                    value: conversion.value,
                    ratio: conversion.ratio,
                };
                println!("{}", serde_json::to_string(&output).expect("serializable output"));
            } else {
                println!(
                    "{} {} = {} {}",
                    format_value(amount, 4),
                    from.symbol,
                    format_value(conversion.value, 4),
                    to.symbol
                );
                println!("{}", approx_line(from, to, conversion.ratio));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Invalid conversion: {e}");
            eprintln!("Pick units of the same category (e.g. mass to mass).");
            ExitCode::FAILURE
        }
    }
}

fn cmd_units(args: &[String], as_json: bool) -> ExitCode {
    let filter = match args {
        [] => None,
        [category] => match category.to_lowercase().as_str() {
            "mass" => Some(misura_units::Category::Mass),
            "volume" => Some(misura_units::Category::Volume),
            other => {
                eprintln!("Unknown category '{other}'. Categories: mass, volume.");
                return ExitCode::FAILURE;
            }
        },
        _ => return usage(),
    };

    let categories: Vec<_> = UNITS
        .categories()
        .filter(|c| filter.map_or(true, |f| f == *c))
        .collect();

    if as_json {
        let mut output = serde_json::Map::new();
        for category in categories {
            let units: Vec<&Unit> = UNITS
                .by_category(category)
                .iter()
                .map(|id| &UNITS[*id])
                .collect();
            output.insert(category.to_string(), json!(units));
        }
        println!("{}", serde_json::Value::Object(output));
    } else {
        for category in categories {
            println!("{} (base: {}):", category.label(), category.base_unit());
            for id in UNITS.by_category(category).iter().copied() {
                let unit = &UNITS[id];
                println!("  {:<18} {:<14} = {} {}", unit.id, unit.symbol, unit.ratio_to_base, unit.category.base_unit());
            }
        }
    }

    ExitCode::SUCCESS
}

fn cmd_info(args: &[String], as_json: bool) -> ExitCode {
    let [id] = args else {
        return usage();
    };

    let unit = match resolve_unit(id) {
        Ok(u) => u,
        Err(code) => return code,
    };

    if as_json {
        println!("{}", json!(unit));
    } else {
        println!("id:       {}", unit.id);
        println!("name:     {}", unit.name);
        println!("symbol:   {}", unit.symbol);
        println!("category: {}", unit.category);
        println!("1 {} = {} {}", unit.symbol, unit.ratio_to_base, unit.category.base_unit());
    }

    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    args.retain(|a| a != "--json");

    let Some(command) = args.first().cloned() else {
        return usage();
    };

    debug!(command = %command, as_json, "dispatching");

    match command.as_str() {
        "convert" => cmd_convert(&args[1..], as_json),
        "units" => cmd_units(&args[1..], as_json),
        "info" => cmd_info(&args[1..], as_json),
        "help" | "--help" | "-h" => usage(),
        other => {
            eprintln!("Unknown command '{other}'.");
            usage()
        }
    }
}
