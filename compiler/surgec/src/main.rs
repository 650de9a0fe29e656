//! `surgec` — the driver binary wiring the AST builder, diagnostic
//! engine, and dialect classifier together.
//!
//! Grounded on the teacher's `oric/src/main.rs`: a hand-rolled `match`
//! over `std::env::args()`, no argument-parsing crate.

mod cancel;
mod render_options;
mod scenarios;
mod tracing_setup;

use std::process::ExitCode;

use core_diagnostic::{render_json, render_pretty, render_sarif, ErrorDocs};

use cancel::CancellationToken;
use render_options::{parse_args, OutputFormat};

fn main() -> ExitCode {
    tracing_setup::init();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        print_usage();
        return ExitCode::from(2);
    }

    match args[0].as_str() {
        "scenario" => run_scenario(&args[1..]),
        "scenarios" => run_all_scenarios(&args[1..]),
        "explain" | "--explain" => explain(&args[1..]),
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" => {
            println!("surgec {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            ExitCode::from(2)
        }
    }
}

fn print_usage() {
    println!("surgec — Surge compiler front-end driver");
    println!();
    println!("Usage: surgec <command> [options]");
    println!();
    println!("Commands:");
    println!("  scenario <name> [opts]   Render diagnostics for one named fixture scenario");
    println!("  scenarios [opts]         Render diagnostics for every fixture scenario");
    println!("  explain <CODE>           Print the long-form explanation for a diagnostic code");
    println!("  help                     Show this help message");
    println!("  version                  Show version information");
    println!();
    println!("Render options:");
    println!("  --format=pretty|json|sarif   Output format (default: pretty)");
    println!("  --path-mode=auto|absolute|relative|basename");
    println!("  --max-diagnostics=N          Soft cap; 0 means unlimited");
    println!("  --notes --fixes --previews --semantics");
    println!();
    println!("Scenario names: empty-file, import-and-fn, unterminated-string,");
    println!("                missing-semicolon, dialect-hint, attribute-wrong-target");
}

fn run_scenario(rest: &[String]) -> ExitCode {
    let (opts, positional) = match parse_args(rest) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("surgec: {}", err.0);
            return ExitCode::from(2);
        }
    };
    let Some(name) = positional.first() else {
        eprintln!("Usage: surgec scenario <name> [options]");
        return ExitCode::from(2);
    };
    let Some(scenario) = scenarios::by_name(name) else {
        eprintln!("surgec: unknown scenario: {name}");
        return ExitCode::from(2);
    };

    render_and_exit(std::slice::from_ref(&scenario), &opts, rest)
}

fn run_all_scenarios(rest: &[String]) -> ExitCode {
    let (opts, _positional) = match parse_args(rest) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("surgec: {}", err.0);
            return ExitCode::from(2);
        }
    };
    let all = scenarios::all();
    render_and_exit(&all, &opts, rest)
}

fn render_and_exit(scenarios: &[scenarios::Scenario], opts: &render_options::RenderOptions, raw_args: &[String]) -> ExitCode {
    let token = CancellationToken::new();
    let mut has_errors = false;
    for scenario in scenarios {
        if token.checkpoint().is_err() {
            break;
        }
        let mut bag = scenario.bag.clone();
        if opts.diagnostics_cap != 0 {
            bag = core_diagnostic::Bag::with_cap(opts.diagnostics_cap);
            for d in scenario.bag.items() {
                bag.add(d.clone());
            }
        }
        bag.sort();
        has_errors |= bag.has_errors();

        let rendered = match opts.format {
            OutputFormat::Pretty => render_pretty(&bag, &scenario.files, &opts.pretty_opts(false)),
            OutputFormat::Json => render_json(&bag, &scenario.files, &opts.json_opts()),
            OutputFormat::Sarif => render_sarif(&bag, &scenario.files, &opts.sarif_meta(raw_args)),
        };
        println!("{rendered}");
    }

    if has_errors {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

fn explain(rest: &[String]) -> ExitCode {
    let Some(code) = rest.first() else {
        eprintln!("Usage: surgec explain <CODE>");
        return ExitCode::from(2);
    };
    match ErrorDocs::get(code) {
        Some(doc) => {
            println!("{doc}");
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("No documentation available for {code}");
            ExitCode::from(2)
        }
    }
}
