//! Fact CLI.

use factc::{check, run, PipelineError, DEFAULT_MAX_DEPTH};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut check_syntax = false;
    let mut tokens = false;
    let mut max_depth = DEFAULT_MAX_DEPTH;
    let mut file = None;

    for arg in args.iter().skip(1) {
        if arg == "--check-syntax" {
            check_syntax = true;
        } else if arg == "--tokens" {
            tokens = true;
        } else if let Some(n) = arg.strip_prefix("--max-depth=") {
            let Ok(n) = n.parse::<usize>() else {
                eprintln!("error: invalid --max-depth value '{n}'");
                std::process::exit(1);
            };
            max_depth = n;
        } else if arg == "--help" || arg == "-h" {
            print_usage();
            return;
        } else if arg == "--version" || arg == "-V" {
            println!("fact {}", env!("CARGO_PKG_VERSION"));
            return;
        } else if arg.starts_with('-') {
            eprintln!("error: unknown option '{arg}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        } else if file.is_none() {
            file = Some(arg.as_str());
        } else {
            eprintln!("error: more than one input file");
            std::process::exit(1);
        }
    }

    let Some(path) = file else {
        print_usage();
        std::process::exit(1);
    };

    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read {path}: {err}");
            std::process::exit(1);
        }
    };

    if tokens {
        print_tokens(&source);
        return;
    }
    if check_syntax {
        check_only(&source);
        return;
    }
    run_program(&source, max_depth);
}

/// Full pipeline: print the AST as JSON, then the result value.
fn run_program(source: &str, max_depth: usize) {
    match run(source, max_depth) {
        Ok(execution) => {
            match serde_json::to_string_pretty(&execution.program) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("error: cannot serialize program: {err}");
                    std::process::exit(2);
                }
            }
            println!("{}", execution.value);
        }
        Err(PipelineError::Invalid(diagnostics)) => {
            report(&diagnostics);
            std::process::exit(1);
        }
        Err(PipelineError::Runtime(err)) => {
            eprintln!("runtime error: {err}");
            std::process::exit(2);
        }
    }
}

/// Front end only; no evaluation.
fn check_only(source: &str) {
    let analysis = check(source);
    if analysis.is_valid() {
        println!("syntax ok");
    } else {
        report(&analysis.diagnostics);
        std::process::exit(1);
    }
}

/// Dump the token stream, one token per line.
fn print_tokens(source: &str) {
    let analysis = check(source);
    for token in analysis.tokens.iter() {
        println!("{:>4}  {:?}", token.line, token.kind);
    }
    if !analysis.is_valid() {
        report(&analysis.diagnostics);
        std::process::exit(1);
    }
}

fn report(diagnostics: &[fact_diagnostic::Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("error: {diagnostic}");
    }
}

fn print_usage() {
    println!("Fact interpreter");
    println!();
    println!("Usage: fact [options] <file.fct>");
    println!();
    println!("Options:");
    println!("  --check-syntax     Lex and parse only, without evaluating");
    println!("  --tokens           Print the token stream and exit");
    println!("  --max-depth=<n>    Recursion depth limit (default: {DEFAULT_MAX_DEPTH})");
    println!("  --help, -h         Show this help message");
    println!("  --version, -V      Show version information");
    println!();
    println!("Exit codes:");
    println!("  0  success");
    println!("  1  lexical or syntax errors");
    println!("  2  runtime error");
}
