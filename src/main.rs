use std::{fs, process::ExitCode};

use clap::Parser;
use culebra::{
    evaluate_program_with,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, MAX_CALL_DEPTH},
        prelude,
        value::core::Value,
    },
    parse,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// culebra is a small scripting language with closures, objects and string
/// interpolation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells culebra to read the program from the file named by CONTENTS
    /// instead of treating CONTENTS as the program itself.
    #[arg(short, long)]
    file: bool,

    /// Prints the parsed tree before evaluating it.
    #[arg(short, long)]
    ast: bool,

    /// Limits how deeply function calls may nest.
    #[arg(long, default_value_t = MAX_CALL_DEPTH)]
    max_depth: usize,

    contents: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    let (path, script) = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => (args.contents.clone(), script),
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        ("<script>".to_string(), args.contents.clone())
    };
    debug!(%path, bytes = script.len(), "loaded program");

    if args.ast {
        match parse(&path, &script) {
            Ok(program) => println!("{program:#?}"),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            },
        }
    }

    let env = Environment::new();
    prelude::install(&env);
    let mut context = Context::with_max_call_depth(args.max_depth);

    match evaluate_program_with(&mut context, &path, &env, &script) {
        Ok(value) => {
            if !matches!(value, Value::Null) {
                println!("{value}");
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
