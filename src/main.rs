use clap::{ArgAction, Parser as ClapParser, Subcommand};
use member_selector::cli::{self, CheckOptions, CheckResult, CliError};
use std::io::{self, Read};
use tracing::Level;

#[derive(ClapParser)]
#[command(name = "selector")]
#[command(about = "Select types, methods and fields of a JSON type model with boolean expressions")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a selector and list the matching subjects of a model
    Check {
        /// The selector expression
        expression: String,

        /// JSON model (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate syntax, don't evaluate
        #[arg(long)]
        syntax_only: bool,

        /// Skip subjects of a kind the expression cannot be applied to
        #[arg(long)]
        skip_mismatch: bool,
    },

    /// List operators, predicates, converters and extractors
    Docs,

    /// Show documentation for a single name
    Doc {
        /// Predicate, converter or extractor name
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check {
            expression,
            input,
            pretty,
            syntax_only,
            skip_mismatch,
        } => run_check(expression, input, pretty, syntax_only, skip_mismatch),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { name } => cli::get_doc_entry(&name).map(|content| print!("{}", content)),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_check(
    expression: String,
    input: Option<String>,
    pretty: bool,
    syntax_only: bool,
    skip_mismatch: bool,
) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !syntax_only && !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = CheckOptions {
        expression,
        input,
        syntax_only,
        skip_mismatch,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid(normalised) => println!("Syntax is valid: {}", normalised),
        CheckResult::Matches(matches) => {
            let json = if pretty {
                serde_json::to_string_pretty(&matches)
            } else {
                serde_json::to_string(&matches)
            }
            .map_err(io::Error::other)?;
            println!("{}", json);
        }
    }
    Ok(())
}
