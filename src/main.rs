use clap::{Parser as ClapParser, Subcommand};
use selectree::cli::{self, CheckOptions, CheckResult, CliError};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "selectree")]
#[command(about = "Selectree - Query JSON syntax trees with CSS-like selectors")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match a selector against a JSON tree
    Query {
        /// The selector to run
        selector: String,

        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate syntax, don't execute
        #[arg(long)]
        syntax_only: bool,
    },

    /// Print the tokens of a selector
    Tokens {
        /// The selector to tokenize
        selector: String,
    },

    /// Print the parsed expression tree of a selector
    Parse {
        /// The selector to parse
        selector: String,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// List documentation topics
    Docs,

    /// Show documentation for a specific topic
    Doc {
        /// Topic name (use 'selectree docs' to list topics)
        topic: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Query {
            selector,
            input,
            pretty,
            syntax_only,
        } => run_query(selector, input, pretty, syntax_only),
        Commands::Tokens { selector } => {
            cli::tokens_to_json(&selector).and_then(|tokens| print_json(&tokens, false))
        }
        Commands::Parse { selector, pretty } => {
            cli::selector_to_json(&selector).and_then(|ast| print_json(&ast, pretty))
        }
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { topic } => {
            cli::get_doc_topic(&topic).map(|content| print!("{}", content))
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_query(
    selector: String,
    input: Option<String>,
    pretty: bool,
    syntax_only: bool,
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
        selector,
        input,
        pretty,
        syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Success(output) => print_json(&output, options.pretty)?,
    }
    Ok(())
}

fn print_json(value: &serde_json::Value, pretty: bool) -> Result<(), CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }?;
    println!("{}", json);
    Ok(())
}
