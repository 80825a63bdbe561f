use clap::Parser as ClapParser;
use cutparse::{
    Mode, ParseOptions, Presentation,
    cli::{self, CheckOptions, CheckResult, CliError},
};
use std::io::{self, Read};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(ClapParser)]
#[command(name = "cutparse")]
#[command(about = "Compile a cut string into its encoded syntax tree")]
#[command(version)]
struct Cli {
    /// The cut to parse (reads from stdin if not provided)
    cut: Option<String>,

    /// Parse an arithmetic expression instead of a full cut
    #[arg(short, long)]
    expression: bool,

    /// Write node names and operator symbols instead of integer codes
    #[arg(short, long)]
    verbose: bool,

    /// Pretty-print the output
    #[arg(short, long)]
    pretty: bool,

    /// Only validate syntax, don't print the tree
    #[arg(long)]
    syntax_only: bool,

    /// Print the normalized cut instead of the encoded tree
    #[arg(long, conflicts_with = "syntax_only")]
    decompile: bool,

    /// Log parser activity to stderr (overridden by RUST_LOG)
    #[arg(short = 'l', long)]
    verbose_log: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose_log { "debug" } else { "warn" };
    fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let cut = match cli.cut {
        Some(s) => s,
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer.trim_end().to_string()
        }
        None => return Err(CliError::NoInput),
    };

    let options = CheckOptions {
        cut,
        options: ParseOptions {
            mode: if cli.expression {
                Mode::Expression
            } else {
                Mode::Cut
            },
            presentation: if cli.verbose {
                Presentation::Verbose
            } else {
                Presentation::Compact
            },
        },
        syntax_only: cli.syntax_only,
        decompile: cli.decompile,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Decompiled(text) => println!("{}", text),
        CheckResult::Encoded(tree) => {
            let json = if cli.pretty {
                serde_json::to_string_pretty(&tree)
            } else {
                serde_json::to_string(&tree)
            }
            .map_err(io::Error::other)?;
            println!("{}", json);
        }
    }
    Ok(())
}
