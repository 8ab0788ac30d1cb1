use clap::{ArgAction, Parser}; // clap crate for CLI argument parsing
use std::{env, error::Error, fs, io, path::PathBuf, process};

use lexer::Lexer;
use model::Program;
use tracing::{Level, info};

mod repl;

/*
Without INPUT_PATH the driver reads lines from stdin and parses each one
as a program of its own (see repl.rs). Diagnostics go to stderr, so the
rendered output on stdout stays clean for piping.
*/

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the source file; starts the REPL when omitted
    input_path: Option<PathBuf>,

    /// Run lexer only, printing one token per line
    #[arg(short, long)]
    lex: bool,

    /// Print the syntax tree instead of the rendered program
    #[arg(long)]
    debug_ast: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(level_for_verbosity(args.verbose))
        .with_writer(io::stderr)
        .init();

    let Some(input_path) = args.input_path else {
        let user = env::var("USER").or_else(|_| env::var("USERNAME")).ok();
        println!("{}", repl::greeting(user.as_deref()));
        return Ok(repl::start(io::stdin().lock(), io::stdout().lock())?);
    };

    let source = fs::read_to_string(&input_path)?;
    info!(path = %input_path.display(), bytes = source.len(), "read source");

    let succeeded = if args.lex {
        lex(&source)
    } else {
        parse(&source, args.debug_ast)
    };

    if !succeeded {
        process::exit(1);
    }
    Ok(())
}

fn level_for_verbosity(v: u8) -> Level {
    match v {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

// --lex: print every token up to the first lexical error
fn lex(source: &str) -> bool {
    for result in Lexer::new(source) {
        match result {
            Ok(token) => println!("{:?} {:?}", token.kind, token.literal),
            Err(err) => {
                eprintln!("{err}");
                return false;
            }
        }
    }
    true
}

fn parse(source: &str, debug_ast: bool) -> bool {
    match parser::parse(source) {
        Ok(program) => {
            println!("{}", render(&program, debug_ast));
            true
        }
        Err(errors) => {
            info!(count = errors.len(), "parse failed");
            for error in errors {
                eprintln!("{error}");
            }
            false
        }
    }
}

fn render(program: &Program, debug_ast: bool) -> String {
    if debug_ast {
        format!("{program:#?}")
    } else {
        program.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for_verbosity(0), Level::WARN);
        assert_eq!(level_for_verbosity(1), Level::INFO);
        assert_eq!(level_for_verbosity(2), Level::DEBUG);
        assert_eq!(level_for_verbosity(3), Level::TRACE);
        assert_eq!(level_for_verbosity(9), Level::TRACE);
    }

    #[test]
    fn parses_flags() {
        let args = Args::parse_from(["driver", "-l", "-vv", "prog.fun"]);
        assert!(args.lex);
        assert!(!args.debug_ast);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.input_path, Some(PathBuf::from("prog.fun")));

        let args = Args::parse_from(["driver", "--debug-ast"]);
        assert!(args.debug_ast);
        assert_eq!(args.input_path, None);
    }

    #[test]
    fn render_modes() {
        let program = parser::parse("let x = 1 + 2;").unwrap();
        assert_eq!(render(&program, false), "let x = (1 + 2);");
        let tree = render(&program, true);
        assert!(tree.starts_with("Program {"));
        assert!(tree.contains("IntegerLiteral(\n"));
    }
}
