use std::io::{self, BufRead, Write};

use tracing::debug;

const PROMPT: &str = ">> ";
const QUIT: &str = ":q";

/// Welcome line printed before the loop starts, addressed to the login user
/// when one is known
pub fn greeting(user: Option<&str>) -> String {
    match user {
        Some(name) if !name.is_empty() => format!("Hello {name}! Every line is parsed as a program."),
        _ => "Hello! Every line is parsed as a program.".to_string(),
    }
}

/// Read-parse-print loop: every input line is parsed as a whole program.
///
/// Stops on `:q` or end of input. Only I/O failures are returned; parse
/// errors are written to `output` and the loop carries on.
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "Type {QUIT} to quit")?;

    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let source = line.trim_end_matches(['\n', '\r']);
        if source == QUIT {
            break;
        }

        debug!(source, "repl line");
        match parser::parse(source) {
            Ok(program) => writeln!(output, "{program}")?,
            Err(errors) => {
                writeln!(output, "parse failed")?;
                for error in errors {
                    writeln!(output, "\t{error}")?;
                }
            }
        }
    }

    writeln!(output, "Bye!")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> String {
        let mut output = Vec::new();
        start(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn greets_login_user() {
        assert_eq!(greeting(Some("ada")), "Hello ada! Every line is parsed as a program.");
        assert_eq!(greeting(Some("")), "Hello! Every line is parsed as a program.");
        assert_eq!(greeting(None), "Hello! Every line is parsed as a program.");
    }

    #[test]
    fn prints_prompt_and_bye_on_empty_input() {
        assert_eq!(run(""), "Type :q to quit\n>> Bye!\n");
    }

    #[test]
    fn quits_on_command() {
        assert_eq!(run(":q\nlet x = 1;\n"), "Type :q to quit\n>> Bye!\n");
    }

    #[test]
    fn prints_rendered_program() {
        let output = run("let x = 1 + 2 * 3;\n:q\n");
        assert_eq!(output, "Type :q to quit\n>> let x = (1 + (2 * 3));\n>> Bye!\n");
    }

    #[test]
    fn reports_illegal_lines() {
        let output = run("let x = @;\r\n:q\n");
        assert!(output.contains("parse failed\n"));
        assert!(output.contains("\tillegal character '@' at offset 8\n"));
        assert!(output.ends_with(">> Bye!\n"));
    }

    #[test]
    fn keeps_going_after_errors() {
        let output = run("let x 5;\nx\n");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Type :q to quit",
                ">> parse failed",
                "\texpected '=', found integer '5'",
                ">> x;",
                ">> Bye!",
            ]
        );
    }
}
