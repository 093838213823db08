//! Line-oriented read-eval-print loop.
//!
//! Each line gets a fresh lexer. In token mode every token on the line is
//! echoed; in parse mode the rendered program (or its diagnostics) is.

use std::io::{self, BufRead, Write};

use crate::{format_error, lexer::lexer::Lexer, parser::parser::parse};

pub const PROMPT: &str = ">> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplMode {
    #[default]
    Tokens,
    Parse,
}

/// Runs the loop until `input` is exhausted.
pub fn start<R: BufRead, W: Write>(input: R, output: &mut W, mode: ReplMode) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(());
        };
        let line = line?;

        match mode {
            ReplMode::Tokens => {
                for token in Lexer::new(line, None) {
                    writeln!(output, "{}", token)?;
                }
            }
            ReplMode::Parse => {
                let (program, errors) = parse(line.clone(), None);

                if errors.is_empty() {
                    writeln!(output, "{}", program)?;
                } else {
                    for error in &errors {
                        write!(output, "{}", format_error(error, &line))?;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{start, ReplMode};

    fn run(input: &str, mode: ReplMode) -> String {
        let mut output = Vec::new();
        start(input.as_bytes(), &mut output, mode).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_token_mode_echoes_each_token() {
        let output = run("let age = 1;\n", ReplMode::Tokens);

        assert_eq!(
            output,
            ">> Token { kind: Let, value: \"let\" }\n\
             Token { kind: Identifier, value: \"age\" }\n\
             Token { kind: Assignment, value: \"=\" }\n\
             Token { kind: Number, value: \"1\" }\n\
             Token { kind: Semicolon, value: \";\" }\n\
             >> \n"
        );
    }

    #[test]
    fn test_each_line_is_lexed_separately() {
        let output = run("a\nb\n", ReplMode::Tokens);

        assert_eq!(
            output,
            ">> Token { kind: Identifier, value: \"a\" }\n\
             >> Token { kind: Identifier, value: \"b\" }\n\
             >> \n"
        );
    }

    #[test]
    fn test_parse_mode_renders_program() {
        let output = run("-a * b + c\n", ReplMode::Parse);

        assert_eq!(output, ">> (((-a) * b) + c)\n>> \n");
    }

    #[test]
    fn test_parse_mode_reports_errors() {
        let output = run("let x 5;\n", ReplMode::Parse);

        assert!(output.contains("Error: UnexpectedToken"));
        assert!(output.contains("1 | let x 5;"));
    }

    #[test]
    fn test_empty_input_ends_immediately() {
        assert_eq!(run("", ReplMode::Tokens), ">> \n");
    }
}
