#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod repl;

extern crate regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub usize, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line holding the byte offset `position`.
///
/// Returns `(line_number, line_text, column)`. An offset equal to the source
/// length points just past the final character, which is where end-of-input
/// errors are reported.
pub fn get_line_at_position(source: &str, pos: usize) -> Option<(usize, String, usize)> {
    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    // End of input: either a fresh empty line after a trailing newline, or
    // the tail of the last line.
    match source.rsplit_once('\n') {
        _ if source.is_empty() || source.ends_with('\n') => Some((line_number, String::new(), 0)),
        Some((_, last)) => Some((line_number - 1, last.to_string(), last.len())),
        None => Some((line_number - 1, source.to_string(), source.len())),
    }
}

/// Renders a caret diagnostic for `error` against the source it came from.
pub fn format_error(error: &Error, source: &str) -> String {
    /*
        Error: UnexpectedToken (expected next token to be Assignment, got Number instead)
        -> shell
          |
        1 | let x 5;
          | ------^
    */

    let position = error.get_position();

    let mut output = String::new();
    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    output.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return output;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    // Caret column is in characters, not bytes.
    let column = line_text
        .get(..line_pos)
        .map_or(line_pos, |before| before.chars().count());
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    output
}

pub fn display_error(error: &Error, source: &str) {
    print!("{}", format_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += c.len_utf8();
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        lexer::tokens::TokenKind,
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nfoo\nbar\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("let x", 5).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "let x");
        assert_eq!(line_pos, 5);

        let (line_number, line, line_pos) = super::get_line_at_position("a;\n", 3).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "");
        assert_eq!(line_pos, 0);

        assert!(super::get_line_at_position("abc", 4).is_none());
    }

    #[test]
    fn test_format_error_points_at_offending_token() {
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Assignment,
                found: TokenKind::Number,
            },
            Position(6, Rc::new(String::from("shell"))),
        );

        let rendered = super::format_error(&error, "let x 5;");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnexpectedToken (expected next token to be Assignment, got Number instead)");
        assert_eq!(lines[1], "-> shell");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "1 | let x 5;");
        assert_eq!(lines[4], "  | ------^");
    }

    #[test]
    fn test_format_error_caret_counts_characters() {
        // `5` starts at byte 10 but is the tenth character.
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Assignment,
                found: TokenKind::Number,
            },
            Position(10, Rc::new(String::from("shell"))),
        );

        let rendered = super::format_error(&error, "é; let x 5;");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[3], "1 | é; let x 5;");
        assert_eq!(lines[4], "  | ---------^");
    }
}
