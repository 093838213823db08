use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Builds a token from the text between `start` and the cursor, or nothing
/// for skipped input.
pub type RegexHandler = fn(&mut Lexer, usize) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).expect("token patterns are valid regular expressions"),
            handler,
        }
    }
}

lazy_static! {
    // Anchored, and tried in order: two-character operators come before
    // their one-character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("^[ \t\n\r]+", skip_handler),
        RegexPattern::new("^[a-zA-Z_]+", symbol_handler),
        RegexPattern::new("^[0-9]+", MK_DEFAULT_HANDLER!(TokenKind::Number)),
        RegexPattern::new("^==", MK_DEFAULT_HANDLER!(TokenKind::Equals)),
        RegexPattern::new("^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals)),
        RegexPattern::new("^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment)),
        RegexPattern::new("^!", MK_DEFAULT_HANDLER!(TokenKind::Not)),
        RegexPattern::new("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus)),
        RegexPattern::new("^-", MK_DEFAULT_HANDLER!(TokenKind::Dash)),
        RegexPattern::new("^/", MK_DEFAULT_HANDLER!(TokenKind::Slash)),
        RegexPattern::new("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Star)),
        RegexPattern::new("^<", MK_DEFAULT_HANDLER!(TokenKind::Less)),
        RegexPattern::new("^>", MK_DEFAULT_HANDLER!(TokenKind::Greater)),
        RegexPattern::new("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon)),
        RegexPattern::new("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma)),
        RegexPattern::new("^\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly)),
        RegexPattern::new("^\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly)),
        RegexPattern::new("^\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen)),
        RegexPattern::new("^\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen)),
    ];
}

/// Pull-based scanner over an immutable source string.
///
/// Each call to [`Lexer::next_token`] skips whitespace, produces exactly one
/// token and moves the cursor past it. The stream is total: characters no
/// pattern recognises come out as [`TokenKind::Illegal`], and once the input
/// is consumed every further call returns [`TokenKind::EOF`].
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn next_token(&mut self) -> Token {
        while !self.at_eof() {
            let remainder = self.remainder();
            let matched = PATTERNS
                .iter()
                .find_map(|pattern| pattern.regex.find(remainder).map(|m| (pattern.handler, m.end())));

            let start = self.pos;
            match matched {
                Some((handler, length)) => {
                    self.advance_n(length);
                    if let Some(token) = handler(self, start) {
                        return token;
                    }
                }
                None => {
                    // Not recognised: emit the single character and carry on.
                    let length = self.at().map_or(1, char::len_utf8);
                    self.advance_n(length);
                    return self.token_from(start, TokenKind::Illegal);
                }
            }
        }

        MK_TOKEN!(TokenKind::EOF, String::new(), self.span(self.pos, self.pos))
    }

    /// Builds a token of `kind` whose literal is the source text from `start`
    /// up to the cursor.
    pub fn token_from(&self, start: usize, kind: TokenKind) -> Token {
        MK_TOKEN!(kind, String::from(&self.source[start..self.pos]), self.span(start, self.pos))
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn span(&self, start: usize, end: usize) -> Span {
        Span {
            start: Position(start, Rc::clone(&self.file)),
            end: Position(end, Rc::clone(&self.file)),
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields tokens up to, but not including, end-of-input.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            None
        } else {
            Some(token)
        }
    }
}

fn skip_handler(_lexer: &mut Lexer, _start: usize) -> Option<Token> {
    None
}

fn symbol_handler(lexer: &mut Lexer, start: usize) -> Option<Token> {
    let value = &lexer.source[start..lexer.pos];

    let kind = RESERVED_LOOKUP.get(value).copied().unwrap_or(TokenKind::Identifier);
    Some(lexer.token_from(start, kind))
}

/// Lexes the whole source, including the single trailing EOF token.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
