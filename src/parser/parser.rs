//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser pulls tokens from its lexer one at a time, keeping the current
//! token and a single peeked token, and uses a Pratt parser approach with
//! NUD/LED handlers for expressions.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// How many expressions may be open at once before parsing gives up on the
/// statement.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// `peek` is always the token the lexer produced right after `current`;
/// [`Parser::next_token`] moves both forward together.
pub struct Parser {
    /// Source of tokens, read strictly forward
    lexer: Lexer,
    /// The token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    /// Number of expressions currently being parsed
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser reading from `lexer`.
    ///
    /// Two tokens are read up front so that the current and peeked tokens
    /// are valid immediately, and the lookup tables are filled in. They are
    /// not changed after construction.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            depth: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Parses statements until end-of-input.
    ///
    /// Never fails: a statement that cannot be parsed is left out, its error
    /// is recorded, and parsing resumes after the next `;` or at the next
    /// `let`/`return`, whichever comes first. Check
    /// [`Parser::errors`] before trusting the returned tree.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EOF) {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    debug!(%error, position = error.get_position().0, "abandoning statement");
                    self.errors.push(error);
                    self.synchronize();
                }
            }

            self.next_token();
        }

        program
    }

    /// Returns the diagnostics recorded so far, oldest first.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances both the current and the peeked token by one.
    pub fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Advances if the peeked token is of the expected kind.
    ///
    /// # Returns
    ///
    /// The new current token, or an `UnexpectedToken` error naming both kinds.
    /// On error the parser does not move.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<&Token, Error> {
        if !self.peek_token_is(expected_kind) {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: self.peek.kind,
                },
                self.peek.span.start.clone(),
            ));
        }

        self.next_token();
        Ok(&self.current)
    }

    /// Binding power of the peeked token; tokens that are not operators bind
    /// at [`BindingPower::Lowest`].
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.peek.kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// Opens one more level of expression nesting.
    ///
    /// Fails with `NestingTooDeep` once [`MAX_NESTING_DEPTH`] levels are open;
    /// the depth is left unchanged in that case.
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn nesting_depth(&self) -> usize {
        self.depth
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub(crate) fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub(crate) fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub(crate) fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Gives a token a binding power without an infix handler.
    pub(crate) fn binding_power(&mut self, kind: TokenKind, binding_power: BindingPower) {
        self.binding_power_lookup.insert(kind, binding_power);
    }

    /// Returns the position of the current token in the source.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    // Skip the rest of a broken statement, stopping on its `;` or just before
    // a token that starts a new statement.
    fn synchronize(&mut self) {
        while !self.current.is_one_of_many(&[TokenKind::Semicolon, TokenKind::EOF])
            && !self.peek.is_one_of_many(&[TokenKind::Let, TokenKind::Return])
        {
            self.next_token();
        }
    }
}

/// Parses a source string into a Program.
///
/// This is the main entry point for parsing. It creates a lexer and parser
/// pair, parses all statements until EOF and hands back the diagnostics
/// alongside the (possibly partial) tree.
///
/// # Arguments
///
/// * `source` - The source text
/// * `file` - Name used in positions; defaults to `shell`
pub fn parse(source: String, file: Option<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    (program, parser.errors)
}
