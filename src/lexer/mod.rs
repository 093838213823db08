//! Lexical analysis module.
//!
//! This module contains the lexer that turns source text into a stream of
//! tokens for the parser. It handles:
//!
//! - Pull-based tokenization driven by an ordered regex pattern table
//! - Recognition of keywords, identifiers, integer literals and operators
//! - Token span tracking for error reporting
//! - Illegal characters, which become tokens instead of failures

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
