//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and punctuation, including two-character operators
//! - Illegal characters and end-of-input behaviour

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

#[test]
fn test_tokenize_let_statement() {
    let tokens = tokenize("let age = 1;".to_string(), None);

    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "age"),
        (TokenKind::Assignment, "="),
        (TokenKind::Number, "1"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, value)) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind);
        assert_eq!(token.value, value);
    }
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("let return fn if else true false".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Return);
    assert_eq!(tokens[2].kind, TokenKind::Fn);
    assert_eq!(tokens[3].kind, TokenKind::If);
    assert_eq!(tokens[4].kind, TokenKind::Else);
    assert_eq!(tokens[5].kind, TokenKind::True);
    assert_eq!(tokens[6].kind, TokenKind::False);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar_baz _underscore CamelCase letter".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "bar_baz");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "_underscore");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "CamelCase");
    // Keywords only match whole words.
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "letter");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_identifiers_stop_at_digits() {
    let tokens = tokenize("x1".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "1");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 1234567890".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "1234567890");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_minus_is_not_part_of_number() {
    let tokens = tokenize("-5".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Dash);
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "5");
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("= + - ! / * < > == !=".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Assignment);
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[2].kind, TokenKind::Dash);
    assert_eq!(tokens[3].kind, TokenKind::Not);
    assert_eq!(tokens[4].kind, TokenKind::Slash);
    assert_eq!(tokens[5].kind, TokenKind::Star);
    assert_eq!(tokens[6].kind, TokenKind::Less);
    assert_eq!(tokens[7].kind, TokenKind::Greater);
    assert_eq!(tokens[8].kind, TokenKind::Equals);
    assert_eq!(tokens[8].value, "==");
    assert_eq!(tokens[9].kind, TokenKind::NotEquals);
    assert_eq!(tokens[9].value, "!=");
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_two_character_operators_fall_back() {
    let tokens = tokenize("=!x!==".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Assignment);
    assert_eq!(tokens[1].kind, TokenKind::Not);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].kind, TokenKind::NotEquals);
    assert_eq!(tokens[4].kind, TokenKind::Assignment);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("( ) { } , ;".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[3].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[4].kind, TokenKind::Comma);
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = tokenize("  let \t x\r\n=\n\n 42  ".to_string(), None);

    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_illegal_characters_do_not_stop_the_stream() {
    let tokens = tokenize("let x = @ 5 # é;".to_string(), None);

    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].value, "@");
    assert_eq!(tokens[4].kind, TokenKind::Number);
    assert_eq!(tokens[5].kind, TokenKind::Illegal);
    assert_eq!(tokens[5].value, "#");
    assert_eq!(tokens[6].kind, TokenKind::Illegal);
    assert_eq!(tokens[6].value, "é");
    assert_eq!(tokens[7].kind, TokenKind::Semicolon);
    assert_eq!(tokens[8].kind, TokenKind::EOF);
}

#[test]
fn test_eof_repeats() {
    let mut lexer = Lexer::new("x".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.value, "");
    }
}

#[test]
fn test_empty_source() {
    let tokens = tokenize(String::new(), None);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_lexer_iterator_stops_before_eof() {
    let lexer = Lexer::new("a + b".to_string(), None);
    let kinds: Vec<TokenKind> = lexer.map(|token| token.kind).collect();

    assert_eq!(kinds, vec![TokenKind::Identifier, TokenKind::Plus, TokenKind::Identifier]);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let  answer".to_string(), Some("test.monkey".to_string()));

    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 11);
    assert_eq!(*tokens[1].span.start.1, "test.monkey");
    assert_eq!(tokens[2].span.start.0, 11);
}

#[test]
fn test_spans_are_byte_offsets() {
    let tokens = tokenize("é = 1".to_string(), None);

    let illegal_end: usize = tokens[0].span.end.0;
    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(illegal_end, 2);
    assert_eq!(tokens[1].span.start.0, 3);
    assert_eq!(tokens[2].span.start.0, 5);
    assert_eq!(tokens[3].span.start.0, "é = 1".len());
}

#[test]
fn test_tokenize_mixed_expression() {
    let tokens = tokenize("x + 5 * (y - 3) != 10 / z".to_string(), None);

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::Star,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Dash,
            TokenKind::Number,
            TokenKind::CloseParen,
            TokenKind::NotEquals,
            TokenKind::Number,
            TokenKind::Slash,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}
