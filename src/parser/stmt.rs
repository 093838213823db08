use crate::{
    ast::{
        ast::Stmt,
        expressions::IdentifierExpr,
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser};

/// Dispatches on the current token; anything without a statement handler is
/// an expression statement. On success the current token is the last token
/// of the statement.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(stmt_fn) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        return stmt_fn(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    let name_token = parser.expect_peek(TokenKind::Identifier)?.clone();
    let name = IdentifierExpr {
        value: name_token.value.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assignment)?;
    parser.next_token();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    parser.expect_peek(TokenKind::Semicolon)?;

    Ok(Stmt::Let(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    parser.next_token();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    parser.expect_peek(TokenKind::Semicolon)?;

    Ok(Stmt::Return(ReturnStmt { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    // Optional, so a bare expression can end the input.
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Ok(Stmt::Expression(ExpressionStmt { token, expression }))
}
