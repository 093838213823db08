use tracing::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{BooleanExpr, IdentifierExpr, InfixExpr, IntegerExpr, PrefixExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses one expression starting at the current token.
///
/// Operators keep being folded into the left-hand side only while the next
/// operator binds strictly tighter than `bp`, so equal precedence associates
/// to the left. On return the current token is the last token of the
/// expression.
///
/// Every call counts as one level of nesting; past
/// [`MAX_NESTING_DEPTH`](super::parser::MAX_NESTING_DEPTH) levels the
/// expression is rejected with `NestingTooDeep`.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.enter_nesting()?;
    let result = parse_nested_expr(parser, bp);
    parser.exit_nesting();

    result
}

fn parse_nested_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(
            ErrorImpl::NoPrefixParseFn { kind: token_kind },
            parser.get_position(),
        ));
    };

    trace!(kind = %token_kind, ?bp, "prefix");
    let mut left = nud_fn(parser)?;

    // While the peeked operator binds tighter than bp, continue parsing lhs
    while !parser.peek_token_is(TokenKind::Semicolon) && parser.peek_binding_power() > bp {
        let token_kind = parser.peek_token_kind();
        let Some(led_fn) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Ok(left);
        };

        let binding_power = parser.peek_binding_power();
        parser.next_token();

        trace!(kind = %token_kind, ?binding_power, "infix");
        left = led_fn(parser, left, binding_power)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Number => match token.value.parse::<i64>() {
            Ok(value) => Ok(Expr::Integer(IntegerExpr { token, value })),
            Err(_) => Err(Error::new(
                ErrorImpl::NumberParseError { token: token.value },
                token.span.start,
            )),
        },
        TokenKind::Identifier => Ok(Expr::Identifier(IdentifierExpr {
            value: token.value.clone(),
            token,
        })),
        TokenKind::True | TokenKind::False => Ok(Expr::Boolean(BooleanExpr {
            value: token.kind == TokenKind::True,
            token,
        })),
        kind => Err(Error::new(
            ErrorImpl::NoPrefixParseFn { kind },
            token.span.start,
        )),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    parser.next_token();

    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    parser.next_token();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.next_token();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}
