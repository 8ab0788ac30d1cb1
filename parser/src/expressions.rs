use model::{Expression, Identifier, InfixOp, PrefixOp, TokenKind};

use crate::error::ParseError;
use crate::parser::Parser;
use crate::precedence::Precedence;
use crate::statements::StatementParser;

/// Expression parsing using precedence climbing
pub(crate) trait ExpressionParser {
    fn parse_expression(&mut self, precedence: Precedence) -> Result<Expression, ParseError>;
}

/// What a token does when it follows a complete operand
#[derive(Debug, Clone, Copy)]
enum InfixRule {
    Binary(InfixOp),
    Call,
}

impl InfixRule {
    fn for_token(kind: TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::Plus => InfixOp::Add,
            TokenKind::Minus => InfixOp::Sub,
            TokenKind::Asterisk => InfixOp::Mul,
            TokenKind::Slash => InfixOp::Div,
            TokenKind::EqualEqual => InfixOp::EqualEqual,
            TokenKind::BangEqual => InfixOp::NotEqual,
            TokenKind::Less => InfixOp::Less,
            TokenKind::Greater => InfixOp::Greater,
            TokenKind::AndAnd => InfixOp::LogicalAnd,
            TokenKind::OrOr => InfixOp::LogicalOr,
            TokenKind::OpenParenthesis => return Some(InfixRule::Call),
            _ => return None,
        };
        Some(InfixRule::Binary(op))
    }
}

impl ExpressionParser for Parser<'_> {
    fn parse_expression(&mut self, precedence: Precedence) -> Result<Expression, ParseError> {
        self.nested(|parser| parser.climb(precedence))
    }
}

impl Parser<'_> {
    fn climb(&mut self, precedence: Precedence) -> Result<Expression, ParseError> {
        let left = self.parse_prefix()?;
        let depth = self.depth;
        let result = self.fold_infix(left, precedence);
        self.depth = depth;
        result
    }

    // Right operands are parsed at the operator's own precedence, so an
    // equal-precedence operator ends the nested call and is folded here:
    // every binary operator is left-associative. Each fold makes the tree
    // one level deeper and counts against the nesting limit.
    fn fold_infix(&mut self, mut left: Expression, precedence: Precedence) -> Result<Expression, ParseError> {
        while !self.next_is(TokenKind::Semicolon) && precedence < Precedence::of(self.current.kind) {
            let Some(rule) = InfixRule::for_token(self.current.kind) else {
                break;
            };
            self.enter()?;
            left = match rule {
                InfixRule::Binary(op) => self.parse_infix_expression(left, op)?,
                InfixRule::Call => self.parse_call_expression(left)?,
            };
        }

        Ok(left)
    }

    fn parse_prefix(&mut self) -> Result<Expression, ParseError> {
        match self.current.kind {
            TokenKind::Identifier => Ok(Expression::Identifier(self.parse_identifier())),
            TokenKind::Integer => Ok(self.parse_integer_literal()),
            TokenKind::True | TokenKind::False => Ok(self.parse_boolean_literal()),
            TokenKind::Bang => self.parse_prefix_expression(PrefixOp::LogicalNot),
            TokenKind::Minus => self.parse_prefix_expression(PrefixOp::Minus),
            TokenKind::OpenParenthesis => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::OpenBrace => Ok(Expression::Block(self.parse_block()?)),
            TokenKind::Function => self.parse_function_literal(),
            _ => Err(self.report(ParseError::NoPrefixParser {
                found: self.current.clone(),
            })),
        }
    }

    fn parse_identifier(&mut self) -> Identifier {
        Identifier::new(self.advance().literal)
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<Identifier, ParseError> {
        let token = self.expect(TokenKind::Identifier)?;
        Ok(Identifier::new(token.literal))
    }

    /// Out-of-range literals are recorded and replaced by `0` so the rest of
    /// the expression still parses
    fn parse_integer_literal(&mut self) -> Expression {
        let token = self.advance();
        match token.literal.parse::<i64>() {
            Ok(value) => Expression::IntegerLiteral(value),
            Err(_) => {
                self.report(ParseError::InvalidInteger {
                    literal: token.literal,
                });
                Expression::IntegerLiteral(0)
            }
        }
    }

    fn parse_boolean_literal(&mut self) -> Expression {
        let token = self.advance();
        Expression::BooleanLiteral(token.is(TokenKind::True))
    }

    fn parse_prefix_expression(&mut self, op: PrefixOp) -> Result<Expression, ParseError> {
        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;
        Ok(Expression::prefix(op, right))
    }

    fn parse_grouped_expression(&mut self) -> Result<Expression, ParseError> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect(TokenKind::CloseParenthesis)?;
        Ok(expr)
    }

    // if (<predicate>) { ... } [else { ... }]
    fn parse_if_expression(&mut self) -> Result<Expression, ParseError> {
        self.advance();
        self.expect(TokenKind::OpenParenthesis)?;
        let predicate = self.parse_expression(Precedence::Lowest)?;
        self.expect(TokenKind::CloseParenthesis)?;
        let then_branch = self.parse_block()?;

        let else_branch = if self.match_token(TokenKind::Else) {
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Expression::If {
            predicate: Box::new(predicate),
            then_branch,
            else_branch,
        })
    }

    // fun [name](<params>) { ... }
    fn parse_function_literal(&mut self) -> Result<Expression, ParseError> {
        self.advance();
        let name = if self.current_is(TokenKind::Identifier) {
            Some(self.parse_identifier())
        } else {
            None
        };

        self.expect(TokenKind::OpenParenthesis)?;
        let parameters = self.parse_function_parameters()?;
        let body = self.parse_block()?;

        Ok(Expression::FunctionLiteral {
            name,
            parameters,
            body,
        })
    }

    fn parse_function_parameters(&mut self) -> Result<Vec<Identifier>, ParseError> {
        let mut parameters = Vec::new();
        if self.match_token(TokenKind::CloseParenthesis) {
            return Ok(parameters);
        }

        loop {
            parameters.push(self.expect_identifier()?);
            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }

        self.expect(TokenKind::CloseParenthesis)?;
        Ok(parameters)
    }

    fn parse_infix_expression(&mut self, left: Expression, op: InfixOp) -> Result<Expression, ParseError> {
        let precedence = Precedence::of(self.current.kind);
        self.advance();
        let right = self.parse_expression(precedence)?;
        Ok(Expression::infix(left, op, right))
    }

    fn parse_call_expression(&mut self, callee: Expression) -> Result<Expression, ParseError> {
        self.advance();
        let arguments = self.parse_call_arguments()?;
        Ok(Expression::Call {
            callee: Box::new(callee),
            arguments,
        })
    }

    fn parse_call_arguments(&mut self) -> Result<Vec<Expression>, ParseError> {
        let mut arguments = Vec::new();
        if self.match_token(TokenKind::CloseParenthesis) {
            return Ok(arguments);
        }

        loop {
            arguments.push(self.parse_expression(Precedence::Lowest)?);
            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }

        self.expect(TokenKind::CloseParenthesis)?;
        Ok(arguments)
    }
}
