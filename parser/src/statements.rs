use model::{BlockStatement, Statement, TokenKind};
use tracing::trace;

use crate::error::ParseError;
use crate::expressions::ExpressionParser;
use crate::parser::Parser;
use crate::precedence::Precedence;

/// Statement parsing functionality
pub(crate) trait StatementParser {
    fn parse_statement(&mut self) -> Result<Statement, ParseError>;
    fn parse_block(&mut self) -> Result<BlockStatement, ParseError>;
}

impl StatementParser for Parser<'_> {
    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        trace!(token = %self.current, "statement");
        match self.current.kind {
            TokenKind::OpenBrace => Ok(Statement::Block(self.parse_block()?)),
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_block(&mut self) -> Result<BlockStatement, ParseError> {
        self.nested(Self::parse_block_statements)
    }
}

impl Parser<'_> {
    fn parse_block_statements(&mut self) -> Result<BlockStatement, ParseError> {
        self.expect(TokenKind::OpenBrace)?;
        let mut statements = Vec::new();
        while !self.current_is(TokenKind::CloseBrace) && !self.current_is(TokenKind::Eof) {
            statements.push(self.parse_statement()?);
            self.skip_semicolon();
        }
        self.expect(TokenKind::CloseBrace)?;
        Ok(BlockStatement { statements })
    }

    // let <identifier> = <expression>
    fn parse_let_statement(&mut self) -> Result<Statement, ParseError> {
        self.advance();
        let name = self.expect_identifier()?;
        self.expect(TokenKind::Assign)?;
        let value = self.parse_expression(Precedence::Lowest)?;
        Ok(Statement::Let { name, value })
    }

    fn parse_return_statement(&mut self) -> Result<Statement, ParseError> {
        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        Ok(Statement::Return(value))
    }

    fn parse_expression_statement(&mut self) -> Result<Statement, ParseError> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        Ok(Statement::Expression(expr))
    }
}
