//! Recursive-descent parser building arena nodes from the token stream.

use crate::ast::{Ast, Node, NodeId};
use crate::error::CoreError;
use crate::lexer::{Lexer, Token, TokenKind};

/// Parser over a live [`Lexer`].
///
/// Construction primes one "current" token. Each entry point consumes
/// exactly the tokens belonging to its construct and leaves the cursor
/// on the first token past it.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    current: Token,
    ast: Ast,
}

impl<'src> Parser<'src> {
    /// Prime the parser with the first token. Fallible because the very
    /// first token can already be a lex error.
    pub fn new(mut lexer: Lexer<'src>) -> Result<Parser<'src>, CoreError> {
        let current = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current,
            ast: Ast::new(),
        })
    }

    /// Consume the parser and hand back the arena it filled.
    pub fn into_ast(self) -> Ast {
        self.ast
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    fn advance(&mut self) -> Result<(), CoreError> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// expression := NUMBER (OPERATOR expression)?
    ///
    /// Operator chains are right-associative with no precedence between
    /// `+ - * /`: `2 * 3 + 4` parses as `2 * (3 + 4)`.
    pub fn parse_expression(&mut self) -> Result<NodeId, CoreError> {
        let value: i32 = self
            .current
            .text
            .parse()
            .map_err(|_| CoreError::InvalidNumber {
                text: self.current.text.clone(),
            })?;
        let left = self.ast.push(Node::Number(value));
        self.advance()?;

        if self.current.kind == TokenKind::Operator {
            let op = self
                .current
                .text
                .chars()
                .next()
                .expect("operator token carries its lexeme");
            self.advance()?;
            let right = self.parse_expression()?;
            return Ok(self.ast.push(Node::Binary {
                op,
                lhs: left,
                rhs: right,
            }));
        }

        Ok(left)
    }

    /// if-statement := 'if' expression _ expression ('else' expression)?
    ///
    /// The token after the condition is skipped without checking that it
    /// is `{`, each branch is a single expression, and no closing brace
    /// is consumed.
    pub fn parse_if_statement(&mut self) -> Result<NodeId, CoreError> {
        self.advance()?; // past 'if'
        let cond = self.parse_expression()?;

        self.advance()?; // opening-brace position, unchecked
        let then_branch = self.parse_expression()?;

        let mut else_branch = None;
        if self.current.kind == TokenKind::Else {
            self.advance()?;
            else_branch = Some(self.parse_expression()?);
        }

        Ok(self.ast.push(Node::If {
            cond,
            then_branch,
            else_branch,
        }))
    }

    /// while-statement := 'while' expression _ expression
    ///
    /// Same shape as [`Parser::parse_if_statement`]: blind brace skip,
    /// single-expression body.
    pub fn parse_while_statement(&mut self) -> Result<NodeId, CoreError> {
        self.advance()?; // past 'while'
        let cond = self.parse_expression()?;

        self.advance()?;
        let body = self.parse_expression()?;

        Ok(self.ast.push(Node::While { cond, body }))
    }
}
