use crate::lexer::{Keyword, Lexer, Token, TokenKind};
use crate::parser::{Checkpoint, DeclarationNode, NumberNode, ParserError};
use tracing::debug;

/// Single-token lookahead parser for `int <name> = <number>;`
///
/// Holds the lexer exclusively for its lifetime and pulls tokens on demand;
/// nothing is buffered beyond the current token.
pub struct Parser<'a> {
    lexer: &'a mut Lexer,
    current: Token,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: &'a mut Lexer) -> Self {
        let current = lexer.next_token();
        Self { lexer, current }
    }

    /// The lookahead token
    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn is_at_end(&self) -> bool {
        self.current.is_eof()
    }

    /// Advance to next token, returning the one just consumed
    fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.current, next)
    }

    /// Consume the current token if `matches` accepts it, else stop at `checkpoint`
    fn expect(
        &mut self,
        checkpoint: Checkpoint,
        matches: impl Fn(&Token) -> bool,
    ) -> Result<Token, ParserError> {
        if matches(&self.current) {
            debug!(%checkpoint, token = %self.current, "checkpoint passed");
            Ok(self.advance())
        } else {
            Err(self.violation(checkpoint))
        }
    }

    fn violation(&self, checkpoint: Checkpoint) -> ParserError {
        debug!(%checkpoint, token = %self.current, "grammar violation");
        ParserError::GrammarViolation {
            checkpoint,
            found: self.current.clone(),
        }
    }

    /// Parse exactly one declaration.
    ///
    /// Any mismatch ends the attempt; the offending token stays current and no
    /// partial node is returned. A literal outside `i32` fails with the token
    /// after it already current. On success the current token is the one after `;`.
    pub fn parse_declaration(&mut self) -> Result<DeclarationNode, ParserError> {
        let var_type = self
            .expect(Checkpoint::Start, |t| t.is_keyword(Keyword::Int))?
            .lexeme;

        let name = self
            .expect(Checkpoint::AfterType, |t| t.kind == TokenKind::Identifier)?
            .lexeme;

        self.expect(Checkpoint::AfterName, |t| t.is_symbol('='))?;

        let literal = self.expect(Checkpoint::AfterEquals, |t| t.kind == TokenKind::Number)?;
        let value: i32 = literal
            .lexeme
            .parse()
            .map_err(|e| ParserError::InvalidNumber(literal.lexeme.clone(), literal.pos, e))?;

        self.expect(Checkpoint::AfterValue, |t| t.is_symbol(';'))?;

        Ok(DeclarationNode::new(var_type, name, NumberNode::new(value)))
    }
}

/// Parse one declaration from the start of `source`
pub fn parse_source(source: &str) -> Result<DeclarationNode, ParserError> {
    let mut lexer = Lexer::new(source);
    let mut parser = Parser::new(&mut lexer);
    parser.parse_declaration()
}
