/// Token-stream helpers and error recovery.
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    ///
    /// An empty token slice (never produced by the lexer) behaves like a lone `Eof`.
    fn peek(&self) -> &Token {
        static EOF: Token = Token {
            kind: TokenKind::Eof,
            span: Span { start: 0, end: 0 },
        };
        self.tokens.get(self.pos).or(self.tokens.last()).unwrap_or(&EOF)
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    fn match_token(&mut self, kind: &TokenKind) -> bool {
        if &self.peek().kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind, msg: &str) -> Result<Token, CompileError> {
        if &self.peek().kind == kind {
            Ok(self.advance())
        } else {
            Err(self.error_here(msg))
        }
    }

    /// Consume an identifier and return it with its span.
    fn identifier(&mut self, msg: &str) -> Result<Spanned<Ident>, CompileError> {
        if let TokenKind::Ident(name) = &self.peek().kind {
            let name = name.clone();
            let span = self.advance().span;
            Ok(Spanned::new(name, span))
        } else {
            Err(self.error_here(msg))
        }
    }

    /// Require the end of the current declaration (a newline or end of input).
    fn end_of_declaration(&mut self) -> Result<(), CompileError> {
        if self.is_at_end() || self.match_token(&TokenKind::Newline) {
            Ok(())
        } else {
            Err(self.error_here("Expected end of line"))
        }
    }

    fn error_here(&self, msg: &str) -> CompileError {
        CompileError::syntax(format!("{}, found {}", msg, self.peek().kind.describe()), self.peek().span)
    }

    fn skip_newlines(&mut self) {
        while self.match_token(&TokenKind::Newline) {}
    }

    /// Skip to the start of the next line.
    fn synchronize(&mut self) {
        while !self.is_at_end() {
            if matches!(self.advance().kind, TokenKind::Newline) {
                return;
            }
        }
    }
}
