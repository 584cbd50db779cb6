/// Declaration parsing methods.
impl<'a> Parser<'a> {
    // ========================================================================
    // Declarations
    // ========================================================================

    fn declaration(&mut self) -> Result<Spanned<Declaration>, CompileError> {
        let start = self.peek().span.start;

        let decl = if self.check_keyword(KeywordId::Import) {
            self.advance();
            let module = self.identifier("Expected module name after 'import'")?;
            Declaration::Import(ImportDecl { module })
        } else if self.check_keyword(KeywordId::Type) {
            self.advance();
            let name = self.identifier("Expected type name after 'type'")?;
            Declaration::Type(TypeDecl { name })
        } else if matches!(self.peek().kind, TokenKind::Ident(_)) {
            Declaration::Method(self.method_decl()?)
        } else {
            return Err(self.error_here("Expected declaration"));
        };

        let end = self.tokens[self.pos.saturating_sub(1)].span.end;
        self.end_of_declaration()?;
        Ok(Spanned::new(decl, Span::new(start, end)))
    }

    /// `Receiver.name params... = body` or `name params... = body`
    fn method_decl(&mut self) -> Result<MethodDecl, CompileError> {
        let first = self.identifier("Expected method name")?;

        let (receiver, name) = if self.match_token(&TokenKind::Dot) {
            let name = self.identifier("Expected method name after '.'")?;
            (Some(first), name)
        } else {
            (None, first)
        };

        let mut params = Vec::new();
        while matches!(self.peek().kind, TokenKind::Ident(_)) {
            params.push(self.identifier("Expected parameter name")?);
        }

        self.expect(&TokenKind::Eq, "Expected '=' after method signature")?;
        let body = self.expression()?;

        Ok(MethodDecl {
            receiver,
            name,
            params,
            body,
        })
    }

    fn expression(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let expr = match &self.peek().kind {
            TokenKind::Int(value) => Expr::Int(*value),
            TokenKind::String(value) => Expr::Text(value.clone()),
            TokenKind::Ident(name) => Expr::Name(name.clone()),
            _ => return Err(self.error_here("Expected a literal or parameter name")),
        };
        let span = self.advance().span;
        Ok(Spanned::new(expr, span))
    }
}
