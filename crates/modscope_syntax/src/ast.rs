//! Abstract Syntax Tree for the declaration language.

/// Source span (byte offsets, end exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

pub type Ident = String;

/// A program is a sequence of declarations
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub declarations: Vec<Spanned<Declaration>>,
}

/// Top-level declarations
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Import(ImportDecl),
    Type(TypeDecl),
    Method(MethodDecl),
}

/// `import Name`
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
    pub module: Spanned<Ident>,
}

/// `type Name`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub name: Spanned<Ident>,
}

/// `Receiver.name params... = body`, or `name params... = body` for a method on the module itself.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub receiver: Option<Spanned<Ident>>,
    pub name: Spanned<Ident>,
    pub params: Vec<Spanned<Ident>>,
    pub body: Spanned<Expr>,
}

/// Method bodies are single atoms.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Int(i64),
    Text(String),
    /// A reference to one of the method's parameters
    Name(Ident),
}
