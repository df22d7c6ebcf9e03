//! Test utilities for regionlint integration tests
#![allow(dead_code)]

use regionlint::syntax::{SyntaxKind, SyntaxTree, SyntaxTreeBuilder};

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Extract Some value or panic with context
#[macro_export]
macro_rules! assert_some {
    ($expr:expr) => {
        match $expr {
            Some(v) => v,
            None => panic!("assertion failed: expected Some, got None"),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Some(v) => v,
            None => panic!("{}: got None", $msg),
        }
    };
}

/// Builds C#-shaped syntax trees line by line, indenting four spaces per level
///
/// Every directive is emitted on its own line as leading trivia of the next
/// token, the way a C# parser attaches it.
pub struct Source {
    b: SyntaxTreeBuilder,
    depth: usize,
}

impl Source {
    pub fn new() -> Self {
        let mut b = SyntaxTreeBuilder::new();
        b.start_node(SyntaxKind::CompilationUnit);
        Self { b, depth: 0 }
    }

    pub fn finish(mut self) -> SyntaxTree {
        self.b.finish_node();
        assert_ok!(self.b.finish(), "fixture tree")
    }

    /// Direct access for shapes the helpers do not cover
    pub fn builder(&mut self) -> &mut SyntaxTreeBuilder {
        &mut self.b
    }

    fn indent(&mut self) {
        if self.depth > 0 {
            self.b
                .trivia(SyntaxKind::WhitespaceTrivia, &"    ".repeat(self.depth));
        }
    }

    fn end_line(&mut self) {
        self.b.trailing_trivia(SyntaxKind::EndOfLineTrivia, "\n");
    }

    fn space(&mut self) {
        self.b.trailing_trivia(SyntaxKind::WhitespaceTrivia, " ");
    }

    pub fn region(&mut self, name: &str) -> &mut Self {
        self.indent();
        self.b
            .trivia(SyntaxKind::RegionDirectiveTrivia, &format!("#region {name}\n"));
        self
    }

    pub fn end_region(&mut self) -> &mut Self {
        self.indent();
        self.b
            .trivia(SyntaxKind::EndRegionDirectiveTrivia, "#endregion\n");
        self
    }

    pub fn comment(&mut self, text: &str) -> &mut Self {
        self.indent();
        self.b
            .trivia(SyntaxKind::SingleLineCommentTrivia, &format!("// {text}"));
        self.b.trivia(SyntaxKind::EndOfLineTrivia, "\n");
        self
    }

    pub fn using(&mut self, name: &str) -> &mut Self {
        self.b.start_node(SyntaxKind::ExpressionStatement);
        self.indent();
        self.b.token(SyntaxKind::KeywordToken, "using");
        self.space();
        self.b.token(SyntaxKind::IdentifierToken, name);
        self.b.token(SyntaxKind::SemicolonToken, ";");
        self.end_line();
        self.b.finish_node();
        self
    }

    /// `{ ... }` lines delimiting a type or accessor list, not a body
    fn braces(&mut self, body: impl FnOnce(&mut Self)) {
        self.indent();
        self.b.token(SyntaxKind::OpenBraceToken, "{");
        self.end_line();
        self.depth += 1;
        body(self);
        self.depth -= 1;
        self.indent();
        self.b.token(SyntaxKind::CloseBraceToken, "}");
        self.end_line();
    }

    fn block(&mut self, body: impl FnOnce(&mut Self)) {
        self.b.start_node(SyntaxKind::Block);
        self.braces(body);
        self.b.finish_node();
    }

    fn declaration_header(&mut self, kind: SyntaxKind, keyword: &str, name: &str) {
        self.b.start_node(kind);
        self.indent();
        self.b.token(SyntaxKind::KeywordToken, keyword);
        self.space();
        self.b.token(SyntaxKind::IdentifierToken, name);
    }

    fn parameter_list(&mut self) {
        self.b.start_node(SyntaxKind::ParameterList);
        self.b.token(SyntaxKind::OpenParenToken, "(");
        self.b.token(SyntaxKind::CloseParenToken, ")");
        self.b.finish_node();
    }

    pub fn namespace(&mut self, name: &str, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.declaration_header(SyntaxKind::NamespaceDeclaration, "namespace", name);
        self.end_line();
        self.braces(body);
        self.b.finish_node();
        self
    }

    pub fn class(&mut self, name: &str, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.declaration_header(SyntaxKind::ClassDeclaration, "class", name);
        self.end_line();
        self.braces(body);
        self.b.finish_node();
        self
    }

    pub fn field(&mut self, name: &str) -> &mut Self {
        self.declaration_header(SyntaxKind::FieldDeclaration, "int", name);
        self.b.token(SyntaxKind::SemicolonToken, ";");
        self.end_line();
        self.b.finish_node();
        self
    }

    pub fn method(&mut self, name: &str, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.declaration_header(SyntaxKind::MethodDeclaration, "void", name);
        self.parameter_list();
        self.end_line();
        self.block(body);
        self.b.finish_node();
        self
    }

    pub fn constructor(&mut self, name: &str, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.declaration_header(SyntaxKind::ConstructorDeclaration, "public", name);
        self.parameter_list();
        self.end_line();
        self.block(body);
        self.b.finish_node();
        self
    }

    /// `int Name() => <body> 0;`, with the body emitted before the literal
    pub fn expression_method(&mut self, name: &str, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.declaration_header(SyntaxKind::MethodDeclaration, "int", name);
        self.parameter_list();
        self.space();
        self.b.start_node(SyntaxKind::ArrowExpressionClause);
        self.b.token(SyntaxKind::ArrowToken, "=>");
        self.end_line();
        self.depth += 1;
        body(self);
        self.indent();
        self.b.start_node(SyntaxKind::Expression);
        self.b.token(SyntaxKind::LiteralToken, "0");
        self.b.finish_node();
        self.depth -= 1;
        self.b.finish_node();
        self.b.token(SyntaxKind::SemicolonToken, ";");
        self.end_line();
        self.b.finish_node();
        self
    }

    pub fn property(&mut self, name: &str, accessors: impl FnOnce(&mut Self)) -> &mut Self {
        self.declaration_header(SyntaxKind::PropertyDeclaration, "int", name);
        self.end_line();
        self.b.start_node(SyntaxKind::AccessorList);
        self.braces(accessors);
        self.b.finish_node();
        self.b.finish_node();
        self
    }

    pub fn accessor(&mut self, keyword: &str, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.b.start_node(SyntaxKind::AccessorDeclaration);
        self.indent();
        self.b.token(SyntaxKind::KeywordToken, keyword);
        self.end_line();
        self.block(body);
        self.b.finish_node();
        self
    }

    pub fn local_function(&mut self, name: &str, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.declaration_header(SyntaxKind::LocalFunctionStatement, "void", name);
        self.parameter_list();
        self.end_line();
        self.block(body);
        self.b.finish_node();
        self
    }

    pub fn if_block(&mut self, condition: &str, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.b.start_node(SyntaxKind::IfStatement);
        self.indent();
        self.b.token(SyntaxKind::KeywordToken, "if");
        self.space();
        self.b.token(SyntaxKind::OpenParenToken, "(");
        self.b.token(SyntaxKind::IdentifierToken, condition);
        self.b.token(SyntaxKind::CloseParenToken, ")");
        self.end_line();
        self.block(body);
        self.b.finish_node();
        self
    }

    /// A bare `{ ... }` block statement
    pub fn nested_block(&mut self, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.block(body);
        self
    }

    /// `name();`
    pub fn statement(&mut self, name: &str) -> &mut Self {
        self.b.start_node(SyntaxKind::ExpressionStatement);
        self.indent();
        self.b.token(SyntaxKind::IdentifierToken, name);
        self.b.token(SyntaxKind::OpenParenToken, "(");
        self.b.token(SyntaxKind::CloseParenToken, ")");
        self.b.token(SyntaxKind::SemicolonToken, ";");
        self.end_line();
        self.b.finish_node();
        self
    }
}

impl Default for Source {
    fn default() -> Self {
        Self::new()
    }
}
