//! Syntax kinds for nodes, tokens and trivia

/// The kind tag of every tree element
///
/// Kinds fall into three disjoint groups: nodes (interior elements), tokens
/// (leaves with text) and trivia (text attached to tokens that carries no
/// structure). The group of a kind never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SyntaxKind {
    // Nodes
    CompilationUnit,
    NamespaceDeclaration,
    FileScopedNamespaceDeclaration,
    ClassDeclaration,
    StructDeclaration,
    InterfaceDeclaration,
    RecordDeclaration,
    EnumDeclaration,
    EnumMemberDeclaration,
    FieldDeclaration,
    MethodDeclaration,
    ConstructorDeclaration,
    DestructorDeclaration,
    OperatorDeclaration,
    ConversionOperatorDeclaration,
    PropertyDeclaration,
    IndexerDeclaration,
    EventDeclaration,
    AccessorList,
    AccessorDeclaration,
    ParameterList,
    Parameter,
    LocalFunctionStatement,
    ParenthesizedLambdaExpression,
    SimpleLambdaExpression,
    AnonymousMethodExpression,
    Block,
    ArrowExpressionClause,
    LocalDeclarationStatement,
    ExpressionStatement,
    IfStatement,
    ElseClause,
    WhileStatement,
    ForStatement,
    ReturnStatement,
    Expression,

    // Tokens
    IdentifierToken,
    KeywordToken,
    LiteralToken,
    OperatorToken,
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    SemicolonToken,
    CommaToken,
    ArrowToken,
    EndOfFileToken,

    // Trivia
    WhitespaceTrivia,
    EndOfLineTrivia,
    SingleLineCommentTrivia,
    MultiLineCommentTrivia,
    DocumentationCommentTrivia,
    DisabledTextTrivia,
    RegionDirectiveTrivia,
    EndRegionDirectiveTrivia,
    IfDirectiveTrivia,
    ElifDirectiveTrivia,
    ElseDirectiveTrivia,
    EndIfDirectiveTrivia,
    DefineDirectiveTrivia,
    PragmaDirectiveTrivia,
}

impl SyntaxKind {
    /// Returns true for leaf tokens
    pub fn is_token(self) -> bool {
        use SyntaxKind::*;
        matches!(
            self,
            IdentifierToken
                | KeywordToken
                | LiteralToken
                | OperatorToken
                | OpenBraceToken
                | CloseBraceToken
                | OpenParenToken
                | CloseParenToken
                | SemicolonToken
                | CommaToken
                | ArrowToken
                | EndOfFileToken
        )
    }

    /// Returns true for trivia attached to tokens
    pub fn is_trivia(self) -> bool {
        use SyntaxKind::*;
        matches!(
            self,
            WhitespaceTrivia
                | EndOfLineTrivia
                | SingleLineCommentTrivia
                | MultiLineCommentTrivia
                | DocumentationCommentTrivia
                | DisabledTextTrivia
        ) || self.is_directive()
    }

    /// Returns true for preprocessor directive trivia
    pub fn is_directive(self) -> bool {
        use SyntaxKind::*;
        matches!(
            self,
            RegionDirectiveTrivia
                | EndRegionDirectiveTrivia
                | IfDirectiveTrivia
                | ElifDirectiveTrivia
                | ElseDirectiveTrivia
                | EndIfDirectiveTrivia
                | DefineDirectiveTrivia
                | PragmaDirectiveTrivia
        )
    }

    /// Returns true for interior nodes
    pub fn is_node(self) -> bool {
        !self.is_token() && !self.is_trivia()
    }

    /// Returns true for kinds that form an executable body
    ///
    /// Method, constructor, destructor, operator, accessor, local function,
    /// lambda and anonymous method bodies are all either a `Block` or an
    /// expression body (`ArrowExpressionClause`).
    pub fn is_body_construct(self) -> bool {
        matches!(self, SyntaxKind::Block | SyntaxKind::ArrowExpressionClause)
    }
}
