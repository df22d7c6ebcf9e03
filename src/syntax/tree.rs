//! Arena-backed syntax tree

use super::kind::SyntaxKind;
use super::line_index::{LineCol, LineIndex};
use text_size::{TextRange, TextSize};

/// Index of an element inside one [`SyntaxTree`]
///
/// Ids are only produced by the tree that owns the element. Using an id with
/// a different tree is a logic error and may panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn from_index(index: usize) -> Self {
        NodeId(index as u32)
    }

    /// Position of the element in the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ElementData {
    pub(crate) kind: SyntaxKind,
    /// Range without the outer leading and trailing trivia
    pub(crate) range: TextRange,
    /// Range including all attached trivia
    pub(crate) full_range: TextRange,
    pub(crate) parent: Option<NodeId>,
    /// For nodes: child nodes and tokens. For tokens: leading trivia followed
    /// by trailing trivia.
    pub(crate) children: Vec<NodeId>,
    /// For tokens: how many of `children` are leading trivia
    pub(crate) leading: usize,
}

/// An immutable syntax tree
///
/// Built once per analysis pass with
/// [`SyntaxTreeBuilder`](super::SyntaxTreeBuilder) and shared read-only by
/// every rule invocation.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    text: String,
    elements: Vec<ElementData>,
    root: NodeId,
    /// Every directive trivia in source order
    directives: Vec<NodeId>,
    line_index: LineIndex,
}

impl SyntaxTree {
    pub(crate) fn new(
        text: String,
        elements: Vec<ElementData>,
        root: NodeId,
        directives: Vec<NodeId>,
    ) -> Self {
        let line_index = LineIndex::new(&text);
        Self {
            text,
            elements,
            root,
            directives,
            line_index,
        }
    }

    fn data(&self, id: NodeId) -> &ElementData {
        &self.elements[id.index()]
    }

    /// The root node, normally a `CompilationUnit`
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Full source text covered by the tree
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of elements (nodes, tokens and trivia)
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn kind(&self, id: NodeId) -> SyntaxKind {
        self.data(id).kind
    }

    /// Range of the element without its outer trivia
    pub fn range(&self, id: NodeId) -> TextRange {
        self.data(id).range
    }

    /// Range of the element including leading and trailing trivia
    pub fn full_range(&self, id: NodeId) -> TextRange {
        self.data(id).full_range
    }

    /// Source text of the element without its outer trivia
    pub fn element_text(&self, id: NodeId) -> &str {
        &self.text[self.range(id)]
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.data(id).parent
    }

    /// Children of a node, or the trivia of a token
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.data(id).children
    }

    /// Leading trivia of a token; empty for nodes and trivia
    pub fn leading_trivia(&self, id: NodeId) -> &[NodeId] {
        let data = self.data(id);
        if data.kind.is_token() {
            &data.children[..data.leading]
        } else {
            &[]
        }
    }

    /// Trailing trivia of a token; empty for nodes and trivia
    pub fn trailing_trivia(&self, id: NodeId) -> &[NodeId] {
        let data = self.data(id);
        if data.kind.is_token() {
            &data.children[data.leading..]
        } else {
            &[]
        }
    }

    /// Strict ancestors, nearest first
    ///
    /// For trivia the walk passes through the owning token.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// The element itself followed by all of its descendants in source order
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            stack: vec![id],
        }
    }

    /// Returns true if `ancestor` is `id` or one of its ancestors
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, id: NodeId) -> bool {
        ancestor == id || self.ancestors(id).any(|a| a == ancestor)
    }

    /// All directive trivia in the tree, ascending by offset
    pub fn directives(&self) -> &[NodeId] {
        &self.directives
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// 1-indexed line and column of an offset in this tree's text
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        self.line_index.line_col(offset)
    }
}

/// Iterator over the ancestors of an element
pub struct Ancestors<'a> {
    tree: &'a SyntaxTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

/// Pre-order iterator over a subtree
pub struct Descendants<'a> {
    tree: &'a SyntaxTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(current).iter().rev().copied());
        Some(current)
    }
}
