//! Incremental construction of a [`SyntaxTree`]

use super::kind::SyntaxKind;
use super::tree::{ElementData, NodeId, SyntaxTree};
use crate::error::TreeError;
use text_size::{TextRange, TextSize};

/// Builds a [`SyntaxTree`] from nodes, tokens and trivia supplied in source order
///
/// Trivia added with [`trivia`](Self::trivia) becomes leading trivia of the
/// next token; [`trailing_trivia`](Self::trailing_trivia) attaches to the
/// previous token. Trivia left over when the tree is finished is attached to
/// an `EndOfFileToken` appended to the root.
///
/// Builder calls never fail on their own. The first misuse is remembered and
/// returned by [`finish`](Self::finish).
///
/// ```
/// use regionlint::syntax::{SyntaxKind, SyntaxTreeBuilder};
///
/// let mut b = SyntaxTreeBuilder::new();
/// b.start_node(SyntaxKind::CompilationUnit);
/// b.trivia(SyntaxKind::RegionDirectiveTrivia, "#region Fields\n");
/// b.trivia(SyntaxKind::EndRegionDirectiveTrivia, "#endregion\n");
/// b.finish_node();
/// let tree = b.finish().unwrap();
/// assert_eq!(tree.directives().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct SyntaxTreeBuilder {
    text: String,
    elements: Vec<ElementData>,
    /// Open nodes, innermost last
    stack: Vec<NodeId>,
    /// Leading trivia waiting for its token
    pending: Vec<NodeId>,
    last_token: Option<NodeId>,
    root: Option<NodeId>,
    directives: Vec<NodeId>,
    error: Option<TreeError>,
}

impl SyntaxTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a node; it becomes a child of the innermost open node
    pub fn start_node(&mut self, kind: SyntaxKind) {
        if self.error.is_some() {
            return;
        }
        if !kind.is_node() {
            return self.fail(TreeError::WrongKind {
                kind,
                expected: "node",
            });
        }
        let parent = self.stack.last().copied();
        if parent.is_none() && self.root.is_some() {
            return self.fail(TreeError::MultipleRoots);
        }

        let offset = self.offset();
        let id = self.push(ElementData {
            kind,
            range: TextRange::empty(offset),
            full_range: TextRange::empty(offset),
            parent,
            children: Vec::new(),
            leading: 0,
        });
        match parent {
            Some(parent) => self.elements[parent.index()].children.push(id),
            None => self.root = Some(id),
        }
        self.stack.push(id);
    }

    /// Closes the innermost open node
    pub fn finish_node(&mut self) {
        if self.error.is_some() {
            return;
        }
        match self.stack.pop() {
            Some(id) => self.update_node_ranges(id),
            None => self.fail(TreeError::UnbalancedFinish),
        }
    }

    /// Adds a token to the innermost open node, taking all pending trivia as
    /// its leading trivia
    pub fn token(&mut self, kind: SyntaxKind, text: &str) {
        if self.error.is_some() {
            return;
        }
        if !kind.is_token() {
            return self.fail(TreeError::WrongKind {
                kind,
                expected: "token",
            });
        }
        let Some(&parent) = self.stack.last() else {
            return self.fail(TreeError::Orphan(kind));
        };
        self.add_token(parent, kind, text);
    }

    /// Adds trivia that leads the next token
    pub fn trivia(&mut self, kind: SyntaxKind, text: &str) {
        if self.error.is_some() {
            return;
        }
        if !kind.is_trivia() {
            return self.fail(TreeError::WrongKind {
                kind,
                expected: "trivia",
            });
        }
        if self.root.is_none() {
            return self.fail(TreeError::Orphan(kind));
        }
        if let Some(id) = self.add_text(kind, text) {
            self.pending.push(id);
        }
    }

    /// Adds trivia that trails the most recent token
    pub fn trailing_trivia(&mut self, kind: SyntaxKind, text: &str) {
        if self.error.is_some() {
            return;
        }
        if !kind.is_trivia() {
            return self.fail(TreeError::WrongKind {
                kind,
                expected: "trivia",
            });
        }
        let Some(token) = self.last_token else {
            return self.fail(TreeError::DanglingTrivia(kind));
        };
        if !self.pending.is_empty() {
            return self.fail(TreeError::DanglingTrivia(kind));
        }
        let Some(id) = self.add_text(kind, text) else {
            return;
        };
        self.elements[id.index()].parent = Some(token);
        self.elements[token.index()].children.push(id);

        // Extend the full range of the token and every node already wrapping it
        let end = self.offset();
        let mut current = Some(token);
        while let Some(id) = current {
            let data = &mut self.elements[id.index()];
            data.full_range = TextRange::new(data.full_range.start(), end);
            current = data.parent;
        }
    }

    /// Completes the tree
    ///
    /// The root node must have been started and closed, and every other
    /// node closed. An `EndOfFileToken` carrying any pending trivia is
    /// appended to the root.
    pub fn finish(mut self) -> Result<SyntaxTree, TreeError> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        let root = self.root.ok_or(TreeError::NoRoot)?;
        if let Some(&open) = self.stack.last() {
            return Err(TreeError::UnclosedNode(self.elements[open.index()].kind));
        }

        self.add_token(root, SyntaxKind::EndOfFileToken, "");
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.update_node_ranges(root);

        Ok(SyntaxTree::new(
            self.text,
            self.elements,
            root,
            self.directives,
        ))
    }

    fn fail(&mut self, error: TreeError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    fn offset(&self) -> TextSize {
        // add_text keeps the length within u32
        TextSize::new(self.text.len() as u32)
    }

    fn push(&mut self, data: ElementData) -> NodeId {
        let id = NodeId::from_index(self.elements.len());
        self.elements.push(data);
        id
    }

    /// Appends text for a token or trivia and allocates its element with no parent
    fn add_text(&mut self, kind: SyntaxKind, text: &str) -> Option<NodeId> {
        let start = self.offset();
        let Some(end) = u32::try_from(self.text.len() + text.len())
            .ok()
            .map(TextSize::new)
        else {
            self.fail(TreeError::TextTooLong);
            return None;
        };
        self.text.push_str(text);

        let range = TextRange::new(start, end);
        let id = self.push(ElementData {
            kind,
            range,
            full_range: range,
            parent: None,
            children: Vec::new(),
            leading: 0,
        });
        if kind.is_directive() {
            self.directives.push(id);
        }
        Some(id)
    }

    fn add_token(&mut self, parent: NodeId, kind: SyntaxKind, text: &str) {
        let leading = std::mem::take(&mut self.pending);
        let full_start = leading
            .first()
            .map(|first| self.elements[first.index()].range.start());

        let Some(id) = self.add_text(kind, text) else {
            return;
        };
        for trivia in &leading {
            self.elements[trivia.index()].parent = Some(id);
        }

        let data = &mut self.elements[id.index()];
        data.parent = Some(parent);
        data.leading = leading.len();
        if let Some(full_start) = full_start {
            data.full_range = TextRange::new(full_start, data.range.end());
        }
        data.children = leading;

        self.elements[parent.index()].children.push(id);
        self.last_token = Some(id);
    }

    /// Recomputes a node's ranges from its first and last child
    fn update_node_ranges(&mut self, id: NodeId) {
        let data = &self.elements[id.index()];
        let (Some(first), Some(last)) = (data.children.first(), data.children.last()) else {
            return;
        };
        let first = &self.elements[first.index()];
        let last = &self.elements[last.index()];
        let range = TextRange::new(first.range.start(), last.range.end());
        let full_range = TextRange::new(first.full_range.start(), last.full_range.end());

        let data = &mut self.elements[id.index()];
        data.range = range;
        data.full_range = full_range;
    }
}
