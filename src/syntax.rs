#![forbid(unsafe_code)]

//! Immutable syntax model consumed by rules
//!
//! A [`SyntaxTree`] is an arena of elements addressed by [`NodeId`]. Nodes
//! own their children by index and point back at their parent by index, so
//! ancestor walks are index chases. Trivia (whitespace, comments and
//! preprocessor directives) hangs off tokens as leading or trailing trivia.
//!
//! Trees are assembled by a host with [`SyntaxTreeBuilder`] from pieces it
//! has already lexed and parsed; nothing in this crate reads source text.

mod builder;
mod kind;
mod line_index;
mod tree;

pub use builder::SyntaxTreeBuilder;
pub use kind::SyntaxKind;
pub use line_index::{LineCol, LineIndex};
pub use text_size::{TextRange, TextSize};
pub use tree::{Ancestors, Descendants, NodeId, SyntaxTree};
