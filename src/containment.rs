#![forbid(unsafe_code)]

//! Body containment of region directives
//!
//! A region is completely contained in a body when its start marker and its
//! matched end marker both lie inside the nearest body construct enclosing
//! the start marker. `SA1123` reports the contained regions and `SA1124`
//! reports every other one, so both rules share this single predicate.

use crate::directives::{RegionStart, matching_end_within};
use crate::syntax::{NodeId, SyntaxTree};

/// Nearest body construct whose range encloses the start of `id`
///
/// Trivia hangs off the token that follows it, so a directive in front of a
/// nested block's `{` has that block as an ancestor without lying inside it.
/// Such ancestors are skipped.
pub fn enclosing_body(tree: &SyntaxTree, id: NodeId) -> Option<NodeId> {
    let offset = tree.range(id).start();
    tree.ancestors(id).find(|ancestor| {
        tree.kind(*ancestor).is_body_construct() && tree.range(*ancestor).contains_inclusive(offset)
    })
}

/// Returns true if the region opened by `start` is closed inside the same body
///
/// False when the start has no enclosing body, when the region is never
/// closed, or when the end marker lies outside the start's body.
pub fn is_completely_contained_in_body(tree: &SyntaxTree, start: RegionStart) -> bool {
    let Some(body) = enclosing_body(tree, start.node()) else {
        return false;
    };
    let span = tree.range(body);
    let Some(end) = matching_end_within(tree, start, span.end()) else {
        return false;
    };

    span.contains_inclusive(start.offset(tree)) && span.contains_inclusive(end.offset(tree))
}
