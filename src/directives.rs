#![forbid(unsafe_code)]

//! Region directive location and matching
//!
//! Region markers live in the trivia layer: `#region` is a
//! [`SyntaxKind::RegionDirectiveTrivia`] and `#endregion` an
//! [`SyntaxKind::EndRegionDirectiveTrivia`]. Start and end markers pair up
//! with a stack discipline: each start pushes, each end pops the most recent
//! unmatched start. An end seen with an empty stack is an orphan and matches
//! nothing.

use crate::syntax::{NodeId, SyntaxKind, SyntaxTree, TextSize};

/// A `#region` marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionStart(NodeId);

/// An `#endregion` marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionEnd(NodeId);

/// Typed view of a preprocessor directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Region(RegionStart),
    EndRegion(RegionEnd),
    /// Any other directive (`#if`, `#pragma`, ...)
    Other(NodeId),
}

impl Directive {
    /// Views `id` as a directive; `None` when it is not directive trivia
    pub fn cast(tree: &SyntaxTree, id: NodeId) -> Option<Self> {
        match tree.kind(id) {
            SyntaxKind::RegionDirectiveTrivia => Some(Directive::Region(RegionStart(id))),
            SyntaxKind::EndRegionDirectiveTrivia => Some(Directive::EndRegion(RegionEnd(id))),
            kind if kind.is_directive() => Some(Directive::Other(id)),
            _ => None,
        }
    }

    pub fn node(self) -> NodeId {
        match self {
            Directive::Region(start) => start.node(),
            Directive::EndRegion(end) => end.node(),
            Directive::Other(id) => id,
        }
    }
}

impl RegionStart {
    /// Views `id` as a region start marker
    pub fn cast(tree: &SyntaxTree, id: NodeId) -> Option<Self> {
        match Directive::cast(tree, id)? {
            Directive::Region(start) => Some(start),
            _ => None,
        }
    }

    pub fn node(self) -> NodeId {
        self.0
    }

    pub fn offset(self, tree: &SyntaxTree) -> TextSize {
        tree.range(self.0).start()
    }

    /// The region's name: the directive text after `#region`, trimmed
    pub fn name(self, tree: &SyntaxTree) -> &str {
        directive_argument(tree.element_text(self.0), "region")
    }
}

impl RegionEnd {
    /// Views `id` as a region end marker
    pub fn cast(tree: &SyntaxTree, id: NodeId) -> Option<Self> {
        match Directive::cast(tree, id)? {
            Directive::EndRegion(end) => Some(end),
            _ => None,
        }
    }

    pub fn node(self) -> NodeId {
        self.0
    }

    pub fn offset(self, tree: &SyntaxTree) -> TextSize {
        tree.range(self.0).start()
    }
}

/// Strips `#`, optional spaces and the directive keyword from a directive's text
fn directive_argument<'a>(text: &'a str, keyword: &str) -> &'a str {
    let rest = text.trim_start().trim_start_matches('#').trim_start();
    rest.strip_prefix(keyword).unwrap_or(rest).trim()
}

/// A region start marker with its matched end marker, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionDirective {
    pub start: RegionStart,
    /// `None` when the region is never closed
    pub end: Option<RegionEnd>,
}

impl RegionDirective {
    pub fn start_offset(&self, tree: &SyntaxTree) -> TextSize {
        self.start.offset(tree)
    }

    pub fn end_offset(&self, tree: &SyntaxTree) -> Option<TextSize> {
        self.end.map(|end| end.offset(tree))
    }

    pub fn is_terminated(&self) -> bool {
        self.end.is_some()
    }
}

/// Every region of a tree, matched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionPairs {
    /// Regions ascending by start offset
    pub regions: Vec<RegionDirective>,
    /// End markers with no start to close
    pub orphan_ends: Vec<RegionEnd>,
}

/// Lazily yields every region start marker under `node`, ascending by offset
///
/// Pass [`SyntaxTree::root`] to scan the whole tree.
pub fn region_starts(tree: &SyntaxTree, node: NodeId) -> impl Iterator<Item = RegionStart> + '_ {
    tree.descendants(node)
        .filter_map(move |id| RegionStart::cast(tree, id))
}

/// Pairs every start and end marker in the tree
pub fn region_pairs(tree: &SyntaxTree) -> RegionPairs {
    let mut pairs = RegionPairs::default();
    let mut open: Vec<usize> = Vec::new();

    for &id in tree.directives() {
        match Directive::cast(tree, id) {
            Some(Directive::Region(start)) => {
                open.push(pairs.regions.len());
                pairs.regions.push(RegionDirective { start, end: None });
            }
            Some(Directive::EndRegion(end)) => match open.pop() {
                Some(index) => pairs.regions[index].end = Some(end),
                None => pairs.orphan_ends.push(end),
            },
            Some(Directive::Other(_)) | None => {}
        }
    }

    pairs
}

/// Finds the end marker matched to `start`
///
/// Only directives after `start` matter: starts before it are deeper in the
/// stack and cannot claim an end until `start` itself is closed.
pub fn matching_end(tree: &SyntaxTree, start: RegionStart) -> Option<RegionEnd> {
    scan_for_end(tree, start, None)
}

/// Like [`matching_end`], but gives up at the first directive starting after
/// `limit`
pub fn matching_end_within(
    tree: &SyntaxTree,
    start: RegionStart,
    limit: TextSize,
) -> Option<RegionEnd> {
    scan_for_end(tree, start, Some(limit))
}

fn scan_for_end(tree: &SyntaxTree, start: RegionStart, limit: Option<TextSize>) -> Option<RegionEnd> {
    // Directives are recorded in allocation order, so ids are sorted too.
    // Offsets are not unique once directives can be empty.
    let directives = tree.directives();
    let position = directives.binary_search(&start.node()).ok()?;

    let mut depth = 0usize;
    for &id in &directives[position + 1..] {
        if limit.is_some_and(|limit| tree.range(id).start() > limit) {
            return None;
        }
        match Directive::cast(tree, id) {
            Some(Directive::Region(_)) => depth += 1,
            Some(Directive::EndRegion(end)) => {
                if depth == 0 {
                    return Some(end);
                }
                depth -= 1;
            }
            Some(Directive::Other(_)) | None => {}
        }
    }
    None
}
