#![forbid(unsafe_code)]

//! SA1124: Do not use regions
//!
//! A violation occurs whenever a region is placed anywhere within the code.
//! Editors collapse regions by default, which hides code from the people
//! maintaining it. Regions entirely inside one body are left to `SA1123`.

use crate::containment::is_completely_contained_in_body;
use crate::directives::Directive;
use crate::rules::{Diagnostic, DiagnosticDescriptor, DiagnosticSink, NodeContext, Rule};
use crate::syntax::SyntaxKind;
use crate::types::{RuleId, Severity};

/// Descriptor of the region rule
pub static DO_NOT_USE_REGIONS: DiagnosticDescriptor = DiagnosticDescriptor {
    id: RuleId::from_static("SA1124"),
    title: "Do not use regions",
    message: "Do not use regions",
    category: "StyleCop.CSharp.ReadabilityRules",
    description: "The C# code contains a region.",
    default_severity: Severity::Warning,
    enabled_by_default: true,
    help_link: Some("http://www.stylecop.com/docs/SA1124.html"),
};

/// Reports every `#region` that is not completely contained in a body
#[derive(Debug, Default, Clone, Copy)]
pub struct DoNotUseRegions;

impl DoNotUseRegions {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for DoNotUseRegions {
    fn descriptor(&self) -> &DiagnosticDescriptor {
        &DO_NOT_USE_REGIONS
    }

    fn interests(&self) -> &[SyntaxKind] {
        &[SyntaxKind::RegionDirectiveTrivia]
    }

    fn check(&self, ctx: &NodeContext<'_>, sink: &mut dyn DiagnosticSink) {
        let Some(Directive::Region(start)) = Directive::cast(ctx.tree, ctx.node) else {
            return;
        };

        if is_completely_contained_in_body(ctx.tree, start) {
            return;
        }

        tracing::trace!(
            rule = %DO_NOT_USE_REGIONS.id,
            region = start.name(ctx.tree),
            offset = u32::from(start.offset(ctx.tree)),
            "region outside of a single body"
        );
        sink.report(Diagnostic::new(
            &DO_NOT_USE_REGIONS,
            ctx.location_of(start.node()),
        ));
    }
}
