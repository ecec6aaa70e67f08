//! Generic fixes applied to every formula body.

use super::{Rewrite, RuleGroup};

pub const CLEANUP: RuleGroup = RuleGroup {
    name: "cleanup",
    applies: always,
    rewrites: &[
        // Paragraph markup leaking out of rich-text editors
        Rewrite::strip("<br/>"),
        Rewrite::strip("<p>"),
        Rewrite::strip("</p>"),
        Rewrite::new("^^\\circ", "^\\circ"),
        // Entities re-escaped after the first decoding pass
        Rewrite::new("&lt;", "<"),
        Rewrite::new("&gt;", ">"),
        Rewrite::new("\\mathop \\smallint \\nolimits^", "\\int"),
        Rewrite::new("\\right)}^", "\\right)}"),
        Rewrite::new("C)^'}", "C)'}"),
    ],
};

fn always(_: &str) -> bool {
    true
}
