//! Formula normalization: ordered textual rewrites that repair LaTeX emitted
//! by word-processor converters before it reaches a math renderer.
//!
//! Rules run in two stages. First at most one array repair group fires (the
//! first whose precondition holds). Then the generic cleanup group always
//! runs; some of its rewrites assume the array repairs have already happened.

mod arrays;
mod cleanup;

pub use arrays::{CASES, MALFORMED_ARRAY, SINGLE_ARRAY};
pub use cleanup::CLEANUP;

/// A literal substitution, applied to every non-overlapping occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rewrite {
    pub from: &'static str,
    pub to: &'static str,
}

impl Rewrite {
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }

    pub const fn strip(from: &'static str) -> Self {
        Self { from, to: "" }
    }

    fn apply(&self, formula: String) -> String {
        if formula.contains(self.from) {
            formula.replace(self.from, self.to)
        } else {
            formula
        }
    }
}

/// An ordered list of rewrites guarded by a precondition on the formula.
#[derive(Clone, Copy)]
pub struct RuleGroup {
    pub name: &'static str,
    pub applies: fn(&str) -> bool,
    pub rewrites: &'static [Rewrite],
}

impl RuleGroup {
    /// Run every rewrite in order, without checking the precondition.
    pub fn apply(&self, formula: String) -> String {
        self.rewrites
            .iter()
            .fold(formula, |formula, rewrite| rewrite.apply(formula))
    }
}

/// Mutually exclusive array repairs, in priority order.
static ARRAY_REPAIRS: &[RuleGroup] = &[SINGLE_ARRAY, CASES];

/// Normalize one formula body for the math renderer.
pub fn normalize_formula(formula: &str) -> String {
    let mut result = formula.to_string();

    if let Some(group) = ARRAY_REPAIRS.iter().find(|group| (group.applies)(&result)) {
        tracing::trace!(group = group.name, "applying array repair");
        result = group.apply(result);
    }

    CLEANUP.apply(result)
}
