//! Repairs for the `{*{20}{l}}` array construct that Word-to-LaTeX converters
//! emit for systems of equations and alternatives.

use super::{Rewrite, RuleGroup};

/// The malformed left-aligned opener whose occurrence count picks the branch.
pub const MALFORMED_ARRAY: &str = "\\begin{array}{*{20}{l}}";

const CENTERED_OPENER: &str = "{\\begin{array}{*{20}{c}}";
const RIGHT_OPENER: &str = "{\\begin{array}{*{20}{r}}";

/// A lone malformed array: keep it an array, close the `\left\{` it hangs
/// off before any trailing implication arrow, and drop the stray braces.
pub const SINGLE_ARRAY: RuleGroup = RuleGroup {
    name: "single-array",
    applies: has_single_malformed_array,
    rewrites: &[
        Rewrite::new(
            "end{array} \\Leftrightarrow",
            "end{array} \\right. \\Leftrightarrow",
        ),
        Rewrite::new("end{array} \\Rightarrow", "end{array} \\right. \\Rightarrow"),
        Rewrite::new("end{array}} \\right.} \\right.", "end{array} \\right. "),
        Rewrite::new("{\\begin{array}{*{20}{l}}", "\\begin{array}{l}"),
        Rewrite::new("end{array}}", "end{array}"),
    ],
};

/// Repeated or non-left-aligned arrays: rewrite every array to `cases` and
/// drop the manual delimiters around them.
pub const CASES: RuleGroup = RuleGroup {
    name: "cases",
    applies: has_any_malformed_array,
    rewrites: &[
        Rewrite::strip("\\left\\{"),
        Rewrite::strip("\\left["),
        Rewrite::strip("} \\right.}"),
        Rewrite::strip("\\right.}"),
        Rewrite::strip("\\right."),
        Rewrite::new("{\\begin{array}{*{20}{l}}", "\\begin{cases}"),
        Rewrite::new(CENTERED_OPENER, "\\begin{cases}"),
        Rewrite::new(RIGHT_OPENER, "\\begin{cases}"),
        Rewrite::new("\\begin{array}{l}", "\\begin{cases}"),
        Rewrite::new("end{array}}", "end{cases}"),
        Rewrite::new("\\end{array}", "\\end{cases}"),
        Rewrite::new("{\\rm{ suy ra }}", "\\quad \\Rightarrow \\quad"),
    ],
};

fn has_single_malformed_array(formula: &str) -> bool {
    formula.matches(MALFORMED_ARRAY).count() == 1
}

fn has_any_malformed_array(formula: &str) -> bool {
    formula.contains(MALFORMED_ARRAY)
        || formula.contains(CENTERED_OPENER)
        || formula.contains(RIGHT_OPENER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_array_precondition() {
        assert!(!has_single_malformed_array("x"));
        assert!(has_single_malformed_array("{\\begin{array}{*{20}{l}}a\\end{array}}"));
        assert!(!has_single_malformed_array(
            "{\\begin{array}{*{20}{l}}a\\end{array}}{\\begin{array}{*{20}{l}}b\\end{array}}"
        ));
    }

    #[test]
    fn test_cases_precondition() {
        assert!(has_any_malformed_array("{\\begin{array}{*{20}{c}}"));
        assert!(has_any_malformed_array("{\\begin{array}{*{20}{r}}"));
        // Centered and right variants only count with their leading brace.
        assert!(!has_any_malformed_array("\\begin{array}{*{20}{c}}"));
        assert!(!has_any_malformed_array("\\begin{array}{l}"));
    }

    #[test]
    fn test_collapses_doubled_closers() {
        let formula = "{\\begin{array}{*{20}{l}}a\\end{array}} \\right.} \\right. x".to_string();
        assert_eq!(
            SINGLE_ARRAY.apply(formula),
            "\\begin{array}{l}a\\end{array} \\right.  x"
        );
    }
}
