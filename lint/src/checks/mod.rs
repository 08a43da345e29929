pub mod branches;
pub mod constraints;
pub mod loops;
pub mod operands;
pub mod syntax;

use arch::limits::Limits;

use crate::line::Line;
use crate::report::Issue;

/// The checkers are independent: each walks the same line list and
/// appends to its own list, so relative issue order is only defined
/// within one checker.
pub fn run_all(src: &str, lines: &[Line], limits: &Limits) -> Vec<Issue> {
    let mut issues = Vec::new();
    issues.extend(constraints::check(src, lines, limits));
    issues.extend(syntax::check(lines));
    issues.extend(operands::check(lines));
    issues.extend(branches::check(lines));
    issues.extend(loops::check(lines));
    issues
}
