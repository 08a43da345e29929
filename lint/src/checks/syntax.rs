use crate::line::Line;
use crate::report::{Issue, Rule, Severity};

/// Mnemonic existence only; operand counts and types are out of scope
/// for the line-oriented engine.
pub fn check(lines: &[Line]) -> Vec<Issue> {
    let mut issues = Vec::new();
    for line in lines {
        if !line.is_code() {
            continue;
        }
        // Label-only lines are valid.
        let Some(mnemonic) = line.body().split_whitespace().next() else {
            continue;
        };
        if arch::inst::lookup(mnemonic).is_none() {
            issues.push(Issue {
                severity: Severity::Error,
                line: line.no(),
                column: Some(1),
                message: format!("Unknown instruction '{}'", mnemonic),
                rule: Rule::UnknownInstruction,
            });
        }
    }
    issues
}
