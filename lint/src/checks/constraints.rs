use arch::limits::Limits;

use crate::line::Line;
use crate::report::{Issue, Rule, Severity};

/// Hard limits: line count, per-line length, total byte size.
pub fn check(src: &str, lines: &[Line], limits: &Limits) -> Vec<Issue> {
    let mut issues = Vec::new();

    if lines.len() > limits.max_lines {
        issues.push(Issue {
            severity: Severity::Error,
            line: limits.max_lines + 1,
            column: None,
            message: format!(
                "Line count ({}) exceeds maximum ({})",
                lines.len(),
                limits.max_lines
            ),
            rule: Rule::LineCount,
        });
    }

    for line in lines {
        let len = line.raw().chars().count();
        if len > limits.max_line_length {
            issues.push(Issue {
                severity: Severity::Warning,
                line: line.no(),
                column: Some(limits.max_line_length + 1),
                message: format!(
                    "Line length ({}) exceeds recommended maximum ({})",
                    len, limits.max_line_length
                ),
                rule: Rule::LineTooLong,
            });
        }
    }

    // At most one size issue: info past 90% of the cap, error past the
    // cap itself.
    let bytes = src.len();
    if bytes * 10 > limits.max_bytes * 9 {
        let over = bytes > limits.max_bytes;
        issues.push(Issue {
            severity: if over { Severity::Error } else { Severity::Info },
            line: 1,
            column: None,
            message: format!(
                "Code size ({} bytes) approaching limit ({} bytes)",
                bytes, limits.max_bytes
            ),
            rule: if over {
                Rule::SizeExceeded
            } else {
                Rule::SizeNearLimit
            },
        });
    }

    issues
}
