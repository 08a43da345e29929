use arch::dev::Dev;
use arch::reg::Reg;

use crate::line::Line;
use crate::report::{Issue, Rule, Severity};
use crate::token;

/// Range checks for numbered register and device tokens. The scan runs
/// over every raw line, comments included, and reports each offending
/// token at its own column.
pub fn check(lines: &[Line]) -> Vec<Issue> {
    let mut issues = Vec::new();

    for line in lines {
        for cap in token::REGISTER.captures_iter(line.raw()) {
            if cap.get(1).is_none() {
                continue; // ra / sp
            }
            let m = cap.get(0).unwrap();
            let shown = match Reg::parse(m.as_str()) {
                Some(reg) if reg.in_range() => continue,
                Some(reg) => reg.to_string(),
                // Digits too large for u64 cannot be in range either.
                None => m.as_str().to_string(),
            };
            issues.push(Issue {
                severity: Severity::Error,
                line: line.no(),
                column: Some(token::column(line.raw(), m.start())),
                message: format!("Invalid register '{}' (valid: r0-r15, ra, sp)", shown),
                rule: Rule::InvalidRegister,
            });
        }

        for cap in token::DEVICE.captures_iter(line.raw()) {
            if cap.get(1).is_none() {
                continue; // db / dr
            }
            let m = cap.get(0).unwrap();
            let shown = match Dev::parse(m.as_str()) {
                Some(dev) if dev.in_range() => continue,
                Some(dev) => dev.to_string(),
                None => m.as_str().to_string(),
            };
            issues.push(Issue {
                severity: Severity::Error,
                line: line.no(),
                column: Some(token::column(line.raw(), m.start())),
                message: format!("Invalid device '{}' (valid: d0-d5, db, dr)", shown),
                rule: Rule::InvalidDevice,
            });
        }
    }

    issues
}
