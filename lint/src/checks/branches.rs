use arch::inst;
use arch::reg::Reg;

use crate::line::Line;
use crate::report::{Issue, Rule, Severity};
use crate::symbols::Symbols;
use crate::token;

/// Two-pass branch-target resolution. The operand grammar is small but
/// irregular, so an unresolved name is only reported when the captured
/// target cannot be anything except a label: numeric and register
/// shaped operands, indirect references, and known aliases are all
/// skipped rather than parsed precisely.
pub fn check(lines: &[Line]) -> Vec<Issue> {
    let symbols = Symbols::collect(lines);
    let mut issues = Vec::new();

    for line in lines {
        if !line.is_code() {
            continue;
        }
        let Some(cap) = token::BRANCH.captures(line.code()) else {
            continue;
        };
        let mnemonic = cap[1].to_lowercase();
        let target = &cap[2];

        if is_non_label_operand(target) {
            continue;
        }

        // Device-testing branches take the device first, and the loose
        // tokenization can capture that operand instead of the label.
        // When the captured word is a known alias, assume it was the
        // device and stay quiet.
        if inst::is_device_branch(&mnemonic)
            && line.code().split_whitespace().count() >= 3
            && symbols.is_alias(target)
        {
            continue;
        }

        if !symbols.resolves(target) {
            issues.push(Issue {
                severity: Severity::Error,
                line: line.no(),
                column: None,
                message: format!("Undefined branch target '{}'", target),
                rule: Rule::UndefinedTarget,
            });
        }
    }

    issues
}

fn is_non_label_operand(target: &str) -> bool {
    // Bare or signed integers are relative jumps.
    if !target.is_empty() && target.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    if target.starts_with('-') {
        return true;
    }
    // r0-r15, ra, sp.
    if Reg::parse(target).is_some() {
        return true;
    }
    // Indirect register (rrX) and device (drX) references.
    if target.len() > 2 && (target.starts_with("rr") || target.starts_with("dr")) {
        return true;
    }
    false
}
