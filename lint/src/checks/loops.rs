use arch::inst;

use crate::line::Line;
use crate::report::{Issue, Rule, Severity};
use crate::symbols::Symbols;

/// Backward unconditional jumps are the only loop shape this pass can
/// see; it builds no control-flow graph. A loop body with no
/// yield-class instruction busy-spins the chip for a whole tick, which
/// is worth a warning but never an error.
pub fn check(lines: &[Line]) -> Vec<Issue> {
    let symbols = Symbols::collect(lines);
    let mut issues = Vec::new();

    // Candidate jumps: a plain `j` with a non-numeric bare-word target.
    // Conditional branches, `jal` and label-prefixed lines don't count.
    let mut jumps: Vec<(usize, &str)> = Vec::new();
    for line in lines {
        if !line.is_code() || line.label().is_some() {
            continue;
        }
        let mut words = line.body().split_whitespace();
        let Some(op) = words.next() else { continue };
        if !op.eq_ignore_ascii_case("j") {
            continue;
        }
        let Some(target) = words.next() else { continue };
        if target.chars().all(|c| c.is_ascii_digit()) || target.starts_with('-') {
            continue;
        }
        jumps.push((line.no(), target));
    }

    for (jump_line, target) in jumps {
        let Some(target_line) = symbols.label_line(target) else {
            continue;
        };
        if target_line >= jump_line {
            continue;
        }
        let span = &lines[target_line - 1..jump_line];
        let yields = span.iter().any(|line| {
            let lowered = line.raw().trim().to_lowercase();
            inst::YIELDS.iter().any(|y| lowered.contains(y))
        });
        if !yields {
            issues.push(Issue {
                severity: Severity::Warning,
                line: jump_line,
                column: None,
                message: format!("Loop to '{}' (line {}) may lack yield/sleep", target, target_line),
                rule: Rule::LoopWithoutYield,
            });
        }
    }

    issues
}
