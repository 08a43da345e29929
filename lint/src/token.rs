//! Token patterns shared by the statistics pass and the checkers.

use once_cell::sync::Lazy;
use regex::Regex;

/// `name:` at the start of a trimmed line.
pub static LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+):").unwrap());

/// Numbered registers (any integer, range-checked later) and the two
/// named registers.
pub static REGISTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\br([0-9]+)\b|\b(ra|sp)\b").unwrap());

/// Numbered device pins and the two named ports.
pub static DEVICE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bd([0-9]+)\b|\b(db|dr)\b").unwrap());

pub static ALIAS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*alias\s+(\w+)\s+(\w+)").unwrap());

pub static DEFINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*define\s+(\w+)\s+(.+)").unwrap());

/// Optional label, a branch-shaped mnemonic, up to two comma-separated
/// operands, then the captured target word. Space-separated operand
/// lists make the first operand land in the target capture; the
/// resolver's operand-shape exclusions absorb that.
pub static BRANCH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:\w+:)?\s*(j|jr|jal|b\w+)\s+(?:[^,]+,\s*)?(?:[^,]+,\s*)?(\w+)\s*")
        .unwrap()
});

/// 1-indexed character column of a byte offset within `line`.
pub fn column(line: &str, byte_off: usize) -> usize {
    line[..byte_off].chars().count() + 1
}
