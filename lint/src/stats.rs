use std::collections::BTreeSet;

use crate::line::Line;
use crate::report::ValidationStats;
use crate::token;

/// One pass over the line list. Register and device tokens are
/// collected from the raw text, so references in trailing comments
/// count too; the byte size covers the whole source including line
/// terminators.
pub fn gather(src: &str, lines: &[Line]) -> ValidationStats {
    let mut registers: BTreeSet<String> = BTreeSet::new();
    let mut devices: BTreeSet<String> = BTreeSet::new();
    let mut labels: Vec<String> = Vec::new();
    let mut lines_of_code = 0;

    for line in lines {
        if !line.is_code() {
            continue;
        }
        lines_of_code += 1;

        if let Some(label) = line.label() {
            labels.push(label.to_string());
        }

        for cap in token::REGISTER.captures_iter(line.raw()) {
            registers.insert(cap.get(0).unwrap().as_str().to_string());
        }
        for cap in token::DEVICE.captures_iter(line.raw()) {
            devices.insert(cap.get(0).unwrap().as_str().to_string());
        }
    }

    ValidationStats {
        lines: lines.len(),
        lines_of_code,
        bytes: src.len(),
        registers_used: registers.into_iter().collect(),
        devices_used: devices.into_iter().collect(),
        labels_defined: labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::classify_all;

    #[test]
    fn counts_and_sets() {
        let src = "start:\nmove r1 0\nadd r1 r1 1 # uses r1\nl r0 d0 Setting\n\n# comment\n";
        let lines = classify_all(src);
        let stats = gather(src, &lines);

        assert_eq!(stats.lines, 7);
        assert_eq!(stats.lines_of_code, 4);
        assert_eq!(stats.bytes, src.len());
        assert_eq!(stats.registers_used, vec!["r0", "r1"]);
        assert_eq!(stats.devices_used, vec!["d0"]);
        assert_eq!(stats.labels_defined, vec!["start"]);
    }

    #[test]
    fn label_order_preserved() {
        let src = "b:\na:\nc:";
        let lines = classify_all(src);
        let stats = gather(src, &lines);
        assert_eq!(stats.labels_defined, vec!["b", "a", "c"]);
    }
}
