use indexmap::{IndexMap, IndexSet};

use crate::line::Line;
use crate::token;

/// Names a branch target may legally resolve to, collected in one pass
/// before any resolution happens. The first definition of a name wins.
#[derive(Debug, Default)]
pub struct Symbols {
    labels: IndexMap<String, usize>,
    aliases: IndexMap<String, String>,
    defines: IndexSet<String>,
}

impl Symbols {
    pub fn collect(lines: &[Line]) -> Self {
        let mut sym = Symbols::default();
        for line in lines {
            if let Some(label) = line.label() {
                sym.labels.entry(label.to_string()).or_insert(line.no());
            }
            if let Some(cap) = token::ALIAS.captures(line.code()) {
                sym.aliases
                    .entry(cap[1].to_string())
                    .or_insert_with(|| cap[2].to_string());
            }
            if let Some(cap) = token::DEFINE.captures(line.code()) {
                sym.defines.insert(cap[1].to_string());
            }
        }
        sym
    }

    /// Defining line of a label, 1-indexed.
    pub fn label_line(&self, name: &str) -> Option<usize> {
        self.labels.get(name).copied()
    }

    pub fn is_alias(&self, name: &str) -> bool {
        self.aliases.contains_key(name)
    }

    /// Branch targets may be labels, `define`d constants, or aliases.
    pub fn resolves(&self, name: &str) -> bool {
        self.labels.contains_key(name)
            || self.defines.contains(name)
            || self.aliases.contains_key(name)
    }
}
