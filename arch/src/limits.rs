use serde::{Deserialize, Serialize};

/// Hard resource limits the chip enforces at upload time. Kept as a
/// value so callers and tests can shrink them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    pub max_lines: usize,
    pub max_line_length: usize,
    pub max_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_lines: 128,
            max_line_length: 90,
            max_bytes: 4096,
        }
    }
}
