//! Line-oriented static validator for IC10 logic chip programs.
//!
//! One validation call takes the source text and returns a value; the
//! engine holds no state between calls and performs no I/O. The five
//! checkers are independent of one another, so issue order is only
//! guaranteed within a checker and within a severity.

pub mod checks;
pub mod error;
pub mod line;
pub mod report;
pub mod stats;
pub mod symbols;
pub mod token;

use arch::limits::Limits;
use report::ValidationResult;

/// The validation engine. Limits are injected configuration; a strict
/// grammar parser could be wired in as a cross-check later, but the
/// capability flag only ever feeds the report.
#[derive(Debug, Clone)]
pub struct Validator {
    limits: Limits,
}

impl Validator {
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// No grammar-based parser is shipped; the line-oriented checks
    /// are always what runs.
    pub fn parser_available(&self) -> bool {
        false
    }

    pub fn validate(&self, src: &str) -> ValidationResult {
        let lines = line::classify_all(src);
        let stats = stats::gather(src, &lines);
        let issues = checks::run_all(src, &lines, &self.limits);
        ValidationResult::build(stats, issues, self.parser_available())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
