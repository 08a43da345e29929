use arch::limits::Limits;
use color_print::cformat;
use serde::Serialize;
use std::fmt;

// ----------------------------------------------------------------------------
// Issue

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Rule identifiers, kept as short stable codes on the wire so CI
/// tooling can match on them across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rule {
    #[serde(rename = "E002")]
    LineCount,
    #[serde(rename = "E003")]
    UnknownInstruction,
    #[serde(rename = "E004")]
    InvalidRegister,
    #[serde(rename = "E005")]
    InvalidDevice,
    #[serde(rename = "E006")]
    UndefinedTarget,
    #[serde(rename = "E007")]
    SizeExceeded,
    #[serde(rename = "I001")]
    SizeNearLimit,
    #[serde(rename = "W001")]
    LineTooLong,
    #[serde(rename = "W002")]
    LoopWithoutYield,
}

impl Rule {
    pub fn code(&self) -> &'static str {
        match self {
            Rule::LineCount => "E002",
            Rule::UnknownInstruction => "E003",
            Rule::InvalidRegister => "E004",
            Rule::InvalidDevice => "E005",
            Rule::UndefinedTarget => "E006",
            Rule::SizeExceeded => "E007",
            Rule::SizeNearLimit => "I001",
            Rule::LineTooLong => "W001",
            Rule::LoopWithoutYield => "W002",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single finding. Pure value record; line and column are 1-indexed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub severity: Severity,
    pub line: usize,
    pub column: Option<usize>,
    pub message: String,
    pub rule: Rule,
}

// ----------------------------------------------------------------------------
// Result

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationStats {
    pub lines: usize,
    pub lines_of_code: usize,
    pub bytes: usize,
    pub registers_used: Vec<String>,
    pub devices_used: Vec<String>,
    pub labels_defined: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub passed: bool,
    pub stats: ValidationStats,
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
    pub info: Vec<Issue>,
    pub parser_available: bool,
}

impl ValidationResult {
    /// Partition by severity; a run fails only on errors.
    pub fn build(stats: ValidationStats, issues: Vec<Issue>, parser_available: bool) -> Self {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut info = Vec::new();
        for issue in issues {
            match issue.severity {
                Severity::Error => errors.push(issue),
                Severity::Warning => warnings.push(issue),
                Severity::Info => info.push(issue),
            }
        }
        Self {
            passed: errors.is_empty(),
            stats,
            errors,
            warnings,
            info,
            parser_available,
        }
    }
}

// ----------------------------------------------------------------------------
// Pretty report

pub fn format_pretty(result: &ValidationResult, limits: &Limits) -> String {
    let mut out: Vec<String> = Vec::new();

    let status = if result.passed {
        cformat!("<green,bold>PASSED</>")
    } else {
        cformat!("<red,bold>FAILED</>")
    };
    out.push(format!("Validation: {}", status));
    out.push(String::new());

    let stats = &result.stats;
    out.push(cformat!("<bold>Statistics:</>"));
    out.push(format!("  Lines: {} / {}", stats.lines, limits.max_lines));
    out.push(format!("  Lines of code: {}", stats.lines_of_code));
    out.push(format!("  Size: {} / {} bytes", stats.bytes, limits.max_bytes));
    out.push(format!("  Registers: {}", join_or_none(&stats.registers_used)));
    out.push(format!("  Devices: {}", join_or_none(&stats.devices_used)));
    out.push(format!("  Labels: {}", join_or_none(&stats.labels_defined)));
    out.push(String::new());

    section(&mut out, cformat!("<red,bold>Errors:</>"), &result.errors);
    section(&mut out, cformat!("<yellow,bold>Warnings:</>"), &result.warnings);
    section(&mut out, cformat!("<blue,bold>Info:</>"), &result.info);

    if !result.parser_available {
        out.push(cformat!(
            "<dim>Note: strict parser not available, using line-oriented checks</>"
        ));
    }

    out.join("\n")
}

fn section(out: &mut Vec<String>, heading: String, issues: &[Issue]) {
    if issues.is_empty() {
        return;
    }
    out.push(heading);
    for issue in issues {
        let loc = match issue.column {
            Some(col) => format!("Line {}:{}", issue.line, col),
            None => format!("Line {}", issue.line),
        };
        out.push(format!("  [{}] {}: {}", issue.rule, loc, issue.message));
    }
    out.push(String::new());
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}
