use arch::limits::Limits;
use ic10lint::report::{Rule, ValidationResult};
use ic10lint::Validator;

fn validate(src: &str) -> ValidationResult {
    Validator::new().validate(src)
}

fn rules(issues: &[ic10lint::report::Issue]) -> Vec<Rule> {
    issues.iter().map(|i| i.rule).collect()
}

// ----------------------------------------------------------------------------
// Pass / fail

#[test]
fn clean_program_passes() {
    let result = validate("start:\nmove r0 0\nloop:\nadd r0 r0 1\nyield\nj loop\n");
    assert!(result.passed);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
    assert!(result.info.is_empty());
    assert!(!result.parser_available);
}

#[test]
fn passed_iff_no_errors() {
    // A busy loop warns but still passes.
    let result = validate("loop:\nadd r0 r0 1\nj loop");
    assert!(result.errors.is_empty());
    assert!(!result.warnings.is_empty());
    assert!(result.passed);

    // A single error fails regardless of anything else.
    let result = validate("frobnicate r0");
    assert!(!result.passed);
}

#[test]
fn idempotent() {
    let src = "loop:\nfrobnicate r16 d9\nj loop # busy";
    let validator = Validator::new();
    assert_eq!(validator.validate(src), validator.validate(src));
}

// ----------------------------------------------------------------------------
// Constraints

#[test]
fn line_count_limit_is_exact() {
    let limits = Limits {
        max_lines: 4,
        ..Limits::default()
    };
    let validator = Validator::with_limits(limits);

    let result = validator.validate("yield\nyield\nyield\nyield");
    assert!(!rules(&result.errors).contains(&Rule::LineCount));

    let result = validator.validate("yield\nyield\nyield\nyield\nyield");
    let e002: Vec<_> = result
        .errors
        .iter()
        .filter(|i| i.rule == Rule::LineCount)
        .collect();
    assert_eq!(e002.len(), 1);
    assert_eq!(e002[0].line, 5);
    assert_eq!(e002[0].message, "Line count (5) exceeds maximum (4)");
}

#[test]
fn long_lines_warn_per_line() {
    let limits = Limits {
        max_line_length: 10,
        ..Limits::default()
    };
    let validator = Validator::with_limits(limits);
    let result = validator.validate("move r0 12345\nyield\nmove r1 67890\n");
    let w001: Vec<_> = result
        .warnings
        .iter()
        .filter(|i| i.rule == Rule::LineTooLong)
        .collect();
    assert_eq!(w001.len(), 2);
    assert_eq!(w001[0].line, 1);
    assert_eq!(w001[0].column, Some(11));
    assert_eq!(w001[1].line, 3);
    assert!(result.passed);
}

#[test]
fn byte_size_escalates() {
    let limits = Limits {
        max_bytes: 100,
        ..Limits::default()
    };
    let validator = Validator::with_limits(limits);

    // 19 lines of "yield\n" = 114 bytes, over the cap.
    let over = "yield\n".repeat(19);
    let result = validator.validate(&over);
    assert!(!result.passed);
    assert_eq!(rules(&result.errors), vec![Rule::SizeExceeded]);
    assert_eq!(result.errors[0].line, 1);

    // 16 lines = 96 bytes, past 90% but under the cap.
    let near = "yield\n".repeat(16);
    let result = validator.validate(&near);
    assert!(result.passed);
    assert_eq!(rules(&result.info), vec![Rule::SizeNearLimit]);

    // 10 lines = 60 bytes, comfortably under.
    let fine = "yield\n".repeat(10);
    let result = validator.validate(&fine);
    assert!(result.info.is_empty());
}

// ----------------------------------------------------------------------------
// Syntax

#[test]
fn unknown_instruction() {
    let result = validate("frobnicate r0 r1");
    assert_eq!(rules(&result.errors), vec![Rule::UnknownInstruction]);
    assert_eq!(result.errors[0].line, 1);
    assert_eq!(result.errors[0].column, Some(1));
    assert_eq!(result.errors[0].message, "Unknown instruction 'frobnicate'");
}

#[test]
fn unknown_instruction_keeps_case() {
    let result = validate("FROBNICATE r0");
    assert_eq!(result.errors[0].message, "Unknown instruction 'FROBNICATE'");
}

#[test]
fn mnemonics_are_case_insensitive() {
    let result = validate("ADD r0 r0 1\nYield");
    assert!(result.errors.is_empty());
}

#[test]
fn label_only_line_is_valid() {
    let result = validate("start:\nyield");
    assert!(result.passed);
}

#[test]
fn labeled_instruction_checked_past_label() {
    let result = validate("start: frobnicate r0");
    assert_eq!(rules(&result.errors), vec![Rule::UnknownInstruction]);
}

#[test]
fn comments_are_ignored() {
    let result = validate("# frobnicate in a comment\n// another one\nyield # trailing\n");
    assert!(result.passed);
    assert!(result.errors.is_empty());
}

// ----------------------------------------------------------------------------
// Operand ranges

#[test]
fn register_out_of_range() {
    let result = validate("move r16 1");
    assert_eq!(rules(&result.errors), vec![Rule::InvalidRegister]);
    assert_eq!(result.errors[0].line, 1);
    assert_eq!(result.errors[0].column, Some(6));
    assert_eq!(
        result.errors[0].message,
        "Invalid register 'r16' (valid: r0-r15, ra, sp)"
    );
}

#[test]
fn register_boundary_is_valid() {
    let result = validate("move r15 1\nmove r0 ra\npush sp");
    assert!(result
        .errors
        .iter()
        .all(|i| i.rule != Rule::InvalidRegister));
}

#[test]
fn device_out_of_range() {
    let result = validate("l r0 d6 Setting");
    assert_eq!(rules(&result.errors), vec![Rule::InvalidDevice]);
    assert_eq!(result.errors[0].column, Some(6));
    assert_eq!(
        result.errors[0].message,
        "Invalid device 'd6' (valid: d0-d5, db, dr)"
    );
}

#[test]
fn each_bad_token_reported() {
    let result = validate("add r16 r17 r18");
    let e004: Vec<_> = result
        .errors
        .iter()
        .filter(|i| i.rule == Rule::InvalidRegister)
        .collect();
    assert_eq!(e004.len(), 3);
    assert_eq!(e004[0].column, Some(5));
    assert_eq!(e004[1].column, Some(9));
    assert_eq!(e004[2].column, Some(13));
}

// ----------------------------------------------------------------------------
// Branch resolution

#[test]
fn undefined_branch_target() {
    let result = validate("j nowhere");
    assert_eq!(rules(&result.errors), vec![Rule::UndefinedTarget]);
    assert_eq!(result.errors[0].column, None);
    assert_eq!(
        result.errors[0].message,
        "Undefined branch target 'nowhere'"
    );
}

#[test]
fn defined_targets_resolve() {
    let result = validate("loop:\nyield\nj loop\nbeqz r0, loop");
    assert!(result.errors.is_empty());
}

#[test]
fn register_target_never_flagged() {
    let result = validate("jr r3\nj ra\njal sp");
    assert!(result.errors.is_empty());
}

#[test]
fn relative_jumps_skipped() {
    let result = validate("jr 2\njr -3\nj 0");
    assert!(result.errors.is_empty());
}

#[test]
fn indirect_references_skipped() {
    let result = validate("j rr0\nj drPump");
    assert!(result.errors.is_empty());
}

#[test]
fn define_usable_as_target() {
    let result = validate("define HOME 4\nj HOME");
    assert!(result.errors.is_empty());
}

#[test]
fn alias_usable_as_target() {
    let result = validate("alias entry d0\nj entry");
    assert!(result.errors.is_empty());
}

#[test]
fn device_branch_alias_suppressed() {
    // The captured target is the device alias, not the label; the
    // resolver stays quiet even though `missing` is never defined.
    let result = validate("alias sensor d0\nbdns sensor missing");
    assert!(result.errors.is_empty());
}

#[test]
fn device_branch_with_comma_checks_label() {
    let result = validate("alias sensor d0\nbdns sensor, missing");
    assert_eq!(rules(&result.errors), vec![Rule::UndefinedTarget]);
    assert_eq!(
        result.errors[0].message,
        "Undefined branch target 'missing'"
    );
}

// ----------------------------------------------------------------------------
// Loop safety

#[test]
fn busy_loop_warns_once() {
    let result = validate("loop:\nadd r0 r0 1\nj loop");
    assert_eq!(rules(&result.warnings), vec![Rule::LoopWithoutYield]);
    assert_eq!(result.warnings[0].line, 3);
    assert_eq!(
        result.warnings[0].message,
        "Loop to 'loop' (line 1) may lack yield/sleep"
    );
}

#[test]
fn yield_anywhere_in_span_clears_warning() {
    let result = validate("loop:\nadd r0 r0 1\nyield\nj loop");
    assert!(result.warnings.is_empty());

    let result = validate("loop:\nyield\nadd r0 r0 1\nj loop");
    assert!(result.warnings.is_empty());
}

#[test]
fn sleep_counts_as_yielding() {
    let result = validate("loop:\nsleep 1\nj loop");
    assert!(result.warnings.is_empty());
}

#[test]
fn forward_jump_not_a_loop() {
    let result = validate("j end\nadd r0 r0 1\nend:");
    assert!(result.warnings.is_empty());
}

#[test]
fn conditional_branches_ignored() {
    let result = validate("loop:\nadd r0 r0 1\nbltz r0 loop");
    assert!(result.warnings.is_empty());
}

// ----------------------------------------------------------------------------
// Statistics

#[test]
fn stats_invariants() {
    let src = "start:\nmove r1 0\nadd r1 r1 1\nl r0 d0 Setting\ns d0 On 1\n\n# note\n";
    let result = validate(src);
    let stats = &result.stats;

    assert!(stats.lines_of_code <= stats.lines);
    assert_eq!(stats.bytes, src.len());
    assert_eq!(stats.registers_used, vec!["r0", "r1"]);
    assert_eq!(stats.devices_used, vec!["d0"]);
    assert_eq!(stats.labels_defined, vec!["start"]);

    // Sorted, no duplicates, however often a token appears.
    let mut sorted = stats.registers_used.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted, stats.registers_used);
}

#[test]
fn trailing_newline_counts_as_line() {
    let result = validate("yield\n");
    assert_eq!(result.stats.lines, 2);
    assert_eq!(result.stats.lines_of_code, 1);
}

// ----------------------------------------------------------------------------
// Wire format

#[test]
fn json_field_names_are_stable() {
    let result = validate("frobnicate r0\nloop:\nj loop");
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["passed"], false);
    assert_eq!(json["parser_available"], false);
    assert_eq!(json["errors"][0]["rule"], "E003");
    assert_eq!(json["errors"][0]["severity"], "error");
    assert_eq!(json["errors"][0]["line"], 1);
    assert_eq!(json["errors"][0]["column"], 1);
    assert_eq!(json["warnings"][0]["rule"], "W002");
    assert!(json["stats"]["lines"].is_number());
    assert!(json["stats"]["registers_used"].is_array());
}

#[test]
fn limits_deserialize_from_config() {
    let limits: Limits =
        serde_json::from_str(r#"{"max_lines":4,"max_line_length":20,"max_bytes":64}"#).unwrap();
    assert_eq!(limits.max_lines, 4);
    let result = Validator::with_limits(limits).validate("a:\nb:\nc:\nd:\ne:");
    assert!(rules(&result.errors).contains(&Rule::LineCount));
}
