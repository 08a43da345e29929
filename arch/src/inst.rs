use once_cell::sync::Lazy;
use std::collections::HashMap;
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Math,
    Logic,
    Batch,
    Comparison,
    Branching,
    Bitwise,
    Stack,
    Utility,
}

const MATH: &[&str] = &[
    "add", "sub", "mul", "div", "mod", "abs", "ceil", "floor", "round", "trunc", "sqrt", "exp",
    "log", "pow", "sin", "cos", "tan", "asin", "acos", "atan", "atan2", "min", "max", "rand",
];

const LOGIC: &[&str] = &["l", "s", "ls", "ss", "lr", "sr", "ld", "sd"];

const BATCH: &[&str] = &["lb", "sb", "lbn", "sbn", "lbs", "sbs", "lbns", "sbns"];

const COMPARISON: &[&str] = &[
    "seq", "sne", "sgt", "slt", "sge", "sle", "seqz", "snez", "sgtz", "sltz", "sgez", "slez",
    "sap", "sna", "sapz", "snaz", "sdse", "sdns", "select",
];

const BRANCHING: &[&str] = &[
    "j", "jr", "jal", "beq", "bne", "bgt", "blt", "bge", "ble", "beqz", "bnez", "bgtz", "bltz",
    "bgez", "blez", "beqal", "bneal", "bgtal", "bltal", "bgeal", "bleal", "beqzal", "bnezal",
    "bgtzal", "bltzal", "bgezal", "blezal", "bap", "bna", "bapz", "bnaz", "bapal", "bnaal",
    "bdse", "bdns", "bdseal", "bdnsal", "brap", "brna", "breq", "brne", "brgt", "brlt", "brge",
    "brle", "breqz", "brnez", "brgtz", "brltz", "brgez", "brlez", "brdse", "brdns",
];

const BITWISE: &[&str] = &["and", "or", "xor", "nor", "not", "sll", "srl", "sla", "sra"];

const STACK: &[&str] = &["push", "pop", "peek", "poke", "get", "put", "getd", "putd"];

const UTILITY: &[&str] = &["alias", "define", "move", "mv", "yield", "sleep", "hcf", "label"];

static CATALOG: Lazy<HashMap<&'static str, Category>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (category, names) in [
        (Category::Math, MATH),
        (Category::Logic, LOGIC),
        (Category::Batch, BATCH),
        (Category::Comparison, COMPARISON),
        (Category::Branching, BRANCHING),
        (Category::Bitwise, BITWISE),
        (Category::Stack, STACK),
        (Category::Utility, UTILITY),
    ] {
        for name in names {
            map.insert(*name, category);
        }
    }
    map
});

/// Look up a mnemonic, case-insensitively.
pub fn lookup(mnemonic: &str) -> Option<Category> {
    CATALOG
        .get(mnemonic.to_ascii_lowercase().as_str())
        .copied()
}

/// Branch forms that test a device's network state, so their first
/// operand is a device rather than a label.
pub const DEVICE_BRANCHES: &[&str] = &["bdns", "bdse", "brdns", "brdse", "bdseal", "bdnsal"];

/// Instructions that give up the rest of the current tick.
pub const YIELDS: &[&str] = &["yield", "sleep"];

pub fn is_device_branch(mnemonic: &str) -> bool {
    DEVICE_BRANCHES.contains(&mnemonic)
}

#[test]
fn test() {
    println!("{:?}", lookup("add"));
    println!("{:?}", lookup("BDNS"));
    assert_eq!(lookup("add"), Some(Category::Math));
    assert_eq!(lookup("J"), Some(Category::Branching));
    assert_eq!(lookup("frobnicate"), None);
    assert!(is_device_branch("bdns"));
    assert!(!is_device_branch("beq"));
    assert_eq!(Category::Batch.to_string(), "batch");
}
