use std::fmt;

/// Register file of the chip: 16 numbered slots plus the return
/// address and stack pointer registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reg {
    Num(u64),
    Ra,
    Sp,
}

impl Reg {
    pub const MAX: u64 = 15;

    /// Parse `r<n>`, `ra` or `sp`. Numbered registers are accepted
    /// out of range so the operand checker can report them.
    pub fn parse(s: &str) -> Option<Reg> {
        match s {
            "ra" => Some(Reg::Ra),
            "sp" => Some(Reg::Sp),
            _ => s.strip_prefix('r')?.parse().ok().map(Reg::Num),
        }
    }

    pub fn in_range(&self) -> bool {
        match self {
            Reg::Num(n) => *n <= Self::MAX,
            Reg::Ra | Reg::Sp => true,
        }
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reg::Num(n) => write!(f, "r{}", n),
            Reg::Ra => write!(f, "ra"),
            Reg::Sp => write!(f, "sp"),
        }
    }
}

#[test]
fn test() {
    println!("{:?}", Reg::parse("r3"));
    println!("{:?}", Reg::parse("hoge"));
    assert_eq!(Reg::parse("r15"), Some(Reg::Num(15)));
    assert_eq!(Reg::parse("ra"), Some(Reg::Ra));
    assert_eq!(Reg::parse("rr0"), None);
    assert_eq!(Reg::parse("x1"), None);
    assert!(Reg::Num(15).in_range());
    assert!(!Reg::Num(16).in_range());
    assert_eq!(Reg::Num(7).to_string(), "r7");
}
